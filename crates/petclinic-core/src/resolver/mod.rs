//! Vet name resolver.
//!
//! Visit forms submit the assigned vet by display name (first name). The
//! resolver maps that text back to a [`Vet`] and prints a vet the same way.

use crate::db::DbError;
use crate::models::Vet;
use crate::repository::VetDirectory;
use thiserror::Error;

/// Resolver errors.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("vet not found: {text}")]
    UnknownVet { text: String },

    #[error("vet name is ambiguous: {text} matches {count} vets")]
    AmbiguousVet { text: String, count: usize },
}

impl ResolveError {
    /// The submitted text that failed to resolve, if the failure was about the text.
    pub fn text(&self) -> Option<&str> {
        match self {
            ResolveError::UnknownVet { text } | ResolveError::AmbiguousVet { text, .. } => {
                Some(text)
            }
            ResolveError::Database(_) => None,
        }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;

/// Converts between a vet and its display name.
pub struct VetResolver<'a, D: VetDirectory + ?Sized> {
    directory: &'a D,
}

impl<'a, D: VetDirectory + ?Sized> VetResolver<'a, D> {
    /// Create a new resolver.
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Display name of `vet`.
    pub fn format(&self, vet: &Vet) -> String {
        vet.display_name().to_string()
    }

    /// Find the vet whose display name equals `text` exactly.
    ///
    /// Reads the directory on every call. Several vets sharing the name is
    /// reported as [`ResolveError::AmbiguousVet`] rather than picking one.
    pub fn parse(&self, text: &str) -> ResolveResult<Vet> {
        let mut matches = self
            .directory
            .all_vets()?
            .into_iter()
            .filter(|vet| vet.display_name() == text);

        let first = matches.next().ok_or_else(|| ResolveError::UnknownVet {
            text: text.to_string(),
        })?;

        let others = matches.count();
        if others > 0 {
            return Err(ResolveError::AmbiguousVet {
                text: text.to_string(),
                count: others + 1,
            });
        }

        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DbResult, Database};
    use std::cell::Cell;

    struct CountingDirectory {
        vets: Vec<Vet>,
        calls: Cell<usize>,
    }

    impl VetDirectory for CountingDirectory {
        fn all_vets(&self) -> DbResult<Vec<Vet>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.vets.clone())
        }
    }

    fn directory(names: &[&str]) -> CountingDirectory {
        CountingDirectory {
            vets: names
                .iter()
                .enumerate()
                .map(|(i, name)| Vet::new(i as i64 + 1, name.to_string(), "Smith".into()))
                .collect(),
            calls: Cell::new(0),
        }
    }

    #[test]
    fn test_format_is_first_name() {
        let dir = directory(&[]);
        let resolver = VetResolver::new(&dir);
        let vet = Vet::new(3, "Linda".into(), "Douglas".into());
        assert_eq!(resolver.format(&vet), "Linda");
    }

    #[test]
    fn test_parse_exact_match() {
        let dir = directory(&["James", "Helen", "Linda"]);
        let resolver = VetResolver::new(&dir);

        let vet = resolver.parse("Helen").unwrap();
        assert_eq!(vet.id, 2);
        assert_eq!(dir.calls.get(), 1);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let dir = directory(&["Helen"]);
        let resolver = VetResolver::new(&dir);

        for text in ["helen", "HELEN", "Helen ", " Helen", "Hel"] {
            match resolver.parse(text) {
                Err(ResolveError::UnknownVet { text: t }) => assert_eq!(t, text),
                other => panic!("expected UnknownVet for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_parse_does_not_cache() {
        let dir = directory(&["James"]);
        let resolver = VetResolver::new(&dir);

        resolver.parse("James").unwrap();
        resolver.parse("James").unwrap();
        assert_eq!(dir.calls.get(), 2);
    }

    #[test]
    fn test_parse_ambiguous() {
        let dir = directory(&["James", "Helen", "James"]);
        let resolver = VetResolver::new(&dir);

        let err = resolver.parse("James").unwrap_err();
        assert!(matches!(err, ResolveError::AmbiguousVet { count: 2, .. }));
        assert_eq!(err.text(), Some("James"));
    }

    #[test]
    fn test_parse_against_database() {
        let db = Database::open_in_memory().unwrap();
        db.load_sample_data().unwrap();
        let resolver = VetResolver::new(&db);

        let vet = resolver.parse("Rafael").unwrap();
        assert_eq!(vet.last_name, "Ortega");
        assert_eq!(vet.specialties, vec!["surgery"]);
    }
}
