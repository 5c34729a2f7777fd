//! Binding submitted visit forms onto visit records.
//!
//! [`VisitForm`] lists the only fields a submitter may set. Anything else in
//! the request body (an `id`, a `status`, a `pet_id`) is dropped during
//! deserialization and never reaches the record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use crate::models::{Visit, DATE_FORMAT};
use crate::repository::VetDirectory;
use crate::resolver::{ResolveError, VetResolver};
use crate::validation::{BindingResult, TYPE_MISMATCH};

/// Allow-listed visit form fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VisitForm {
    /// Free-text description
    pub description: Option<String>,
    /// Visit date as `YYYY-MM-DD`
    pub date: Option<String>,
    /// Vet display name
    pub vet: Option<String>,
}

impl VisitForm {
    pub const DATE: &'static str = "date";
    pub const VET: &'static str = "vet";

    /// Form pre-filled from an existing visit, for rendering.
    pub fn from_visit<D: VetDirectory + ?Sized>(visit: &Visit, resolver: &VetResolver<'_, D>) -> Self {
        Self {
            description: Some(visit.description.clone()),
            date: Some(visit.date.format(DATE_FORMAT).to_string()),
            vet: visit.vet.as_ref().map(|vet| resolver.format(vet)),
        }
    }
}

/// Copy the allow-listed fields of `form` onto `visit`.
///
/// Conversion failures are recorded as `typeMismatch` errors and leave the
/// field on `visit` untouched. Only a failing vet directory is returned as
/// `Err`.
pub fn bind<D: VetDirectory + ?Sized>(
    form: &VisitForm,
    visit: &mut Visit,
    resolver: &VetResolver<'_, D>,
) -> DbResult<BindingResult> {
    let mut result = BindingResult::new();

    visit.description = form.description.clone().unwrap_or_default();

    if let Some(raw) = non_blank(form.date.as_deref()) {
        match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => visit.date = date,
            Err(_) => result.reject(
                VisitForm::DATE,
                TYPE_MISMATCH,
                format!("invalid date: {}", raw),
            ),
        }
    }

    if let Some(name) = non_blank(form.vet.as_deref()) {
        match resolver.parse(name) {
            Ok(vet) => visit.vet = Some(vet),
            Err(ResolveError::Database(e)) => return Err(e),
            Err(e) => result.reject(VisitForm::VET, TYPE_MISMATCH, e.to_string()),
        }
    }

    Ok(result)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::Vet;

    fn setup_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.load_sample_data().unwrap();
        db
    }

    fn form(description: &str, date: Option<&str>, vet: Option<&str>) -> VisitForm {
        VisitForm {
            description: Some(description.into()),
            date: date.map(Into::into),
            vet: vet.map(Into::into),
        }
    }

    #[test]
    fn test_bind_all_fields() {
        let db = setup_db();
        let resolver = VetResolver::new(&db);
        let mut visit = Visit::new();

        let result = bind(
            &form("rabies shot", Some("2024-03-01"), Some("Helen")),
            &mut visit,
            &resolver,
        )
        .unwrap();

        assert!(!result.has_errors());
        assert_eq!(visit.description, "rabies shot");
        assert_eq!(visit.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(visit.vet.as_ref().map(|v| v.id), Some(2));
    }

    #[test]
    fn test_bind_unknown_vet_keeps_text() {
        let db = setup_db();
        let resolver = VetResolver::new(&db);
        let mut visit = Visit::new();

        let result = bind(&form("checkup", None, Some("Gregory")), &mut visit, &resolver).unwrap();

        let errors: Vec<_> = result.field_errors("vet").collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, TYPE_MISMATCH);
        assert!(errors[0].message.contains("Gregory"));
        assert!(visit.vet.is_none());
    }

    #[test]
    fn test_bind_bad_date_keeps_previous() {
        let db = setup_db();
        let resolver = VetResolver::new(&db);
        let mut visit = Visit::new();
        let before = visit.date;

        let result = bind(&form("checkup", Some("01/03/2024"), None), &mut visit, &resolver).unwrap();

        assert!(result.has_field_error("date"));
        assert_eq!(visit.date, before);
    }

    #[test]
    fn test_blank_vet_leaves_existing_vet() {
        let db = setup_db();
        let resolver = VetResolver::new(&db);
        let mut visit = Visit::new();
        visit.vet = Some(Vet::new(1, "James".into(), "Carter".into()));

        let result = bind(&form("checkup", None, Some("  ")), &mut visit, &resolver).unwrap();

        assert!(!result.has_errors());
        assert_eq!(visit.vet.as_ref().map(|v| v.id), Some(1));
    }

    #[test]
    fn test_missing_description_binds_empty() {
        let db = setup_db();
        let resolver = VetResolver::new(&db);
        let mut visit = Visit::new();
        visit.description = "old".into();

        bind(&VisitForm::default(), &mut visit, &resolver).unwrap();
        assert_eq!(visit.description, "");
    }

    #[test]
    fn test_disallowed_fields_are_dropped() {
        let form: VisitForm = serde_json::from_str(
            r#"{"id": 99, "status": "completed", "pet_id": 3, "description": "x"}"#,
        )
        .unwrap();
        assert_eq!(form, VisitForm { description: Some("x".into()), date: None, vet: None });
    }

    #[test]
    fn test_form_from_visit() {
        let db = setup_db();
        let resolver = VetResolver::new(&db);
        let visit = db.get_visit(3).unwrap().unwrap();

        let form = VisitForm::from_visit(&visit, &resolver);
        assert_eq!(form.description.as_deref(), Some("neutered"));
        assert_eq!(form.date.as_deref(), Some("2013-01-03"));
        assert_eq!(form.vet.as_deref(), Some("Rafael"));
    }
}
