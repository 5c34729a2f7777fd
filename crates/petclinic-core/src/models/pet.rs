//! Pet models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::visit::Visit;

/// A pet and the visit history loaded for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    /// Database ID
    pub id: i64,
    /// Pet name
    pub name: String,
    /// Date of birth
    pub birth_date: Option<NaiveDate>,
    /// Species/type (e.g., "cat", "dog", "hamster")
    pub pet_type: Option<String>,
    /// Owning owner ID
    pub owner_id: i64,
    /// Visit history, in the order the visit repository returned it
    #[serde(default)]
    pub visits: Vec<Visit>,
}

impl Pet {
    /// Create a pet with required fields and no visit history.
    pub fn new(id: i64, name: String, owner_id: i64) -> Self {
        Self {
            id,
            name,
            birth_date: None,
            pet_type: None,
            owner_id,
            visits: Vec::new(),
        }
    }

    /// Replace the loaded visit history.
    pub fn set_visits(&mut self, visits: Vec<Visit>) {
        self.visits = visits;
    }

    /// Create a fresh, unsaved visit for this pet.
    ///
    /// The visit is associated with the pet but not added to `visits`; the
    /// history only ever holds what storage returned.
    pub fn new_visit(&self) -> Visit {
        let mut visit = Visit::new();
        visit.pet_id = Some(self.id);
        visit
    }

    /// Whether the given visit is owned by this pet.
    pub fn owns(&self, visit: &Visit) -> bool {
        visit.pet_id == Some(self.id)
    }
}
