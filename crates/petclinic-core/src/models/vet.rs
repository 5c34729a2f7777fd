//! Veterinarian models.

use serde::{Deserialize, Serialize};

/// A veterinarian in the clinic directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vet {
    /// Database ID
    pub id: i64,
    /// First name, also the display name used to pick a vet on a visit form
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Specialty names (e.g., "radiology", "surgery")
    #[serde(default)]
    pub specialties: Vec<String>,
}

impl Vet {
    /// Create a vet with no specialties.
    pub fn new(id: i64, first_name: String, last_name: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            specialties: Vec::new(),
        }
    }

    /// Name shown in the vet picker and submitted back by visit forms.
    pub fn display_name(&self) -> &str {
        &self.first_name
    }
}
