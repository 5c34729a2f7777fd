//! Owner models.

use serde::{Deserialize, Serialize};

/// A pet owner. Only referenced by the visit workflow as a redirect target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl Owner {
    /// Path of the owner detail page.
    pub fn detail_path(owner_id: i64) -> String {
        format!("/owners/{}", owner_id)
    }
}
