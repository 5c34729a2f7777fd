//! Visit models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::vet::Vet;

/// Date format used in storage and on forms (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Visit lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    /// Booked, not yet happened
    #[default]
    Scheduled,
    /// Called off before it happened
    Cancelled,
    /// Took place
    Completed,
}

impl VisitStatus {
    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::Scheduled => "scheduled",
            VisitStatus::Cancelled => "cancelled",
            VisitStatus::Completed => "completed",
        }
    }

    /// Parse the storage representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(VisitStatus::Scheduled),
            "cancelled" => Some(VisitStatus::Cancelled),
            "completed" => Some(VisitStatus::Completed),
            _ => None,
        }
    }

    /// Cancelled and completed visits never change status again.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, VisitStatus::Scheduled)
    }
}

/// A scheduled or past veterinary visit for one pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    /// Database ID - `None` until first saved
    pub id: Option<i64>,
    /// Owning pet ID
    pub pet_id: Option<i64>,
    /// Free-text reason/notes
    pub description: String,
    /// Visit date
    pub date: NaiveDate,
    /// Lifecycle status
    pub status: VisitStatus,
    /// Assigned veterinarian
    pub vet: Option<Vet>,
}

impl Default for Visit {
    fn default() -> Self {
        Self::new()
    }
}

impl Visit {
    /// Create an unsaved visit dated today.
    pub fn new() -> Self {
        Self {
            id: None,
            pet_id: None,
            description: String::new(),
            date: chrono::Local::now().date_naive(),
            status: VisitStatus::Scheduled,
            vet: None,
        }
    }

    /// Check if this visit has never been persisted.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Mark the visit cancelled.
    ///
    /// Returns `true` if the status changed. Cancelling a cancelled visit is a
    /// no-op; a completed visit stays completed.
    pub fn cancel(&mut self) -> bool {
        self.transition(VisitStatus::Cancelled)
    }

    /// Mark the visit completed. Returns `true` if the status changed.
    pub fn complete(&mut self) -> bool {
        self.transition(VisitStatus::Completed)
    }

    fn transition(&mut self, to: VisitStatus) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = to;
        true
    }
}
