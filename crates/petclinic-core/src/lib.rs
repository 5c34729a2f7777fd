//! Pet Clinic Core Library
//!
//! Visit scheduling for a veterinary clinic: owners' pets accrue visits,
//! each visit is booked with a vet, and can later be edited or cancelled.
//!
//! # Architecture
//!
//! ```text
//! HTTP form ──► VisitForm (allow-listed fields)
//!                    │
//!                    ▼
//!        bind ──► VetResolver (display name → Vet)
//!                    │
//!                    ▼
//!           ValidatorRegistry ──► VisitValidator
//!                    │
//!          ┌─────────┴─────────┐
//!          ▼                   ▼
//!   errors: re-render     ok: VisitRepository::save_visit
//!                              │
//!                              ▼
//!                     redirect to /owners/{id}
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer
//! - [`models`]: Domain types (Pet, Vet, Visit, Owner)
//! - [`repository`]: Storage traits the workflow depends on
//! - [`resolver`]: Vet display name resolver
//! - [`binding`]: Form-to-visit binding
//! - [`validation`]: Visit validator and validator dispatch
//! - [`workflow`]: Create / edit / cancel visit workflow

pub mod binding;
pub mod db;
pub mod models;
pub mod repository;
pub mod resolver;
pub mod validation;
pub mod workflow;

// Re-export commonly used types
pub use binding::VisitForm;
pub use db::Database;
pub use models::{Owner, Pet, Vet, Visit, VisitStatus};
pub use repository::{PetRepository, VetDirectory, VisitRepository};
pub use resolver::{ResolveError, VetResolver};
pub use validation::{BindingResult, FieldError, Validator, ValidatorRegistry, VisitValidator};
pub use workflow::{FormView, Outcome, VisitContext, VisitWorkflow, WorkflowError};

use std::path::Path;
use std::sync::{Arc, Mutex};

// =========================================================================
// Facade Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum PetClinicError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {entity} {id}")]
    NotFound { entity: &'static str, id: i64 },
}

impl From<db::DbError> for PetClinicError {
    fn from(e: db::DbError) -> Self {
        PetClinicError::DatabaseError(e.to_string())
    }
}

impl From<WorkflowError> for PetClinicError {
    fn from(e: WorkflowError) -> Self {
        match e {
            WorkflowError::NotFound { entity, id } => PetClinicError::NotFound { entity, id },
            WorkflowError::Database(e) => e.into(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for PetClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        PetClinicError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe database wrapper shared by request handlers.
#[derive(Clone)]
pub struct PetClinic {
    db: Arc<Mutex<Database>>,
}

impl PetClinic {
    /// Open or create a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PetClinicError> {
        Ok(Self::from_database(Database::open(path)?))
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, PetClinicError> {
        Ok(Self::from_database(Database::open_in_memory()?))
    }

    pub fn from_database(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Load the sample owners, pets and vets.
    pub fn load_sample_data(&self) -> Result<(), PetClinicError> {
        let db = self.db.lock()?;
        db.load_sample_data()?;
        Ok(())
    }

    /// Run `f` with exclusive access to the database.
    pub fn with_database<R>(
        &self,
        f: impl FnOnce(&Database) -> R,
    ) -> Result<R, PetClinicError> {
        let db = self.db.lock()?;
        Ok(f(&db))
    }

    // =========================================================================
    // Visit Workflow
    // =========================================================================

    /// Pet, visit history, vet list and a fresh visit for `pet_id`.
    pub fn prepare_visit(&self, pet_id: i64) -> Result<VisitContext, PetClinicError> {
        let db = self.db.lock()?;
        Ok(VisitWorkflow::new(&*db).prepare(pet_id)?)
    }

    pub fn new_visit_form(&self, pet_id: i64) -> Result<Outcome, PetClinicError> {
        let db = self.db.lock()?;
        Ok(VisitWorkflow::new(&*db).new_visit_form(pet_id)?)
    }

    pub fn submit_new_visit(
        &self,
        pet_id: i64,
        form: VisitForm,
    ) -> Result<Outcome, PetClinicError> {
        let db = self.db.lock()?;
        Ok(VisitWorkflow::new(&*db).submit_new_visit(pet_id, form)?)
    }

    pub fn edit_visit_form(&self, pet_id: i64, visit_id: i64) -> Result<Outcome, PetClinicError> {
        let db = self.db.lock()?;
        Ok(VisitWorkflow::new(&*db).edit_visit_form(pet_id, visit_id)?)
    }

    pub fn submit_visit_edit(
        &self,
        pet_id: i64,
        visit_id: i64,
        form: VisitForm,
    ) -> Result<Outcome, PetClinicError> {
        let db = self.db.lock()?;
        Ok(VisitWorkflow::new(&*db).submit_visit_edit(pet_id, visit_id, form)?)
    }

    pub fn cancel_visit(&self, pet_id: i64, visit_id: i64) -> Result<Outcome, PetClinicError> {
        let db = self.db.lock()?;
        Ok(VisitWorkflow::new(&*db).cancel_visit(pet_id, visit_id)?)
    }
}
