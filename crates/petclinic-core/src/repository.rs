//! Repository seams between the visit workflow and storage.
//!
//! [`Database`] implements every trait here; tests and other storage
//! backends can supply their own.

use crate::db::{Database, DbResult};
use crate::models::{Pet, Vet, Visit};

/// Pet lookup.
pub trait PetRepository {
    /// Find a pet by ID. The returned pet carries no visit history.
    fn find_pet_by_id(&self, pet_id: i64) -> DbResult<Option<Pet>>;
}

/// Visit persistence plus the vet list visit forms pick from.
pub trait VisitRepository {
    /// Find a visit by ID.
    fn find_visit_by_id(&self, visit_id: i64) -> DbResult<Option<Visit>>;

    /// All visits of a pet, in the repository's natural order.
    fn find_visits_by_pet_id(&self, pet_id: i64) -> DbResult<Vec<Visit>>;

    /// Every known vet.
    fn find_vets(&self) -> DbResult<Vec<Vet>>;

    /// Insert a new visit (assigning its ID) or update a persisted one.
    fn save_visit(&self, visit: &mut Visit) -> DbResult<()>;
}

/// Read-only vet lookup used by the vet name resolver.
pub trait VetDirectory {
    fn all_vets(&self) -> DbResult<Vec<Vet>>;
}

impl<T: VisitRepository + ?Sized> VetDirectory for T {
    fn all_vets(&self) -> DbResult<Vec<Vet>> {
        self.find_vets()
    }
}

impl PetRepository for Database {
    fn find_pet_by_id(&self, pet_id: i64) -> DbResult<Option<Pet>> {
        self.get_pet(pet_id)
    }
}

impl VisitRepository for Database {
    fn find_visit_by_id(&self, visit_id: i64) -> DbResult<Option<Visit>> {
        self.get_visit(visit_id)
    }

    fn find_visits_by_pet_id(&self, pet_id: i64) -> DbResult<Vec<Visit>> {
        self.list_visits_for_pet(pet_id)
    }

    fn find_vets(&self) -> DbResult<Vec<Vet>> {
        self.list_vets()
    }

    fn save_visit(&self, visit: &mut Visit) -> DbResult<()> {
        Database::save_visit(self, visit)
    }
}
