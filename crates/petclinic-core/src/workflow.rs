//! Visit workflow: create, edit and cancel a pet's visits.
//!
//! Every operation starts from [`VisitWorkflow::prepare`], which loads the
//! pet with its visit history and a fresh visit for it, and ends in an
//! [`Outcome`]: either a form to render (possibly with field errors) or a
//! redirect to the owner's page.

use serde::Serialize;
use thiserror::Error;

use crate::binding::{bind, VisitForm};
use crate::db::DbError;
use crate::models::{Owner, Pet, Vet, Visit};
use crate::repository::{PetRepository, VisitRepository};
use crate::resolver::VetResolver;
use crate::validation::{BindingResult, ValidatorRegistry};

/// Name of the form view shared by create and edit.
pub const VISIT_FORM_VIEW: &str = "pets/createOrUpdateVisitForm";

/// Workflow errors. Validation failures are not errors; see [`Outcome::Render`].
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// What every visit request works against.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VisitContext {
    /// The pet, with its stored visit history attached
    pub pet: Pet,
    /// A fresh, unsaved visit for the pet
    pub visit: Visit,
    /// Vets the form can pick from
    pub vets: Vec<Vet>,
}

/// A visit form ready to render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormView {
    pub view: &'static str,
    pub pet: Pet,
    pub visit: Visit,
    pub vets: Vec<Vet>,
    /// Field values as submitted, or as stored for a fresh render
    pub form: VisitForm,
    pub errors: BindingResult,
}

/// Result of a workflow step.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Render(FormView),
    Redirect { location: String },
}

impl Outcome {
    fn redirect_to_owner(pet: &Pet) -> Self {
        Outcome::Redirect {
            location: Owner::detail_path(pet.owner_id),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Outcome::Redirect { .. })
    }
}

/// Orchestrates visit requests over a store. Holds no state of its own.
pub struct VisitWorkflow<'a, S: ?Sized> {
    store: &'a S,
    validators: ValidatorRegistry,
}

impl<'a, S> VisitWorkflow<'a, S>
where
    S: PetRepository + VisitRepository + ?Sized,
{
    /// Create a workflow with the default validators.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            validators: ValidatorRegistry::with_defaults(),
        }
    }

    /// Load the pet, its visits and the vet list, plus a fresh visit for the pet.
    pub fn prepare(&self, pet_id: i64) -> WorkflowResult<VisitContext> {
        let mut pet = self
            .store
            .find_pet_by_id(pet_id)?
            .ok_or(WorkflowError::NotFound { entity: "pet", id: pet_id })?;
        pet.set_visits(self.store.find_visits_by_pet_id(pet_id)?);

        let vets = self.store.find_vets()?;
        let visit = pet.new_visit();

        Ok(VisitContext { pet, visit, vets })
    }

    /// Show an empty visit form for the pet.
    pub fn new_visit_form(&self, pet_id: i64) -> WorkflowResult<Outcome> {
        let ctx = self.prepare(pet_id)?;
        let form = VisitForm::from_visit(&ctx.visit, &self.resolver());
        Ok(render(ctx, form, BindingResult::new()))
    }

    /// Create a visit from a submitted form.
    pub fn submit_new_visit(&self, pet_id: i64, form: VisitForm) -> WorkflowResult<Outcome> {
        let mut ctx = self.prepare(pet_id)?;
        let mut visit = ctx.visit.clone();

        let mut errors = bind(&form, &mut visit, &self.resolver())?;
        self.validators.validate_into(&visit, &mut errors);

        if errors.has_errors() {
            tracing::debug!("new visit for pet {} rejected: {:?}", pet_id, errors.errors);
            ctx.visit = visit;
            return Ok(render(ctx, form, errors));
        }

        self.store.save_visit(&mut visit)?;
        tracing::info!("created visit {:?} for pet {}", visit.id, pet_id);
        Ok(Outcome::redirect_to_owner(&ctx.pet))
    }

    /// Show the form for an existing visit of the pet.
    pub fn edit_visit_form(&self, pet_id: i64, visit_id: i64) -> WorkflowResult<Outcome> {
        let mut ctx = self.prepare(pet_id)?;
        ctx.visit = self.load_owned_visit(&ctx.pet, visit_id)?;
        let form = VisitForm::from_visit(&ctx.visit, &self.resolver());
        Ok(render(ctx, form, BindingResult::new()))
    }

    /// Update an existing visit from a submitted form.
    ///
    /// The stored identity always comes from `visit_id`, never from the body.
    pub fn submit_visit_edit(
        &self,
        pet_id: i64,
        visit_id: i64,
        form: VisitForm,
    ) -> WorkflowResult<Outcome> {
        let mut ctx = self.prepare(pet_id)?;
        let mut visit = self.load_owned_visit(&ctx.pet, visit_id)?;

        let mut errors = bind(&form, &mut visit, &self.resolver())?;
        visit.id = Some(visit_id);
        self.validators.validate_into(&visit, &mut errors);

        if errors.has_errors() {
            tracing::debug!("edit of visit {} rejected: {:?}", visit_id, errors.errors);
            ctx.visit = visit;
            return Ok(render(ctx, form, errors));
        }

        self.store.save_visit(&mut visit)?;
        tracing::info!("updated visit {} for pet {}", visit_id, pet_id);
        Ok(Outcome::redirect_to_owner(&ctx.pet))
    }

    /// Cancel a visit. A missing visit is tolerated; the redirect is the same.
    pub fn cancel_visit(&self, pet_id: i64, visit_id: i64) -> WorkflowResult<Outcome> {
        let ctx = self.prepare(pet_id)?;

        match self.store.find_visit_by_id(visit_id)? {
            Some(mut visit) if ctx.pet.owns(&visit) => {
                if visit.cancel() {
                    self.store.save_visit(&mut visit)?;
                    tracing::info!("cancelled visit {} for pet {}", visit_id, pet_id);
                } else {
                    tracing::warn!(
                        "visit {} is already {}, not cancelling",
                        visit_id,
                        visit.status.as_str()
                    );
                }
            }
            Some(_) => {
                tracing::warn!("visit {} does not belong to pet {}, ignoring cancel", visit_id, pet_id);
            }
            None => {
                tracing::debug!("cancel of unknown visit {} ignored", visit_id);
            }
        }

        Ok(Outcome::redirect_to_owner(&ctx.pet))
    }

    fn load_owned_visit(&self, pet: &Pet, visit_id: i64) -> WorkflowResult<Visit> {
        self.store
            .find_visit_by_id(visit_id)?
            .filter(|visit| pet.owns(visit))
            .ok_or(WorkflowError::NotFound { entity: "visit", id: visit_id })
    }

    fn resolver(&self) -> VetResolver<'a, S> {
        VetResolver::new(self.store)
    }
}

fn render(ctx: VisitContext, form: VisitForm, errors: BindingResult) -> Outcome {
    Outcome::Render(FormView {
        view: VISIT_FORM_VIEW,
        pet: ctx.pet,
        visit: ctx.visit,
        vets: ctx.vets,
        form,
        errors,
    })
}
