//! Request handlers for the visit routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    Form,
};
use petclinic_core::{Outcome, PetClinicError, VisitForm};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorRes {
    pub error: String,
}

/// Handler failure, rendered as a JSON error body.
#[derive(Debug)]
pub struct ApiError(PetClinicError);

impl From<PetClinicError> for ApiError {
    fn from(e: PetClinicError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            e @ PetClinicError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(ErrorRes { error: e.to_string() })).into_response()
            }
            e @ PetClinicError::DatabaseError(_) => {
                tracing::error!("Visit workflow error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorRes {
                        error: "Internal error".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Render a form view with `status`, or follow the redirect.
fn respond(outcome: Outcome, render_status: StatusCode) -> Response {
    match outcome {
        Outcome::Render(view) => (render_status, Json(view)).into_response(),
        Outcome::Redirect { location } => Redirect::to(&location).into_response(),
    }
}

/// Liveness check.
pub async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Pet Clinic is alive".into(),
    })
}

/// GET the empty visit form for a pet.
pub async fn init_new_visit_form(
    State(state): State<AppState>,
    Path((_owner_id, pet_id)): Path<(i64, i64)>,
) -> Result<Response, ApiError> {
    let outcome = state.clinic.new_visit_form(pet_id)?;
    Ok(respond(outcome, StatusCode::OK))
}

/// POST a new visit.
pub async fn process_new_visit_form(
    State(state): State<AppState>,
    Path((_owner_id, pet_id)): Path<(i64, i64)>,
    Form(form): Form<VisitForm>,
) -> Result<Response, ApiError> {
    let outcome = state.clinic.submit_new_visit(pet_id, form)?;
    Ok(respond(outcome, StatusCode::UNPROCESSABLE_ENTITY))
}

/// GET the form for an existing visit.
pub async fn init_update_visit_form(
    State(state): State<AppState>,
    Path((_owner_id, pet_id, visit_id)): Path<(i64, i64, i64)>,
) -> Result<Response, ApiError> {
    let outcome = state.clinic.edit_visit_form(pet_id, visit_id)?;
    Ok(respond(outcome, StatusCode::OK))
}

/// POST changes to an existing visit.
pub async fn process_update_visit_form(
    State(state): State<AppState>,
    Path((_owner_id, pet_id, visit_id)): Path<(i64, i64, i64)>,
    Form(form): Form<VisitForm>,
) -> Result<Response, ApiError> {
    let outcome = state.clinic.submit_visit_edit(pet_id, visit_id, form)?;
    Ok(respond(outcome, StatusCode::UNPROCESSABLE_ENTITY))
}

/// POST a cancellation. Unknown visits redirect like known ones.
pub async fn cancel_visit(
    State(state): State<AppState>,
    Path((_owner_id, pet_id, visit_id)): Path<(i64, i64, i64)>,
) -> Result<Response, ApiError> {
    let outcome = state.clinic.cancel_visit(pet_id, visit_id)?;
    Ok(respond(outcome, StatusCode::OK))
}
