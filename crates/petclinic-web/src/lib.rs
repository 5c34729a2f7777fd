//! # Pet Clinic Web
//!
//! HTTP surface for the visit workflow.
//!
//! Handles:
//! - form-encoded visit submissions with axum
//! - JSON form views for rendering, `303 See Other` redirects on success
//! - mapping workflow errors to status codes
//!
//! Uses `petclinic-core` for everything behind the handlers.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use petclinic_core::PetClinic;
use tower_http::trace::TraceLayer;

pub use config::{DatabaseLocation, WebConfig};

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub clinic: PetClinic,
}

/// Build the application router over `clinic`.
pub fn router(clinic: PetClinic) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/owners/:owner_id/pets/:pet_id/visits/new",
            get(handlers::init_new_visit_form).post(handlers::process_new_visit_form),
        )
        .route(
            "/owners/:owner_id/pets/:pet_id/visit/:visit_id/edit",
            get(handlers::init_update_visit_form).post(handlers::process_update_visit_form),
        )
        .route(
            "/owners/:owner_id/pets/:pet_id/visit/:visit_id/cancel",
            post(handlers::cancel_visit),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { clinic })
}

/// Open the clinic database described by `cfg`, loading sample data if asked.
pub fn open_clinic(cfg: &WebConfig) -> Result<PetClinic, petclinic_core::PetClinicError> {
    let clinic = match &cfg.database {
        DatabaseLocation::InMemory => PetClinic::open_in_memory()?,
        DatabaseLocation::File(path) => PetClinic::open(path)?,
    };
    if cfg.seed {
        clinic.load_sample_data()?;
        tracing::info!("-- Loaded sample data");
    }
    Ok(clinic)
}
