//! # Backend Module
//!
//! All non-UI logic for the civil-defence volunteer registry.
//!
//! The backend follows a layered architecture:
//! ```text
//! IO Layer (REST API, handlers)
//!     |
//! Domain Layer (services, wizard, filter engine)
//!     |
//! Storage Layer (in-memory repositories behind traits)
//! ```
//!
//! It is UI-agnostic: any web or CLI front end can drive the same REST
//! surface without the layers below changing.

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::domain::{
    AuthService, ExportService, GeographyService, RegistrationService, VolunteerService,
};
use crate::backend::storage::traits::{SessionStorage, VolunteerStorage};
use crate::backend::storage::{
    MemorySessionRepository, MemoryVolunteerRepository, StaticGeographyRepository,
};

pub use domain::*;
pub use io::*;
pub use storage::*;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub geography_service: Arc<GeographyService>,
    pub registration_service: RegistrationService,
    pub volunteer_service: VolunteerService,
    pub export_service: ExportService,
}

/// Initialize the backend with all required services
pub fn initialize_backend() -> Result<AppState> {
    info!("Setting up storage");
    let geography_repository = StaticGeographyRepository::new();
    let volunteer_repository: Arc<dyn VolunteerStorage> =
        Arc::new(MemoryVolunteerRepository::with_seed_data());
    let session_repository: Arc<dyn SessionStorage> = Arc::new(MemorySessionRepository::new());

    info!("Setting up domain model");
    let geography_service = Arc::new(GeographyService::new(&geography_repository)?);
    let auth_service = AuthService::new(session_repository);
    let registration_service =
        RegistrationService::new(geography_service.clone(), volunteer_repository.clone());
    let volunteer_service = VolunteerService::new(volunteer_repository);
    let export_service = ExportService::new();

    info!("Setting up application state");
    Ok(AppState {
        auth_service,
        geography_service,
        registration_service,
        volunteer_service,
        export_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow the web frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/auth/login", post(io::login))
        .route("/auth/logout", post(io::logout))
        .route("/geography/provinces", get(io::list_provinces))
        .route("/geography/provinces/:province_id/divisions", get(io::list_divisions))
        .route("/geography/divisions/:division_id/districts", get(io::list_districts))
        .route("/geography/districts/:district_id/tehsils", get(io::list_tehsils))
        .route("/geography/tehsils/:tehsil_id/union-councils", get(io::list_union_councils))
        .route("/registrations", post(io::submit_registration))
        .route("/registrations/validate-step", post(io::validate_step))
        .route("/registrations/options", get(io::registration_options))
        .route("/volunteers", get(io::list_volunteers))
        .route("/volunteers/status", post(io::bulk_update_status))
        .route("/volunteers/export", post(io::export_volunteers));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
