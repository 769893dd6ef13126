//! # REST API for Volunteer Registration
//!
//! Step validation and final submission for the public registration
//! wizard, plus the fixed form option lists.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info, warn};

use crate::backend::domain::commands::registration::{SubmitRegistrationCommand, ValidateStepCommand};
use crate::backend::domain::registration_service::InvalidRegistration;
use crate::backend::io::rest::mappers::RegistrationMapper;
use crate::backend::AppState;
use shared::{RegistrationErrorResponse, SubmitRegistrationRequest, ValidateStepRequest};

/// Validate one wizard step of a draft
pub async fn validate_step(
    State(state): State<AppState>,
    Json(request): Json<ValidateStepRequest>,
) -> impl IntoResponse {
    info!("POST /api/registrations/validate-step - step {}", request.step);

    let command = ValidateStepCommand {
        step: request.step,
        draft: RegistrationMapper::draft_to_map(request.draft),
    };
    match state.registration_service.validate_step(command) {
        Ok(result) => {
            (StatusCode::OK, Json(RegistrationMapper::to_validate_response(result))).into_response()
        }
        Err(e) => {
            error!("Failed to validate registration step: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Submit a completed registration draft
pub async fn submit_registration(
    State(state): State<AppState>,
    Json(request): Json<SubmitRegistrationRequest>,
) -> impl IntoResponse {
    info!("POST /api/registrations");

    let command = SubmitRegistrationCommand {
        draft: RegistrationMapper::draft_to_map(request.draft),
    };
    match state.registration_service.submit_registration(command) {
        Ok(result) => {
            (StatusCode::CREATED, Json(RegistrationMapper::to_submit_response(result))).into_response()
        }
        Err(e) => match e.downcast_ref::<InvalidRegistration>() {
            Some(invalid) => {
                warn!("Registration rejected at step {}", invalid.step);
                let response = RegistrationErrorResponse {
                    step: invalid.step,
                    errors: invalid.errors.clone(),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(response)).into_response()
            }
            None => {
                error!("Failed to submit registration: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error submitting registration").into_response()
            }
        },
    }
}

/// List the fixed form options (gender, education, availability)
pub async fn registration_options() -> impl IntoResponse {
    info!("GET /api/registrations/options");

    (StatusCode::OK, Json(RegistrationMapper::to_options_response()))
}
