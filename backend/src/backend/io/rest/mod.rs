//! REST handlers and DTO mappers.

pub mod auth_apis;
pub mod export_apis;
pub mod geography_apis;
pub mod mappers;
pub mod registration_apis;
pub mod volunteer_apis;

pub use auth_apis::*;
pub use export_apis::*;
pub use geography_apis::*;
pub use registration_apis::*;
pub use volunteer_apis::*;

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use log::error;

use crate::backend::domain::models::session::AdminSession;
use crate::backend::AppState;

/// Resolve the request's bearer token to a live admin session, or produce
/// the error response the handler should return as-is.
pub(crate) fn require_session(state: &AppState, headers: &HeaderMap) -> Result<AdminSession, Response> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or("");

    match state.auth_service.validate_session(token) {
        Ok(Some(session)) => Ok(session),
        Ok(None) => Err((StatusCode::UNAUTHORIZED, "Authentication required").into_response()),
        Err(e) => {
            error!("Failed to validate session: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Error validating session").into_response())
        }
    }
}
