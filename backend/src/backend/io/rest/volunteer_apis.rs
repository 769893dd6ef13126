//! # REST API for Volunteer Management
//!
//! Admin-only: filtered listing and bulk status updates. Every handler
//! requires a live session token.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::backend::domain::commands::volunteers::BulkStatusCommand;
use crate::backend::io::rest::mappers::VolunteerMapper;
use crate::backend::io::rest::require_session;
use crate::backend::AppState;
use shared::{BulkStatusRequest, BulkStatusResponse, VolunteerFilters};

/// List volunteers matching the query-string filters
pub async fn list_volunteers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filters): Query<VolunteerFilters>,
) -> impl IntoResponse {
    info!("GET /api/volunteers - filters: {:?}", filters);

    let session = match require_session(&state, &headers) {
        Ok(session) => session,
        Err(response) => return response,
    };
    info!("Volunteer list requested by '{}'", session.username);

    let criteria = VolunteerMapper::criteria_from_filters(filters);
    match state.volunteer_service.list_volunteers(&criteria) {
        Ok(volunteers) => {
            (StatusCode::OK, Json(VolunteerMapper::to_list_response(volunteers))).into_response()
        }
        Err(e) => {
            error!("Failed to list volunteers: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing volunteers").into_response()
        }
    }
}

/// Apply a status to a selection of volunteers (approve/reject/deactivate)
pub async fn bulk_update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<BulkStatusRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/volunteers/status - {} ids -> {}",
        request.volunteer_ids.len(),
        request.status
    );

    if let Err(response) = require_session(&state, &headers) {
        return response;
    }

    let command = BulkStatusCommand {
        volunteer_ids: request.volunteer_ids,
        status: VolunteerMapper::status_to_domain(request.status),
    };
    match state.volunteer_service.bulk_update_status(command) {
        Ok(result) => {
            let response = BulkStatusResponse {
                updated_count: result.updated_count,
                not_found_ids: result.not_found_ids,
                success_message: result.success_message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed bulk status update: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
