//! # REST API for CSV Export
//!
//! Admin-only: returns the generated CSV plus its date-stamped filename;
//! the client triggers the download.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::backend::domain::commands::export::ExportVolunteersCommand;
use crate::backend::io::rest::mappers::VolunteerMapper;
use crate::backend::io::rest::require_session;
use crate::backend::AppState;
use shared::{ExportVolunteersRequest, ExportVolunteersResponse};

/// Export the filtered (or selected) volunteers as CSV
pub async fn export_volunteers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ExportVolunteersRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/volunteers/export - {} ids selected",
        request.selected_ids.len()
    );

    if let Err(response) = require_session(&state, &headers) {
        return response;
    }

    let command = ExportVolunteersCommand {
        criteria: VolunteerMapper::criteria_from_filters(request.filters),
        selected_ids: request.selected_ids,
    };
    match state
        .export_service
        .export_volunteers_csv(command, &state.volunteer_service)
    {
        Ok(result) => {
            let response = ExportVolunteersResponse {
                csv_content: result.csv_content,
                filename: result.filename,
                record_count: result.record_count,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to export volunteers: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error exporting volunteers").into_response()
        }
    }
}
