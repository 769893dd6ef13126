//! # REST API for the Geography Hierarchy
//!
//! Cascading lookups used by the registration form and the admin filters.
//! Unknown ids resolve to empty option lists, never errors.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;

use crate::backend::io::rest::mappers::GeographyMapper;
use crate::backend::AppState;

/// List all provinces and territories
pub async fn list_provinces(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/geography/provinces");

    let response = GeographyMapper::to_options_response(state.geography_service.provinces());
    (StatusCode::OK, Json(response))
}

/// List the divisions of a province
pub async fn list_divisions(
    State(state): State<AppState>,
    Path(province_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/geography/provinces/{}/divisions", province_id);

    let response =
        GeographyMapper::to_options_response(state.geography_service.divisions_of(&province_id));
    (StatusCode::OK, Json(response))
}

/// List the districts of a division
pub async fn list_districts(
    State(state): State<AppState>,
    Path(division_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/geography/divisions/{}/districts", division_id);

    let response =
        GeographyMapper::to_options_response(state.geography_service.districts_of(&division_id));
    (StatusCode::OK, Json(response))
}

/// List the tehsils of a district (synthesized defaults when uncurated)
pub async fn list_tehsils(
    State(state): State<AppState>,
    Path(district_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/geography/districts/{}/tehsils", district_id);

    let response =
        GeographyMapper::to_options_response(state.geography_service.tehsils_of(&district_id));
    (StatusCode::OK, Json(response))
}

/// List the union councils of a tehsil
pub async fn list_union_councils(
    State(state): State<AppState>,
    Path(tehsil_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/geography/tehsils/{}/union-councils", tehsil_id);

    let response =
        GeographyMapper::to_options_response(state.geography_service.union_councils_of(&tehsil_id));
    (StatusCode::OK, Json(response))
}
