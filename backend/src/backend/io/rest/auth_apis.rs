//! # REST API for Admin Authentication
//!
//! Login issues an explicit session; logout destroys it.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::backend::domain::commands::auth::{LoginCommand, LogoutCommand};
use crate::backend::io::rest::mappers::SessionMapper;
use crate::backend::AppState;
use shared::{LoginRequest, LogoutRequest};

/// Log an admin in
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    info!("POST /api/auth/login - username: {}", request.username);

    let command = LoginCommand {
        username: request.username,
        password: request.password,
    };
    match state.auth_service.login(command) {
        Ok(result) => (StatusCode::OK, Json(SessionMapper::to_login_response(result))).into_response(),
        Err(e) => {
            error!("Login failed: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Log an admin out
pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<LogoutRequest>,
) -> impl IntoResponse {
    info!("POST /api/auth/logout");

    let command = LogoutCommand { token: request.token };
    match state.auth_service.logout(command) {
        Ok(result) => (StatusCode::OK, Json(SessionMapper::to_logout_response(result))).into_response(),
        Err(e) => {
            error!("Logout failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error ending session").into_response()
        }
    }
}
