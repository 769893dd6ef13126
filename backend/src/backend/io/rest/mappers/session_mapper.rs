use crate::backend::domain::commands::auth::{LoginResult, LogoutResult};
use crate::backend::domain::models::session::AdminSession;
use shared::{AdminSessionDto, LoginResponse, LogoutResponse};

/// Mapper between domain sessions and the auth DTOs.
pub struct SessionMapper;

impl SessionMapper {
    pub fn to_dto(session: AdminSession) -> AdminSessionDto {
        AdminSessionDto {
            token: session.token,
            username: session.username,
            created_at: session.created_at.to_rfc3339(),
            expires_at: session.expires_at.to_rfc3339(),
        }
    }

    pub fn to_login_response(result: LoginResult) -> LoginResponse {
        LoginResponse {
            session: Self::to_dto(result.session),
            success_message: result.success_message,
        }
    }

    pub fn to_logout_response(result: LogoutResult) -> LogoutResponse {
        LogoutResponse {
            success_message: result.success_message,
        }
    }
}
