//! Admin authentication with an explicit session lifecycle.
//!
//! Credential verification is a deliberate stub: any non-empty
//! username/password pair is accepted and no identity backend is
//! consulted. What matters here is the session object itself, which is
//! created on login, validated (and evicted when expired) on each admin
//! request, and destroyed on logout.

use anyhow::{anyhow, Result};
use log::{info, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::domain::commands::auth::{LoginCommand, LoginResult, LogoutCommand, LogoutResult};
use crate::backend::domain::models::session::AdminSession;
use crate::backend::storage::traits::SessionStorage;

#[derive(Clone)]
pub struct AuthService {
    session_repository: Arc<dyn SessionStorage>,
}

impl AuthService {
    pub fn new(session_repository: Arc<dyn SessionStorage>) -> Self {
        Self { session_repository }
    }

    /// Log an admin in and issue a session.
    pub fn login(&self, command: LoginCommand) -> Result<LoginResult> {
        let username = command.username.trim();
        if username.is_empty() || command.password.trim().is_empty() {
            return Err(anyhow!("Username and password are required"));
        }

        let session = AdminSession::issue(username, Uuid::new_v4().to_string());
        self.session_repository.store_session(&session)?;

        info!(
            "Admin '{}' logged in, session expires at {}",
            username, session.expires_at
        );

        Ok(LoginResult {
            success_message: format!("Welcome back, {}", username),
            session,
        })
    }

    /// Resolve a token to its live session. Expired sessions are evicted
    /// and report as absent; an empty token is never authenticated.
    pub fn validate_session(&self, token: &str) -> Result<Option<AdminSession>> {
        if token.trim().is_empty() {
            return Ok(None);
        }
        match self.session_repository.get_session(token)? {
            Some(session) if session.is_expired() => {
                info!("Evicting expired session for '{}'", session.username);
                self.session_repository.delete_session(token)?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Destroy a session. Logging out an unknown token is not an error.
    pub fn logout(&self, command: LogoutCommand) -> Result<LogoutResult> {
        let removed = self.session_repository.delete_session(&command.token)?;
        if removed {
            info!("Session destroyed on logout");
        } else {
            warn!("Logout for unknown session token");
        }
        Ok(LogoutResult {
            success_message: "Logged out successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::MemorySessionRepository;
    use chrono::{Duration, Utc};

    fn setup_test() -> (AuthService, Arc<MemorySessionRepository>) {
        let repository = Arc::new(MemorySessionRepository::new());
        (AuthService::new(repository.clone()), repository)
    }

    #[test]
    fn test_login_issues_a_session() {
        let (service, _) = setup_test();
        let result = service
            .login(LoginCommand {
                username: "  admin  ".to_string(),
                password: "secret".to_string(),
            })
            .unwrap();

        assert_eq!(result.session.username, "admin");
        assert!(!result.session.token.is_empty());
        assert_eq!(result.success_message, "Welcome back, admin");
    }

    #[test]
    fn test_login_requires_non_empty_credentials() {
        let (service, _) = setup_test();
        assert!(service
            .login(LoginCommand { username: "".to_string(), password: "x".to_string() })
            .is_err());
        assert!(service
            .login(LoginCommand { username: "admin".to_string(), password: "   ".to_string() })
            .is_err());
    }

    #[test]
    fn test_session_lifecycle() {
        let (service, _) = setup_test();
        let login = service
            .login(LoginCommand { username: "admin".to_string(), password: "x".to_string() })
            .unwrap();
        let token = login.session.token.clone();

        let session = service.validate_session(&token).unwrap();
        assert_eq!(session.unwrap().username, "admin");

        service.logout(LogoutCommand { token: token.clone() }).unwrap();
        assert!(service.validate_session(&token).unwrap().is_none());

        // Logging out again is harmless
        service.logout(LogoutCommand { token }).unwrap();
    }

    #[test]
    fn test_empty_token_is_never_authenticated() {
        let (service, _) = setup_test();
        assert!(service.validate_session("").unwrap().is_none());
        assert!(service.validate_session("   ").unwrap().is_none());
    }

    #[test]
    fn test_expired_session_is_evicted() {
        let (service, repository) = setup_test();
        let mut session = AdminSession::issue("admin", "stale-token".to_string());
        session.expires_at = Utc::now() - Duration::minutes(1);
        repository.store_session(&session).unwrap();

        assert!(service.validate_session("stale-token").unwrap().is_none());
        // The stale entry is gone from the store as well
        assert!(repository.get_session("stale-token").unwrap().is_none());
    }

    #[test]
    fn test_each_login_gets_a_distinct_token() {
        let (service, _) = setup_test();
        let first = service
            .login(LoginCommand { username: "admin".to_string(), password: "x".to_string() })
            .unwrap();
        let second = service
            .login(LoginCommand { username: "admin".to_string(), password: "x".to_string() })
            .unwrap();
        assert_ne!(first.session.token, second.session.token);
    }
}
