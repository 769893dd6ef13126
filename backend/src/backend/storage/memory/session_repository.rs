use anyhow::{anyhow, Result};
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::domain::models::session::AdminSession;
use crate::backend::storage::traits::SessionStorage;

/// In-memory admin session store, keyed by token.
#[derive(Clone, Default)]
pub struct MemorySessionRepository {
    sessions: Arc<Mutex<HashMap<String, AdminSession>>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, AdminSession>>> {
        self.sessions
            .lock()
            .map_err(|_| anyhow!("session store lock poisoned"))
    }
}

impl SessionStorage for MemorySessionRepository {
    fn store_session(&self, session: &AdminSession) -> Result<()> {
        self.lock()?.insert(session.token.clone(), session.clone());
        debug!("Stored session for {}", session.username);
        Ok(())
    }

    fn get_session(&self, token: &str) -> Result<Option<AdminSession>> {
        Ok(self.lock()?.get(token).cloned())
    }

    fn delete_session(&self, token: &str) -> Result<bool> {
        Ok(self.lock()?.remove(token).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trip() {
        let repository = MemorySessionRepository::new();
        let session = AdminSession::issue("admin", "token-1".to_string());

        repository.store_session(&session).unwrap();
        assert_eq!(repository.get_session("token-1").unwrap(), Some(session));
        assert!(repository.get_session("token-2").unwrap().is_none());

        assert!(repository.delete_session("token-1").unwrap());
        assert!(!repository.delete_session("token-1").unwrap());
        assert!(repository.get_session("token-1").unwrap().is_none());
    }
}
