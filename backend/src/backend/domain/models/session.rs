use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Admin session lifetime in minutes.
pub const SESSION_TTL_MINUTES: i64 = 30;

/// An explicit admin session: created on login, destroyed on logout,
/// rejected once expired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub token: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    /// Issue a new session for a username, valid for [`SESSION_TTL_MINUTES`].
    pub fn issue(username: &str, token: String) -> Self {
        let now = Utc::now();
        Self {
            token,
            username: username.to_string(),
            created_at: now,
            expires_at: now + Duration::minutes(SESSION_TTL_MINUTES),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
