//! Session record (`Sessions` table).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use comptoir_core::{Entity, SessionId, UserId};

/// Default session lifetime. The expiry is computed at row creation time
/// (`created_at + ttl`), never once at schema definition, so every session
/// gets its own window.
pub const DEFAULT_TTL_DAYS: i64 = 7;

/// One row of `Sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub user_id: UserId,
    pub session_token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn default_ttl() -> Duration {
        Duration::days(DEFAULT_TTL_DAYS)
    }

    /// A session is valid iff `now < expires_at`. Expired rows stay stored;
    /// reaping is an external concern.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl Entity for Session {
    type Id = SessionId;

    fn id(&self) -> SessionId {
        self.id
    }
}
