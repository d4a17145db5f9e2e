//! Store configuration.

use chrono::Duration;

use comptoir_auth::Session;

/// Tunables applied at row creation time.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Session lifetime; `expires_at = created_at + session_ttl`, computed
    /// for every new session row rather than once at schema definition.
    pub session_ttl: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            session_ttl: Session::default_ttl(),
        }
    }
}
