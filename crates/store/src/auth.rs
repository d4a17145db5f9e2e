//! Identity & access operations.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use comptoir_auth::{Session, User, UserRole};
use comptoir_core::{DomainError, DomainResult, UserId};

use crate::store::Store;

impl Store {
    /// Insert a `Users` row. The username is the unique lookup key.
    pub fn create_user(
        &self,
        username: &str,
        hashed_password: &str,
        role: UserRole,
    ) -> DomainResult<User> {
        User::check_username(username)?;

        let mut tables = self.write()?;
        if tables.users_by_username.contains_key(username) {
            return Err(DomainError::duplicate_key(format!("username '{username}'")));
        }

        let id_user = tables.seq.next_user();
        let user = User {
            id_user,
            username: username.to_string(),
            hashed_password: hashed_password.to_string(),
            role,
        };
        tables.users.insert(id_user, user.clone());
        tables.users_by_username.insert(user.username.clone(), id_user);

        tracing::debug!(%id_user, username, "user created");
        Ok(user)
    }

    pub fn find_user(&self, id: UserId) -> DomainResult<User> {
        Ok(self.read()?.user(id)?.clone())
    }

    pub fn find_user_by_username(&self, username: &str) -> DomainResult<User> {
        let tables = self.read()?;
        let id = tables
            .users_by_username
            .get(username)
            .ok_or(DomainError::not_found("User"))?;
        Ok(tables.users[id].clone())
    }

    /// Open a session for a user. The token is a fresh UUIDv4 whose
    /// uniqueness is enforced at write time, and the expiry is computed
    /// from `now` per row, never frozen at schema definition.
    pub fn create_session(&self, user_id: UserId, now: DateTime<Utc>) -> DomainResult<Session> {
        let mut tables = self.write()?;
        tables.user(user_id)?;

        let mut session_token = Uuid::new_v4().to_string();
        while tables.sessions_by_token.contains_key(&session_token) {
            session_token = Uuid::new_v4().to_string();
        }

        let id = tables.seq.next_session();
        let session = Session {
            id,
            user_id,
            session_token,
            created_at: now,
            expires_at: now + self.config.session_ttl,
        };
        tables.sessions.insert(id, session.clone());
        tables.sessions_by_token.insert(session.session_token.clone(), id);

        tracing::debug!(%user_id, session_id = %id, "session created");
        Ok(session)
    }

    /// Resolve a token to its owning user. Unknown tokens are `NotFound`;
    /// known-but-expired tokens are `SessionExpired` (the row stays stored,
    /// reaping is external).
    pub fn validate_session(&self, token: &str, now: DateTime<Utc>) -> DomainResult<User> {
        let tables = self.read()?;
        let id = tables
            .sessions_by_token
            .get(token)
            .ok_or(DomainError::not_found("Session"))?;
        let session = &tables.sessions[id];
        if !session.is_valid_at(now) {
            return Err(DomainError::SessionExpired);
        }
        Ok(tables.user(session.user_id)?.clone())
    }

    /// Delete a user. Their sessions cascade (derived auth state); the user
    /// row has no other children.
    pub fn delete_user(&self, id: UserId) -> DomainResult<()> {
        let mut tables = self.write()?;
        let user = tables.users.remove(&id).ok_or(DomainError::not_found("User"))?;
        tables.users_by_username.remove(&user.username);

        let stale: Vec<_> = tables
            .sessions
            .values()
            .filter(|s| s.user_id == id)
            .map(|s| (s.id, s.session_token.clone()))
            .collect();
        for (session_id, token) in stale {
            tables.sessions.remove(&session_id);
            tables.sessions_by_token.remove(&token);
        }

        tracing::debug!(id_user = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::StoreConfig;

    #[test]
    fn duplicate_username_is_refused() {
        let store = Store::new();
        store.create_user("alice", "h1", UserRole::Admin).unwrap();
        let err = store.create_user("alice", "h2", UserRole::Regular).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateKey(_)));
    }

    #[test]
    fn session_tokens_are_unique_across_sessions() {
        let store = Store::new();
        let user = store.create_user("bob", "h", UserRole::Regular).unwrap();
        let now = Utc::now();
        let a = store.create_session(user.id_user, now).unwrap();
        let b = store.create_session(user.id_user, now).unwrap();
        assert_ne!(a.session_token, b.session_token);
    }

    #[test]
    fn validate_session_honours_the_default_window() {
        let store = Store::new();
        let user = store.create_user("carol", "h", UserRole::Regular).unwrap();
        let t0 = Utc::now();
        let session = store.create_session(user.id_user, t0).unwrap();

        let fetched = store
            .validate_session(&session.session_token, t0 + Duration::hours(1))
            .unwrap();
        assert_eq!(fetched.id_user, user.id_user);

        let err = store
            .validate_session(&session.session_token, t0 + Duration::days(8))
            .unwrap_err();
        assert_eq!(err, DomainError::SessionExpired);
    }

    #[test]
    fn unknown_token_is_not_found_not_expired() {
        let store = Store::new();
        let err = store.validate_session("no-such-token", Utc::now()).unwrap_err();
        assert_eq!(err, DomainError::not_found("Session"));
    }

    #[test]
    fn session_ttl_is_configurable() {
        let store = Store::with_config(StoreConfig {
            session_ttl: Duration::hours(1),
        });
        let user = store.create_user("dave", "h", UserRole::Regular).unwrap();
        let t0 = Utc::now();
        let session = store.create_session(user.id_user, t0).unwrap();
        assert!(
            store
                .validate_session(&session.session_token, t0 + Duration::hours(2))
                .is_err()
        );
    }

    #[test]
    fn deleting_a_user_cascades_their_sessions() {
        let store = Store::new();
        let user = store.create_user("erin", "h", UserRole::Regular).unwrap();
        let now = Utc::now();
        let session = store.create_session(user.id_user, now).unwrap();

        store.delete_user(user.id_user).unwrap();
        let err = store.validate_session(&session.session_token, now).unwrap_err();
        assert_eq!(err, DomainError::not_found("Session"));
    }
}
