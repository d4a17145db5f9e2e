//! User record (`Users` table).

use serde::{Deserialize, Serialize};

use comptoir_core::{DomainError, DomainResult, Entity, UserId};

/// User role, persisted as the lowercase wire strings of the `role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Regular,
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Regular => write!(f, "regular"),
        }
    }
}

/// One row of `Users`.
///
/// `hashed_password` is opaque here; hashing/verification lives outside the
/// data model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id_user: UserId,
    pub username: String,
    pub hashed_password: String,
    pub role: UserRole,
}

impl User {
    /// Usernames are the unique lookup key and must be non-empty.
    pub fn check_username(username: &str) -> DomainResult<()> {
        if username.trim().is_empty() {
            return Err(DomainError::constraint("username cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id_user
    }
}
