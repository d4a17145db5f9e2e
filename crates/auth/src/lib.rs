//! `comptoir-auth` — identity and session records.
//!
//! Password hashing and token transport are external glue; this crate only
//! models the persisted `Users` / `Sessions` rows and their validity rules.

pub mod session;
pub mod user;

pub use session::Session;
pub use user::{User, UserRole};
