//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable at the caller: the store rejects the
/// offending write and leaves prior state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced row does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// A unique constraint was violated (username, session token,
    /// store/product pair).
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A stock decrement would drive a counter below zero.
    #[error("insufficient stock (requested {requested}, available {available})")]
    InsufficientStock { requested: i64, available: i64 },

    /// A loyalty redemption would drive the client balance below zero.
    #[error("insufficient loyalty points (requested {requested}, available {available})")]
    InsufficientPoints { requested: i64, available: i64 },

    /// An order or delivery status change that the state machine forbids.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    /// An order may carry at most one invoice.
    #[error("invoice already exists for this order")]
    InvoiceAlreadyExists,

    /// The session token exists but its expiry has passed.
    #[error("session expired")]
    SessionExpired,

    /// Any other schema-level constraint (non-positive quantity, reversed
    /// date range, restricted delete, ...).
    #[error("constraint violation: {0}")]
    Constraint(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn duplicate_key(msg: impl Into<String>) -> Self {
        Self::DuplicateKey(msg.into())
    }

    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    pub fn invalid_transition(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidStateTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
