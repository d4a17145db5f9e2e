//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Implemented by every persisted record; two rows with the same id are the
/// same entity regardless of field values.
pub trait Entity {
    /// Strongly-typed row identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the row identifier.
    fn id(&self) -> Self::Id;
}
