//! `comptoir-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage concerns):
//! typed row identifiers, the shared error model, and fixed-point money
//! helpers used by every entity group.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{
    ClientId, CommandeId, FactureId, HistoriqueId, LigneId, LivraisonId, MagasinId, ProduitId,
    PromotionId, SessionId, UserId,
};
