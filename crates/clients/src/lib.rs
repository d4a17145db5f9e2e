//! `comptoir-clients` — customers and their loyalty-point ledger.

pub mod client;
pub mod fidelite;

pub use client::Client;
pub use fidelite::HistoriqueFidelite;
