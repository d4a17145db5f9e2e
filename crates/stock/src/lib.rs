//! `comptoir-stock` — per-store available inventory.

pub mod stock_magasin;

pub use stock_magasin::StockMagasin;
