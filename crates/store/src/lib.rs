//! `comptoir-store` — the relational store behind the retail data model.
//!
//! One [`Store`] owns every table as an in-memory map guarded by a single
//! `RwLock`. Each business operation (order creation, invoice generation,
//! stock reservation, loyalty adjustment) runs under one writer guard, so
//! all constituent writes commit together or none do, and concurrent stock
//! decrements serialize. Lookups take the reader guard.
//!
//! Intended for tests/dev and as the reference semantics for a durable
//! backend. Not optimized for performance.

mod auth;
mod catalog;
mod clients;
mod config;
mod orders;
mod stock;
mod store;
mod tables;

pub use config::StoreConfig;
pub use store::Store;
