//! The store handle and its locking discipline.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use comptoir_core::{DomainError, DomainResult};

use crate::config::StoreConfig;
use crate::tables::Tables;

/// In-memory relational store.
///
/// `Send + Sync`; share it behind an `Arc` across threads. Mutating
/// operations take the writer guard for their whole duration, which is what
/// makes each of them a transaction: validation happens first, writes only
/// once every check has passed, and no other writer can interleave.
#[derive(Debug)]
pub struct Store {
    pub(crate) config: StoreConfig,
    pub(crate) tables: RwLock<Tables>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            tables: RwLock::new(Tables::default()),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub(crate) fn read(&self) -> DomainResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| DomainError::constraint("store lock poisoned"))
    }

    pub(crate) fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| DomainError::constraint("store lock poisoned"))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
