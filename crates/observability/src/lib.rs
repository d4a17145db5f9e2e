//! `comptoir-observability` — tracing/logging setup for embedders.
//!
//! The store crates emit `tracing` events; hosts that want them on stdout
//! call [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Initialize JSON-formatted logging, filtered via `RUST_LOG` with an
/// `info` fallback. Safe to call multiple times; later calls are no-ops.
pub fn init() {
    init_with_filter("info");
}

/// Like [`init`] with an explicit default filter directive.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
