//! # Structured Logging
//!
//! Console tracing initialization for the batch binary. Propagator skips
//! log at debug, promotions and batch lifecycle at info.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize tracing once; later calls are no-ops.
///
/// The filter comes from `PEDIGREE_LOG` (falling back to `RUST_LOG`, then
/// to the given default).
pub fn init_structured_logging(default_level: &str) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = std::env::var("PEDIGREE_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| default_level.to_string());

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(true)
            .with_level(true)
            .finish();

        // a subscriber may already be installed in test runs
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }
    });
}
