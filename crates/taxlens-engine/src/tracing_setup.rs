//! Tracing initialization.

use std::sync::Once;

use taxlens_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the taxlens tracing/logging system.
///
/// Reads the `TAXLENS_LOG` environment variable for filter directives,
/// e.g. `TAXLENS_LOG=taxlens_weights=debug,taxlens_retrieval=info`.
/// Falls back to `observability.log_level` when unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TAXLENS_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        // try_init: a test harness may already have installed a subscriber.
        if config.json_logs {
            let _ = registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init();
        } else {
            let _ = registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init();
        }
    });
}
