//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// Reads the `CAPACITOR_LOG` environment variable as an `EnvFilter`
/// directive, e.g. `CAPACITOR_LOG=capacitor=debug`. Falls back to
/// `config.log_level` if it is not set or is invalid.
///
/// Idempotent. If another subscriber was installed first it is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);
        let registry = tracing_subscriber::registry().with(filter);
        let _ = if config.json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };
    });
}

/// Build the filter `init_tracing` would install.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

