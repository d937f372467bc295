//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the preflight tracing/logging system.
///
/// Reads the `PREFLIGHT_LOG` environment variable for per-subsystem log
/// levels. Format: `PREFLIGHT_LOG=preflight_analysis=debug,preflight_runner=info`
///
/// Falls back to `preflight=info` if `PREFLIGHT_LOG` is not set or invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PREFLIGHT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("preflight=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
