//! Tracing/logging initialization.
//!
//! Logs always go to stderr so they never interleave with console output on
//! stdout.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Initialize tracing/logging for the process.
///
/// `RUST_LOG` wins over the configured default directive. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_directive));

    match config.format {
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_timer(tracing_subscriber::fmt::time::SystemTime)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Text => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }

    ::tracing::debug!(format = ?config.format, "tracing initialized");
}
