//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured level is used as
//! the filter directive.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::ServerError;

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns [`ServerError::Telemetry`] if a global subscriber is already
/// installed.
pub fn init(config: &LoggingConfig) -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    result.map_err(|e| ServerError::Telemetry {
        message: e.to_string(),
    })
}
