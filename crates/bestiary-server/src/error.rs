//! Error types for the catalog server binary.
//!
//! [`ServerError`] wraps every failure that can stop the process during
//! startup or while serving.

/// Top-level error for the catalog server binary.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// Connecting to or migrating the datastore failed.
    #[error("database error: {source}")]
    Database {
        /// The underlying datastore error.
        #[from]
        source: bestiary_db::DbError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Serve {
        /// The underlying server error.
        #[from]
        source: bestiary_api::ServeError,
    },

    /// The logging subscriber could not be installed.
    #[error("telemetry error: {message}")]
    Telemetry {
        /// Description of the failure.
        message: String,
    },
}
