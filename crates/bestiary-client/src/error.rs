//! Error types for the catalog client.

/// Errors returned by [`CatalogClient`](crate::CatalogClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    ///
    /// `message` is the server's `error` field, or a per-operation
    /// fallback when the body carried none. Displays as the bare message
    /// so it can be shown to a user as-is.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Human-readable failure message.
        message: String,
    },

    /// The request never produced a response (connection refused, DNS,
    /// TLS, and so on).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// The configured base URL cannot have path segments appended.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ClientError {
    /// The HTTP status for [`ClientError::Api`], `None` otherwise.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
