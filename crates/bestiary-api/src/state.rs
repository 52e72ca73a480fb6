//! Shared application state for the catalog API.
//!
//! The only state shared between requests is the persistence gateway.
//! Requests never coordinate with each other; pooling and locking are
//! the datastore's business.

use bestiary_db::Gateway;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The datastore every handler delegates to.
    pub gateway: Gateway,
}

impl AppState {
    /// Create application state over the given gateway.
    pub const fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Application state over a fresh in-memory catalog.
    pub fn in_memory() -> Self {
        Self::new(Gateway::in_memory())
    }
}
