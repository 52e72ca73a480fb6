//! HTTP API for the Bestiary creature catalog.
//!
//! This crate provides an Axum HTTP server that exposes the catalog as
//! JSON over HTTP under the `/creatures` base path, plus a `/health`
//! probe.
//!
//! # Architecture
//!
//! Handlers are stateless: each one validates the request body or path,
//! makes a single call on the [`Gateway`](bestiary_db::Gateway) held in
//! [`AppState`], and turns the outcome into a status code. All failures
//! are [`ApiError`] values rendered as `{"error": "<message>"}`; nothing
//! propagates past the route boundary.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServeError, ServerConfig, serve_on, shutdown_signal, start_server};
pub use state::AppState;
