//! Axum router construction for the catalog API.
//!
//! Assembles every route into a single [`Router`] with request tracing
//! and permissive CORS so the browser client can call it from any origin.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, patch};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the catalog.
///
/// The router includes:
/// - `GET /health` -- liveness probe
/// - `GET /creatures`, `POST /creatures`
/// - `GET /creatures/species`, `POST /creatures/species`
/// - `PATCH /creatures/species/{name}`
/// - `GET /creatures/{id}`
///
/// `/creatures/species` is a static segment and always wins over the
/// `{id}` capture.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/creatures",
            get(handlers::list_creatures).post(handlers::create_creature),
        )
        .route(
            "/creatures/species",
            get(handlers::list_species).post(handlers::create_species),
        )
        .route(
            "/creatures/species/{name}",
            patch(handlers::update_species_lore),
        )
        .route("/creatures/{id}", get(handlers::get_creature))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
