//! REST endpoint handlers for the catalog API.
//!
//! Each handler validates its input, makes exactly one gateway call, and
//! maps the result to a status code and JSON body.
//!
//! # Endpoints
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | `GET` | `/health` | 200 `{status}` | -- |
//! | `GET` | `/creatures` | 200 list (possibly empty) | 500 |
//! | `GET` | `/creatures/{id}` | 200 creature + species | 400 bad id, 404 missing |
//! | `POST` | `/creatures` | 201 creature | 400 |
//! | `GET` | `/creatures/species` | 200 list | 500 |
//! | `POST` | `/creatures/species` | 201 species | 400 |
//! | `PATCH` | `/creatures/species/{name}` | 200 species | 400 |

use std::sync::Arc;

use axum::Json;
use axum::extract::{FromRequest, Path, State};
use axum::http::StatusCode;
use bestiary_types::{
    CreateCreatureRequest, CreateSpeciesRequest, Creature, CreatureId, CreatureWithSpecies,
    HealthStatus, Species, UpdateSpeciesLoreRequest,
};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Message for a lookup that matched no creature.
pub const CREATURE_NOT_FOUND: &str = "Creature not found";

/// JSON body extractor whose rejections become [`ApiError::Validation`].
///
/// Malformed JSON, wrong field types, and a missing `Content-Type` all
/// answer 400 with `{"error": ...}` instead of Axum's plain-text default.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness probe.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

// ---------------------------------------------------------------------------
// Creatures
// ---------------------------------------------------------------------------

/// List every creature with its species.
///
/// An empty catalog is a normal `200 []`, not a 404.
pub async fn list_creatures(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CreatureWithSpecies>>, ApiError> {
    let creatures = state
        .gateway
        .list_creatures()
        .await
        .map_err(|e| ApiError::from_read(&e))?;

    Ok(Json(creatures))
}

/// Fetch a single creature by id with its species attached.
pub async fn get_creature(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<CreatureWithSpecies>, ApiError> {
    let id: CreatureId = raw_id.parse()?;

    let creature = state
        .gateway
        .get_creature(id)
        .await
        .map_err(|e| ApiError::from_read(&e))?
        .ok_or_else(|| ApiError::NotFound(CREATURE_NOT_FOUND.to_owned()))?;

    Ok(Json(creature))
}

/// Create a creature.
///
/// The species must already exist; that is checked by the datastore and
/// a violation comes back as 400 with the datastore's message.
pub async fn create_creature(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<CreateCreatureRequest>,
) -> Result<(StatusCode, Json<Creature>), ApiError> {
    let new = request.validated()?;

    let creature = state
        .gateway
        .create_creature(&new)
        .await
        .map_err(ApiError::from_write)?;

    info!(
        creature_id = %creature.id,
        name = %creature.name,
        species = %creature.species_name,
        "Creature created"
    );

    Ok((StatusCode::CREATED, Json(creature)))
}

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// List every species.
pub async fn list_species(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Species>>, ApiError> {
    let species = state
        .gateway
        .list_species()
        .await
        .map_err(|e| ApiError::from_read(&e))?;

    Ok(Json(species))
}

/// Create a species. Lore is optional and stored as `null` when absent.
pub async fn create_species(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<CreateSpeciesRequest>,
) -> Result<(StatusCode, Json<Species>), ApiError> {
    let new = request.validated()?;

    let species = state
        .gateway
        .create_species(&new)
        .await
        .map_err(ApiError::from_write)?;

    info!(species = %species.name, has_lore = species.lore.is_some(), "Species created");

    Ok((StatusCode::CREATED, Json(species)))
}

/// Replace the lore of the species named in the path.
pub async fn update_species_lore(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    JsonBody(request): JsonBody<UpdateSpeciesLoreRequest>,
) -> Result<Json<Species>, ApiError> {
    let patch = request.validated(&name)?;

    let species = state
        .gateway
        .update_species(&patch)
        .await
        .map_err(ApiError::from_write)?;

    info!(species = %species.name, "Species lore updated");

    Ok(Json(species))
}
