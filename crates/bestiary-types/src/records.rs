//! Catalog records as they are stored and served.
//!
//! All records serialize with camelCase field names, which is the shape
//! the React client consumes. `TypeScript` definitions are generated by
//! `ts-rs` into `bindings/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::CreatureId;

/// A uniquely-named catalog entry with optional descriptive lore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Species {
    /// Natural key. Unique across the catalog.
    pub name: String,
    /// Free-form description; `null` when the species has none.
    pub lore: Option<String>,
}

/// A creature record without its species attached.
///
/// This is what the datastore hands back from an insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Creature {
    /// Datastore-assigned surrogate key.
    pub id: CreatureId,
    /// Display name. Not unique.
    pub name: String,
    /// Name of the [`Species`] this creature belongs to.
    pub species_name: String,
    /// When the record was inserted.
    pub created_at: DateTime<Utc>,
}

/// A creature with its [`Species`] eagerly attached.
///
/// Serializes as the flat creature fields plus a nested `species` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CreatureWithSpecies {
    /// The creature record.
    #[serde(flatten)]
    #[ts(flatten)]
    pub creature: Creature,
    /// The species referenced by `creature.species_name`.
    pub species: Species,
}

impl CreatureWithSpecies {
    /// Return the creature id.
    pub const fn id(&self) -> CreatureId {
        self.creature.id
    }

    /// Return the creature name.
    pub fn name(&self) -> &str {
        &self.creature.name
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HealthStatus {
    /// Always `"ok"` while the process is serving.
    pub status: String,
}

impl HealthStatus {
    /// The healthy status body.
    pub fn ok() -> Self {
        Self {
            status: String::from("ok"),
        }
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ErrorBody {
    /// Human-readable message, shown to the user verbatim.
    pub error: String,
}
