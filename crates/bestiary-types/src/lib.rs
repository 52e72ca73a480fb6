//! Shared type definitions for the Bestiary creature catalog.
//!
//! This crate is the single source of truth for the records and request
//! payloads exchanged between the catalog API, its data layer, and its
//! clients. Types flow downstream to `TypeScript` via `ts-rs` for the
//! React front end.
//!
//! # Modules
//!
//! - [`ids`] -- [`CreatureId`] and its path-segment parser
//! - [`records`] -- [`Species`], [`Creature`], [`CreatureWithSpecies`] and
//!   the small response bodies
//! - [`requests`] -- Write-endpoint payloads and their validation

pub mod ids;
pub mod records;
pub mod requests;

// Re-export all public types at crate root for convenience.
pub use ids::{CreatureId, InvalidCreatureId};
pub use records::{Creature, CreatureWithSpecies, ErrorBody, HealthStatus, Species};
pub use requests::{
    CREATURE_NAME_REQUIRED, CreateCreatureRequest, CreateSpeciesRequest, LorePatch,
    NO_DATA_PROVIDED, NewCreature, NewSpecies, SPECIES_NAME_REQUIRED, UpdateSpeciesLoreRequest,
    ValidationError,
};
