//! Persistence gateway for the Bestiary creature catalog.
//!
//! The catalog lives in `PostgreSQL` in production. An in-process
//! datastore with the same integrity rules backs tests and local
//! development. [`Gateway`] dispatches to whichever one is configured.
//!
//! # Architecture
//!
//! ```text
//! HTTP handlers
//!     |
//!     +-- Gateway ----+-- PostgresCatalog --+-- CreatureStore  (creatures JOIN species)
//!                     |                     +-- SpeciesStore   (species)
//!                     |
//!                     +-- MemoryCatalog     (RwLock'd tables)
//! ```
//!
//! # Modules
//!
//! - [`gateway`] -- [`Gateway`] enum dispatch over the datastores
//! - [`postgres`] -- `PostgreSQL` pool, configuration and migrations
//! - [`creature_store`] -- Creature inserts and joined reads
//! - [`species_store`] -- Species inserts, listing and lore updates
//! - [`memory`] -- In-process catalog
//! - [`error`] -- Shared error types

pub mod creature_store;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod postgres;
pub mod species_store;

// Re-export primary types for convenience.
pub use creature_store::{CreatureRow, CreatureSpeciesRow, CreatureStore};
pub use error::{ConstraintKind, DbError};
pub use gateway::Gateway;
pub use memory::MemoryCatalog;
pub use postgres::{PostgresCatalog, PostgresConfig};
pub use species_store::{SpeciesRow, SpeciesStore};
