//! In-process catalog with the same integrity rules as the SQL schema.
//!
//! Used by the API test-suite and by the `memory` storage backend for
//! local development without `PostgreSQL`. Species names are unique,
//! creatures must reference an existing species, ids come from a
//! monotonically increasing sequence starting at 1. Violations carry the
//! same messages `PostgreSQL` produces for the schema in `migrations/`.

use std::sync::Arc;

use bestiary_types::{
    Creature, CreatureId, CreatureWithSpecies, LorePatch, NewCreature, NewSpecies, Species,
};
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{ConstraintKind, DbError};

/// Message for a duplicate species name.
pub const UNIQUE_SPECIES_MESSAGE: &str =
    "duplicate key value violates unique constraint \"species_pkey\"";

/// Message for a creature that references an unknown species.
pub const FOREIGN_KEY_SPECIES_MESSAGE: &str = "insert or update on table \"creatures\" violates foreign key constraint \"creatures_species_name_fkey\"";

/// Message for an exhausted creature id sequence.
const SEQUENCE_EXHAUSTED_MESSAGE: &str =
    "nextval: reached maximum value of sequence \"creatures_id_seq\"";

#[derive(Debug, Default)]
struct Tables {
    /// Insertion order is storage order.
    species: Vec<Species>,
    /// Always sorted by id since ids only grow.
    creatures: Vec<Creature>,
    last_id: i64,
}

impl Tables {
    fn species_named(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.name == name)
    }

    fn attach(&self, creature: &Creature) -> CreatureWithSpecies {
        let species = self
            .species_named(&creature.species_name)
            .cloned()
            // Unreachable while the foreign key holds; keep the read total.
            .unwrap_or_else(|| Species {
                name: creature.species_name.clone(),
                lore: None,
            });
        CreatureWithSpecies {
            creature: creature.clone(),
            species,
        }
    }
}

/// The catalog held in memory.
///
/// Cloning is cheap; clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every creature with its species, ordered by id.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the `PostgreSQL` catalog.
    pub async fn list_creatures(&self) -> Result<Vec<CreatureWithSpecies>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.creatures.iter().map(|c| tables.attach(c)).collect())
    }

    /// One creature with its species, or `None`.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the `PostgreSQL` catalog.
    pub async fn get_creature(&self, id: CreatureId) -> Result<Option<CreatureWithSpecies>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .creatures
            .iter()
            .find(|c| c.id == id)
            .map(|c| tables.attach(c)))
    }

    /// Insert a creature.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Constraint`] with [`ConstraintKind::ForeignKey`]
    /// if the species does not exist.
    pub async fn create_creature(&self, new: &NewCreature) -> Result<Creature, DbError> {
        let mut tables = self.tables.write().await;

        if tables.species_named(&new.species_name).is_none() {
            return Err(DbError::Constraint {
                kind: ConstraintKind::ForeignKey,
                message: FOREIGN_KEY_SPECIES_MESSAGE.to_owned(),
            });
        }

        let id = tables.last_id.checked_add(1).ok_or_else(|| DbError::Constraint {
            kind: ConstraintKind::Other,
            message: SEQUENCE_EXHAUSTED_MESSAGE.to_owned(),
        })?;
        tables.last_id = id;

        let creature = Creature {
            id: CreatureId(id),
            name: new.name.clone(),
            species_name: new.species_name.clone(),
            created_at: Utc::now(),
        };
        tables.creatures.push(creature.clone());

        tracing::debug!(creature_id = id, species = %creature.species_name, "Inserted creature");

        Ok(creature)
    }

    /// Every species in insertion order.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the `PostgreSQL` catalog.
    pub async fn list_species(&self) -> Result<Vec<Species>, DbError> {
        Ok(self.tables.read().await.species.clone())
    }

    /// Insert a species.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Constraint`] with [`ConstraintKind::Unique`] if
    /// the name is already taken. The stored species is left untouched.
    pub async fn create_species(&self, new: &NewSpecies) -> Result<Species, DbError> {
        let mut tables = self.tables.write().await;

        if tables.species_named(&new.name).is_some() {
            return Err(DbError::Constraint {
                kind: ConstraintKind::Unique,
                message: UNIQUE_SPECIES_MESSAGE.to_owned(),
            });
        }

        let species = Species {
            name: new.name.clone(),
            lore: new.lore.clone(),
        };
        tables.species.push(species.clone());

        tracing::debug!(species = %species.name, "Inserted species");

        Ok(species)
    }

    /// Replace the lore of an existing species.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::RecordNotFound`] if no species has that name.
    pub async fn update_species(&self, patch: &LorePatch) -> Result<Species, DbError> {
        let mut tables = self.tables.write().await;

        let species = tables
            .species
            .iter_mut()
            .find(|s| s.name == patch.name)
            .ok_or_else(|| DbError::species_not_found(&patch.name))?;
        species.lore = Some(patch.lore.clone());

        Ok(species.clone())
    }
}
