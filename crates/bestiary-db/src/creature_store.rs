//! Queries against the `creatures` table.
//!
//! Reads join `species` so every creature comes back with its species
//! attached. The join is an inner join: the foreign key guarantees a
//! matching species row for every creature.

use bestiary_types::{Creature, CreatureId, CreatureWithSpecies, NewCreature, Species};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::DbError;

/// Columns selected for a creature joined with its species.
const SELECT_WITH_SPECIES: &str = r"SELECT c.id, c.name, c.species_name, c.created_at, s.lore AS species_lore
      FROM creatures c
      JOIN species s ON s.name = c.species_name";

/// Operations on the `creatures` table.
pub struct CreatureStore<'a> {
    pool: &'a PgPool,
}

impl<'a> CreatureStore<'a> {
    /// Create a new creature store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load every creature with its species, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_with_species(&self) -> Result<Vec<CreatureWithSpecies>, DbError> {
        let sql = format!("{SELECT_WITH_SPECIES} ORDER BY c.id");
        let rows = sqlx::query_as::<_, CreatureSpeciesRow>(&sql)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(CreatureWithSpecies::from).collect())
    }

    /// Load one creature with its species.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn find_with_species(
        &self,
        id: CreatureId,
    ) -> Result<Option<CreatureWithSpecies>, DbError> {
        let sql = format!("{SELECT_WITH_SPECIES} WHERE c.id = $1");
        let row = sqlx::query_as::<_, CreatureSpeciesRow>(&sql)
            .bind(id.into_inner())
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(CreatureWithSpecies::from))
    }

    /// Insert a creature and return the stored record.
    ///
    /// No species lookup happens first; an unknown species is rejected
    /// by the foreign key.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Constraint`] on a foreign-key violation, or
    /// [`DbError::Postgres`] if the insert fails otherwise.
    pub async fn insert(&self, new: &NewCreature) -> Result<Creature, DbError> {
        let row = sqlx::query_as::<_, CreatureRow>(
            r"INSERT INTO creatures (name, species_name)
              VALUES ($1, $2)
              RETURNING id, name, species_name, created_at",
        )
        .bind(&new.name)
        .bind(&new.species_name)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(creature_id = row.id, species = %row.species_name, "Inserted creature");

        Ok(Creature::from(row))
    }
}

/// A row from the `creatures` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CreatureRow {
    /// Surrogate key.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Referenced species.
    pub species_name: String,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<CreatureRow> for Creature {
    fn from(row: CreatureRow) -> Self {
        Self {
            id: CreatureId(row.id),
            name: row.name,
            species_name: row.species_name,
            created_at: row.created_at,
        }
    }
}

/// A `creatures` row joined with the lore of its species.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CreatureSpeciesRow {
    /// Surrogate key.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Referenced species.
    pub species_name: String,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
    /// Lore of the referenced species.
    pub species_lore: Option<String>,
}

impl From<CreatureSpeciesRow> for CreatureWithSpecies {
    fn from(row: CreatureSpeciesRow) -> Self {
        let species = Species {
            name: row.species_name.clone(),
            lore: row.species_lore,
        };
        Self {
            creature: Creature {
                id: CreatureId(row.id),
                name: row.name,
                species_name: row.species_name,
                created_at: row.created_at,
            },
            species,
        }
    }
}
