//! Queries against the `species` table.

use bestiary_types::{LorePatch, NewSpecies, Species};
use sqlx::PgPool;

use crate::error::DbError;

/// Operations on the `species` table.
pub struct SpeciesStore<'a> {
    pool: &'a PgPool,
}

impl<'a> SpeciesStore<'a> {
    /// Create a new species store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load every species, unfiltered, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Species>, DbError> {
        let rows = sqlx::query_as::<_, SpeciesRow>(r"SELECT name, lore FROM species")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Species::from).collect())
    }

    /// Insert a species and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Constraint`] if the name is already taken.
    pub async fn insert(&self, new: &NewSpecies) -> Result<Species, DbError> {
        let row = sqlx::query_as::<_, SpeciesRow>(
            r"INSERT INTO species (name, lore)
              VALUES ($1, $2)
              RETURNING name, lore",
        )
        .bind(&new.name)
        .bind(new.lore.as_deref())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(species = %row.name, "Inserted species");

        Ok(Species::from(row))
    }

    /// Replace the lore of the species named in `patch`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::RecordNotFound`] if no species has that name.
    pub async fn update_lore(&self, patch: &LorePatch) -> Result<Species, DbError> {
        let row = sqlx::query_as::<_, SpeciesRow>(
            r"UPDATE species
              SET lore = $2
              WHERE name = $1
              RETURNING name, lore",
        )
        .bind(&patch.name)
        .bind(&patch.lore)
        .fetch_optional(self.pool)
        .await?;

        row.map(Species::from)
            .ok_or_else(|| DbError::species_not_found(&patch.name))
    }
}

/// A row from the `species` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SpeciesRow {
    /// Natural key.
    pub name: String,
    /// Optional lore.
    pub lore: Option<String>,
}

impl From<SpeciesRow> for Species {
    fn from(row: SpeciesRow) -> Self {
        Self {
            name: row.name,
            lore: row.lore,
        }
    }
}
