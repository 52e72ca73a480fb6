//! The persistence gateway used by the HTTP layer.
//!
//! Every operation is a direct delegation to the selected datastore: no
//! retries, no transactions, no translation of datastore errors.
//!
//! Uses enum dispatch instead of a trait object because async methods
//! are not dyn-compatible.

use bestiary_types::{
    Creature, CreatureId, CreatureWithSpecies, LorePatch, NewCreature, NewSpecies, Species,
};

use crate::error::DbError;
use crate::memory::MemoryCatalog;
use crate::postgres::PostgresCatalog;

/// A catalog datastore.
#[derive(Debug, Clone)]
pub enum Gateway {
    /// `PostgreSQL`-backed catalog.
    Postgres(PostgresCatalog),
    /// In-process catalog.
    Memory(MemoryCatalog),
}

impl Gateway {
    /// A gateway over a fresh, empty in-memory catalog.
    pub fn in_memory() -> Self {
        Self::Memory(MemoryCatalog::new())
    }

    /// Human-readable backend name for logging.
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    /// List every creature with its species attached.
    ///
    /// # Errors
    ///
    /// Propagates the datastore error unchanged.
    pub async fn list_creatures(&self) -> Result<Vec<CreatureWithSpecies>, DbError> {
        match self {
            Self::Postgres(pg) => pg.list_creatures().await,
            Self::Memory(mem) => mem.list_creatures().await,
        }
    }

    /// Fetch one creature with its species attached.
    ///
    /// # Errors
    ///
    /// Propagates the datastore error unchanged.
    pub async fn get_creature(&self, id: CreatureId) -> Result<Option<CreatureWithSpecies>, DbError> {
        match self {
            Self::Postgres(pg) => pg.get_creature(id).await,
            Self::Memory(mem) => mem.get_creature(id).await,
        }
    }

    /// Insert a creature. The species reference is checked by the
    /// datastore's foreign key only.
    ///
    /// # Errors
    ///
    /// Propagates the datastore error unchanged.
    pub async fn create_creature(&self, new: &NewCreature) -> Result<Creature, DbError> {
        match self {
            Self::Postgres(pg) => pg.create_creature(new).await,
            Self::Memory(mem) => mem.create_creature(new).await,
        }
    }

    /// List every species.
    ///
    /// # Errors
    ///
    /// Propagates the datastore error unchanged.
    pub async fn list_species(&self) -> Result<Vec<Species>, DbError> {
        match self {
            Self::Postgres(pg) => pg.list_species().await,
            Self::Memory(mem) => mem.list_species().await,
        }
    }

    /// Insert a species.
    ///
    /// # Errors
    ///
    /// Propagates the datastore error unchanged.
    pub async fn create_species(&self, new: &NewSpecies) -> Result<Species, DbError> {
        match self {
            Self::Postgres(pg) => pg.create_species(new).await,
            Self::Memory(mem) => mem.create_species(new).await,
        }
    }

    /// Replace the lore of a species.
    ///
    /// # Errors
    ///
    /// Propagates the datastore error unchanged.
    pub async fn update_species(&self, patch: &LorePatch) -> Result<Species, DbError> {
        match self {
            Self::Postgres(pg) => pg.update_species(patch).await,
            Self::Memory(mem) => mem.update_species(patch).await,
        }
    }
}

impl From<PostgresCatalog> for Gateway {
    fn from(catalog: PostgresCatalog) -> Self {
        Self::Postgres(catalog)
    }
}

impl From<MemoryCatalog> for Gateway {
    fn from(catalog: MemoryCatalog) -> Self {
        Self::Memory(catalog)
    }
}
