//! Catalog server binary for the Bestiary creature catalog.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `bestiary-config.yaml` (or `BESTIARY_CONFIG`)
//!    plus environment overrides
//! 2. Initialize structured logging (tracing)
//! 3. Open the datastore: a `PostgreSQL` pool with migrations, or the
//!    in-memory catalog
//! 4. Serve the HTTP API until `Ctrl-C` or `SIGTERM`
//! 5. Close the pool

mod config;
mod error;
mod telemetry;

use std::sync::Arc;

use bestiary_api::AppState;
use bestiary_db::{Gateway, PostgresCatalog};
use tracing::info;

use crate::config::{BestiaryConfig, DatabaseConfig, StorageBackend};
use crate::error::ServerError;

/// Application entry point for the catalog server.
///
/// # Errors
///
/// Returns an error if configuration, the datastore, or the listener
/// cannot be set up, or if serving fails.
#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Config first: it decides the log format.
    let config = BestiaryConfig::load()?;
    telemetry::init(&config.logging)?;

    info!(
        host = config.server.host,
        port = config.server.port,
        storage = ?config.storage,
        "bestiary-server starting"
    );

    let gateway = open_gateway(config.storage, &config.database).await?;
    let state = Arc::new(AppState::new(gateway.clone()));

    let served = bestiary_api::start_server(&config.server.to_server_config(), state).await;

    if let Gateway::Postgres(pg) = &gateway {
        pg.close().await;
    }

    served?;
    info!("bestiary-server shutdown complete");
    Ok(())
}

/// Open the configured datastore.
async fn open_gateway(
    storage: StorageBackend,
    database: &DatabaseConfig,
) -> Result<Gateway, ServerError> {
    match storage {
        StorageBackend::Memory => {
            info!("Using in-memory catalog; data is lost on exit");
            Ok(Gateway::in_memory())
        }
        StorageBackend::Postgres => {
            let catalog = PostgresCatalog::connect(&database.to_postgres_config()).await?;
            if database.run_migrations {
                catalog.run_migrations().await?;
            } else {
                info!("Skipping migrations");
            }
            Ok(Gateway::Postgres(catalog))
        }
    }
}
