use std::sync::Arc;

use anyhow::Context;
use eznotes_db::{InMemoryNoteStore, NoteStore, PgNoteStore};

use crate::config::{ServerConfig, StoreBackend};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence handle, opened once at startup.
    pub store: Arc<dyn NoteStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Open the configured note store.
///
/// For PostgreSQL this creates the pool, checks connectivity and applies
/// migrations before returning.
pub async fn connect_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn NoteStore>> {
    match config.store {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory note store; notes are lost on restart");
            Ok(Arc::new(InMemoryNoteStore::new()))
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;

            let pool = eznotes_db::create_pool(database_url, config.db_max_connections)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connection pool created");

            eznotes_db::health_check(&pool)
                .await
                .context("Database health check failed")?;
            tracing::info!("Database health check passed");

            eznotes_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgNoteStore::new(pool)))
        }
    }
}
