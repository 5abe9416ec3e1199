use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::storage::{MemoryDocumentStore, PgDocumentStore, StoreState};

/// `DATABASE_URL` value selecting the in-process store
pub const MEMORY_URL_SCHEME: &str = "memory://";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let name = env::var("DATABASE_NAME").ok().filter(|name| !name.is_empty());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        let connect_timeout_secs = env::var("DB_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);

        Ok(DatabaseConfig {
            url,
            name,
            max_connections,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }

    /// Open the configured document store.
    ///
    /// Never fails: a missing or unusable `DATABASE_URL` leaves the
    /// server running without storage so diagnostics can report it.
    pub async fn open_store(&self) -> StoreState {
        let Some(url) = self.url.as_deref() else {
            warn!("DATABASE_URL not set, running without a document store");
            return StoreState::Unconfigured;
        };

        if url.starts_with(MEMORY_URL_SCHEME) {
            info!("Using in-memory document store");
            return StoreState::ready(MemoryDocumentStore::new());
        }

        let pool = match PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.connect_timeout)
            .connect_lazy(url)
        {
            Ok(pool) => pool,
            Err(e) => {
                error!("Invalid DATABASE_URL: {}", e);
                return StoreState::Unavailable;
            }
        };

        let store = PgDocumentStore::new(pool);
        if let Err(e) = store.ensure_schema().await {
            warn!("Could not run migrations yet, retrying on first use: {}", e);
        }

        info!("Using PostgreSQL document store");
        StoreState::ready(store)
    }
}
