// API routes and handlers

pub mod diagnostics;
pub mod health;
pub mod routes;
pub mod schema;
pub mod workouts;

use crate::config::DatabaseConfig;
use crate::storage::StoreState;

/// Shared, read-only handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: StoreState,
    pub database_url_set: bool,
    pub database_name_set: bool,
}

impl AppState {
    pub fn new(store: StoreState, database: &DatabaseConfig) -> Self {
        Self {
            store,
            database_url_set: database.url.is_some(),
            database_name_set: database.name.is_some(),
        }
    }
}
