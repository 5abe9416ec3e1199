use std::fmt;

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::storage::{StorageError, StoreState};

/// Collection names reported by the diagnostics probe
const MAX_LISTED_COLLECTIONS: usize = 10;
/// Error messages are cut to this many characters
const MAX_ERROR_CHARS: usize = 50;

/// Outcome of probing the document store
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseStatus {
    NotAvailable,
    NotInitialized,
    Working,
    ConnectedWithError(String),
    Error(String),
}

impl fmt::Display for DatabaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseStatus::NotAvailable => write!(f, "❌ Not Available"),
            DatabaseStatus::NotInitialized => write!(f, "⚠️  Available but not initialized"),
            DatabaseStatus::Working => write!(f, "✅ Connected & Working"),
            DatabaseStatus::ConnectedWithError(e) => write!(f, "⚠️  Connected but Error: {}", e),
            DatabaseStatus::Error(e) => write!(f, "❌ Error: {}", e),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

fn presence(set: bool) -> String {
    let label = if set { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Probe {
    pub status: DatabaseStatus,
    pub connected: bool,
    pub collections: Vec<String>,
}

impl Probe {
    fn disconnected(status: DatabaseStatus) -> Self {
        Self {
            status,
            connected: false,
            collections: Vec::new(),
        }
    }
}

/// Probe the store. Failures only ever change the reported status.
pub async fn probe(store: &StoreState) -> Probe {
    let store = match store {
        StoreState::Unconfigured => return Probe::disconnected(DatabaseStatus::NotInitialized),
        StoreState::Unavailable => return Probe::disconnected(DatabaseStatus::NotAvailable),
        StoreState::Ready(store) => store,
    };

    match store.list_collection_names().await {
        Ok(names) => Probe {
            status: DatabaseStatus::Working,
            connected: true,
            collections: names.into_iter().take(MAX_LISTED_COLLECTIONS).collect(),
        },
        Err(StorageError::Connection(message)) => {
            tracing::warn!("Database probe could not connect: {}", message);
            Probe::disconnected(DatabaseStatus::Error(truncate(&message)))
        }
        Err(e) => {
            tracing::warn!("Database probe failed: {}", e);
            Probe {
                status: DatabaseStatus::ConnectedWithError(truncate(&e.message())),
                connected: true,
                collections: Vec::new(),
            }
        }
    }
}

/// Check whether the database is available and accessible
#[tracing::instrument(skip(state))]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let probe = probe(&state.store).await;

    Json(DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: probe.status.to_string(),
        database_url: presence(state.database_url_set),
        database_name: presence(state.database_name_set),
        connection_status: if probe.connected { "Connected" } else { "Not Connected" }.to_string(),
        collections: probe.collections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        let long = "x".repeat(80);
        assert_eq!(truncate(&long).len(), MAX_ERROR_CHARS);
        assert_eq!(truncate("short"), "short");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(DatabaseStatus::Working.to_string(), "✅ Connected & Working");
        assert_eq!(
            DatabaseStatus::Error("refused".to_string()).to_string(),
            "❌ Error: refused"
        );
    }

    #[tokio::test]
    async fn test_probe_without_store() {
        let probe = probe(&StoreState::Unconfigured).await;
        assert_eq!(probe.status, DatabaseStatus::NotInitialized);
        assert!(!probe.connected);
        assert!(probe.collections.is_empty());

        let probe = super::probe(&StoreState::Unavailable).await;
        assert_eq!(probe.status, DatabaseStatus::NotAvailable);
    }
}
