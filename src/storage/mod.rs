// Document storage collaborator

pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Document, Record};

/// Key under which stored documents carry their identifier
pub const ID_FIELD: &str = "_id";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database not available. Check DATABASE_URL and DATABASE_NAME environment variables")]
    NotConfigured,
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Database error: {0}")]
    Database(sqlx::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    #[error("Migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Underlying message without the variant prefix
    pub fn message(&self) -> String {
        match self {
            StorageError::Connection(message)
            | StorageError::InvalidDocument(message)
            | StorageError::Migration(message) => message.clone(),
            StorageError::Database(err) => err.to_string(),
            StorageError::Serialization(err) => err.to_string(),
            StorageError::NotConfigured => self.to_string(),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        match err {
            sqlx::migrate::MigrateError::Execute(err) => StorageError::from(err),
            other => StorageError::Migration(other.to_string()),
        }
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StorageError::Connection(err.to_string()),
            other => StorageError::Database(other),
        }
    }
}

/// Generic collection-oriented document store.
///
/// Identifiers are opaque text tokens assigned at insertion time.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `document` into `collection` and return its identifier
    async fn create_document(&self, collection: &str, document: Document) -> Result<String, StorageError>;

    /// Fetch up to `limit` documents whose fields equal every entry of
    /// `filter`. Each returned document carries its identifier under `_id`.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: usize,
    ) -> Result<Vec<Document>, StorageError>;

    /// Names of the collections holding at least one document
    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError>;
}

/// Outcome of opening the configured store at startup
#[derive(Clone)]
pub enum StoreState {
    /// `DATABASE_URL` is not set
    Unconfigured,
    /// `DATABASE_URL` is set but the store could not be opened
    Unavailable,
    Ready(Arc<dyn DocumentStore>),
}

impl StoreState {
    pub fn ready(store: impl DocumentStore + 'static) -> Self {
        StoreState::Ready(Arc::new(store))
    }

    pub fn get(&self) -> Result<&dyn DocumentStore, StorageError> {
        match self {
            StoreState::Ready(store) => Ok(store.as_ref()),
            StoreState::Unconfigured | StoreState::Unavailable => Err(StorageError::NotConfigured),
        }
    }
}

impl std::fmt::Debug for StoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreState::Unconfigured => write!(f, "Unconfigured"),
            StoreState::Unavailable => write!(f, "Unavailable"),
            StoreState::Ready(_) => write!(f, "Ready"),
        }
    }
}

/// Persist a validated record in its collection
pub async fn create_record<R: Record>(store: &dyn DocumentStore, record: &R) -> Result<String, StorageError> {
    match serde_json::to_value(record)? {
        Value::Object(document) => store.create_document(R::schema().collection, document).await,
        other => Err(StorageError::InvalidDocument(format!(
            "{} did not serialize to an object: {}",
            R::schema().title,
            other
        ))),
    }
}

/// Render a document's identifier as text, or null when it has none
pub fn display_id(document: &mut Document) {
    let id = match document.remove(ID_FIELD) {
        Some(Value::String(id)) => Value::String(id),
        Some(Value::Null) | None => Value::Null,
        Some(other) => Value::String(other.to_string()),
    };
    document.insert(ID_FIELD.to_string(), id);
}

/// Add `created_at` and `updated_at` timestamps to a document about to be inserted
pub(crate) fn stamp(document: &mut Document, now: chrono::DateTime<chrono::Utc>) {
    let timestamp = Value::String(now.to_rfc3339());
    document.insert("created_at".to_string(), timestamp.clone());
    document.insert("updated_at".to_string(), timestamp);
}

pub(crate) fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}
