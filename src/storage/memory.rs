use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use super::{matches_filter, stamp, DocumentStore, StorageError, ID_FIELD};
use crate::models::Document;

/// In-process document store, selected with `DATABASE_URL=memory://`
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Connection("memory store lock poisoned".to_string())
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create_document(&self, collection: &str, mut document: Document) -> Result<String, StorageError> {
        let id = Uuid::new_v4().to_string();
        stamp(&mut document, Utc::now());
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        let mut collections = self.collections.write().map_err(poisoned)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: usize,
    ) -> Result<Vec<Document>, StorageError> {
        let collections = self.collections.read().map_err(poisoned)?;
        let documents = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches_filter(document, &filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(documents)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        let collections = self.collections.read().map_err(poisoned)?;
        Ok(collections.keys().cloned().collect())
    }
}
