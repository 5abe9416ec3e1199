#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use mockall::mock;
use serde_json::Value;
use std::sync::Once;
use tower::ServiceExt;

use fitness_api::api::{routes::create_routes, AppState};
use fitness_api::models::Document;
use fitness_api::storage::{DocumentStore, MemoryDocumentStore, StorageError, StoreState};

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .init();
    });
}

mock! {
    pub Store {}

    #[async_trait]
    impl DocumentStore for Store {
        async fn create_document(&self, collection: &str, document: Document) -> Result<String, StorageError>;
        async fn get_documents(
            &self,
            collection: &str,
            filter: Document,
            limit: usize,
        ) -> Result<Vec<Document>, StorageError>;
        async fn list_collection_names(&self) -> Result<Vec<String>, StorageError>;
    }
}

/// Router backed by the given store, with both database variables reported as set
pub fn test_app(store: StoreState) -> Router {
    init_test_logging();
    create_routes(AppState {
        store,
        database_url_set: true,
        database_name_set: true,
    })
}

pub fn memory_app() -> Router {
    test_app(StoreState::ready(MemoryDocumentStore::new()))
}

pub fn mock_app(store: MockStore) -> Router {
    test_app(StoreState::ready(store))
}

pub fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send a request and decode the JSON response body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}
