use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::ValidationError;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Unknown record kind: {0}")]
    UnknownKind(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) | ApiError::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::UnknownKind(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            ApiError::Validation(err) => json!({
                "detail": self.to_string(),
                "field": err.field(),
            }),
            ApiError::Storage(err) => {
                tracing::error!("Storage failure: {}", err);
                json!({ "detail": self.to_string() })
            }
            _ => json!({ "detail": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
