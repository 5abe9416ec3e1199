use axum::{extract::Path, response::Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::{describe, find_schema, PROFILE_SCHEMA, WORKOUT_SCHEMA};

/// Schema descriptions consumed by the external database viewer
pub async fn get_schema() -> Json<Value> {
    Json(json!({
        "workout": describe(&WORKOUT_SCHEMA),
        "profile": describe(&PROFILE_SCHEMA),
    }))
}

/// Schema description of any record kind, by collection name
#[tracing::instrument]
pub async fn get_record_schema(Path(kind): Path<String>) -> Result<Json<Value>, ApiError> {
    find_schema(&kind)
        .map(|schema| Json(describe(schema)))
        .ok_or(ApiError::UnknownKind(kind))
}
