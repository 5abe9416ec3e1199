use axum::{
    extract::{Query, State},
    response::Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::AppState;
use crate::error::ApiError;
use crate::models::{Document, Record, Workout, WORKOUT_SCHEMA};
use crate::storage::{create_record, display_id};

/// Upper bound on documents returned by a workout listing
pub const WORKOUT_LIST_LIMIT: usize = 50;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWorkoutResponse {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ListWorkoutsQuery {
    pub user_id: String,
}

/// Validate a workout and store it
#[tracing::instrument(skip(state, payload))]
pub async fn create_workout(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<Document>, ApiError>,
) -> Result<Json<CreateWorkoutResponse>, ApiError> {
    let workout = Workout::validate(&payload)?;

    let store = state.store.get()?;
    let id = create_record(store, &workout).await?;
    info!(%id, user_id = %workout.user_id, "Created workout");

    Ok(Json(CreateWorkoutResponse {
        id,
        status: "created".to_string(),
    }))
}

/// Workouts stored for one user, unordered, at most `WORKOUT_LIST_LIMIT`
#[tracing::instrument(skip(state))]
pub async fn list_workouts(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ListWorkoutsQuery>, ApiError>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let store = state.store.get()?;

    let mut filter = Document::new();
    filter.insert("user_id".to_string(), Value::String(query.user_id));

    let mut workouts = store
        .get_documents(WORKOUT_SCHEMA.collection, filter, WORKOUT_LIST_LIMIT)
        .await?;
    workouts.iter_mut().for_each(display_id);

    Ok(Json(workouts))
}
