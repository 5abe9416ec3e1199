use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::diagnostics::test_database;
use super::health::read_root;
use super::schema::{get_record_schema, get_schema};
use super::workouts::{create_workout, list_workouts};
use super::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/schema", get(get_schema))
        .route("/schema/:kind", get(get_record_schema))
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route("/test", get(test_database))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin, method and header
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
