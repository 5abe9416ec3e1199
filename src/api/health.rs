use axum::response::Json;
use serde_json::{json, Value};

pub async fn read_root() -> Json<Value> {
    Json(json!({
        "message": "Fitness App Backend Running"
    }))
}
