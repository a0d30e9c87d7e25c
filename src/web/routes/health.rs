use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::database::activity_store::ActivityStore;

pub async fn health_handler(State(store): State<ActivityStore>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "activities": store.count_activities().await,
    }))
}
