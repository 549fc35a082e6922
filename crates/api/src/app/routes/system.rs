use axum::{Json, Router, response::IntoResponse, routing::get};

pub fn router() -> Router {
    Router::new().route("/healthz", get(health))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
