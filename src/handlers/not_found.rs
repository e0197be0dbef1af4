use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Fallback handler for 404 Not Found
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}
