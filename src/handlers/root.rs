use crate::types::RootResponse;
use axum::Json;

pub const ROOT_MESSAGE: &str = "Serverless Slideshow API ✅";

/// GET /api/ - Fixed status message, independent of storage state
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE,
    })
}
