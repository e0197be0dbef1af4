use crate::{app_state::AppState, listing, types::ImagesResponse};
use axum::{Json, extract::State};

/// GET /api/images - List media with signed URLs, newest first
///
/// Always answers 200: storage failures are logged and reported with a
/// fixed `error` body.
pub async fn list_images(State(app_state): State<AppState>) -> Json<ImagesResponse> {
    tracing::info!("LIST images: bucket={}", app_state.bucket_name);

    match listing::list_media(app_state.storage.as_ref(), app_state.url_expires).await {
        Ok(images) => {
            tracing::debug!("Returning {} media items", images.len());
            Json(ImagesResponse::Images { images })
        }
        Err(err) => {
            tracing::error!("Error generating URLs: {}", err);
            Json(ImagesResponse::failed())
        }
    }
}
