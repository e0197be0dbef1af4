use crate::{app_state::AppState, handlers};
use axum::{
    Router,
    http::{Method, Request},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Browsers may call the API from any origin, read-only
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

/// Create the application router with all routes and middleware
///
/// This function is used by both main.rs and integration tests to ensure
/// the same server configuration is used in both production and tests.
pub fn create_app(app_state: AppState) -> Router {
    use handlers::{list_images, not_found, root};

    let bucket = app_state.bucket_name.clone();

    Router::new()
        .route("/api/", get(root))
        .route("/api/images", get(list_images))
        // Fallback for 404 Not Found
        .fallback(not_found)
        // Add shared state
        .with_state(app_state)
        .layer(cors_layer())
        // Add tracing
        .layer(
            TraceLayer::new_for_http().make_span_with(move |request: &Request<_>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    bucket = %bucket,
                )
            }),
        )
}
