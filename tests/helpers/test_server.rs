use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use slideshow_api::{AppState, InMemoryStorage, StorageBackend, create_app};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use super::{TEST_BUCKET, TEST_URL_EXPIRES_SECONDS};

/// Response captured from the router
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Test harness around the production router
///
/// Requests go through the router returned by create_app(), backed by an
/// in-memory storage the test can seed and break.
pub struct TestServer {
    app: Router,
    pub storage: InMemoryStorage,
}

impl TestServer {
    pub fn start() -> Self {
        let storage = InMemoryStorage::with_bucket(TEST_BUCKET);
        let backend: Arc<dyn StorageBackend> = Arc::new(storage.clone());

        let app_state = AppState::new(
            backend,
            TEST_BUCKET.to_string(),
            Duration::from_secs(TEST_URL_EXPIRES_SECONDS),
        );

        // Use the ACTUAL production create_app function
        TestServer {
            app: create_app(app_state),
            storage,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
