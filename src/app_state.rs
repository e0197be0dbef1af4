use crate::storage::StorageBackend;
use std::sync::Arc;
use std::time::Duration;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn StorageBackend>,
    pub bucket_name: String,
    pub url_expires: Duration,
}

impl AppState {
    pub fn new(storage: Arc<dyn StorageBackend>, bucket_name: String, url_expires: Duration) -> Self {
        Self {
            storage,
            bucket_name,
            url_expires,
        }
    }
}
