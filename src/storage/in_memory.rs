use super::backend::StorageBackend;
use crate::types::{ObjectRecord, error::StorageError};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

const DEFAULT_BUCKET: &str = "memory";
const SIGNING_SECRET: &[u8] = b"in-memory-signing-secret";

/// In-memory storage backend for testing/development
///
/// Objects are listed in insertion order. Signed URLs are computed locally
/// with HMAC-SHA256 so the expiry is visible in the URL.
#[derive(Clone)]
pub struct InMemoryStorage {
    bucket: String,
    state: Arc<RwLock<State>>,
}

#[derive(Default)]
struct State {
    objects: Vec<ObjectRecord>,
    fail_listing: bool,
    failing_keys: HashSet<String>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::with_bucket(DEFAULT_BUCKET)
    }

    pub fn with_bucket(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            state: Arc::new(RwLock::new(State::default())),
        }
    }

    /// Store an object record, replacing any existing record with the same key
    pub async fn insert(&self, key: &str, size: u64, last_modified: DateTime<Utc>) {
        let mut state = self.state.write().await;
        state.objects.retain(|obj| obj.key != key);
        state
            .objects
            .push(ObjectRecord::new(key, size, last_modified));
    }

    /// Make every subsequent `list_objects` call fail
    pub async fn fail_listing(&self) {
        self.state.write().await.fail_listing = true;
    }

    /// Make signing `key` fail, as if the object were inaccessible
    pub async fn fail_signing(&self, key: &str) {
        self.state.write().await.failing_keys.insert(key.to_string());
    }

    fn sign(&self, key: &str, expires_secs: u64) -> Result<String, StorageError> {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        type HmacSha256 = Hmac<Sha256>;

        let mut mac =
            HmacSha256::new_from_slice(SIGNING_SECRET).map_err(|e| StorageError::SignFailed {
                key: key.to_string(),
                message: format!("HMAC error: {}", e),
            })?;
        mac.update(format!("GET\n{}\n{}\n{}", self.bucket, key, expires_secs).as_bytes());

        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

#[async_trait::async_trait]
impl StorageBackend for InMemoryStorage {
    async fn list_objects(&self) -> Result<Vec<ObjectRecord>, StorageError> {
        let state = self.state.read().await;

        if state.fail_listing {
            return Err(StorageError::ListFailed(format!(
                "access denied to bucket {}",
                self.bucket
            )));
        }

        Ok(state.objects.clone())
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, StorageError> {
        let state = self.state.read().await;

        if state.failing_keys.contains(key) || !state.objects.iter().any(|obj| obj.key == key) {
            return Err(StorageError::SignFailed {
                key: key.to_string(),
                message: "object is not accessible".to_string(),
            });
        }

        let expires_secs = expires_in.as_secs();
        let signature = self.sign(key, expires_secs)?;

        Ok(format!(
            "memory://{}/{}?X-Amz-Expires={}&X-Amz-Signature={}",
            self.bucket, key, expires_secs, signature
        ))
    }
}
