use crate::types::{ObjectRecord, error::StorageError};
use std::time::Duration;

/// Object-storage collaborator - implement this for different storage services
///
/// A backend is bound to a single bucket at construction.
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// List every object in the bucket, in no particular order
    async fn list_objects(&self) -> Result<Vec<ObjectRecord>, StorageError>;

    /// Produce a URL granting GET access to `key` for `expires_in`
    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, StorageError>;
}
