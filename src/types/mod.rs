pub mod error;
pub mod models;

pub use error::{ConfigError, StorageError};
pub use models::{ImagesResponse, MediaItem, ObjectRecord, RootResponse};
