// Library exports for integration tests
pub mod app_state;
pub mod config;
pub mod handlers;
pub mod listing;
pub mod server;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use app_state::AppState;
pub use config::Config;
pub use storage::{InMemoryStorage, S3Backend, StorageBackend};
pub use types::{ConfigError, ImagesResponse, MediaItem, ObjectRecord, StorageError};

// Re-export server creation function
pub use server::create_app;
