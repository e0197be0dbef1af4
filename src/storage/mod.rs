mod backend;
mod in_memory;
mod s3;

pub use backend::StorageBackend;
pub use in_memory::InMemoryStorage;
pub use s3::S3Backend;
