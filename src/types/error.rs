use std::fmt;

/// A failed call to the object-storage service
///
/// Callers of the listing endpoint only ever see a fixed message; the
/// variant and detail exist for the logs.
#[derive(Debug)]
pub enum StorageError {
    ListFailed(String),
    SignFailed { key: String, message: String },
    MalformedRecord(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ListFailed(msg) => write!(f, "failed to list objects: {}", msg),
            StorageError::SignFailed { key, message } => {
                write!(f, "failed to sign URL for '{}': {}", key, message)
            }
            StorageError::MalformedRecord(msg) => write!(f, "malformed object record: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Invalid startup configuration
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingBucket,
    InvalidExpiry(u64),
    IncompleteCredentials,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingBucket => write!(f, "S3 bucket name must not be empty"),
            ConfigError::InvalidExpiry(secs) => write!(
                f,
                "URL expiry of {} seconds is outside the allowed range 1..={}",
                secs,
                crate::config::MAX_URL_EXPIRES_SECONDS
            ),
            ConfigError::IncompleteCredentials => write!(
                f,
                "AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must be set together"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
