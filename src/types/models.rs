use chrono::{DateTime, Utc};
use serde::Serialize;

/// An object as reported by the storage service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

impl ObjectRecord {
    pub fn new(key: impl Into<String>, size: u64, last_modified: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            size,
            last_modified,
        }
    }
}

/// A signed media entry returned by `GET /api/images`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub key: String,
    pub url: String,
    pub size: u64,
    pub last_modified: String,
    pub is_video: bool,
}

/// JSON body of `GET /api/images`
///
/// Serialized untagged so the body is either `{"images": [...]}` or
/// `{"error": "..."}`, never both.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ImagesResponse {
    Images { images: Vec<MediaItem> },
    Error { error: String },
}

impl ImagesResponse {
    pub const FAILURE_MESSAGE: &'static str = "Failed to list or sign S3 files";

    pub fn failed() -> Self {
        ImagesResponse::Error {
            error: Self::FAILURE_MESSAGE.to_string(),
        }
    }
}

/// JSON body of `GET /api/`
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}
