//! Media listing: filter a bucket's objects down to slideshow media and sign
//! a URL for each.

use crate::storage::StorageBackend;
use crate::types::{MediaItem, ObjectRecord, error::StorageError};
use chrono::SecondsFormat;
use futures::future::try_join_all;
use std::time::Duration;

/// Suffixes of objects that can be shown in the slideshow
pub const MEDIA_EXTENSIONS: [&str; 9] = [
    ".jpg", ".jpeg", ".png", ".gif", ".webp", ".mp4", ".webm", ".mov", ".avi",
];

/// Subset of [`MEDIA_EXTENSIONS`] played as video
pub const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".webm", ".mov", ".avi"];

fn has_extension(key: &str, extensions: &[&str]) -> bool {
    let key = key.to_lowercase();
    extensions.iter().any(|ext| key.ends_with(ext))
}

pub fn is_media_key(key: &str) -> bool {
    has_extension(key, &MEDIA_EXTENSIONS)
}

pub fn is_video_key(key: &str) -> bool {
    has_extension(key, &VIDEO_EXTENSIONS)
}

/// List the media objects of the bucket behind `storage`, newest first,
/// each with a GET URL valid for `expires_in`.
///
/// Any storage failure fails the whole listing; no partial result is returned.
pub async fn list_media(
    storage: &dyn StorageBackend,
    expires_in: Duration,
) -> Result<Vec<MediaItem>, StorageError> {
    let mut records: Vec<ObjectRecord> = storage
        .list_objects()
        .await?
        .into_iter()
        .filter(|obj| is_media_key(&obj.key))
        .collect();

    // Stable: equal timestamps keep listing order
    records.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));

    tracing::debug!("Signing {} media objects", records.len());

    let items = try_join_all(records.into_iter().map(move |obj| async move {
        let url = storage.presign_get(&obj.key, expires_in).await?;
        Ok::<_, StorageError>(MediaItem {
            url,
            size: obj.size,
            last_modified: obj.last_modified.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            is_video: is_video_key(&obj.key),
            key: obj.key,
        })
    }))
    .await?;

    Ok(items)
}
