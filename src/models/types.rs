//! Media descriptor types and payload parsing

use super::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Kind of media behind an item id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// Opaque media descriptor handed to presentation collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawMediaItem")]
pub struct MediaItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

impl MediaItem {
    #[must_use]
    pub const fn new(id: i64, kind: MediaKind) -> Self {
        Self { id, kind }
    }

    #[must_use]
    pub const fn image(id: i64) -> Self {
        Self::new(id, MediaKind::Image)
    }

    #[must_use]
    pub const fn video(id: i64) -> Self {
        Self::new(id, MediaKind::Video)
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Wire shapes accepted for a bucket entry
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMediaItem {
    Id(i64),
    Descriptor {
        id: i64,
        #[serde(rename = "type", default)]
        kind: MediaKind,
    },
}

impl From<RawMediaItem> for MediaItem {
    fn from(raw: RawMediaItem) -> Self {
        match raw {
            RawMediaItem::Id(id) => Self::image(id),
            RawMediaItem::Descriptor { id, kind } => Self::new(id, kind),
        }
    }
}

/// Date string → items, ascending by date string
pub type DateBuckets = BTreeMap<String, Vec<MediaItem>>;

/// Parse a date-bucket payload from a JSON string
///
/// # Errors
///
/// Returns `PayloadError::JsonError` if the text is not a JSON object of
/// date → item arrays.
pub fn parse_buckets(json: &str) -> Result<DateBuckets> {
    let buckets: DateBuckets = serde_json::from_str(json)?;
    debug!(dates = buckets.len(), "parsed date buckets");
    Ok(buckets)
}

/// Load a date-bucket payload from a JSON file
///
/// # Errors
///
/// Returns `PayloadError` if the file cannot be read or parsed.
pub fn load_buckets(path: impl AsRef<Path>) -> Result<DateBuckets> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading date buckets");
    let text = fs::read_to_string(path)?;
    parse_buckets(&text)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
