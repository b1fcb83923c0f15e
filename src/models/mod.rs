//! Media payload model
//!
//! Types shared by the timeline, flashback, and slide modules:
//!
//! - **`MediaItem`**: an opaque media descriptor (`id` + `MediaKind`)
//! - **`DateBuckets`**: date string → items, ascending by date
//!
//! Payloads arrive once from an external collaborator as JSON. Bucket entries
//! may be full descriptors (`{"id": 1, "type": "VIDEO"}`) or bare ids.

mod error;
mod types;

pub use error::{PayloadError, Result};
pub use types::{DateBuckets, MediaItem, MediaKind, load_buckets, parse_buckets};
