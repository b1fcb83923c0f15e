//! Item sources for slide sequences
//!
//! Each source decides the navigation order for one kind of view:
//!
//! - `FlatSource`: the caller's slice, as-is
//! - `BucketSource`: date buckets concatenated in key order, bucket-internal
//!   order preserved
//! - `FolderSource`: a gallery folder's files, optionally flattened
//!   recursively and re-sorted by effective date

use crate::gallery::{FolderMode, GalleryTree, visible_files};
use crate::models::{DateBuckets, MediaItem};

/// Produces the ordered items a `SlideSequence` navigates
pub trait SlideSource {
    /// Items in navigation order
    fn items(&self) -> Vec<MediaItem>;
}

/// A pre-flattened list of items
#[derive(Debug, Clone, Copy)]
pub struct FlatSource<'a> {
    items: &'a [MediaItem],
}

impl<'a> FlatSource<'a> {
    #[must_use]
    pub const fn new(items: &'a [MediaItem]) -> Self {
        Self { items }
    }
}

impl SlideSource for FlatSource<'_> {
    fn items(&self) -> Vec<MediaItem> {
        self.items.to_vec()
    }
}

/// Date buckets visited in the order of `keys`
///
/// Keys without a bucket contribute nothing.
#[derive(Debug, Clone, Copy)]
pub struct BucketSource<'a> {
    keys: &'a [String],
    buckets: &'a DateBuckets,
}

impl<'a> BucketSource<'a> {
    #[must_use]
    pub const fn new(keys: &'a [String], buckets: &'a DateBuckets) -> Self {
        Self { keys, buckets }
    }
}

impl SlideSource for BucketSource<'_> {
    fn items(&self) -> Vec<MediaItem> {
        self.keys
            .iter()
            .filter_map(|key| self.buckets.get(key))
            .flatten()
            .copied()
            .collect()
    }
}

/// Files of one gallery folder
#[derive(Debug, Clone, Copy)]
pub struct FolderSource<'a> {
    node: &'a GalleryTree,
    mode: FolderMode,
}

impl<'a> FolderSource<'a> {
    #[must_use]
    pub const fn new(node: &'a GalleryTree, mode: FolderMode) -> Self {
        Self { node, mode }
    }
}

impl SlideSource for FolderSource<'_> {
    fn items(&self) -> Vec<MediaItem> {
        visible_files(self.node, self.mode)
            .into_iter()
            .map(|file| file.media_item())
            .collect()
    }
}
