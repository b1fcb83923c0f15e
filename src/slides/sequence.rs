//! Cursor over an ordered item sequence

use super::error::{Result, SlideError};
use super::source::{BucketSource, FlatSource, FolderSource, SlideSource};
use crate::gallery::{FolderMode, GalleryTree};
use crate::models::{DateBuckets, MediaItem};
use serde::Serialize;
use tracing::debug;

/// Outcome of a navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideStep {
    /// The cursor moved to this position
    Positioned(usize),
    /// No further slide in that direction; the cursor did not move
    Exhausted,
}

impl SlideStep {
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Snapshot of the cursor state for a presentation overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideInfo {
    pub item: MediaItem,
    pub position: usize,
    pub total: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Ordered media items with a cursor
///
/// Invariant: `items` is non-empty and `cursor < items.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSequence {
    items: Vec<MediaItem>,
    cursor: usize,
}

impl SlideSequence {
    /// Build a sequence from any source, starting at the item with `start_id`
    ///
    /// # Errors
    ///
    /// Returns `SlideError::Empty` if the source yields no items, or
    /// `SlideError::ItemNotFound` if `start_id` is not among them.
    pub fn from_source<S: SlideSource + ?Sized>(source: &S, start_id: i64) -> Result<Self> {
        let items = source.items();
        if items.is_empty() {
            return Err(SlideError::Empty);
        }

        let cursor = items
            .iter()
            .position(|item| item.id == start_id)
            .ok_or(SlideError::ItemNotFound(start_id))?;

        debug!(start_id, cursor, total = items.len(), "slide sequence opened");
        Self::with_start_index(items, cursor)
    }

    /// Navigate a flat item list as-is
    ///
    /// # Errors
    ///
    /// See [`SlideSequence::from_source`].
    pub fn flat(items: &[MediaItem], start_id: i64) -> Result<Self> {
        Self::from_source(&FlatSource::new(items), start_id)
    }

    /// Navigate date buckets concatenated in `keys` order
    ///
    /// # Errors
    ///
    /// See [`SlideSequence::from_source`].
    pub fn bucketed(keys: &[String], buckets: &DateBuckets, start_id: i64) -> Result<Self> {
        Self::from_source(&BucketSource::new(keys, buckets), start_id)
    }

    /// Navigate the files of a gallery folder
    ///
    /// # Errors
    ///
    /// See [`SlideSequence::from_source`].
    pub fn folder(node: &GalleryTree, mode: FolderMode, start_id: i64) -> Result<Self> {
        Self::from_source(&FolderSource::new(node, mode), start_id)
    }

    /// Build a sequence when the start position is already known
    ///
    /// # Errors
    ///
    /// Returns `SlideError::Empty` for an empty list and
    /// `SlideError::IndexOutOfRange` if `start` is past the end.
    pub fn with_start_index(items: Vec<MediaItem>, start: usize) -> Result<Self> {
        if items.is_empty() {
            return Err(SlideError::Empty);
        }
        if start >= items.len() {
            return Err(SlideError::IndexOutOfRange {
                index: start,
                len: items.len(),
            });
        }
        Ok(Self {
            items,
            cursor: start,
        })
    }

    /// Item under the cursor
    #[must_use]
    pub fn current(&self) -> &MediaItem {
        &self.items[self.cursor]
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.items.len()
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Step to the next item
    pub fn advance(&mut self) -> SlideStep {
        if !self.has_next() {
            return SlideStep::Exhausted;
        }
        self.cursor += 1;
        SlideStep::Positioned(self.cursor)
    }

    /// Step to the previous item
    pub fn retreat(&mut self) -> SlideStep {
        if !self.has_previous() {
            return SlideStep::Exhausted;
        }
        self.cursor -= 1;
        SlideStep::Positioned(self.cursor)
    }

    #[must_use]
    pub fn info(&self) -> SlideInfo {
        SlideInfo {
            item: *self.current(),
            position: self.cursor,
            total: self.items.len(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod sequence_tests;
