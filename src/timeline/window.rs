//! Sliding window over a `DateIndex`
//!
//! The window is a contiguous, bounded slice of date keys that can grow from
//! either edge, shrink at the opposite edge once it exceeds `max_range`, or
//! jump to start at an arbitrary key with width `min_range`.
//!
//! Bounds arithmetic:
//!
//! ```text
//! keys:    0   1   2   3   4   5   6   7   8   9
//!                          ^top        ^bottom
//! visible:                 [4, 5, 6]              (bottom is exclusive)
//! width:   bottom - top = 3
//! ```
//!
//! `bottom` never moves past the last key's index, so the last key itself is
//! only ever reached as `top` after a jump.

use super::error::WindowError;
use super::index::DateIndex;
use tracing::debug;

/// Current window bounds into a `DateIndex`
///
/// Invariant: `top <= bottom <= len` and `bottom - top <= max_range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowRange {
    pub top: usize,
    pub bottom: usize,
}

impl WindowRange {
    #[must_use]
    pub const fn new(top: usize, bottom: usize) -> Self {
        Self { top, bottom }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.bottom - self.top
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top == self.bottom
    }

    /// Whether `position` falls inside the materialized slice
    #[must_use]
    pub const fn contains(&self, position: usize) -> bool {
        self.top <= position && position < self.bottom
    }
}

/// Owns a `DateIndex` and the window currently exposed for rendering
#[derive(Debug, Clone)]
pub struct WindowManager {
    index: DateIndex,
    range: WindowRange,
    min_range: usize,
    max_range: usize,
}

impl WindowManager {
    /// Create a manager whose initial window starts at the first key
    ///
    /// # Errors
    ///
    /// Returns `WindowError::InvalidBounds` if `max_range < min_range`.
    pub fn new(index: DateIndex, min_range: usize, max_range: usize) -> Result<Self, WindowError> {
        if max_range < min_range {
            return Err(WindowError::InvalidBounds {
                min: min_range,
                max: max_range,
            });
        }

        let mut manager = Self {
            index,
            range: WindowRange::default(),
            min_range,
            max_range,
        };
        manager.range = manager.fill_from(0);
        Ok(manager)
    }

    #[must_use]
    pub const fn index(&self) -> &DateIndex {
        &self.index
    }

    #[must_use]
    pub const fn range(&self) -> WindowRange {
        self.range
    }

    #[must_use]
    pub const fn min_range(&self) -> usize {
        self.min_range
    }

    #[must_use]
    pub const fn max_range(&self) -> usize {
        self.max_range
    }

    /// Keys in the current window, `keys[top..bottom]`
    #[must_use]
    pub fn visible(&self) -> &[String] {
        &self.index.keys()[self.range.top..self.range.bottom]
    }

    /// Jump so the window starts at `key`, resetting its width to `min_range`
    ///
    /// On an empty index this is a no-op returning an empty slice.
    ///
    /// # Errors
    ///
    /// Returns `WindowError::KeyNotFound` if `key` is not in the index.
    pub fn move_to(&mut self, key: &str) -> Result<&[String], WindowError> {
        if self.index.is_empty() {
            return Ok(self.visible());
        }

        let top = self
            .index
            .index_of(key)
            .ok_or_else(|| WindowError::KeyNotFound(key.to_string()))?;
        self.range = self.fill_from(top);

        debug!(key, top = self.range.top, bottom = self.range.bottom, "window moved");
        Ok(self.visible())
    }

    /// Reveal up to `count` more keys above the window
    ///
    /// If the window grows past `max_range`, the bottom edge is pulled up.
    pub fn extend_top(&mut self, count: usize) -> &[String] {
        let WindowRange { top, mut bottom } = self.range;
        let top = top.saturating_sub(count);

        if bottom - top > self.max_range {
            bottom = top + self.max_range;
            debug!(top, bottom, "window clamped at bottom");
        }

        self.range = WindowRange::new(top, bottom);
        self.visible()
    }

    /// Reveal up to `count` more keys below the window
    ///
    /// If the window grows past `max_range`, the top edge is pulled down.
    pub fn extend_bottom(&mut self, count: usize) -> &[String] {
        let WindowRange { mut top, bottom } = self.range;
        let bottom = bottom.saturating_add(count).min(self.last_index());

        if bottom - top > self.max_range {
            top = bottom - self.max_range;
            debug!(top, bottom, "window clamped at top");
        }

        self.range = WindowRange::new(top, bottom);
        self.visible()
    }

    fn fill_from(&self, top: usize) -> WindowRange {
        let bottom = top.saturating_add(self.min_range).min(self.last_index());
        WindowRange::new(top, bottom)
    }

    fn last_index(&self) -> usize {
        self.index.len().saturating_sub(1)
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod window_tests;
