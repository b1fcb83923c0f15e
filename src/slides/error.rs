//! Slide error types

use thiserror::Error;

/// Errors raised while constructing a `SlideSequence`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlideError {
    /// The start item is not part of the computed sequence
    #[error("Item {0} is not part of this slide sequence")]
    ItemNotFound(i64),

    /// The start position is past the end of the sequence
    #[error("Start position {index} is out of range for {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The source produced no items
    #[error("Slide sequence has no items")]
    Empty,
}

/// Result type for slide operations
pub type Result<T> = std::result::Result<T, SlideError>;
