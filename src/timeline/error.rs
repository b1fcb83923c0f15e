//! Timeline error types
//!
//! # Error Types
//!
//! - **`IndexError`**: the date key sequence violates its uniqueness invariant
//! - **`WindowError`**: a jump targeted an unknown date, or the window bounds
//!   were configured inconsistently
//! - **`TimelineError`**: session-level failures, wrapping the above and slide
//!   construction errors
//!
//! Clamping at either edge of the sequence is not an error; the window
//! operations are total over their clamped domain.

use thiserror::Error;

/// Errors raised while building a `DateIndex`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    /// The same date key appeared twice
    #[error("Duplicate date key: {0}")]
    DuplicateKey(String),
}

/// Errors raised by the sliding window
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    /// `move_to` was given a key absent from the index
    #[error("Date not found in timeline: {0}")]
    KeyNotFound(String),

    /// `max_range` is smaller than `min_range`
    #[error("Invalid window bounds: max_range {max} is smaller than min_range {min}")]
    InvalidBounds { min: usize, max: usize },
}

/// Errors raised by a `TimelineSession`
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    #[error("Slide error: {0}")]
    Slide(#[from] crate::slides::SlideError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_display() {
        let err = WindowError::KeyNotFound("2020-02-30".into());
        assert_eq!(err.to_string(), "Date not found in timeline: 2020-02-30");
    }

    #[test]
    fn test_invalid_bounds_display() {
        let err = WindowError::InvalidBounds { min: 5, max: 2 };
        assert!(err.to_string().contains("max_range 2"));
        assert!(err.to_string().contains("min_range 5"));
    }

    #[test]
    fn test_timeline_error_from_window_error() {
        let err: TimelineError = WindowError::KeyNotFound("x".into()).into();
        assert!(matches!(err, TimelineError::Window(WindowError::KeyNotFound(_))));
        assert!(err.to_string().starts_with("Window error:"));
    }
}
