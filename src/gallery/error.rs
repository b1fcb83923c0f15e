//! Gallery error types

use thiserror::Error;

/// Errors raised while navigating a gallery tree
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    /// A route path names a folder that does not exist
    #[error("Folder not found: {0}")]
    PathNotFound(String),

    /// A relative file path has no file name component
    #[error("Invalid file path: {0:?}")]
    InvalidFilePath(String),
}

/// Result type for gallery operations
pub type Result<T> = std::result::Result<T, GalleryError>;
