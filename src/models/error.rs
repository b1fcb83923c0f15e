//! Payload error types

use thiserror::Error;

/// Errors that can occur while reading a media payload
#[derive(Debug, Error)]
pub enum PayloadError {
    /// IO error while reading the payload file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Payload is not valid JSON or does not match the expected shape
    #[error("Malformed payload: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for payload operations
pub type Result<T> = std::result::Result<T, PayloadError>;
