//! Fotoreel - windowed navigation for a personal media library
//!
//! This library provides the navigation core of a media browser that presents
//! photos and videos by date (timeline), by folder (gallery), and by "on this
//! day" recall (flashback):
//!
//! - a sliding window over a very large ordered sequence of date buckets, so
//!   only a bounded number of dates is rendered at once
//! - a single slide cursor that steps through media items regardless of
//!   whether they come from a flat list, date buckets, or a folder tree

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod flashback;
pub mod gallery;
pub mod models;
pub mod output;
pub mod slides;
pub mod timeline;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FotoreelError {
    /// Payload could not be read or parsed
    #[error("Payload error: {0}")]
    PayloadError(#[from] models::PayloadError),
    /// Timeline window or session error
    #[error("Timeline error: {0}")]
    TimelineError(#[from] timeline::TimelineError),
    /// Window error outside a session
    #[error("Window error: {0}")]
    WindowError(#[from] timeline::WindowError),
    /// Slide construction error
    #[error("Slide error: {0}")]
    SlideError(#[from] slides::SlideError),
    /// Gallery navigation error
    #[error("Gallery error: {0}")]
    GalleryError(#[from] gallery::GalleryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
