//! Gallery folder tree
//!
//! The gallery payload is a recursive folder tree. This module reads it, never
//! mutates it, and derives the views the gallery needs:
//!
//! - `tree`: `GalleryTree` / `GalleryFile`, construction from relative paths,
//!   route-path resolution, folder summaries
//! - `flatten`: recursive flattening, per-folder visible files, preview sampling
//! - `path`: breadcrumb helpers for `/`-separated route paths

mod error;
mod flatten;
mod path;
mod tree;

pub use error::{GalleryError, Result};
pub use flatten::{DEFAULT_PREVIEW_COUNT, FolderMode, flatten_recursive, preview_sample, visible_files};
pub use path::{breadcrumb_target, breadcrumbs, child_path};
pub use tree::{GalleryFile, GalleryTree};
