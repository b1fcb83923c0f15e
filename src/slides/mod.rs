//! Slide navigation over ordered media sequences
//!
//! A `SlideSequence` lets a presentation overlay step forward and backward
//! through media items without knowing how the sequence was assembled.
//!
//! # Architecture
//!
//! - `source`: the `SlideSource` trait and its three implementations
//!   (flat list, date buckets, gallery folder)
//! - `sequence`: the single cursor type every source produces
//! - `error`: construction failures
//!
//! Reaching either end of a sequence is not an error: `advance` and `retreat`
//! return `SlideStep::Exhausted`, which callers treat as "close the
//! presentation".

mod error;
mod sequence;
mod source;

pub use error::{Result, SlideError};
pub use sequence::{SlideInfo, SlideSequence, SlideStep};
pub use source::{BucketSource, FlatSource, FolderSource, SlideSource};
