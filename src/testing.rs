//! Testing utilities for fotoreel
//!
//! Fixture builders for date keys, bucket payloads, and gallery trees, plus a
//! `TempPayload` guard for tests that read payloads from disk.
//!
//! Only available when compiled with `cfg(test)`.

use crate::gallery::{GalleryFile, GalleryTree};
use crate::models::{DateBuckets, MediaItem, MediaKind};
use chrono::{Days, NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid base date")
}

/// `n` consecutive daily keys starting at 2020-01-01
///
/// # Examples
/// ```ignore
/// assert_eq!(date_keys(2), vec!["2020-01-01", "2020-01-02"]);
/// ```
pub fn date_keys(n: usize) -> Vec<String> {
    (0..n as u64)
        .map(|offset| {
            (base_date() + Days::new(offset))
                .format("%Y-%m-%d")
                .to_string()
        })
        .collect()
}

/// Image descriptors for the given ids
pub fn images(ids: &[i64]) -> Vec<MediaItem> {
    ids.iter().copied().map(MediaItem::image).collect()
}

/// Buckets from `(date, ids)` pairs, all items images
pub fn bucket_map(entries: &[(&str, Vec<i64>)]) -> DateBuckets {
    entries
        .iter()
        .map(|(date, ids)| ((*date).to_string(), images(ids)))
        .collect()
}

/// `n` consecutive days with one image each; ids start at 1
pub fn daily_buckets(n: usize) -> DateBuckets {
    date_keys(n)
        .into_iter()
        .zip(1..)
        .map(|(date, id)| (date, vec![MediaItem::image(id)]))
        .collect()
}

/// Three days with a mix of images and videos
pub fn sample_buckets() -> DateBuckets {
    let mut buckets = DateBuckets::new();
    buckets.insert("2020-01-01".into(), vec![MediaItem::image(1), MediaItem::video(2)]);
    buckets.insert("2020-01-02".into(), vec![MediaItem::image(3)]);
    buckets.insert("2020-01-03".into(), vec![MediaItem::image(4), MediaItem::image(5)]);
    buckets
}

/// An image file whose effective date is `day_offset` days after 2020-01-01
pub fn gallery_file(id: i64, day_offset: u64) -> GalleryFile {
    let date: NaiveDateTime = (base_date() + Days::new(day_offset))
        .and_hms_opt(12, 0, 0)
        .expect("valid time");
    GalleryFile::new(id, format!("file_{id}.jpg"), MediaKind::Image, date)
}

/// Like [`gallery_file`] but with an empty file name, to be filled from a path
pub fn unnamed_file(id: i64, day_offset: u64) -> GalleryFile {
    GalleryFile {
        file_name: String::new(),
        ..gallery_file(id, day_offset)
    }
}

/// A folder with its own files and named subfolders
pub fn folder(files: Vec<GalleryFile>, sub_paths: Vec<(&str, GalleryTree)>) -> GalleryTree {
    GalleryTree {
        sub_paths: sub_paths
            .into_iter()
            .map(|(name, tree)| (name.to_string(), tree))
            .collect(),
        files,
    }
}

/// A JSON payload written to a temporary directory, removed on drop
///
/// # Examples
/// ```ignore
/// let payload = TempPayload::new("timeline.json", r#"{"2020-01-01": [1]}"#);
/// let buckets = load_buckets(payload.path()).unwrap();
/// ```
pub struct TempPayload {
    _dir: TempDir,
    path: PathBuf,
}

impl TempPayload {
    /// Write `content` to `file_name` inside a fresh temporary directory
    ///
    /// # Panics
    /// Panics if the directory or file cannot be created.
    pub fn new(file_name: &str, content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(file_name);
        fs::write(&path, content).expect("Failed to write payload");
        Self { _dir: dir, path }
    }

    /// Path of the payload file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::load_buckets;

    #[test]
    fn test_date_keys_cross_month_boundary() {
        let keys = date_keys(33);
        assert_eq!(keys[0], "2020-01-01");
        assert_eq!(keys[30], "2020-01-31");
        assert_eq!(keys[31], "2020-02-01");
    }

    #[test]
    fn test_daily_buckets_ids() {
        let buckets = daily_buckets(3);
        assert_eq!(buckets["2020-01-03"], vec![MediaItem::image(3)]);
    }

    #[test]
    fn test_gallery_file_dates_order_by_offset() {
        assert!(gallery_file(1, 1).effective_date < gallery_file(2, 2).effective_date);
    }

    #[test]
    fn test_temp_payload_cleanup() {
        let path = {
            let payload = TempPayload::new("p.json", r#"{"2020-01-01": [1, 2]}"#);
            let buckets = load_buckets(payload.path()).unwrap();
            assert_eq!(buckets["2020-01-01"].len(), 2);
            payload.path().to_path_buf()
        };

        assert!(!path.exists());
    }
}
