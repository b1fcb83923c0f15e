//! Flattening and preview sampling

use super::tree::{GalleryFile, GalleryTree};
use serde::{Deserialize, Serialize};

/// Number of thumbnails shown on a folder tile
pub const DEFAULT_PREVIEW_COUNT: usize = 4;

/// Which files of a folder are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderMode {
    /// Only the folder's own files, in stored order
    #[default]
    Single,
    /// The whole subtree, sorted by effective date
    Recursive,
}

/// Depth-first flattening: a folder's own files, then each subfolder by name
#[must_use]
pub fn flatten_recursive(node: &GalleryTree) -> Vec<&GalleryFile> {
    let mut files = Vec::with_capacity(node.file_count_recursive());
    collect_files(node, &mut files);
    files
}

fn collect_files<'a>(node: &'a GalleryTree, out: &mut Vec<&'a GalleryFile>) {
    out.extend(node.files.iter());
    for sub_path in node.sub_paths.values() {
        collect_files(sub_path, out);
    }
}

/// Files shown for `node` in the given mode
///
/// Recursive mode sorts by effective date ascending; the sort is stable, so
/// files sharing a date keep their depth-first order.
#[must_use]
pub fn visible_files(node: &GalleryTree, mode: FolderMode) -> Vec<&GalleryFile> {
    match mode {
        FolderMode::Single => node.files.iter().collect(),
        FolderMode::Recursive => {
            let mut files = flatten_recursive(node);
            files.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
            files
        }
    }
}

/// Ids of up to `count` evenly spaced files of `node`
///
/// With more than `count` files, picks indices `floor(len * i / count)`.
#[must_use]
pub fn preview_sample(node: &GalleryTree, count: usize) -> Vec<i64> {
    let files = &node.files;
    if files.len() <= count {
        return files.iter().map(|file| file.id).collect();
    }

    (0..count)
        .map(|i| files[files.len() * i / count].id)
        .collect()
}

#[cfg(test)]
#[path = "flatten_tests.rs"]
mod flatten_tests;
