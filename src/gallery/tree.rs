//! Gallery tree types and construction

use super::error::{GalleryError, Result};
use crate::models::{MediaItem, MediaKind};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A media file as listed in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryFile {
    pub id: i64,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_type: MediaKind,
    pub effective_date: NaiveDateTime,
}

impl GalleryFile {
    #[must_use]
    pub fn new(id: i64, file_name: impl Into<String>, file_type: MediaKind, effective_date: NaiveDateTime) -> Self {
        Self {
            id,
            file_name: file_name.into(),
            file_type,
            effective_date,
        }
    }

    /// Descriptor handed to slide navigation
    #[must_use]
    pub const fn media_item(&self) -> MediaItem {
        MediaItem::new(self.id, self.file_type)
    }
}

/// One folder: named subfolders plus its own files in stored order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GalleryTree {
    #[serde(default)]
    pub sub_paths: BTreeMap<String, GalleryTree>,
    #[serde(default)]
    pub files: Vec<GalleryFile>,
}

impl GalleryTree {
    /// Build a tree from `(relative_path, file)` pairs
    ///
    /// Directory components of each path become nested folders; files keep
    /// their input order inside a folder. A file with an empty `file_name`
    /// takes the last path component.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::InvalidFilePath` for a path without a file name.
    pub fn from_files<I, P>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, GalleryFile)>,
        P: AsRef<str>,
    {
        let mut root = Self::default();

        for (rel_path, mut file) in entries {
            let rel_path = rel_path.as_ref();
            let mut components: Vec<&str> = rel_path.split('/').filter(|c| !c.is_empty()).collect();
            let file_name = components
                .pop()
                .ok_or_else(|| GalleryError::InvalidFilePath(rel_path.to_string()))?;

            if file.file_name.is_empty() {
                file.file_name = file_name.to_string();
            }

            let folder = components.into_iter().fold(&mut root, |node, component| {
                node.sub_paths.entry(component.to_string()).or_default()
            });
            folder.files.push(file);
        }

        debug!(files = root.file_count_recursive(), "gallery tree built");
        Ok(root)
    }

    /// Parse a tree from JSON
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::JsonError` if the text is not a gallery tree.
    pub fn parse(json: &str) -> crate::models::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a tree from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `PayloadError` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> crate::models::Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading gallery tree");
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Walk a `/`-separated route path from this folder
    ///
    /// An empty path resolves to `self`.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::PathNotFound` if any component is missing.
    pub fn resolve(&self, route_path: &str) -> Result<&Self> {
        route_path
            .split('/')
            .filter(|component| !component.is_empty())
            .try_fold(self, |node, component| {
                node.sub_paths
                    .get(component)
                    .ok_or_else(|| GalleryError::PathNotFound(route_path.to_string()))
            })
    }

    /// Subfolder names, ascending
    #[must_use]
    pub fn sorted_sub_paths(&self) -> Vec<&str> {
        self.sub_paths.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn has_sub_paths(&self) -> bool {
        !self.sub_paths.is_empty()
    }

    #[must_use]
    pub fn file_count_recursive(&self) -> usize {
        self.files.len()
            + self
                .sub_paths
                .values()
                .map(Self::file_count_recursive)
                .sum::<usize>()
    }

    /// Short description of the folder contents, e.g. "2 folders and 1 file"
    #[must_use]
    pub fn summary(&self) -> String {
        let folders = plural(self.sub_paths.len(), "folder");
        let files = plural(self.files.len(), "file");

        match (folders, files) {
            (Some(folders), Some(files)) => format!("{folders} and {files}"),
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => String::new(),
        }
    }
}

fn plural(count: usize, noun: &str) -> Option<String> {
    match count {
        0 => None,
        1 => Some(format!("1 {noun}")),
        n => Some(format!("{n} {noun}s")),
    }
}
