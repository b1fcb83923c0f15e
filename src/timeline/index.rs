//! Ordered, immutable date key sequence with position lookup

use super::error::IndexError;
use crate::models::DateBuckets;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Direction the timeline is displayed in
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineOrder {
    /// Most recent date first
    #[default]
    NewestFirst,
    /// Oldest date first
    OldestFirst,
}

/// Immutable sequence of date keys in display order
///
/// Built once per dataset load and replaced wholesale on reload. Keys are
/// unique; callers are responsible for supplying them already ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateIndex {
    keys: Vec<String>,
    positions: HashMap<String, usize>,
}

impl DateIndex {
    /// Build an index over `keys`, kept in the given order
    ///
    /// # Errors
    ///
    /// Returns `IndexError::DuplicateKey` if a key occurs more than once.
    pub fn new(keys: Vec<String>) -> Result<Self, IndexError> {
        let mut positions = HashMap::with_capacity(keys.len());
        for (position, key) in keys.iter().enumerate() {
            if positions.insert(key.clone(), position).is_some() {
                return Err(IndexError::DuplicateKey(key.clone()));
            }
        }
        Ok(Self { keys, positions })
    }

    /// Build an index over the dates of a bucket payload
    #[must_use]
    pub fn from_buckets(buckets: &DateBuckets, order: TimelineOrder) -> Self {
        let keys: Vec<String> = match order {
            TimelineOrder::OldestFirst => buckets.keys().cloned().collect(),
            TimelineOrder::NewestFirst => buckets.keys().rev().cloned().collect(),
        };
        let positions = keys
            .iter()
            .enumerate()
            .map(|(position, key)| (key.clone(), position))
            .collect();
        Self { keys, positions }
    }

    /// Position of `key`, if present
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&str> {
        self.keys.get(position).map(String::as_str)
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
