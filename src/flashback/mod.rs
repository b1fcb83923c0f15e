//! "On this day" recall
//!
//! Selects the date buckets whose month and day match today's in earlier
//! years, labels them relative to today, and opens slide sequences over them.

use crate::models::{DateBuckets, MediaItem};
use crate::slides::{self, SlideSequence};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

/// Date format of bucket keys
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Flashback buckets for one day, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flashback {
    today: Option<NaiveDate>,
    dates: Vec<String>,
    buckets: DateBuckets,
}

impl Flashback {
    /// Keep the buckets of `buckets` that fall on today's month and day in a
    /// previous year
    #[must_use]
    pub fn new(buckets: &DateBuckets, today: NaiveDate) -> Self {
        let selected: DateBuckets = buckets
            .iter()
            .filter(|(key, _)| is_flashback_of(key, today))
            .map(|(key, items)| (key.clone(), items.clone()))
            .collect();
        let dates = selected.keys().rev().cloned().collect();

        debug!(today = %today, dates = selected.len(), "flashback selected");
        Self {
            today: Some(today),
            dates,
            buckets: selected,
        }
    }

    /// Matching dates, newest first
    #[must_use]
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    #[must_use]
    pub fn has_flashbacks(&self) -> bool {
        !self.dates.is_empty()
    }

    /// Items of one flashback date
    #[must_use]
    pub fn bucket(&self, date: &str) -> &[MediaItem] {
        self.buckets.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Relative label for one flashback date, e.g. "Last year"
    #[must_use]
    pub fn label(&self, date: &str) -> Option<String> {
        let today = self.today?;
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
        Some(years_ago_label(date, today))
    }

    /// Slides over every flashback date, newest first
    ///
    /// # Errors
    ///
    /// Returns `SlideError` if `item_id` is not part of any flashback bucket.
    pub fn open_presentation(&self, item_id: i64) -> slides::Result<SlideSequence> {
        SlideSequence::bucketed(&self.dates, &self.buckets, item_id)
    }

    /// Slides over a single flashback date
    ///
    /// # Errors
    ///
    /// Returns `SlideError::Empty` if `date` is not a flashback date, or
    /// `SlideError::ItemNotFound` if `item_id` is not in its bucket.
    pub fn open_date_presentation(&self, date: &str, item_id: i64) -> slides::Result<SlideSequence> {
        SlideSequence::flat(self.bucket(date), item_id)
    }
}

fn is_flashback_of(key: &str, today: NaiveDate) -> bool {
    match NaiveDate::parse_from_str(key, DATE_FORMAT) {
        Ok(date) => date.month() == today.month() && date.day() == today.day() && date.year() < today.year(),
        Err(e) => {
            warn!(key, error = %e, "skipping bucket with unparseable date");
            false
        }
    }
}

/// "Last year" for one year back, "N years ago" otherwise
#[must_use]
pub fn years_ago_label(date: NaiveDate, today: NaiveDate) -> String {
    match today.year() - date.year() {
        1 => "Last year".to_string(),
        years => format!("{years} years ago"),
    }
}
