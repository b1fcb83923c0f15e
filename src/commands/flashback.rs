//! Flashback command - "on this day" in previous years

use crate::{FotoreelError, flashback::Flashback, models::load_buckets, output};
use chrono::{Local, NaiveDate};
use colored::Colorize;
use std::path::Path;

type Result<T> = std::result::Result<T, FotoreelError>;

/// Execute the flashback command
///
/// Lists each matching date with its relative label. With `start`, also
/// prints the opening slide of a presentation over all flashback dates, or
/// over `date` alone when given.
///
/// # Errors
/// Returns an error if the payload cannot be loaded or `start` is not part
/// of the presented buckets.
pub fn execute(
    payload: &Path,
    today: Option<NaiveDate>,
    start: Option<i64>,
    date: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let buckets = load_buckets(payload)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let flashback = Flashback::new(&buckets, today);

    if !flashback.has_flashbacks() {
        if !quiet {
            println!("No memories from {} in earlier years.", today.format("%B %-d"));
        }
        return Ok(());
    }

    for key in flashback.dates() {
        let items: Vec<String> = flashback.bucket(key).iter().map(output::media_item).collect();
        if quiet {
            println!("{key}");
        } else {
            let label = flashback.label(key).unwrap_or_default();
            println!("  {} {} [{}]", label.bold(), key.dimmed(), items.join(", "));
        }
    }

    if let Some(item_id) = start {
        let sequence = match date {
            Some(date) => flashback.open_date_presentation(date, item_id)?,
            None => flashback.open_presentation(item_id)?,
        };
        println!("{}", output::slide(&sequence.info(), quiet));
    }
    Ok(())
}
