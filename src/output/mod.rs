//! Output formatting for CLI display
//!
//! This module provides utilities for formatting timeline sections, slides,
//! and gallery entries. In quiet mode every formatter returns the bare
//! identifier so output can be piped into other tools.

use crate::gallery::GalleryFile;
use crate::models::{MediaItem, MediaKind};
use crate::slides::SlideInfo;
use crate::timeline::{DaySection, WindowRange};
use colored::Colorize;

/// Short form of an item: `#12` for images, `#12 (video)` for videos
#[must_use]
pub fn media_item(item: &MediaItem) -> String {
    match item.kind {
        MediaKind::Image => format!("#{}", item.id),
        MediaKind::Video => format!("#{} (video)", item.id),
    }
}

/// Format a day section with its items
#[must_use]
pub fn day_section(section: &DaySection<'_>, quiet: bool) -> String {
    if quiet {
        return section.date.to_string();
    }

    let items: Vec<String> = section.items.iter().map(media_item).collect();
    let count = match section.items.len() {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    };
    let date = if section.revealed {
        section.date.bold().to_string()
    } else {
        section.date.dimmed().to_string()
    };

    format!("  {date} ({count}) [{}]", items.join(", "))
}

/// Describe the window position, e.g. "Showing dates 5-7 of 10"
#[must_use]
pub fn window_status(range: WindowRange, total: usize) -> String {
    if range.is_empty() {
        format!("Showing no dates of {total}")
    } else {
        format!("Showing dates {}-{} of {}", range.top + 1, range.bottom, total)
    }
}

/// Format the cursor state of a presentation
#[must_use]
pub fn slide(info: &SlideInfo, quiet: bool) -> String {
    if quiet {
        return info.item.id.to_string();
    }

    let previous = if info.has_previous { "<" } else { " " };
    let next = if info.has_next { ">" } else { " " };
    format!(
        "  {previous} [{}/{}] {} {next}",
        info.position + 1,
        info.total,
        media_item(&info.item).cyan()
    )
}

/// Format a subfolder tile with its summary and preview ids
#[must_use]
pub fn folder_entry(name: &str, summary: &str, preview: &[i64], quiet: bool) -> String {
    if quiet {
        return format!("{name}/");
    }

    let preview: Vec<String> = preview.iter().map(|id| format!("#{id}")).collect();
    format!(
        "  {}/ {} [{}]",
        name.blue().bold(),
        summary.dimmed(),
        preview.join(", ")
    )
}

/// Format a gallery file with its effective date
#[must_use]
pub fn file_entry(file: &GalleryFile, quiet: bool) -> String {
    if quiet {
        return file.id.to_string();
    }

    format!(
        "  {} {} ({})",
        media_item(&file.media_item()),
        file.file_name,
        file.effective_date.format("%Y-%m-%d %H:%M")
    )
}
