//! Gallery command - browsing by folder

use crate::{
    FotoreelError,
    cli::{GalleryCommands, StepArgs},
    commands::present,
    config::FotoreelConfig,
    gallery::{self, FolderMode, GalleryTree},
    output,
    slides::SlideSequence,
};
use colored::Colorize;
use std::path::Path;

type Result<T> = std::result::Result<T, FotoreelError>;

/// Execute a gallery subcommand
///
/// # Errors
/// Returns an error if the tree cannot be loaded, the folder path does not
/// exist, or the start item is not among the folder's files.
pub fn execute(command: &GalleryCommands, config: &FotoreelConfig, quiet: bool) -> Result<()> {
    match command {
        GalleryCommands::List { tree, path, recursive } => {
            list_folder(tree, path, folder_mode(*recursive), config.preview_count, quiet)
        }
        GalleryCommands::Present {
            tree,
            path,
            recursive,
            steps,
        } => present_folder(tree, path, folder_mode(*recursive), steps, quiet),
    }
}

const fn folder_mode(recursive: bool) -> FolderMode {
    if recursive {
        FolderMode::Recursive
    } else {
        FolderMode::Single
    }
}

fn list_folder(tree: &Path, route_path: &str, mode: FolderMode, preview_count: usize, quiet: bool) -> Result<()> {
    let tree = GalleryTree::load(tree)?;
    let node = tree.resolve(route_path)?;

    if !quiet {
        println!("{}", breadcrumb_line(route_path).bold());
        if !node.has_sub_paths() && node.files.is_empty() {
            println!("Empty folder.");
            return Ok(());
        }
    }

    for name in node.sorted_sub_paths() {
        let sub_path = node.resolve(name)?;
        let preview = gallery::preview_sample(sub_path, preview_count);
        println!("{}", output::folder_entry(name, &sub_path.summary(), &preview, quiet));
    }

    for file in gallery::visible_files(node, mode) {
        println!("{}", output::file_entry(file, quiet));
    }
    Ok(())
}

fn present_folder(tree: &Path, route_path: &str, mode: FolderMode, steps: &StepArgs, quiet: bool) -> Result<()> {
    let tree = GalleryTree::load(tree)?;
    let node = tree.resolve(route_path)?;
    let sequence = SlideSequence::folder(node, mode, steps.start)?;

    present::step_through(sequence, steps, quiet);
    Ok(())
}

/// Breadcrumb trail for display, e.g. "/ 2019 / summer"
#[must_use]
pub fn breadcrumb_line(route_path: &str) -> String {
    let crumbs = gallery::breadcrumbs(route_path);
    if crumbs.is_empty() {
        "/".to_string()
    } else {
        format!("/ {}", crumbs.join(" / "))
    }
}
