//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for fotoreel using the `clap` crate.
//! Payloads are JSON files as produced by the media server:
//!
//! - timeline / flashback: `{"2020-01-01": [{"id": 1, "type": "IMAGE"}, 2]}`
//! - gallery: `{"sub_paths": {...}, "files": [{"id": 1, "effective_date": ...}]}`
//!
//! # Commands
//!
//! - **timeline window**: show the dates a sliding window exposes
//! - **timeline present**: step through slides across all dates
//! - **gallery list**: show a folder with subfolder previews and files
//! - **gallery present**: step through a folder's slides
//! - **flashback**: "on this day" in previous years
//! - **config**: show or change settings
//! - **completions**: generate shell completions

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "fotoreel")]
#[command(about = "Browse a media library by date, folder, and day of year", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

/// Shared arguments for stepping through a presentation
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct StepArgs {
    /// Item id to open the presentation at
    #[arg(short = 's', long = "start", value_name = "ID")]
    pub start: i64,

    /// Number of slides to advance
    #[arg(short = 'n', long = "forward", value_name = "N", default_value_t = 0)]
    pub forward: usize,

    /// Number of slides to go back after advancing
    #[arg(short = 'b', long = "backward", value_name = "N", default_value_t = 0)]
    pub backward: usize,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Browse media by date
    #[command(visible_alias = "t")]
    Timeline {
        #[command(subcommand)]
        command: TimelineCommands,
    },

    /// Browse media by folder
    #[command(visible_alias = "g")]
    Gallery {
        #[command(subcommand)]
        command: GalleryCommands,
    },

    /// Show media taken on this day in previous years
    #[command(visible_alias = "f")]
    Flashback {
        /// Date bucket payload (JSON)
        #[arg(value_name = "PAYLOAD")]
        payload: PathBuf,

        /// Day to recall (defaults to today)
        #[arg(long = "today", value_name = "YYYY-MM-DD")]
        today: Option<NaiveDate>,

        /// Open a presentation at this item id and print it
        #[arg(short = 's', long = "start", value_name = "ID")]
        start: Option<i64>,

        /// Limit the presentation to this flashback date
        #[arg(short = 'd', long = "date", value_name = "YYYY-MM-DD", requires = "start")]
        date: Option<String>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Timeline subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TimelineCommands {
    /// Show the dates currently inside the window
    #[command(visible_alias = "w")]
    Window {
        /// Date bucket payload (JSON)
        #[arg(value_name = "PAYLOAD")]
        payload: PathBuf,

        /// Jump so the window starts at this date
        #[arg(short = 'j', long = "jump", value_name = "DATE")]
        jump: Option<String>,

        /// Scroll signals to apply above the window, after any jump
        #[arg(long = "extend-top", value_name = "N")]
        extend_top: Option<usize>,

        /// Scroll signals to apply below the window, after any jump
        #[arg(long = "extend-bottom", value_name = "N")]
        extend_bottom: Option<usize>,

        /// Viewport height used to decide which sections load immediately
        #[arg(long = "viewport-height", value_name = "PX", default_value_t = 800)]
        viewport_height: u32,
    },

    /// Step through slides spanning every date
    #[command(visible_alias = "p")]
    Present {
        /// Date bucket payload (JSON)
        #[arg(value_name = "PAYLOAD")]
        payload: PathBuf,

        #[command(flatten)]
        steps: StepArgs,
    },
}

/// Gallery subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum GalleryCommands {
    /// Show a folder: subfolders with previews, then files
    #[command(visible_alias = "ls")]
    List {
        /// Gallery tree payload (JSON)
        #[arg(value_name = "TREE")]
        tree: PathBuf,

        /// Folder to show, as a `/`-separated path (defaults to the root)
        #[arg(short = 'p', long = "path", value_name = "PATH", default_value = "")]
        path: String,

        /// Include files of all subfolders, sorted by date
        #[arg(short = 'r', long = "recursive")]
        recursive: bool,
    },

    /// Step through the slides of a folder
    #[command(visible_alias = "p")]
    Present {
        /// Gallery tree payload (JSON)
        #[arg(value_name = "TREE")]
        tree: PathBuf,

        /// Folder to present, as a `/`-separated path (defaults to the root)
        #[arg(short = 'p', long = "path", value_name = "PATH", default_value = "")]
        path: String,

        /// Include files of all subfolders, sorted by date
        #[arg(short = 'r', long = "recursive")]
        recursive: bool,

        #[command(flatten)]
        steps: StepArgs,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set
        #[arg(value_name = "KEY")]
        key: String,

        /// New value
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Print the config file location
    Path,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
