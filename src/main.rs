//! Fotoreel CLI application entry point
//!
//! Command-line front end over the fotoreel navigation core. Payloads are
//! JSON files exported by the media server; every command loads its payload,
//! replays the requested navigation, and prints the result.
//!
//! # Usage
//!
//! ```bash
//! # Dates around 2020-01-10, then two scroll signals further down
//! fotoreel timeline window dates.json --jump 2020-01-10 --extend-bottom 2
//!
//! # Open item 42 and step three slides forward
//! fotoreel timeline present dates.json --start 42 --forward 3
//!
//! # Browse a folder with all nested files sorted by date
//! fotoreel gallery list tree.json --path 2019/summer --recursive
//!
//! # What happened on this day in earlier years
//! fotoreel flashback dates.json
//!
//! # Quiet mode (only output results)
//! fotoreel -q timeline window dates.json
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/fotoreel/config.toml` on Linux) and are created with defaults
//! on first run. Set `RUST_LOG` or pass `--verbose` for diagnostics on stderr.

use clap::CommandFactory;
use fotoreel::{
    FotoreelError,
    cli::{Cli, Commands},
    commands, completions,
    config::FotoreelConfig,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, FotoreelError>;

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "fotoreel=debug" } else { "fotoreel=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Resolve the config file and load it
///
/// An explicit file that does not exist yet yields the defaults, so
/// `config set` can create it.
fn load_config(explicit: Option<&Path>) -> Result<(FotoreelConfig, PathBuf)> {
    match explicit {
        Some(path) if path.exists() => Ok((FotoreelConfig::load_from(path)?, path.to_path_buf())),
        Some(path) => Ok((FotoreelConfig::default(), path.to_path_buf())),
        None => Ok((FotoreelConfig::load()?, FotoreelConfig::config_path()?)),
    }
}

/// Main entry point for the fotoreel CLI application
///
/// Parses command-line arguments, loads configuration, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `FotoreelError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    if let Commands::Completions { shell } = &cli.command {
        completions::generate_static(*shell, &mut Cli::command(), &mut io::stdout());
        return Ok(());
    }

    let (config, config_path) = load_config(cli.config.as_deref())?;
    debug!(path = %config_path.display(), "configuration loaded");

    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Timeline { command } => commands::timeline(command, &config, quiet)?,
        Commands::Gallery { command } => commands::gallery(command, &config, quiet)?,
        Commands::Flashback {
            payload,
            today,
            start,
            date,
        } => commands::flashback(payload, *today, *start, date.as_deref(), quiet)?,
        Commands::Config { command } => commands::config(command, &config, &config_path, quiet)?,
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}
