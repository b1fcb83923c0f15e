//! Config command - show and change settings

use crate::{FotoreelError, cli::ConfigCommands, config::FotoreelConfig};
use colored::Colorize;
use std::path::Path;

type Result<T> = std::result::Result<T, FotoreelError>;

/// Execute a config subcommand against the file at `config_path`
///
/// # Errors
/// Returns an error if the configuration cannot be serialized, the key or
/// value is invalid, or the file cannot be written.
pub fn execute(command: &ConfigCommands, config: &FotoreelConfig, config_path: &Path, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(config)
                .map_err(|e| FotoreelError::InvalidInput(format!("Failed to render config: {e}")))?;
            print!("{rendered}");
        }
        ConfigCommands::Set { key, value } => {
            let mut updated = config.clone();
            updated.set_value(key, value)?;
            updated.save_to(config_path)?;
            if !quiet {
                println!("{} {key} = {value}", "Set".green());
            }
        }
        ConfigCommands::Path => {
            println!("{}", config_path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = FotoreelConfig::default();

        let command = ConfigCommands::Set {
            key: "extend_step".to_string(),
            value: "9".to_string(),
        };
        execute(&command, &config, &path, true).unwrap();

        let loaded = FotoreelConfig::load_from(&path).unwrap();
        assert_eq!(loaded.extend_step, 9);
    }

    #[test]
    fn test_set_invalid_value_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let command = ConfigCommands::Set {
            key: "max_range".to_string(),
            value: "1".to_string(),
        };
        assert!(execute(&command, &FotoreelConfig::default(), &path, true).is_err());
        assert!(!path.exists());
    }
}
