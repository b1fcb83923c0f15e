//! Configuration module for fotoreel
//!
//! Manages the tunables of the timeline window, gallery previews, and the
//! day-section reveal delay. Configuration is stored in the user's config
//! directory (`~/.config/fotoreel/config.toml` on Linux).

use crate::gallery::DEFAULT_PREVIEW_COUNT;
use crate::timeline::TimelineOrder;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keys accepted by [`FotoreelConfig::set_value`]
pub const CONFIG_KEYS: &[&str] = &[
    "min_range",
    "max_range",
    "extend_step",
    "preview_count",
    "visibility_delay_ms",
    "section_height_px",
    "timeline_order",
    "quiet",
];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FotoreelConfig {
    /// Width of the timeline window right after a jump
    pub min_range: usize,

    /// Hard cap on the timeline window width
    pub max_range: usize,

    /// Dates revealed per scroll signal
    pub extend_step: usize,

    /// Thumbnails sampled for a folder tile
    pub preview_count: usize,

    /// Time a day section must stay visible before it loads
    pub visibility_delay_ms: u64,

    /// Estimated rendered height of one day section
    pub section_height_px: u32,

    /// Display direction of the timeline
    pub timeline_order: TimelineOrder,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for FotoreelConfig {
    fn default() -> Self {
        Self {
            min_range: 10,
            max_range: 40,
            extend_step: 5,
            preview_count: DEFAULT_PREVIEW_COUNT,
            visibility_delay_ms: 150,
            section_height_px: 200,
            timeline_order: TimelineOrder::NewestFirst,
            quiet: false,
        }
    }
}

impl FotoreelConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("fotoreel").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load and validate configuration from an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or if the
    /// values are inconsistent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading config");
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Check that the values are consistent with each other
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `max_range < min_range` or `preview_count` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_range < self.min_range {
            return Err(ConfigError::Message(format!(
                "max_range ({}) must not be smaller than min_range ({})",
                self.max_range, self.min_range
            )));
        }
        if self.preview_count == 0 {
            return Err(ConfigError::Message("preview_count must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Set a single key from its string form, then validate
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key, an unparseable value, or a
    /// value that leaves the configuration inconsistent. On error `self` is
    /// left unchanged.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.clone();
        match key {
            "min_range" => updated.min_range = parse_value(key, value)?,
            "max_range" => updated.max_range = parse_value(key, value)?,
            "extend_step" => updated.extend_step = parse_value(key, value)?,
            "preview_count" => updated.preview_count = parse_value(key, value)?,
            "visibility_delay_ms" => updated.visibility_delay_ms = parse_value(key, value)?,
            "section_height_px" => updated.section_height_px = parse_value(key, value)?,
            "quiet" => updated.quiet = parse_value(key, value)?,
            "timeline_order" => {
                updated.timeline_order = match value {
                    "newest-first" => TimelineOrder::NewestFirst,
                    "oldest-first" => TimelineOrder::OldestFirst,
                    _ => {
                        return Err(ConfigError::Message(format!(
                            "Invalid value '{value}' for timeline_order (expected newest-first or oldest-first)"
                        )));
                    }
                };
            }
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown config key '{key}' (valid keys: {})",
                    CONFIG_KEYS.join(", ")
                )));
            }
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Message(format!("Invalid value '{value}' for {key}")))
}
