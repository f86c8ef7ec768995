//! Configuration loading and typed config structures for the clock display.
//!
//! The canonical configuration is a small YAML document. This module
//! defines a strongly-typed struct mirroring it and provides a loader
//! that reads the file. Mode and half-day are carried as strings here
//! and parsed into typed values by
//! [`ClockDisplay::from_config`](crate::display::ClockDisplay::from_config).

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Clock display configuration.
///
/// All fields have defaults: a 24-hour clock starting at 00:00 AM.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClockConfig {
    /// Display mode name: `24-hour` (aliases `24h`, `twenty-four-hour`)
    /// or `12-hour` (aliases `12h`, `twelve-hour`). Case-insensitive.
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Starting hour (validated against the mode's hours modulus).
    #[serde(default)]
    pub start_hour: u32,

    /// Starting minute (0-59).
    #[serde(default)]
    pub start_minute: u32,

    /// Starting half-day, `am` or `pm`. Only applies in 12-hour mode.
    #[serde(default = "default_meridiem")]
    pub start_meridiem: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            start_hour: 0,
            start_minute: 0,
            start_meridiem: default_meridiem(),
        }
    }
}

impl ClockConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_mode() -> String {
    "24-hour".to_owned()
}

fn default_meridiem() -> String {
    "am".to_owned()
}
