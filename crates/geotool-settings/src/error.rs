//! Error types for the settings crate.
//!
//! This module provides structured error types for configuration loading,
//! saving and validation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the engine config.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The config file exists but could not be read.
    #[error("Cannot read engine config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The config file or its directory could not be written.
    #[error("Cannot write engine config {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The platform reports no config directory.
    #[error("No platform config directory")]
    NoConfigDirectory,

    #[error("Malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot encode TOML config: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// The file parsed but its values were rejected.
    #[error("Invalid engine config: {0}")]
    Invalid(#[from] ConfigError),
}

/// Errors related to configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A configuration value is out of valid range.
    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },

    /// Two values are inconsistent with each other.
    #[error("Inconsistent configuration: {0}")]
    Inconsistent(String),
}

impl ConfigError {
    pub(crate) fn out_of_range(key: &str, value: f64) -> Self {
        ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
