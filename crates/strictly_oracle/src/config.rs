//! Oracle configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::Player;
use tracing::{debug, info, instrument};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON document per command.
    Json,
}

/// Configuration for the oracle CLI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct OracleConfig {
    /// Mark the human plays in interactive games.
    #[serde(default = "default_human")]
    human: Player,

    /// Print search statistics alongside engine moves.
    #[serde(default)]
    show_stats: bool,

    /// Output format for command results.
    #[serde(default)]
    format: OutputFormat,
}

fn default_human() -> Player {
    Player::X
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            show_stats: false,
            format: OutputFormat::default(),
        }
    }
}

impl OracleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, format = ?config.format, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = OracleConfig::default();
        assert_eq!(*config.human(), Player::X);
        assert!(!*config.show_stats());
        assert_eq!(*config.format(), OutputFormat::Text);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human = \"O\"\nshow_stats = true\nformat = \"json\"").unwrap();

        let config = OracleConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.human(), Player::O);
        assert!(*config.show_stats());
        assert_eq!(*config.format(), OutputFormat::Json);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_stats = true").unwrap();

        let config = OracleConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.human(), Player::X);
        assert_eq!(*config.format(), OutputFormat::Text);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = OracleConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, OracleConfig::default());
    }

    #[test]
    fn test_bad_file_reports_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human = \"Z\"").unwrap();

        let err = OracleConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_setters_override() {
        let config = OracleConfig::default()
            .with_format(OutputFormat::Json)
            .with_show_stats(true);
        assert_eq!(*config.format(), OutputFormat::Json);
        assert!(*config.show_stats());
    }
}
