use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/flagquiz/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("flagquiz").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - A round needs at least two options to be a choice at all
    /// - Points must be positive
    /// - The provider needs a base URL and a username
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiz.option_count < 2 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "option_count must be at least 2, got {}",
                    self.quiz.option_count
                ),
            });
        }

        if self.quiz.points_on_correct < 1 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "points_on_correct must be positive, got {}",
                    self.quiz.points_on_correct
                ),
            });
        }

        if self.provider.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "provider base_url must not be empty".to_string(),
            });
        }

        if self.provider.username.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "provider username must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
