// Configuration module for the depth ladder
// Loads TOML files into DepthConfig and validates the values the engine relies on

use std::fs;
use std::path::Path;
use thiserror::Error;

pub mod system_config;

pub use system_config::*;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl DepthConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a file, falling back to defaults when the file is missing
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::FileNotFound(path)) => {
                log::warn!("Configuration file {} not found, using defaults", path);
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DepthConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML text
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to disk
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.queue_capacity == 0 {
            return Err(ConfigError::Invalid("feed.queue_capacity must be greater than 0".to_string()));
        }

        if self.ladder.bar_width == 0 {
            return Err(ConfigError::Invalid("ladder.bar_width must be greater than 0".to_string()));
        }

        if self.log_level_filter().is_none() {
            return Err(ConfigError::Invalid(format!(
                "Unknown log level '{}'. Valid levels are: {:?}",
                self.logging.level, LOG_LEVELS
            )));
        }

        Ok(())
    }

    /// Parse the configured log level
    pub fn log_level_filter(&self) -> Option<log::LevelFilter> {
        self.logging.level.parse().ok()
    }
}
