// Depth ladder configuration structures
// Every section has a Default so a missing file or section still yields a usable config

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthConfig {
    pub logging: LoggingConfig,
    pub ladder: LadderConfig,
    pub feed: FeedConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file path; logs go to stderr when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Ladder rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// Forget tracker state for levels missing from the latest snapshot
    pub evict_absent_levels: bool,
    /// Width in characters of a full quantity bar in text output
    pub bar_width: u16,
}

/// Snapshot feed configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub queue_capacity: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            evict_absent_levels: true,
            bar_width: 15,
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 1024,
        }
    }
}

impl DepthConfig {
    /// Create configuration builder
    pub fn builder() -> DepthConfigBuilder {
        DepthConfigBuilder::new()
    }
}

/// Builder for DepthConfig
#[derive(Debug, Default)]
pub struct DepthConfigBuilder {
    config: DepthConfig,
}

impl DepthConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn log_file(mut self, file: impl Into<String>) -> Self {
        self.config.logging.file = Some(file.into());
        self
    }

    pub fn evict_absent_levels(mut self, enabled: bool) -> Self {
        self.config.ladder.evict_absent_levels = enabled;
        self
    }

    pub fn bar_width(mut self, width: u16) -> Self {
        self.config.ladder.bar_width = width;
        self
    }

    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.config.feed.queue_capacity = capacity;
        self
    }

    pub fn build(self) -> DepthConfig {
        self.config
    }
}
