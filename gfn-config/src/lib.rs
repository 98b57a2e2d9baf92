//! Gfn Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! Configuration is passed explicitly to the scanner and the logger.

use serde::{Deserialize, Serialize};

/// Log target shared by every lexer-phase event
pub const LEXER_TARGET: &str = "gfn::lexer";

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a JSON document; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Configuration for the scanner front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Initial buffer size in bytes when reading source from an `io::Read`
    pub read_capacity: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            read_capacity: 4096,
        }
    }
}

/// Verbosity threshold, ordered from quietest to loudest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Colored multi-line output for development
    Pretty,
    /// Single-line output
    Compact,
    /// JSON lines for tool integration
    Json,
}

/// Logging configuration with an optional lexer-specific override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub global: LogLevel,
    pub lexer: Option<LogLevel>,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LogLevel::Info,
            lexer: None,
            format: LogFormat::Compact,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> LogLevel {
        if target == LEXER_TARGET || target.starts_with("gfn::lexer::") {
            self.lexer.unwrap_or(self.global)
        } else {
            self.global
        }
    }
}
