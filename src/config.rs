//! Sweep settings
//!
//! Settings live in a TOML file at, in order of precedence:
//! - the path given with `--config`
//! - `$TABSWEEP_CONFIG`
//! - `<config dir>/tabsweep/config.toml` (see [`fs_utils::get_config_base_dir`])
//!
//! A missing file means defaults.
//!
//! ```toml
//! close_modified = false
//!
//! [lru]
//! enabled = true
//! count = 2
//!
//! [logging]
//! level = "info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TabSweepError;
use crate::fs_utils;

/// Environment variable overriding the settings file location
pub const CONFIG_ENV_VAR: &str = "TABSWEEP_CONFIG";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Sweep configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Close documents with unsaved changes too. When false only
    /// unmodified documents are closed.
    #[serde(default)]
    pub close_modified: bool,

    /// Least-recently-used closing
    #[serde(default)]
    pub lru: LruConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// LRU policy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LruConfig {
    /// Track show events and allow LRU sweeps
    #[serde(default = "default_lru_enabled")]
    pub enabled: bool,

    /// Documents drained per LRU sweep
    #[serde(default = "default_lru_count")]
    pub count: usize,
}

fn default_lru_enabled() -> bool {
    true
}

fn default_lru_count() -> usize {
    2
}

impl Default for LruConfig {
    fn default() -> Self {
        Self {
            enabled: default_lru_enabled(),
            count: default_lru_count(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Settings file location when none is given explicitly
pub fn default_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => fs_utils::get_config_base_dir().join("config.toml"),
    }
}

impl SweepConfig {
    /// Load configuration from the default path
    pub fn load() -> Result<Self, TabSweepError> {
        Self::load_from(&default_config_path())
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, TabSweepError> {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| TabSweepError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self, TabSweepError> {
        let config: Self = toml::from_str(content).map_err(|e| TabSweepError::ConfigError {
            message: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the file format allows but the engine does not
    pub fn validate(&self) -> Result<(), TabSweepError> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(TabSweepError::ConfigError {
                message: format!(
                    "Invalid log level: {}. Must be one of: {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<(), TabSweepError> {
        self.save_to(&default_config_path())
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<(), TabSweepError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| TabSweepError::IoError {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| TabSweepError::ConfigError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        // Atomic write
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(|e| TabSweepError::IoError {
            path: temp_path.clone(),
            message: e.to_string(),
        })?;

        fs_utils::atomic_rename(&temp_path, path).map_err(|e| TabSweepError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    /// Get a configuration value by key path (e.g., "lru.count")
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["close_modified"] => Some(self.close_modified.to_string()),
            ["lru", "enabled"] => Some(self.lru.enabled.to_string()),
            ["lru", "count"] => Some(self.lru.count.to_string()),
            ["logging", "level"] => Some(self.logging.level.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key path
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), TabSweepError> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["close_modified"] => self.close_modified = parse_bool(key, value)?,
            ["lru", "enabled"] => self.lru.enabled = parse_bool(key, value)?,
            ["lru", "count"] => {
                self.lru.count = value.parse().map_err(|_| TabSweepError::ConfigError {
                    message: format!("Invalid value for {}: {} (expected a count)", key, value),
                })?;
            }
            ["logging", "level"] => {
                if !LOG_LEVELS.contains(&value) {
                    return Err(TabSweepError::ConfigError {
                        message: format!(
                            "Invalid log level: {}. Must be one of: {}",
                            value,
                            LOG_LEVELS.join(", ")
                        ),
                    });
                }
                self.logging.level = value.to_string();
            }
            _ => {
                return Err(TabSweepError::ConfigError {
                    message: format!("Unknown configuration key: {}", key),
                });
            }
        }
        Ok(())
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Display configuration as formatted text
    pub fn display(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("close_modified = {}\n", self.close_modified));

        output.push_str("\n[lru]\n");
        output.push_str(&format!("enabled = {}\n", self.lru.enabled));
        output.push_str(&format!("count = {}\n", self.lru.count));

        output.push_str("\n[logging]\n");
        output.push_str(&format!("level = \"{}\"\n", self.logging.level));

        output
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, TabSweepError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(TabSweepError::ConfigError {
            message: format!("Invalid value for {}: {} (expected true or false)", key, value),
        }),
    }
}
