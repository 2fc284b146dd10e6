//! Command modules for the tabsweep CLI
//!
//! Each command module implements a single top-level command:
//! - `classify` - Local/external classification of ad-hoc paths
//! - `plan` - Run the sweep policies over a workspace snapshot
//! - `config` - Inspect and edit the settings file
//!
//! All command handlers take their respective `Args` struct from `cli.rs`
//! and a shared `CommandContext`, and return the text to print.

pub mod classify;
pub mod config;
pub mod plan;

pub use classify::run_classify;
pub use config::run_config;
pub use plan::run_plan;

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::{default_config_path, SweepConfig};
use crate::error::{Result, TabSweepError};

/// Shared context passed to all command handlers
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Output format (text or json)
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
    /// Settings file in effect
    pub config_path: PathBuf,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            verbose: false,
            config_path: default_config_path(),
        }
    }
}

impl CommandContext {
    /// Create a new CommandContext from CLI args
    pub fn from_cli(format: OutputFormat, verbose: bool, config: Option<PathBuf>) -> Self {
        Self {
            format,
            verbose,
            config_path: config.unwrap_or_else(default_config_path),
        }
    }

    /// Load the settings file in effect
    pub fn load_config(&self) -> Result<SweepConfig> {
        SweepConfig::load_from(&self.config_path)
    }
}

/// Pretty-print a JSON value
pub(crate) fn to_json(value: &serde_json::Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| TabSweepError::OutputError {
        message: format!("JSON serialization failed: {}", e),
    })
}

/// Section banner used by text output
pub(crate) fn banner(title: &str) -> String {
    let rule = "═".repeat(55);
    format!("{rule}\n  {title}\n{rule}\n\n")
}
