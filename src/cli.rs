//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Editor tab housekeeping: find external and least recently used documents
#[derive(Parser, Debug)]
#[command(name = "tabsweep")]
#[command(about = "Decide which open editor documents are external or least recently used")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file [default: $TABSWEEP_CONFIG or <config dir>/tabsweep/config.toml]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

// ============================================
// Main Commands Enum
// ============================================

/// Available subcommands for tabsweep
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify paths as local or external to a set of projects
    #[command(visible_alias = "c")]
    Classify(ClassifyArgs),

    /// Replay a workspace snapshot and show what each policy would close
    #[command(visible_alias = "p")]
    Plan(PlanArgs),

    /// Manage tabsweep settings
    Config(ConfigArgs),
}

// ============================================
// Classify Subcommand
// ============================================

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Project file or directory considered local (repeatable)
    #[arg(short, long = "project", value_name = "LOCATION")]
    pub projects: Vec<String>,

    /// Document paths to classify
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<String>,
}

// ============================================
// Plan Subcommand
// ============================================

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Workspace snapshot (JSON with projects, documents and shows)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Which policy to run
    #[arg(long, default_value = "all", value_enum)]
    pub policy: PolicyArg,

    /// Override lru.count from the settings file
    #[arg(long, value_name = "N")]
    pub lru_count: Option<usize>,

    /// Treat documents with unsaved changes as closable
    #[arg(long)]
    pub close_modified: bool,

    /// Execute the plan against the snapshot and report what was closed
    #[arg(long)]
    pub apply: bool,
}

/// Policy selection for the plan command
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Documents outside every loaded project
    External,
    /// Least recently shown documents
    Lru,
    /// External first, then LRU
    #[default]
    All,
}

// ============================================
// Config Subcommand
// ============================================

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub operation: ConfigOperation,
}

/// Config operations
#[derive(Subcommand, Debug)]
pub enum ConfigOperation {
    /// Show the effective settings
    Show,

    /// Print one setting (close_modified, lru.enabled, lru.count, logging.level)
    Get {
        /// Setting key
        key: String,
    },

    /// Change one setting and save the file
    Set {
        /// Setting key
        key: String,
        /// New value
        value: String,
    },

    /// Reset settings to defaults and save the file
    Reset,

    /// Print the settings file location
    Path,
}

// ============================================
// Shared Enums
// ============================================

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default for terminal)
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// JSON - standard JSON output for machine parsing
    Json,
}
