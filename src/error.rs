//! Error types and exit codes for tabsweep-engine

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for tabsweep-engine operations
///
/// The locality index and the access tracker never produce these: bad paths
/// degrade to "external" and unknown ids are skipped. Errors only come from
/// the surfaces around them (settings file, snapshots, host close actions).
#[derive(Error, Debug)]
pub enum TabSweepError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error at {path}: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid workspace snapshot: {message}")]
    SnapshotError { message: String },

    #[error("Host error: {message}")]
    Host { message: String },

    #[error("Failed to render output: {message}")]
    OutputError { message: String },
}

impl TabSweepError {
    /// Convert error to the process exit code:
    /// - 0: Success
    /// - 1: File not found / IO error / output rendering
    /// - 2: Configuration error
    /// - 3: Snapshot error
    /// - 4: Host refused an action
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Raw status byte behind [`exit_code`](Self::exit_code)
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::FileNotFound { .. } | Self::IoError { .. } | Self::OutputError { .. } => 1,
            Self::ConfigError { .. } => 2,
            Self::SnapshotError { .. } => 3,
            Self::Host { .. } => 4,
        }
    }
}

/// Result type alias for tabsweep-engine operations
pub type Result<T> = std::result::Result<T, TabSweepError>;
