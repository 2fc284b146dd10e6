//! TestWorkspace builder: a temp dir holding a workspace snapshot and a
//! settings file, plus helpers to run the `tabsweep` binary against them.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

pub struct TestWorkspace {
    dir: TempDir,
    projects: Vec<String>,
    documents: Vec<Value>,
    shows: Vec<u64>,
}

impl TestWorkspace {
    /// Create a new empty workspace
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
            projects: Vec::new(),
            documents: Vec::new(),
            shows: Vec::new(),
        }
    }

    /// Get the path to the temp dir
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.path().join("workspace.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Add a loaded project (file or directory location)
    pub fn project(mut self, location: &str) -> Self {
        self.projects.push(location.to_string());
        self
    }

    /// Add an open, unmodified document
    pub fn document(mut self, id: u64, path: &str) -> Self {
        self.documents
            .push(json!({ "id": id, "path": path, "modified": false }));
        self
    }

    /// Add an open document with unsaved changes
    pub fn modified_document(mut self, id: u64, path: &str) -> Self {
        self.documents
            .push(json!({ "id": id, "path": path, "modified": true }));
        self
    }

    /// Record show events, oldest first
    pub fn shows(mut self, ids: &[u64]) -> Self {
        self.shows.extend_from_slice(ids);
        self
    }

    /// Write the snapshot file and return its path
    pub fn write_snapshot(&self) -> PathBuf {
        let snapshot = json!({
            "projects": self.projects,
            "documents": self.documents,
            "shows": self.shows,
        });
        let path = self.snapshot_path();
        fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap())
            .expect("Failed to write snapshot");
        path
    }

    /// Write the settings file
    pub fn write_config(&self, content: &str) -> &Self {
        fs::write(self.config_path(), content).expect("Failed to write config");
        self
    }

    /// Run the tabsweep binary with this workspace's settings file
    pub fn run_cli(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_tabsweep"))
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .env("TABSWEEP_CONFIG", self.config_path())
            .args(args)
            .output()
    }

    /// Run CLI and expect success, return stdout
    pub fn run_cli_success(&self, args: &[&str]) -> String {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            output.status.success(),
            "CLI command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run CLI and expect failure, return (exit code, stderr)
    pub fn run_cli_failure(&self, args: &[&str]) -> (i32, String) {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            !output.status.success(),
            "CLI command {:?} should have failed",
            args
        );
        (
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
