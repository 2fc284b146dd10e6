//! Tests for the `config` CLI command

use crate::common::{assert_contains, assert_valid_json, TestWorkspace};

#[test]
fn test_config_show_defaults() {
    let ws = TestWorkspace::new();
    let output = ws.run_cli_success(&["config", "show"]);
    assert_contains(&output, "close_modified = false");
    assert_contains(&output, "count = 2");
    assert_contains(&output, "level = \"info\"");
}

#[test]
fn test_config_set_persists() {
    let ws = TestWorkspace::new();
    ws.run_cli_success(&["config", "set", "close_modified", "true"]);
    ws.run_cli_success(&["config", "set", "lru.count", "5"]);

    assert!(ws.config_path().exists());
    assert_eq!(ws.run_cli_success(&["config", "get", "lru.count"]), "5\n");

    let output = ws.run_cli_success(&["config", "show", "-f", "json"]);
    let json = assert_valid_json(&output, "config show json");
    assert_eq!(json["close_modified"], true);
    assert_eq!(json["lru"]["count"], 5);
}

#[test]
fn test_config_explicit_path_flag() {
    let ws = TestWorkspace::new();
    let other = ws.path().join("elsewhere.toml");
    let other_str = other.to_str().unwrap();

    ws.run_cli_success(&["config", "set", "lru.enabled", "false", "--config", other_str]);
    assert!(other.exists());
    assert!(!ws.config_path().exists());

    let path = ws.run_cli_success(&["config", "path", "--config", other_str]);
    assert_eq!(path.trim(), other_str);
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let ws = TestWorkspace::new();
    let (code, stderr) = ws.run_cli_failure(&["config", "set", "cache.dir", "/tmp"]);
    assert_eq!(code, 2);
    assert_contains(&stderr, "Unknown configuration key");
}

#[test]
fn test_config_reset() {
    let ws = TestWorkspace::new();
    ws.write_config("[lru]\ncount = 9\n");
    ws.run_cli_success(&["config", "reset"]);
    assert_eq!(ws.run_cli_success(&["config", "get", "lru.count"]), "2\n");
}
