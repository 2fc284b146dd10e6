//! Tests for the `plan` CLI command
//!
//! - `plan <snapshot>` - dry run of both policies
//! - `plan <snapshot> --policy external|lru` - one policy
//! - `plan <snapshot> --apply` - execute against the snapshot

use crate::common::{
    assert_contains, assert_json_type, assert_valid_json, paths_under, TestWorkspace,
};

fn solution() -> TestWorkspace {
    TestWorkspace::new()
        .project(r"C:\Src\Game\Game.vcxproj")
        .project(r"C:\Src\Tools\Tools.csproj")
        .document(1, r"C:\Src\Game\main.cpp")
        .document(2, r"C:\Users\dev\Downloads\readme.txt")
        .modified_document(3, r"C:\Temp\scratch.cpp")
        .document(4, r"C:\Src\Tools\Cli.cs")
        .shows(&[1, 2, 4, 3, 1])
}

#[test]
fn test_plan_external_only() {
    let ws = solution();
    let snapshot = ws.write_snapshot();

    let output = ws.run_cli_success(&[
        "plan",
        snapshot.to_str().unwrap(),
        "--policy",
        "external",
        "-f",
        "json",
    ]);
    let json = assert_valid_json(&output, "plan external");
    assert_json_type(&json, "sweep_plan");

    let plan = &json["plans"][0];
    assert_eq!(plan["policy"], "external");
    assert_eq!(
        paths_under(plan, "to_close"),
        vec![r"C:\Users\dev\Downloads\readme.txt".to_string()]
    );
    assert_eq!(
        paths_under(plan, "skipped_modified"),
        vec![r"C:\Temp\scratch.cpp".to_string()]
    );
}

#[test]
fn test_plan_lru_uses_configured_count() {
    let ws = solution();
    ws.write_config("[lru]\ncount = 1\n");
    let snapshot = ws.write_snapshot();

    let output = ws.run_cli_success(&[
        "plan",
        snapshot.to_str().unwrap(),
        "--policy",
        "lru",
        "-f",
        "json",
    ]);
    let json = assert_valid_json(&output, "plan lru");
    // Show order 1, 2, 4, 3, 1: document 2 is the oldest
    assert_eq!(
        paths_under(&json["plans"][0], "to_close"),
        vec![r"C:\Users\dev\Downloads\readme.txt".to_string()]
    );
}

#[test]
fn test_plan_lru_count_flag_and_close_modified() {
    let ws = solution();
    let snapshot = ws.write_snapshot();

    let output = ws.run_cli_success(&[
        "plan",
        snapshot.to_str().unwrap(),
        "--policy",
        "lru",
        "--lru-count",
        "3",
        "--close-modified",
        "-f",
        "json",
    ]);
    let json = assert_valid_json(&output, "plan lru forced");
    let plan = &json["plans"][0];
    assert_eq!(
        paths_under(plan, "to_close"),
        vec![
            r"C:\Users\dev\Downloads\readme.txt".to_string(),
            r"C:\Temp\scratch.cpp".to_string(),
            r"C:\Src\Tools\Cli.cs".to_string(),
        ]
    );
    assert!(paths_under(plan, "skipped_modified").is_empty());
}

#[test]
fn test_plan_lru_disabled() {
    let ws = solution();
    ws.write_config("[lru]\nenabled = false\n");
    let snapshot = ws.write_snapshot();

    let output = ws.run_cli_success(&["plan", snapshot.to_str().unwrap(), "--policy", "lru"]);
    assert_contains(&output, "[lru]");
    assert_contains(&output, "nothing to close");
}

#[test]
fn test_apply_reports_closed_and_remaining() {
    let ws = solution();
    let snapshot = ws.write_snapshot();

    let output = ws.run_cli_success(&["plan", snapshot.to_str().unwrap(), "--apply", "-f", "json"]);
    let json = assert_valid_json(&output, "apply");
    assert_json_type(&json, "sweep_report");

    let external = &json["reports"][0];
    assert_eq!(
        paths_under(external, "closed"),
        vec![r"C:\Users\dev\Downloads\readme.txt".to_string()]
    );

    // LRU drains 2 and 4; 2 was already closed by the external pass
    let lru = &json["reports"][1];
    assert_eq!(lru["stale"], serde_json::json!([2]));
    assert_eq!(
        paths_under(lru, "closed"),
        vec![r"C:\Src\Tools\Cli.cs".to_string()]
    );

    assert_eq!(json["remaining_documents"], 2);
}

#[test]
fn test_plan_missing_snapshot_fails() {
    let ws = TestWorkspace::new();
    let (code, stderr) = ws.run_cli_failure(&["plan", "nope.json"]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "File not found");
}

#[test]
fn test_plan_invalid_snapshot_fails() {
    let ws = TestWorkspace::new();
    std::fs::write(ws.snapshot_path(), "{ not json").unwrap();
    let (code, stderr) = ws.run_cli_failure(&["plan", "workspace.json"]);
    assert_eq!(code, 3);
    assert_contains(&stderr, "Invalid workspace snapshot");
}

#[test]
fn test_plan_invalid_config_fails() {
    let ws = solution();
    ws.write_config("close_modified = \"often\"\n");
    let snapshot = ws.write_snapshot();
    let (code, stderr) = ws.run_cli_failure(&["plan", snapshot.to_str().unwrap()]);
    assert_eq!(code, 2);
    assert_contains(&stderr, "Configuration error");
}
