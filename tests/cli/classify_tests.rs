//! Tests for the `classify` CLI command

use crate::common::{assert_contains, assert_json_type, assert_valid_json, TestWorkspace};

#[test]
fn test_classify_windows_paths_json() {
    let ws = TestWorkspace::new();
    let output = ws.run_cli_success(&[
        "classify",
        "-p",
        r"c:\proj\a",
        "-p",
        r"c:\proj\b",
        r"c:\proj\a\file.cs",
        r"c:\other\file.cs",
        r"c:\proj\ab\file.cs",
        "-f",
        "json",
    ]);
    let json = assert_valid_json(&output, "classify windows paths");
    assert_json_type(&json, "classification");

    let locals: Vec<bool> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["local"].as_bool().unwrap())
        .collect();
    // The third path matches through the loose substring test
    assert_eq!(locals, vec![true, false, true]);
}

#[test]
fn test_classify_project_file_uses_its_directory() {
    let ws = TestWorkspace::new();
    let output = ws.run_cli_success(&[
        "classify",
        "--project",
        "/Work/App/App.csproj",
        "/work/app/Program.cs",
        "/work/lib/Lib.cs",
    ]);
    assert_contains(&output, "  - /work/app");
    assert_contains(&output, "local     /work/app/Program.cs");
    assert_contains(&output, "external  /work/lib/Lib.cs");
}

#[test]
fn test_classify_requires_a_path() {
    let ws = TestWorkspace::new();
    let (code, stderr) = ws.run_cli_failure(&["classify", "-p", "/work/app"]);
    assert_eq!(code, 2);
    assert_contains(&stderr, "PATH");
}
