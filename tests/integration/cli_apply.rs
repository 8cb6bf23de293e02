//! End-to-end tests running the bindsync binary.

use serde_json::json;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use crate::integration::{read_json, write_json};

fn bindsync(home: &Path, lang: &str, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_bindsync");
    Command::new(bin)
        .env_clear()
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_STATE_HOME", home.join("state"))
        .env("LANG", lang)
        .arg("--workspace")
        .arg(home)
        .arg("--quiet")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_apply_writes_sibling_outputs() {
    let temp = TempDir::new().unwrap();
    let source = write_json(temp.path(), "src.json", &json!({"move": {"key": "W"}}));
    let a = write_json(temp.path(), "a.json", &json!({"move": {"key": "UP"}, "chat": {"key": "T"}}));
    let b = write_json(temp.path(), "b.json", &json!({"move": {}}));

    let output = bindsync(
        temp.path(),
        "C",
        &[
            "apply",
            "-s",
            source.to_str().unwrap(),
            "-t",
            a.to_str().unwrap(),
            "-t",
            b.to_str().unwrap(),
        ],
    );

    assert!(
        output.status.success(),
        "apply should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated files:"));
    assert_eq!(
        read_json(&temp.path().join("a_mybind.json")),
        json!({"move": {"key": "W"}, "chat": {}})
    );
    assert_eq!(read_json(&temp.path().join("b_mybind.json")), json!({"move": {"key": "W"}}));
}

#[test]
fn test_apply_json_report_with_output_file() {
    let temp = TempDir::new().unwrap();
    let source = write_json(temp.path(), "src.json", &json!({"jump": {"key": "SPACE"}}));
    let a = write_json(temp.path(), "a.json", &json!({"jump": {"key": "J"}}));
    let chosen = temp.path().join("final.json");

    let output = bindsync(
        temp.path(),
        "C",
        &[
            "apply",
            "-s",
            source.to_str().unwrap(),
            "-t",
            a.to_str().unwrap(),
            "--output-file",
            chosen.to_str().unwrap(),
            "--format",
            "json",
        ],
    );

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outputs"][0]["output"], chosen.to_str().unwrap());
    assert_eq!(read_json(&chosen), json!({"jump": {"key": "SPACE"}}));
}

#[test]
fn test_load_failure_exits_nonzero_with_localized_message() {
    let temp = TempDir::new().unwrap();
    let source = write_json(temp.path(), "src.json", &json!({}));
    let broken = temp.path().join("broken.json");
    std::fs::write(&broken, "{\"move\": ").unwrap();

    let output = bindsync(
        temp.path(),
        "fr_FR.UTF-8",
        &[
            "apply",
            "-s",
            source.to_str().unwrap(),
            "-t",
            broken.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Impossible de charger"),
        "expected French load error, got: {}",
        stderr
    );
    assert!(!temp.path().join("broken_mybind.json").exists());
}

#[test]
fn test_keep_going_reports_failures_and_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let source = write_json(temp.path(), "src.json", &json!({"move": {"key": "W"}}));
    let missing = temp.path().join("missing.json");
    let b = write_json(temp.path(), "b.json", &json!({"move": {}}));

    let output = bindsync(
        temp.path(),
        "C",
        &[
            "apply",
            "-s",
            source.to_str().unwrap(),
            "-t",
            missing.to_str().unwrap(),
            "-t",
            b.to_str().unwrap(),
            "--keep-going",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Some targets could not be processed"));
    assert!(temp.path().join("b_mybind.json").exists());
}

#[test]
fn test_preview_prints_merged_document() {
    let temp = TempDir::new().unwrap();
    let source = write_json(temp.path(), "src.json", &json!({"move": {"key": "W"}}));
    let a = write_json(temp.path(), "a.json", &json!({"move": {"key": "UP", "sens": 2}}));

    let output = bindsync(
        temp.path(),
        "C",
        &["preview", "-s", source.to_str().unwrap(), "-t", a.to_str().unwrap()],
    );

    assert!(output.status.success());
    let merged: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(merged, json!({"move": {"key": "W", "sens": 2}}));
    assert!(!temp.path().join("a_mybind.json").exists());
}

#[test]
fn test_workspace_pattern_is_used() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("bindsync.toml"),
        "[batch]\nnaming_pattern = \"{base}-synced.json\"\n",
    )
    .unwrap();
    let source = write_json(temp.path(), "src.json", &json!({}));
    let a = write_json(temp.path(), "a.json", &json!({}));

    let output = bindsync(
        temp.path(),
        "C",
        &["apply", "-s", source.to_str().unwrap(), "-t", a.to_str().unwrap()],
    );

    assert!(output.status.success());
    assert!(temp.path().join("a-synced.json").exists());
}
