//! CLI integration tests
//!
//! These tests verify that the binary works correctly with various options.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn pagegen() -> Command {
    Command::cargo_bin("pagegen").expect("Binary not found")
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    pagegen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pagegen"))
        .stdout(predicate::str::contains("--platform"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_cli_version() {
    pagegen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pagegen"));
}

#[test]
fn test_cli_requires_platform() {
    let empty = tempfile::tempdir().unwrap();

    pagegen()
        .args(["--path", empty.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required parameter"));
}

#[test]
fn test_cli_rejects_unsupported_platform() {
    pagegen()
        .args(["--platform", "ios"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_cli_generates_windows_pages() {
    let output = tempfile::tempdir().unwrap();

    pagegen()
        .args([
            "-t",
            "windows",
            "-p",
            fixtures_path().join("windows").to_str().unwrap(),
            "-o",
            output.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 1 page objects from 2 Windows files (1 skipped)"))
        .stderr(predicate::str::contains("Skipping"));

    assert!(output.path().join("MainPage.cs").exists());
    assert!(!output.path().join("ProfileCard.cs").exists());
}

#[test]
fn test_cli_json_format() {
    let output = tempfile::tempdir().unwrap();

    pagegen()
        .args([
            "--platform",
            "android",
            "--path",
            fixtures_path().join("android").to_str().unwrap(),
            "--output",
            output.path().to_str().unwrap(),
            "--format",
            "json",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(output.path().join("Login.json").exists());
    assert!(output.path().join("Empty.json").exists());
}

#[test]
fn test_cli_config_file() {
    let workspace = tempfile::tempdir().unwrap();
    let output = workspace.path().join("out");
    let config = workspace.path().join("pagegen.toml");
    std::fs::write(
        &config,
        format!(
            "platform = \"windows\"\nextension = \"g.cs\"\noutput = {:?}\n",
            output.to_str().unwrap()
        ),
    )
    .unwrap();

    pagegen()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--path",
            fixtures_path().join("windows").to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(output.join("MainPage.g.cs").exists());
}

#[test]
fn test_cli_empty_directory_warns() {
    let empty = tempfile::tempdir().unwrap();
    let output = empty.path().join("PageObjects");

    pagegen()
        .args([
            "-t",
            "android",
            "-p",
            empty.path().to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("No AXML files were found for processing"));

    assert!(!output.exists());
}
