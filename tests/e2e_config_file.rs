/// End-to-end tests for config file discovery, validation and CLI option merging.
///
/// These tests run the binary from an isolated working directory so that
/// `os-support.config.yml` auto-discovery can be exercised with `tempfile`.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

fn release_notes() -> String {
    fixture("release-notes").display().to_string()
}

/// Write a config whose lifecycle lookups fail immediately.
fn write_config(dir: &std::path::Path, extra: &str) {
    let config = format!(
        "lifecycle_api_url: \"http://127.0.0.1:9/api/\"\n{}",
        extra
    );
    fs::write(dir.join("os-support.config.yml"), config).unwrap();
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_discovered_config_sets_platform_name() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "platform_name: \"Example Runtime\"\n");

    cargo_bin_cmd!("os-support")
        .current_dir(dir.path())
        .args(["check", "5"])
        .arg(release_notes())
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("* Example Runtime 5.0\n"));
}

#[test]
fn test_explicit_config_overrides_discovery() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "platform_name: \"Discovered\"\n");
    let explicit = dir.path().join("explicit.yml");
    fs::write(&explicit, "platform_name: \"Explicit\"\n").unwrap();

    cargo_bin_cmd!("os-support")
        .current_dir(dir.path())
        .args(["check", "5"])
        .arg(release_notes())
        .arg("--config")
        .arg(&explicit)
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("* Explicit 5.0\n"));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("os-support")
        .current_dir(dir.path())
        .args(["check", "5"])
        .arg(release_notes())
        .args(["--config", "does-not-exist.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_unknown_field_warns_but_runs() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "format: markdown\n");

    cargo_bin_cmd!("os-support")
        .current_dir(dir.path())
        .args(["check", "5"])
        .arg(release_notes())
        .assert()
        .code(0)
        .stderr(predicate::str::contains(
            "Unknown config field 'format' will be ignored",
        ));
}

#[test]
fn test_invalid_release_lines_fail() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "release_lines: [6, 8]\ncurrent_release_lines: [6, 7]\n",
    );

    cargo_bin_cmd!("os-support")
        .current_dir(dir.path())
        .args(["report", "--base"])
        .arg(release_notes())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("current_release_lines contains 7"));
}

#[test]
fn test_invalid_args_checked_before_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("os-support.config.yml"),
        "invalid: yaml: [[[broken",
    )
    .unwrap();

    cargo_bin_cmd!("os-support")
        .current_dir(dir.path())
        .args(["check", "eight"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid args."));
}

// ============================================================================
// CLI option merging
// ============================================================================

#[test]
fn test_cli_release_lines_override_config() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "release_lines: [6]\ncurrent_release_lines: [6]\n",
    );
    let template = dir.path().join("template.md");
    fs::write(&template, "PLACEHOLDER-FIRST-LEVEL-TARGETS\n").unwrap();

    cargo_bin_cmd!("os-support")
        .current_dir(dir.path())
        .args(["report", "--quiet", "--release-lines", "6,8", "--current", "8"])
        .arg("--base")
        .arg(release_notes())
        .arg("--template")
        .arg(&template)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[.NET 8.0]("))
        .stdout(predicate::str::contains("[.NET 6.0](").not());
}

#[test]
fn test_exceptions_suppress_nothing_when_checks_are_skipped() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "exceptions:\n  ubuntu:\n    - version: \"18.04\"\n      note: \"EOL in 2023\"\n",
    );

    cargo_bin_cmd!("os-support")
        .current_dir(dir.path())
        .args(["check", "5", "--fail-on-anomaly"])
        .arg(release_notes())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("This version is EOL"));
}
