// Integration tests for the jellygauge CLI.
//
// These tests use assert_cmd to invoke the binary and verify exit codes
// and stdout/stderr output. No live Jellyfin server is required: the
// network-facing tests point at a closed local port and assert the
// degradation behavior.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to build a Command for the jellygauge binary with a clean
/// environment and working directory.
fn jellygauge(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jellygauge").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env_remove("JELLYGAUGE_URL")
        .env_remove("JELLYGAUGE_TOKEN")
        .env_remove("JELLYGAUGE_USER_ID");
    cmd
}

fn write_config(dir: &TempDir, contents: &str) {
    fs::write(dir.path().join("jellygauge.toml"), contents).expect("config should write");
}

// Closed port: nothing should be listening on the discard port locally,
// so every request fails fast with a connection error.
const UNREACHABLE: &str = r#"
[server]
url = "http://127.0.0.1:9"
token = "test-token"

[limits]
request_timeout_secs = 2
overall_deadline_secs = 5
"#;

#[test]
fn cli_version_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    jellygauge(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jellygauge"));
}

#[test]
fn cli_help_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    jellygauge(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jellyfin library quality"));
}

#[test]
fn report_without_config_is_a_config_error() {
    let dir = TempDir::new().expect("temp dir should be created");
    jellygauge(&dir)
        .arg("report")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing required setting"));
}

#[test]
fn explicit_missing_config_file_is_reported() {
    let dir = TempDir::new().expect("temp dir should be created");
    jellygauge(&dir)
        .args(["report", "--config", "absent.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn malformed_config_is_a_parse_error() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_config(&dir, "[server\nurl = ");
    jellygauge(&dir)
        .arg("report")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn config_without_token_names_the_missing_setting() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_config(&dir, "[server]\nurl = \"http://127.0.0.1:9\"\n");
    jellygauge(&dir)
        .arg("report")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("server.token"));
}

#[test]
fn unreachable_server_degrades_to_an_all_zero_report() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_config(&dir, UNREACHABLE);
    jellygauge(&dir)
        .arg("report")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("TOTAL SCORE: 0.0%"))
        .stdout(predicate::str::contains("could not be measured"));
}

#[test]
fn degraded_report_still_lists_all_six_categories() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_config(&dir, UNREACHABLE);
    let assert = jellygauge(&dir).arg("report").assert().code(1);
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    for name in [
        "Content Quantity",
        "Content Quality",
        "Metadata Quality",
        "Library Structure",
        "Plugins",
        "Subtitles",
    ] {
        assert!(stdout.contains(name), "{name} missing from report");
    }
}

#[test]
fn json_format_emits_machine_readable_output() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_config(&dir, UNREACHABLE);
    jellygauge(&dir)
        .args(["report", "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"degraded\": true"))
        .stdout(predicate::str::contains("\"recommendation\""));
}

#[test]
fn check_against_unreachable_server_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_config(&dir, UNREACHABLE);
    jellygauge(&dir)
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn env_variables_substitute_for_the_config_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    jellygauge(&dir)
        .env("JELLYGAUGE_URL", "http://127.0.0.1:9")
        .env("JELLYGAUGE_TOKEN", "env-token")
        .arg("report")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("TOTAL SCORE: 0.0%"));
}
