// crates/connector-check-cli/tests/validate_commands.rs
// ============================================================================
// Module: CLI Validation Command Tests
// Description: Integration tests for connector, params, and services commands.
// Purpose: Ensure JSON reports and exit codes match validation outcomes.
// Dependencies: connector-check binary
// ============================================================================
//! ## Overview
//! Drives the built `connector-check` binary against connector documents and
//! params files written to temporary directories.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use serde_json::Value;
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn connector_check_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_connector-check"))
}

/// Runs the binary inside `dir` with no config environment override.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(connector_check_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("CONNECTOR_CHECK_CONFIG")
        .output()
        .expect("run connector-check")
}

fn write_json(dir: &Path, name: &str, value: &Value) -> String {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec(value).expect("encode json")).expect("write json");
    path.to_string_lossy().into_owned()
}

fn write_text(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path.to_string_lossy().into_owned()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Verifies a complete email connector passes with exit code 0.
#[test]
fn email_connector_valid_exits_zero() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_json(
        dir.path(),
        "email.json",
        &json!({
            "config": { "from": "test@test.com", "service": "gmail", "hasAuth": true },
            "secrets": { "user": "user", "password": "pass" }
        }),
    );
    let output = run_in(dir.path(), &["connector", "--kind", "email", "--input", &input]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let report = stdout_json(&output);
    assert_eq!(report["valid"], true);
    assert_eq!(report["connector"], "email");
    assert_eq!(report["config"]["errors"]["from"], json!([]));
    assert_eq!(report["secrets"]["errors"]["clientSecret"], json!([]));
}

/// Verifies allowlist config blocks senders and exits with code 1.
#[test]
fn email_connector_not_allowed_sender_exits_one() {
    let dir = TempDir::new().expect("temp dir");
    let config = write_text(
        dir.path(),
        "connector-check.toml",
        "[addresses]\nallowed_domains = [\"test.com\"]\n",
    );
    let input = write_json(
        dir.path(),
        "email.json",
        &json!({
            "config": { "from": "test@notallowed.com", "service": "other" },
            "secrets": { "user": "only-user" }
        }),
    );
    let output = run_in(
        dir.path(),
        &["connector", "--kind", "email", "--input", &input, "--config", &config],
    );
    assert_eq!(output.status.code(), Some(1));
    let report = stdout_json(&output);
    assert_eq!(report["valid"], false);
    assert_eq!(
        report["config"]["errors"]["from"],
        json!(["Email address test@notallowed.com is not allowed."])
    );
    assert_eq!(report["config"]["errors"]["port"], json!(["Port is required."]));
    assert_eq!(report["config"]["errors"]["host"], json!(["Host is required."]));
    assert_eq!(
        report["secrets"]["errors"]["password"],
        json!(["Password is required when username is used."])
    );
}

/// Verifies ServiceNow reports include update readiness.
#[test]
fn servicenow_connector_reports_update_ready() {
    let dir = TempDir::new().expect("temp dir");
    let ready = write_json(
        dir.path(),
        "ready.json",
        &json!({
            "config": { "apiUrl": "https://dev.service-now.com" },
            "secrets": { "username": "admin", "password": "pw" }
        }),
    );
    let output = run_in(dir.path(), &["connector", "--kind", "servicenow", "--input", &ready]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["updateReady"], true);

    let insecure = write_json(
        dir.path(),
        "insecure.json",
        &json!({
            "config": { "apiUrl": "http://dev.service-now.com", "isOAuth": true },
            "secrets": {}
        }),
    );
    let output = run_in(dir.path(), &["connector", "--kind", "servicenow", "--input", &insecure]);
    assert_eq!(output.status.code(), Some(1));
    let report = stdout_json(&output);
    assert_eq!(report["connector"], "servicenow");
    assert_eq!(report["updateReady"], false);
    assert_eq!(report["config"]["errors"]["apiUrl"], json!(["URL must start with https://."]));
    assert_eq!(report["secrets"]["errors"]["privateKey"], json!(["Private Key is required."]));
}

/// Verifies params validation reports each recipient field.
#[test]
fn params_report_recipient_errors() {
    let dir = TempDir::new().expect("temp dir");
    let config = write_text(
        dir.path(),
        "connector-check.toml",
        "[addresses]\nallowed_domains = [\"test.com\"]\n",
    );
    let input = write_json(
        dir.path(),
        "params.json",
        &json!({
            "to": ["invalid.com"],
            "cc": ["bob@notallowed.com"],
            "bcc": ["another-invalid.com"],
            "subject": "test"
        }),
    );
    let output = run_in(dir.path(), &["params", "--input", &input, "--config", &config]);
    assert_eq!(output.status.code(), Some(1));
    let report = stdout_json(&output);
    assert_eq!(report["errors"]["to"], json!(["Email address invalid.com is not valid."]));
    assert_eq!(report["errors"]["cc"], json!(["Email address bob@notallowed.com is not allowed."]));
    assert_eq!(report["errors"]["bcc"], json!(["Email address another-invalid.com is not valid."]));
    assert_eq!(report["errors"]["message"], json!(["Message is required."]));
    assert_eq!(report["errors"]["subject"], json!([]));
}

/// Verifies the recipient rule is enabled from config.
#[test]
fn params_recipient_rule_follows_config() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_json(dir.path(), "params.json", &json!({ "message": "hello" }));
    let output = run_in(dir.path(), &["params", "--input", &input]);
    assert_eq!(output.status.code(), Some(0));

    write_text(dir.path(), "connector-check.toml", "[email]\nrequire_recipient = true\n");
    let output = run_in(dir.path(), &["params", "--input", &input]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_json(&output)["errors"]["to"],
        json!(["No To, Cc, or Bcc entry. At least one entry is required."])
    );
}

/// Verifies the service catalog honors the cloud flag from the env override.
#[test]
fn services_follow_cloud_flag() {
    let dir = TempDir::new().expect("temp dir");
    let output = run_in(dir.path(), &["services"]);
    assert_eq!(output.status.code(), Some(0));
    let values: Vec<Value> = stdout_json(&output)
        .as_array()
        .expect("array")
        .iter()
        .map(|entry| entry["value"].clone())
        .collect();
    assert!(!values.contains(&json!("elastic_cloud")));

    let config = write_text(dir.path(), "cloud.toml", "[email]\ncloud_enabled = true\n");
    let output = Command::new(connector_check_bin())
        .arg("services")
        .current_dir(dir.path())
        .env("CONNECTOR_CHECK_CONFIG", &config)
        .output()
        .expect("run connector-check");
    assert_eq!(output.status.code(), Some(0));
    let report = stdout_json(&output);
    let entries = report.as_array().expect("array");
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[3], json!({ "value": "elastic_cloud", "text": "Elastic Cloud" }));
}

/// Verifies audit events are appended to the configured file.
#[test]
fn audit_file_receives_events() {
    let dir = TempDir::new().expect("temp dir");
    let audit_path = dir.path().join("audit.jsonl");
    let config = write_text(
        dir.path(),
        "connector-check.toml",
        &format!("[audit]\nenabled = true\npath = \"{}\"\n", audit_path.display()),
    );
    let input = write_json(dir.path(), "params.json", &json!({ "to": ["a@b.com"] }));
    let output = run_in(dir.path(), &["params", "--input", &input, "--config", &config]);
    assert_eq!(output.status.code(), Some(1));
    let contents = fs::read_to_string(&audit_path).expect("audit file");
    let event: Value = serde_json::from_str(contents.trim()).expect("audit json");
    assert_eq!(event["target"], "params");
    assert_eq!(event["invalid_fields"], json!(["message"]));
    assert!(!contents.contains("a@b.com"));
}
