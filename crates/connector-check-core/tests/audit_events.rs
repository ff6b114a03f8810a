// crates/connector-check-core/tests/audit_events.rs
// ============================================================================
// Module: Validation Audit Tests
// Description: Audit event emission from validators and sinks.
// Purpose: Ensure each call emits one redacted event.
// ============================================================================

//! Validation audit event tests.

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
    reason = "Test-only assertions and helpers are permitted."
)]

mod common;

use std::sync::Arc;

use common::KeywordClassifier;
use common::RecordingSink;
use common::TestResult;
use common::credentials;
use common::email_config;
use connector_check_core::ConnectorKind;
use connector_check_core::EmailActionParams;
use connector_check_core::EmailService;
use connector_check_core::EmailValidator;
use connector_check_core::FileAuditSink;
use connector_check_core::ServiceNowConfig;
use connector_check_core::ServiceNowSecrets;
use connector_check_core::ServiceNowValidator;
use serde_json::Value;

#[test]
fn email_validator_emits_one_event_per_call() -> TestResult {
    let sink = Arc::new(RecordingSink::default());
    let validator = EmailValidator::new(KeywordClassifier).with_audit_sink(sink.clone());

    let _ = validator
        .validate_connector(&email_config(EmailService::Other), &credentials(Some("u"), None));
    let _ = validator.validate_params(&EmailActionParams {
        to: vec!["x@notallowed.com".to_string()],
        message: Some("hi".to_string()),
        ..EmailActionParams::default()
    });

    let events = sink.snapshot();
    if events.len() != 2 {
        return Err(format!("expected 2 events, got {}", events.len()));
    }
    assert_eq!(events[0].connector, ConnectorKind::Email);
    assert!(!events[0].valid);
    assert_eq!(events[0].error_count, 1);
    assert_eq!(events[0].invalid_fields, vec!["secrets.password".to_string()]);
    assert_eq!(events[1].invalid_fields, vec!["to".to_string()]);
    Ok(())
}

#[test]
fn servicenow_validator_emits_event() -> TestResult {
    let sink = Arc::new(RecordingSink::default());
    let validator = ServiceNowValidator::new().with_audit_sink(sink.clone());
    let validation =
        validator.validate_connector(&ServiceNowConfig::default(), &ServiceNowSecrets::default());
    let events = sink.snapshot();
    let event = events.first().ok_or_else(|| "no event recorded".to_string())?;
    assert_eq!(event.connector, ConnectorKind::ServiceNow);
    assert_eq!(event.error_count, validation.error_count());
    assert_eq!(
        event.invalid_fields,
        vec![
            "config.apiUrl".to_string(),
            "secrets.password".to_string(),
            "secrets.username".to_string()
        ]
    );
    Ok(())
}

#[test]
fn file_sink_appends_json_lines_without_addresses() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("audit.jsonl");
    let sink = Arc::new(FileAuditSink::new(&path).map_err(|err| err.to_string())?);
    let validator = EmailValidator::new(KeywordClassifier).with_audit_sink(sink);

    let params = EmailActionParams {
        to: vec!["secret-person@notallowed.com".to_string()],
        ..EmailActionParams::default()
    };
    let _ = validator.validate_params(&params);
    let _ = validator.validate_params(&params);

    let contents = std::fs::read_to_string(&path).map_err(|err| err.to_string())?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(!contents.contains("secret-person"));
    let event: Value = serde_json::from_str(lines[0]).map_err(|err| err.to_string())?;
    assert_eq!(event["event"], "connector_validation");
    assert_eq!(event["connector"], "email");
    assert_eq!(event["target"], "params");
    assert_eq!(event["valid"], false);
    assert_eq!(event["error_count"], 2);
    Ok(())
}
