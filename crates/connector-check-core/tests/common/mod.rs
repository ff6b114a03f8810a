// crates/connector-check-core/tests/common/mod.rs
// ============================================================================
// Module: Connector Check Test Helpers
// Description: Shared fixtures for connector validation tests.
// Purpose: Provide a keyword-driven classifier and record builders.
// ============================================================================

//! Shared helpers for connector-check-core integration tests.

#![allow(dead_code, reason = "Each test binary uses a different subset of helpers.")]

use std::sync::Mutex;

use connector_check_core::AddressClassifier;
use connector_check_core::AddressStatus;
use connector_check_core::ClassifiedAddress;
use connector_check_core::ClassifyOptions;
use connector_check_core::EmailConnectorConfig;
use connector_check_core::EmailConnectorSecrets;
use connector_check_core::EmailService;
use connector_check_core::ValidationAuditEvent;
use connector_check_core::ValidationAuditSink;
use connector_check_core::ValidationResult;

pub type TestResult = Result<(), String>;

/// Classifier keyed on substrings: `invalid` is invalid, `notallowed` is
/// blocked, and `{{...}}` follows the template option.
pub struct KeywordClassifier;

impl KeywordClassifier {
    fn status(address: &str, options: ClassifyOptions) -> AddressStatus {
        if address.contains("{{") && address.contains("}}") {
            return if options.treat_templates_as_valid {
                AddressStatus::Valid
            } else {
                AddressStatus::Invalid
            };
        }
        if address.contains("invalid") {
            AddressStatus::Invalid
        } else if address.contains("notallowed") {
            AddressStatus::NotAllowed
        } else {
            AddressStatus::Valid
        }
    }
}

impl AddressClassifier for KeywordClassifier {
    fn classify(&self, addresses: &[String], options: ClassifyOptions) -> Vec<ClassifiedAddress> {
        addresses
            .iter()
            .map(|address| ClassifiedAddress::new(address, Self::status(address, options)))
            .collect()
    }
}

/// Audit sink that keeps events in memory.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Mutex<Vec<ValidationAuditEvent>>,
}

impl RecordingSink {
    pub fn snapshot(&self) -> Vec<ValidationAuditEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl ValidationAuditSink for RecordingSink {
    fn record(&self, event: &ValidationAuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

pub fn email_config(service: EmailService) -> EmailConnectorConfig {
    EmailConnectorConfig {
        from: Some("test@test.com".to_string()),
        port: Some(2323),
        host: Some("localhost".to_string()),
        service: Some(service),
        has_auth: true,
        client_id: None,
        tenant_id: None,
    }
}

pub fn credentials(user: Option<&str>, password: Option<&str>) -> EmailConnectorSecrets {
    EmailConnectorSecrets {
        user: user.map(str::to_string),
        password: password.map(str::to_string),
        client_secret: None,
    }
}

/// Asserts `field` carries exactly `expected`.
pub fn expect_messages(result: &ValidationResult, field: &str, expected: &[&str]) -> TestResult {
    let actual = result.field(field);
    if !result.has_field(field) {
        return Err(format!("field {field} missing from result"));
    }
    if actual == expected {
        Ok(())
    } else {
        Err(format!("field {field}: expected {expected:?}, got {actual:?}"))
    }
}

/// Asserts every field in `fields` is present and empty.
pub fn expect_clean(result: &ValidationResult, fields: &[&str]) -> TestResult {
    for field in fields {
        expect_messages(result, field, &[])?;
    }
    Ok(())
}
