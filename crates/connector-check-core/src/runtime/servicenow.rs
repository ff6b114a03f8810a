// crates/connector-check-core/src/runtime/servicenow.rs
// ============================================================================
// Module: ServiceNow Connector Validation
// Description: Field rules for ServiceNow basic and OAuth connectors.
// Purpose: Validate instance URLs and auth-mode specific credentials.
// Dependencies: url, crate::{core, audit}
// ============================================================================

//! ## Overview
//! The instance URL is always required and must be an absolute `https` URL.
//! Credential rules depend on `isOAuth`: OAuth connectors need a client,
//! user identifier, key id, client secret, and private key; basic connectors
//! need a username and password.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use url::Url;

use crate::audit::NoopAuditSink;
use crate::audit::ValidationAuditEvent;
use crate::audit::ValidationAuditSink;
use crate::core::ConnectorKind;
use crate::core::ConnectorValidation;
use crate::core::SERVICENOW_CONFIG_FIELDS;
use crate::core::SERVICENOW_SECRETS_FIELDS;
use crate::core::ServiceNowConfig;
use crate::core::ServiceNowSecrets;
use crate::core::ValidationIssue;
use crate::core::ValidationResult;
use crate::core::is_present;

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates a ServiceNow connector's config and secrets.
#[must_use]
pub fn validate_servicenow_connector(
    config: &ServiceNowConfig,
    secrets: &ServiceNowSecrets,
) -> ConnectorValidation {
    let mut config_errors = ValidationResult::with_fields(SERVICENOW_CONFIG_FIELDS);
    let mut secrets_errors = ValidationResult::with_fields(SERVICENOW_SECRETS_FIELDS);

    if let Some(issue) = api_url_issue(config.api_url.as_deref()) {
        config_errors.record("apiUrl", &issue);
    }

    require_all(&config_rules(config), &mut config_errors);
    require_all(&credential_rules(config.is_oauth, secrets), &mut secrets_errors);

    ConnectorValidation {
        config: config_errors,
        secrets: secrets_errors,
    }
}

/// Returns true when the URL and every credential of the active auth mode
/// are present and free of messages. OAuth connectors also need
/// `privateKeyPassword` to be supplied, though it may be empty.
#[must_use]
pub fn is_servicenow_update_ready(
    config: &ServiceNowConfig,
    secrets: &ServiceNowSecrets,
    validation: &ConnectorValidation,
) -> bool {
    let clean = |result: &ValidationResult, field: &str, value: Option<&str>| {
        is_present(value) && result.field(field).is_empty()
    };
    if !clean(&validation.config, "apiUrl", config.api_url.as_deref()) {
        return false;
    }
    if config.is_oauth && secrets.private_key_password.is_none() {
        return false;
    }
    let config_clean = config_rules(config)
        .iter()
        .all(|(field, value, _)| clean(&validation.config, field, *value));
    config_clean
        && credential_rules(config.is_oauth, secrets)
            .iter()
            .all(|(field, value, _)| clean(&validation.secrets, field, *value))
}

/// A required field: key, value, and catalog message key.
type RequiredField<'a> = (&'static str, Option<&'a str>, &'static str);

/// Returns the config fields required by the active auth mode.
fn config_rules(config: &ServiceNowConfig) -> Vec<RequiredField<'_>> {
    if !config.is_oauth {
        return Vec::new();
    }
    vec![
        ("clientId", config.client_id.as_deref(), "servicenow.client_id.required"),
        (
            "userIdentifierValue",
            config.user_identifier_value.as_deref(),
            "servicenow.user_identifier.required",
        ),
        ("jwtKeyId", config.jwt_key_id.as_deref(), "servicenow.jwt_key_id.required"),
    ]
}

/// Returns the secret fields required by the active auth mode.
fn credential_rules(is_oauth: bool, secrets: &ServiceNowSecrets) -> Vec<RequiredField<'_>> {
    if is_oauth {
        vec![
            (
                "clientSecret",
                secrets.client_secret.as_deref(),
                "servicenow.client_secret.required",
            ),
            ("privateKey", secrets.private_key.as_deref(), "servicenow.private_key.required"),
        ]
    } else {
        vec![
            ("username", secrets.username.as_deref(), "servicenow.username.required"),
            ("password", secrets.password.as_deref(), "servicenow.password.required"),
        ]
    }
}

/// Records a required-field message for each absent value.
fn require_all(rules: &[RequiredField<'_>], errors: &mut ValidationResult) {
    for &(field, value, key) in rules {
        if !is_present(value) {
            errors.record(
                field,
                &ValidationIssue::RequiredFieldMissing {
                    key,
                },
            );
        }
    }
}

/// Checks the instance URL: required, absolute, and `https`.
fn api_url_issue(api_url: Option<&str>) -> Option<ValidationIssue> {
    let Some(api_url) = api_url.filter(|value| !value.is_empty()) else {
        return Some(ValidationIssue::RequiredFieldMissing {
            key: "servicenow.api_url.required",
        });
    };
    match Url::parse(api_url) {
        Err(_) => Some(ValidationIssue::InvalidFieldValue {
            key: "servicenow.api_url.invalid",
        }),
        Ok(url) if url.scheme() != "https" => Some(ValidationIssue::InvalidFieldValue {
            key: "servicenow.api_url.require_https",
        }),
        Ok(_) => None,
    }
}

// ============================================================================
// SECTION: Validator
// ============================================================================

/// ServiceNow validator bound to an audit sink.
pub struct ServiceNowValidator {
    /// Audit sink receiving one event per call.
    audit: Arc<dyn ValidationAuditSink>,
}

impl Default for ServiceNowValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceNowValidator {
    /// Creates a validator with no audit output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            audit: Arc::new(NoopAuditSink),
        }
    }

    /// Replaces the audit sink.
    #[must_use]
    pub fn with_audit_sink(mut self, audit: Arc<dyn ValidationAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Validates connector config and secrets.
    #[must_use]
    pub fn validate_connector(
        &self,
        config: &ServiceNowConfig,
        secrets: &ServiceNowSecrets,
    ) -> ConnectorValidation {
        let validation = validate_servicenow_connector(config, secrets);
        self.audit.record(&ValidationAuditEvent::connector(ConnectorKind::ServiceNow, &validation));
        validation
    }
}
