// crates/connector-check-core/src/runtime/email.rs
// ============================================================================
// Module: Email Connector Validation
// Description: Field rules for email connector config, secrets, and params.
// Purpose: Produce fully populated, field-keyed error maps for email forms.
// Dependencies: crate::{core, interfaces, audit}
// ============================================================================

//! ## Overview
//! Email validation checks the sender, server, service, Exchange OAuth, and
//! credential fields of a connector, and the recipients and body of a send.
//! Every rule runs on every call; messages accumulate per field in rule order.
//! Address checks are delegated to the supplied [`AddressClassifier`].
//!
//! ## Invariants
//! - Every key in the field lists is present in the output.
//! - The sender is classified with templates rejected; recipients with
//!   templates accepted.
//! - `user`/`password` cross-presence is checked regardless of `hasAuth`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::audit::NoopAuditSink;
use crate::audit::ValidationAuditEvent;
use crate::audit::ValidationAuditSink;
use crate::core::ConnectorKind;
use crate::core::ConnectorValidation;
use crate::core::EMAIL_CONFIG_FIELDS;
use crate::core::EMAIL_PARAMS_FIELDS;
use crate::core::EMAIL_SECRETS_FIELDS;
use crate::core::EmailActionParams;
use crate::core::EmailConnectorConfig;
use crate::core::EmailConnectorSecrets;
use crate::core::EmailService;
use crate::core::ValidationIssue;
use crate::core::ValidationResult;
use crate::core::is_present;
use crate::interfaces::AddressClassifier;
use crate::interfaces::AddressStatus;
use crate::interfaces::ClassifiedAddress;
use crate::interfaces::ClassifyOptions;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Optional email rules that are off unless configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailValidationOptions {
    /// When `hasAuth` is set, require a username and password even if both are absent.
    #[serde(default)]
    pub require_credentials_with_auth: bool,
    /// Require at least one of `to`, `cc`, or `bcc`.
    #[serde(default)]
    pub require_recipient: bool,
}

// ============================================================================
// SECTION: Connector Validation
// ============================================================================

/// Validates an email connector's config and secrets.
#[must_use]
pub fn validate_email_connector<C: AddressClassifier + ?Sized>(
    classifier: &C,
    options: &EmailValidationOptions,
    config: &EmailConnectorConfig,
    secrets: &EmailConnectorSecrets,
) -> ConnectorValidation {
    let mut config_errors = ValidationResult::with_fields(EMAIL_CONFIG_FIELDS);
    let mut secrets_errors = ValidationResult::with_fields(EMAIL_SECRETS_FIELDS);

    check_sender(classifier, config, &mut config_errors);
    check_server(config, &mut config_errors);
    check_exchange(config, secrets, &mut config_errors, &mut secrets_errors);
    check_credentials(options, config, secrets, &mut secrets_errors);

    ConnectorValidation {
        config: config_errors,
        secrets: secrets_errors,
    }
}

/// Checks `from`: required, then classified with templates rejected.
fn check_sender<C: AddressClassifier + ?Sized>(
    classifier: &C,
    config: &EmailConnectorConfig,
    errors: &mut ValidationResult,
) {
    let Some(from) = config.from.as_deref().filter(|from| !from.is_empty()) else {
        errors.record("from", &required("email.from.required"));
        return;
    };
    let classified = classifier.classify(&[from.to_string()], ClassifyOptions::default());
    record_addresses("from", classified, errors);
}

/// Checks `service`, and `port`/`host` for the `other` service.
fn check_server(config: &EmailConnectorConfig, errors: &mut ValidationResult) {
    if config.service == Some(EmailService::Other) {
        if config.port.is_none_or(|port| port == 0) {
            errors.record("port", &required("email.port.required"));
        }
        if !is_present(config.host.as_deref()) {
            errors.record("host", &required("email.host.required"));
        }
    }
    if config.service.is_none() {
        errors.record("service", &required("email.service.required"));
    }
}

/// Checks the OAuth fields required by Exchange Server.
fn check_exchange(
    config: &EmailConnectorConfig,
    secrets: &EmailConnectorSecrets,
    config_errors: &mut ValidationResult,
    secrets_errors: &mut ValidationResult,
) {
    if config.service != Some(EmailService::ExchangeServer) {
        return;
    }
    if !is_present(config.client_id.as_deref()) {
        config_errors.record("clientId", &required("email.client_id.required"));
    }
    if !is_present(config.tenant_id.as_deref()) {
        config_errors.record("tenantId", &required("email.tenant_id.required"));
    }
    if !is_present(secrets.client_secret.as_deref()) {
        secrets_errors.record("clientSecret", &required("email.client_secret.required"));
    }
}

/// Checks `user`/`password` cross-presence and the optional `hasAuth` rule.
fn check_credentials(
    options: &EmailValidationOptions,
    config: &EmailConnectorConfig,
    secrets: &EmailConnectorSecrets,
    errors: &mut ValidationResult,
) {
    let has_user = is_present(secrets.user.as_deref());
    let has_password = is_present(secrets.password.as_deref());
    match (has_user, has_password) {
        (true, false) => errors.record(
            "password",
            &ValidationIssue::CrossFieldDependencyUnmet {
                key: "email.password.required_for_user",
            },
        ),
        (false, true) => errors.record(
            "user",
            &ValidationIssue::CrossFieldDependencyUnmet {
                key: "email.user.required_for_password",
            },
        ),
        (false, false) if options.require_credentials_with_auth && config.has_auth => {
            errors.record("user", &required("email.user.required"));
            errors.record("password", &required("email.password.required"));
        }
        _ => {}
    }
}

// ============================================================================
// SECTION: Params Validation
// ============================================================================

/// Validates the parameters of an email send action.
#[must_use]
pub fn validate_email_params<C: AddressClassifier + ?Sized>(
    classifier: &C,
    options: &EmailValidationOptions,
    params: &EmailActionParams,
) -> ValidationResult {
    let mut errors = ValidationResult::with_fields(EMAIL_PARAMS_FIELDS);
    let recipient_options = ClassifyOptions {
        treat_templates_as_valid: true,
    };

    if options.require_recipient
        && params.to.is_empty()
        && params.cc.is_empty()
        && params.bcc.is_empty()
    {
        errors.record("to", &required("email.recipient.required"));
    }
    for (field, addresses) in [("to", &params.to), ("cc", &params.cc), ("bcc", &params.bcc)] {
        if addresses.is_empty() {
            continue;
        }
        let classified = classifier.classify(addresses, recipient_options);
        record_addresses(field, classified, &mut errors);
    }
    if !is_present(params.message.as_deref()) {
        errors.record("message", &required("email.message.required"));
    }

    errors
}

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Email validator bound to a classifier, options, and an audit sink.
pub struct EmailValidator<C> {
    /// Address classifier used for sender and recipients.
    classifier: C,
    /// Optional rules.
    options: EmailValidationOptions,
    /// Audit sink receiving one event per call.
    audit: Arc<dyn ValidationAuditSink>,
}

impl<C: AddressClassifier> EmailValidator<C> {
    /// Creates a validator with default options and no audit output.
    #[must_use]
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            options: EmailValidationOptions::default(),
            audit: Arc::new(NoopAuditSink),
        }
    }

    /// Replaces the optional rules.
    #[must_use]
    pub const fn with_options(mut self, options: EmailValidationOptions) -> Self {
        self.options = options;
        self
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
        config: &EmailConnectorConfig,
        secrets: &EmailConnectorSecrets,
    ) -> ConnectorValidation {
        let validation = validate_email_connector(&self.classifier, &self.options, config, secrets);
        self.audit.record(&ValidationAuditEvent::connector(ConnectorKind::Email, &validation));
        validation
    }

    /// Validates send action params.
    #[must_use]
    pub fn validate_params(&self, params: &EmailActionParams) -> ValidationResult {
        let result = validate_email_params(&self.classifier, &self.options, params);
        self.audit.record(&ValidationAuditEvent::params(ConnectorKind::Email, &result));
        result
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a required-field issue for a catalog key.
const fn required(key: &'static str) -> ValidationIssue {
    ValidationIssue::RequiredFieldMissing {
        key,
    }
}

/// Records one message per rejected address on `field`.
fn record_addresses(
    field: &str,
    classified: Vec<ClassifiedAddress>,
    errors: &mut ValidationResult,
) {
    for entry in classified {
        let issue = match entry.status {
            AddressStatus::Valid => continue,
            AddressStatus::Invalid => ValidationIssue::InvalidAddressSyntax {
                address: entry.address,
            },
            AddressStatus::NotAllowed => ValidationIssue::AddressNotAllowed {
                address: entry.address,
            },
        };
        errors.record(field, &issue);
    }
}
