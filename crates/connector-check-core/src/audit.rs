// crates/connector-check-core/src/audit.rs
// ============================================================================
// Module: Validation Audit Logging
// Description: Structured audit events for validation calls.
// Purpose: Emit redacted JSON-lines audit records without hard dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Each validator call can emit one [`ValidationAuditEvent`] to a
//! [`ValidationAuditSink`]. Events carry field keys and counts only; the
//! addresses and credentials under validation are never written.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::core::ConnectorKind;
use crate::core::ConnectorValidation;
use crate::core::ValidationResult;

// ============================================================================
// SECTION: Types
// ============================================================================

/// What a validation call inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationTarget {
    /// Connector config and secrets.
    Connector,
    /// Action parameters.
    Params,
}

/// Validation audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Connector type validated.
    pub connector: ConnectorKind,
    /// Validated target.
    pub target: ValidationTarget,
    /// Whether every field passed.
    pub valid: bool,
    /// Total number of messages raised.
    pub error_count: usize,
    /// Keys of fields with messages (`config.`/`secrets.` prefixed for connectors).
    pub invalid_fields: Vec<String>,
}

impl ValidationAuditEvent {
    /// Builds an event for a connector config/secrets validation.
    #[must_use]
    pub fn connector(connector: ConnectorKind, validation: &ConnectorValidation) -> Self {
        let invalid_fields = prefixed_fields("config", &validation.config)
            .chain(prefixed_fields("secrets", &validation.secrets))
            .collect();
        Self::new(
            connector,
            ValidationTarget::Connector,
            validation.is_valid(),
            validation.error_count(),
            invalid_fields,
        )
    }

    /// Builds an event for an action params validation.
    #[must_use]
    pub fn params(connector: ConnectorKind, result: &ValidationResult) -> Self {
        Self::new(
            connector,
            ValidationTarget::Params,
            result.is_valid(),
            result.error_count(),
            result.invalid_fields().into_iter().map(str::to_string).collect(),
        )
    }

    /// Creates a new audit event with a consistent timestamp.
    fn new(
        connector: ConnectorKind,
        target: ValidationTarget,
        valid: bool,
        error_count: usize,
        invalid_fields: Vec<String>,
    ) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "connector_validation",
            timestamp_ms,
            connector,
            target,
            valid,
            error_count,
            invalid_fields,
        }
    }
}

/// Yields `section.field` for each invalid field in `result`.
fn prefixed_fields<'a>(
    section: &'a str,
    result: &'a ValidationResult,
) -> impl Iterator<Item = String> + 'a {
    result.invalid_fields().into_iter().map(move |field| format!("{section}.{field}"))
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for validation events.
pub trait ValidationAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &ValidationAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl ValidationAuditSink for StderrAuditSink {
    fn record(&self, event: &ValidationAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl ValidationAuditSink for FileAuditSink {
    fn record(&self, event: &ValidationAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl ValidationAuditSink for NoopAuditSink {
    fn record(&self, _event: &ValidationAuditEvent) {}
}
