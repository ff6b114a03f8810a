// crates/connector-check-core/src/lib.rs
// ============================================================================
// Module: Connector Check Core Library
// Description: Public API surface for connector field validation.
// Purpose: Expose connector models, classifier interfaces, and validators.
// Dependencies: crate::{core, interfaces, runtime, audit, i18n}
// ============================================================================

//! ## Overview
//! Connector Check core validates the form fields of external-service
//! connectors (email, ServiceNow) and the action parameters supplied when a
//! connector is used. Validation is pure: every call builds a fresh,
//! fully-populated result map and never fails. Address classification is a
//! capability supplied by the caller through [`AddressClassifier`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod core;
pub mod i18n;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use audit::ValidationAuditEvent;
pub use audit::ValidationAuditSink;
pub use interfaces::AddressClassifier;
pub use interfaces::AddressStatus;
pub use interfaces::ClassifiedAddress;
pub use interfaces::ClassifyOptions;
pub use runtime::AllowlistClassifier;
pub use runtime::EmailValidationOptions;
pub use runtime::EmailValidator;
pub use runtime::ServiceNowValidator;
pub use runtime::is_servicenow_update_ready;
pub use runtime::validate_email_connector;
pub use runtime::validate_email_params;
pub use runtime::validate_servicenow_connector;
