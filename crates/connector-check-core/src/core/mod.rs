// crates/connector-check-core/src/core/mod.rs
// ============================================================================
// Module: Connector Check Core Types
// Description: Connector field models and validation result structures.
// Purpose: Provide typed, serializable records for connector forms and errors.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Core types model connector configuration, secrets, and action parameters
//! as explicit records. Optional fields are `Option` values so "not provided"
//! never collides with "empty". Result types keep every recognized field key
//! present so form renderers can rely on key existence.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod email;
pub mod fields;
pub mod result;
pub mod servicenow;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use email::EMAIL_CONFIG_FIELDS;
pub use email::EMAIL_PARAMS_FIELDS;
pub use email::EMAIL_SECRETS_FIELDS;
pub use email::EmailActionParams;
pub use email::EmailConnector;
pub use email::EmailConnectorConfig;
pub use email::EmailConnectorSecrets;
pub use email::EmailService;
pub use email::EmailServiceOption;
pub use email::email_services;
pub use fields::is_present;
pub use result::ConnectorKind;
pub use result::ConnectorValidation;
pub use result::IssueKind;
pub use result::ValidationIssue;
pub use result::ValidationResult;
pub use servicenow::SERVICENOW_CONFIG_FIELDS;
pub use servicenow::SERVICENOW_SECRETS_FIELDS;
pub use servicenow::ServiceNowConfig;
pub use servicenow::ServiceNowConnector;
pub use servicenow::ServiceNowSecrets;
