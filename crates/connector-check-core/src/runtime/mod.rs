// crates/connector-check-core/src/runtime/mod.rs
// ============================================================================
// Module: Connector Check Runtime
// Description: Validation rules and the default address classifier.
// Purpose: Turn connector records into fully populated validation results.
// Dependencies: crate::{core, interfaces, audit}, regex, url
// ============================================================================

//! ## Overview
//! Runtime validators apply the field rules of each connector type. Free
//! functions are pure; the validator structs wrap them with a configured
//! classifier, options, and an audit sink.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod classifier;
pub mod email;
pub mod servicenow;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use classifier::AllowlistClassifier;
pub use classifier::contains_template;
pub use email::EmailValidationOptions;
pub use email::EmailValidator;
pub use email::validate_email_connector;
pub use email::validate_email_params;
pub use servicenow::ServiceNowValidator;
pub use servicenow::is_servicenow_update_ready;
pub use servicenow::validate_servicenow_connector;
