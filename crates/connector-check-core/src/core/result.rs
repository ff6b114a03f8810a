// crates/connector-check-core/src/core/result.rs
// ============================================================================
// Module: Validation Results
// Description: Field-keyed error maps and the validation issue taxonomy.
// Purpose: Report every validation outcome as data, never as a failure.
// Dependencies: serde, crate::i18n
// ============================================================================

//! ## Overview
//! A [`ValidationResult`] maps each recognized field key to the ordered list
//! of messages raised against it. Keys are seeded up front, so a valid field
//! is present with an empty list. Messages are rendered from
//! [`ValidationIssue`] values through the message catalog.
//!
//! ## Invariants
//! - Seeded keys are never removed.
//! - Messages for one field keep the order in which rules raised them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::i18n::translate;
use crate::t;

// ============================================================================
// SECTION: Connector Kinds
// ============================================================================

/// Connector types with validation support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKind {
    /// Email (SMTP / Exchange) connector.
    Email,
    /// ServiceNow ITSM connector.
    #[serde(rename = "servicenow")]
    ServiceNow,
}

// ============================================================================
// SECTION: Issues
// ============================================================================

/// Classification of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A required field is absent or empty.
    RequiredFieldMissing,
    /// An address failed syntax checks.
    InvalidAddressSyntax,
    /// An address is well formed but blocked by policy.
    AddressNotAllowed,
    /// A field is required because another field is set.
    CrossFieldDependencyUnmet,
    /// A field is present but its value is unusable.
    InvalidFieldValue,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A required field is absent; `key` is the catalog message key.
    RequiredFieldMissing {
        /// Catalog message key.
        key: &'static str,
    },
    /// An address failed syntax checks.
    InvalidAddressSyntax {
        /// Offending address as entered.
        address: String,
    },
    /// An address is not permitted by policy.
    AddressNotAllowed {
        /// Offending address as entered.
        address: String,
    },
    /// A field is required because a related field is set.
    CrossFieldDependencyUnmet {
        /// Catalog message key.
        key: &'static str,
    },
    /// A field value is present but unusable.
    InvalidFieldValue {
        /// Catalog message key.
        key: &'static str,
    },
}

impl ValidationIssue {
    /// Returns the issue classification.
    #[must_use]
    pub const fn kind(&self) -> IssueKind {
        match self {
            Self::RequiredFieldMissing {
                ..
            } => IssueKind::RequiredFieldMissing,
            Self::InvalidAddressSyntax {
                ..
            } => IssueKind::InvalidAddressSyntax,
            Self::AddressNotAllowed {
                ..
            } => IssueKind::AddressNotAllowed,
            Self::CrossFieldDependencyUnmet {
                ..
            } => IssueKind::CrossFieldDependencyUnmet,
            Self::InvalidFieldValue {
                ..
            } => IssueKind::InvalidFieldValue,
        }
    }

    /// Renders the user-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::RequiredFieldMissing {
                key,
            }
            | Self::CrossFieldDependencyUnmet {
                key,
            }
            | Self::InvalidFieldValue {
                key,
            } => translate(key, Vec::new()),
            Self::InvalidAddressSyntax {
                address,
            } => t!("email.address.invalid", address = address),
            Self::AddressNotAllowed {
                address,
            } => t!("email.address.not_allowed", address = address),
        }
    }
}

// ============================================================================
// SECTION: Results
// ============================================================================

/// Field-keyed validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Messages per field; an empty list means the field is valid.
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    /// Creates a result with every field in `fields` present and valid.
    #[must_use]
    pub fn with_fields(fields: &[&str]) -> Self {
        Self {
            errors: fields.iter().map(|field| ((*field).to_string(), Vec::new())).collect(),
        }
    }

    /// Appends a rendered message to `field`, seeding the key when absent.
    pub fn push(&mut self, field: &str, message: String) {
        self.errors.entry(field.to_string()).or_default().push(message);
    }

    /// Appends the message for `issue` to `field`.
    pub fn record(&mut self, field: &str, issue: &ValidationIssue) {
        self.push(field, issue.message());
    }

    /// Returns the messages for `field` (empty when valid or unknown).
    #[must_use]
    pub fn field(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns true when `field` is a reported key.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Returns the full error map.
    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// Returns true when no field has messages.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Returns the total number of messages.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Returns the keys of fields with at least one message.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(field, _)| field.as_str())
            .collect()
    }
}

/// Validation output for a connector config/secrets pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorValidation {
    /// Config field results.
    pub config: ValidationResult,
    /// Secret field results.
    pub secrets: ValidationResult,
}

impl ConnectorValidation {
    /// Returns true when both config and secrets are valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.config.is_valid() && self.secrets.is_valid()
    }

    /// Returns the total number of messages across config and secrets.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.config.error_count() + self.secrets.error_count()
    }
}
