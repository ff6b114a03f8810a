// crates/connector-check-core/src/interfaces/mod.rs
// ============================================================================
// Module: Connector Check Interfaces
// Description: Capability interfaces consumed by the validators.
// Purpose: Keep address classification pluggable and outside the validators.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Validators never decide on their own whether an email address is usable.
//! They delegate to an [`AddressClassifier`] supplied by the caller and only
//! interpret the returned [`ClassifiedAddress`] values. Implementations must
//! be deterministic and must not perform I/O.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Address Classification
// ============================================================================

/// Options for a classification call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyOptions {
    /// Accept addresses containing mustache templates (`{{...}}`) as valid.
    pub treat_templates_as_valid: bool,
}

/// Classification outcome for one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressStatus {
    /// Address is usable.
    Valid,
    /// Address is syntactically invalid.
    Invalid,
    /// Address is well formed but blocked by policy.
    NotAllowed,
}

/// An address paired with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedAddress {
    /// Address exactly as supplied.
    pub address: String,
    /// Classification outcome.
    pub status: AddressStatus,
}

impl ClassifiedAddress {
    /// Creates a classified address.
    #[must_use]
    pub fn new(address: impl Into<String>, status: AddressStatus) -> Self {
        Self {
            address: address.into(),
            status,
        }
    }

    /// Returns true when the address is usable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status == AddressStatus::Valid
    }
}

/// Classifies email addresses for validity and policy.
pub trait AddressClassifier {
    /// Classifies `addresses`, returning one entry per input in input order.
    fn classify(&self, addresses: &[String], options: ClassifyOptions) -> Vec<ClassifiedAddress>;
}

impl<T: AddressClassifier + ?Sized> AddressClassifier for &T {
    fn classify(&self, addresses: &[String], options: ClassifyOptions) -> Vec<ClassifiedAddress> {
        (**self).classify(addresses, options)
    }
}

impl<T: AddressClassifier + ?Sized> AddressClassifier for Arc<T> {
    fn classify(&self, addresses: &[String], options: ClassifyOptions) -> Vec<ClassifiedAddress> {
        (**self).classify(addresses, options)
    }
}
