// crates/connector-check-core/src/runtime/classifier.rs
// ============================================================================
// Module: Allowlist Address Classifier
// Description: Default address classifier with syntax and domain checks.
// Purpose: Classify addresses without network lookups.
// Dependencies: regex, crate::interfaces
// ============================================================================

//! ## Overview
//! [`AllowlistClassifier`] classifies each address in three steps: mustache
//! templates, mailbox syntax, then an optional recipient domain allowlist.
//! It never resolves DNS or contacts mail servers.
//!
//! ## Invariants
//! - Output order and length match the input.
//! - Domain comparisons are case-insensitive and ignore a trailing dot on
//!   both the address and the allowlist entry.
//! - Without an allowlist every well-formed domain is allowed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::interfaces::AddressClassifier;
use crate::interfaces::AddressStatus;
use crate::interfaces::ClassifiedAddress;
use crate::interfaces::ClassifyOptions;

// ============================================================================
// SECTION: Patterns
// ============================================================================

/// Mailbox pattern: local part, `@`, then dotted alphanumeric/hyphen labels
/// with an optional trailing dot outside the captured domain.
const MAILBOX_PATTERN: &str = r#"^[^\s@<>()\[\],;:"]+@((?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*)\.?$"#;
/// Mustache template pattern (`{{` ... `}}`, may span lines).
const TEMPLATE_PATTERN: &str = r"(?s)\{\{.*\}\}";

/// Returns the compiled mailbox pattern.
fn mailbox_regex() -> Option<&'static Regex> {
    static MAILBOX: OnceLock<Option<Regex>> = OnceLock::new();
    MAILBOX.get_or_init(|| Regex::new(MAILBOX_PATTERN).ok()).as_ref()
}

/// Returns the compiled template pattern.
fn template_regex() -> Option<&'static Regex> {
    static TEMPLATE: OnceLock<Option<Regex>> = OnceLock::new();
    TEMPLATE.get_or_init(|| Regex::new(TEMPLATE_PATTERN).ok()).as_ref()
}

/// Returns true when `value` contains a mustache template.
#[must_use]
pub fn contains_template(value: &str) -> bool {
    template_regex().is_some_and(|pattern| pattern.is_match(value))
}

// ============================================================================
// SECTION: Classifier
// ============================================================================

/// Address classifier backed by a syntax check and an optional domain allowlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowlistClassifier {
    /// Normalized allowed domains; `None` allows every domain.
    allowed_domains: Option<BTreeSet<String>>,
}

impl AllowlistClassifier {
    /// Creates a classifier that allows every well-formed domain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allowed_domains: None,
        }
    }

    /// Creates a classifier restricted to `domains`.
    #[must_use]
    pub fn with_allowed_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_domains: Some(
                domains.into_iter().map(|domain| normalize_domain(domain.as_ref())).collect(),
            ),
        }
    }

    /// Returns the normalized allowlist, if any.
    #[must_use]
    pub const fn allowed_domains(&self) -> Option<&BTreeSet<String>> {
        self.allowed_domains.as_ref()
    }

    /// Classifies a single address.
    #[must_use]
    pub fn classify_one(&self, address: &str, options: ClassifyOptions) -> AddressStatus {
        if contains_template(address) {
            return if options.treat_templates_as_valid {
                AddressStatus::Valid
            } else {
                AddressStatus::Invalid
            };
        }
        let Some(domain) = mailbox_domain(address) else {
            return AddressStatus::Invalid;
        };
        match &self.allowed_domains {
            Some(allowlist) if !allowlist.contains(&normalize_domain(domain)) => {
                AddressStatus::NotAllowed
            }
            _ => AddressStatus::Valid,
        }
    }
}

impl AddressClassifier for AllowlistClassifier {
    fn classify(&self, addresses: &[String], options: ClassifyOptions) -> Vec<ClassifiedAddress> {
        addresses
            .iter()
            .map(|address| ClassifiedAddress::new(address, self.classify_one(address, options)))
            .collect()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the domain of a well-formed address, accepting `Name <mailbox>`.
fn mailbox_domain(address: &str) -> Option<&str> {
    let mailbox = extract_mailbox(address.trim());
    let captures = mailbox_regex()?.captures(mailbox)?;
    captures.get(1).as_ref().map(regex::Match::as_str)
}

/// Strips an optional display name, returning the bare mailbox.
fn extract_mailbox(address: &str) -> &str {
    address
        .strip_suffix('>')
        .and_then(|inner| inner.rsplit_once('<'))
        .map_or(address, |(_, mailbox)| mailbox.trim())
}

/// Normalizes a domain for allowlist comparison.
fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_ascii_lowercase()
}
