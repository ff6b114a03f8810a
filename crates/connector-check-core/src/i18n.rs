// crates/connector-check-core/src/i18n.rs
// ============================================================================
// Module: Validation Message Catalog
// Description: Message catalog and placeholder substitution for user-facing text.
// Purpose: Centralize validation messages so every rule renders consistently.
// Dependencies: Standard library collections.
// ============================================================================

//! ## Overview
//! Validation messages are looked up by key from a static English catalog and
//! rendered through [`translate`] or the [`t!`](crate::t) macro. Messages are
//! plain strings so form renderers can display them inline.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to the key itself.
//! - Placeholder substitutions are applied in argument order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `address`).
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"address"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("email.from.required", "Sender is required."),
    ("email.port.required", "Port is required."),
    ("email.host.required", "Host is required."),
    ("email.service.required", "Service is required."),
    ("email.client_id.required", "Client ID is required."),
    ("email.tenant_id.required", "Tenant ID is required."),
    ("email.client_secret.required", "Client Secret is required."),
    ("email.user.required", "Username is required."),
    ("email.password.required", "Password is required."),
    ("email.user.required_for_password", "Username is required when password is used."),
    ("email.password.required_for_user", "Password is required when username is used."),
    ("email.address.invalid", "Email address {address} is not valid."),
    ("email.address.not_allowed", "Email address {address} is not allowed."),
    ("email.message.required", "Message is required."),
    ("email.recipient.required", "No To, Cc, or Bcc entry. At least one entry is required."),
    ("email.service.gmail", "Gmail"),
    ("email.service.outlook365", "Outlook"),
    ("email.service.ses", "Amazon SES"),
    ("email.service.elastic_cloud", "Elastic Cloud"),
    ("email.service.exchange_server", "MS Exchange Server"),
    ("email.service.other", "Other"),
    ("servicenow.api_url.required", "URL is required."),
    ("servicenow.api_url.invalid", "URL is invalid."),
    ("servicenow.api_url.require_https", "URL must start with https://."),
    ("servicenow.client_id.required", "Client ID is required."),
    ("servicenow.user_identifier.required", "User Identifier is required."),
    ("servicenow.jwt_key_id.required", "JWT Verifier Key ID is required."),
    ("servicenow.client_secret.required", "Client Secret is required."),
    ("servicenow.private_key.required", "Private Key is required."),
    ("servicenow.username.required", "Username is required."),
    ("servicenow.password.required", "Password is required."),
];

/// Returns the message catalog.
fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect())
}

/// Returns true when `key` has a catalog entry.
#[must_use]
pub fn has_message(key: &str) -> bool {
    catalog().contains_key(key)
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Replaces `{placeholder}` markers in `template` with `args`.
///
/// The template is scanned once, so substituted values are never rescanned
/// for placeholders. Unknown placeholders are kept as written.
#[must_use]
pub fn substitute(template: &str, args: Vec<MessageArg>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some((before, after)) = rest.split_once('{') {
        rendered.push_str(before);
        let Some((name, tail)) = after.split_once('}') else {
            rendered.push('{');
            rest = after;
            break;
        };
        if name.contains('{') {
            rendered.push('{');
            rest = after;
            continue;
        }
        match args.iter().find(|arg| arg.key == name) {
            Some(arg) => rendered.push_str(&arg.value),
            None => {
                rendered.push('{');
                rendered.push_str(name);
                rendered.push('}');
            }
        }
        rest = tail;
    }
    rendered.push_str(rest);
    rendered
}

/// Translates `key` while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog().get(key).copied().unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }
    substitute(template, args)
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a catalog message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
