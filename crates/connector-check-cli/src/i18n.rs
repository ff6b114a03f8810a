// crates/connector-check-cli/src/i18n.rs
// ============================================================================
// Module: CLI Message Catalog
// Description: Message catalog and translation helpers for the CLI.
// Purpose: Centralize user-facing CLI strings.
// Dependencies: connector-check-core
// ============================================================================

//! ## Overview
//! The CLI stores user-facing strings in a small catalog and renders them
//! through the [`t!`](crate::t) macro. Placeholder substitution is shared
//! with the core validation catalog.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to the key itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

pub use connector_check_core::i18n::MessageArg;
use connector_check_core::i18n::substitute;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "connector-check {version}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config validated successfully."),
    ("config.audit_failed", "Failed to open audit sink: {error}"),
    ("input.read_failed", "Failed to read input {path}: {error}"),
    ("input.too_large", "Refusing to read input {path}: size {size} bytes exceeds limit {limit}."),
    ("input.parse_failed", "Failed to parse input {path} as JSON: {error}"),
    ("output.json_failed", "Failed to render JSON output: {error}"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
];

/// Returns the CLI catalog.
fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect())
}

// ============================================================================
// SECTION: Translation
// ============================================================================

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

/// Formats a CLI message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
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
