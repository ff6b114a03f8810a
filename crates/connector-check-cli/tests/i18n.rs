// crates/connector-check-cli/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Exercises the CLI catalog and placeholder substitution.
// Purpose: Ensure CLI user-facing strings route through stable helpers.
// Dependencies: connector-check-cli i18n module and the `t!` macro.
// ============================================================================

//! ## Overview
//! Validates the CLI catalog: lookups, key fallback, and the
//! [`t!`](connector_check_cli::t) macro.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use connector_check_cli::i18n::MessageArg;
use connector_check_cli::i18n::translate;
use connector_check_cli::t;

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Confirms catalog entries resolve and replace placeholders.
#[test]
fn translate_substitutes_placeholders() {
    let args = vec![MessageArg::new("error", "boom")];
    assert_eq!(translate("config.load_failed", args), "Failed to load config: boom");
}

/// Confirms missing keys fall back to the key string.
#[test]
fn translate_falls_back_to_key() {
    assert_eq!(translate("missing.key", Vec::new()), "missing.key");
}

/// Confirms the macro formats multiple placeholders.
#[test]
fn macro_formats_multiple_placeholders() {
    let message = t!("input.too_large", path = "in.json", size = 10, limit = 5);
    assert_eq!(message, "Refusing to read input in.json: size 10 bytes exceeds limit 5.");
}

/// Confirms messages without placeholders render verbatim.
#[test]
fn macro_without_arguments_renders_template() {
    assert_eq!(t!("config.validate.ok"), "Config validated successfully.");
}
