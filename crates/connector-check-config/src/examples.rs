// crates/connector-check-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for connector-check configuration. The example must
//! load and validate without changes.

/// Returns a canonical example `connector-check.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[addresses]
allowed_domains = ["example.com", "mail.example.org"]

[email]
require_credentials_with_auth = false
require_recipient = true
cloud_enabled = false

[audit]
enabled = true
path = "connector-check-audit.jsonl"
"#,
    )
}
