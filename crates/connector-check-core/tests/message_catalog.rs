// crates/connector-check-core/tests/message_catalog.rs
// ============================================================================
// Module: Message Catalog Tests
// Description: Catalog lookups, substitution, and the email service picker.
// Purpose: Ensure user-facing strings render exactly.
// ============================================================================

//! Message catalog and service catalog tests.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use connector_check_core::EmailService;
use connector_check_core::IssueKind;
use connector_check_core::ValidationIssue;
use connector_check_core::email_services;
use connector_check_core::i18n::MessageArg;
use connector_check_core::i18n::has_message;
use connector_check_core::i18n::substitute;
use connector_check_core::i18n::translate;
use connector_check_core::t;

#[test]
fn macro_substitutes_named_arguments() {
    assert_eq!(
        t!("email.address.invalid", address = "a@b"),
        "Email address a@b is not valid."
    );
    assert_eq!(t!("email.message.required"), "Message is required.");
}

#[test]
fn unknown_keys_render_as_the_key() {
    assert!(!has_message("email.unknown"));
    assert_eq!(translate("email.unknown", Vec::new()), "email.unknown");
}

#[test]
fn substitute_leaves_unmatched_placeholders() {
    let rendered = substitute("{a} and {b}", vec![MessageArg::new("a", "one")]);
    assert_eq!(rendered, "one and {b}");
}

#[test]
fn substitute_does_not_rescan_values() {
    let rendered = substitute(
        "Failed to read input {path}: {error}",
        vec![MessageArg::new("path", "x{error}.json"), MessageArg::new("error", "denied")],
    );
    assert_eq!(rendered, "Failed to read input x{error}.json: denied");
}

#[test]
fn substitute_keeps_stray_braces() {
    let rendered = substitute("{ {a} {b", vec![MessageArg::new("a", "one")]);
    assert_eq!(rendered, "{ one {b");
}

#[test]
fn issues_render_catalog_messages() {
    let issue = ValidationIssue::AddressNotAllowed {
        address: "x@y.com".to_string(),
    };
    assert_eq!(issue.kind(), IssueKind::AddressNotAllowed);
    assert_eq!(issue.message(), "Email address x@y.com is not allowed.");

    let issue = ValidationIssue::CrossFieldDependencyUnmet {
        key: "email.user.required_for_password",
    };
    assert_eq!(issue.kind(), IssueKind::CrossFieldDependencyUnmet);
    assert_eq!(issue.message(), "Username is required when password is used.");
}

#[test]
fn service_catalog_hides_elastic_cloud_off_cloud() {
    let values: Vec<EmailService> =
        email_services(false).into_iter().map(|option| option.value).collect();
    assert_eq!(
        values,
        vec![
            EmailService::Gmail,
            EmailService::Outlook365,
            EmailService::Ses,
            EmailService::ExchangeServer,
            EmailService::Other,
        ]
    );
}

#[test]
fn service_catalog_lists_elastic_cloud_on_cloud() {
    let options = email_services(true);
    let texts: Vec<&str> = options.iter().map(|option| option.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["Gmail", "Outlook", "Amazon SES", "Elastic Cloud", "MS Exchange Server", "Other"]
    );
}

#[test]
fn service_labels_decode_from_documents() -> Result<(), String> {
    let labels = ["gmail", "outlook365", "ses", "elastic_cloud", "exchange_server", "other"];
    for (label, option) in labels.into_iter().zip(email_services(true)) {
        let decoded: EmailService =
            serde_json::from_value(serde_json::json!(label)).map_err(|err| err.to_string())?;
        assert_eq!(decoded, option.value);
        assert_eq!(serde_json::json!(option.value), serde_json::json!(label));
    }
    assert!(serde_json::from_value::<EmailService>(serde_json::json!("carrier_pigeon")).is_err());
    Ok(())
}
