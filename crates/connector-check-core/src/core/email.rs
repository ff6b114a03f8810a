// crates/connector-check-core/src/core/email.rs
// ============================================================================
// Module: Email Connector Model
// Description: Email connector config, secrets, action params, and services.
// Purpose: Typed records for the email connector form and its send action.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The email connector stores non-secret server settings in
//! [`EmailConnectorConfig`] and credentials in [`EmailConnectorSecrets`].
//! [`EmailActionParams`] carries the recipients and body of a single send.
//! Field names serialize in camelCase to match connector documents.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::fields::lenient;
use crate::core::fields::lenient_flag;
use crate::core::fields::lenient_list;
use crate::i18n::translate;

// ============================================================================
// SECTION: Field Keys
// ============================================================================

/// Config field keys reported by email connector validation.
pub const EMAIL_CONFIG_FIELDS: &[&str] = &["from", "port", "host", "service", "clientId", "tenantId"];
/// Secret field keys reported by email connector validation.
pub const EMAIL_SECRETS_FIELDS: &[&str] = &["user", "password", "clientSecret"];
/// Field keys reported by email action params validation.
pub const EMAIL_PARAMS_FIELDS: &[&str] = &["to", "cc", "bcc", "message", "subject"];

// ============================================================================
// SECTION: Services
// ============================================================================

/// Well-known email services selectable for the connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailService {
    /// Google Gmail.
    Gmail,
    /// Microsoft Outlook 365.
    Outlook365,
    /// Amazon Simple Email Service.
    Ses,
    /// Elastic Cloud mail relay.
    ElasticCloud,
    /// Microsoft Exchange Server (OAuth client credentials).
    ExchangeServer,
    /// Any other SMTP server configured by host and port.
    Other,
}

impl EmailService {
    /// Returns the display name shown in service pickers.
    #[must_use]
    pub fn display_name(self) -> String {
        let key = match self {
            Self::Gmail => "email.service.gmail",
            Self::Outlook365 => "email.service.outlook365",
            Self::Ses => "email.service.ses",
            Self::ElasticCloud => "email.service.elastic_cloud",
            Self::ExchangeServer => "email.service.exchange_server",
            Self::Other => "email.service.other",
        };
        translate(key, Vec::new())
    }
}

/// Selectable email service entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailServiceOption {
    /// Service value stored in the connector config.
    pub value: EmailService,
    /// Display name.
    pub text: String,
}

/// Returns the selectable email services in picker order.
///
/// Elastic Cloud is only offered when the deployment runs on cloud.
#[must_use]
pub fn email_services(cloud_enabled: bool) -> Vec<EmailServiceOption> {
    [
        EmailService::Gmail,
        EmailService::Outlook365,
        EmailService::Ses,
        EmailService::ElasticCloud,
        EmailService::ExchangeServer,
        EmailService::Other,
    ]
    .into_iter()
    .filter(|service| cloud_enabled || *service != EmailService::ElasticCloud)
    .map(|service| EmailServiceOption {
        value: service,
        text: service.display_name(),
    })
    .collect()
}

// ============================================================================
// SECTION: Connector Records
// ============================================================================

/// Non-secret email connector configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailConnectorConfig {
    /// Sender address.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// SMTP port.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// SMTP host.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Selected email service.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub service: Option<EmailService>,
    /// Whether the server requires authentication.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub has_auth: bool,
    /// OAuth client identifier (Exchange Server).
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// OAuth tenant identifier (Exchange Server).
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// Secret email connector fields.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailConnectorSecrets {
    /// SMTP username.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// SMTP password.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// OAuth client secret (Exchange Server).
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl std::fmt::Debug for EmailConnectorSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConnectorSecrets")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Email connector document pairing config with secrets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConnector {
    /// Connector configuration.
    #[serde(default)]
    pub config: EmailConnectorConfig,
    /// Connector secrets.
    #[serde(default)]
    pub secrets: EmailConnectorSecrets,
}

// ============================================================================
// SECTION: Action Params
// ============================================================================

/// Parameters for a single email send action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailActionParams {
    /// Primary recipients.
    #[serde(default, deserialize_with = "lenient_list")]
    pub to: Vec<String>,
    /// Carbon-copy recipients.
    #[serde(default, deserialize_with = "lenient_list")]
    pub cc: Vec<String>,
    /// Blind carbon-copy recipients.
    #[serde(default, deserialize_with = "lenient_list")]
    pub bcc: Vec<String>,
    /// Message body.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Message subject.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}
