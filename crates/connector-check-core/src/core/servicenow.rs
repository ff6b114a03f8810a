// crates/connector-check-core/src/core/servicenow.rs
// ============================================================================
// Module: ServiceNow Connector Model
// Description: ServiceNow connector config and secrets.
// Purpose: Typed records for basic and OAuth ServiceNow connector forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A ServiceNow connector targets one instance URL and authenticates either
//! with a username and password or with OAuth (JWT bearer) credentials.
//! `is_oauth` selects which credential fields apply.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::fields::lenient;
use crate::core::fields::lenient_flag;

// ============================================================================
// SECTION: Field Keys
// ============================================================================

/// Config field keys reported by ServiceNow connector validation.
pub const SERVICENOW_CONFIG_FIELDS: &[&str] =
    &["apiUrl", "clientId", "userIdentifierValue", "jwtKeyId"];
/// Secret field keys reported by ServiceNow connector validation.
pub const SERVICENOW_SECRETS_FIELDS: &[&str] =
    &["username", "password", "clientSecret", "privateKey"];

// ============================================================================
// SECTION: Connector Records
// ============================================================================

/// Non-secret ServiceNow connector configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceNowConfig {
    /// Instance URL.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Use OAuth instead of basic credentials.
    #[serde(default, deserialize_with = "lenient_flag", rename = "isOAuth")]
    pub is_oauth: bool,
    /// OAuth client identifier.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Value of the user identifier claim.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub user_identifier_value: Option<String>,
    /// JWT verifier key identifier.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub jwt_key_id: Option<String>,
}

/// Secret ServiceNow connector fields.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceNowSecrets {
    /// Basic auth username.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Basic auth password.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// OAuth client secret.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// PEM private key used to sign the JWT.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Optional passphrase for the private key.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub private_key_password: Option<String>,
}

impl std::fmt::Debug for ServiceNowSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |value: Option<&String>| value.map(|_| "<redacted>");
        f.debug_struct("ServiceNowSecrets")
            .field("username", &self.username)
            .field("password", &redacted(self.password.as_ref()))
            .field("client_secret", &redacted(self.client_secret.as_ref()))
            .field("private_key", &redacted(self.private_key.as_ref()))
            .field("private_key_password", &redacted(self.private_key_password.as_ref()))
            .finish()
    }
}

/// ServiceNow connector document pairing config with secrets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceNowConnector {
    /// Connector configuration.
    #[serde(default)]
    pub config: ServiceNowConfig,
    /// Connector secrets.
    #[serde(default)]
    pub secrets: ServiceNowSecrets,
}
