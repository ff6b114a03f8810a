// crates/connector-check-config/src/config.rs
// ============================================================================
// Module: Connector Check Configuration
// Description: Configuration loading and validation for connector checks.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: connector-check-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! An explicit path or `CONNECTOR_CHECK_CONFIG` must point at a readable
//! file; when neither is given and the default file is absent, defaults apply.
//! Invalid configuration always fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use connector_check_core::AllowlistClassifier;
use connector_check_core::EmailValidationOptions;
use connector_check_core::FileAuditSink;
use connector_check_core::NoopAuditSink;
use connector_check_core::StderrAuditSink;
use connector_check_core::ValidationAuditSink;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "connector-check.toml";
/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "CONNECTOR_CHECK_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of allowlisted domains.
pub(crate) const MAX_ALLOWED_DOMAINS: usize = 1024;
/// Maximum length of a domain name.
pub(crate) const MAX_DOMAIN_LENGTH: usize = 253;
/// Maximum length of a domain label.
pub(crate) const MAX_DOMAIN_LABEL_LENGTH: usize = 63;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Connector check configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectorCheckConfig {
    /// Address classification settings.
    #[serde(default)]
    pub addresses: AddressConfig,
    /// Optional email rules.
    #[serde(default)]
    pub email: EmailConfig,
    /// Audit output settings.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl ConnectorCheckConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, required) = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = match fs::read(&resolved) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(err) => return Err(ConfigError::Io(err.to_string())),
        };
        Self::from_bytes(&bytes)
    }

    /// Parses and validates configuration from raw file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the payload is oversized, not UTF-8,
    /// malformed, or invalid.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.addresses.validate()?;
        self.audit.validate()?;
        Ok(())
    }

    /// Builds the address classifier described by `[addresses]`.
    #[must_use]
    pub fn classifier(&self) -> AllowlistClassifier {
        self.addresses
            .allowed_domains
            .as_ref()
            .map_or_else(AllowlistClassifier::new, AllowlistClassifier::with_allowed_domains)
    }

    /// Returns the optional email rules described by `[email]`.
    #[must_use]
    pub const fn email_options(&self) -> EmailValidationOptions {
        EmailValidationOptions {
            require_credentials_with_auth: self.email.require_credentials_with_auth,
            require_recipient: self.email.require_recipient,
        }
    }

    /// Opens the audit sink described by `[audit]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the audit file cannot be opened.
    pub fn audit_sink(&self) -> Result<Arc<dyn ValidationAuditSink>, ConfigError> {
        if !self.audit.enabled {
            return Ok(Arc::new(NoopAuditSink));
        }
        match &self.audit.path {
            Some(path) => {
                let sink = FileAuditSink::new(Path::new(path.trim()))
                    .map_err(|err| ConfigError::Io(format!("audit.path: {err}")))?;
                Ok(Arc::new(sink))
            }
            None => Ok(Arc::new(StderrAuditSink)),
        }
    }
}

/// Address classification configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressConfig {
    /// Recipient domains to allow; unset allows every well-formed domain.
    #[serde(default)]
    pub allowed_domains: Option<Vec<String>>,
}

impl AddressConfig {
    /// Validates the domain allowlist.
    fn validate(&self) -> Result<(), ConfigError> {
        let Some(domains) = &self.allowed_domains else {
            return Ok(());
        };
        if domains.is_empty() {
            return Err(ConfigError::Invalid(
                "addresses.allowed_domains must be non-empty when set".to_string(),
            ));
        }
        if domains.len() > MAX_ALLOWED_DOMAINS {
            return Err(ConfigError::Invalid(
                "addresses.allowed_domains exceeds max entries".to_string(),
            ));
        }
        for domain in domains {
            validate_domain(domain)?;
        }
        Ok(())
    }
}

/// Optional email rule configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmailConfig {
    /// Require username and password when `hasAuth` is set.
    #[serde(default)]
    pub require_credentials_with_auth: bool,
    /// Require at least one recipient in send params.
    #[serde(default)]
    pub require_recipient: bool,
    /// Offer the Elastic Cloud service in the service catalog.
    #[serde(default)]
    pub cloud_enabled: bool,
}

/// Audit output configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Emit one audit event per validation call.
    #[serde(default)]
    pub enabled: bool,
    /// Append events to this file instead of stderr.
    #[serde(default)]
    pub path: Option<String>,
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if !self.enabled {
            return Err(ConfigError::Invalid("audit.path requires audit.enabled".to_string()));
        }
        validate_path_string("audit.path", path)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path; the flag is false only for the implicit default.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates one allowlisted domain name.
fn validate_domain(domain: &str) -> Result<(), ConfigError> {
    let normalized = domain.trim().trim_end_matches('.');
    if normalized.is_empty() {
        return Err(ConfigError::Invalid(
            "addresses.allowed_domains entries must be non-empty".to_string(),
        ));
    }
    if normalized.len() > MAX_DOMAIN_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "addresses.allowed_domains entry exceeds max length: {normalized}"
        )));
    }
    let labels_ok = normalized.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_DOMAIN_LABEL_LENGTH
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
    });
    if !labels_ok {
        return Err(ConfigError::Invalid(format!(
            "addresses.allowed_domains entry is not a domain name: {normalized}"
        )));
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
