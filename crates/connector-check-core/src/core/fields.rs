// crates/connector-check-core/src/core/fields.rs
// ============================================================================
// Module: Field Presence and Lenient Decoding
// Description: Presence checks and tolerant serde helpers for form fields.
// Purpose: Treat malformed optional fields as absent instead of failing.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Connector documents come from form state and are frequently partial or
//! loosely typed. The helpers here decode each optional field on its own:
//! a field of the wrong JSON type decodes as absent, so a single bad field
//! never prevents the rest of the record from being validated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Deserializer;
use serde::de::DeserializeOwned;
use serde_json::Value;

// ============================================================================
// SECTION: Presence
// ============================================================================

/// Returns true when a text field is provided and non-empty.
#[must_use]
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty())
}

// ============================================================================
// SECTION: Lenient Decoding
// ============================================================================

/// Decodes an optional field, mapping values of the wrong shape to `None`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decodes a boolean flag, mapping anything but a JSON boolean to `false`.
pub(crate) fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, bool>(deserializer)?.unwrap_or(false))
}

/// Decodes a list of strings, dropping non-string entries.
pub(crate) fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(items) = lenient::<D, Vec<Value>>(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text),
            _ => None,
        })
        .collect())
}
