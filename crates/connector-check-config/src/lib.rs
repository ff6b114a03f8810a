// crates/connector-check-config/src/lib.rs
// ============================================================================
// Module: Connector Check Config Library
// Description: Config model, validation, and canonical examples.
// Purpose: Single source of truth for connector-check.toml semantics.
// Dependencies: connector-check-core, serde, toml
// ============================================================================

//! ## Overview
//! `connector-check-config` defines the configuration model for connector
//! checks: the recipient domain allowlist, optional email rules, and audit
//! output. Loading is strict and size-limited; validation fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
