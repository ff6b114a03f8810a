// crates/connector-check-cli/src/lib.rs
// ============================================================================
// Module: Connector Check CLI Library
// Description: Shared helpers for the connector-check binary.
// Purpose: Expose the CLI message catalog to the binary and its tests.
// Dependencies: connector-check-core
// ============================================================================

//! ## Overview
//! The CLI library hosts the message catalog used by the `connector-check`
//! binary. Validation messages come from the core catalog; this crate only
//! owns the strings the binary prints around them.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;
