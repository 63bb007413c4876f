//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions that are not commands
//! themselves: autocomplete suggestions and permission checks.

/// Autocomplete handlers for override dates
pub mod autocomplete;
/// Command checks gating admin-only commands
pub mod checks;
