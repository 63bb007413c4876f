//! Staff configuration - which Discord users may change the schedule.
//!
//! Admin user IDs are read from `ADMIN_USER_IDS` in the `.env` file as a
//! comma-separated list. With the variable unset nobody can run admin commands.

use std::collections::HashSet;

/// Environment variable holding the comma-separated admin user IDs
pub const ADMIN_USER_IDS_VAR: &str = "ADMIN_USER_IDS";

/// Parses a comma-separated list of user IDs, ignoring blanks and whitespace.
#[must_use]
pub fn parse_admin_ids(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Gets the configured admin user IDs from the environment.
#[must_use]
pub fn get_admin_ids() -> HashSet<String> {
    std::env::var(ADMIN_USER_IDS_VAR)
        .map(|raw| parse_admin_ids(&raw))
        .unwrap_or_default()
}
