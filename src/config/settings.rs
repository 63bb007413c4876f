//! Application settings loading from config.toml
//!
//! The file is optional. When present, its `[defaults]` table seeds the business
//! configuration the first time it is created; later edits go through the admin
//! commands and are stored in the database, not written back here.

use crate::core::{agenda::MAX_AGENDA_DAYS, clock};
use crate::errors::{Error, Result};
use chrono::NaiveTime;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable that overrides the settings file location
pub const CONFIG_PATH_VAR: &str = "KITCHEN_CLOCK_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Longest trial a fresh configuration may be seeded with (ten years)
pub const MAX_TRIAL_DAYS: i64 = 3660;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Values used when the business configuration row is first created
    pub defaults: BusinessDefaults,
    /// Number of days shown by `/agenda` when no count is given
    pub agenda_days: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            defaults: BusinessDefaults::default(),
            agenda_days: 7,
        }
    }
}

impl AppSettings {
    fn validate(&self) -> Result<()> {
        if !(1..=MAX_AGENDA_DAYS).contains(&self.agenda_days) {
            return Err(Error::Config {
                message: format!(
                    "agenda_days must be between 1 and {MAX_AGENDA_DAYS} (got {})",
                    self.agenda_days
                ),
            });
        }
        self.defaults.validate()
    }
}

/// Seed values for a freshly created business configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BusinessDefaults {
    pub business_name: String,
    /// Opening time, `HH:MM`
    pub opening: String,
    /// Closing time, `HH:MM`
    pub closing: String,
    pub closure_message: String,
    /// Days of grace before the subscription expires
    pub trial_days: i64,
}

impl Default for BusinessDefaults {
    fn default() -> Self {
        Self {
            business_name: "FoodBack".to_string(),
            opening: "08:00".to_string(),
            closing: "22:00".to_string(),
            closure_message:
                "Ups, la cocina descansa. 😴\nVolvemos mañana con las pilas cargadas.".to_string(),
            trial_days: 30,
        }
    }
}

impl BusinessDefaults {
    /// Parsed opening time
    pub fn opening_time(&self) -> Result<NaiveTime> {
        clock::parse_time(&self.opening)
    }

    /// Parsed closing time
    pub fn closing_time(&self) -> Result<NaiveTime> {
        clock::parse_time(&self.closing)
    }

    fn validate(&self) -> Result<()> {
        self.opening_time()?;
        self.closing_time()?;
        if !(0..=MAX_TRIAL_DAYS).contains(&self.trial_days) {
            return Err(Error::Config {
                message: format!(
                    "trial_days must be between 0 and {MAX_TRIAL_DAYS} (got {})",
                    self.trial_days
                ),
            });
        }
        Ok(())
    }
}

/// Loads application settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A default time cannot be parsed
/// - `agenda_days` or `trial_days` is out of range
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<AppSettings> {
    let path_ref = path.as_ref();
    debug!("Attempting to load settings from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    parse_settings(&contents)
}

/// Parses settings from TOML text and validates them
pub fn parse_settings(contents: &str) -> Result<AppSettings> {
    let settings: AppSettings = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    settings.validate()?;
    Ok(settings)
}

/// Loads settings from `KITCHEN_CLOCK_CONFIG` or `./config.toml`.
///
/// A missing file is not an error: built-in defaults are used instead.
pub fn load_default_settings() -> Result<AppSettings> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    if Path::new(&path).exists() {
        load_settings(&path)
    } else {
        info!("No settings file at {path}, using built-in defaults");
        Ok(AppSettings::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
            agenda_days = 14

            [defaults]
            business_name = "Pupuseria Central"
            opening = "17:00"
            closing = "01:30"
            closure_message = "Closed for now"
            trial_days = 7
        "#;

        let settings = parse_settings(toml_str).unwrap();
        assert_eq!(settings.agenda_days, 14);
        assert_eq!(settings.defaults.business_name, "Pupuseria Central");
        assert_eq!(
            settings.defaults.opening_time().unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap()
        );
        assert_eq!(
            settings.defaults.closing_time().unwrap(),
            NaiveTime::from_hms_opt(1, 30, 0).unwrap()
        );
        assert_eq!(settings.defaults.trial_days, 7);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings = parse_settings("[defaults]\nopening = \"09:00\"\n").unwrap();
        assert_eq!(settings.agenda_days, 7);
        assert_eq!(settings.defaults.business_name, "FoodBack");
        assert_eq!(settings.defaults.closing, "22:00");
        assert_eq!(settings.defaults.trial_days, 30);
    }

    #[test]
    fn test_invalid_default_time_is_rejected() {
        let result = parse_settings("[defaults]\nopening = \"25:99\"\n");
        assert!(matches!(result, Err(Error::InvalidTime { .. })));
    }

    #[test]
    fn test_negative_trial_days_is_rejected() {
        let result = parse_settings("[defaults]\ntrial_days = -1\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_oversized_trial_days_is_rejected() {
        let result = parse_settings("[defaults]\ntrial_days = 100000000\n");
        assert!(matches!(result, Err(Error::Config { .. })));

        let at_limit = format!("[defaults]\ntrial_days = {MAX_TRIAL_DAYS}\n");
        let settings = parse_settings(&at_limit).unwrap();
        assert_eq!(settings.defaults.trial_days, MAX_TRIAL_DAYS);
    }

    #[test]
    fn test_agenda_days_out_of_range_is_rejected() {
        for value in ["0", "32", "4294967295"] {
            let result = parse_settings(&format!("agenda_days = {value}\n"));
            assert!(
                matches!(result, Err(Error::Config { .. })),
                "agenda_days = {value} should be rejected"
            );
        }

        let settings = parse_settings("agenda_days = 31\n").unwrap();
        assert_eq!(settings.agenda_days, MAX_AGENDA_DAYS);
    }
}
