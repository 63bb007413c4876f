//! Shared test utilities for `KitchenClock`.
//!
//! Helpers for setting up in-memory databases, building schedule values with
//! sensible defaults, and an in-memory [`ScheduleStore`].

#![allow(clippy::unwrap_used)]

use crate::{
    core::{
        date_override::OverrideInput,
        schedule::{BusinessConfig, DateOverride},
        store::ScheduleStore,
    },
    errors::Result,
};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all database tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Shorthand for a time of day.
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// A timestamp on `day` at `hour:minute`.
pub fn at(day: (i32, u32, u32), hour: u32, minute: u32) -> NaiveDateTime {
    date(day.0, day.1, day.2).and_time(time(hour, minute))
}

/// A configuration open every day from `opening_hour:00` to `closing_hour:00`.
///
/// # Defaults
/// * `closure_message`: `"We are closed"`
/// * `subscription_expires_on`: 2099-12-31
pub fn config_with_hours(opening_hour: u32, closing_hour: u32) -> BusinessConfig {
    BusinessConfig {
        business_name: "Test Kitchen".to_string(),
        opening: time(opening_hour, 0),
        closing: time(closing_hour, 0),
        closure_message: "We are closed".to_string(),
        open_days: [true; 7],
        subscription_expires_on: date(2099, 12, 31),
    }
}

/// Override input that closes the day for `reason`.
pub fn closed_input(reason: &str) -> OverrideInput {
    OverrideInput {
        open: false,
        opening: None,
        closing: None,
        reason: Some(reason.to_string()),
    }
}

/// [`ScheduleStore`] holding everything in memory
#[derive(Debug, Clone)]
pub struct MemoryStore {
    config: BusinessConfig,
    overrides: HashMap<NaiveDate, DateOverride>,
}

impl MemoryStore {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            config,
            overrides: HashMap::new(),
        }
    }

    /// Adds (or replaces) the override for its date.
    pub fn with_override(mut self, date_override: DateOverride) -> Self {
        self.overrides.insert(date_override.date, date_override);
        self
    }
}

#[async_trait]
impl ScheduleStore for MemoryStore {
    async fn get_singleton(&self) -> Result<BusinessConfig> {
        Ok(self.config.clone())
    }

    async fn get_by_date(&self, date: NaiveDate) -> Result<Option<DateOverride>> {
        Ok(self.overrides.get(&date).cloned())
    }
}
