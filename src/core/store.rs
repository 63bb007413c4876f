//! Read interface over the stored schedule.
//!
//! The evaluator only needs two lookups, so it works against [`ScheduleStore`]
//! rather than a concrete database. [`DatabaseStore`] backs it with `SeaORM`;
//! tests use an in-memory implementation.

use crate::{
    config::settings::BusinessDefaults,
    core::{
        business_config, date_override,
        schedule::{BusinessConfig, DateOverride},
    },
    errors::Result,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Repository-style access to the business configuration and date overrides
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Returns the singleton configuration, creating it with defaults if absent.
    async fn get_singleton(&self) -> Result<BusinessConfig>;

    /// Returns the override for exactly `date`, if one exists.
    async fn get_by_date(&self, date: NaiveDate) -> Result<Option<DateOverride>>;
}

/// [`ScheduleStore`] backed by a `SeaORM` connection
#[derive(Debug, Clone, Copy)]
pub struct DatabaseStore<'a> {
    db: &'a DatabaseConnection,
    defaults: &'a BusinessDefaults,
    today: NaiveDate,
}

impl<'a> DatabaseStore<'a> {
    /// Wraps a connection.
    ///
    /// `defaults` and `today` seed the configuration (and its trial expiry) if
    /// the first access finds no row.
    #[must_use]
    pub const fn new(
        db: &'a DatabaseConnection,
        defaults: &'a BusinessDefaults,
        today: NaiveDate,
    ) -> Self {
        Self {
            db,
            defaults,
            today,
        }
    }
}

#[async_trait]
impl ScheduleStore for DatabaseStore<'_> {
    async fn get_singleton(&self) -> Result<BusinessConfig> {
        business_config::get_or_create_config(self.db, self.defaults, self.today).await
    }

    async fn get_by_date(&self, date: NaiveDate) -> Result<Option<DateOverride>> {
        date_override::get_override(self.db, date).await
    }
}
