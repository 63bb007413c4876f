//! Schedule domain types - framework-agnostic views of the stored configuration.
//!
//! [`BusinessConfig`] and [`DateOverride`] mirror the database rows but hold the
//! weekday flags as an ordered array and drop storage-only columns. [`DaySchedule`]
//! is the merge of the two for a single date and is what both the evaluator and
//! the agenda work from.

use crate::core::clock;
use crate::entities::{business_config, date_override};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Global business configuration (the singleton)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessConfig {
    /// Display name of the business
    pub business_name: String,
    /// Global opening time
    pub opening: NaiveTime,
    /// Global closing time
    pub closing: NaiveTime,
    /// Message shown while closed
    pub closure_message: String,
    /// Whether the business operates on each weekday, index 0 = Monday
    pub open_days: [bool; 7],
    /// Last paid-up day of the subscription
    pub subscription_expires_on: NaiveDate,
}

impl BusinessConfig {
    /// Weekday default for `date`, before any override is applied.
    #[must_use]
    pub fn is_day_enabled(&self, date: NaiveDate) -> bool {
        self.open_days[clock::weekday_index(date)]
    }
}

impl From<business_config::Model> for BusinessConfig {
    fn from(model: business_config::Model) -> Self {
        Self {
            business_name: model.business_name,
            opening: model.opening_time,
            closing: model.closing_time,
            closure_message: model.closure_message,
            open_days: [
                model.monday_open,
                model.tuesday_open,
                model.wednesday_open,
                model.thursday_open,
                model.friday_open,
                model.saturday_open,
                model.sunday_open,
            ],
            subscription_expires_on: model.subscription_expires_on,
        }
    }
}

/// One-off schedule change for a single date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateOverride {
    pub date: NaiveDate,
    /// `false` closes the date no matter what the weekly schedule says
    pub open: bool,
    pub opening: Option<NaiveTime>,
    pub closing: Option<NaiveTime>,
    pub reason: Option<String>,
}

impl From<date_override::Model> for DateOverride {
    fn from(model: date_override::Model) -> Self {
        Self {
            date: model.date,
            open: model.is_open,
            opening: model.opening_time,
            closing: model.closing_time,
            reason: model.reason,
        }
    }
}

/// Where a day's effective schedule came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DaySource {
    /// The weekly defaults in [`BusinessConfig`]
    Weekly,
    /// A [`DateOverride`] for that exact date
    Override {
        /// The override's reason, if any
        reason: Option<String>,
    },
}

/// The effective schedule for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    /// Whether the business operates at all on this date
    pub enabled: bool,
    pub opening: NaiveTime,
    pub closing: NaiveTime,
    pub source: DaySource,
}

impl DaySchedule {
    /// Merges the weekly defaults with an override for `date`.
    ///
    /// An open override forces the day on; each of its times replaces the global
    /// value independently. A closed override turns the day off. Override times are
    /// kept on closed days too so the agenda can show what was stored.
    #[must_use]
    pub fn resolve(
        config: &BusinessConfig,
        date: NaiveDate,
        date_override: Option<&DateOverride>,
    ) -> Self {
        let weekly = Self {
            date,
            enabled: config.is_day_enabled(date),
            opening: config.opening,
            closing: config.closing,
            source: DaySource::Weekly,
        };

        let Some(ov) = date_override.filter(|ov| ov.date == date) else {
            return weekly;
        };

        Self {
            enabled: ov.open,
            opening: ov.opening.unwrap_or(config.opening),
            closing: ov.closing.unwrap_or(config.closing),
            source: DaySource::Override {
                reason: ov.reason.clone(),
            },
            ..weekly
        }
    }

    /// `true` when the hours wrap past midnight (or close exactly at it).
    #[must_use]
    pub fn is_overnight(&self) -> bool {
        self.opening >= self.closing
    }

    /// Whether `time` falls inside the day's hours. Both ends are inclusive.
    #[must_use]
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        if self.is_overnight() {
            time >= self.opening || time <= self.closing
        } else {
            self.opening <= time && time <= self.closing
        }
    }

    /// `08:00 am - 10:00 pm`
    #[must_use]
    pub fn hours_label(&self) -> String {
        format!(
            "{} - {}",
            clock::format_12h(self.opening),
            clock::format_12h(self.closing)
        )
    }

    /// Whether an override decided this day
    #[must_use]
    pub const fn is_override(&self) -> bool {
        matches!(self.source, DaySource::Override { .. })
    }
}
