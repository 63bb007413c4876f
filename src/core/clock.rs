//! Time and date helpers shared by the evaluator, the agenda and the bot.
//!
//! All values are naive local times. No timezone conversion happens anywhere in
//! the crate: the caller's wall clock is the business's wall clock.

use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::warn;

const TIME_FORMATS: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p"];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Parses a time of day such as `08:00`, `22:30:00` or `8:00 pm`.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| Error::InvalidTime {
            value: value.to_string(),
        })
}

/// Parses an optional override time.
///
/// Blank input means "no override for this field". Malformed input is treated
/// the same way and only logged, it never fails the caller.
#[must_use]
pub fn parse_optional_time(value: Option<&str>) -> Option<NaiveTime> {
    let raw = value.map(str::trim).filter(|v| !v.is_empty())?;
    match parse_time(raw) {
        Ok(time) => Some(time),
        Err(e) => {
            warn!("Ignoring override time field: {e}");
            None
        }
    }
}

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        value: value.to_string(),
    })
}

/// Renders a time on a 12-hour clock with a lowercase suffix, e.g. `08:00 pm`.
#[must_use]
pub fn format_12h(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string().to_lowercase()
}

/// Weekday index of a date, 0 = Monday .. 6 = Sunday.
#[must_use]
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// English name for a weekday index (0 = Monday).
#[must_use]
pub fn weekday_name(index: usize) -> &'static str {
    WEEKDAY_NAMES[index % 7]
}
