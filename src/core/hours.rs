//! Business-hours evaluator - decides whether the kitchen is taking orders.
//!
//! The weekly schedule in [`BusinessConfig`] is merged with the [`DateOverride`]
//! for today's date (see [`DaySchedule::resolve`]), then the current time is
//! checked against the effective hours:
//!
//! - a closed override wins outright and its reason is appended to the message
//! - a disabled day returns the plain closure message
//! - `opening < closing` is a normal range, inclusive at both ends
//! - `opening >= closing` wraps past midnight, so a 00:00 close means "until midnight"
//!
//! Subscription status is deliberately not consulted here; see [`crate::core::gate`].

use crate::core::{
    schedule::{BusinessConfig, DateOverride, DaySchedule, DaySource},
    store::ScheduleStore,
};
use crate::errors::Result;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

/// Outcome of an evaluation: whether orders are accepted and what to tell customers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessStatus {
    /// `true` when orders are accepted right now
    pub is_open: bool,
    /// Empty when open, otherwise the closure message to display
    pub message: String,
}

impl BusinessStatus {
    /// Open, with no message
    #[must_use]
    pub const fn open() -> Self {
        Self {
            is_open: true,
            message: String::new(),
        }
    }

    /// Closed with `message`
    #[must_use]
    pub const fn closed(message: String) -> Self {
        Self {
            is_open: false,
            message,
        }
    }
}

impl From<BusinessStatus> for (bool, String) {
    fn from(status: BusinessStatus) -> Self {
        (status.is_open, status.message)
    }
}

/// Evaluates the schedule at `now` without touching storage.
///
/// `date_override` should be the override for `now`'s date; an override for any
/// other date is ignored.
#[must_use]
pub fn evaluate_schedule(
    now: NaiveDateTime,
    config: &BusinessConfig,
    date_override: Option<&DateOverride>,
) -> BusinessStatus {
    let day = DaySchedule::resolve(config, now.date(), date_override);
    let base = &config.closure_message;

    if !day.enabled {
        return match day.source {
            DaySource::Override { reason } => {
                debug!("{} closed by override", day.date);
                BusinessStatus::closed(format!("{base} ({})", reason.unwrap_or_default()))
            }
            DaySource::Weekly => {
                debug!("{} is not a scheduled working day", day.date);
                BusinessStatus::closed(base.clone())
            }
        };
    }

    if day.is_open_at(now.time()) {
        return BusinessStatus::open();
    }

    debug!(
        "{} is outside today's hours ({})",
        now.time(),
        day.hours_label()
    );
    BusinessStatus::closed(format!("{base} (Today: {})", day.hours_label()))
}

/// Loads today's schedule from `store` and evaluates it at `now`.
///
/// The only side effect is the lazy creation of the configuration singleton.
pub async fn evaluate<S>(store: &S, now: NaiveDateTime) -> Result<BusinessStatus>
where
    S: ScheduleStore + ?Sized,
{
    let config = store.get_singleton().await?;
    let date_override = store.get_by_date(now.date()).await?;
    Ok(evaluate_schedule(now, &config, date_override.as_ref()))
}
