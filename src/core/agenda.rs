//! Agenda - the effective schedule for the coming days.
//!
//! Gives admins a view of what customers will see on each of the next few days,
//! with overrides already applied.

use crate::{
    config::settings::BusinessDefaults,
    core::{
        business_config, clock, date_override,
        schedule::{BusinessConfig, DateOverride, DaySchedule, DaySource},
    },
    errors::Result,
};
use chrono::{Days, NaiveDate};
use sea_orm::ConnectionTrait;
use std::fmt::Write;

/// Upper bound on how many days an agenda may cover
pub const MAX_AGENDA_DAYS: u32 = 31;

/// One day in the agenda
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaDay {
    /// "Today", "Tomorrow", or the weekday name
    pub label: String,
    /// The effective schedule for the date
    pub schedule: DaySchedule,
}

fn day_label(offset: u64, date: NaiveDate) -> String {
    match offset {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => clock::weekday_name(clock::weekday_index(date)).to_string(),
    }
}

/// Builds the agenda for `days` days starting at `today`.
///
/// `overrides` may contain dates outside the window; they are ignored.
#[must_use]
pub fn build_agenda(
    config: &BusinessConfig,
    overrides: &[DateOverride],
    today: NaiveDate,
    days: u32,
) -> Vec<AgendaDay> {
    (0..u64::from(days.min(MAX_AGENDA_DAYS)))
        .filter_map(|offset| {
            let date = today.checked_add_days(Days::new(offset))?;
            let date_override = overrides.iter().find(|ov| ov.date == date);
            Some(AgendaDay {
                label: day_label(offset, date),
                schedule: DaySchedule::resolve(config, date, date_override),
            })
        })
        .collect()
}

/// Loads the configuration and overrides, then builds the agenda.
pub async fn load_agenda<C>(
    db: &C,
    defaults: &BusinessDefaults,
    today: NaiveDate,
    days: u32,
) -> Result<Vec<AgendaDay>>
where
    C: ConnectionTrait,
{
    let config = business_config::get_or_create_config(db, defaults, today).await?;
    let days = days.clamp(1, MAX_AGENDA_DAYS);
    let last = today
        .checked_add_days(Days::new(u64::from(days - 1)))
        .unwrap_or(NaiveDate::MAX);
    let overrides = date_override::list_overrides_between(db, today, last).await?;

    Ok(build_agenda(&config, &overrides, today, days))
}

/// Renders the agenda as one line per day.
pub fn format_agenda(agenda: &[AgendaDay]) -> Result<String> {
    let mut out = String::new();

    for day in agenda {
        let schedule = &day.schedule;
        let status = if schedule.enabled {
            format!("🟢 {}", schedule.hours_label())
        } else {
            "🔴 Closed".to_string()
        };

        write!(
            out,
            "**{}** {} · {status}",
            day.label,
            schedule.date.format("%d/%m")
        )?;

        if let DaySource::Override { reason } = &schedule.source {
            match reason {
                Some(reason) => write!(out, " · ✏️ {reason}")?,
                None => write!(out, " · ✏️")?,
            }
        }
        writeln!(out)?;
    }

    Ok(out)
}
