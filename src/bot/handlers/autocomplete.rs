//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggests dates for the override commands so admins rarely have to type
//! `YYYY-MM-DD` by hand.

use crate::{
    bot::Context,
    core::{agenda::MAX_AGENDA_DAYS, date_override},
};
use chrono::{Days, Local, NaiveDate};

/// Discord shows at most this many suggestions
const MAX_SUGGESTIONS: usize = 25;

/// Merges the next `window` days (at most [`MAX_AGENDA_DAYS`]) with the dates
/// that already have overrides.
fn candidate_dates(today: NaiveDate, window: u32, existing: &[NaiveDate]) -> Vec<NaiveDate> {
    let window = window.min(MAX_AGENDA_DAYS);
    let mut dates: Vec<NaiveDate> = (0..u64::from(window))
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .chain(existing.iter().copied())
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Filters candidate dates by what the user typed so far.
fn matching_dates(candidates: &[NaiveDate], partial: &str) -> Vec<String> {
    let partial = partial.trim();
    candidates
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .filter(|d| d.starts_with(partial))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggests upcoming dates: the agenda window plus every date with an override.
pub async fn autocomplete_date(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let today = Local::now().date_naive();
    let data = ctx.data();

    let existing: Vec<NaiveDate> =
        date_override::list_upcoming_overrides(&data.database, today)
            .await
            .map(|overrides| overrides.into_iter().map(|o| o.date).collect())
            .unwrap_or_default();

    let candidates = candidate_dates(today, data.settings.agenda_days, &existing);
    matching_dates(&candidates, partial)
}

/// Suggests only dates that currently have an override.
pub async fn autocomplete_override_date(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let today = Local::now().date_naive();

    let Ok(overrides) =
        date_override::list_upcoming_overrides(&ctx.data().database, today).await
    else {
        return Vec::new();
    };

    let dates: Vec<NaiveDate> = overrides.into_iter().map(|o| o.date).collect();
    matching_dates(&dates, partial)
}
