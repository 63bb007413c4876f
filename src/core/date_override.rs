//! Date override logic - create, replace, remove and purge one-off schedule days.
//!
//! Overrides are keyed by calendar date. Saving an override for a date that
//! already has one replaces it in place (upsert on the unique `date` column).

use crate::{
    core::schedule::DateOverride,
    entities::{DateOverride as DateOverrideEntity, date_override},
    errors::{Error, Result},
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{QueryOrder, Set, prelude::*, sea_query::OnConflict};
use tracing::info;

/// Values an admin submits for a single date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideInput {
    /// `true` forces the day open, `false` closes it
    pub open: bool,
    /// Replaces the global opening time when set
    pub opening: Option<NaiveTime>,
    /// Replaces the global closing time when set
    pub closing: Option<NaiveTime>,
    /// Shown to customers on closed days
    pub reason: Option<String>,
}

/// Returns the override for exactly `date`, if one exists.
pub async fn get_override<C>(db: &C, date: NaiveDate) -> Result<Option<DateOverride>>
where
    C: ConnectionTrait,
{
    let model = DateOverrideEntity::find()
        .filter(date_override::Column::Date.eq(date))
        .one(db)
        .await?;
    Ok(model.map(DateOverride::from))
}

/// Creates or replaces the override for `date`.
///
/// A blank reason is stored as no reason.
pub async fn upsert_override<C>(db: &C, date: NaiveDate, input: OverrideInput) -> Result<DateOverride>
where
    C: ConnectionTrait,
{
    let reason = input
        .reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());

    let active_model = date_override::ActiveModel {
        date: Set(date),
        is_open: Set(input.open),
        opening_time: Set(input.opening),
        closing_time: Set(input.closing),
        reason: Set(reason),
        ..Default::default()
    };

    DateOverrideEntity::insert(active_model)
        .on_conflict(
            OnConflict::column(date_override::Column::Date)
                .update_columns([
                    date_override::Column::IsOpen,
                    date_override::Column::OpeningTime,
                    date_override::Column::ClosingTime,
                    date_override::Column::Reason,
                ])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    let saved = get_override(db, date).await?.ok_or_else(|| {
        Error::from(DbErr::RecordNotFound(format!(
            "override for {date} missing after upsert"
        )))
    })?;

    info!(
        "Override for {date} saved: {}",
        if saved.open { "open" } else { "closed" }
    );
    Ok(saved)
}

/// Deletes the override for `date`.
///
/// # Errors
/// Returns [`Error::OverrideNotFound`] if the date has no override.
pub async fn remove_override<C>(db: &C, date: NaiveDate) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = DateOverrideEntity::delete_many()
        .filter(date_override::Column::Date.eq(date))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::OverrideNotFound { date });
    }

    info!("Override for {date} removed");
    Ok(())
}

/// Lists overrides with `from <= date <= to`, earliest first.
pub async fn list_overrides_between<C>(
    db: &C,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<DateOverride>>
where
    C: ConnectionTrait,
{
    let models = DateOverrideEntity::find()
        .filter(date_override::Column::Date.gte(from))
        .filter(date_override::Column::Date.lte(to))
        .order_by_asc(date_override::Column::Date)
        .all(db)
        .await?;
    Ok(models.into_iter().map(DateOverride::from).collect())
}

/// Lists every override dated `today` or later, earliest first.
pub async fn list_upcoming_overrides<C>(db: &C, today: NaiveDate) -> Result<Vec<DateOverride>>
where
    C: ConnectionTrait,
{
    let models = DateOverrideEntity::find()
        .filter(date_override::Column::Date.gte(today))
        .order_by_asc(date_override::Column::Date)
        .all(db)
        .await?;
    Ok(models.into_iter().map(DateOverride::from).collect())
}

/// Deletes overrides dated strictly before `today`. Returns how many were removed.
pub async fn purge_past_overrides<C>(db: &C, today: NaiveDate) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = DateOverrideEntity::delete_many()
        .filter(date_override::Column::Date.lt(today))
        .exec(db)
        .await?;

    if result.rows_affected > 0 {
        info!(
            "Purged {} stale override(s) dated before {today}",
            result.rows_affected
        );
    }
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{closed_input, date, setup_test_db, time};

    #[tokio::test]
    async fn test_upsert_creates_override() -> Result<()> {
        let db = setup_test_db().await?;

        let saved = upsert_override(
            &db,
            date(2024, 12, 24),
            OverrideInput {
                open: true,
                opening: Some(time(10, 0)),
                closing: None,
                reason: Some("Christmas Eve".to_string()),
            },
        )
        .await?;

        assert!(saved.open);
        assert_eq!(saved.opening, Some(time(10, 0)));
        assert_eq!(saved.closing, None);
        assert_eq!(saved.reason.as_deref(), Some("Christmas Eve"));

        let fetched = get_override(&db, date(2024, 12, 24)).await?;
        assert_eq!(fetched, Some(saved));
        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_override() -> Result<()> {
        let db = setup_test_db().await?;
        let day = date(2024, 12, 25);

        upsert_override(&db, day, closed_input("Holiday")).await?;
        let replaced = upsert_override(
            &db,
            day,
            OverrideInput {
                open: true,
                opening: None,
                closing: Some(time(0, 0)),
                reason: Some("   ".to_string()),
            },
        )
        .await?;

        assert!(replaced.open);
        assert_eq!(replaced.closing, Some(time(0, 0)));
        assert_eq!(replaced.reason, None);

        let count = DateOverrideEntity::find().count(&db).await?;
        assert_eq!(count, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_override_missing_date() -> Result<()> {
        let db = setup_test_db().await?;
        upsert_override(&db, date(2024, 5, 1), closed_input("Labour day")).await?;

        assert!(get_override(&db, date(2024, 5, 2)).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_override() -> Result<()> {
        let db = setup_test_db().await?;
        let day = date(2024, 9, 15);
        upsert_override(&db, day, closed_input("Independence day")).await?;

        remove_override(&db, day).await?;
        assert!(get_override(&db, day).await?.is_none());

        let again = remove_override(&db, day).await;
        assert!(matches!(again, Err(Error::OverrideNotFound { date: missing }) if missing == day));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_overrides_between_is_inclusive_and_ordered() -> Result<()> {
        let db = setup_test_db().await?;
        for day in [12, 3, 10, 1] {
            upsert_override(&db, date(2024, 8, day), closed_input("x")).await?;
        }

        let listed = list_overrides_between(&db, date(2024, 8, 3), date(2024, 8, 10)).await?;
        let dates: Vec<NaiveDate> = listed.iter().map(|o| o.date).collect();
        assert_eq!(dates, vec![date(2024, 8, 3), date(2024, 8, 10)]);

        let upcoming = list_upcoming_overrides(&db, date(2024, 8, 2)).await?;
        assert_eq!(upcoming.len(), 3);
        assert_eq!(upcoming[0].date, date(2024, 8, 3));
        Ok(())
    }

    #[tokio::test]
    async fn test_purge_past_overrides_keeps_today_and_future() -> Result<()> {
        let db = setup_test_db().await?;
        let today = date(2024, 6, 15);
        upsert_override(&db, date(2024, 6, 1), closed_input("old")).await?;
        upsert_override(&db, date(2024, 6, 14), closed_input("yesterday")).await?;
        upsert_override(&db, today, closed_input("today")).await?;
        upsert_override(&db, date(2024, 7, 1), closed_input("future")).await?;

        let purged = purge_past_overrides(&db, today).await?;
        assert_eq!(purged, 2);

        let remaining = list_upcoming_overrides(&db, date(2000, 1, 1)).await?;
        let dates: Vec<NaiveDate> = remaining.iter().map(|o| o.date).collect();
        assert_eq!(dates, vec![today, date(2024, 7, 1)]);

        // Nothing left to purge
        assert_eq!(purge_past_overrides(&db, today).await?, 0);
        Ok(())
    }
}
