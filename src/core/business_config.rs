//! Business configuration logic - lazy singleton creation and admin updates.
//!
//! The configuration row is created on first access. Creation is an
//! `INSERT .. ON CONFLICT DO NOTHING` on the unique `singleton_key` followed by a
//! re-read, so two requests racing on an empty table still end up sharing one row.
//! Admin updates never touch the date overrides.

use crate::{
    config::settings::BusinessDefaults,
    core::schedule::BusinessConfig,
    entities::{BusinessConfig as BusinessConfigEntity, business_config},
    errors::{Error, Result},
};
use chrono::{Days, Local, NaiveDate, NaiveTime};
use sea_orm::{Set, prelude::*, sea_query::OnConflict};
use tracing::{debug, info};

/// Finds the configuration row without creating it.
pub async fn find_config_model<C>(db: &C) -> Result<Option<business_config::Model>>
where
    C: ConnectionTrait,
{
    BusinessConfigEntity::find()
        .filter(business_config::Column::SingletonKey.eq(business_config::SINGLETON_KEY))
        .one(db)
        .await
        .map_err(Into::into)
}

/// `date` moved `days` forward, or an error past the end of the calendar.
fn days_after(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| Error::InvalidDate {
            value: format!("{date} + {days} days"),
        })
}

/// Loads the configuration row, inserting one seeded from `defaults` if none exists.
///
/// `today` is the creation date used to compute the initial subscription expiry.
async fn load_or_create_model<C>(
    db: &C,
    defaults: &BusinessDefaults,
    today: NaiveDate,
) -> Result<business_config::Model>
where
    C: ConnectionTrait,
{
    if let Some(model) = find_config_model(db).await? {
        return Ok(model);
    }

    debug!("No business configuration found, creating one from defaults");
    let trial_days = u64::try_from(defaults.trial_days).map_err(|_| Error::Config {
        message: format!("trial_days must not be negative (got {})", defaults.trial_days),
    })?;
    let seed = business_config::ActiveModel {
        singleton_key: Set(business_config::SINGLETON_KEY.to_string()),
        business_name: Set(defaults.business_name.clone()),
        opening_time: Set(defaults.opening_time()?),
        closing_time: Set(defaults.closing_time()?),
        closure_message: Set(defaults.closure_message.clone()),
        monday_open: Set(true),
        tuesday_open: Set(true),
        wednesday_open: Set(true),
        thursday_open: Set(true),
        friday_open: Set(true),
        saturday_open: Set(true),
        sunday_open: Set(true),
        subscription_expires_on: Set(days_after(today, trial_days)?),
        updated_at: Set(Local::now().naive_local()),
        ..Default::default()
    };

    // A concurrent creator may win the race; the unique key turns our insert into a no-op.
    let inserted = BusinessConfigEntity::insert(seed)
        .on_conflict(
            OnConflict::column(business_config::Column::SingletonKey)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    if inserted > 0 {
        info!("Created business configuration for '{}'", defaults.business_name);
    }

    find_config_model(db).await?.ok_or_else(|| {
        DbErr::RecordNotFound("business configuration missing after insert".to_string()).into()
    })
}

/// Returns the singleton configuration, creating it with defaults if absent.
pub async fn get_or_create_config<C>(
    db: &C,
    defaults: &BusinessDefaults,
    today: NaiveDate,
) -> Result<BusinessConfig>
where
    C: ConnectionTrait,
{
    load_or_create_model(db, defaults, today)
        .await
        .map(BusinessConfig::from)
}

/// Applies `change` to the configuration row and saves it.
///
/// `today` only matters when the row does not exist yet and has to be seeded.
async fn update_config<C, F>(
    db: &C,
    defaults: &BusinessDefaults,
    today: NaiveDate,
    change: F,
) -> Result<BusinessConfig>
where
    C: ConnectionTrait,
    F: FnOnce(&mut business_config::ActiveModel),
{
    let model = load_or_create_model(db, defaults, today).await?;

    let mut active_model: business_config::ActiveModel = model.into();
    change(&mut active_model);
    active_model.updated_at = Set(Local::now().naive_local());

    let updated = active_model.update(db).await?;
    Ok(updated.into())
}

/// Sets the global opening and closing times, and optionally the closure message.
pub async fn update_hours<C>(
    db: &C,
    defaults: &BusinessDefaults,
    opening: NaiveTime,
    closing: NaiveTime,
    closure_message: Option<String>,
    today: NaiveDate,
) -> Result<BusinessConfig>
where
    C: ConnectionTrait,
{
    let message = closure_message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    let config = update_config(db, defaults, today, |am| {
        am.opening_time = Set(opening);
        am.closing_time = Set(closing);
        if let Some(message) = message {
            am.closure_message = Set(message);
        }
    })
    .await?;

    info!(
        "Global hours set to {} - {}",
        config.opening.format("%H:%M"),
        config.closing.format("%H:%M")
    );
    Ok(config)
}

/// Replaces the seven weekday flags (index 0 = Monday).
pub async fn update_open_days<C>(
    db: &C,
    defaults: &BusinessDefaults,
    open_days: [bool; 7],
    today: NaiveDate,
) -> Result<BusinessConfig>
where
    C: ConnectionTrait,
{
    let [mon, tue, wed, thu, fri, sat, sun] = open_days;
    let config = update_config(db, defaults, today, |am| {
        am.monday_open = Set(mon);
        am.tuesday_open = Set(tue);
        am.wednesday_open = Set(wed);
        am.thursday_open = Set(thu);
        am.friday_open = Set(fri);
        am.saturday_open = Set(sat);
        am.sunday_open = Set(sun);
    })
    .await?;

    info!("Weekly open days set to {:?}", config.open_days);
    Ok(config)
}

/// Sets the subscription expiry date outright.
pub async fn set_subscription_expiry<C>(
    db: &C,
    defaults: &BusinessDefaults,
    expires_on: NaiveDate,
    today: NaiveDate,
) -> Result<BusinessConfig>
where
    C: ConnectionTrait,
{
    let config = update_config(db, defaults, today, |am| {
        am.subscription_expires_on = Set(expires_on);
    })
    .await?;

    info!("Subscription expiry set to {expires_on}");
    Ok(config)
}

/// Extends the subscription by `days`, counting from today if it already lapsed.
pub async fn extend_subscription<C>(
    db: &C,
    defaults: &BusinessDefaults,
    days: u32,
    today: NaiveDate,
) -> Result<BusinessConfig>
where
    C: ConnectionTrait,
{
    let current = load_or_create_model(db, defaults, today).await?;
    let base = current.subscription_expires_on.max(today);
    let expires_on = days_after(base, u64::from(days))?;
    set_subscription_expiry(db, defaults, expires_on, today).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{date, setup_test_db, time};

    #[tokio::test]
    async fn test_get_or_create_seeds_defaults() -> Result<()> {
        let db = setup_test_db().await?;
        let defaults = BusinessDefaults::default();

        let config = get_or_create_config(&db, &defaults, date(2024, 1, 1)).await?;
        assert_eq!(config.business_name, "FoodBack");
        assert_eq!(config.opening, time(8, 0));
        assert_eq!(config.closing, time(22, 0));
        assert_eq!(config.open_days, [true; 7]);
        assert_eq!(config.subscription_expires_on, date(2024, 1, 31));
        assert!(config.closure_message.starts_with("Ups, la cocina descansa."));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let defaults = BusinessDefaults::default();

        let first = get_or_create_config(&db, &defaults, date(2024, 1, 1)).await?;
        // A later call must not reseed, even with a different creation date
        let second = get_or_create_config(&db, &defaults, date(2024, 6, 1)).await?;
        assert_eq!(first, second);

        let count = BusinessConfigEntity::find().count(&db).await?;
        assert_eq!(count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_singleton_insert_is_ignored() -> Result<()> {
        let db = setup_test_db().await?;
        let defaults = BusinessDefaults::default();
        get_or_create_config(&db, &defaults, date(2024, 1, 1)).await?;

        // Simulate the losing side of a creation race
        let rival = business_config::ActiveModel {
            singleton_key: Set(business_config::SINGLETON_KEY.to_string()),
            business_name: Set("Rival".to_string()),
            opening_time: Set(time(9, 0)),
            closing_time: Set(time(17, 0)),
            closure_message: Set("Rival closed".to_string()),
            monday_open: Set(false),
            tuesday_open: Set(false),
            wednesday_open: Set(false),
            thursday_open: Set(false),
            friday_open: Set(false),
            saturday_open: Set(false),
            sunday_open: Set(false),
            subscription_expires_on: Set(date(2030, 1, 1)),
            updated_at: Set(date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap()),
            ..Default::default()
        };
        BusinessConfigEntity::insert(rival)
            .on_conflict(
                OnConflict::column(business_config::Column::SingletonKey)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&db)
            .await?;

        let config = get_or_create_config(&db, &defaults, date(2024, 1, 1)).await?;
        assert_eq!(config.business_name, "FoodBack");
        assert_eq!(BusinessConfigEntity::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_uses_custom_defaults() -> Result<()> {
        let db = setup_test_db().await?;
        let defaults = BusinessDefaults {
            business_name: "Night Owl".to_string(),
            opening: "20:00".to_string(),
            closing: "02:00".to_string(),
            closure_message: "Sleeping".to_string(),
            trial_days: 0,
        };

        let config = get_or_create_config(&db, &defaults, date(2024, 3, 10)).await?;
        assert_eq!(config.business_name, "Night Owl");
        assert_eq!(config.opening, time(20, 0));
        assert_eq!(config.closing, time(2, 0));
        assert_eq!(config.subscription_expires_on, date(2024, 3, 10));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_hours_keeps_message_when_not_given() -> Result<()> {
        let db = setup_test_db().await?;
        let defaults = BusinessDefaults::default();
        let before = get_or_create_config(&db, &defaults, date(2024, 1, 1)).await?;

        let today = date(2024, 1, 1);
        let config = update_hours(&db, &defaults, time(10, 0), time(23, 0), None, today).await?;
        assert_eq!(config.opening, time(10, 0));
        assert_eq!(config.closing, time(23, 0));
        assert_eq!(config.closure_message, before.closure_message);

        let config = update_hours(
            &db,
            &defaults,
            time(10, 0),
            time(23, 0),
            Some("  Back soon  ".to_string()),
            today,
        )
        .await?;
        assert_eq!(config.closure_message, "Back soon");

        // Blank message is ignored
        let blank = Some("   ".to_string());
        let config = update_hours(&db, &defaults, time(10, 0), time(23, 0), blank, today).await?;
        assert_eq!(config.closure_message, "Back soon");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_open_days() -> Result<()> {
        let db = setup_test_db().await?;
        let defaults = BusinessDefaults::default();

        let days = [true, true, true, true, true, false, false];
        // No row yet: the update seeds it from the supplied date, not the wall clock
        let config = update_open_days(&db, &defaults, days, date(2030, 5, 1)).await?;
        assert_eq!(config.open_days, days);
        assert_eq!(config.subscription_expires_on, date(2030, 5, 31));

        let reloaded = find_config_model(&db).await?.unwrap();
        assert!(!reloaded.saturday_open);
        assert!(!reloaded.sunday_open);
        assert!(reloaded.friday_open);

        Ok(())
    }

    #[tokio::test]
    async fn test_extend_subscription_from_expiry_or_today() -> Result<()> {
        let db = setup_test_db().await?;
        let defaults = BusinessDefaults::default();
        get_or_create_config(&db, &defaults, date(2024, 1, 1)).await?;
        set_subscription_expiry(&db, &defaults, date(2024, 1, 31), date(2024, 1, 1)).await?;

        // Still active: extend from the current expiry
        let config = extend_subscription(&db, &defaults, 30, date(2024, 1, 15)).await?;
        assert_eq!(config.subscription_expires_on, date(2024, 3, 1));

        // Lapsed: extend from today
        let config = extend_subscription(&db, &defaults, 10, date(2024, 6, 1)).await?;
        assert_eq!(config.subscription_expires_on, date(2024, 6, 11));

        Ok(())
    }

    #[tokio::test]
    async fn test_extend_past_calendar_end_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let defaults = BusinessDefaults::default();
        let today = date(2024, 1, 1);
        set_subscription_expiry(&db, &defaults, date(9999, 12, 1), today).await?;

        // u32::MAX days lands far past the last representable date
        let result = extend_subscription(&db, &defaults, u32::MAX, today).await;
        assert!(matches!(result, Err(Error::InvalidDate { .. })));

        // The stored expiry is left untouched
        let config = get_or_create_config(&db, &defaults, today).await?;
        assert_eq!(config.subscription_expires_on, date(9999, 12, 1));

        // A small extension near the end of the calendar still works
        let config = extend_subscription(&db, &defaults, 30, today).await?;
        assert_eq!(config.subscription_expires_on, date(9999, 12, 31));

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_with_out_of_range_trial_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let defaults = BusinessDefaults {
            trial_days: 100_000_000,
            ..BusinessDefaults::default()
        };

        let result = get_or_create_config(&db, &defaults, date(2024, 1, 1)).await;
        assert!(matches!(result, Err(Error::InvalidDate { .. })));
        assert!(find_config_model(&db).await?.is_none());

        let negative = BusinessDefaults {
            trial_days: -1,
            ..BusinessDefaults::default()
        };
        let result = get_or_create_config(&db, &negative, date(2024, 1, 1)).await;
        assert!(matches!(result, Err(Error::Config { .. })));

        Ok(())
    }
}
