//! Database configuration module for `KitchenClock`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the unique constraints on the configuration singleton key and the override date
//! come straight from the `#[sea_orm(unique)]` attributes.

use crate::entities::{BusinessConfig, DateOverride};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/kitchen_clock.sqlite?mode=rwc";

/// Gets the database URL from environment variable or returns default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by `DATABASE_URL`.
///
/// Falls back to a local `SQLite` file if no environment variable is set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!("Connecting to database at {database_url}");

    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the `business_config` and `date_overrides` tables if they do not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut config_table = schema.create_table_from_entity(BusinessConfig);
    let mut override_table = schema.create_table_from_entity(DateOverride);

    config_table.if_not_exists();
    override_table.if_not_exists();

    db.execute(builder.build(&config_table)).await?;
    db.execute(builder.build(&override_table)).await?;

    info!("Database tables ensured (business_config, date_overrides)");
    Ok(())
}
