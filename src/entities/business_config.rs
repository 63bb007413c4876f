//! Business configuration entity - the singleton row holding the weekly schedule.
//!
//! Exactly one live row is expected. The `singleton_key` column carries a UNIQUE
//! constraint so concurrent lazy creation collapses into a single row.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Value stored in `singleton_key` for the one live configuration row
pub const SINGLETON_KEY: &str = "primary";

/// Business configuration database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_config")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Always [`SINGLETON_KEY`]; the unique index enforces a single row
    #[sea_orm(unique)]
    pub singleton_key: String,
    /// Display name of the business
    pub business_name: String,
    /// Global opening time
    pub opening_time: Time,
    /// Global closing time
    pub closing_time: Time,
    /// Message shown to customers while the kitchen is closed
    pub closure_message: String,
    pub monday_open: bool,
    pub tuesday_open: bool,
    pub wednesday_open: bool,
    pub thursday_open: bool,
    pub friday_open: bool,
    pub saturday_open: bool,
    pub sunday_open: bool,
    /// Last day the subscription is paid for
    pub subscription_expires_on: Date,
    /// When this row was last modified
    pub updated_at: DateTime,
}

/// `BusinessConfig` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
