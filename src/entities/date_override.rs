//! Date override entity - one-off schedule changes for a single calendar date.
//!
//! Holidays, special openings and shortened days live here. The `date` column is
//! unique, so a date has at most one override.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Date override database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "date_overrides")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The calendar date this override applies to
    #[sea_orm(unique)]
    pub date: Date,
    /// `true` forces the day open, `false` closes it outright
    pub is_open: bool,
    /// Replaces the global opening time when set
    pub opening_time: Option<Time>,
    /// Replaces the global closing time when set
    pub closing_time: Option<Time>,
    /// Why the day differs (e.g. "Holiday")
    pub reason: Option<String>,
}

/// `DateOverride` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
