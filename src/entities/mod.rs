//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod business_config;
pub mod date_override;

// Re-export specific types to avoid conflicts
pub use business_config::{
    Column as BusinessConfigColumn, Entity as BusinessConfig, Model as BusinessConfigModel,
};
pub use date_override::{
    Column as DateOverrideColumn, Entity as DateOverride, Model as DateOverrideModel,
};
