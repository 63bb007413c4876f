//! Unified error type for `KitchenClock`.
//!
//! Every fallible function in the crate returns [`Result`], so storage errors,
//! bad admin input and Discord framework failures all flow through `?`.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by the library and the bot.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// A time-of-day string could not be parsed
    #[error("Invalid time '{value}': expected HH:MM (24-hour) or HH:MM am/pm")]
    InvalidTime {
        /// The rejected input
        value: String,
    },

    /// A calendar date string could not be parsed
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input
        value: String,
    },

    /// No override exists for the requested date
    #[error("No schedule override found for {date}")]
    OverrideNotFound {
        /// Date that was looked up
        date: NaiveDate,
    },

    /// The caller is not allowed to change the schedule
    #[error("You are not allowed to manage the schedule")]
    Unauthorized,

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable missing or not unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Writing into a response buffer failed
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
