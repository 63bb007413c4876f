//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for `KitchenClock`: a storefront
//! status command for customers and schedule management commands for staff.

/// Discord command implementations (storefront, schedule, subscription, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, permission checks)
pub mod handlers;

use crate::{
    config::settings::AppSettings,
    core::store::DatabaseStore,
    errors::{Error, Result},
};
use chrono::NaiveDate;
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
/// This structure holds the database connection, the loaded settings and the
/// staff allowed to run admin commands.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Settings loaded at startup
    pub settings: AppSettings,
    /// Discord user IDs allowed to manage the schedule
    pub admin_ids: HashSet<String>,
}

impl BotData {
    /// Creates a new `BotData` instance.
    #[must_use]
    pub const fn new(
        database: DatabaseConnection,
        settings: AppSettings,
        admin_ids: HashSet<String>,
    ) -> Self {
        Self {
            database,
            settings,
            admin_ids,
        }
    }

    /// Schedule store over this bot's database, seeding with `today` if needed
    #[must_use]
    pub const fn store(&self, today: NaiveDate) -> DatabaseStore<'_> {
        DatabaseStore::new(&self.database, &self.settings.defaults, today)
    }

    /// Whether `user_id` may run admin commands
    #[must_use]
    pub fn is_admin(&self, user_id: &str) -> bool {
        self.admin_ids.contains(user_id)
    }
}

/// Poise context used by every command
pub type Context<'a> = poise::Context<'a, BotData, Error>;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("❌ {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        poise::FrameworkError::CommandCheckFailed { error, ctx, .. } => {
            if let Some(e) = error {
                error!("Check failed in `{}`: {:?}", ctx.command().name, e);
            }
            let reply = poise::CreateReply::default()
                .content(format!("🔒 {}", Error::Unauthorized))
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Starts the Discord client and blocks until it shuts down.
#[instrument(skip_all)]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::ping(),
                commands::help(),
                commands::status(),
                commands::agenda(),
                commands::schedule(),
                commands::subscription(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;

    Ok(())
}
