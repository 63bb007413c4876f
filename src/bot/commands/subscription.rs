//! Subscription Discord commands - view and renew the service subscription.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{
            business_config, clock,
            schedule::BusinessConfig,
            subscription::{self, SubscriptionStatus},
        },
        errors::{Error, Result},
    };
    use chrono::{Local, NaiveDate};

    fn describe_subscription(config: &BusinessConfig, today: NaiveDate) -> String {
        match subscription::check_subscription(config, today) {
            SubscriptionStatus::Active {
                expires_on,
                days_left,
            } => format!(
                "✅ Subscription active until **{}** ({days_left} day{} left).",
                expires_on.format("%Y-%m-%d"),
                if days_left == 1 { "" } else { "s" }
            ),
            SubscriptionStatus::Expired { expired_on } => format!(
                "⛔ Subscription expired on **{}**. Ordering is suspended.",
                expired_on.format("%Y-%m-%d")
            ),
        }
    }

    /// Parent command for managing the subscription.
    #[poise::command(
        slash_command,
        check = "crate::bot::handlers::checks::is_admin",
        subcommands("subscription_show", "subscription_extend", "subscription_set")
    )]
    pub async fn subscription(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Subscription command. Available subcommands:\n\
            `/subscription show` - Show the current expiry date\n\
            `/subscription extend` - Add days to the subscription\n\
            `/subscription set` - Set the expiry date";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Shows the subscription expiry date.
    #[poise::command(
        slash_command,
        rename = "show",
        check = "crate::bot::handlers::checks::is_admin"
    )]
    pub async fn subscription_show(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let today = Local::now().date_naive();
        let config =
            business_config::get_or_create_config(&data.database, &data.settings.defaults, today)
                .await?;

        ctx.say(describe_subscription(&config, today)).await?;
        Ok(())
    }

    /// Adds days to the subscription, counting from today if it already lapsed.
    #[poise::command(
        slash_command,
        rename = "extend",
        check = "crate::bot::handlers::checks::is_admin"
    )]
    pub async fn subscription_extend(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Number of days to add"]
        #[min = 1]
        #[max = 3660]
        days: u32,
    ) -> Result<()> {
        let data = ctx.data();
        let today = Local::now().date_naive();
        let config = business_config::extend_subscription(
            &data.database,
            &data.settings.defaults,
            days,
            today,
        )
        .await?;

        ctx.say(describe_subscription(&config, today)).await?;
        Ok(())
    }

    /// Sets the subscription expiry date.
    #[poise::command(
        slash_command,
        rename = "set",
        check = "crate::bot::handlers::checks::is_admin"
    )]
    pub async fn subscription_set(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Last paid-up day (YYYY-MM-DD)"] expires_on: String,
    ) -> Result<()> {
        let expires_on = match clock::parse_date(&expires_on) {
            Ok(date) => date,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let data = ctx.data();
        let today = Local::now().date_naive();
        let config = business_config::set_subscription_expiry(
            &data.database,
            &data.settings.defaults,
            expires_on,
            today,
        )
        .await?;

        ctx.say(describe_subscription(&config, today)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
