//! Storefront Discord commands - current ordering status and the upcoming agenda.
//!
//! These are the commands customers use. They read the schedule but never change
//! it (apart from the lazy creation of the configuration on first use).

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{
            agenda,
            gate::{self, OrderingGate},
        },
        errors::{Error, Result},
    };
    use chrono::Local;

    /// Tells whether the kitchen is taking orders right now.
    ///
    /// Checks the subscription first, then today's hours (weekly schedule merged
    /// with any override for today's date).
    #[poise::command(slash_command, prefix_command)]
    pub async fn status(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let now = Local::now().naive_local();

        let response = match gate::check_ordering(&data.store(now.date()), now).await? {
            OrderingGate::Accepting => "🟢 **We're open!** Orders are being accepted.".to_string(),
            OrderingGate::Closed { message } => format!("🔴 **Closed**\n{message}"),
            OrderingGate::Suspended { message, .. } => format!("⛔ {message}"),
        };

        ctx.say(response).await?;
        Ok(())
    }

    /// Shows opening hours for the coming days, overrides included.
    #[poise::command(slash_command, prefix_command)]
    pub async fn agenda(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "How many days to show (default 7, max 31)"]
        #[min = 1]
        #[max = 31]
        days: Option<u32>,
    ) -> Result<()> {
        let data = ctx.data();
        let today = Local::now().date_naive();
        let days = days.unwrap_or(data.settings.agenda_days);

        let agenda_days =
            agenda::load_agenda(&data.database, &data.settings.defaults, today, days).await?;
        let body = agenda::format_agenda(&agenda_days)?;

        ctx.say(format!("📅 **Upcoming schedule**\n\n{body}")).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
