//! Schedule Discord commands - global hours, weekday flags and date overrides.
//!
//! Every subcommand is restricted to staff listed in `ADMIN_USER_IDS`. Changing
//! the global settings never touches existing date overrides.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{
            business_config, clock,
            date_override::{self, OverrideInput},
            schedule::BusinessConfig,
        },
        errors::{Error, Result},
    };
    use chrono::Local;
    use std::fmt::Write;

    fn describe_config(config: &BusinessConfig) -> Result<String> {
        let mut response = format!("⚙️ **{}**\n\n", config.business_name);
        writeln!(
            &mut response,
            "🕗 Hours: {} - {}",
            clock::format_12h(config.opening),
            clock::format_12h(config.closing)
        )?;

        let days: Vec<String> = config
            .open_days
            .iter()
            .enumerate()
            .map(|(idx, open)| {
                let name = &clock::weekday_name(idx)[..3];
                if *open {
                    format!("✅ {name}")
                } else {
                    format!("❌ {name}")
                }
            })
            .collect();
        writeln!(&mut response, "📆 Days: {}", days.join("  "))?;
        writeln!(&mut response, "💬 Closure message: {}", config.closure_message)?;
        Ok(response)
    }

    /// Parent command for managing the business schedule.
    ///
    /// Groups subcommands for the global hours, the weekly open days and
    /// per-date overrides.
    #[poise::command(
        slash_command,
        check = "crate::bot::handlers::checks::is_admin",
        subcommands(
            "schedule_show",
            "schedule_hours",
            "schedule_days",
            "schedule_day",
            "schedule_clear",
            "schedule_purge"
        )
    )]
    pub async fn schedule(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Schedule management command. Available subcommands:\n\
            `/schedule show` - Show the global schedule\n\
            `/schedule hours` - Set opening and closing times\n\
            `/schedule days` - Choose the open weekdays\n\
            `/schedule day` - Override a single date\n\
            `/schedule clear` - Remove a date override\n\
            `/schedule purge` - Delete past overrides";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Shows the global schedule.
    #[poise::command(
        slash_command,
        rename = "show",
        check = "crate::bot::handlers::checks::is_admin"
    )]
    pub async fn schedule_show(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let today = Local::now().date_naive();
        let config =
            business_config::get_or_create_config(&data.database, &data.settings.defaults, today)
                .await?;

        ctx.say(describe_config(&config)?).await?;
        Ok(())
    }

    /// Sets the global opening and closing times.
    ///
    /// A closing time at or before the opening time means the kitchen stays open
    /// past midnight (e.g. 20:00 - 02:00, or 18:00 - 00:00).
    #[poise::command(
        slash_command,
        rename = "hours",
        check = "crate::bot::handlers::checks::is_admin"
    )]
    pub async fn schedule_hours(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Opening time (e.g. 08:00 or 8:00 am)"] opening: String,
        #[description = "Closing time (e.g. 22:00 or 10:00 pm)"] closing: String,
        #[description = "Message customers see while closed"] message: Option<String>,
    ) -> Result<()> {
        let (opening, closing) = match (clock::parse_time(&opening), clock::parse_time(&closing))
        {
            (Ok(opening), Ok(closing)) => (opening, closing),
            (Err(e), _) | (_, Err(e)) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let data = ctx.data();
        let config = business_config::update_hours(
            &data.database,
            &data.settings.defaults,
            opening,
            closing,
            message,
            Local::now().date_naive(),
        )
        .await?;

        ctx.say(format!(
            "✅ Global schedule updated (overrides kept).\n\n{}",
            describe_config(&config)?
        ))
        .await?;
        Ok(())
    }

    /// Chooses which weekdays the business opens by default.
    #[poise::command(
        slash_command,
        rename = "days",
        check = "crate::bot::handlers::checks::is_admin"
    )]
    pub async fn schedule_days(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Open on Mondays"] monday: bool,
        #[description = "Open on Tuesdays"] tuesday: bool,
        #[description = "Open on Wednesdays"] wednesday: bool,
        #[description = "Open on Thursdays"] thursday: bool,
        #[description = "Open on Fridays"] friday: bool,
        #[description = "Open on Saturdays"] saturday: bool,
        #[description = "Open on Sundays"] sunday: bool,
    ) -> Result<()> {
        let data = ctx.data();
        let config = business_config::update_open_days(
            &data.database,
            &data.settings.defaults,
            [monday, tuesday, wednesday, thursday, friday, saturday, sunday],
            Local::now().date_naive(),
        )
        .await?;

        ctx.say(format!(
            "✅ Open days updated (overrides kept).\n\n{}",
            describe_config(&config)?
        ))
        .await?;
        Ok(())
    }

    /// Overrides the schedule for a single date.
    ///
    /// Leave the times empty to use the global hours. An unreadable time is
    /// ignored and the global value is used for that field.
    #[poise::command(
        slash_command,
        rename = "day",
        check = "crate::bot::handlers::checks::is_admin"
    )]
    pub async fn schedule_day(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Date (YYYY-MM-DD)"]
        #[autocomplete = "autocomplete::autocomplete_date"]
        date: String,
        #[description = "Open on this date?"] open: bool,
        #[description = "Opening time for this date"] opening: Option<String>,
        #[description = "Closing time for this date"] closing: Option<String>,
        #[description = "Reason (shown to customers when closed)"] reason: Option<String>,
    ) -> Result<()> {
        let date = match clock::parse_date(&date) {
            Ok(date) => date,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let input = OverrideInput {
            open,
            opening: clock::parse_optional_time(opening.as_deref()),
            closing: clock::parse_optional_time(closing.as_deref()),
            reason,
        };

        let saved = date_override::upsert_override(&ctx.data().database, date, input).await?;

        let mut response = format!("✅ Schedule for {} updated: ", saved.date.format("%Y-%m-%d"));
        if saved.open {
            let opening = saved
                .opening
                .map_or_else(|| "global opening".to_string(), clock::format_12h);
            let closing = saved
                .closing
                .map_or_else(|| "global closing".to_string(), clock::format_12h);
            write!(&mut response, "🟢 open {opening} - {closing}")?;
        } else {
            response.push_str("🔴 closed");
        }
        if let Some(reason) = &saved.reason {
            write!(&mut response, " ({reason})")?;
        }

        ctx.say(response).await?;
        Ok(())
    }

    /// Removes the override for a date, restoring the weekly schedule.
    #[poise::command(
        slash_command,
        rename = "clear",
        check = "crate::bot::handlers::checks::is_admin"
    )]
    pub async fn schedule_clear(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Date (YYYY-MM-DD)"]
        #[autocomplete = "autocomplete::autocomplete_override_date"]
        date: String,
    ) -> Result<()> {
        let date = match clock::parse_date(&date) {
            Ok(date) => date,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        match date_override::remove_override(&ctx.data().database, date).await {
            Ok(()) => {
                ctx.say(format!("🗑️ Override for {date} removed.")).await?;
            }
            Err(e @ Error::OverrideNotFound { .. }) => {
                ctx.say(format!("⚠️ {e}")).await?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Deletes overrides for dates that have already passed.
    #[poise::command(
        slash_command,
        rename = "purge",
        check = "crate::bot::handlers::checks::is_admin"
    )]
    pub async fn schedule_purge(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let today = Local::now().date_naive();
        let purged = date_override::purge_past_overrides(&ctx.data().database, today).await?;

        ctx.say(format!("🧹 Removed {purged} past override(s).")).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
