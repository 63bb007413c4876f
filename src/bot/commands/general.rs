//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't require database operations.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**KitchenClock Help**\n\
        Here is a summary of all available commands.\n\n\
        **Everyone**\n\
        • `/status` - Is the kitchen taking orders right now?\n\
        • `/agenda [days]` - Opening hours for the coming days.\n\n\
        **Staff**\n\
        • `/schedule show` - Shows the weekly schedule.\n\
        • `/schedule hours <opening> <closing> [message]` - Sets the global hours.\n\
        • `/schedule days <mon> ... <sun>` - Chooses which weekdays are open.\n\
        • `/schedule day <date> <open> [opening] [closing] [reason]` - Overrides a single date.\n\
        • `/schedule clear <date>` - Removes a date override.\n\
        • `/schedule purge` - Deletes overrides for past dates.\n\
        • `/subscription show|extend|set` - Manages the subscription.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
