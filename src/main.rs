use kitchen_clock::{
    bot::{self, BotData},
    config::{database, settings, staff},
    core::{business_config, date_override},
    errors::{Error, Result},
};
use chrono::Local;
use dotenvy::dotenv;
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load application settings
    let app_settings = settings::load_default_settings()
        .inspect_err(|e| error!("Critical error loading settings: {}", e))?;
    info!("Successfully processed application settings.");

    // 4. Connect and make sure the tables exist
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Ensure the configuration singleton exists and drop stale overrides
    let today = Local::now().date_naive();
    let config = business_config::get_or_create_config(&db, &app_settings.defaults, today).await?;
    info!(
        "Serving '{}' ({} - {})",
        config.business_name,
        config.opening.format("%H:%M"),
        config.closing.format("%H:%M")
    );
    date_override::purge_past_overrides(&db, today).await?;

    let admin_ids = staff::get_admin_ids();
    if admin_ids.is_empty() {
        warn!("{} is not set; nobody can manage the schedule", staff::ADMIN_USER_IDS_VAR);
    }

    // 6. Run the bot
    // DISCORD_BOT_TOKEN is loaded here, directly before use, not stored in settings
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(db, app_settings, admin_ids)).await
}
