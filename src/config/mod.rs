/// Database configuration and connection management
pub mod database;

/// Application settings loading from config.toml
pub mod settings;

/// Staff (admin) user IDs from environment variables
pub mod staff;
