/// Application configuration loading from config.toml
pub mod app;

/// Database configuration and connection management
pub mod database;

/// Administrator account configuration from environment variables
pub mod users;
