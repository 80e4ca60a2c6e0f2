//! Application configuration loading from config.toml
//!
//! The file names the storage namespace, the groups used to seed an empty
//! group directory, and the accounts allowed to sign in. Every section is
//! optional.

use crate::{
    entities::NewGroup,
    errors::{Error, Result},
    identity::Account,
};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration file read when `ORGDESK_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Groups written to storage when no group directory exists yet
    #[serde(default)]
    pub groups: Vec<NewGroup>,
    /// Accounts that may sign in
    #[serde(default)]
    pub accounts: Vec<Account>,
}

/// Settings for the key-value store
#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    /// Prefix of every storage key, e.g. `org` gives `org.members`
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

fn default_namespace() -> String {
    "org".to_string()
}

/// Loads application configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A group or account entry has the wrong shape
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;

    let config: AppConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.display()),
    })?;
    info!(
        path = %path.display(),
        namespace = %config.storage.namespace,
        groups = config.groups.len(),
        accounts = config.accounts.len(),
        "Loaded configuration"
    );
    Ok(config)
}

/// Loads configuration from `ORGDESK_CONFIG`, or ./config.toml when unset
pub fn load_default_config() -> Result<AppConfig> {
    let path = std::env::var("ORGDESK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config(path)
}
