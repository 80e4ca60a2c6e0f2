//! Administrator account configuration from environment variables.
//!
//! Accounts normally live in config.toml. A single administrator can also be
//! supplied through the environment (or the `.env` file) so that a password
//! hash never has to be committed alongside the configuration.

use crate::{config::app::AppConfig, identity::Account};

/// Reads the administrator account from `ORGDESK_ADMIN_EMAIL`,
/// `ORGDESK_ADMIN_PASSWORD_HASH` and the optional `ORGDESK_ADMIN_NAME`.
///
/// Returns `None` unless both the email and the hash are set and non-empty.
#[must_use]
pub fn admin_account_from_env() -> Option<Account> {
    let email = std::env::var("ORGDESK_ADMIN_EMAIL").ok()?;
    let password_hash = std::env::var("ORGDESK_ADMIN_PASSWORD_HASH").ok()?;
    admin_account(email, password_hash, std::env::var("ORGDESK_ADMIN_NAME").ok())
}

fn admin_account(email: String, password_hash: String, name: Option<String>) -> Option<Account> {
    if email.trim().is_empty() || password_hash.trim().is_empty() {
        return None;
    }
    Some(Account {
        email: email.trim().to_string(),
        password_hash: password_hash.trim().to_string(),
        display_name: name.filter(|n| !n.trim().is_empty()),
        photo_url: None,
    })
}

/// Accounts from config.toml followed by the environment administrator, if any.
#[must_use]
pub fn configured_accounts(config: &AppConfig) -> Vec<Account> {
    config
        .accounts
        .iter()
        .cloned()
        .chain(admin_account_from_env())
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_admin_account_requires_email_and_hash() {
        assert!(admin_account(String::new(), "$argon2id$x".to_string(), None).is_none());
        assert!(admin_account("a@example.org".to_string(), "  ".to_string(), None).is_none());
    }

    #[test]
    fn test_admin_account_trims_and_drops_blank_name() {
        let account = admin_account(
            " a@example.org ".to_string(),
            "$argon2id$x".to_string(),
            Some(" ".to_string()),
        )
        .unwrap();
        assert_eq!(account.email, "a@example.org");
        assert!(account.display_name.is_none());
    }

    #[test]
    fn test_configured_accounts_keeps_file_accounts_first() {
        let config = AppConfig {
            accounts: vec![Account {
                email: "file@example.org".to_string(),
                password_hash: "$argon2id$x".to_string(),
                display_name: None,
                photo_url: None,
            }],
            ..AppConfig::default()
        };
        let accounts = configured_accounts(&config);
        assert_eq!(accounts[0].email, "file@example.org");
    }
}
