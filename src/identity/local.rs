//! Local identity provider backed by configured accounts.
//!
//! Passwords are verified against argon2 PHC strings; plaintext passwords are
//! never stored or configured.

use super::{IdentityProvider, User};
use crate::errors::{Error, Result};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tokio::sync::watch;
use tracing::{info, warn};

const INVALID_CREDENTIALS: &str = "Invalid email or password.";
const MISSING_CREDENTIALS: &str = "Email and password are required.";

/// Well-formed hash with default argon2 parameters that no password matches.
/// Verified against when the email is unknown so both rejections cost the same.
const UNKNOWN_ACCOUNT_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// An account allowed into the administrative area.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Account {
    /// Sign-in email, matched case-insensitively
    pub email: String,
    /// Argon2 PHC string, e.g. `$argon2id$v=19$...`
    pub password_hash: String,
    /// Name shown after sign-in
    #[serde(default)]
    pub display_name: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Hashes a password into an argon2 PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Config {
            message: format!("Failed to hash password: {e}"),
        })?;
    Ok(hash.to_string())
}

/// Whether `password` matches the PHC string `hash`. Malformed hashes never match.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// [`IdentityProvider`] that checks a fixed set of accounts in-process.
#[derive(Debug)]
pub struct LocalIdentityProvider {
    accounts: HashMap<String, Account>,
    state: watch::Sender<Option<User>>,
}

impl LocalIdentityProvider {
    /// Creates a provider for `accounts`. Later duplicates of an email replace
    /// earlier ones.
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|a| (normalize_email(&a.email), a))
            .collect();
        let (state, _) = watch::channel(None);
        Self { accounts, state }
    }

    /// Number of distinct accounts.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn reject(email: &str, message: &str) -> Error {
        warn!(%email, reason = message, "Sign-in rejected");
        Error::Authentication {
            message: message.to_string(),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let key = normalize_email(email);
        if key.is_empty() || password.is_empty() {
            return Err(Self::reject(&key, MISSING_CREDENTIALS));
        }

        let account = self.accounts.get(&key);
        let hash = account.map_or(UNKNOWN_ACCOUNT_HASH, |a| a.password_hash.as_str());
        let verified = verify_password(password, hash);
        let account = match account {
            Some(account) if verified => account,
            _ => return Err(Self::reject(&key, INVALID_CREDENTIALS)),
        };

        let user = User {
            display_name: account.display_name.clone(),
            email: account.email.clone(),
            photo_url: account.photo_url.clone(),
        };
        self.state.send_replace(Some(user.clone()));
        info!(email = %user.email, "Signed in");
        Ok(user)
    }

    async fn sign_out(&self) -> Result<()> {
        if let Some(previous) = self.state.send_replace(None) {
            info!(email = %previous.email, "Signed out");
        }
        Ok(())
    }

    fn current_user(&self) -> Option<User> {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.state.subscribe()
    }
}
