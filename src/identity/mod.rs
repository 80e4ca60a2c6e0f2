//! Identity collaborator - Sign-in, sign-out and the current user.
//!
//! The administrative area is gated on "signed in or not"; there are no roles.
//! Providers publish auth-state changes on a [`watch`] channel so a shell can
//! react to sign-in and sign-out without polling.

mod local;

pub use local::{Account, LocalIdentityProvider, hash_password, verify_password};

use crate::errors::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::watch;

/// The signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Name to greet the user with, if the provider knows one
    pub display_name: Option<String>,
    /// Sign-in email
    pub email: String,
    /// Avatar URL
    pub photo_url: Option<String>,
}

impl User {
    /// Display name, falling back to the email address.
    #[must_use]
    pub fn name_or_email(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// An external authority that signs users in and out.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Attempts to sign in. On failure the error is
    /// [`Error::Authentication`] carrying a message fit to show the user.
    async fn sign_in(&self, email: &str, password: &str) -> Result<User>;

    /// Signs the current user out. Signing out while signed out is a no-op.
    async fn sign_out(&self) -> Result<()>;

    /// The signed-in user, if any.
    fn current_user(&self) -> Option<User>;

    /// Receiver notified on every auth-state change.
    fn subscribe(&self) -> watch::Receiver<Option<User>>;
}

/// Returns the signed-in user or [`Error::NotSignedIn`].
pub fn require_user<P: IdentityProvider + ?Sized>(provider: &P) -> Result<User> {
    provider.current_user().ok_or(Error::NotSignedIn)
}
