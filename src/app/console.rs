//! The signed-in gate around a collection store.

use super::{ShellState, Tab};
use crate::{
    core::{
        dashboard::{DashboardSnapshot, load_dashboard},
        store::CollectionStore,
    },
    errors::Result,
    identity::{IdentityProvider, User, require_user},
    storage::Storage,
};
use chrono::NaiveDate;
use tracing::info;

/// Administrative area: a store, an identity provider and the shell state.
///
/// Every data accessor fails with [`crate::errors::Error::NotSignedIn`]
/// until a user has signed in.
pub struct AdminConsole<S, P> {
    store: CollectionStore<S>,
    identity: P,
    shell: ShellState,
}

impl<S: Storage, P: IdentityProvider> AdminConsole<S, P> {
    /// Creates a signed-out console showing the dashboard.
    pub fn new(store: CollectionStore<S>, identity: P) -> Self {
        Self {
            store,
            identity,
            shell: ShellState::default(),
        }
    }

    /// Signs in and opens the dashboard.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<User> {
        let user = self.identity.sign_in(email, password).await?;
        self.shell = ShellState::default();
        info!(user = user.name_or_email(), "Opened admin console");
        Ok(user)
    }

    /// Signs out and resets navigation.
    pub async fn sign_out(&mut self) -> Result<()> {
        self.identity.sign_out().await?;
        self.shell = ShellState::default();
        Ok(())
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.identity.current_user()
    }

    /// The signed-in user or [`crate::errors::Error::NotSignedIn`].
    pub fn require_user(&self) -> Result<User> {
        require_user(&self.identity)
    }

    /// The collection store, for signed-in users only.
    pub fn store(&self) -> Result<&CollectionStore<S>> {
        self.require_user()?;
        Ok(&self.store)
    }

    /// Switches pages, for signed-in users only.
    pub fn select_tab(&mut self, tab: Tab) -> Result<()> {
        self.require_user()?;
        self.shell.select_tab(tab);
        Ok(())
    }

    /// Dashboard figures as of `today`, for signed-in users only.
    pub async fn dashboard(&self, today: NaiveDate) -> Result<DashboardSnapshot> {
        let store = self.store()?;
        Ok(load_dashboard(store, today).await)
    }

    /// Navigation state.
    #[must_use]
    pub const fn shell(&self) -> &ShellState {
        &self.shell
    }

    /// Mutable navigation state, e.g. for the sidebar toggle.
    pub const fn shell_mut(&mut self) -> &mut ShellState {
        &mut self.shell
    }

    /// The identity provider, e.g. to subscribe to auth changes.
    #[must_use]
    pub const fn identity(&self) -> &P {
        &self.identity
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::members::{add_member, list_members},
        errors::Error,
        identity::LocalIdentityProvider,
        storage::MemoryStorage,
        test_utils::*,
    };

    fn console() -> Result<AdminConsole<MemoryStorage, LocalIdentityProvider>> {
        let identity = LocalIdentityProvider::new([test_account("admin@example.org", "s3cret")?]);
        Ok(AdminConsole::new(setup_memory_store(), identity))
    }

    #[tokio::test]
    async fn test_data_access_requires_sign_in() -> Result<()> {
        let mut console = console()?;
        assert!(matches!(console.store(), Err(Error::NotSignedIn)));
        assert!(matches!(
            console.dashboard(date(2024, 6, 15)).await,
            Err(Error::NotSignedIn)
        ));
        assert!(matches!(console.select_tab(Tab::Members), Err(Error::NotSignedIn)));

        console.sign_in("admin@example.org", "s3cret").await?;
        add_member(console.store()?, sample_member("Ada", "Lovelace")).await?;
        assert_eq!(list_members(console.store()?).await.len(), 1);
        assert_eq!(console.dashboard(date(2024, 6, 15)).await?.total_members, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_sign_in_keeps_gate_closed() -> Result<()> {
        let mut console = console()?;
        let result = console.sign_in("admin@example.org", "wrong").await;
        assert!(matches!(result, Err(Error::Authentication { .. })));
        assert!(console.current_user().is_none());
        assert!(console.store().is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_out_resets_navigation() -> Result<()> {
        let mut console = console()?;
        console.sign_in("admin@example.org", "s3cret").await?;
        console.select_tab(Tab::Reports)?;
        console.shell_mut().toggle_sidebar();

        console.sign_out().await?;
        assert_eq!(*console.shell(), ShellState::default());
        assert!(matches!(console.require_user(), Err(Error::NotSignedIn)));
        Ok(())
    }
}
