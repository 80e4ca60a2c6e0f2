//! `SQLite` storage backend built on `SeaORM`.
//!
//! Each key is one row of the `storage_entries` table. Overwrites follow the
//! same find-then-update-or-insert shape as any other keyed row.

use super::Storage;
use crate::{
    entities::{StorageEntry, storage_entry},
    errors::Result,
};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use tracing::{debug, instrument};

/// Durable [`Storage`] backed by a `SeaORM` connection.
#[derive(Debug, Clone)]
pub struct DatabaseStorage {
    db: DatabaseConnection,
}

impl DatabaseStorage {
    /// Wraps an open connection. The `storage_entries` table must already exist
    /// (see [`crate::config::database::create_tables`]).
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entry = StorageEntry::find_by_id(key.to_string())
            .one(&self.db)
            .await?;
        debug!(found = entry.is_some(), "Read storage entry");
        Ok(entry.map(|e| e.value))
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().naive_utc();

        let existing = StorageEntry::find_by_id(key.to_string())
            .one(&self.db)
            .await?;

        if let Some(entry) = existing {
            let mut active_model: storage_entry::ActiveModel = entry.into();
            active_model.value = Set(value.to_string());
            active_model.updated_at = Set(now);
            active_model.update(&self.db).await?;
        } else {
            let new_entry = storage_entry::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value.to_string()),
                updated_at: Set(now),
            };
            StorageEntry::insert(new_entry).exec(&self.db).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_get_absent_key_returns_none() -> Result<()> {
        let storage = DatabaseStorage::new(setup_test_db().await?);
        assert_eq!(storage.get("org.members").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_then_get() -> Result<()> {
        let storage = DatabaseStorage::new(setup_test_db().await?);
        storage.set("org.events", "[]").await?;
        assert_eq!(storage.get("org.events").await?.as_deref(), Some("[]"));
        Ok(())
    }

    #[tokio::test]
    async fn test_set_updates_existing_row() -> Result<()> {
        let db = setup_test_db().await?;
        let storage = DatabaseStorage::new(db.clone());

        storage.set("org.settings", "{\"a\":1}").await?;
        storage.set("org.settings", "{\"a\":2}").await?;

        assert_eq!(
            storage.get("org.settings").await?.as_deref(),
            Some("{\"a\":2}")
        );

        // Verify only one row exists for the key
        let count = StorageEntry::find()
            .filter(storage_entry::Column::Key.eq("org.settings"))
            .count(&db)
            .await?;
        assert_eq!(count, 1);
        Ok(())
    }
}
