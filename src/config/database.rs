//! Database configuration module for `OrgDesk`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Every collection is persisted as a row of the single key-value table, so
//! table creation only has to cover the storage entry entity. Creation is
//! idempotent and runs on every start.

use crate::entities::StorageEntry;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use tracing::info;

/// Database used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/orgdesk.sqlite?mode=rwc";

/// Gets the database URL from environment variable or returns default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Creates the parent directory of a file-backed `SQLite` URL.
///
/// In-memory and non-`SQLite` URLs are left alone.
pub fn ensure_sqlite_dir(database_url: &str) -> Result<()> {
    let Some(rest) = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
    else {
        return Ok(());
    };
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
        info!(dir = %parent.display(), "Ensured database directory exists");
    }
    Ok(())
}

/// Establishes a connection to the database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the key-value table from the entity definition if it is missing.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut storage_table = schema.create_table_from_entity(StorageEntry);
    storage_table.if_not_exists();
    db.execute(builder.build(&storage_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::StorageEntryModel;
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<StorageEntryModel> = StorageEntry::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }

    #[test]
    fn test_ensure_sqlite_dir_ignores_memory_and_other_backends() -> Result<()> {
        ensure_sqlite_dir("sqlite::memory:")?;
        ensure_sqlite_dir("postgres://localhost/orgdesk")?;
        Ok(())
    }

    #[test]
    fn test_ensure_sqlite_dir_creates_parent() -> Result<()> {
        let root = std::env::temp_dir().join(format!("orgdesk-test-{}", std::process::id()));
        let url = format!("sqlite://{}/nested/db.sqlite?mode=rwc", root.display());

        ensure_sqlite_dir(&url)?;
        assert!(root.join("nested").is_dir());

        std::fs::remove_dir_all(&root)?;
        Ok(())
    }
}
