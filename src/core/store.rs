//! Local collection store - The load / mutate / save cycle shared by every feature area.
//!
//! A collection is a named JSON array kept under one storage key. Reads fail
//! soft: an absent key, an unreadable backend or a corrupt value all load as an
//! empty collection, and the next save overwrites whatever was there. Writes
//! always replace the whole collection; there are no partial updates.
//!
//! Nothing here coordinates concurrent writers. Two handles that load, append
//! and save at the same time can both assign the same id, and the later save
//! wins.

use crate::{errors::Result, storage::Storage};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};

/// A record that can live in a collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Identifier, unique within the record's collection.
    fn id(&self) -> i64;
}

/// Returns the id for the next record: `1` for an empty collection, otherwise
/// one more than the largest existing id. Ids freed by deletions are not reused
/// unless they were the maximum.
#[must_use]
pub fn next_id<T: Record>(records: &[T]) -> i64 {
    records.iter().map(Record::id).max().map_or(1, |max| max + 1)
}

/// Typed access to named collections on top of a [`Storage`] backend.
///
/// Every collection `name` is stored under the key `"{namespace}.{name}"`, so
/// several datasets can share one backend.
#[derive(Debug)]
pub struct CollectionStore<S> {
    storage: S,
    namespace: String,
}

impl<S: Storage> CollectionStore<S> {
    /// Creates a store over `storage` using `namespace` as the key prefix.
    /// An empty namespace stores collections under their bare names.
    pub fn new(storage: S, namespace: impl Into<String>) -> Self {
        Self {
            storage,
            namespace: namespace.into(),
        }
    }

    /// The key prefix.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Storage key for a collection.
    #[must_use]
    pub fn key(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.namespace)
        }
    }

    /// Loads a collection, or an empty one if it is absent or unreadable.
    pub async fn load<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        self.load_value::<Vec<T>>(name).await.unwrap_or_default()
    }

    /// Loads a single serialized value (such as a settings bundle).
    ///
    /// Returns `None` when the key is absent, the backend read fails, or the
    /// stored text does not parse as `T`. Failures are logged, never returned.
    #[instrument(skip(self))]
    pub async fn load_value<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let key = self.key(name);
        let raw = match self.storage.get(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(%key, "Key absent, loading as empty");
                return None;
            }
            Err(e) => {
                warn!(%key, error = %e, "Storage read failed, loading as empty");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%key, error = %e, "Stored value is corrupt, loading as empty");
                None
            }
        }
    }

    /// Whether anything is stored for `name`, parseable or not.
    pub async fn contains(&self, name: &str) -> bool {
        let key = self.key(name);
        match self.storage.get(&key).await {
            Ok(found) => found.is_some(),
            Err(e) => {
                warn!(%key, error = %e, "Storage read failed, treating key as absent");
                false
            }
        }
    }

    /// Length in bytes of the stored text for `name`, `0` when absent.
    pub async fn stored_size(&self, name: &str) -> u64 {
        let key = self.key(name);
        match self.storage.get(&key).await {
            Ok(Some(raw)) => raw.len() as u64,
            Ok(None) => 0,
            Err(e) => {
                warn!(%key, error = %e, "Storage read failed, reporting size 0");
                0
            }
        }
    }

    /// Replaces the stored collection with `records`.
    ///
    /// Fails with [`crate::errors::Error::Serialization`] and writes nothing
    /// when the serialized text would not load back, e.g. a NaN amount that
    /// serializes as `null`.
    pub async fn save<T>(&self, name: &str, records: &[T]) -> Result<()>
    where
        T: Serialize + DeserializeOwned + Sync,
    {
        let raw = serde_json::to_string(records)?;
        let _: Vec<T> = serde_json::from_str(&raw)?;
        self.write(name, &raw).await
    }

    /// Replaces the stored value for `name` with the serialization of `value`.
    /// Refuses values that would not load back, like [`Self::save`].
    pub async fn save_value<T>(&self, name: &str, value: &T) -> Result<()>
    where
        T: Serialize + DeserializeOwned + Sync,
    {
        let raw = serde_json::to_string(value)?;
        let _: T = serde_json::from_str(&raw)?;
        self.write(name, &raw).await
    }

    #[instrument(skip(self, raw), fields(bytes = raw.len()))]
    async fn write(&self, name: &str, raw: &str) -> Result<()> {
        let key = self.key(name);
        self.storage.set(&key, raw).await?;
        debug!(%key, "Saved collection");
        Ok(())
    }

    /// Appends `record` to the end of the collection and saves it.
    pub async fn append<T: Record>(&self, name: &str, record: T) -> Result<()> {
        let mut records: Vec<T> = self.load(name).await;
        records.push(record);
        self.save(name, &records).await
    }

    /// Builds a record with the next free id, appends it and returns it.
    pub async fn insert_new<T, F>(&self, name: &str, build: F) -> Result<T>
    where
        T: Record,
        F: FnOnce(i64) -> T + Send,
    {
        let mut records: Vec<T> = self.load(name).await;
        let record = build(next_id(&records));
        records.push(record.clone());
        self.save(name, &records).await?;
        debug!(collection = name, id = record.id(), "Inserted record");
        Ok(record)
    }

    /// Removes every record with `id`, keeping the rest in order.
    ///
    /// The collection is re-saved even when nothing matched, so a corrupt value
    /// is replaced by an empty array. Returns whether a record was removed.
    pub async fn remove_by_id<T: Record>(&self, name: &str, id: i64) -> Result<bool> {
        let records: Vec<T> = self.load(name).await;
        let before = records.len();
        let remaining: Vec<T> = records.into_iter().filter(|r| r.id() != id).collect();
        let removed = remaining.len() != before;
        self.save(name, &remaining).await?;
        debug!(collection = name, id, removed, "Removed record");
        Ok(removed)
    }
}
