//! Storage substrate - Where serialized collections live.
//!
//! The substrate is a plain key-to-text map. It knows nothing about records or
//! JSON; [`crate::core::store::CollectionStore`] layers the collection contract
//! on top of any [`Storage`] implementation.

mod database;
mod memory;

pub use database::DatabaseStorage;
pub use memory::MemoryStorage;

use crate::errors::Result;
use async_trait::async_trait;

/// A key-value map of serialized text.
///
/// No size limit or durability is assumed beyond the lifetime of the backend
/// itself. Writes overwrite unconditionally; there is no merge and no locking
/// between writers.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Returns the text stored under `key`, or `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
