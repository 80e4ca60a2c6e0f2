//! Storage entry entity - Backs the key-value storage substrate in `SQLite`.
//! Each row holds one serialized collection or settings bundle under its
//! namespaced key, e.g. `"org.members"`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Storage entry database model - one key, one serialized value
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "storage_entries")]
pub struct Model {
    /// Namespaced storage key (e.g., `"org.transactions"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// Serialized JSON text, stored verbatim
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When this key was last overwritten
    pub updated_at: DateTime,
}

/// `StorageEntry` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
