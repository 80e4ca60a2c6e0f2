//! Entity module - Record definitions for every collection, plus the `SeaORM`
//! entity backing the `SQLite` storage substrate.
//!
//! Records are plain serde structs; each collection is persisted as one JSON
//! array through [`crate::core::store::CollectionStore`].

pub mod event;
pub mod group;
pub mod member;
pub mod report;
pub mod settings;
pub mod staff;
pub mod storage_entry;
pub mod transaction;

// Re-export specific types to avoid conflicts
pub use event::{Event, EventType, NewEvent};
pub use group::{Group, GroupStatus, NewGroup};
pub use member::{Member, MemberStatus, NewMember};
pub use report::{Report, ReportKind};
pub use settings::{BackupFrequency, Settings};
pub use staff::{Department, EmploymentType, NewStaff, Staff};
pub use storage_entry::{
    Column as StorageEntryColumn, Entity as StorageEntry, Model as StorageEntryModel,
};
pub use transaction::{NewTransaction, PaymentStatus, Transaction, TransactionKind};
