//! Shared test utilities for `OrgDesk`.
//!
//! This module provides common helpers for setting up stores and building
//! records with sensible defaults.

use crate::{
    core::store::CollectionStore,
    entities::{
        Department, EmploymentType, Event, EventType, GroupStatus, Member, MemberStatus, NewEvent,
        NewGroup, NewMember, NewStaff, NewTransaction, Report, ReportKind, Staff, TransactionKind,
    },
    errors::Result,
    identity::{Account, hash_password},
    storage::MemoryStorage,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Namespace used by every test store
pub const TEST_NAMESPACE: &str = "test";

/// Creates an in-memory `SQLite` database with the storage table initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an empty in-memory collection store.
#[must_use]
pub fn setup_memory_store() -> CollectionStore<MemoryStorage> {
    CollectionStore::new(MemoryStorage::new(), TEST_NAMESPACE)
}

/// Creates an in-memory store holding raw values under collection names.
/// Names are namespaced the same way the store namespaces them.
#[must_use]
pub fn setup_memory_store_with(collections: &[(&str, &str)]) -> CollectionStore<MemoryStorage> {
    let storage = MemoryStorage::with_entries(
        collections
            .iter()
            .map(|&(name, raw)| (format!("{TEST_NAMESPACE}.{name}"), raw)),
    );
    CollectionStore::new(storage, TEST_NAMESPACE)
}

/// Shorthand for a calendar date. Panics on an invalid date.
#[must_use]
#[allow(clippy::expect_used)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Active member form input with no group or dates.
#[must_use]
pub fn sample_member(first: &str, last: &str) -> NewMember {
    NewMember {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.org", first.to_lowercase()),
        phone: "555-0100".to_string(),
        birth_date: None,
        join_date: None,
        group: None,
        status: MemberStatus::Active,
    }
}

/// Stored active member with the given contact details.
#[must_use]
pub fn member_record(id: i64, first: &str, last: &str, email: &str, phone: &str) -> Member {
    Member {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        birth_date: None,
        join_date: None,
        group: None,
        status: MemberStatus::Active,
    }
}

/// Full-time staff form input in `department`.
#[must_use]
pub fn sample_staff(first: &str, last: &str, department: Department) -> NewStaff {
    NewStaff {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.org", first.to_lowercase()),
        phone: "555-0200".to_string(),
        position: "Coordinator".to_string(),
        department,
        employment_type: EmploymentType::FullTime,
        salary: 3000.0,
        hire_date: date(2023, 1, 9),
        avatar: None,
        birth_date: None,
        address: None,
        emergency_name: None,
        emergency_phone: None,
        notes: None,
    }
}

/// Stored full-time staff record in `department`.
#[must_use]
pub fn staff_record(id: i64, first: &str, last: &str, department: Department) -> Staff {
    Staff::from_new(id, sample_staff(first, last, department))
}

/// Active group form input with a headcount.
#[must_use]
pub fn sample_group(name: &str, members: u32) -> NewGroup {
    NewGroup {
        name: name.to_string(),
        group_type: "Ministry".to_string(),
        leader: "Pat Leader".to_string(),
        members,
        schedule: "Sundays".to_string(),
        status: GroupStatus::Active,
        description: String::new(),
    }
}

/// Meeting form input on `date`.
#[must_use]
pub fn sample_event(name: &str, date: NaiveDate) -> NewEvent {
    NewEvent {
        name: name.to_string(),
        date,
        time: "10:00".to_string(),
        location: "Main Hall".to_string(),
        event_type: EventType::Meeting,
        description: String::new(),
        participants: 0,
    }
}

/// Stored meeting on `date`.
#[must_use]
pub fn event_record(id: i64, date: NaiveDate) -> Event {
    Event::from_new(id, sample_event(&format!("Event {id}"), date))
}

/// Income form input with the default category and status.
#[must_use]
pub fn income(amount: f64, date: NaiveDate) -> NewTransaction {
    NewTransaction::new(TransactionKind::Income, date, "Test income", amount)
}

/// Expense form input with the default category and status.
#[must_use]
pub fn expense(amount: f64, date: NaiveDate) -> NewTransaction {
    NewTransaction::new(TransactionKind::Expense, date, "Test expense", amount)
}

/// Catalog entry of `kind` generated on June 1, 2024.
#[must_use]
pub fn report_record(id: i64, kind: ReportKind) -> Report {
    Report {
        id,
        name: format!("{} Report", kind.label()),
        generated_date: date(2024, 6, 1),
        kind,
        period: "June 2024".to_string(),
        size_bytes: 1024,
    }
}

/// Account whose hash matches `password`.
pub fn test_account(email: &str, password: &str) -> Result<Account> {
    Ok(Account {
        email: email.to_string(),
        password_hash: hash_password(password)?,
        display_name: Some("Test Admin".to_string()),
        photo_url: None,
    })
}
