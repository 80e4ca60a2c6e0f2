//! Chart datasets derived from the collections.

use super::{ChartData, ChartKind};
use crate::{
    core::{finance::category_totals, stats::count_where},
    entities::{
        Department, Event, EventType, Member, MemberStatus, Staff, Transaction, TransactionKind,
    },
};

/// Income split by category, for the finance page.
#[must_use]
pub fn income_by_category(transactions: &[Transaction]) -> ChartData {
    ChartData::from_pairs(
        "Income by Category",
        ChartKind::Doughnut,
        category_totals(transactions, TransactionKind::Income),
    )
}

/// Expenses split by category, for the finance page.
#[must_use]
pub fn expenses_by_category(transactions: &[Transaction]) -> ChartData {
    ChartData::from_pairs(
        "Expenses by Category",
        ChartKind::Doughnut,
        category_totals(transactions, TransactionKind::Expense),
    )
}

/// Head count per department, every department included.
#[must_use]
#[allow(clippy::cast_precision_loss)] // head counts are far below 2^52
pub fn staff_by_department(staff: &[Staff]) -> ChartData {
    let pairs = Department::ALL
        .iter()
        .map(|&dept| (dept.label(), count_where(staff, |s| s.department == dept) as f64));
    ChartData::from_pairs("Staff by Department", ChartKind::Doughnut, pairs)
}

/// Members per status, every status included.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn members_by_status(members: &[Member]) -> ChartData {
    let pairs = MemberStatus::ALL
        .iter()
        .map(|&status| (status.label(), count_where(members, |m| m.status == status) as f64));
    ChartData::from_pairs("Members by Status", ChartKind::Pie, pairs)
}

/// Events per type, every type included.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn events_by_type(events: &[Event]) -> ChartData {
    let pairs = EventType::ALL
        .iter()
        .map(|&kind| (kind.label(), count_where(events, |e| e.event_type == kind) as f64));
    ChartData::from_pairs("Events by Type", ChartKind::Bar, pairs)
}
