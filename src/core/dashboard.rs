//! Dashboard aggregation - Summary cards across every collection.
//!
//! The snapshot is recomputed from storage on every call; nothing here is
//! cached or persisted.

use crate::{
    core::{events, finance, members, staff, store::CollectionStore},
    entities::{Member, Staff},
    storage::Storage,
};
use chrono::NaiveDate;
use std::fmt::Write;
use tracing::{debug, instrument};

/// How many recent members and on-duty staff the dashboard lists
pub const DASHBOARD_LIST_LIMIT: usize = 5;

/// Everything the dashboard page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    /// Day the snapshot was computed for
    pub today: NaiveDate,
    /// Size of the member directory
    pub total_members: usize,
    /// Size of the staff roster
    pub total_staff: usize,
    /// Events today or later
    pub upcoming_events: usize,
    /// Income dated in the current month
    pub monthly_income: f64,
    /// Expenses dated in the current month
    pub monthly_expenses: f64,
    /// All-time income minus all-time expenses
    pub current_balance: f64,
    /// Most recently joined members
    pub recent_members: Vec<Member>,
    /// First staff members on the roster
    pub staff_on_duty: Vec<Staff>,
}

/// Loads every collection and derives the dashboard figures as of `today`.
#[instrument(skip(store))]
pub async fn load_dashboard<S: Storage>(
    store: &CollectionStore<S>,
    today: NaiveDate,
) -> DashboardSnapshot {
    let member_list = members::list_members(store).await;
    let staff_list = staff::list_staff(store).await;
    let event_list = events::list_events(store).await;
    let transactions = finance::list_transactions(store).await;

    let summary = finance::finance_summary(&transactions, today);

    let snapshot = DashboardSnapshot {
        today,
        total_members: member_list.len(),
        total_staff: staff_list.len(),
        upcoming_events: events::upcoming_count(&event_list, today),
        monthly_income: summary.monthly_income,
        monthly_expenses: summary.monthly_expenses,
        current_balance: summary.balance,
        recent_members: members::recent_members(&member_list, DASHBOARD_LIST_LIMIT),
        staff_on_duty: staff::staff_on_duty(&staff_list, DASHBOARD_LIST_LIMIT),
    };
    debug!(?snapshot, "Computed dashboard snapshot");
    snapshot
}

/// Formats a dashboard snapshot into a human-readable summary.
/// This is useful for logging or printing from the command line.
#[must_use]
pub fn format_dashboard_summary(snapshot: &DashboardSnapshot) -> String {
    let mut summary = format!("Dashboard - {}\n", snapshot.today.format("%B %-d, %Y"));

    // write! is infallible when writing to String
    let _ = writeln!(
        summary,
        "  Members: {} | Staff: {} | Upcoming events: {}",
        snapshot.total_members, snapshot.total_staff, snapshot.upcoming_events
    );
    let _ = writeln!(
        summary,
        "  This month: income {} | expenses {}",
        finance::format_currency(snapshot.monthly_income),
        finance::format_currency(snapshot.monthly_expenses)
    );
    let _ = writeln!(
        summary,
        "  Balance: {}",
        finance::format_currency(snapshot.current_balance)
    );

    if !snapshot.recent_members.is_empty() {
        let _ = writeln!(summary, "  Recent members:");
        for member in &snapshot.recent_members {
            let joined = member
                .join_date
                .map_or_else(|| "N/A".to_string(), |d| d.format("%b %-d, %Y").to_string());
            let _ = writeln!(summary, "    {} (joined {joined})", member.full_name());
        }
    }

    if !snapshot.staff_on_duty.is_empty() {
        let _ = writeln!(summary, "  Staff on duty:");
        for person in &snapshot.staff_on_duty {
            let _ = writeln!(
                summary,
                "    {} - {} ({})",
                person.full_name(),
                person.position,
                person.department.label()
            );
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::{
        events::add_event, finance::record_transaction, members::add_member, staff::add_staff,
    };
    use crate::entities::Department;
    use crate::errors::Result;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_empty_dashboard() {
        let store = setup_memory_store();
        let snapshot = load_dashboard(&store, date(2024, 6, 15)).await;

        assert_eq!(snapshot.total_members, 0);
        assert_eq!(snapshot.total_staff, 0);
        assert_eq!(snapshot.upcoming_events, 0);
        assert_eq!(snapshot.current_balance, 0.0);
        assert!(snapshot.recent_members.is_empty());
        assert!(snapshot.staff_on_duty.is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_aggregates_every_collection() -> Result<()> {
        let store = setup_memory_store();
        let today = date(2024, 6, 15);

        for i in 0..6 {
            let mut m = sample_member("Member", &i.to_string());
            m.join_date = Some(date(2024, 1, 1 + i));
            add_member(&store, m).await?;
        }
        for i in 0..7 {
            add_staff(&store, sample_staff("Staff", &i.to_string(), Department::Youth)).await?;
        }
        add_event(&store, sample_event("Past", date(2024, 6, 10))).await?;
        add_event(&store, sample_event("Now", date(2024, 6, 15))).await?;
        add_event(&store, sample_event("Soon", date(2024, 6, 20))).await?;
        record_transaction(&store, income(100.0, date(2024, 6, 1))).await?;
        record_transaction(&store, income(50.0, date(2024, 5, 1))).await?;
        record_transaction(&store, expense(30.0, date(2024, 6, 2))).await?;

        let snapshot = load_dashboard(&store, today).await;
        assert_eq!(snapshot.total_members, 6);
        assert_eq!(snapshot.total_staff, 7);
        assert_eq!(snapshot.upcoming_events, 2);
        assert_eq!(snapshot.monthly_income, 100.0);
        assert_eq!(snapshot.monthly_expenses, 30.0);
        assert_eq!(snapshot.current_balance, 120.0);

        assert_eq!(snapshot.recent_members.len(), DASHBOARD_LIST_LIMIT);
        assert_eq!(snapshot.recent_members[0].last_name, "5");
        assert_eq!(snapshot.staff_on_duty.len(), DASHBOARD_LIST_LIMIT);
        assert_eq!(snapshot.staff_on_duty[0].id, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_format_dashboard_summary() -> Result<()> {
        let store = setup_memory_store();
        let mut m = sample_member("Ada", "Lovelace");
        m.join_date = Some(date(2024, 6, 1));
        add_member(&store, m).await?;
        record_transaction(&store, income(1250.0, date(2024, 6, 1))).await?;

        let snapshot = load_dashboard(&store, date(2024, 6, 15)).await;
        let text = format_dashboard_summary(&snapshot);

        assert!(text.starts_with("Dashboard - June 15, 2024"));
        assert!(text.contains("Members: 1 | Staff: 0 | Upcoming events: 0"));
        assert!(text.contains("income $1,250.00"));
        assert!(text.contains("Ada Lovelace (joined Jun 1, 2024)"));
        assert!(!text.contains("Staff on duty"));
        Ok(())
    }
}
