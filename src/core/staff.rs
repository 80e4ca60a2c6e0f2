//! Staff business logic - Roster, search and department statistics.

use crate::{
    core::{stats::count_where, store::CollectionStore},
    entities::{Department, EmploymentType, NewStaff, Staff},
    errors::{Error, Result},
    storage::Storage,
};
use tracing::info;

/// Collection name for staff
pub const STAFF: &str = "staff";

/// Counts shown on the staff summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaffStats {
    /// Everyone on the roster
    pub total: usize,
    /// Staff in the Leadership department
    pub leadership: usize,
    /// Staff in the Administration department
    pub administration: usize,
    /// Staff employed as volunteers
    pub volunteers: usize,
}

/// Adds a staff member with the next free id.
///
/// Rejects negative, NaN and infinite salaries.
pub async fn add_staff<S: Storage>(
    store: &CollectionStore<S>,
    new_staff: NewStaff,
) -> Result<Staff> {
    let salary = new_staff.salary;
    if !salary.is_finite() || salary < 0.0 {
        return Err(Error::InvalidAmount { amount: salary });
    }

    let staff = store
        .insert_new(STAFF, |id| Staff::from_new(id, new_staff))
        .await?;
    info!(id = staff.id, department = staff.department.label(), "Added staff member");
    Ok(staff)
}

/// All staff in stored order.
pub async fn list_staff<S: Storage>(store: &CollectionStore<S>) -> Vec<Staff> {
    store.load(STAFF).await
}

/// Deletes a staff member by id. Returns whether a record was removed.
pub async fn delete_staff<S: Storage>(store: &CollectionStore<S>, id: i64) -> Result<bool> {
    let removed = store.remove_by_id::<Staff>(STAFF, id).await?;
    info!(id, removed, "Deleted staff member");
    Ok(removed)
}

/// Filters staff by a case-insensitive substring of "first last", position or
/// department. A blank term matches everyone.
#[must_use]
pub fn search_staff<'a>(staff: &'a [Staff], term: &str) -> Vec<&'a Staff> {
    let needle = term.trim().to_lowercase();
    staff
        .iter()
        .filter(|s| {
            needle.is_empty()
                || s.full_name().to_lowercase().contains(&needle)
                || s.position.to_lowercase().contains(&needle)
                || s.department.label().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Roster counts for the summary cards.
#[must_use]
pub fn staff_stats(staff: &[Staff]) -> StaffStats {
    StaffStats {
        total: staff.len(),
        leadership: count_where(staff, |s| s.department == Department::Leadership),
        administration: count_where(staff, |s| s.department == Department::Administration),
        volunteers: count_where(staff, |s| s.employment_type == EmploymentType::Volunteer),
    }
}

/// Headcount per department, in [`Department::ALL`] order, including empty ones.
#[must_use]
pub fn department_counts(staff: &[Staff]) -> Vec<(Department, usize)> {
    Department::ALL
        .iter()
        .map(|&dept| (dept, count_where(staff, |s| s.department == dept)))
        .collect()
}

/// The first `limit` staff members in stored order.
#[must_use]
pub fn staff_on_duty(staff: &[Staff], limit: usize) -> Vec<Staff> {
    staff.iter().take(limit).cloned().collect()
}
