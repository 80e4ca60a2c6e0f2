//! Member business logic - Directory, search and membership statistics.

use crate::{
    core::{stats::count_where, store::CollectionStore},
    entities::{Member, MemberStatus, NewMember},
    errors::Result,
    storage::Storage,
};
use tracing::info;

/// Collection name for members
pub const MEMBERS: &str = "members";

/// Counts shown on the members summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberStats {
    /// All members
    pub total: usize,
    /// Members with status Active
    pub active: usize,
    /// Members with status Inactive
    pub inactive: usize,
    /// Visitors
    pub visitors: usize,
}

/// Adds a member with the next free id.
pub async fn add_member<S: Storage>(
    store: &CollectionStore<S>,
    new_member: NewMember,
) -> Result<Member> {
    let member = store
        .insert_new(MEMBERS, |id| Member::from_new(id, new_member))
        .await?;
    info!(id = member.id, "Added member");
    Ok(member)
}

/// All members in stored order.
pub async fn list_members<S: Storage>(store: &CollectionStore<S>) -> Vec<Member> {
    store.load(MEMBERS).await
}

/// Deletes a member by id. Returns whether a member was removed.
pub async fn delete_member<S: Storage>(store: &CollectionStore<S>, id: i64) -> Result<bool> {
    let removed = store.remove_by_id::<Member>(MEMBERS, id).await?;
    info!(id, removed, "Deleted member");
    Ok(removed)
}

/// Filters members by a case-insensitive substring of "first last", email or
/// phone. A blank term matches everyone.
#[must_use]
pub fn search_members<'a>(members: &'a [Member], term: &str) -> Vec<&'a Member> {
    let needle = term.trim().to_lowercase();
    members
        .iter()
        .filter(|m| {
            needle.is_empty()
                || m.full_name().to_lowercase().contains(&needle)
                || m.email.to_lowercase().contains(&needle)
                || m.phone.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Membership counts by status.
#[must_use]
pub fn member_stats(members: &[Member]) -> MemberStats {
    MemberStats {
        total: members.len(),
        active: count_where(members, |m| m.status == MemberStatus::Active),
        inactive: count_where(members, |m| m.status == MemberStatus::Inactive),
        visitors: count_where(members, |m| m.status == MemberStatus::Visitor),
    }
}

/// The `limit` most recently joined members, newest first. Members without a
/// join date sort last, in stored order.
#[must_use]
pub fn recent_members(members: &[Member], limit: usize) -> Vec<Member> {
    let mut sorted = members.to_vec();
    // Stable sort keeps stored order among equal dates
    sorted.sort_by(|a, b| b.join_date.cmp(&a.join_date));
    sorted.truncate(limit);
    sorted
}
