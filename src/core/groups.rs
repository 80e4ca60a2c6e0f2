//! Group business logic - Group list, first-run seeding and statistics.
//!
//! Groups persist like every other collection. On first run the collection is
//! seeded from the `[[groups]]` entries of `config.toml`; after that the stored
//! collection is authoritative, even if it has been emptied.

use crate::{
    core::{
        stats::count_where,
        store::{CollectionStore, next_id},
    },
    entities::{Group, GroupStatus, NewGroup},
    errors::Result,
    storage::Storage,
};
use tracing::info;

/// Collection name for groups
pub const GROUPS: &str = "groups";

/// Figures shown on the groups page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupStats {
    /// All groups
    pub total: usize,
    /// Groups currently meeting
    pub active: usize,
    /// Sum of every group's headcount
    pub total_members: u64,
}

/// Writes `seeds` as the initial groups collection if none is stored yet.
///
/// Returns the number of groups written; `0` when groups already exist.
pub async fn seed_groups<S: Storage>(
    store: &CollectionStore<S>,
    seeds: &[NewGroup],
) -> Result<usize> {
    if store.contains(GROUPS).await {
        info!("Groups already present, skipping seed");
        return Ok(0);
    }

    let mut groups: Vec<Group> = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let id = next_id(&groups);
        groups.push(Group::from_new(id, seed.clone()));
    }

    store.save(GROUPS, &groups).await?;
    info!(count = groups.len(), "Seeded initial groups");
    Ok(groups.len())
}

/// Adds a group with the next free id.
pub async fn add_group<S: Storage>(
    store: &CollectionStore<S>,
    new_group: NewGroup,
) -> Result<Group> {
    let group = store
        .insert_new(GROUPS, |id| Group::from_new(id, new_group))
        .await?;
    info!(id = group.id, name = %group.name, "Added group");
    Ok(group)
}

/// All groups in stored order.
pub async fn list_groups<S: Storage>(store: &CollectionStore<S>) -> Vec<Group> {
    store.load(GROUPS).await
}

/// Deletes a group by id. Returns whether a group was removed.
pub async fn delete_group<S: Storage>(store: &CollectionStore<S>, id: i64) -> Result<bool> {
    let removed = store.remove_by_id::<Group>(GROUPS, id).await?;
    info!(id, removed, "Deleted group");
    Ok(removed)
}

/// Group counts and total headcount.
#[must_use]
pub fn group_stats(groups: &[Group]) -> GroupStats {
    GroupStats {
        total: groups.len(),
        active: count_where(groups, |g| g.status == GroupStatus::Active),
        total_members: groups.iter().map(|g| u64::from(g.members)).sum(),
    }
}
