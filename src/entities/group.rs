//! Group entity - Small groups, ministries and teams.
//!
//! `members` is a headcount entered by hand, not a link to member records.

use serde::{Deserialize, Serialize};

use crate::core::store::Record;

/// Whether a group currently meets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupStatus {
    /// Meeting regularly
    Active,
    /// Paused or disbanded
    Inactive,
}

/// A stored group record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique within the groups collection
    pub id: i64,
    /// Group name
    pub name: String,
    /// Free-text category, e.g. "Youth" or "Worship"
    #[serde(rename = "type")]
    pub group_type: String,
    /// Leader's name
    pub leader: String,
    /// Headcount
    pub members: u32,
    /// When the group meets, e.g. "Friday, 7:00 PM"
    pub schedule: String,
    /// Whether the group currently meets
    pub status: GroupStatus,
    /// Free-form description
    #[serde(default)]
    pub description: String,
}

/// Form input (or configured seed) for a group without an id
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewGroup {
    /// Group name
    pub name: String,
    /// Free-text category
    #[serde(rename = "type", default)]
    pub group_type: String,
    /// Leader's name
    #[serde(default)]
    pub leader: String,
    /// Headcount
    #[serde(default)]
    pub members: u32,
    /// When the group meets
    #[serde(default)]
    pub schedule: String,
    /// Whether the group currently meets
    #[serde(default = "default_group_status")]
    pub status: GroupStatus,
    /// Free-form description
    #[serde(default)]
    pub description: String,
}

const fn default_group_status() -> GroupStatus {
    GroupStatus::Active
}

impl Group {
    /// Builds the stored record from form input and an assigned id.
    #[must_use]
    pub fn from_new(id: i64, new: NewGroup) -> Self {
        Self {
            id,
            name: new.name,
            group_type: new.group_type,
            leader: new.leader,
            members: new.members,
            schedule: new.schedule,
            status: new.status,
            description: new.description,
        }
    }
}

impl Record for Group {
    fn id(&self) -> i64 {
        self.id
    }
}
