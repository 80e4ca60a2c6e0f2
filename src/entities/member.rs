//! Member entity - A person belonging to the organization.
//!
//! `group` is free text and is not checked against the groups collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::store::Record;

/// Membership status shown on the member list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    /// Regularly participating member
    Active,
    /// Member who no longer participates
    Inactive,
    /// Not (yet) a member
    Visitor,
}

impl MemberStatus {
    /// Every status, in display order
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Visitor];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Visitor => "Visitor",
        }
    }
}

/// A stored member record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique within the members collection
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Date of birth, if known
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Date the member joined
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
    /// Name of the group the member attends
    #[serde(default)]
    pub group: Option<String>,
    /// Membership status
    pub status: MemberStatus,
}

/// Form input for a member that has not been assigned an id yet
#[derive(Clone, Debug, PartialEq)]
pub struct NewMember {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Date of birth, if known
    pub birth_date: Option<NaiveDate>,
    /// Date the member joined
    pub join_date: Option<NaiveDate>,
    /// Name of the group the member attends
    pub group: Option<String>,
    /// Membership status
    pub status: MemberStatus,
}

impl Member {
    /// Builds the stored record from form input and an assigned id.
    #[must_use]
    pub fn from_new(id: i64, new: NewMember) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            birth_date: new.birth_date,
            join_date: new.join_date,
            group: new.group.filter(|g| !g.trim().is_empty()),
            status: new.status,
        }
    }

    /// `"First Last"`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Member {
    fn id(&self) -> i64 {
        self.id
    }
}
