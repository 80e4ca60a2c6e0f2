//! Event entity - Scheduled gatherings.
//!
//! Events do not store a status; it is derived from the date on every read
//! (see [`crate::core::stats::EventStatus`]). A legacy `status` field in stored
//! JSON is ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::store::Record;

/// Kind of event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Regular service
    Service,
    /// Committee or staff meeting
    Meeting,
    /// Community outreach
    Outreach,
    /// Social gathering
    Social,
    /// Training session
    Training,
    /// Prayer meeting
    Prayer,
    /// Study group
    Study,
}

impl EventType {
    /// Every event type, in display order
    pub const ALL: [Self; 7] = [
        Self::Service,
        Self::Meeting,
        Self::Outreach,
        Self::Social,
        Self::Training,
        Self::Prayer,
        Self::Study,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Meeting => "Meeting",
            Self::Outreach => "Outreach",
            Self::Social => "Social",
            Self::Training => "Training",
            Self::Prayer => "Prayer",
            Self::Study => "Study",
        }
    }
}

/// A stored event record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique within the events collection
    pub id: i64,
    /// Event title
    pub name: String,
    /// Calendar date
    pub date: NaiveDate,
    /// Start time as entered, e.g. `"19:00"`
    pub time: String,
    /// Venue
    pub location: String,
    /// Kind of event
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Expected number of participants
    #[serde(default)]
    pub participants: u32,
}

/// Form input for an event that has not been assigned an id yet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEvent {
    /// Event title
    pub name: String,
    /// Calendar date
    pub date: NaiveDate,
    /// Start time as entered
    pub time: String,
    /// Venue
    pub location: String,
    /// Kind of event
    pub event_type: EventType,
    /// Free-form description
    pub description: String,
    /// Expected number of participants
    pub participants: u32,
}

impl Event {
    /// Builds the stored record from form input and an assigned id.
    #[must_use]
    pub fn from_new(id: i64, new: NewEvent) -> Self {
        Self {
            id,
            name: new.name,
            date: new.date,
            time: new.time,
            location: new.location,
            event_type: new.event_type,
            description: new.description,
            participants: new.participants,
        }
    }
}

impl Record for Event {
    fn id(&self) -> i64 {
        self.id
    }
}
