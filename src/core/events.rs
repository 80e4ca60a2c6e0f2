//! Event business logic - Calendar listing and derived status.
//!
//! Event status is never stored; it is computed from the event date and the
//! caller's notion of today on every read.

use crate::{
    core::{
        stats::{EventStatus, count_where},
        store::CollectionStore,
    },
    entities::{Event, NewEvent},
    errors::Result,
    storage::Storage,
};
use chrono::NaiveDate;
use tracing::info;

/// Collection name for events
pub const EVENTS: &str = "events";

/// Adds an event with the next free id.
pub async fn add_event<S: Storage>(
    store: &CollectionStore<S>,
    new_event: NewEvent,
) -> Result<Event> {
    let event = store
        .insert_new(EVENTS, |id| Event::from_new(id, new_event))
        .await?;
    info!(id = event.id, date = %event.date, "Added event");
    Ok(event)
}

/// All events, earliest date first. Events on the same date keep stored order.
pub async fn list_events<S: Storage>(store: &CollectionStore<S>) -> Vec<Event> {
    let mut events: Vec<Event> = store.load(EVENTS).await;
    events.sort_by_key(|e| e.date);
    events
}

/// Deletes an event by id. Returns whether an event was removed.
pub async fn delete_event<S: Storage>(store: &CollectionStore<S>, id: i64) -> Result<bool> {
    let removed = store.remove_by_id::<Event>(EVENTS, id).await?;
    info!(id, removed, "Deleted event");
    Ok(removed)
}

/// Status of `event` as of `today`.
#[must_use]
pub fn event_status(event: &Event, today: NaiveDate) -> EventStatus {
    EventStatus::derive(event.date, today)
}

/// Events that have not happened yet; an event today still counts.
#[must_use]
pub fn upcoming_count(events: &[Event], today: NaiveDate) -> usize {
    count_where(events, |e| event_status(e, today).is_pending())
}

/// Number of events per status, in [`EventStatus::ALL`] order.
#[must_use]
pub fn status_counts(events: &[Event], today: NaiveDate) -> Vec<(EventStatus, usize)> {
    EventStatus::ALL
        .iter()
        .map(|&status| (status, count_where(events, |e| event_status(e, today) == status)))
        .collect()
}
