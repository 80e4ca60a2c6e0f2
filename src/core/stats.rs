//! Statistics derivation - Pure functions over already-loaded collections.
//!
//! Nothing here touches storage. Month scoping always means the calendar
//! (year, month) of a caller-supplied reference date, never a rolling window.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Counts the records matching `predicate`.
pub fn count_where<T, P>(records: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    records.iter().filter(|&r| predicate(r)).count()
}

/// Sums `amount` over the records matching `predicate`.
pub fn sum_where<T, P, A>(records: &[T], predicate: P, amount: A) -> f64
where
    P: Fn(&T) -> bool,
    A: Fn(&T) -> f64,
{
    records.iter().filter(|&r| predicate(r)).map(amount).sum()
}

/// Whether `date` falls in the same calendar month and year as `reference`.
#[must_use]
pub fn in_same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

/// Status of an event relative to today. Derived on every read, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EventStatus {
    /// The event date is before today
    Completed,
    /// The event is today
    Today,
    /// The event date is after today
    Upcoming,
}

impl EventStatus {
    /// Every status, in display order
    pub const ALL: [Self; 3] = [Self::Upcoming, Self::Today, Self::Completed];

    /// Derives the status by comparing calendar dates.
    #[must_use]
    pub fn derive(event_date: NaiveDate, today: NaiveDate) -> Self {
        match event_date.cmp(&today) {
            std::cmp::Ordering::Less => Self::Completed,
            std::cmp::Ordering::Equal => Self::Today,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }

    /// Derives the status against a point in time; the time of day is ignored.
    #[must_use]
    pub fn derive_at(event_date: NaiveDate, now: NaiveDateTime) -> Self {
        Self::derive(event_date, now.date())
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Today => "Today",
            Self::Upcoming => "Upcoming",
        }
    }

    /// Whether the event has not happened yet (today counts as not yet)
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Today | Self::Upcoming)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_count_where() {
        let values = [1, 2, 3, 4, 5, 6];
        assert_eq!(count_where(&values, |v| v % 2 == 0), 3);
        assert_eq!(count_where(&values, |_| false), 0);

        let empty: [i32; 0] = [];
        assert_eq!(count_where(&empty, |_| true), 0);
    }

    #[test]
    fn test_sum_where() {
        let values = [(true, 10.0), (false, 5.0), (true, 2.5)];
        assert_eq!(sum_where(&values, |v| v.0, |v| v.1), 12.5);
        assert_eq!(sum_where(&values, |_| false, |v| v.1), 0.0);
    }

    #[test]
    fn test_in_same_month_requires_matching_year() {
        let reference = date(2024, 6, 15);
        assert!(in_same_month(date(2024, 6, 1), reference));
        assert!(in_same_month(date(2024, 6, 30), reference));
        assert!(!in_same_month(date(2024, 5, 31), reference));
        assert!(!in_same_month(date(2023, 6, 15), reference));
    }

    #[test]
    fn test_event_status_relative_to_today() {
        let today = date(2024, 6, 15);
        assert_eq!(
            EventStatus::derive(date(2024, 6, 10), today),
            EventStatus::Completed
        );
        assert_eq!(
            EventStatus::derive(date(2024, 6, 15), today),
            EventStatus::Today
        );
        assert_eq!(
            EventStatus::derive(date(2024, 6, 20), today),
            EventStatus::Upcoming
        );
    }

    #[test]
    fn test_event_status_ignores_time_of_day() {
        let event_day = date(2024, 6, 15);

        let early = event_day.and_hms_opt(0, 0, 1).unwrap();
        let late = event_day.and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(EventStatus::derive_at(event_day, early), EventStatus::Today);
        assert_eq!(EventStatus::derive_at(event_day, late), EventStatus::Today);

        let next_morning = date(2024, 6, 16).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(
            EventStatus::derive_at(event_day, next_morning),
            EventStatus::Completed
        );
    }

    #[test]
    fn test_event_status_is_pending() {
        assert!(EventStatus::Today.is_pending());
        assert!(EventStatus::Upcoming.is_pending());
        assert!(!EventStatus::Completed.is_pending());
    }
}
