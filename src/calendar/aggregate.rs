use chrono::{NaiveDate, NaiveDateTime};

use super::event::{Event, EventKind};

/// Default number of entries returned by the upcoming-events panel.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Events landing on `day`, restricted to the enabled kinds and matching
/// the search query.
///
/// Day bucketing compares calendar dates and ignores time-of-day. The
/// query matches title or category case-insensitively; an empty query
/// matches everything. An empty `enabled` set yields an empty result no
/// matter how many events exist.
pub fn events_for_day(
    events: &[Event],
    day: NaiveDate,
    enabled: &[EventKind],
    query: &str,
) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.date.date() == day)
        .filter(|event| enabled.contains(&event.kind()))
        .filter(|event| matches_query(event, query))
        .cloned()
        .collect()
}

/// Events strictly after `now`, ascending by date, truncated to `limit`.
/// The sort is stable so same-instant events keep their input order.
pub fn upcoming_events(events: &[Event], now: NaiveDateTime, limit: usize) -> Vec<Event> {
    let mut upcoming: Vec<Event> = events
        .iter()
        .filter(|event| event.date > now)
        .cloned()
        .collect();
    upcoming.sort_by_key(|event| event.date);
    upcoming.truncate(limit);
    upcoming
}

fn matches_query(event: &Event, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    if event.title.to_lowercase().contains(&needle) {
        return true;
    }
    event
        .category()
        .map(|category| category.to_lowercase().contains(&needle))
        .unwrap_or(false)
}
