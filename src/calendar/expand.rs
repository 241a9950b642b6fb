use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::event::{Event, EventDetails};
use super::pattern::{Frequency, RecurrencePattern};

/// One concrete date instance produced by expanding a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub date: NaiveDateTime,
    pub event_id: String,
}

/// Expands `pattern` into its concrete occurrence dates, stopping at the
/// earlier of `range_end` and the pattern's own bound (explicit end date,
/// or the fixed one-year lookahead for open-ended patterns).
///
/// The weekly, monthly, and yearly branches walk day by day and filter by
/// the pattern's selector sets; only the daily branch consumes `interval`.
/// Stored calendars depend on the emitted dates and ids, so the walk order
/// and id derivation must not change.
///
/// Deterministic and restartable: no iterator state survives the call, and
/// identical inputs always produce the identical id sequence.
pub fn expand(pattern: &RecurrencePattern, range_end: NaiveDate) -> Vec<Occurrence> {
    let upper = pattern.expansion_bound().min(range_end);
    let mut occurrences = Vec::new();
    let mut cursor = pattern.start_date;

    while cursor < upper {
        match pattern.frequency {
            Frequency::Daily => {
                occurrences.push(occurrence_on(pattern, cursor));
                // interval below 1 would stall the cursor forever
                cursor = cursor + Duration::days(pattern.interval.max(1) as i64);
            }
            Frequency::Weekly => {
                if pattern.days_of_week.contains(&day_of_week(cursor)) {
                    occurrences.push(occurrence_on(pattern, cursor));
                }
                cursor = cursor + Duration::days(1);
            }
            Frequency::Monthly => {
                if pattern.days_of_month.contains(&cursor.day()) {
                    occurrences.push(occurrence_on(pattern, cursor));
                }
                cursor = cursor + Duration::days(1);
            }
            Frequency::Yearly => {
                if pattern.months_of_year.contains(&cursor.month0()) {
                    occurrences.push(occurrence_on(pattern, cursor));
                }
                cursor = cursor + Duration::days(1);
            }
        }
    }

    occurrences
}

/// Expands a pattern straight into calendar events carrying its title.
pub fn expand_events(pattern: &RecurrencePattern, range_end: NaiveDate) -> Vec<Event> {
    expand(pattern, range_end)
        .into_iter()
        .map(|occurrence| Event {
            id: occurrence.event_id,
            date: occurrence.date,
            title: pattern.title.clone(),
            details: EventDetails::Recurring {
                amount: None,
                category: None,
            },
        })
        .collect()
}

fn occurrence_on(pattern: &RecurrencePattern, date: NaiveDate) -> Occurrence {
    let stamp = date.and_time(NaiveTime::MIN);
    Occurrence {
        event_id: format!(
            "recurring-{}-{}",
            pattern.id,
            stamp.and_utc().timestamp_millis()
        ),
        date: stamp,
    }
}

/// Weekday index with 0 = Sunday, matching the pattern's selector set.
fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}
