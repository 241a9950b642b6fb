use chrono::NaiveDateTime;

const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// Urgency bucket for a dated event relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Overdue,
    DueSoon,
    Upcoming,
}

impl EventStatus {
    /// Buckets `date` against `now`. The due-soon window counts whole
    /// calendar days, not elapsed hours.
    pub fn classify(date: NaiveDateTime, now: NaiveDateTime) -> EventStatus {
        if date < now {
            return EventStatus::Overdue;
        }
        let days_until = (date.date() - now.date()).num_days();
        if days_until <= DUE_SOON_WINDOW_DAYS {
            EventStatus::DueSoon
        } else {
            EventStatus::Upcoming
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn past_dates_are_overdue() {
        let now = at_noon(2024, 6, 10);
        assert_eq!(
            EventStatus::classify(at_noon(2024, 6, 9), now),
            EventStatus::Overdue
        );
    }

    #[test]
    fn window_boundary_is_due_soon() {
        let now = at_noon(2024, 6, 10);
        assert_eq!(
            EventStatus::classify(at_noon(2024, 6, 17), now),
            EventStatus::DueSoon
        );
        assert_eq!(
            EventStatus::classify(at_noon(2024, 6, 18), now),
            EventStatus::Upcoming
        );
    }
}
