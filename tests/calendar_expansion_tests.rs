use chrono::{Datelike, NaiveDate};
use expense_core::calendar::{expand, expand_events, Frequency, RecurrencePattern};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn daily_expansion_spaces_occurrences_by_interval() {
    let start = date(2024, 1, 1);
    let pattern = RecurrencePattern::new("Coffee", Frequency::Daily, start)
        .with_interval(3)
        .until(date(2024, 1, 11));

    let occurrences = expand(&pattern, date(2030, 1, 1));
    let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.date.date()).collect();
    // k = 3 steps of n = 3 days inside the bound gives k + 1 occurrences.
    assert_eq!(
        dates,
        vec![date(2024, 1, 1), date(2024, 1, 4), date(2024, 1, 7), date(2024, 1, 10)]
    );
    for pair in dates.windows(2) {
        assert_eq!((pair[1] - pair[0]).num_days(), 3);
    }
}

#[test]
fn weekly_expansion_picks_selected_weekdays() {
    // 2024-01-01 is a Monday; selectors use 0 = Sunday.
    let pattern = RecurrencePattern::new("Standup", Frequency::Weekly, date(2024, 1, 1))
        .on_days_of_week(&[1, 3])
        .until(date(2024, 1, 8));

    let occurrences = expand(&pattern, date(2030, 1, 1));
    assert_eq!(occurrences.len(), 2);
    assert_eq!(occurrences[0].date.date(), date(2024, 1, 1));
    assert_eq!(occurrences[1].date.date(), date(2024, 1, 3));
    assert_eq!(occurrences[0].date.weekday().num_days_from_sunday(), 1);
    assert_eq!(occurrences[1].date.weekday().num_days_from_sunday(), 3);
}

#[test]
fn monthly_expansion_picks_selected_days_each_month() {
    let pattern = RecurrencePattern::new("Rent", Frequency::Monthly, date(2024, 1, 1))
        .on_days_of_month(&[1, 15])
        .until(date(2024, 4, 1));

    let occurrences = expand(&pattern, date(2030, 1, 1));
    let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.date.date()).collect();
    assert_eq!(
        dates,
        vec![
            date(2024, 1, 1),
            date(2024, 1, 15),
            date(2024, 2, 1),
            date(2024, 2, 15),
            date(2024, 3, 1),
            date(2024, 3, 15),
        ]
    );
}

#[test]
fn yearly_expansion_emits_every_day_of_selected_months() {
    // The yearly walk advances day by day and filters by month, so a
    // selected month contributes each of its remaining days.
    let pattern = RecurrencePattern::new("Review", Frequency::Yearly, date(2024, 1, 28))
        .in_months(&[0])
        .until(date(2024, 2, 3));

    let occurrences = expand(&pattern, date(2030, 1, 1));
    let dates: Vec<NaiveDate> = occurrences.iter().map(|o| o.date.date()).collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 28), date(2024, 1, 29), date(2024, 1, 30), date(2024, 1, 31)]
    );
}

#[test]
fn open_ended_patterns_stop_after_one_year() {
    let pattern = RecurrencePattern::new("Journal", Frequency::Daily, date(2024, 1, 1));
    assert!(pattern.never_ends);

    let occurrences = expand(&pattern, date(2030, 1, 1));
    // 2024 is a leap year: one daily entry per day up to but excluding
    // 2025-01-01.
    assert_eq!(occurrences.len(), 366);
    assert_eq!(occurrences.last().unwrap().date.date(), date(2024, 12, 31));
}

#[test]
fn range_end_caps_expansion_below_pattern_bound() {
    let pattern = RecurrencePattern::new("Journal", Frequency::Daily, date(2024, 1, 1));
    let occurrences = expand(&pattern, date(2024, 1, 5));
    assert_eq!(occurrences.len(), 4);
}

#[test]
fn expansion_is_deterministic() {
    let pattern = RecurrencePattern::new("Gym", Frequency::Weekly, date(2024, 1, 1))
        .on_days_of_week(&[2, 5])
        .until(date(2024, 3, 1));

    let first = expand(&pattern, date(2030, 1, 1));
    let second = expand(&pattern, date(2030, 1, 1));
    assert_eq!(first, second);

    let prefix = format!("recurring-{}-", pattern.id);
    for occurrence in &first {
        assert!(occurrence.event_id.starts_with(&prefix));
    }
}

#[test]
fn degenerate_patterns_expand_to_nothing() {
    let ended_before_start = RecurrencePattern::new("Noop", Frequency::Daily, date(2024, 6, 1))
        .until(date(2024, 5, 1));
    assert!(expand(&ended_before_start, date(2030, 1, 1)).is_empty());

    let no_weekdays = RecurrencePattern::new("Noop", Frequency::Weekly, date(2024, 1, 1))
        .until(date(2024, 2, 1));
    assert!(expand(&no_weekdays, date(2030, 1, 1)).is_empty());
}

#[test]
fn expanded_events_carry_the_pattern_title() {
    let pattern = RecurrencePattern::new("Netflix", Frequency::Monthly, date(2024, 1, 1))
        .on_days_of_month(&[5])
        .until(date(2024, 3, 1));

    let events = expand_events(&pattern, date(2030, 1, 1));
    assert_eq!(events.len(), 2);
    for event in &events {
        assert_eq!(event.title, "Netflix");
        assert_eq!(event.kind(), expense_core::calendar::EventKind::Recurring);
        assert_eq!(event.amount(), None);
    }
}
