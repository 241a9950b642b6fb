use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How many years past its start an open-ended pattern expands before the
/// calendar stops looking ahead. This fixed cap bounds worst-case
/// iteration and is relied upon by callers expecting finite expansions.
pub const NEVER_ENDS_LOOKAHEAD_YEARS: i32 = 1;

/// How often a recurring pattern fires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Rule describing how a calendar event repeats over time.
///
/// `interval` only drives the daily progression; the weekly, monthly, and
/// yearly frequencies select concrete days through their respective sets.
/// Day-of-week uses 0 = Sunday through 6 = Saturday, months use
/// 0 = January through 11 = December.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecurrencePattern {
    pub id: Uuid,
    pub title: String,
    pub frequency: Frequency,
    pub interval: u32,
    #[serde(default)]
    pub days_of_week: Vec<u32>,
    #[serde(default)]
    pub days_of_month: Vec<u32>,
    #[serde(default)]
    pub months_of_year: Vec<u32>,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub never_ends: bool,
    /// Captured from the editing surface but not consulted during
    /// expansion; kept for round-trip fidelity with stored patterns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_after_occurrences: Option<u32>,
}

impl RecurrencePattern {
    /// Creates an open-ended pattern firing once per period.
    pub fn new(title: impl Into<String>, frequency: Frequency, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            frequency,
            interval: 1,
            days_of_week: Vec::new(),
            days_of_month: Vec::new(),
            months_of_year: Vec::new(),
            start_date,
            end_date: None,
            never_ends: true,
            end_after_occurrences: None,
        }
    }

    pub fn with_interval(mut self, every: u32) -> Self {
        self.interval = every;
        self
    }

    pub fn on_days_of_week(mut self, days: &[u32]) -> Self {
        self.days_of_week = days.to_vec();
        self
    }

    pub fn on_days_of_month(mut self, days: &[u32]) -> Self {
        self.days_of_month = days.to_vec();
        self
    }

    pub fn in_months(mut self, months: &[u32]) -> Self {
        self.months_of_year = months.to_vec();
        self
    }

    pub fn until(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self.never_ends = false;
        self
    }

    /// Upper bound the pattern imposes on its own expansion: the explicit
    /// end date, or one year past the start for open-ended patterns.
    pub fn expansion_bound(&self) -> NaiveDate {
        match self.end_date {
            Some(end) => end,
            None => add_years(self.start_date, NEVER_ENDS_LOOKAHEAD_YEARS),
        }
    }
}

fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let month = date.month();
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_bound_prefers_end_date() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let pattern = RecurrencePattern::new("Rent", Frequency::Monthly, start).until(end);
        assert_eq!(pattern.expansion_bound(), end);
    }

    #[test]
    fn open_ended_bound_is_one_year_out() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let pattern = RecurrencePattern::new("Gym", Frequency::Weekly, start);
        // Leap day clamps to the last day of February the following year.
        assert_eq!(
            pattern.expansion_bound(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }
}
