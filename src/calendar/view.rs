use chrono::{NaiveDate, NaiveDateTime};

use crate::tracker::{Expense, FinancialGoal, RecurringExpense, Reminder, Tracker};

use super::aggregate;
use super::event::{Event, EventKind};
use super::expand;
use super::normalize;
use super::pattern::RecurrencePattern;
use super::status::EventStatus;

/// Recompute-on-change pipeline behind the calendar surface.
///
/// Holds the source records plus the active display filters, and rebuilds
/// the combined event list whenever a source changes. Filters apply at
/// query time and do not touch the cache, so toggling a kind or editing
/// the search text is free. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct FinancialCalendar {
    expenses: Vec<Expense>,
    recurring_expenses: Vec<RecurringExpense>,
    goals: Vec<FinancialGoal>,
    reminders: Vec<Reminder>,
    patterns: Vec<RecurrencePattern>,
    enabled_kinds: Vec<EventKind>,
    search_query: String,
    events: Vec<Event>,
}

impl FinancialCalendar {
    /// Starts empty with expenses, recurring entries, and reminders
    /// visible; goals stay hidden until toggled on.
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            recurring_expenses: Vec::new(),
            goals: Vec::new(),
            reminders: Vec::new(),
            patterns: Vec::new(),
            enabled_kinds: vec![EventKind::Expense, EventKind::Recurring, EventKind::Reminder],
            search_query: String::new(),
            events: Vec::new(),
        }
    }

    /// Replaces the financial source records and recomputes.
    pub fn set_sources(
        &mut self,
        expenses: Vec<Expense>,
        recurring_expenses: Vec<RecurringExpense>,
        goals: Vec<FinancialGoal>,
    ) {
        self.expenses = expenses;
        self.recurring_expenses = recurring_expenses;
        self.goals = goals;
        self.recompute();
    }

    /// Pulls the source records from a tracker and recomputes.
    pub fn sync_from_tracker(&mut self, tracker: &Tracker) {
        self.set_sources(
            tracker.expenses.clone(),
            tracker.recurring_expenses.clone(),
            tracker.goals.clone(),
        );
    }

    pub fn add_reminder(&mut self, reminder: Reminder) {
        self.reminders.push(reminder);
        self.recompute();
    }

    pub fn add_pattern(&mut self, pattern: RecurrencePattern) {
        tracing::debug!(pattern = %pattern.id, "registered recurring pattern");
        self.patterns.push(pattern);
        self.recompute();
    }

    /// Flips visibility of one event kind.
    pub fn toggle_kind(&mut self, kind: EventKind) {
        if self.enabled_kinds.contains(&kind) {
            self.enabled_kinds.retain(|k| *k != kind);
        } else {
            self.enabled_kinds.push(kind);
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn enabled_kinds(&self) -> &[EventKind] {
        &self.enabled_kinds
    }

    /// The full unfiltered event list from the last recompute.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events on `day`, after the kind and search filters.
    pub fn events_for_day(&self, day: NaiveDate) -> Vec<Event> {
        aggregate::events_for_day(&self.events, day, &self.enabled_kinds, &self.search_query)
    }

    /// The next `limit` events after `now`, ascending by date.
    pub fn upcoming_events(&self, now: NaiveDateTime, limit: usize) -> Vec<Event> {
        aggregate::upcoming_events(&self.events, now, limit)
    }

    pub fn classify(&self, event: &Event, now: NaiveDateTime) -> EventStatus {
        EventStatus::classify(event.date, now)
    }

    fn recompute(&mut self) {
        let mut events = normalize::normalize_events(
            &self.expenses,
            &self.recurring_expenses,
            &self.goals,
            &self.reminders,
        );
        for pattern in &self.patterns {
            events.extend(expand::expand_events(pattern, pattern.expansion_bound()));
        }
        self.events = events;
        tracing::trace!(count = self.events.len(), "recomputed calendar events");
    }
}

impl Default for FinancialCalendar {
    fn default() -> Self {
        Self::new()
    }
}
