use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::tracker::{Milestone, Priority};

use super::status::EventStatus;

/// Discriminates the source record a calendar event was derived from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Expense,
    Recurring,
    Goal,
    Reminder,
}

/// Per-kind payload carried alongside the common event fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum EventDetails {
    Expense {
        amount: f64,
        category: Option<String>,
    },
    Recurring {
        amount: Option<f64>,
        category: Option<String>,
    },
    Goal {
        target_amount: f64,
        current_amount: f64,
        category: Option<String>,
        priority: Priority,
        milestones: Vec<Milestone>,
    },
    Reminder {
        priority: Priority,
        description: Option<String>,
    },
}

/// A normalized, dated, displayable unit derived from an expense, recurring
/// template, goal, or reminder.
///
/// Events carry no identity beyond the derivation rule baked into `id` and
/// are recomputed from the underlying records on every pass, so building
/// the same inputs twice yields identical events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub date: NaiveDateTime,
    pub title: String,
    pub details: EventDetails,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self.details {
            EventDetails::Expense { .. } => EventKind::Expense,
            EventDetails::Recurring { .. } => EventKind::Recurring,
            EventDetails::Goal { .. } => EventKind::Goal,
            EventDetails::Reminder { .. } => EventKind::Reminder,
        }
    }

    /// Monetary value attached to the event, when one applies. Goals report
    /// their target amount.
    pub fn amount(&self) -> Option<f64> {
        match &self.details {
            EventDetails::Expense { amount, .. } => Some(*amount),
            EventDetails::Recurring { amount, .. } => *amount,
            EventDetails::Goal { target_amount, .. } => Some(*target_amount),
            EventDetails::Reminder { .. } => None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match &self.details {
            EventDetails::Expense { category, .. }
            | EventDetails::Recurring { category, .. }
            | EventDetails::Goal { category, .. } => category.as_deref(),
            EventDetails::Reminder { .. } => None,
        }
    }

    /// Urgency bucket relative to `now`.
    pub fn status(&self, now: NaiveDateTime) -> EventStatus {
        EventStatus::classify(self.date, now)
    }
}
