use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::pattern::RecurrencePattern;

/// Template for an expense that repeats on a schedule.
///
/// The template surfaces on the calendar as a single event anchored at
/// `next_due_date`; full expansion only happens for patterns registered
/// with the calendar itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringExpense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub next_due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<RecurrencePattern>,
}

impl RecurringExpense {
    pub fn new(description: impl Into<String>, amount: f64, next_due_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            category: None,
            next_due_date,
            pattern: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_pattern(mut self, pattern: RecurrencePattern) -> Self {
        self.pattern = Some(pattern);
        self
    }
}
