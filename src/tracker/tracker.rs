use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TrackerError;

use super::{Category, Expense, FinancialGoal, RecurringExpense};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Categories seeded for a freshly created tracker.
const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food & Dining",
    "Housing & Rent",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Healthcare",
];

/// Aggregate root holding every record the calendar and summaries are
/// derived from. Mutations bump `updated_at`; nothing here persists itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracker {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub recurring_expenses: Vec<RecurringExpense>,
    #[serde(default)]
    pub goals: Vec<FinancialGoal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Tracker::schema_version_default")]
    pub schema_version: u8,
}

impl Tracker {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            expenses: Vec::new(),
            categories: Vec::new(),
            recurring_expenses: Vec::new(),
            goals: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Creates a tracker pre-seeded with the default category set.
    pub fn with_default_categories(name: impl Into<String>) -> Self {
        let mut tracker = Self::new(name);
        tracker.categories = DEFAULT_CATEGORIES
            .iter()
            .map(|name| Category::new(*name, 0.0))
            .collect();
        tracker
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        tracing::debug!(expense = %id, "expense added");
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn update_expense(&mut self, updated: Expense) -> Result<(), TrackerError> {
        match self.expenses.iter_mut().find(|e| e.id == updated.id) {
            Some(existing) => {
                *existing = updated;
                self.touch();
                Ok(())
            }
            None => Err(TrackerError::InvalidRef(format!(
                "expense `{}` not found",
                updated.id
            ))),
        }
    }

    pub fn remove_expense(&mut self, id: Uuid) -> Result<(), TrackerError> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            return Err(TrackerError::InvalidRef(format!(
                "expense `{}` not found",
                id
            )));
        }
        tracing::debug!(expense = %id, "expense removed");
        self.touch();
        Ok(())
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        self.touch();
        id
    }

    pub fn remove_category(&mut self, id: Uuid) -> Result<(), TrackerError> {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == before {
            return Err(TrackerError::InvalidRef(format!(
                "category `{}` not found",
                id
            )));
        }
        self.touch();
        Ok(())
    }

    pub fn add_recurring_expense(&mut self, template: RecurringExpense) -> Uuid {
        let id = template.id;
        self.recurring_expenses.push(template);
        self.touch();
        id
    }

    pub fn remove_recurring_expense(&mut self, id: Uuid) -> Result<(), TrackerError> {
        let before = self.recurring_expenses.len();
        self.recurring_expenses.retain(|r| r.id != id);
        if self.recurring_expenses.len() == before {
            return Err(TrackerError::InvalidRef(format!(
                "recurring expense `{}` not found",
                id
            )));
        }
        self.touch();
        Ok(())
    }

    pub fn add_goal(&mut self, goal: FinancialGoal) -> Uuid {
        let id = goal.id;
        self.goals.push(goal);
        self.touch();
        id
    }

    pub fn update_goal(&mut self, updated: FinancialGoal) -> Result<(), TrackerError> {
        match self.goals.iter_mut().find(|g| g.id == updated.id) {
            Some(existing) => {
                *existing = updated;
                self.touch();
                Ok(())
            }
            None => Err(TrackerError::InvalidRef(format!(
                "goal `{}` not found",
                updated.id
            ))),
        }
    }

    pub fn remove_goal(&mut self, id: Uuid) -> Result<(), TrackerError> {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        if self.goals.len() == before {
            return Err(TrackerError::InvalidRef(format!("goal `{}` not found", id)));
        }
        self.touch();
        Ok(())
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Sum of expense amounts per category name. Uncategorised expenses are
    /// skipped.
    pub fn spent_by_category(&self) -> HashMap<String, f64> {
        let mut totals: HashMap<String, f64> = HashMap::new();
        for expense in &self.expenses {
            if let Some(category) = &expense.category {
                *totals.entry(category.clone()).or_default() += expense.amount;
            }
        }
        totals
    }

    /// Like [`Tracker::spent_by_category`], restricted to one calendar month.
    pub fn spent_by_category_in_month(&self, year: i32, month: u32) -> HashMap<String, f64> {
        let mut totals: HashMap<String, f64> = HashMap::new();
        for expense in &self.expenses {
            if expense.date.year() != year || expense.date.month() != month {
                continue;
            }
            if let Some(category) = &expense.category {
                *totals.entry(category.clone()).or_default() += expense.amount;
            }
        }
        totals
    }

    /// Remaining budget for a category in the given calendar month, or
    /// `None` when the category is unknown or has no budget set. Budgets
    /// are monthly guardrails, so only that month's spending counts.
    pub fn budget_remaining(&self, name: &str, year: i32, month: u32) -> Option<f64> {
        let category = self.category(name)?;
        if category.budget <= 0.0 {
            return None;
        }
        let spent = self
            .spent_by_category_in_month(year, month)
            .get(name)
            .copied()
            .unwrap_or(0.0);
        Some(category.budget - spent)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn default_categories_are_seeded() {
        let tracker = Tracker::with_default_categories("Personal");
        assert_eq!(tracker.categories.len(), 6);
        assert!(tracker.category("Healthcare").is_some());
    }

    #[test]
    fn budget_remaining_accounts_for_spending() {
        let mut tracker = Tracker::new("Budgeted");
        tracker.add_category(Category::new("Groceries", 400.0));
        let date = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        tracker.add_expense(Expense::new("Weekly shop", 85.5, date).with_category("Groceries"));
        assert_eq!(tracker.budget_remaining("Groceries", 2025, 2), Some(314.5));
        assert_eq!(tracker.budget_remaining("Unknown", 2025, 2), None);
    }

    #[test]
    fn budget_remaining_is_scoped_to_one_month() {
        let mut tracker = Tracker::new("Budgeted");
        tracker.add_category(Category::new("Groceries", 400.0));
        let january = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let february = NaiveDate::from_ymd_opt(2025, 2, 5).unwrap();
        tracker.add_expense(Expense::new("January shop", 300.0, january).with_category("Groceries"));
        tracker.add_expense(Expense::new("February shop", 50.0, february).with_category("Groceries"));
        // Last month's spending must not consume this month's budget.
        assert_eq!(tracker.budget_remaining("Groceries", 2025, 2), Some(350.0));
        assert_eq!(tracker.budget_remaining("Groceries", 2025, 1), Some(100.0));
    }
}
