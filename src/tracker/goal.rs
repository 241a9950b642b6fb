use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Urgency attached to goals and reminders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Intermediate checkpoint on the way to a goal's target amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    pub id: Uuid,
    pub label: String,
    pub amount: f64,
    #[serde(default)]
    pub reached: bool,
}

impl Milestone {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            amount,
            reached: false,
        }
    }
}

/// A savings or spending target with a deadline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialGoal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl FinancialGoal {
    pub fn new(name: impl Into<String>, target_amount: f64, target_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            category: None,
            target_date,
            priority: Priority::default(),
            milestones: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Fraction of the target reached, clamped to `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount).clamp(0.0, 1.0)
    }

    /// Records saved progress and marks any milestones the new total covers.
    pub fn add_progress(&mut self, amount: f64) {
        self.current_amount += amount;
        for milestone in &mut self.milestones {
            if !milestone.reached && self.current_amount >= milestone.amount {
                milestone.reached = true;
            }
        }
    }

    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_to_unit_range() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let mut goal = FinancialGoal::new("Emergency fund", 1000.0, date);
        assert_eq!(goal.progress(), 0.0);
        goal.add_progress(250.0);
        assert_eq!(goal.progress(), 0.25);
        goal.add_progress(2000.0);
        assert_eq!(goal.progress(), 1.0);
        assert!(goal.is_reached());
    }

    #[test]
    fn milestones_flip_when_covered() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut goal = FinancialGoal::new("Vacation", 600.0, date);
        goal.milestones.push(Milestone::new("Halfway", 300.0));
        goal.add_progress(299.0);
        assert!(!goal.milestones[0].reached);
        goal.add_progress(1.0);
        assert!(goal.milestones[0].reached);
    }
}
