//! Tracker domain models, persistence-friendly types, and helpers.

pub mod expense;
pub mod goal;
pub mod recurring;
pub mod reminder;
#[allow(clippy::module_inception)]
pub mod tracker;

pub use expense::{Category, Expense};
pub use goal::{FinancialGoal, Milestone, Priority};
pub use recurring::RecurringExpense;
pub use reminder::Reminder;
pub use tracker::Tracker;
