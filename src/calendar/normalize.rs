use chrono::NaiveTime;

use crate::tracker::{Expense, FinancialGoal, RecurringExpense, Reminder};

use super::event::{Event, EventDetails};

/// Flattens heterogeneous tracker records into the uniform event
/// representation consumed by the aggregator.
///
/// Pure function of its inputs: ids are derived from the source record ids,
/// missing optionals stay absent, and nothing is validated here. Recurring
/// templates contribute a single event anchored at their next due date;
/// pattern-driven expansion happens separately in [`super::expand`].
pub fn normalize_events(
    expenses: &[Expense],
    recurring: &[RecurringExpense],
    goals: &[FinancialGoal],
    reminders: &[Reminder],
) -> Vec<Event> {
    let mut events =
        Vec::with_capacity(expenses.len() + recurring.len() + goals.len() + reminders.len());

    for expense in expenses {
        events.push(Event {
            id: format!("expense-{}", expense.id),
            date: expense.date.and_time(NaiveTime::MIN),
            title: expense.description.clone(),
            details: EventDetails::Expense {
                amount: expense.amount,
                category: expense.category.clone(),
            },
        });
    }

    for template in recurring {
        events.push(Event {
            id: format!("recurring-{}", template.id),
            date: template.next_due_date.and_time(NaiveTime::MIN),
            title: template.description.clone(),
            details: EventDetails::Recurring {
                amount: Some(template.amount),
                category: template.category.clone(),
            },
        });
    }

    for goal in goals {
        events.push(Event {
            id: format!("goal-{}", goal.id),
            date: goal.target_date.and_time(NaiveTime::MIN),
            title: goal.name.clone(),
            details: EventDetails::Goal {
                target_amount: goal.target_amount,
                current_amount: goal.current_amount,
                category: goal.category.clone(),
                priority: goal.priority,
                milestones: goal.milestones.clone(),
            },
        });
    }

    for reminder in reminders {
        events.push(Event {
            id: format!("reminder-{}", reminder.id),
            date: reminder.date,
            title: reminder.title.clone(),
            details: EventDetails::Reminder {
                priority: reminder.priority,
                description: reminder.description.clone(),
            },
        });
    }

    events
}
