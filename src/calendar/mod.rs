//! Calendar core: event normalization, recurrence expansion, aggregation,
//! and status classification.

pub mod aggregate;
pub mod event;
pub mod expand;
pub mod normalize;
pub mod pattern;
pub mod status;
pub mod view;

pub use aggregate::{events_for_day, upcoming_events, DEFAULT_UPCOMING_LIMIT};
pub use event::{Event, EventDetails, EventKind};
pub use expand::{expand, expand_events, Occurrence};
pub use normalize::normalize_events;
pub use pattern::{Frequency, RecurrencePattern};
pub use status::EventStatus;
pub use view::FinancialCalendar;
