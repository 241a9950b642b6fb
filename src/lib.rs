#![doc(test(attr(deny(warnings))))]

//! Expense Core offers foundational expense tracking, recurrence, and
//! calendar primitives that power higher level personal finance workflows.

pub mod calendar;
pub mod config;
pub mod errors;
pub mod storage;
pub mod tracker;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
