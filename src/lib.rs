#![doc(test(attr(deny(warnings))))]

//! Dreampilot offers the budgeting primitives behind a savings-goal tracker:
//! budget categories normalized across recurrence periods, ad-hoc income,
//! expenses, reserves, and progress signals toward named dreams.

pub mod core;
pub mod currency;
pub mod domain;
pub mod import;
pub mod quotes;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Dreampilot tracing initialized.");
    });
}
