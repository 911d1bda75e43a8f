#![doc(test(attr(deny(warnings))))]

//! FinanceWise Core provides the budget planning, health scoring, projection and
//! savings goal calculations behind the FinanceWise personal finance app, plus a
//! small session store for goals and transactions.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("FinanceWise core tracing initialized.");
    });
}
