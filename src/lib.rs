#![doc(test(attr(deny(warnings))))]

//! ArchiFinance Core offers the project financial ledger primitives that
//! power higher level project tracking workflows and UIs.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("ArchiFinance Core tracing initialized.");
    });
}
