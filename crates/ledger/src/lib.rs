//! Stock ledger module.
//!
//! This crate holds the in-memory ledger and its report rendering, implemented
//! purely as deterministic domain logic (no IO, no logging, no storage).

pub mod ledger;
pub mod report;

pub use ledger::{DEFAULT_LOW_STOCK_THRESHOLD, Removal, StockLedger};
