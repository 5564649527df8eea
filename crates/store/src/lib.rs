//! JSON file persistence for the stock ledger.
//!
//! Two layers: the strict [`stock_file::read`] / [`stock_file::write`] pair
//! that reports failures, and the recovering [`stock_file::load`] /
//! [`stock_file::save`] pair that degrades to an empty ledger or a no-op and
//! logs the failure instead.

pub mod stock_file;

pub use stock_file::{DEFAULT_STOCK_FILE, StoreError};
