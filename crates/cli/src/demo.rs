//! Scripted walkthrough of every ledger operation.

use std::path::Path;

use stockbook_ledger::{DEFAULT_LOW_STOCK_THRESHOLD, report};
use stockbook_store::stock_file;

use crate::commands;

/// Run the fixed demo sequence against the stock file at `path`.
///
/// Loads once, mutates in memory (including deliberately rejected inputs and
/// a removal of an absent item), prints the queries and reports, and saves
/// once at the end. Starting from an empty file it ends with apple at 7,
/// orange at 5, and banana removed entirely.
pub fn run(path: &Path) {
    let mut ledger = stock_file::load(path);

    print!("{}", report::render(&ledger));

    commands::add(&mut ledger, "apple", 10);
    commands::add(&mut ledger, "banana", 20);
    commands::add(&mut ledger, "orange", 5);

    // Rejected on purpose: a non-positive quantity, then a blank name.
    commands::add(&mut ledger, "apple", -5);
    commands::add(&mut ledger, "   ", 10);

    commands::remove(&mut ledger, "apple", 3);
    commands::remove(&mut ledger, "grape", 1);
    commands::remove(&mut ledger, "banana", 25);

    println!("Current apple stock: {}", ledger.quantity("apple"));
    println!(
        "Low items (threshold={DEFAULT_LOW_STOCK_THRESHOLD}): {:?}",
        ledger.low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
    );

    print!("{}", report::render(&ledger));

    stock_file::save(&ledger, path);

    tracing::info!("inventory check complete");
}
