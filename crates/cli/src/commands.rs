//! Command implementations.
//!
//! The mutation handlers carry the observable logging contract: rejected
//! input is a warning, a missing item on removal is an error, successful
//! mutations are info records. None of these failures propagate; the command
//! degrades to a no-op and the process still exits cleanly.

use stockbook_core::{ItemName, Quantity};
use stockbook_ledger::{Removal, StockLedger, report};
use stockbook_store::stock_file;

use crate::cli::{Cli, Commands};

/// Add `qty` units of `item`.
///
/// Returns true when the ledger changed, so callers can skip a needless
/// save. Rejected input leaves the ledger untouched.
pub fn add(ledger: &mut StockLedger, item: &str, qty: i64) -> bool {
    let name = match ItemName::new(item) {
        Ok(name) => name,
        Err(err) => {
            tracing::warn!("invalid item name {item:?}: {err}");
            return false;
        }
    };
    let qty = match Quantity::new(qty) {
        Ok(qty) => qty,
        Err(err) => {
            tracing::warn!("invalid quantity {qty}: {err}");
            return false;
        }
    };

    let total = ledger.add(&name, qty);
    tracing::info!("added {qty} of {name}, new total {total}");
    true
}

/// Remove `qty` units of `item`.
///
/// Returns true when the ledger changed. Rejected input is a warning and a
/// missing item an error; both leave the ledger untouched.
pub fn remove(ledger: &mut StockLedger, item: &str, qty: i64) -> bool {
    let name = match ItemName::new(item) {
        Ok(name) => name,
        Err(err) => {
            tracing::warn!("invalid item name {item:?}: {err}");
            return false;
        }
    };
    let qty = match Quantity::new(qty) {
        Ok(qty) => qty,
        Err(err) => {
            tracing::warn!("invalid quantity {qty}: {err}");
            return false;
        }
    };

    match ledger.remove(&name, qty) {
        Ok(Removal::All { on_hand }) => {
            tracing::info!("removed all {on_hand} of {name} (attempted to remove {qty})");
            true
        }
        Ok(Removal::Partial { removed, remaining }) => {
            tracing::info!("removed {removed} of {name}, new total {remaining}");
            true
        }
        Err(err) => {
            tracing::error!("failed to remove {item:?}: {err}");
            false
        }
    }
}

/// Dispatch a parsed command line.
///
/// Each mutation loads the stock file, applies the command, and saves only
/// when the ledger changed; queries load and print.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let path = cli.file;
    match cli.command {
        Commands::Add { item, qty } => {
            let mut ledger = stock_file::load(&path);
            if add(&mut ledger, &item, qty) {
                stock_file::save(&ledger, &path);
            }
        }
        Commands::Remove { item, qty } => {
            let mut ledger = stock_file::load(&path);
            if remove(&mut ledger, &item, qty) {
                stock_file::save(&ledger, &path);
            }
        }
        Commands::Qty { item } => {
            let ledger = stock_file::load(&path);
            println!("{}", ledger.quantity(&item));
        }
        Commands::Low { threshold } => {
            let ledger = stock_file::load(&path);
            for name in ledger.low_stock(threshold) {
                println!("{name}");
            }
        }
        Commands::Report => {
            let ledger = stock_file::load(&path);
            print!("{}", report::render(&ledger));
        }
        Commands::Demo => crate::demo::run(&path),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> StockLedger {
        let mut ledger = StockLedger::new();
        add(&mut ledger, "apple", 10);
        ledger
    }

    #[test]
    fn add_reports_change_and_accumulates() {
        let mut ledger = seeded();
        assert!(add(&mut ledger, "apple", 5));
        assert_eq!(ledger.quantity("apple"), 15);
    }

    #[test]
    fn rejected_add_reports_no_change() {
        let mut ledger = seeded();

        assert!(!add(&mut ledger, "apple", 0));
        assert!(!add(&mut ledger, "apple", -5));
        assert!(!add(&mut ledger, "   ", 10));

        assert_eq!(ledger.quantity("apple"), 10);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn remove_reports_change_for_partial_and_full_removal() {
        let mut ledger = seeded();

        assert!(remove(&mut ledger, "apple", 3));
        assert_eq!(ledger.quantity("apple"), 7);

        assert!(remove(&mut ledger, "apple", 25));
        assert!(!ledger.contains("apple"));
    }

    #[test]
    fn remove_of_absent_or_invalid_input_reports_no_change() {
        let mut ledger = seeded();

        assert!(!remove(&mut ledger, "grape", 1));
        assert!(!remove(&mut ledger, "apple", -1));
        assert!(!remove(&mut ledger, "", 1));

        assert_eq!(ledger.quantity("apple"), 10);
    }
}
