//! CLI argument definitions for stockbook.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stockbook_ledger::DEFAULT_LOW_STOCK_THRESHOLD;
use stockbook_store::DEFAULT_STOCK_FILE;

#[derive(Parser)]
#[command(name = "stockbook")]
#[command(version)]
#[command(about = "Single-user inventory ledger", long_about = None)]
pub struct Cli {
    /// Stock file to load and save
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_STOCK_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add units of an item to stock
    Add {
        /// Item name
        item: String,
        /// Units to add (must be a positive integer)
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Remove units of an item from stock
    ///
    /// Removing at least as many units as are on hand deletes the item.
    Remove {
        /// Item name
        item: String,
        /// Units to remove (must be a positive integer)
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Print the count on hand for an item (zero when absent)
    Qty {
        /// Item name
        item: String,
    },
    /// List items at or below a low-stock threshold, one per line
    Low {
        /// Highest count still reported as low stock
        #[arg(long, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
        threshold: u64,
    },
    /// Print the full stock report
    Report,
    /// Run the scripted walkthrough of every ledger operation
    Demo,
}
