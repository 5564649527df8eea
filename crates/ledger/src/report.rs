//! Console report rendering.

use crate::StockLedger;

/// Render the stock listing, one ` name: count` line per entry in insertion
/// order, framed by a header and footer rule. An empty ledger renders an
/// explicit placeholder line instead. The caller prints the result as-is;
/// leading and trailing blank lines are part of the block.
pub fn render(ledger: &StockLedger) -> String {
    let mut out = String::from("\n--- Items Report ---\n");
    if ledger.is_empty() {
        out.push_str(" Stock is empty.\n");
    } else {
        for (name, count) in ledger.iter() {
            out.push_str(&format!(" {name}: {count}\n"));
        }
    }
    out.push_str("--------------------\n\n");
    out
}
