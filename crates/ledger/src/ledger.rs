use indexmap::IndexMap;
use serde::Serialize;

use stockbook_core::{DomainError, DomainResult, ItemName, Quantity};

/// Threshold at or below which an item counts as low stock, unless the
/// caller picks another one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Outcome of a successful removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The request covered the full count on hand, so the entry was deleted.
    All {
        /// Units that were on hand before deletion.
        on_hand: u64,
    },
    /// The count was decremented and the entry survives.
    Partial { removed: u64, remaining: u64 },
}

/// In-memory stock ledger: item name to units on hand.
///
/// Invariant: every stored count is strictly positive. An entry whose count
/// would reach zero is deleted instead, so `contains` doubles as an
/// "in stock" check. Iteration, reports, and serialized output all follow
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StockLedger {
    items: IndexMap<ItemName, u64>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from raw `(name, count)` pairs, e.g. a decoded stock
    /// file. Fails on the first pair that violates the ledger rules (blank
    /// name or zero count); later pairs with the same name overwrite earlier
    /// ones, matching JSON object semantics.
    pub fn from_entries<I>(entries: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut items = IndexMap::new();
        for (name, count) in entries {
            let name = ItemName::new(name)?;
            if count == 0 {
                return Err(DomainError::validation(
                    "quantity must be a positive integer",
                ));
            }
            items.insert(name, count);
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Units on hand for `name`; zero when the item is not stocked.
    pub fn quantity(&self, name: &str) -> u64 {
        self.items.get(name).copied().unwrap_or(0)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, u64)> {
        self.items.iter().map(|(name, count)| (name, *count))
    }

    /// Add `qty` units of `name`, creating the entry when absent.
    ///
    /// Accumulation saturates at `u64::MAX` rather than wrapping. Returns
    /// the new total on hand.
    pub fn add(&mut self, name: &ItemName, qty: Quantity) -> u64 {
        if let Some(count) = self.items.get_mut(name.as_str()) {
            *count = count.saturating_add(qty.get());
            *count
        } else {
            self.items.insert(name.clone(), qty.get());
            qty.get()
        }
    }

    /// Remove `qty` units of `name`.
    ///
    /// Removing at least as many units as are on hand deletes the entry
    /// rather than leaving a zero count behind. Removing from an absent item
    /// fails with [`DomainError::NotFound`] and changes nothing.
    pub fn remove(&mut self, name: &ItemName, qty: Quantity) -> DomainResult<Removal> {
        let on_hand = match self.items.get(name.as_str()).copied() {
            Some(count) => count,
            None => return Err(DomainError::not_found()),
        };

        if on_hand <= qty.get() {
            // shift_remove keeps the insertion order of the survivors.
            self.items.shift_remove(name.as_str());
            Ok(Removal::All { on_hand })
        } else {
            let remaining = on_hand - qty.get();
            if let Some(count) = self.items.get_mut(name.as_str()) {
                *count = remaining;
            }
            Ok(Removal::Partial {
                removed: qty.get(),
                remaining,
            })
        }
    }

    /// Names of items whose count is at or below `threshold`, in insertion
    /// order.
    pub fn low_stock(&self, threshold: u64) -> Vec<&str> {
        self.items
            .iter()
            .filter(|(_, count)| **count <= threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
