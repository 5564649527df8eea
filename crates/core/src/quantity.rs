//! Validated stock quantity.

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A strictly positive number of units to add or remove.
///
/// Constructed from a signed integer so that zero and negative requests are
/// rejected with a domain error at the API boundary; non-integer input never
/// gets this far because the CLI parses arguments as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u64);

impl Quantity {
    /// Validate and wrap a quantity.
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::validation(
                "quantity must be a positive integer",
            ));
        }
        Ok(Self(value as u64))
    }

    /// The number of units.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
