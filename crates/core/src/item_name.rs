//! Validated item identifier.

use core::borrow::Borrow;

use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Name of a stocked item.
///
/// The only rule is that a name must contain at least one non-whitespace
/// character. The stored string is kept exactly as entered: comparison is
/// case-sensitive and untrimmed, so `"Apple"`, `"apple"` and `"apple "` name
/// three distinct items.
///
/// There is deliberately no `Deserialize` impl; rehydration goes through
/// [`ItemName::new`] so persisted data cannot bypass validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Validate and wrap an item name.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation(
                "item name must be a non-empty string",
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Lets maps keyed by `ItemName` be probed with a plain `&str`.
impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
