//! Domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model and the validated value objects the ledger is keyed by.

pub mod error;
pub mod item_name;
pub mod quantity;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use item_name::ItemName;
pub use quantity::Quantity;
pub use value_object::ValueObject;
