//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two instances
/// with the same attribute values are interchangeable. [`ItemName`] and
/// [`Quantity`] are the value objects of this domain: a quantity of 5 is a
/// quantity of 5 regardless of where it came from.
///
/// The trait requires `Clone` (values are cheap to copy), `PartialEq`
/// (compared by value) and `Debug` (logging, testing).
///
/// [`ItemName`]: crate::item_name::ItemName
/// [`Quantity`]: crate::quantity::Quantity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
