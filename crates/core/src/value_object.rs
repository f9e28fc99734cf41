//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two with the same attributes are equal.
/// Prices and stock levels are modelled this way: replacing one means
/// constructing a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
