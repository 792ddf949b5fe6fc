//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// `Price(19.99)` is a value object; a `Product` is not, since two products
/// with the same fields but different ids are distinct.
///
/// Value objects are immutable. To "modify" one (e.g. reprice a product),
/// build a new value and swap it in on the owning entity.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Weight(Decimal);
///
/// impl ValueObject for Weight {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
