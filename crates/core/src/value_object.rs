//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value; filter criteria, prices and price ranges in this
/// workspace all follow that rule.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price(u64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(4500), Price(4500));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
