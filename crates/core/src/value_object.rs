//! Value object trait: equality by value, not identity.
//!
//! Coordinates and capacity records are value objects: two of them with the
//! same attributes are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct LocationCoordinates { zone: String, aisle: String, rack: String, level: String }
///
/// impl ValueObject for LocationCoordinates {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
