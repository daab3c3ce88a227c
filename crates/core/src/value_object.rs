//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// create a new one with the new values. `Yen` and a drink unit are value
/// objects; a stock entry, which keeps its identity while its queue changes,
/// is not.
///
/// The trait requires `Clone` (values are cheap to copy), `PartialEq`
/// (compared by attribute values), and `Debug` (loggable, testable).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
