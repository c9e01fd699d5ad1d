//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Locations are entities: two snapshots with the same `LocationId` describe
/// the same physical slot even when their capacity differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
