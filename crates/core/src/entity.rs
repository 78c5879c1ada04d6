//! Entity trait: objects compared by identity, not by field values.
//!
//! A product whose qty changed is still the same product; a cart whose contents
//! changed is still the same cart.

/// Anything with a stable identifier.
pub trait Entity {
    /// Strongly-typed identifier (`ProductId`, `CartId`).
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// True when both values refer to the same stored record.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
