//! Entity trait: identity + continuity across state changes.

/// Minimal interface for domain objects that are tracked by identity.
///
/// Catalog items keep the same uid across every stock mutation; two items
/// with the same uid are the same item.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when this entity carries the given identifier.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
