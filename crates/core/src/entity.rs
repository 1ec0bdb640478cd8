//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Look up an entity by id in a slice of session state.
pub fn find_by_id<E: Entity>(items: &[E], id: E::Id) -> Option<&E> {
    items.iter().find(|item| item.id() == id)
}

/// Position of an entity within a slice of session state.
pub fn position_of<E: Entity>(items: &[E], id: E::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
