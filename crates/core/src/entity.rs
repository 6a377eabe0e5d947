//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A product record is the only entity in a feed: two records with the same
/// identifier describe the same offer, whatever their other attributes hold.
pub trait Entity {
    /// Identifier type.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, or `None` while it is still unset.
    fn id(&self) -> Option<&Self::Id>;
}
