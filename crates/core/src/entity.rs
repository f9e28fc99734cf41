//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Store operations locate and remove records through this identity, never
/// through structural equality.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Display name used by lookups and search.
    fn name(&self) -> &str;
}
