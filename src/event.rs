use crate::movie::Movie;

/// Broadcast signal that the favorites collection changed.
///
/// The payload is a hint for convenience (a badge can render `count`
/// without a round trip); subscribers that need authoritative state must
/// re-read it from the store.
#[derive(Clone, Debug, PartialEq)]
pub enum FavoritesChange {
    /// Initial hydration from durable storage completed (or failed and
    /// fell back to empty).
    Loaded { count: usize },
    /// A movie was appended to the collection.
    Added { movie: Movie, count: usize },
    /// A movie was removed from the collection.
    Removed { id: u64, count: usize },
    /// The collection was emptied.
    Cleared,
}

impl FavoritesChange {
    /// The collection size after the change.
    pub fn count(&self) -> usize {
        match self {
            FavoritesChange::Loaded { count } => *count,
            FavoritesChange::Added { count, .. } => *count,
            FavoritesChange::Removed { count, .. } => *count,
            FavoritesChange::Cleared => 0,
        }
    }
}
