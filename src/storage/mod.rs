//! Durable storage adapters for the favorites collection.
//!
//! The collection lives in a single named slot whose value is a JSON array
//! of movie records. Adapters must tolerate the slot being absent (an empty
//! collection, not an error), the slot holding unparseable content (reported
//! as [`StorageError::Corrupt`] so the store can fall back to empty), and
//! the backing medium being entirely unavailable. None of this may panic.

mod in_memory;
mod json_file;
mod unavailable;

use std::fmt;

use crate::movie::Movie;

pub use in_memory::InMemoryStorage;
pub use json_file::{JsonFileStorage, DEFAULT_SLOT};
pub use unavailable::UnavailableStorage;

/// Error type for durable storage operations.
///
/// Callers above the adapter boundary absorb these: a failed load degrades
/// to an empty collection, a failed save leaves the in-memory state
/// authoritative for the rest of the session. Nothing here reaches the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The slot held content that does not parse as a movie array.
    Corrupt(String),
    /// The backing medium failed (read/write/remove).
    Io(String),
    /// The collection could not be serialized.
    Serde(String),
    /// The backing medium is not available in this execution context.
    Unavailable,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Corrupt(msg) => write!(f, "stored favorites are corrupt: {}", msg),
            StorageError::Io(msg) => write!(f, "storage io error: {}", msg),
            StorageError::Serde(msg) => write!(f, "favorites serialization error: {}", msg),
            StorageError::Unavailable => write!(f, "storage is unavailable"),
        }
    }
}

impl std::error::Error for StorageError {}

/// A durable slot holding the serialized favorites collection.
///
/// Implementations own exactly one named slot and have no side effects
/// beyond it. `save` is a full overwrite; there is no partial update.
pub trait FavoritesStorage: Send + Sync {
    /// Read the slot. An absent slot is an empty collection.
    fn load(&self) -> Result<Vec<Movie>, StorageError>;

    /// Overwrite the slot with a full serialization of `movies`.
    fn save(&self, movies: &[Movie]) -> Result<(), StorageError>;

    /// Remove the slot entirely. Removing an absent slot succeeds.
    fn clear(&self) -> Result<(), StorageError>;
}
