//! UnavailableStorage - models storage disabled by policy.

use super::{FavoritesStorage, StorageError};
use crate::movie::Movie;

/// Storage whose backing medium is entirely unavailable (the browser
/// analogue: persistence disabled by user or policy). Every operation
/// fails with [`StorageError::Unavailable`]; nothing ever panics. The
/// store above degrades to a purely in-memory session.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl FavoritesStorage for UnavailableStorage {
    fn load(&self) -> Result<Vec<Movie>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn save(&self, _movies: &[Movie]) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
