//! InMemoryStorage - a string-valued slot for tests and development.

use std::sync::{Arc, RwLock};

use super::{FavoritesStorage, StorageError};
use crate::movie::Movie;

/// In-memory storage holding the slot exactly as a browser KV store would:
/// an optional raw string. Clone-friendly via `Arc`, so a test can keep a
/// handle to the slot while the store owns the adapter.
///
/// `with_raw` seeds the slot with arbitrary (possibly corrupt) content,
/// which is how load-resilience is exercised without touching a filesystem.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    slot: Arc<RwLock<Option<String>>>,
}

impl InMemoryStorage {
    /// New storage with an absent slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// New storage whose slot already holds `raw`, verbatim.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        InMemoryStorage {
            slot: Arc::new(RwLock::new(Some(raw.into()))),
        }
    }

    /// The raw slot content, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl FavoritesStorage for InMemoryStorage {
    fn load(&self) -> Result<Vec<Movie>, StorageError> {
        let slot = self.slot.read().unwrap_or_else(|e| e.into_inner());
        match slot.as_deref() {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(raw).map_err(|e| StorageError::Corrupt(e.to_string())),
        }
    }

    fn save(&self, movies: &[Movie]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(movies).map_err(|e| StorageError::Serde(e.to_string()))?;
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
