//! JsonFileStorage - the durable slot as a JSON file on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{FavoritesStorage, StorageError};
use crate::movie::Movie;

/// Default slot name, matching the key the dashboard has always used.
pub const DEFAULT_SLOT: &str = "movies-dashboard-favorites.json";

/// File-backed storage: one JSON file holding the favorites array.
///
/// A missing file loads as an empty collection. A file that exists but does
/// not parse as a movie array loads as [`StorageError::Corrupt`].
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    /// Storage at the default slot name inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        JsonFileStorage {
            path: dir.as_ref().join(DEFAULT_SLOT),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Movie>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };
        serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    fn save(&self, movies: &[Movie]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(movies).map_err(|e| StorageError::Serde(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
        }
        fs::write(&self.path, raw).map_err(|e| StorageError::Io(e.to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.into(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 0.0,
            vote_count: 0,
            genre_ids: Vec::new(),
            popularity: 0.0,
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::in_dir(dir.path());
        assert_eq!(storage.load().unwrap(), Vec::new());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::in_dir(dir.path());
        let movies = vec![movie(1, "A"), movie(2, "B")];

        storage.save(&movies).unwrap();
        assert_eq!(storage.load().unwrap(), movies);
    }

    #[test]
    fn garbage_content_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::in_dir(dir.path());
        fs::write(storage.path(), "not json").unwrap();

        assert!(matches!(storage.load(), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn valid_json_wrong_shape_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::in_dir(dir.path());
        fs::write(storage.path(), r#"{"id": 1}"#).unwrap();

        assert!(matches!(storage.load(), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn clear_removes_slot_and_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::in_dir(dir.path());

        storage.save(&[movie(1, "A")]).unwrap();
        storage.clear().unwrap();
        assert_eq!(storage.load().unwrap(), Vec::new());

        // Clearing an already-absent slot is fine.
        storage.clear().unwrap();
    }
}
