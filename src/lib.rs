//! Cinemarks - favorites core for a movie discovery dashboard.
//!
//! One session-wide [`FavoritesStore`] owns the ordered, id-unique
//! collection of bookmarked movies. It hydrates from a durable slot at
//! session start, writes a full snapshot back on every mutation, and
//! announces each change on a [`ChangeChannel`] so surfaces anywhere in the
//! UI (badge, listing, stats) stay consistent without holding references to
//! each other. Storage trouble never reaches the caller: corruption loads
//! as empty, failed saves are logged and the in-memory state stays
//! authoritative.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use cinemarks::{CounterBadge, FavoritesStore, InMemoryStorage, Movie, Toggled};
//!
//! let store = Arc::new(FavoritesStore::new(Box::new(InMemoryStorage::new())));
//! let badge = CounterBadge::mount(&store);
//! store.initialize();
//!
//! // Movies arrive as JSON records from the external data source.
//! let movie: Movie =
//!     serde_json::from_str(r#"{"id": 550, "title": "Fight Club"}"#).unwrap();
//! assert_eq!(store.toggle(movie), Toggled::Added);
//! assert_eq!(badge.count(), 1);
//! ```
//!
//! The `tmdb` feature adds the typed client for the external movie data
//! source the dashboard browses.

mod badge;
mod channel;
mod event;
mod movie;
mod stats;
mod storage;
mod store;

#[cfg(feature = "tmdb")]
pub mod tmdb;

pub use badge::CounterBadge;
pub use channel::{ChangeChannel, Subscription};
pub use event::FavoritesChange;
pub use movie::Movie;
pub use stats::FavoritesStats;
pub use storage::{
    FavoritesStorage, InMemoryStorage, JsonFileStorage, StorageError, UnavailableStorage,
    DEFAULT_SLOT,
};
pub use store::{FavoritesStore, Toggled};
