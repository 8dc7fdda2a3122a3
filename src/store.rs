//! FavoritesStore - the authoritative favorites collection for a session.
//!
//! The store owns the only mutable copy of the collection. Every surface in
//! the application reads through it and mutates through it; nothing else
//! writes the collection or the durable slot. Each mutation is applied to
//! memory, persisted as a full snapshot, and then announced on the change
//! channel, in that order, so no subscriber ever observes a half-applied
//! mutation.
//!
//! None of the operations fail to the caller. Storage trouble is absorbed
//! here and logged: a corrupt or unavailable slot hydrates as empty, a
//! failed save leaves the in-memory state authoritative for the rest of the
//! session (the next session simply will not see the unpersisted change).

use std::sync::{RwLock, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::channel::ChangeChannel;
use crate::event::FavoritesChange;
use crate::movie::Movie;
use crate::storage::FavoritesStorage;

/// Which branch a [`FavoritesStore::toggle`] call took. The calling surface
/// uses this to describe the action (toast text, icon state) and it is
/// guaranteed to match the mutation actually performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

struct State {
    collection: Vec<Movie>,
    loaded: bool,
}

/// The session-wide favorites collection: ordered, unique by movie id,
/// hydrated from durable storage once per session and written back on every
/// mutation.
///
/// Construct one per session and share it via `Arc`; all operations take
/// `&self`.
pub struct FavoritesStore {
    state: RwLock<State>,
    storage: Box<dyn FavoritesStorage>,
    channel: ChangeChannel,
}

impl FavoritesStore {
    /// Store with its own private change channel.
    pub fn new(storage: Box<dyn FavoritesStorage>) -> Self {
        Self::with_channel(storage, ChangeChannel::new())
    }

    /// Store publishing on an externally owned channel.
    pub fn with_channel(storage: Box<dyn FavoritesStorage>, channel: ChangeChannel) -> Self {
        FavoritesStore {
            state: RwLock::new(State {
                collection: Vec::new(),
                loaded: false,
            }),
            storage,
            channel,
        }
    }

    /// The channel this store publishes changes on.
    pub fn channel(&self) -> &ChangeChannel {
        &self.channel
    }

    /// Hydrate the collection from durable storage.
    ///
    /// Call once at session start. The first call loads the slot (falling
    /// back to empty on corruption or unavailability), marks the store
    /// loaded, and publishes [`FavoritesChange::Loaded`]. Re-invocation is
    /// a no-op.
    pub fn initialize(&self) {
        let event = {
            let mut state = self.write_state();
            if state.loaded {
                return;
            }
            match self.storage.load() {
                Ok(movies) => {
                    debug!(count = movies.len(), "hydrated favorites from storage");
                    state.collection = movies;
                }
                Err(e) => {
                    warn!(error = %e, "failed to load favorites; starting empty");
                    state.collection = Vec::new();
                }
            }
            state.loaded = true;
            FavoritesChange::Loaded {
                count: state.collection.len(),
            }
        };
        self.channel.publish(&event);
    }

    /// Whether the initial hydration has completed. Reads made before this
    /// returns `true` are provisional; a surface should render a loading
    /// affordance rather than "not favorited".
    pub fn is_loaded(&self) -> bool {
        self.read_state().loaded
    }

    /// Membership test by movie id. Never blocks; always `false` before
    /// the initial load has completed.
    pub fn is_favorite(&self, id: u64) -> bool {
        self.read_state().collection.iter().any(|m| m.id == id)
    }

    /// Append `movie` to the collection. Adding an id that is already
    /// present is a no-op: no duplicate, no reorder, no notification.
    pub fn add(&self, movie: Movie) {
        let event = {
            let mut state = self.write_state();
            if state.collection.iter().any(|m| m.id == movie.id) {
                return;
            }
            state.collection.push(movie.clone());
            self.persist(&state);
            FavoritesChange::Added {
                movie,
                count: state.collection.len(),
            }
        };
        self.channel.publish(&event);
    }

    /// Remove the entry with `id`. Removing an absent id is a no-op.
    pub fn remove(&self, id: u64) {
        let event = {
            let mut state = self.write_state();
            let before = state.collection.len();
            state.collection.retain(|m| m.id != id);
            if state.collection.len() == before {
                return;
            }
            self.persist(&state);
            FavoritesChange::Removed {
                id,
                count: state.collection.len(),
            }
        };
        self.channel.publish(&event);
    }

    /// Add `movie` if absent, remove it if present.
    ///
    /// The decision is made once, from the membership state at entry, under
    /// the same lock as the mutation: two rapid toggles of the same movie
    /// resolve as two sequential toggles, never a lost update. The returned
    /// [`Toggled`] names the branch actually taken.
    pub fn toggle(&self, movie: Movie) -> Toggled {
        let (event, outcome) = {
            let mut state = self.write_state();
            if state.collection.iter().any(|m| m.id == movie.id) {
                let id = movie.id;
                state.collection.retain(|m| m.id != id);
                self.persist(&state);
                (
                    FavoritesChange::Removed {
                        id,
                        count: state.collection.len(),
                    },
                    Toggled::Removed,
                )
            } else {
                state.collection.push(movie.clone());
                self.persist(&state);
                (
                    FavoritesChange::Added {
                        movie,
                        count: state.collection.len(),
                    },
                    Toggled::Added,
                )
            }
        };
        self.channel.publish(&event);
        outcome
    }

    /// Empty the collection and persist the empty snapshot.
    pub fn clear(&self) {
        {
            let mut state = self.write_state();
            state.collection.clear();
            self.persist(&state);
        }
        self.channel.publish(&FavoritesChange::Cleared);
    }

    /// Snapshot of the current collection, in insertion order. Surfaces
    /// render from this copy; the authoritative sequence stays inside the
    /// store.
    pub fn favorites(&self) -> Vec<Movie> {
        self.read_state().collection.clone()
    }

    /// Number of favorited movies.
    pub fn count(&self) -> usize {
        self.read_state().collection.len()
    }

    /// Write the current collection to durable storage. Failures are
    /// logged, never propagated: the in-memory state stays authoritative.
    /// Mutations made before hydration completes are not persisted, so a
    /// stray early click cannot clobber the previous session's slot.
    fn persist(&self, state: &State) {
        if !state.loaded {
            return;
        }
        match self.storage.save(&state.collection) {
            Ok(()) => debug!(count = state.collection.len(), "persisted favorites"),
            Err(e) => warn!(error = %e, "failed to persist favorites; keeping in-memory state"),
        }
    }

    // The store's API is infallible, so lock poisoning is recovered rather
    // than propagated; the collection is valid after any partial panic.
    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
