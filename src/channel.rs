//! ChangeChannel - process-wide pub/sub for favorites changes.
//!
//! Surfaces far apart in the UI tree (a navbar badge, a toast host) need to
//! learn about mutations without holding a reference to the store. The
//! channel delivers every published change synchronously to all live
//! subscribers, in subscription order, and isolates a panicking handler so
//! it cannot starve the rest.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, RwLock, Weak};

use tracing::warn;

use crate::event::FavoritesChange;

type Handler = Arc<dyn Fn(&FavoritesChange) + Send + Sync>;

struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Handler)>,
}

/// Process-wide change broadcaster. Cheap to clone; all clones share the
/// same listener table.
#[derive(Clone)]
pub struct ChangeChannel {
    inner: Arc<RwLock<Listeners>>,
}

impl Default for ChangeChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeChannel {
    pub fn new() -> Self {
        ChangeChannel {
            inner: Arc::new(RwLock::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a handler for every future publish.
    ///
    /// The returned [`Subscription`] unregisters the handler when dropped,
    /// so a surface that subscribes on mount stops receiving changes the
    /// moment it is torn down.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&FavoritesChange) + Send + Sync + 'static,
    {
        let mut listeners = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(handler)));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `change` to every live subscriber, synchronously and in
    /// subscription order.
    ///
    /// Handlers run outside the listener lock, so a handler may subscribe,
    /// unsubscribe, or publish again without deadlocking. A handler that
    /// panics is logged and skipped; later handlers still run.
    pub fn publish(&self, change: &FavoritesChange) {
        let handlers: Vec<Handler> = {
            let listeners = self.inner.read().unwrap_or_else(|e| e.into_inner());
            listeners.entries.iter().map(|(_, h)| h.clone()).collect()
        };
        for handler in handlers {
            if catch_unwind(AssertUnwindSafe(|| handler(change))).is_err() {
                warn!("favorites change handler panicked; continuing with remaining handlers");
            }
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .entries
            .len()
    }
}

/// Handle for one registered handler. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    inner: Weak<RwLock<Listeners>>,
}

impl Subscription {
    /// Unsubscribe explicitly. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut listeners = inner.write().unwrap_or_else(|e| e.into_inner());
            listeners.entries.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn delivers_to_multiple_subscribers_in_order() {
        let channel = ChangeChannel::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let first = {
            let seen = seen.clone();
            channel.subscribe(move |_| seen.lock().unwrap().push("first"))
        };
        let second = {
            let seen = seen.clone();
            channel.subscribe(move |_| seen.lock().unwrap().push("second"))
        };

        channel.publish(&FavoritesChange::Cleared);
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);

        drop(first);
        drop(second);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let channel = ChangeChannel::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let subscription = {
            let hits = hits.clone();
            channel.subscribe(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        assert_eq!(channel.subscriber_count(), 1);

        channel.publish(&FavoritesChange::Cleared);
        drop(subscription);
        assert_eq!(channel.subscriber_count(), 0);

        channel.publish(&FavoritesChange::Cleared);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn panicking_handler_does_not_starve_the_rest() {
        let channel = ChangeChannel::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let _bad = channel.subscribe(|_| panic!("boom"));
        let _good = {
            let hits = hits.clone();
            channel.subscribe(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        channel.publish(&FavoritesChange::Loaded { count: 0 });
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn handler_may_unsubscribe_itself_during_publish() {
        let channel = ChangeChannel::new();
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let subscription = {
            let slot = slot.clone();
            channel.subscribe(move |_| {
                slot.lock().unwrap().take();
            })
        };
        *slot.lock().unwrap() = Some(subscription);

        channel.publish(&FavoritesChange::Cleared);
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn clones_share_one_listener_table() {
        let channel = ChangeChannel::new();
        let clone = channel.clone();
        let hits = Arc::new(AtomicUsize::new(0));

        let _subscription = {
            let hits = hits.clone();
            channel.subscribe(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        clone.publish(&FavoritesChange::Cleared);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
