//! CounterBadge - the navbar counter as a channel subscriber.
//!
//! The badge is the reference consumer surface: it subscribes on mount,
//! treats every change event as a hint to re-read authoritative state from
//! the store, and unsubscribes when dropped. Other surfaces (the toggle
//! button, the listing page) are plain calls into the store and need no
//! state of their own.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use crate::channel::Subscription;
use crate::store::FavoritesStore;

/// Always-current favorites count for a badge to render.
pub struct CounterBadge {
    count: Arc<AtomicUsize>,
    loaded: Arc<AtomicBool>,
    _subscription: Subscription,
}

impl CounterBadge {
    /// Subscribe to the store's channel and track its count.
    ///
    /// The subscription holds only a weak reference to the store: the badge
    /// lives inside the channel the store owns, and a strong reference
    /// would keep the store alive through its own listener table.
    pub fn mount(store: &Arc<FavoritesStore>) -> Self {
        let count = Arc::new(AtomicUsize::new(store.count()));
        let loaded = Arc::new(AtomicBool::new(store.is_loaded()));

        let subscription = {
            let count = count.clone();
            let loaded = loaded.clone();
            let weak: Weak<FavoritesStore> = Arc::downgrade(store);
            store.channel().subscribe(move |_change| {
                if let Some(store) = weak.upgrade() {
                    count.store(store.count(), Ordering::SeqCst);
                    loaded.store(store.is_loaded(), Ordering::SeqCst);
                }
            })
        };

        CounterBadge {
            count,
            loaded,
            _subscription: subscription,
        }
    }

    /// The count to display.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Whether the badge should render a loading affordance instead of a
    /// number. True until the store's initial hydration has completed.
    pub fn is_loading(&self) -> bool {
        !self.loaded.load(Ordering::SeqCst)
    }
}
