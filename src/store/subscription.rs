//! Subscriber registry and subscription handles.
//!
//! Notification iterates over a snapshot of the registry, so callbacks may
//! subscribe or unsubscribe freely while a pass is running. Each entry
//! carries an `active` flag that is checked right before its callback runs:
//! an entry removed mid-pass is skipped, and an entry added mid-pass is
//! not part of the snapshot and first runs on the next transition.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Callback<S> = Box<dyn Fn(&Arc<S>) + Send + Sync>;

struct Entry<S> {
    id: u64,
    active: Arc<AtomicBool>,
    callback: Callback<S>,
}

/// Ordered list of subscriber callbacks.
pub(crate) struct Registry<S> {
    next_id: AtomicU64,
    entries: Mutex<Vec<Arc<Entry<S>>>>,
}

impl<S: Send + Sync + 'static> Registry<S> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Append a callback. Registration order is notification order.
    pub(crate) fn insert(self: &Arc<Self>, callback: Callback<S>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let active = Arc::new(AtomicBool::new(true));
        self.entries.lock().push(Arc::new(Entry {
            id,
            active: Arc::clone(&active),
            callback,
        }));
        tracing::trace!(subscriber = id, "subscribed");

        let registry: Arc<dyn Deregister> = Arc::clone(self) as Arc<dyn Deregister>;
        Subscription {
            id,
            active,
            registry: Arc::downgrade(&registry),
        }
    }

    /// Invoke every subscriber registered before this call, in order.
    pub(crate) fn notify(&self, state: &Arc<S>) {
        let snapshot: Vec<Arc<Entry<S>>> = self.entries.lock().clone();
        for entry in snapshot {
            if entry.active.load(Ordering::Acquire) {
                (entry.callback)(state);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

trait Deregister: Send + Sync {
    fn remove(&self, id: u64);
}

impl<S: Send + Sync + 'static> Deregister for Registry<S> {
    fn remove(&self, id: u64) {
        // The callback may own other subscriptions; drop it outside the lock.
        let removed = {
            let mut entries = self.entries.lock();
            let position = entries.iter().position(|entry| entry.id == id);
            position.map(|index| entries.remove(index))
        };
        drop(removed);
        tracing::trace!(subscriber = id, "unsubscribed");
    }
}

/// Capability returned by `Store::subscribe`.
///
/// Dropping the handle unsubscribes. Once [`Subscription::unsubscribe`]
/// returns (or the handle is dropped) the callback is never started again,
/// including for a notification pass that is already running.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    active: Arc<AtomicBool>,
    registry: Weak<dyn Deregister>,
}

impl Subscription {
    /// Deregister the callback.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }

    /// True until the subscription is dropped or the store is gone.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire) && self.registry.strong_count() > 0
    }

    fn release(&self) {
        if self.active.swap(false, Ordering::AcqRel) {
            if let Some(registry) = self.registry.upgrade() {
                registry.remove(self.id);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
