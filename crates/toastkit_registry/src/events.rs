//! Event channels - observer lists for create, update, and dismiss
//!
//! Each channel is an independent list of callbacks keyed by a slotmap key,
//! so removal is O(1) and naturally idempotent: a stale key removes nothing.
//! Subscribers hold no ownership over toast state; they receive clones.

use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Unique identifier for a registered observer
    pub struct ObserverKey;
}

/// Which event channel a subscription listens to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// A toast was appended to the active list
    Create,
    /// An active toast was merged with new fields (including create-collision)
    Update,
    /// A toast (or every toast) was removed from the active list
    Dismiss,
}

/// Capability to remove exactly one callback from exactly one channel
///
/// Pass it to `ToastRegistry::unsubscribe`; using it more than once is a
/// no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription {
    pub(crate) channel: Channel,
    pub(crate) key: ObserverKey,
}

impl Subscription {
    /// The channel this subscription listens to
    pub fn channel(&self) -> Channel {
        self.channel
    }
}

/// An ordered set of callbacks for one event channel
pub(crate) struct Observers<T> {
    callbacks: SlotMap<ObserverKey, Arc<dyn Fn(&T) + Send + Sync>>,
}

impl<T> Observers<T> {
    pub(crate) fn new() -> Self {
        Self {
            callbacks: SlotMap::with_key(),
        }
    }

    pub(crate) fn subscribe<F>(&mut self, callback: F) -> ObserverKey
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.callbacks.insert(Arc::new(callback))
    }

    /// Remove a callback; returns false if it was already gone
    pub(crate) fn unsubscribe(&mut self, key: ObserverKey) -> bool {
        self.callbacks.remove(key).is_some()
    }

    pub(crate) fn emit(&self, value: &T) {
        for callback in self.callbacks.values() {
            callback(value);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn emit_reaches_every_observer() {
        let mut observers: Observers<u32> = Observers::new();
        let hits = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let hits = Arc::clone(&hits);
            observers.subscribe(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            });
        }

        observers.emit(&7);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let mut observers: Observers<u32> = Observers::new();
        let key = observers.subscribe(|_| {});

        assert!(observers.unsubscribe(key));
        assert!(!observers.unsubscribe(key));
        assert_eq!(observers.len(), 0);
    }

    #[test]
    fn unsubscribe_removes_only_that_observer() {
        let mut observers: Observers<u32> = Observers::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let key = observers.subscribe(|_| {});
        {
            let hits = Arc::clone(&hits);
            observers.subscribe(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            });
        }

        observers.unsubscribe(key);
        observers.emit(&1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
