//! Thread-safe registry handle
//!
//! The registry itself performs no locking (see [`ToastRegistry`]); hosts that
//! mutate from more than one thread wrap it in exactly one lock covering the
//! whole mutate-then-publish sequence. Fine-grained per-field locking would
//! break the guarantee that a subscriber observing an event sees a snapshot
//! consistent with that event having happened.
//!
//! Events publish while the lock is held, so subscribers must not call back
//! into the shared handle synchronously; mark a dirty flag and re-pull
//! `get_all()` on the next render pass instead.

use std::sync::{Arc, Mutex};

use toastkit_core::{Toast, ToastContent, ToastId, ToastKind, ToastOptions, ToastPatch};

use crate::events::Subscription;
use crate::registry::ToastRegistry;

/// Thread-safe toast registry
pub type SharedToastRegistry = Arc<Mutex<ToastRegistry>>;

/// Create a new shared registry
pub fn shared_registry() -> SharedToastRegistry {
    Arc::new(Mutex::new(ToastRegistry::new()))
}

/// Extension trait mirroring the registry's operations on the shared handle
pub trait SharedToastRegistryExt {
    /// Create a toast; see [`ToastRegistry::create`]
    fn create(
        &self,
        title: impl Into<ToastContent>,
        kind: ToastKind,
        options: ToastOptions,
    ) -> ToastId;
    /// Merge partial fields over an active toast; see [`ToastRegistry::update`]
    fn update(&self, id: &ToastId, patch: ToastPatch) -> bool;
    /// Dismiss one toast, or every toast when `id` is `None`
    fn dismiss(&self, id: Option<&ToastId>);
    /// Expire a toast from its auto-dismiss countdown
    fn expire(&self, id: &ToastId);
    /// Forget every recently dismissed id
    fn clear_dismissed_history(&self);
    /// Snapshot of every active toast, in insertion order
    fn get_all(&self) -> Vec<Toast>;
    /// Copy of one active toast
    fn get_by_id(&self, id: &ToastId) -> Option<Toast>;
    /// Whether a toast with this id is active
    fn is_active(&self, id: &ToastId) -> bool;
    /// Observe toast creation
    fn subscribe_create<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Toast) + Send + Sync + 'static;
    /// Observe toast updates
    fn subscribe_update<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Toast) + Send + Sync + 'static;
    /// Observe dismissals
    fn subscribe_dismiss<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Option<ToastId>) + Send + Sync + 'static;
    /// Remove a subscription from its channel
    fn unsubscribe(&self, subscription: Subscription) -> bool;
}

impl SharedToastRegistryExt for SharedToastRegistry {
    fn create(
        &self,
        title: impl Into<ToastContent>,
        kind: ToastKind,
        options: ToastOptions,
    ) -> ToastId {
        self.lock().unwrap().create(title, kind, options)
    }

    fn update(&self, id: &ToastId, patch: ToastPatch) -> bool {
        self.lock().unwrap().update(id, patch)
    }

    fn dismiss(&self, id: Option<&ToastId>) {
        self.lock().unwrap().dismiss(id);
    }

    fn expire(&self, id: &ToastId) {
        self.lock().unwrap().expire(id);
    }

    fn clear_dismissed_history(&self) {
        self.lock().unwrap().clear_dismissed_history();
    }

    fn get_all(&self) -> Vec<Toast> {
        self.lock().unwrap().get_all()
    }

    fn get_by_id(&self, id: &ToastId) -> Option<Toast> {
        self.lock().unwrap().get_by_id(id)
    }

    fn is_active(&self, id: &ToastId) -> bool {
        self.lock().unwrap().is_active(id)
    }

    fn subscribe_create<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Toast) + Send + Sync + 'static,
    {
        self.lock().unwrap().subscribe_create(callback)
    }

    fn subscribe_update<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Toast) + Send + Sync + 'static,
    {
        self.lock().unwrap().subscribe_update(callback)
    }

    fn subscribe_dismiss<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Option<ToastId>) + Send + Sync + 'static,
    {
        self.lock().unwrap().subscribe_dismiss(callback)
    }

    fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.lock().unwrap().unsubscribe(subscription)
    }
}
