//! Toast Registry - the canonical active-toast list and its mutation surface
//!
//! The registry owns three things: the insertion-ordered list of active
//! toasts, the bounded dismissed-id history, and one observer list per event
//! channel (create, update, dismiss). Every mutation fully applies its state
//! change before the matching event is published, so a subscriber observing an
//! event always sees a snapshot consistent with that event having happened.
//!
//! All mutating operations take `&mut self`; the registry performs no internal
//! locking and expects a single logical mutation point. Multi-threaded hosts
//! wrap the whole registry in one lock via [`SharedToastRegistry`], never
//! per-field locks, to preserve the ordering guarantee above.
//!
//! Subscribers must not synchronously re-enter the registry from a callback.
//! The intended pattern is marking a dirty flag and re-pulling [`get_all`] on
//! the next render pass.
//!
//! [`SharedToastRegistry`]: crate::shared::SharedToastRegistry
//! [`get_all`]: ToastRegistry::get_all

use indexmap::IndexMap;
use smallvec::SmallVec;

use toastkit_core::{Toast, ToastContent, ToastId, ToastKind, ToastOptions, ToastPatch};

use crate::events::{Channel, Observers, Subscription};
use crate::history::DismissedHistory;

/// Registry of active toasts
///
/// Not a global: construct one per app (or per test) and hand it to display
/// surfaces and call sites explicitly.
pub struct ToastRegistry {
    /// Active toasts in insertion order
    toasts: IndexMap<ToastId, Toast>,
    /// Recently dismissed ids, for re-creation suppression
    history: DismissedHistory,
    /// Source of generated ids
    next_auto_id: u64,
    /// Logical clock; advances on every mutation
    ticks: u64,
    on_create: Observers<Toast>,
    on_update: Observers<Toast>,
    on_dismiss: Observers<Option<ToastId>>,
}

impl ToastRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            toasts: IndexMap::new(),
            history: DismissedHistory::new(),
            next_auto_id: 0,
            ticks: 0,
            on_create: Observers::new(),
            on_update: Observers::new(),
            on_dismiss: Observers::new(),
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create a toast, returning its id
    ///
    /// If the resolved id sits in the dismissed-id history the call is a
    /// silent no-op returning the id unchanged; this breaks re-creation loops
    /// fed by stale async callbacks. If a toast with the id is already active,
    /// the new record replaces it in place (keeping its position and
    /// `created_at`) and an **update** event fires instead of **create**.
    pub fn create(
        &mut self,
        title: impl Into<ToastContent>,
        kind: ToastKind,
        options: ToastOptions,
    ) -> ToastId {
        let id = options.id.clone().unwrap_or_else(|| {
            self.next_auto_id += 1;
            ToastId::Auto(self.next_auto_id)
        });

        if self.history.contains(&id) {
            tracing::debug!(%id, "create suppressed: id was recently dismissed");
            return id;
        }

        let tick = self.next_tick();
        let mut toast = Toast {
            id: id.clone(),
            kind,
            title: title.into(),
            description: options.description,
            created_at: tick,
            dismissible: options.dismissible.unwrap_or(true),
            important: options.important,
            surface: options.surface,
            duration: options.duration,
            action: options.action,
            on_dismiss: options.on_dismiss,
            on_auto_close: options.on_auto_close,
        };

        if let Some(existing) = self.toasts.get_mut(&id) {
            // Id collision is update semantics, never an error: replace in
            // place, keeping the original creation tick.
            toast.created_at = existing.created_at;
            *existing = toast.clone();
            tracing::debug!(%id, kind = %toast.kind, "toast replaced in place");
            self.on_update.emit(&toast);
        } else {
            self.toasts.insert(id.clone(), toast.clone());
            tracing::debug!(%id, kind = %toast.kind, active = self.toasts.len(), "toast created");
            self.on_create.emit(&toast);
        }
        id
    }

    /// Merge partial fields over an active toast
    ///
    /// Returns false when no active toast has the id. `id` and `created_at`
    /// are preserved regardless of the patch; an empty-text title keeps the
    /// prior one.
    pub fn update(&mut self, id: &ToastId, patch: ToastPatch) -> bool {
        let Some(toast) = self.toasts.get_mut(id) else {
            tracing::debug!(%id, "update ignored: toast not active");
            return false;
        };
        toast.apply(patch);
        let merged = toast.clone();
        tracing::debug!(%id, kind = %merged.kind, "toast updated");
        self.on_update.emit(&merged);
        true
    }

    /// Dismiss one toast, or every toast when `id` is `None`
    ///
    /// Invokes each removed toast's `on_dismiss`, records the id(s) in the
    /// dismissed history, removes the entry/entries, then fires exactly one
    /// dismiss event carrying the optional id. Dismissing an unknown id is not
    /// an error: it is still recorded and the event still fires, so a UI can
    /// optimistically dismiss without holding a live reference.
    pub fn dismiss(&mut self, id: Option<&ToastId>) {
        let tick = self.next_tick();
        match id {
            None => {
                for toast in self.toasts.values() {
                    if let Some(callback) = &toast.on_dismiss {
                        callback(toast);
                    }
                }
                let ids: SmallVec<[ToastId; 8]> = self.toasts.keys().cloned().collect();
                for dismissed in ids {
                    self.history.record(dismissed, tick);
                }
                self.toasts.clear();
                tracing::debug!("dismissed all toasts");
                self.on_dismiss.emit(&None);
            }
            Some(id) => {
                if let Some(toast) = self.toasts.get(id) {
                    if let Some(callback) = &toast.on_dismiss {
                        callback(toast);
                    }
                }
                self.history.record(id.clone(), tick);
                self.toasts.shift_remove(id);
                tracing::debug!(%id, active = self.toasts.len(), "toast dismissed");
                self.on_dismiss.emit(&Some(id.clone()));
            }
        }
    }

    /// Expire a toast from its auto-dismiss countdown
    ///
    /// The display layer owns the timers; when one fires it calls this
    /// instead of [`dismiss`](Self::dismiss) so the toast's `on_auto_close`
    /// callback runs rather than `on_dismiss`. Bookkeeping is otherwise
    /// identical to a targeted dismiss.
    pub fn expire(&mut self, id: &ToastId) {
        let tick = self.next_tick();
        if let Some(toast) = self.toasts.get(id) {
            if let Some(callback) = &toast.on_auto_close {
                callback(toast);
            }
        }
        self.history.record(id.clone(), tick);
        self.toasts.shift_remove(id);
        tracing::debug!(%id, active = self.toasts.len(), "toast expired");
        self.on_dismiss.emit(&Some(id.clone()));
    }

    /// Forget every recently dismissed id, re-enabling immediate re-creation
    pub fn clear_dismissed_history(&mut self) {
        self.history.clear();
    }

    // =========================================================================
    // Kind shorthands
    // =========================================================================

    /// Create a neutral toast
    pub fn message(&mut self, title: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.create(title, ToastKind::Default, options)
    }

    /// Create a success toast
    pub fn success(&mut self, title: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.create(title, ToastKind::Success, options)
    }

    /// Create an error toast
    pub fn error(&mut self, title: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.create(title, ToastKind::Error, options)
    }

    /// Create a warning toast
    pub fn warning(&mut self, title: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.create(title, ToastKind::Warning, options)
    }

    /// Create an info toast
    pub fn info(&mut self, title: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.create(title, ToastKind::Info, options)
    }

    /// Create a loading toast
    pub fn loading(&mut self, title: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        self.create(title, ToastKind::Loading, options)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Snapshot of every active toast, in insertion order
    ///
    /// Defensive copies; mutating the result never touches registry state.
    /// Insertion order is not display order — feed this to the visibility
    /// selector.
    pub fn get_all(&self) -> Vec<Toast> {
        self.toasts.values().cloned().collect()
    }

    /// Copy of one active toast
    pub fn get_by_id(&self, id: &ToastId) -> Option<Toast> {
        self.toasts.get(id).cloned()
    }

    /// Whether a toast with this id is active
    pub fn is_active(&self, id: &ToastId) -> bool {
        self.toasts.contains_key(id)
    }

    /// Number of active toasts
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether no toasts are active
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Observe toast creation; the callback receives the new toast
    pub fn subscribe_create<F>(&mut self, callback: F) -> Subscription
    where
        F: Fn(&Toast) + Send + Sync + 'static,
    {
        Subscription {
            channel: Channel::Create,
            key: self.on_create.subscribe(callback),
        }
    }

    /// Observe toast updates; the callback receives the merged toast
    pub fn subscribe_update<F>(&mut self, callback: F) -> Subscription
    where
        F: Fn(&Toast) + Send + Sync + 'static,
    {
        Subscription {
            channel: Channel::Update,
            key: self.on_update.subscribe(callback),
        }
    }

    /// Observe dismissals; `None` means "dismiss all"
    pub fn subscribe_dismiss<F>(&mut self, callback: F) -> Subscription
    where
        F: Fn(&Option<ToastId>) + Send + Sync + 'static,
    {
        Subscription {
            channel: Channel::Dismiss,
            key: self.on_dismiss.subscribe(callback),
        }
    }

    /// Remove a subscription from its channel
    ///
    /// Idempotent: returns false if the callback was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        match subscription.channel {
            Channel::Create => self.on_create.unsubscribe(subscription.key),
            Channel::Update => self.on_update.unsubscribe(subscription.key),
            Channel::Dismiss => self.on_dismiss.unsubscribe(subscription.key),
        }
    }
}

impl Default for ToastRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[test]
    fn create_appends_and_notifies_once() {
        let mut registry = ToastRegistry::new();
        let created = Arc::new(AtomicUsize::new(0));
        {
            let created = Arc::clone(&created);
            registry.subscribe_create(move |_| {
                created.fetch_add(1, Ordering::SeqCst);
            });
        }

        let id = registry.message("Saved", ToastOptions::new());

        assert!(matches!(id, ToastId::Auto(_)));
        assert_eq!(registry.get_all().len(), 1);
        assert_eq!(created.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn create_collision_is_update() {
        let mut registry = ToastRegistry::new();
        let creates = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(AtomicUsize::new(0));
        {
            let creates = Arc::clone(&creates);
            registry.subscribe_create(move |_| {
                creates.fetch_add(1, Ordering::SeqCst);
            });
            let updates = Arc::clone(&updates);
            registry.subscribe_update(move |_| {
                updates.fetch_add(1, Ordering::SeqCst);
            });
        }

        registry.create("first", ToastKind::Default, ToastOptions::new().id("x"));
        let first_tick = registry.get_by_id(&"x".into()).unwrap().created_at;
        registry.create("second", ToastKind::Default, ToastOptions::new().id("x"));

        let toast = registry.get_by_id(&"x".into()).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(toast.title.as_text(), Some("second"));
        assert_eq!(toast.created_at, first_tick);
        assert_eq!(creates.load(Ordering::SeqCst), 1);
        assert_eq!(updates.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn update_preserves_identity() {
        let mut registry = ToastRegistry::new();
        let id = registry.message("hello", ToastOptions::new());
        let created_at = registry.get_by_id(&id).unwrap().created_at;

        assert!(registry.update(&id, ToastPatch::new().title("x")));

        let toast = registry.get_by_id(&id).unwrap();
        assert_eq!(toast.id, id);
        assert_eq!(toast.created_at, created_at);
        assert_eq!(toast.title.as_text(), Some("x"));
    }

    #[test]
    fn update_unknown_id_returns_false() {
        let mut registry = ToastRegistry::new();
        assert!(!registry.update(&"ghost".into(), ToastPatch::new().title("x")));
    }

    #[test]
    fn dismiss_all_clears_state_and_records_history() {
        let mut registry = ToastRegistry::new();
        let a = registry.message("a", ToastOptions::new());
        let b = registry.message("b", ToastOptions::new());
        let events = Arc::new(Mutex::new(Vec::new()));
        {
            let events = Arc::clone(&events);
            registry.subscribe_dismiss(move |id| {
                events.lock().unwrap().push(id.clone());
            });
        }

        registry.dismiss(None);

        assert!(registry.is_empty());
        assert_eq!(*events.lock().unwrap(), vec![None]);
        // Both ids are suppressed until history is cleared.
        let again = registry.create("again", ToastKind::Default, ToastOptions::new().id(a.clone()));
        assert_eq!(again, a);
        registry.create("again", ToastKind::Default, ToastOptions::new().id(b.clone()));
        assert!(registry.is_empty());
    }

    #[test]
    fn dismissed_id_suppresses_recreation() {
        let mut registry = ToastRegistry::new();
        registry.create("x", ToastKind::Default, ToastOptions::new().id("x"));
        registry.dismiss(Some(&"x".into()));

        let id = registry.create("x again", ToastKind::Default, ToastOptions::new().id("x"));

        assert_eq!(id, "x".into());
        assert!(!registry.is_active(&id));

        registry.clear_dismissed_history();
        registry.create("x again", ToastKind::Default, ToastOptions::new().id("x"));
        assert!(registry.is_active(&"x".into()));
    }

    #[test]
    fn optimistic_dismiss_of_unknown_id() {
        let mut registry = ToastRegistry::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        {
            let events = Arc::clone(&events);
            registry.subscribe_dismiss(move |id| {
                events.lock().unwrap().push(id.clone());
            });
        }

        registry.dismiss(Some(&"gone".into()));

        assert_eq!(*events.lock().unwrap(), vec![Some(ToastId::from("gone"))]);
        // The id is recorded as dismissed, so re-creation is suppressed.
        registry.create("late", ToastKind::Default, ToastOptions::new().id("gone"));
        assert!(registry.is_empty());
    }

    #[test]
    fn dismiss_invokes_on_dismiss_with_toast_data() {
        let mut registry = ToastRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let id = {
            let seen = Arc::clone(&seen);
            registry.message(
                "bye",
                ToastOptions::new().on_dismiss(move |toast| {
                    seen.lock().unwrap().push(toast.id.clone());
                }),
            )
        };

        registry.dismiss(Some(&id));
        registry.dismiss(Some(&id)); // already gone: callback must not re-fire

        assert_eq!(*seen.lock().unwrap(), vec![id]);
    }

    #[test]
    fn expire_fires_on_auto_close_not_on_dismiss() {
        let mut registry = ToastRegistry::new();
        let auto_closed = Arc::new(AtomicUsize::new(0));
        let dismissed = Arc::new(AtomicUsize::new(0));
        let id = {
            let auto_closed = Arc::clone(&auto_closed);
            let dismissed = Arc::clone(&dismissed);
            registry.message(
                "timer",
                ToastOptions::new()
                    .on_auto_close(move |_| {
                        auto_closed.fetch_add(1, Ordering::SeqCst);
                    })
                    .on_dismiss(move |_| {
                        dismissed.fetch_add(1, Ordering::SeqCst);
                    }),
            )
        };

        registry.expire(&id);

        assert!(!registry.is_active(&id));
        assert_eq!(auto_closed.load(Ordering::SeqCst), 1);
        assert_eq!(dismissed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn create_event_carries_the_stored_record() {
        let mut registry = ToastRegistry::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        {
            let events = Arc::clone(&events);
            registry.subscribe_create(move |toast| {
                events.lock().unwrap().push((toast.id.clone(), toast.created_at));
            });
        }

        let id = registry.message("x", ToastOptions::new());

        // The event payload matches the post-mutation snapshot.
        let stored = registry.get_by_id(&id).unwrap();
        assert_eq!(*events.lock().unwrap(), vec![(id, stored.created_at)]);
    }

    #[test]
    fn unsubscribe_is_channel_scoped_and_idempotent() {
        let mut registry = ToastRegistry::new();
        let creates = Arc::new(AtomicUsize::new(0));
        let sub = {
            let creates = Arc::clone(&creates);
            registry.subscribe_create(move |_| {
                creates.fetch_add(1, Ordering::SeqCst);
            })
        };

        assert_eq!(sub.channel(), Channel::Create);
        assert!(registry.unsubscribe(sub));
        assert!(!registry.unsubscribe(sub));

        registry.message("quiet", ToastOptions::new());
        assert_eq!(creates.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut registry = ToastRegistry::new();
        let a = registry.message("a", ToastOptions::new());
        let b = registry.message("b", ToastOptions::new());
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }
}
