//! Toastkit Registry
//!
//! The stateful half of toastkit. A [`ToastRegistry`] owns the canonical list
//! of active toasts and routes every mutation:
//!
//! - **Create / Update / Dismiss**: mutation operations with update-on-collision
//!   semantics and optimistic dismissal; no operation fails for "not found"
//! - **Event Channels**: three independent observer lists (create, update,
//!   dismiss) published after the state change they describe
//! - **Dismissed-id History**: bounded suppression of re-creation races
//! - **Promise Lifecycle**: [`run_promise`] drives one toast through
//!   loading → success / error around an awaited operation
//!
//! Display surfaces subscribe to the channels, re-pull [`ToastRegistry::get_all`]
//! on their next render pass, and feed the snapshot through
//! `toastkit_core::visible_toasts`. User gestures and timer expiries come back
//! in as `dismiss` / `expire` calls.
//!
//! # Example
//!
//! ```rust
//! use toastkit_registry::{ToastRegistry, ToastKind, ToastOptions};
//!
//! let mut registry = ToastRegistry::new();
//! let id = registry.create("Saved", ToastKind::Success, ToastOptions::new());
//!
//! assert!(registry.is_active(&id));
//! registry.dismiss(Some(&id));
//! assert!(registry.get_all().is_empty());
//! ```

pub mod events;
mod history;
pub mod promise;
pub mod registry;
pub mod shared;

pub use events::{Channel, ObserverKey, Subscription};
pub use promise::{run_promise, PromiseSpec, TextFor};
pub use registry::ToastRegistry;
pub use shared::{shared_registry, SharedToastRegistry, SharedToastRegistryExt};

// Re-export the model types callers need at every call site
pub use toastkit_core::{
    visible_toasts, Anchor, AutoDismiss, ContentHandle, SurfaceConfig, SurfaceId, Toast,
    ToastAction, ToastCallback, ToastContent, ToastId, ToastKind, ToastOptions, ToastPatch,
};
