//! Toastkit Core
//!
//! This crate provides the foundational primitives for the toastkit
//! notification system:
//!
//! - **Toast Model**: The [`Toast`] record, its identifier scheme, kinds,
//!   payload content variants, and the option/patch types used to create and
//!   merge toasts
//! - **Surface Configuration**: Per-render-cycle display settings
//!   ([`SurfaceConfig`]) owned by the display layer and consumed by the core
//! - **Visibility Policy**: The pure [`visible_toasts`] selector that decides
//!   which toasts a capacity-constrained surface renders, and in what order
//!
//! Nothing in this crate is stateful; the canonical active-toast list lives in
//! `toastkit_registry`, which consumes these types.
//!
//! # Example
//!
//! ```rust
//! use toastkit_core::{visible_toasts, SurfaceConfig, Anchor};
//!
//! let config = SurfaceConfig::new()
//!     .anchor(Anchor::Bottom)
//!     .capacity(3);
//!
//! // `toasts` is a snapshot pulled from the registry.
//! let toasts = vec![];
//! let ordered_ids = visible_toasts(&toasts, &config);
//! assert!(ordered_ids.is_empty());
//! ```

pub mod content;
pub mod select;
pub mod surface;
pub mod toast;

pub use content::{ContentHandle, ToastContent};
pub use select::visible_toasts;
pub use surface::{Anchor, SurfaceConfig, SurfaceId};
pub use toast::{
    AutoDismiss, ParseToastKindError, Toast, ToastAction, ToastCallback, ToastId, ToastKind,
    ToastOptions, ToastPatch,
};
