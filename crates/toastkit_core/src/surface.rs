//! Display surface configuration
//!
//! A surface is one named place toasts appear (a screen corner, a sheet, a
//! secondary window). The registry knows nothing about surfaces beyond the
//! routing id on each toast; everything here is passed in by the display layer
//! per render cycle, never stored by the registry.

use std::fmt;
use std::time::Duration;

use crate::toast::{AutoDismiss, Toast, ToastKind};

/// Name of a display surface
///
/// The default id is the anonymous main surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct SurfaceId(String);

impl SurfaceId {
    /// Get the surface name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SurfaceId {
    fn from(s: &str) -> Self {
        SurfaceId(s.to_string())
    }
}

impl From<String> for SurfaceId {
    fn from(s: String) -> Self {
        SurfaceId(s)
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which screen edge the surface anchors to
///
/// Bottom anchoring reverses the rendered order so the newest toast stays
/// adjacent to the edge where new toasts enter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// Toasts stack downward from the top edge
    #[default]
    Top,
    /// Toasts stack upward from the bottom edge
    Bottom,
}

/// Per-render-cycle surface configuration consumed by the core
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// Which surface this configuration describes
    pub surface: SurfaceId,
    /// Edge anchoring
    pub anchor: Anchor,
    /// Maximum visible toasts; 0 means unlimited
    pub capacity: usize,
    /// Auto-dismiss delay applied when a toast doesn't override it
    pub default_duration: Duration,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceId::default(),
            anchor: Anchor::Top,
            capacity: 3,
            default_duration: Duration::from_millis(4000),
        }
    }
}

impl SurfaceConfig {
    /// Configuration for the anonymous main surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the surface
    pub fn surface(mut self, surface: impl Into<SurfaceId>) -> Self {
        self.surface = surface.into();
        self
    }

    /// Set the edge anchoring
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the visible-toast capacity (0 = unlimited)
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the default auto-dismiss delay
    pub fn default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }

    /// Whether a toast is routed to this surface
    ///
    /// Toasts without a surface id appear on every surface.
    pub fn accepts(&self, toast: &Toast) -> bool {
        match &toast.surface {
            None => true,
            Some(surface) => *surface == self.surface,
        }
    }

    /// Resolve the effective auto-dismiss countdown for a toast
    ///
    /// Returns `None` when the toast never expires: explicit `Never`, or any
    /// `Loading` toast regardless of its duration override.
    pub fn auto_dismiss_after(&self, toast: &Toast) -> Option<Duration> {
        if toast.kind == ToastKind::Loading {
            return None;
        }
        match toast.duration {
            AutoDismiss::Surface => Some(self.default_duration),
            AutoDismiss::After(duration) => Some(duration),
            AutoDismiss::Never => None,
        }
    }
}
