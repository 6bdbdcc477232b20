//! Toast Model - identifiers, kinds, lifecycle options, and partial updates
//!
//! A [`Toast`] is the unit of notification state. The registry owns the
//! canonical list of these records; display surfaces receive clones through
//! queries and events. Two auxiliary types shape the mutation API:
//!
//! - [`ToastOptions`]: everything a caller may set at creation time
//! - [`ToastPatch`]: a partial merge applied by `update`; unset fields keep
//!   their prior values, and `id`/`created_at` are never patchable

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::content::ToastContent;
use crate::surface::SurfaceId;

// =============================================================================
// ToastId
// =============================================================================

/// Identifier of a toast
///
/// Either generated by the registry (`Auto`) or supplied by the caller
/// (`Named`). Unique among active toasts at any instant; creating with an id
/// that is already active replaces the existing record in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ToastId {
    /// Registry-generated, monotonically increasing
    Auto(u64),
    /// Caller-supplied
    Named(String),
}

impl From<&str> for ToastId {
    fn from(s: &str) -> Self {
        ToastId::Named(s.to_string())
    }
}

impl From<String> for ToastId {
    fn from(s: String) -> Self {
        ToastId::Named(s)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastId::Auto(n) => write!(f, "toast-{n}"),
            ToastId::Named(s) => write!(f, "{s}"),
        }
    }
}

// =============================================================================
// ToastKind
// =============================================================================

/// Categorizes a toast for default color and icon selection
///
/// The core never branches on the kind except for one rule: `Loading` toasts
/// ignore their auto-dismiss duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    /// Neutral message
    #[default]
    Default,
    /// Operation succeeded
    Success,
    /// Operation failed
    Error,
    /// Something needs attention
    Warning,
    /// Informational notice
    Info,
    /// Work in progress (spinner); exempt from auto-dismiss
    Loading,
}

impl ToastKind {
    /// Stable name used in config and theme files
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Default => "default",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
            ToastKind::Loading => "loading",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`ToastKind`] from its config-file name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown toast kind: {0:?}")]
pub struct ParseToastKindError(pub String);

impl FromStr for ToastKind {
    type Err = ParseToastKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(ToastKind::Default),
            "success" => Ok(ToastKind::Success),
            "error" => Ok(ToastKind::Error),
            "warning" => Ok(ToastKind::Warning),
            "info" => Ok(ToastKind::Info),
            "loading" => Ok(ToastKind::Loading),
            other => Err(ParseToastKindError(other.to_string())),
        }
    }
}

// =============================================================================
// AutoDismiss
// =============================================================================

/// How long a toast stays up before the display layer expires it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AutoDismiss {
    /// Use the surface's default duration
    #[default]
    Surface,
    /// Override the surface default
    After(Duration),
    /// Never auto-dismiss
    Never,
}

// =============================================================================
// Callbacks
// =============================================================================

/// Callback invoked by the registry at a lifecycle transition, given the
/// toast's own data
pub type ToastCallback = Arc<dyn Fn(&Toast) + Send + Sync>;

/// An action button embedded in a toast
///
/// The display layer renders the label and invokes `on_click` directly when
/// the button is pressed; the registry only carries it.
#[derive(Clone)]
pub struct ToastAction {
    /// Button label
    pub label: ToastContent,
    /// Invoked by the display layer on press
    pub on_click: ToastCallback,
}

impl ToastAction {
    /// Create an action with a label and click handler
    pub fn new<F>(label: impl Into<ToastContent>, on_click: F) -> Self
    where
        F: Fn(&Toast) + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            on_click: Arc::new(on_click),
        }
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Toast
// =============================================================================

/// A single notification record
///
/// `created_at` is a registry-assigned monotonic tick, immutable once set and
/// preserved across updates; it drives the visibility selector's recency
/// ordering.
#[derive(Clone)]
pub struct Toast {
    /// Unique identifier among active toasts
    pub id: ToastId,
    /// Visual kind
    pub kind: ToastKind,
    /// Title payload (opaque to the core)
    pub title: ToastContent,
    /// Optional description payload
    pub description: Option<ToastContent>,
    /// Monotonic creation tick, preserved across updates
    pub created_at: u64,
    /// Whether user-initiated dismissal is permitted
    pub dismissible: bool,
    /// Exempt from capacity-based hiding
    pub important: bool,
    /// Target surface; `None` means visible on every surface
    pub surface: Option<SurfaceId>,
    /// Auto-dismiss policy (ignored while `kind` is `Loading`)
    pub duration: AutoDismiss,
    /// Optional action button carried for the display layer
    pub action: Option<ToastAction>,
    /// Invoked when the toast is dismissed
    pub on_dismiss: Option<ToastCallback>,
    /// Invoked when the toast expires from its auto-dismiss countdown
    pub on_auto_close: Option<ToastCallback>,
}

impl Toast {
    /// Merge a partial update over this record
    ///
    /// `id` and `created_at` are untouched by construction. An unset field
    /// keeps its prior value, and an empty-text title is retained rather than
    /// blanking the toast.
    pub fn apply(&mut self, patch: ToastPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(title) = patch.title {
            if !title.is_empty() {
                self.title = title;
            }
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(dismissible) = patch.dismissible {
            self.dismissible = dismissible;
        }
        if let Some(important) = patch.important {
            self.important = important;
        }
        if let Some(surface) = patch.surface {
            self.surface = Some(surface);
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(action) = patch.action {
            self.action = Some(action);
        }
        if let Some(on_dismiss) = patch.on_dismiss {
            self.on_dismiss = Some(on_dismiss);
        }
        if let Some(on_auto_close) = patch.on_auto_close {
            self.on_auto_close = Some(on_auto_close);
        }
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("created_at", &self.created_at)
            .field("dismissible", &self.dismissible)
            .field("important", &self.important)
            .field("surface", &self.surface)
            .field("duration", &self.duration)
            .field("action", &self.action)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .field("on_auto_close", &self.on_auto_close.is_some())
            .finish()
    }
}

// =============================================================================
// ToastOptions
// =============================================================================

/// Creation-time options for a toast
#[derive(Clone, Default)]
pub struct ToastOptions {
    /// Caller-supplied identifier; `None` generates one
    pub id: Option<ToastId>,
    /// Description payload
    pub description: Option<ToastContent>,
    /// Whether user-initiated dismissal is permitted
    pub dismissible: Option<bool>,
    /// Exempt from capacity-based hiding
    pub important: bool,
    /// Target surface
    pub surface: Option<SurfaceId>,
    /// Auto-dismiss policy
    pub duration: AutoDismiss,
    /// Action button
    pub action: Option<ToastAction>,
    /// Dismissal callback
    pub on_dismiss: Option<ToastCallback>,
    /// Auto-close callback
    pub on_auto_close: Option<ToastCallback>,
}

impl ToastOptions {
    /// Creation options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a caller-supplied identifier
    pub fn id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the description payload
    pub fn description(mut self, description: impl Into<ToastContent>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set whether user-initiated dismissal is permitted (default true)
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }

    /// Exempt this toast from capacity-based hiding
    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// Route this toast to a single named surface
    pub fn surface(mut self, surface: impl Into<SurfaceId>) -> Self {
        self.surface = Some(surface.into());
        self
    }

    /// Override the surface's default auto-dismiss duration
    pub fn duration(mut self, duration: AutoDismiss) -> Self {
        self.duration = duration;
        self
    }

    /// Attach an action button
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Invoke a callback when the toast is dismissed
    pub fn on_dismiss<F>(mut self, f: F) -> Self
    where
        F: Fn(&Toast) + Send + Sync + 'static,
    {
        self.on_dismiss = Some(Arc::new(f));
        self
    }

    /// Invoke a callback when the toast expires from auto-dismiss
    pub fn on_auto_close<F>(mut self, f: F) -> Self
    where
        F: Fn(&Toast) + Send + Sync + 'static,
    {
        self.on_auto_close = Some(Arc::new(f));
        self
    }
}

// =============================================================================
// ToastPatch
// =============================================================================

/// Partial update merged over an active toast by `update`
///
/// Every field defaults to "keep the prior value". There is deliberately no
/// way to patch `id` or `created_at`.
#[derive(Clone, Default)]
pub struct ToastPatch {
    /// New kind
    pub kind: Option<ToastKind>,
    /// New title (an empty text title is ignored)
    pub title: Option<ToastContent>,
    /// New description
    pub description: Option<ToastContent>,
    /// New dismissibility
    pub dismissible: Option<bool>,
    /// New importance
    pub important: Option<bool>,
    /// New target surface
    pub surface: Option<SurfaceId>,
    /// New auto-dismiss policy
    pub duration: Option<AutoDismiss>,
    /// New action button
    pub action: Option<ToastAction>,
    /// New dismissal callback
    pub on_dismiss: Option<ToastCallback>,
    /// New auto-close callback
    pub on_auto_close: Option<ToastCallback>,
}

impl ToastPatch {
    /// An empty patch (keeps everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kind
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<ToastContent>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<ToastContent>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set dismissibility
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }

    /// Set importance
    pub fn important(mut self, important: bool) -> Self {
        self.important = Some(important);
        self
    }

    /// Set the target surface
    pub fn surface(mut self, surface: impl Into<SurfaceId>) -> Self {
        self.surface = Some(surface.into());
        self
    }

    /// Set the auto-dismiss policy
    pub fn duration(mut self, duration: AutoDismiss) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the action button
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Set the dismissal callback
    pub fn on_dismiss<F>(mut self, f: F) -> Self
    where
        F: Fn(&Toast) + Send + Sync + 'static,
    {
        self.on_dismiss = Some(Arc::new(f));
        self
    }

    /// Set the auto-close callback
    pub fn on_auto_close<F>(mut self, f: F) -> Self
    where
        F: Fn(&Toast) + Send + Sync + 'static,
    {
        self.on_auto_close = Some(Arc::new(f));
        self
    }
}
