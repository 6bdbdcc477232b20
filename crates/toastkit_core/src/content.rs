//! Toast payload content
//!
//! Titles and descriptions are opaque to the core: a toast may carry plain
//! text or a handle to renderable content minted by the display layer. The
//! core passes both through without inspecting them.

use std::fmt;

/// Opaque handle to display-layer renderable content
///
/// The display layer registers whatever it wants to render (an element tree,
/// a view id, ...) and hands the core a `ContentHandle` standing in for it.
/// The core only ever stores and compares these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentHandle(u64);

impl ContentHandle {
    /// Reconstruct a handle from a raw ID
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Title or description payload of a toast
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastContent {
    /// Plain text
    Text(String),
    /// Opaque renderable content owned by the display layer
    Handle(ContentHandle),
}

impl ToastContent {
    /// Get the text payload, if this is plain text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToastContent::Text(s) => Some(s),
            ToastContent::Handle(_) => None,
        }
    }

    /// Whether this content is empty
    ///
    /// Only the empty string counts as empty; a content handle always has
    /// something behind it as far as the core is concerned.
    pub fn is_empty(&self) -> bool {
        match self {
            ToastContent::Text(s) => s.is_empty(),
            ToastContent::Handle(_) => false,
        }
    }
}

impl From<&str> for ToastContent {
    fn from(s: &str) -> Self {
        ToastContent::Text(s.to_string())
    }
}

impl From<String> for ToastContent {
    fn from(s: String) -> Self {
        ToastContent::Text(s)
    }
}

impl From<ContentHandle> for ToastContent {
    fn from(handle: ContentHandle) -> Self {
        ToastContent::Handle(handle)
    }
}

impl fmt::Display for ToastContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastContent::Text(s) => write!(f, "{s}"),
            ToastContent::Handle(h) => write!(f, "<content #{}>", h.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_emptiness() {
        assert!(ToastContent::from("").is_empty());
        assert!(!ToastContent::from("Saved").is_empty());
        assert!(!ToastContent::Handle(ContentHandle::from_raw(7)).is_empty());
    }

    #[test]
    fn handle_round_trip() {
        let handle = ContentHandle::from_raw(42);
        assert_eq!(handle.id(), 42);
        assert_eq!(ToastContent::from(handle).as_text(), None);
    }
}
