//! Promise-driven toast lifecycle
//!
//! [`run_promise`] ties a toast to an asynchronous operation: a loading toast
//! goes up immediately, the work is awaited without holding the registry lock,
//! and the same toast is updated to a success or error state when the work
//! settles. The work's own failure is always re-raised to the caller after the
//! bookkeeping completes; the registry never swallows it.

use std::future::Future;

use toastkit_core::{AutoDismiss, ToastContent, ToastKind, ToastOptions, ToastPatch};

use crate::shared::{SharedToastRegistry, SharedToastRegistryExt};

/// Terminal-state title: either a fixed value or derived from the outcome
pub enum TextFor<T> {
    /// Fixed title
    Fixed(ToastContent),
    /// Title computed from the success value / error
    Derived(Box<dyn FnOnce(&T) -> ToastContent + Send>),
}

impl<T> TextFor<T> {
    /// Derive the title from the outcome
    pub fn derived<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> ToastContent + Send + 'static,
    {
        TextFor::Derived(Box::new(f))
    }

    fn resolve(self, value: &T) -> ToastContent {
        match self {
            TextFor::Fixed(content) => content,
            TextFor::Derived(f) => f(value),
        }
    }
}

impl<T> From<&str> for TextFor<T> {
    fn from(s: &str) -> Self {
        TextFor::Fixed(s.into())
    }
}

impl<T> From<String> for TextFor<T> {
    fn from(s: String) -> Self {
        TextFor::Fixed(s.into())
    }
}

impl<T> From<ToastContent> for TextFor<T> {
    fn from(content: ToastContent) -> Self {
        TextFor::Fixed(content)
    }
}

/// Titles and settle hook for a promise-driven toast
pub struct PromiseSpec<T, E> {
    /// Title while the work is pending
    pub loading: ToastContent,
    /// Title once the work succeeds
    pub success: TextFor<T>,
    /// Title once the work fails
    pub error: TextFor<E>,
    /// Runs exactly once after the terminal update, on either path
    pub on_finally: Option<Box<dyn FnOnce() + Send>>,
}

impl<T, E> PromiseSpec<T, E> {
    /// Describe the three lifecycle titles
    pub fn new(
        loading: impl Into<ToastContent>,
        success: impl Into<TextFor<T>>,
        error: impl Into<TextFor<E>>,
    ) -> Self {
        Self {
            loading: loading.into(),
            success: success.into(),
            error: error.into(),
            on_finally: None,
        }
    }

    /// Derive the success title from the result value
    pub fn success_with<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&T) -> ToastContent + Send + 'static,
    {
        self.success = TextFor::derived(f);
        self
    }

    /// Derive the error title from the failure
    pub fn error_with<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&E) -> ToastContent + Send + 'static,
    {
        self.error = TextFor::derived(f);
        self
    }

    /// Run a hook once the work settles, after the terminal update
    pub fn on_finally<F>(mut self, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_finally = Some(Box::new(f));
        self
    }
}

/// Drive a toast through an asynchronous operation's lifecycle
///
/// Creates a loading toast (never auto-dismissed, not user-dismissible),
/// awaits `work` with the registry lock released, then updates the same id to
/// a success or error state. The `on_finally` hook runs exactly once after
/// that update, before the result is returned; a failure is re-raised to the
/// caller unchanged.
///
/// Caller-supplied ids in `options` behave as they do for `create`: an id in
/// the dismissed history suppresses the toast entirely, in which case the
/// terminal update degrades to a no-op while the work's result still flows
/// through.
pub async fn run_promise<F, T, E>(
    registry: &SharedToastRegistry,
    work: F,
    spec: PromiseSpec<T, E>,
    options: ToastOptions,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let PromiseSpec {
        loading,
        success,
        error,
        on_finally,
    } = spec;

    let id = registry.create(
        loading,
        ToastKind::Loading,
        options.dismissible(false).duration(AutoDismiss::Never),
    );
    tracing::debug!(%id, "promise toast pending");

    let result = match work.await {
        Ok(value) => {
            let updated = registry.update(
                &id,
                ToastPatch::new()
                    .kind(ToastKind::Success)
                    .title(success.resolve(&value))
                    .dismissible(true)
                    .duration(AutoDismiss::Surface),
            );
            tracing::debug!(%id, updated, "promise toast settled: success");
            Ok(value)
        }
        Err(err) => {
            let updated = registry.update(
                &id,
                ToastPatch::new()
                    .kind(ToastKind::Error)
                    .title(error.resolve(&err))
                    .dismissible(true)
                    .duration(AutoDismiss::Surface),
            );
            tracing::debug!(%id, updated, "promise toast settled: error");
            Err(err)
        }
    };

    if let Some(finally) = on_finally {
        finally();
    }
    result
}
