//! Headless display surface demo
//!
//! Wires a fake display surface to a shared registry the way a real renderer
//! would: subscribe to the three event channels, mark a dirty flag, and on
//! each "frame" re-pull the snapshot and run the visibility selector. Run
//! with:
//!
//! ```sh
//! RUST_LOG=debug cargo run -p toastkit_registry --example headless_surface
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use toastkit_registry::{
    run_promise, shared_registry, visible_toasts, Anchor, PromiseSpec, SharedToastRegistry,
    SharedToastRegistryExt, SurfaceConfig, ToastKind, ToastOptions,
};

struct HeadlessSurface {
    config: SurfaceConfig,
    dirty: Arc<AtomicBool>,
}

impl HeadlessSurface {
    fn attach(registry: &SharedToastRegistry, config: SurfaceConfig) -> Self {
        let dirty = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&dirty);
        registry.subscribe_create(move |_| flag.store(true, Ordering::SeqCst));
        let flag = Arc::clone(&dirty);
        registry.subscribe_update(move |_| flag.store(true, Ordering::SeqCst));
        let flag = Arc::clone(&dirty);
        registry.subscribe_dismiss(move |_| flag.store(true, Ordering::SeqCst));
        Self { config, dirty }
    }

    /// Render a frame if anything changed since the last one
    fn frame(&self, registry: &SharedToastRegistry) {
        if !self.dirty.swap(false, Ordering::SeqCst) {
            return;
        }
        let snapshot = registry.get_all();
        let visible = visible_toasts(&snapshot, &self.config);
        tracing::info!(surface = %self.config.surface, "---- frame ----");
        for id in &visible {
            let toast = registry.get_by_id(id).expect("selected toast is active");
            tracing::info!("  [{}] {}: {}", toast.kind, id, toast.title);
            if let Some(after) = self.config.auto_dismiss_after(&toast) {
                tracing::debug!("       expires in {after:?}");
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let registry = shared_registry();
    let surface = HeadlessSurface::attach(
        &registry,
        SurfaceConfig::new().anchor(Anchor::Bottom).capacity(3),
    );

    registry.create("Welcome back", ToastKind::Info, ToastOptions::new());
    registry.create(
        "Storage almost full",
        ToastKind::Warning,
        ToastOptions::new().important(true),
    );
    surface.frame(&registry);

    // A promise-driven toast: loading -> success on the same id.
    let upload = run_promise(
        &registry,
        async {
            tokio::time::sleep(Duration::from_millis(150)).await;
            Ok::<u32, String>(12)
        },
        PromiseSpec::new("Uploading…", "?", "Upload failed")
            .success_with(|n: &u32| format!("Uploaded {n} photos").into()),
        ToastOptions::new().id("upload"),
    )
    .await;
    tracing::info!(?upload, "upload settled");
    surface.frame(&registry);

    // Simulate the user swiping the warning away, then the timers expiring
    // the rest.
    let snapshot = registry.get_all();
    for toast in snapshot {
        if toast.dismissible {
            registry.dismiss(Some(&toast.id));
        }
    }
    surface.frame(&registry);
}
