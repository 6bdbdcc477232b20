//! Visibility Selector - which toasts a surface renders, in what order
//!
//! Pure function of (toast snapshot, surface configuration). Given the same
//! inputs it always produces the same ordered id sequence, regardless of the
//! order toasts arrived in the snapshot relative to one another's creation.
//!
//! Selection runs in four steps:
//!
//! 1. Filter to toasts routed to this surface (unset surface = global)
//! 2. Stable sort by creation tick, newest first
//! 3. Enforce capacity as a stable filter: important toasts are always kept;
//!    whatever budget remains goes to the newest regular toasts
//! 4. For bottom-anchored surfaces, reverse the final sequence so the newest
//!    toast stays adjacent to the entry edge
//!
//! The reversal is a presentation-edge correction applied last, so the
//! selected *set* never depends on anchoring; only the order does.

use smallvec::SmallVec;

use crate::surface::{Anchor, SurfaceConfig};
use crate::toast::{Toast, ToastId};

/// Compute the ordered toast ids a surface should render
///
/// `toasts` is a registry snapshot in insertion order. Capacity 0 disables
/// the limit entirely. Important toasts are exempt from capacity-based hiding
/// but do not jump ahead of newer regular toasts.
pub fn visible_toasts(toasts: &[Toast], config: &SurfaceConfig) -> Vec<ToastId> {
    let mut picked: SmallVec<[&Toast; 8]> =
        toasts.iter().filter(|t| config.accepts(t)).collect();

    // Stable: toasts sharing a tick keep their insertion order.
    picked.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    if config.capacity > 0 {
        let important = picked.iter().filter(|t| t.important).count();
        let mut budget = config.capacity.saturating_sub(important);
        picked.retain(|t| {
            if t.important {
                true
            } else if budget > 0 {
                budget -= 1;
                true
            } else {
                false
            }
        });
    }

    let mut ids: Vec<ToastId> = picked.iter().map(|t| t.id.clone()).collect();
    if config.anchor == Anchor::Bottom {
        ids.reverse();
    }

    tracing::trace!(
        surface = %config.surface,
        selected = ids.len(),
        of = toasts.len(),
        "visibility selection"
    );
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{AutoDismiss, ToastKind};

    fn toast(id: &str, created_at: u64) -> Toast {
        Toast {
            id: id.into(),
            kind: ToastKind::Default,
            title: id.into(),
            description: None,
            created_at,
            dismissible: true,
            important: false,
            surface: None,
            duration: AutoDismiss::Surface,
            action: None,
            on_dismiss: None,
            on_auto_close: None,
        }
    }

    fn important(id: &str, created_at: u64) -> Toast {
        Toast {
            important: true,
            ..toast(id, created_at)
        }
    }

    fn ids(names: &[&str]) -> Vec<ToastId> {
        names.iter().map(|n| ToastId::from(*n)).collect()
    }

    #[test]
    fn newest_first_under_capacity() {
        // Five toasts, none important, capacity 3, top anchor: exactly the
        // three most recent, newest first.
        let toasts: Vec<Toast> = (1..=5).map(|n| toast(&format!("t{n}"), n)).collect();
        let config = SurfaceConfig::new().capacity(3);

        assert_eq!(visible_toasts(&toasts, &config), ids(&["t5", "t4", "t3"]));
    }

    #[test]
    fn zero_capacity_means_unlimited() {
        let toasts: Vec<Toast> = (1..=5).map(|n| toast(&format!("t{n}"), n)).collect();
        let config = SurfaceConfig::new().capacity(0);

        assert_eq!(visible_toasts(&toasts, &config).len(), 5);
    }

    #[test]
    fn important_toasts_survive_capacity() {
        let toasts = vec![
            important("keep", 1),
            toast("a", 2),
            toast("b", 3),
            toast("c", 4),
        ];
        let config = SurfaceConfig::new().capacity(2);

        // One slot goes to the important toast, one to the newest regular.
        // The important toast stays in its natural recency position.
        assert_eq!(visible_toasts(&toasts, &config), ids(&["c", "keep"]));
    }

    #[test]
    fn important_toasts_can_exceed_capacity() {
        let toasts = vec![important("a", 1), important("b", 2), important("c", 3)];
        let config = SurfaceConfig::new().capacity(2);

        assert_eq!(visible_toasts(&toasts, &config), ids(&["c", "b", "a"]));
    }

    #[test]
    fn bottom_anchor_is_reversed_top_anchor() {
        let toasts: Vec<Toast> = (1..=4).map(|n| toast(&format!("t{n}"), n)).collect();
        let top = SurfaceConfig::new().anchor(Anchor::Top).capacity(0);
        let bottom = SurfaceConfig::new().anchor(Anchor::Bottom).capacity(0);

        let mut reversed = visible_toasts(&toasts, &bottom);
        reversed.reverse();
        assert_eq!(reversed, visible_toasts(&toasts, &top));
    }

    #[test]
    fn bottom_anchor_selects_the_same_set() {
        let toasts: Vec<Toast> = (1..=5).map(|n| toast(&format!("t{n}"), n)).collect();
        let bottom = SurfaceConfig::new().anchor(Anchor::Bottom).capacity(3);

        assert_eq!(visible_toasts(&toasts, &bottom), ids(&["t3", "t4", "t5"]));
    }

    #[test]
    fn surface_routing_filters_before_ordering() {
        let mut routed = toast("sheet-only", 10);
        routed.surface = Some("sheet".into());
        let toasts = vec![toast("global", 1), routed];

        let main = SurfaceConfig::new();
        let sheet = SurfaceConfig::new().surface("sheet");

        assert_eq!(visible_toasts(&toasts, &main), ids(&["global"]));
        assert_eq!(
            visible_toasts(&toasts, &sheet),
            ids(&["sheet-only", "global"])
        );
    }

    #[test]
    fn selection_ignores_snapshot_order() {
        // Arrival order into the selector must not matter, only created_at.
        let forward = vec![toast("a", 1), toast("b", 2)];
        let backward = vec![toast("b", 2), toast("a", 1)];
        let config = SurfaceConfig::new();

        assert_eq!(
            visible_toasts(&forward, &config),
            visible_toasts(&backward, &config)
        );
    }
}
