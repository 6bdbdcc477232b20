//! Dismissed-id history
//!
//! Records which ids were dismissed and when, so a duplicate `create` arriving
//! from a stale async callback after a dismiss is suppressed instead of
//! resurrecting the toast. Bounded: growth past the high-water mark evicts the
//! oldest entries down to the low-water mark, trading perfect suppression for
//! bounded memory.

use rustc_hash::FxHashMap;

use toastkit_core::ToastId;

/// Entry count that triggers eviction
pub(crate) const HIGH_WATER: usize = 256;
/// Entry count eviction trims down to
pub(crate) const LOW_WATER: usize = 128;

/// Bounded map from dismissed toast id to dismissal tick
pub(crate) struct DismissedHistory {
    entries: FxHashMap<ToastId, u64>,
    high_water: usize,
    low_water: usize,
}

impl DismissedHistory {
    pub(crate) fn new() -> Self {
        Self::with_watermarks(HIGH_WATER, LOW_WATER)
    }

    pub(crate) fn with_watermarks(high_water: usize, low_water: usize) -> Self {
        debug_assert!(high_water > low_water && low_water > 0);
        Self {
            entries: FxHashMap::default(),
            high_water,
            low_water,
        }
    }

    /// Record a dismissal; re-dismissing refreshes the tick
    pub(crate) fn record(&mut self, id: ToastId, tick: u64) {
        self.entries.insert(id, tick);
        if self.entries.len() > self.high_water {
            self.evict_oldest();
        }
    }

    pub(crate) fn contains(&self, id: &ToastId) -> bool {
        self.entries.contains_key(id)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn evict_oldest(&mut self) {
        let mut by_age: Vec<(ToastId, u64)> = self
            .entries
            .iter()
            .map(|(id, tick)| (id.clone(), *tick))
            .collect();
        by_age.sort_by_key(|(_, tick)| *tick);

        let excess = self.entries.len().saturating_sub(self.low_water);
        for (id, _) in by_age.into_iter().take(excess) {
            self.entries.remove(&id);
        }
        tracing::debug!(
            evicted = excess,
            remaining = self.entries.len(),
            "dismissed-id history eviction"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_clears() {
        let mut history = DismissedHistory::new();
        history.record("a".into(), 1);

        assert!(history.contains(&"a".into()));
        assert!(!history.contains(&"b".into()));

        history.clear();
        assert!(!history.contains(&"a".into()));
    }

    #[test]
    fn evicts_oldest_down_to_low_water() {
        let mut history = DismissedHistory::with_watermarks(4, 2);
        for n in 0..5u64 {
            history.record(ToastId::Auto(n), n);
        }

        assert_eq!(history.len(), 2);
        // The newest entries are kept, the oldest evicted.
        assert!(history.contains(&ToastId::Auto(4)));
        assert!(history.contains(&ToastId::Auto(3)));
        assert!(!history.contains(&ToastId::Auto(0)));
    }

    #[test]
    fn redismiss_refreshes_age() {
        let mut history = DismissedHistory::with_watermarks(4, 3);
        history.record("a".into(), 1);
        history.record("b".into(), 2);
        history.record("c".into(), 3);
        history.record("a".into(), 4); // refresh: "a" is now newest
        history.record("d".into(), 5);
        history.record("e".into(), 6); // crosses high water

        assert_eq!(history.len(), 3);
        assert!(history.contains(&"a".into()));
        assert!(history.contains(&"d".into()));
        assert!(history.contains(&"e".into()));
        assert!(!history.contains(&"b".into()));
        assert!(!history.contains(&"c".into()));
    }
}
