//! List-refresh sequencing
//!
//! Network completions can arrive out of order; without sequencing an old
//! fetch finishing late would overwrite a newer list. Each refresh takes a
//! generation before sending its request and commits its results only if no
//! newer refresh has started since. Stale completions are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic fetch-generation counter for one displayed list
#[derive(Debug, Default)]
pub struct ListSequencer {
    latest: AtomicU64,
}

impl ListSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh; the returned generation accompanies the request.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a completed fetch for `generation` may update the display.
    /// False means a newer refresh has started and this result is stale.
    pub fn try_commit(&self, generation: u64) -> bool {
        let latest = self.latest.load(Ordering::SeqCst);
        if generation < latest {
            tracing::debug!(generation, latest, "dropping stale list refresh");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_refresh_commits() {
        let seq = ListSequencer::new();
        let g = seq.begin();
        assert!(seq.try_commit(g));
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let seq = ListSequencer::new();
        let first = seq.begin();
        let second = seq.begin();

        // The newer fetch lands first; the older one must not overwrite it.
        assert!(seq.try_commit(second));
        assert!(!seq.try_commit(first));
    }

    #[test]
    fn test_generations_are_monotonic() {
        let seq = ListSequencer::new();
        let a = seq.begin();
        let b = seq.begin();
        let c = seq.begin();
        assert!(a < b && b < c);
    }
}
