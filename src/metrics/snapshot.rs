use std::fmt;

use crate::metrics::metrics_impl::MemoMetrics;

/// Point-in-time copy of a cache's [`MemoMetrics`] plus gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoMetricsSnapshot {
    pub find_calls: u64,
    pub find_hits: u64,
    pub find_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evicted_entries: u64,

    pub memo_hits: u64,
    pub compute_calls: u64,
    pub compute_failures: u64,

    pub clear_calls: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl MemoMetricsSnapshot {
    pub(crate) fn capture(metrics: &MemoMetrics, cache_len: usize, capacity: usize) -> Self {
        Self {
            find_calls: metrics.find_calls.get(),
            find_hits: metrics.find_hits.get(),
            find_misses: metrics.find_misses.get(),
            insert_calls: metrics.insert_calls,
            insert_updates: metrics.insert_updates,
            insert_new: metrics.insert_new,
            evicted_entries: metrics.evicted_entries,
            memo_hits: metrics.memo_hits,
            compute_calls: metrics.compute_calls,
            compute_failures: metrics.compute_failures,
            clear_calls: metrics.clear_calls,
            cache_len,
            capacity,
        }
    }

    /// Fraction of memoized lookups served without computing, in `[0.0, 1.0]`.
    pub fn memo_hit_rate(&self) -> f64 {
        let total = self.memo_hits + self.compute_calls;
        if total == 0 {
            0.0
        } else {
            self.memo_hits as f64 / total as f64
        }
    }
}

impl fmt::Display for MemoMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MemoMetrics {{ finds: {} ({} hits), memo_hits: {}, computes: {} ({} failed), \
             hit_rate: {:.2}%, inserts: {} ({} new, {} updates), evicted: {}, clears: {}, \
             len: {}/{} }}",
            self.find_calls,
            self.find_hits,
            self.memo_hits,
            self.compute_calls,
            self.compute_failures,
            self.memo_hit_rate() * 100.0,
            self.insert_calls,
            self.insert_new,
            self.insert_updates,
            self.evicted_entries,
            self.clear_calls,
            self.cache_len,
            self.capacity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_rate_is_zero_without_traffic() {
        let snapshot = MemoMetricsSnapshot::default();
        assert_eq!(snapshot.memo_hit_rate(), 0.0);
    }

    #[test]
    fn hit_rate_counts_memo_hits_against_computes() {
        let snapshot = MemoMetricsSnapshot {
            memo_hits: 3,
            compute_calls: 1,
            ..Default::default()
        };
        assert_eq!(snapshot.memo_hit_rate(), 0.75);
        assert!(snapshot.to_string().contains("hit_rate: 75.00%"));
    }

    #[test]
    fn capture_copies_cells_and_gauges() {
        let mut metrics = MemoMetrics::new();
        metrics.find_calls.incr();
        metrics.find_hits.incr();
        metrics.compute_calls = 4;

        let snapshot = MemoMetricsSnapshot::capture(&metrics, 3, 8);
        assert_eq!(snapshot.find_calls, 1);
        assert_eq!(snapshot.find_hits, 1);
        assert_eq!(snapshot.compute_calls, 4);
        assert_eq!(snapshot.cache_len, 3);
        assert_eq!(snapshot.capacity, 8);
    }
}
