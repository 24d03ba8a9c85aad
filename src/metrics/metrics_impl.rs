use crate::ds::{Placement, Probe};
use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{
    CoreMetricsRecorder, MemoMetricsReadRecorder, MemoMetricsRecorder,
};

/// Operation counters embedded in each memo cache.
#[derive(Debug, Default, Clone)]
pub struct MemoMetrics {
    pub find_calls: MetricsCell,
    pub find_hits: MetricsCell,
    pub find_misses: MetricsCell,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evicted_entries: u64,
    pub memo_hits: u64,
    pub compute_calls: u64,
    pub compute_failures: u64,
    pub clear_calls: u64,
}

impl MemoMetrics {
    pub fn new() -> MemoMetrics {
        Self::default()
    }

    /// Records the outcome of an `insert`.
    pub(crate) fn record_placement<K, V>(&mut self, placement: &Placement<K, V>) {
        self.record_insert_call();
        match placement {
            Placement::Updated(_) => self.record_insert_update(),
            Placement::Filled => self.record_insert_new(),
            Placement::Replaced(..) => {
                self.record_insert_new();
                self.record_evicted_entry();
            },
        }
    }

    /// Records the outcome of a `find_or_insert_with` lookup.
    pub(crate) fn record_probe<K, V>(&mut self, probe: &Probe<K, V>) {
        match probe {
            Probe::Hit => self.record_memo_hit(),
            Probe::Filled => {
                self.record_compute_call();
                self.record_insert_new();
            },
            Probe::Replaced(..) => {
                self.record_compute_call();
                self.record_insert_new();
                self.record_evicted_entry();
            },
        }
    }
}

impl CoreMetricsRecorder for MemoMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl MemoMetricsRecorder for MemoMetrics {
    fn record_memo_hit(&mut self) {
        self.memo_hits += 1;
    }

    fn record_compute_call(&mut self) {
        self.compute_calls += 1;
    }

    fn record_compute_failure(&mut self) {
        self.compute_failures += 1;
    }
}

impl MemoMetricsReadRecorder for &MemoMetrics {
    fn record_find_hit(&self) {
        self.find_calls.incr();
        self.find_hits.incr();
    }

    fn record_find_miss(&self) {
        self.find_calls.incr();
        self.find_misses.incr();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_outcomes_are_counted() {
        let mut m = MemoMetrics::new();
        m.record_placement::<u32, u32>(&Placement::Filled);
        m.record_placement::<u32, u32>(&Placement::Updated(1));
        m.record_placement(&Placement::Replaced(1u32, 2u32));

        assert_eq!(m.insert_calls, 3);
        assert_eq!(m.insert_new, 2);
        assert_eq!(m.insert_updates, 1);
        assert_eq!(m.evicted_entries, 1);
    }

    #[test]
    fn probe_outcomes_are_counted() {
        let mut m = MemoMetrics::new();
        m.record_probe::<u32, u32>(&Probe::Hit);
        m.record_probe::<u32, u32>(&Probe::Filled);
        m.record_probe(&Probe::Replaced(1u32, 2u32));

        assert_eq!(m.memo_hits, 1);
        assert_eq!(m.compute_calls, 2);
        assert_eq!(m.insert_new, 2);
        assert_eq!(m.evicted_entries, 1);
        assert_eq!(m.insert_calls, 0);
    }

    #[test]
    fn read_recorder_counts_through_shared_ref() {
        let m = MemoMetrics::new();
        (&m).record_find_hit();
        (&m).record_find_miss();
        (&m).record_find_miss();

        assert_eq!(m.find_calls.get(), 3);
        assert_eq!(m.find_hits.get(), 1);
        assert_eq!(m.find_misses.get(), 2);
    }
}
