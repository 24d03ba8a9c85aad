//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting* and *export* so that counters can be
//! used for benchmarking and production monitoring without coupling those
//! concerns to the cache logic.
//!
//! ## Architecture
//!
//! ```text
//!                 ┌─────────────────────────────┐
//!                 │     CoreMetricsRecorder     │
//!                 │  insert_call/insert_new     │
//!                 │  insert_update/evicted      │
//!                 │  clear                      │
//!                 └──────────────┬──────────────┘
//!                                │
//!                                ▼
//!                 ┌─────────────────────────────┐      ┌─────────────────────────────┐
//!                 │     MemoMetricsRecorder     │      │   MemoMetricsReadRecorder   │
//!                 │  memo_hit/compute_call      │      │  find_hit/find_miss (&self) │
//!                 │  compute_failure            │      │                             │
//!                 └─────────────────────────────┘      └─────────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters shared by any fixed-capacity cache.
pub trait CoreMetricsRecorder {
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Counters for the memoization entry points.
pub trait MemoMetricsRecorder: CoreMetricsRecorder {
    /// `find_or_insert_with` found the key; nothing was computed.
    fn record_memo_hit(&mut self);
    /// `find_or_insert_with` missed and invoked the compute callback.
    fn record_compute_call(&mut self);
    /// A fallible compute callback returned an error (nothing was stored).
    fn record_compute_failure(&mut self);
}

/// Lookup counters for `&self` methods (uses interior mutability).
pub trait MemoMetricsReadRecorder {
    fn record_find_hit(&self);
    fn record_find_miss(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
