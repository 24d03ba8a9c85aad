//! Opt-in operation counters (cargo feature `metrics`).
//!
//! Recording, snapshotting and exporting are separate traits so the cache
//! code only ever writes counters. See [`traits`] for the hierarchy.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use cell::MetricsCell;
pub use exporter::PrometheusTextExporter;
pub use metrics_impl::MemoMetrics;
pub use snapshot::MemoMetricsSnapshot;
pub use traits::{
    CoreMetricsRecorder, MemoMetricsReadRecorder, MemoMetricsRecorder, MetricsExporter,
    MetricsReset, MetricsSnapshotProvider,
};
