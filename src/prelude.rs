pub use crate::builder::MemoBuilder;
pub use crate::ds::{Placement, Probe, SlotRing};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::{MemoMetricsSnapshot, MetricsExporter, PrometheusTextExporter};
pub use crate::policy::DEFAULT_MAX_CAPACITY;
pub use crate::policy::bounded::BoundedMemo;
pub use crate::policy::memo_cache::MemoCache;
pub use crate::traits::{CoreCache, Memoize};
