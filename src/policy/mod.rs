pub mod bounded;
pub mod memo_cache;

/// Soft upper bound on the number of slots.
///
/// Every lookup scans all occupied slots, so past a few hundred entries a
/// hash map is the better tool. [`MemoBuilder::max_capacity`](crate::builder::MemoBuilder::max_capacity)
/// raises the limit explicitly for callers who accept the cost.
pub const DEFAULT_MAX_CAPACITY: usize = 128;
