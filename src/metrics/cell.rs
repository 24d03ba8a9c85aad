use std::cell::Cell;

/// A metrics-only counter that can be bumped through `&self`.
///
/// Lookups take `&self`, so their counters need interior mutability. Holding
/// one makes the owning cache `!Sync`, which matches its single-owner
/// contract; share the cache behind a lock instead.
#[repr(transparent)]
#[derive(Debug, Default, Clone)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}
