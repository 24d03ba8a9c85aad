//! Compile-time-sized FIFO memo cache.
//!
//! [`MemoCache<K, V, SIZE>`] carries its slot count in the type. A `SIZE`
//! of zero or above [`DEFAULT_MAX_CAPACITY`] is rejected when
//! [`MemoCache::new`] is instantiated, so an invalid cache fails the build
//! instead of panicking at runtime.
//!
//! ```
//! use memo_cache::policy::memo_cache::MemoCache;
//!
//! let mut cache = MemoCache::<&str, i32, 2>::new();
//! cache.insert("John", 17);
//! cache.insert("Doe", 19);
//! cache.insert("Jane", 21);
//!
//! assert!(!cache.contains(&"John"));
//! assert_eq!(cache.size(), 2);
//! ```
//!
//! A zero-slot cache does not compile:
//!
//! ```compile_fail
//! use memo_cache::policy::memo_cache::MemoCache;
//!
//! let _cache = MemoCache::<u32, u32, 0>::new();
//! ```
//!
//! Neither does one above [`DEFAULT_MAX_CAPACITY`]:
//!
//! ```compile_fail
//! use memo_cache::policy::memo_cache::MemoCache;
//!
//! let _cache = MemoCache::<u32, u32, 129>::new();
//! ```
//!
//! The largest accepted size builds:
//!
//! ```
//! use memo_cache::policy::memo_cache::MemoCache;
//!
//! let cache = MemoCache::<u32, u32, 128>::new();
//! assert_eq!(cache.size(), 128);
//! ```

use std::borrow::Borrow;
use std::fmt;

use crate::ds::slot_ring::{Iter, SlotRing};
use crate::error::InvariantError;
use crate::policy::DEFAULT_MAX_CAPACITY;
use crate::policy::bounded::BoundedMemo;
use crate::traits::{CoreCache, Memoize};

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::MemoMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::MemoMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsReset, MetricsSnapshotProvider};

/// FIFO memo cache holding at most `SIZE` entries.
///
/// Behaves exactly like [`BoundedMemo`] with `capacity == SIZE`.
#[derive(Clone)]
pub struct MemoCache<K, V, const SIZE: usize> {
    inner: BoundedMemo<K, V>,
}

impl<K, V, const SIZE: usize> MemoCache<K, V, SIZE>
where
    K: Eq,
{
    /// Slot count fixed by the type. Usable in const contexts.
    pub const CAPACITY: usize = SIZE;

    /// Creates an empty cache.
    pub fn new() -> Self {
        const {
            assert!(SIZE > 0, "cache capacity must be greater than zero");
            assert!(
                SIZE <= DEFAULT_MAX_CAPACITY,
                "cache capacity exceeds the maximum number of slots"
            );
        }
        Self {
            inner: BoundedMemo::from_ring(SlotRing::new(SIZE)),
        }
    }

    /// Returns the fixed number of slots, `SIZE`.
    #[inline]
    pub const fn size(&self) -> usize {
        SIZE
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Looks up `key` without affecting eviction order.
    ///
    /// ```
    /// use memo_cache::policy::memo_cache::MemoCache;
    ///
    /// let mut cache = MemoCache::<String, f32, 4>::new();
    /// assert_eq!(cache.find("hello"), None);
    ///
    /// cache.insert("hello".to_string(), 42.0);
    /// assert_eq!(cache.find("hello"), Some(&42.0));
    /// ```
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.inner.find(key)
    }

    #[inline]
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.inner.find_mut(key)
    }

    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.inner.contains(key)
    }

    /// Inserts or updates `key`. A new key into a full cache replaces the
    /// oldest entry.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) {
        self.inner.insert(key, value)
    }

    /// Returns the cached value for `key`, computing it on a miss.
    ///
    /// ```
    /// use memo_cache::policy::memo_cache::MemoCache;
    ///
    /// let mut cache = MemoCache::<u64, u64, 4>::new();
    /// assert_eq!(*cache.find_or_insert_with(6, |n| n * 7), 42);
    /// assert_eq!(*cache.find_or_insert_with(6, |_| unreachable!()), 42);
    /// ```
    #[inline]
    pub fn find_or_insert_with<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        self.inner.find_or_insert_with(key, compute)
    }

    /// Fallible form of [`find_or_insert_with`](Self::find_or_insert_with).
    /// Errors are returned and never cached.
    #[inline]
    pub fn try_find_or_insert_with<F, E>(&mut self, key: K, compute: F) -> Result<&V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        self.inner.try_find_or_insert_with(key, compute)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    #[inline]
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        self.inner.peek_oldest()
    }

    /// Iterates cached entries oldest first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.inner.iter()
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.check_invariants()
    }
}

impl<K, V, const SIZE: usize> Default for MemoCache<K, V, SIZE>
where
    K: Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "metrics")]
impl<K, V, const SIZE: usize> MemoCache<K, V, SIZE>
where
    K: Eq,
{
    pub fn metrics(&self) -> &MemoMetrics {
        self.inner.metrics()
    }

    pub fn metrics_snapshot(&self) -> MemoMetricsSnapshot {
        self.inner.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<K, V, const SIZE: usize> MetricsSnapshotProvider<MemoMetricsSnapshot>
    for MemoCache<K, V, SIZE>
where
    K: Eq,
{
    fn snapshot(&self) -> MemoMetricsSnapshot {
        self.inner.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<K, V, const SIZE: usize> MetricsReset for MemoCache<K, V, SIZE> {
    fn reset_metrics(&mut self) {
        self.inner.reset_metrics()
    }
}

impl<K, V, const SIZE: usize> CoreCache<K, V> for MemoCache<K, V, SIZE>
where
    K: Eq,
{
    #[inline]
    fn size(&self) -> usize {
        SIZE
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.inner.find(key)
    }

    #[inline]
    fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.inner.find_mut(key)
    }

    #[inline]
    fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.inner.contains(key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) {
        self.inner.insert(key, value)
    }

    #[inline]
    fn clear(&mut self) {
        self.inner.clear()
    }
}

impl<K, V, const SIZE: usize> Memoize<K, V> for MemoCache<K, V, SIZE>
where
    K: Eq,
{
    #[inline]
    fn find_or_insert_with<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        self.inner.find_or_insert_with(key, compute)
    }

    #[inline]
    fn try_find_or_insert_with<F, E>(&mut self, key: K, compute: F) -> Result<&V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        self.inner.try_find_or_insert_with(key, compute)
    }
}

impl<K, V, const SIZE: usize> fmt::Debug for MemoCache<K, V, SIZE>
where
    K: Eq,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache")
            .field("size", &SIZE)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<'a, K, V, const SIZE: usize> IntoIterator for &'a MemoCache<K, V, SIZE>
where
    K: Eq,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
