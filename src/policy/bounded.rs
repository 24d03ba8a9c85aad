//! Runtime-sized FIFO memo cache.
//!
//! [`BoundedMemo`] fixes its slot count when constructed and never resizes.
//! It is the cache to reach for when the capacity comes from configuration;
//! when it is known at compile time, [`MemoCache`](super::memo_cache::MemoCache)
//! moves the capacity check to compile time as well.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                        BoundedMemo<K, V> Layout                             │
//! │                                                                             │
//! │   ┌─────────────────────────────────────────────────────────────────────┐   │
//! │   │  ring: SlotRing<K, V>           (slots reserved at construction)    │   │
//! │   │                                                                     │   │
//! │   │    [0]     [1]     [2]     [3]     [4]     [5]     [6]     [7]      │   │
//! │   │   ┌───┐   ┌───┐   ┌───┐   ┌───┐   ┌───┐   ┌───┐   ┌───┐   ┌───┐    │   │
//! │   │   │ I │   │ J │   │ C │   │ D │   │ E │   │ F │   │ G │   │ H │    │   │
//! │   │   └───┘   └───┘   └───┘   └───┘   └───┘   └───┘   └───┘   └───┘    │   │
//! │   │                     ▲                                               │   │
//! │   │                   cursor (oldest entry, overwritten next)           │   │
//! │   └─────────────────────────────────────────────────────────────────────┘   │
//! │                                                                             │
//! │   metrics: MemoMetrics            (feature "metrics")                       │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation                  | Time        | Notes                              |
//! |----------------------------|-------------|------------------------------------|
//! | `find` / `contains`        | O(capacity) | Linear scan, no reordering         |
//! | `insert`                   | O(capacity) | Update in place or write at cursor |
//! | `find_or_insert_with`      | O(capacity) | One scan; computes only on miss    |
//! | `clear`                    | O(len)      | Keeps the slot storage             |
//!
//! ## Example Usage
//!
//! ```
//! use memo_cache::policy::bounded::BoundedMemo;
//!
//! let mut cache = BoundedMemo::new(3);
//! cache.insert("veni", 19);
//! cache.insert("vidi", 23);
//! cache.insert("vici", 29);
//!
//! // Full: the first insertion is the first to go.
//! cache.insert("blah", 42);
//! assert!(!cache.contains(&"veni"));
//! assert_eq!(cache.find(&"vidi"), Some(&23));
//! ```
//!
//! ## Thread Safety
//!
//! Not thread-safe. Wrap in a lock to share between threads.

use std::borrow::Borrow;
use std::fmt;

use crate::ds::slot_ring::{Iter, SlotRing};
use crate::error::{ConfigError, InvariantError};
use crate::policy::DEFAULT_MAX_CAPACITY;
use crate::traits::{CoreCache, Memoize};

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::MemoMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::MemoMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, MemoMetricsReadRecorder, MemoMetricsRecorder, MetricsReset,
    MetricsSnapshotProvider,
};

/// Fixed-capacity FIFO memo cache with a capacity chosen at construction.
///
/// # Type Parameters
///
/// - `K`: Key type, only `Eq` is required (no hashing, no ordering)
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use memo_cache::policy::bounded::BoundedMemo;
///
/// let mut cache = BoundedMemo::new(4);
/// let mut computed = 0;
///
/// let v = *cache.find_or_insert_with(7u64, |k| { computed += 1; k * k });
/// assert_eq!(v, 49);
///
/// // Second call is served from the cache.
/// let v = *cache.find_or_insert_with(7u64, |k| { computed += 1; k * k });
/// assert_eq!(v, 49);
/// assert_eq!(computed, 1);
/// ```
#[derive(Clone)]
pub struct BoundedMemo<K, V> {
    ring: SlotRing<K, V>,

    #[cfg(feature = "metrics")]
    metrics: MemoMetrics,
}

impl<K, V> BoundedMemo<K, V>
where
    K: Eq,
{
    /// Creates a cache with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or above [`DEFAULT_MAX_CAPACITY`]. See
    /// [`try_new`](Self::try_new).
    ///
    /// # Example
    ///
    /// ```
    /// use memo_cache::policy::bounded::BoundedMemo;
    ///
    /// let cache: BoundedMemo<String, i32> = BoundedMemo::new(16);
    /// assert_eq!(cache.size(), 16);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a cache with `capacity` slots, returning an error on an invalid
    /// capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero or above
    /// [`DEFAULT_MAX_CAPACITY`].
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_max_capacity(capacity, DEFAULT_MAX_CAPACITY)
    }

    /// Validates `capacity` against an explicit ceiling.
    pub(crate) fn with_max_capacity(
        capacity: usize,
        max_capacity: usize,
    ) -> Result<Self, ConfigError> {
        ConfigError::check_capacity(capacity, max_capacity)?;
        Ok(Self::from_ring(SlotRing::new(capacity)))
    }

    /// Wraps a ring whose capacity was already validated.
    pub(crate) fn from_ring(ring: SlotRing<K, V>) -> Self {
        Self {
            ring,
            #[cfg(feature = "metrics")]
            metrics: MemoMetrics::default(),
        }
    }

    /// Returns the fixed number of slots.
    #[inline]
    pub fn size(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns the number of cached entries (at most [`size`](Self::size)).
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if nothing is cached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Looks up `key` without affecting eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use memo_cache::policy::bounded::BoundedMemo;
    ///
    /// let mut cache: BoundedMemo<String, f32> = BoundedMemo::new(4);
    /// assert!(cache.find("hello").is_none());
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
        let found = self.ring.get(key);

        #[cfg(feature = "metrics")]
        if found.is_some() {
            (&self.metrics).record_find_hit();
        } else {
            (&self.metrics).record_find_miss();
        }

        found
    }

    /// Looks up `key` for in-place modification. The cursor does not move.
    #[inline]
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let found = self.ring.get_mut(key);

        #[cfg(feature = "metrics")]
        if found.is_some() {
            (&self.metrics).record_find_hit();
        } else {
            (&self.metrics).record_find_miss();
        }

        found
    }

    /// Returns `true` if `key` is cached. Stops at the first match.
    ///
    /// Counted as a lookup, like [`find`](Self::find).
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let found = self.ring.contains(key);

        #[cfg(feature = "metrics")]
        if found {
            (&self.metrics).record_find_hit();
        } else {
            (&self.metrics).record_find_miss();
        }

        found
    }

    /// Inserts `key`, or overwrites its value if already cached.
    ///
    /// Updating an existing key neither moves the cursor nor evicts. A new
    /// key into a full cache silently replaces the oldest entry.
    ///
    /// # Example
    ///
    /// ```
    /// use memo_cache::policy::bounded::BoundedMemo;
    ///
    /// let mut cache = BoundedMemo::new(2);
    /// cache.insert("John", 17);
    /// cache.insert("Doe", 19);
    ///
    /// cache.insert("John", 42);
    /// assert_eq!(cache.find(&"John"), Some(&42));
    /// assert_eq!(cache.find(&"Doe"), Some(&19));
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        let _placement = self.ring.insert(key, value);

        #[cfg(feature = "metrics")]
        self.metrics.record_placement(&_placement);
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` is called exactly once on a miss and never on a hit. The new
    /// entry follows the same FIFO placement as [`insert`](Self::insert).
    pub fn find_or_insert_with<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        let (value, _probe) = self.ring.get_or_push_with(key, compute);

        #[cfg(feature = "metrics")]
        self.metrics.record_probe(&_probe);

        value
    }

    /// Fallible form of [`find_or_insert_with`](Self::find_or_insert_with).
    ///
    /// On a miss, an `Err` from `compute` is returned unchanged and nothing is
    /// stored, so the next call for the same key computes again.
    ///
    /// # Example
    ///
    /// ```
    /// use memo_cache::policy::bounded::BoundedMemo;
    ///
    /// let mut cache: BoundedMemo<&str, u16> = BoundedMemo::new(4);
    ///
    /// let parsed = cache.try_find_or_insert_with("80", |s| s.parse::<u16>());
    /// assert_eq!(parsed, Ok(&80));
    ///
    /// let failed = cache.try_find_or_insert_with("eighty", |s| s.parse::<u16>());
    /// assert!(failed.is_err());
    /// assert!(!cache.contains(&"eighty"));
    /// ```
    pub fn try_find_or_insert_with<F, E>(&mut self, key: K, compute: F) -> Result<&V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        match self.ring.try_get_or_push_with(key, compute) {
            Ok((value, _probe)) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_probe(&_probe);

                Ok(&*value)
            },
            Err(err) => {
                #[cfg(feature = "metrics")]
                {
                    self.metrics.record_compute_call();
                    self.metrics.record_compute_failure();
                }

                Err(err)
            },
        }
    }

    /// Drops every entry and rewinds the cursor. The size is unchanged.
    pub fn clear(&mut self) {
        self.ring.clear();

        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }

    /// Returns the entry the next new key evicts once the cache is full.
    ///
    /// # Example
    ///
    /// ```
    /// use memo_cache::policy::bounded::BoundedMemo;
    ///
    /// let mut cache = BoundedMemo::new(2);
    /// assert_eq!(cache.peek_oldest(), None);
    ///
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    /// assert_eq!(cache.peek_oldest(), Some((&1, &"one")));
    /// ```
    #[inline]
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        self.ring.peek_oldest()
    }

    /// Iterates cached entries in insertion order, oldest first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.ring.iter()
    }

    /// Validates the slot bookkeeping. See [`SlotRing::check_invariants`].
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.ring.check_invariants()
    }
}

#[cfg(feature = "metrics")]
impl<K, V> BoundedMemo<K, V>
where
    K: Eq,
{
    /// Returns the raw counters.
    pub fn metrics(&self) -> &MemoMetrics {
        &self.metrics
    }

    pub fn metrics_snapshot(&self) -> MemoMetricsSnapshot {
        MemoMetricsSnapshot::capture(&self.metrics, self.ring.len(), self.ring.capacity())
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<MemoMetricsSnapshot> for BoundedMemo<K, V>
where
    K: Eq,
{
    fn snapshot(&self) -> MemoMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsReset for BoundedMemo<K, V> {
    fn reset_metrics(&mut self) {
        self.metrics = MemoMetrics::default();
    }
}

impl<K, V> CoreCache<K, V> for BoundedMemo<K, V>
where
    K: Eq,
{
    #[inline]
    fn size(&self) -> usize {
        BoundedMemo::size(self)
    }

    #[inline]
    fn len(&self) -> usize {
        BoundedMemo::len(self)
    }

    #[inline]
    fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        BoundedMemo::find(self, key)
    }

    #[inline]
    fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        BoundedMemo::find_mut(self, key)
    }

    #[inline]
    fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        BoundedMemo::contains(self, key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) {
        BoundedMemo::insert(self, key, value)
    }

    #[inline]
    fn clear(&mut self) {
        BoundedMemo::clear(self)
    }
}

impl<K, V> Memoize<K, V> for BoundedMemo<K, V>
where
    K: Eq,
{
    #[inline]
    fn find_or_insert_with<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        BoundedMemo::find_or_insert_with(self, key, compute)
    }

    #[inline]
    fn try_find_or_insert_with<F, E>(&mut self, key: K, compute: F) -> Result<&V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        BoundedMemo::try_find_or_insert_with(self, key, compute)
    }
}

impl<K, V> fmt::Debug for BoundedMemo<K, V>
where
    K: Eq,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedMemo")
            .field("size", &self.size())
            .field("len", &self.len())
            .field("cursor", &self.ring.cursor())
            .finish_non_exhaustive()
    }
}

impl<'a, K, V> IntoIterator for &'a BoundedMemo<K, V>
where
    K: Eq,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
