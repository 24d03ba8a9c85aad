//! # Cache Trait Hierarchy
//!
//! Shared interface for the fixed-capacity memo caches, so callers,
//! benchmarks and tests can be written once for both the runtime-sized
//! [`BoundedMemo`](crate::policy::bounded::BoundedMemo) and the type-sized
//! [`MemoCache`](crate::policy::memo_cache::MemoCache).
//!
//! ## Architecture
//!
//! ```text
//!                 ┌─────────────────────────────────────────┐
//!                 │            CoreCache<K, V>              │
//!                 │                                         │
//!                 │  size(&) → usize        (fixed slots)   │
//!                 │  len(&) → usize         (occupied)      │
//!                 │  find(&, &Q) → Option<&V>               │
//!                 │  find_mut(&mut, &Q) → Option<&mut V>    │
//!                 │  contains(&, &Q) → bool                 │
//!                 │  insert(&mut, K, V)                     │
//!                 │  clear(&mut)                            │
//!                 └──────────────────┬──────────────────────┘
//!                                    │
//!                                    ▼
//!                 ┌─────────────────────────────────────────┐
//!                 │             Memoize<K, V>               │
//!                 │                                         │
//!                 │  find_or_insert_with(K, F) → &V         │
//!                 │  try_find_or_insert_with(K, F)          │
//!                 │      → Result<&V, E>                    │
//!                 └─────────────────────────────────────────┘
//! ```
//!
//! ## Notes
//!
//! - Lookups never change eviction order. Eviction is FIFO by insertion, so
//!   there is no `touch`/`get` that promotes an entry.
//! - There is no `remove`: arbitrary removal would punch holes into the
//!   insertion order the cursor relies on.
//! - Keys only need `Eq`. Lookup methods accept any borrowed form `Q` of the
//!   key, e.g. `&str` for `String` keys.
//! - Returned references borrow the cache; every mutating method takes
//!   `&mut self`, so a reference cannot outlive the next mutation.
//!
//! ## Thread Safety
//!
//! None of the implementations synchronize internally. Wrap a cache in a lock
//! (e.g. `parking_lot::Mutex<MemoCache<..>>`) to share it between threads.

use std::borrow::Borrow;

/// Core operations of a fixed-capacity cache.
///
/// # Example
///
/// ```
/// use memo_cache::policy::memo_cache::MemoCache;
/// use memo_cache::traits::CoreCache;
///
/// fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, &str)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.to_string());
///     }
/// }
///
/// let mut cache = MemoCache::<u64, String, 8>::new();
/// warm(&mut cache, &[(1, "one"), (2, "two")]);
/// assert_eq!(cache.len(), 2);
/// assert_eq!(cache.size(), 8);
/// ```
pub trait CoreCache<K, V> {
    /// Returns the fixed number of slots (not the number of entries).
    fn size(&self) -> usize;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up `key` by scanning the slots.
    fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq;

    /// Looks up `key` for in-place modification of its value.
    fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq;

    /// Returns `true` if `key` is cached.
    fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq;

    /// Inserts `key`, or updates its value in place if already cached.
    ///
    /// A new key into a full cache silently evicts the oldest entry.
    fn insert(&mut self, key: K, value: V);

    /// Drops every entry and rewinds the cursor. The size is unchanged.
    fn clear(&mut self);
}

/// Memoization entry points.
///
/// # Example
///
/// ```
/// use memo_cache::policy::bounded::BoundedMemo;
/// use memo_cache::traits::{CoreCache, Memoize};
///
/// fn fib<C: Memoize<u64, u64>>(memo: &mut C, n: u64) -> u64 {
///     if n < 2 {
///         return n;
///     }
///     if let Some(v) = memo.find(&n) {
///         return *v;
///     }
///     let v = fib(memo, n - 1) + fib(memo, n - 2);
///     *memo.find_or_insert_with(n, |_| v)
/// }
///
/// let mut memo = BoundedMemo::new(64);
/// assert_eq!(fib(&mut memo, 50), 12_586_269_025);
/// ```
pub trait Memoize<K, V>: CoreCache<K, V> {
    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs exactly once on a miss and never on a hit.
    fn find_or_insert_with<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V;

    /// Fallible form of [`find_or_insert_with`](Self::find_or_insert_with).
    ///
    /// Errors are returned to the caller and never cached.
    fn try_find_or_insert_with<F, E>(&mut self, key: K, compute: F) -> Result<&V, E>
    where
        F: FnOnce(&K) -> Result<V, E>;
}
