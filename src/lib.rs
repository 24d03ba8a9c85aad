//! memo-cache: fixed-capacity FIFO memoization caches.
//!
//! A memo cache stores results of an expensive function keyed by its input
//! and holds at most a fixed number of entries. When full, a new key
//! overwrites the oldest entry. Lookups are a linear scan over a small array,
//! so keys only need `Eq`: no hashing, no ordering.
//!
//! - [`MemoCache<K, V, SIZE>`](policy::memo_cache::MemoCache): capacity in
//!   the type, checked at compile time.
//! - [`BoundedMemo<K, V>`](policy::bounded::BoundedMemo): capacity chosen at
//!   construction, checked at runtime.
//! - [`SlotRing`](ds::SlotRing): the slot array and cursor both are built on.
//!
//! ```
//! use memo_cache::prelude::*;
//!
//! fn slow_square(n: u64) -> u64 {
//!     n * n
//! }
//!
//! let mut cache = MemoCache::<u64, u64, 16>::new();
//! for n in [3, 4, 3, 3, 4] {
//!     let v = *cache.find_or_insert_with(n, |&n| slow_square(n));
//!     assert_eq!(v, n * n);
//! }
//! assert_eq!(cache.len(), 2);
//! ```

pub mod builder;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod policy;
pub mod prelude;
pub mod traits;

pub use crate::builder::MemoBuilder;
pub use crate::policy::bounded::BoundedMemo;
pub use crate::policy::memo_cache::MemoCache;
