//! Runtime configuration for [`BoundedMemo`].
//!
//! The plain constructors cap the slot count at [`DEFAULT_MAX_CAPACITY`].
//! `MemoBuilder` is the way to lift that ceiling explicitly when the
//! linear-scan cost of a larger cache is acceptable.
//!
//! ## Example
//!
//! ```rust
//! use memo_cache::builder::MemoBuilder;
//!
//! let mut cache = MemoBuilder::new(256)
//!     .max_capacity(512)
//!     .build::<u64, String>();
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.find(&1), Some(&"hello".to_string()));
//! assert_eq!(cache.size(), 256);
//! ```

use crate::error::ConfigError;
use crate::policy::DEFAULT_MAX_CAPACITY;
use crate::policy::bounded::BoundedMemo;

/// Builder for [`BoundedMemo`] instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoBuilder {
    capacity: usize,
    max_capacity: usize,
}

impl MemoBuilder {
    /// Create a new builder for a cache with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }

    /// Override the capacity ceiling (defaults to [`DEFAULT_MAX_CAPACITY`]).
    pub fn max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Build the cache.
    ///
    /// # Panics
    ///
    /// Panics on any configuration [`try_build`](Self::try_build) rejects.
    pub fn build<K, V>(self) -> BoundedMemo<K, V>
    where
        K: Eq,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Build the cache, reporting invalid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max_capacity` is zero, or if `capacity` is
    /// zero or above `max_capacity`.
    ///
    /// ```rust
    /// use memo_cache::builder::MemoBuilder;
    ///
    /// assert!(MemoBuilder::new(200).try_build::<u32, u32>().is_err());
    /// assert!(MemoBuilder::new(200).max_capacity(200).try_build::<u32, u32>().is_ok());
    /// ```
    pub fn try_build<K, V>(self) -> Result<BoundedMemo<K, V>, ConfigError>
    where
        K: Eq,
    {
        if self.max_capacity == 0 {
            return Err(ConfigError::new(
                "maximum cache capacity must be greater than zero",
            ));
        }
        BoundedMemo::with_max_capacity(self.capacity, self.max_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ceiling() {
        assert!(MemoBuilder::new(DEFAULT_MAX_CAPACITY)
            .try_build::<u64, u64>()
            .is_ok());

        let err = MemoBuilder::new(DEFAULT_MAX_CAPACITY + 1)
            .try_build::<u64, u64>()
            .unwrap_err();
        assert!(err.message().contains("exceeds the maximum of 128"));
    }

    #[test]
    fn test_raised_ceiling() {
        let mut cache = MemoBuilder::new(1000)
            .max_capacity(1000)
            .build::<u32, u32>();
        for k in 0..1500 {
            cache.insert(k, k);
        }
        assert_eq!(cache.len(), 1000);
        assert!(!cache.contains(&499));
        assert!(cache.contains(&500));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_rejects_zero_limits() {
        let err = MemoBuilder::new(4)
            .max_capacity(0)
            .try_build::<u8, u8>()
            .unwrap_err();
        assert!(err.message().contains("maximum cache capacity"));

        assert!(MemoBuilder::new(0).try_build::<u8, u8>().is_err());
    }

    #[test]
    #[should_panic(expected = "greater than zero")]
    fn test_build_panics_on_zero() {
        let _ = MemoBuilder::new(0).build::<u8, u8>();
    }

    #[test]
    fn test_capacity_enforcement() {
        let mut cache = MemoBuilder::new(2).build::<u64, String>();

        cache.insert(1, "one".to_string());
        cache.insert(2, "two".to_string());
        cache.insert(3, "three".to_string()); // evicts key 1

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
    }
}
