//! Error types for the memo-cache library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a cache is configured with an invalid
//!   capacity (zero, or above the soft maximum of the scan-based design).
//! - [`InvariantError`]: Returned by `check_invariants` methods when the slot
//!   ring's internal bookkeeping is inconsistent.
//!
//! Lookup misses are not errors; they surface as `None` / `false`.
//!
//! ## Example Usage
//!
//! ```
//! use memo_cache::error::ConfigError;
//! use memo_cache::policy::bounded::BoundedMemo;
//!
//! // Fallible constructor for user-configurable capacities
//! let cache: Result<BoundedMemo<u32, f32>, ConfigError> = BoundedMemo::try_new(32);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = BoundedMemo::<u32, f32>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`SlotRing::check_invariants`](crate::ds::SlotRing::check_invariants)
/// and the `check_invariants` methods of the cache types built on it.
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`BoundedMemo::try_new`](crate::policy::bounded::BoundedMemo::try_new)
/// and [`MemoBuilder::try_build`](crate::builder::MemoBuilder::try_build).
/// Carries a human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use memo_cache::policy::bounded::BoundedMemo;
///
/// let err = BoundedMemo::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }

    /// Validates a slot count against an upper limit.
    ///
    /// Shared by every constructor so the messages stay identical.
    pub(crate) fn check_capacity(capacity: usize, max_capacity: usize) -> Result<(), Self> {
        if capacity == 0 {
            return Err(Self::new("cache capacity must be greater than zero"));
        }
        if capacity > max_capacity {
            return Err(Self::new(format!(
                "cache capacity {} exceeds the maximum of {} slots",
                capacity, max_capacity
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("cursor out of range");
        assert_eq!(err.to_string(), "cursor out of range");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("duplicate key");
        assert_eq!(err.message(), "duplicate key");
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    #[test]
    fn check_capacity_rejects_zero() {
        let err = ConfigError::check_capacity(0, 128).unwrap_err();
        assert!(err.message().contains("greater than zero"));
    }

    #[test]
    fn check_capacity_rejects_above_limit() {
        let err = ConfigError::check_capacity(129, 128).unwrap_err();
        assert_eq!(
            err.message(),
            "cache capacity 129 exceeds the maximum of 128 slots"
        );
    }

    #[test]
    fn check_capacity_accepts_bounds() {
        assert!(ConfigError::check_capacity(1, 128).is_ok());
        assert!(ConfigError::check_capacity(128, 128).is_ok());
    }
}
