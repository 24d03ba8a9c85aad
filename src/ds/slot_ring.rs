//! Fixed-size slot ring with round-robin (FIFO) overwrite.
//!
//! Stores up to `capacity` key/value entries in storage reserved once at
//! construction. Lookups are a linear scan over the occupied slots using only
//! `K: Eq`; there is no hash index. New keys are written at the cursor, which
//! then advances circularly, so once the ring is full the entry under the
//! cursor is always the oldest one and is the next to be overwritten.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                         SlotRing<K, V> (capacity = 4)                │
//!   │                                                                      │
//!   │   Filling (never wrapped):          Full (wrapped at least once):    │
//!   │                                                                      │
//!   │    [0]   [1]   [2]   [3]             [0]   [1]   [2]   [3]           │
//!   │   ┌───┐ ┌───┐ ┌───┐ ┌───┐           ┌───┐ ┌───┐ ┌───┐ ┌───┐          │
//!   │   │ A │ │ B │ │   │ │   │           │ E │ │ F │ │ C │ │ D │          │
//!   │   └───┘ └───┘ └───┘ └───┘           └───┘ └───┘ └───┘ └───┘          │
//!   │                ▲                                 ▲                   │
//!   │             cursor                            cursor                 │
//!   │   (first unoccupied slot)           (oldest entry, next to go)       │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Insert Flow
//!
//! ```text
//!   insert(key, value)
//!        │
//!        ▼
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │ Key in an occupied slot?                                             │
//!   │   YES → overwrite value in place (cursor untouched)                  │
//!   │   NO  → write slot[cursor], cursor = (cursor + 1) % capacity         │
//!   │         (a full ring drops the entry that was there)                 │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation          | Time        | Notes                               |
//! |--------------------|-------------|-------------------------------------|
//! | `get`              | O(capacity) | Scan in storage order               |
//! | `insert`           | O(capacity) | Duplicate check, then O(1) write    |
//! | `get_or_push_with` | O(capacity) | Single scan; computes only on miss  |
//! | `push_absent`      | O(1)        | Caller guarantees the key is absent |
//! | `clear`            | O(len)      | Drops entries, keeps the allocation |
//!
//! ## Notes
//! - Occupancy is positional: slots `[0, len)` are live, which is every slot
//!   once the ring has wrapped. While filling, `cursor == len`.
//! - The backing `Vec` is reserved to `capacity` up front and never grows past
//!   it, so the ring never reallocates.
//! - `check_invariants()` validates the bookkeeping; tests and fuzz targets
//!   call it after every operation.

use std::borrow::Borrow;
use std::iter::Chain;
use std::mem;
use std::slice;

use crate::error::InvariantError;

#[derive(Debug, Clone)]
struct Slot<K, V> {
    key: K,
    value: V,
}

/// Result of [`SlotRing::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement<K, V> {
    /// The key was present; carries the value it replaced.
    Updated(V),
    /// The key was new and landed in a previously unoccupied slot.
    Filled,
    /// The key was new and overwrote the oldest entry, returned here.
    Replaced(K, V),
}

/// Result of [`SlotRing::get_or_push_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe<K, V> {
    /// The key was present; nothing was computed.
    Hit,
    /// The key was computed and stored in a previously unoccupied slot.
    Filled,
    /// The key was computed and stored over the oldest entry, returned here.
    Replaced(K, V),
}

impl<K, V> From<Option<(K, V)>> for Probe<K, V> {
    fn from(evicted: Option<(K, V)>) -> Self {
        match evicted {
            Some((key, value)) => Probe::Replaced(key, value),
            None => Probe::Filled,
        }
    }
}

/// Fixed-capacity slot array with a FIFO overwrite cursor.
///
/// This is the storage engine behind [`BoundedMemo`](crate::policy::bounded::BoundedMemo)
/// and [`MemoCache`](crate::policy::memo_cache::MemoCache). It only rejects a
/// zero capacity; the soft upper limit is enforced by the cache types.
///
/// # Example
///
/// ```
/// use memo_cache::ds::{Placement, SlotRing};
///
/// let mut ring = SlotRing::new(2);
/// assert_eq!(ring.insert("a", 1), Placement::Filled);
/// assert_eq!(ring.insert("b", 2), Placement::Filled);
/// assert_eq!(ring.insert("a", 10), Placement::Updated(1));
///
/// // Full: the oldest entry goes first, regardless of the update above.
/// assert_eq!(ring.insert("c", 3), Placement::Replaced("a", 10));
/// assert_eq!(ring.get(&"b"), Some(&2));
/// ```
#[derive(Debug, Clone)]
pub struct SlotRing<K, V> {
    slots: Vec<Slot<K, V>>,
    capacity: usize,
    cursor: usize,
}

impl<K, V> SlotRing<K, V>
where
    K: Eq,
{
    /// Creates an empty ring with storage for `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "slot ring capacity must be greater than zero");
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    /// Returns the configured number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` once every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Returns the index of the slot the next new key will be written to.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the storage index of `key`, scanning in storage order.
    #[inline]
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.slots.iter().position(|slot| slot.key.borrow() == key)
    }

    /// Returns `true` if `key` occupies a slot.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.slots.iter().any(|slot| slot.key.borrow() == key)
    }

    /// Returns a shared reference to `key`'s value.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.slots
            .iter()
            .find(|slot| slot.key.borrow() == key)
            .map(|slot| &slot.value)
    }

    /// Returns a mutable reference to `key`'s value.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.slots
            .iter_mut()
            .find(|slot| slot.key.borrow() == key)
            .map(|slot| &mut slot.value)
    }

    /// Inserts or updates `key`.
    ///
    /// An existing key has its value replaced in place and the cursor does
    /// not move. A new key is written at the cursor via
    /// [`push_absent`](Self::push_absent).
    pub fn insert(&mut self, key: K, value: V) -> Placement<K, V> {
        if let Some(current) = self.get_mut(&key) {
            return Placement::Updated(mem::replace(current, value));
        }
        match self.push_absent(key, value) {
            (_, Some((old_key, old_value))) => Placement::Replaced(old_key, old_value),
            (_, None) => Placement::Filled,
        }
    }

    /// Returns `key`'s value, computing and storing it first on a miss.
    ///
    /// One scan decides hit or miss; `compute` runs at most once and only on
    /// a miss, and the new entry goes through [`push_absent`](Self::push_absent).
    pub fn get_or_push_with<F>(&mut self, key: K, compute: F) -> (&mut V, Probe<K, V>)
    where
        F: FnOnce(&K) -> V,
    {
        match self.position(&key) {
            Some(idx) => (&mut self.slots[idx].value, Probe::Hit),
            None => {
                let value = compute(&key);
                let (stored, evicted) = self.push_absent(key, value);
                (stored, Probe::from(evicted))
            }
        }
    }

    /// Fallible form of [`get_or_push_with`](Self::get_or_push_with).
    ///
    /// An `Err` from `compute` is returned as-is and leaves the ring untouched.
    pub fn try_get_or_push_with<F, E>(
        &mut self,
        key: K,
        compute: F,
    ) -> Result<(&mut V, Probe<K, V>), E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        match self.position(&key) {
            Some(idx) => Ok((&mut self.slots[idx].value, Probe::Hit)),
            None => {
                let value = compute(&key)?;
                let (stored, evicted) = self.push_absent(key, value);
                Ok((stored, Probe::from(evicted)))
            }
        }
    }

    /// Writes a key known to be absent at the cursor and advances it.
    ///
    /// Returns the stored value and the entry it overwrote, if the ring was
    /// full. The caller must have established that `key` is not present;
    /// writing a duplicate breaks the unique-key invariant.
    pub fn push_absent(&mut self, key: K, value: V) -> (&mut V, Option<(K, V)>) {
        debug_assert!(!self.contains(&key), "push_absent called with a present key");

        let idx = self.cursor;
        let evicted = if self.slots.len() < self.capacity {
            self.slots.push(Slot { key, value });
            None
        } else {
            let old = mem::replace(&mut self.slots[idx], Slot { key, value });
            Some((old.key, old.value))
        };
        self.cursor = (self.cursor + 1) % self.capacity;
        (&mut self.slots[idx].value, evicted)
    }

    /// Returns the entry the next new key will overwrite once the ring is
    /// full: the oldest live entry.
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        let idx = if self.is_full() { self.cursor } else { 0 };
        self.slots.get(idx).map(|slot| (&slot.key, &slot.value))
    }

    /// Iterates occupied entries in insertion order, oldest first.
    pub fn iter(&self) -> Iter<'_, K, V> {
        // While filling, cursor == len and `older` is empty.
        let (newer, older) = self.slots.split_at(self.cursor);
        Iter {
            inner: older.iter().chain(newer.iter()),
        }
    }

    /// Removes every entry and rewinds the cursor. Storage is retained.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.cursor = 0;
    }

    /// Validates the ring's bookkeeping.
    ///
    /// Checks that occupancy never exceeds capacity, that the cursor is in
    /// range and equals the occupied count while filling, and that no key
    /// occupies two slots.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.slots.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "occupied slots ({}) exceed capacity ({})",
                self.slots.len(),
                self.capacity
            )));
        }
        if self.cursor >= self.capacity {
            return Err(InvariantError::new(format!(
                "cursor {} out of range for capacity {}",
                self.cursor, self.capacity
            )));
        }
        if !self.is_full() && self.cursor != self.slots.len() {
            return Err(InvariantError::new(format!(
                "cursor {} does not follow the {} occupied slots",
                self.cursor,
                self.slots.len()
            )));
        }
        for (i, slot) in self.slots.iter().enumerate() {
            if self.slots[i + 1..].iter().any(|other| other.key == slot.key) {
                return Err(InvariantError::new(format!(
                    "key in slot {} is duplicated in a later slot",
                    i
                )));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Panics if [`check_invariants`](Self::check_invariants) fails.
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("slot ring invariant violated: {}", err);
        }
    }
}

/// Insertion-order iterator over a [`SlotRing`], oldest entry first.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    inner: Chain<slice::Iter<'a, Slot<K, V>>, slice::Iter<'a, Slot<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| (&slot.key, &slot.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    proptest! {
        /// Property: len() never exceeds capacity and invariants always hold
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_invariants_always_hold(
            capacity in 1usize..16,
            keys in prop::collection::vec(0u8..32, 0..200)
        ) {
            let mut ring = SlotRing::new(capacity);
            for k in keys {
                ring.insert(k, u32::from(k));
                prop_assert!(ring.len() <= capacity);
                prop_assert!(ring.check_invariants().is_ok());
            }
        }

        /// Property: the ring agrees with a VecDeque FIFO model
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_fifo_model(
            capacity in 1usize..12,
            ops in prop::collection::vec((0u8..24, any::<u16>()), 0..200)
        ) {
            let mut ring = SlotRing::new(capacity);
            let mut model: VecDeque<(u8, u16)> = VecDeque::new();

            for (k, v) in ops {
                let placement = ring.insert(k, v);
                if let Some(entry) = model.iter_mut().find(|(mk, _)| *mk == k) {
                    prop_assert_eq!(placement, Placement::Updated(entry.1));
                    entry.1 = v;
                } else if model.len() == capacity {
                    let oldest = model.pop_front().unwrap();
                    prop_assert_eq!(placement, Placement::Replaced(oldest.0, oldest.1));
                    model.push_back((k, v));
                } else {
                    prop_assert_eq!(placement, Placement::Filled);
                    model.push_back((k, v));
                }

                let ordered: Vec<(u8, u16)> = ring.iter().map(|(k, v)| (*k, *v)).collect();
                let expected: Vec<(u8, u16)> = model.iter().copied().collect();
                prop_assert_eq!(ordered, expected);
            }
        }
    }
}
