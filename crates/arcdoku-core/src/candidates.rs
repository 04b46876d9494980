//! Candidate values for a single cell.
//!
//! This module provides [`CandidateSet`], a bitset over the values a cell
//! may still take. A single 32-bit word covers every supported grid size,
//! so copying a set costs the same as copying an integer and snapshotting
//! a whole board of candidates is a plain clone.
//!
//! # Examples
//!
//! ```
//! use arcdoku_core::CandidateSet;
//!
//! let mut set = CandidateSet::new();
//! set.insert(1);
//! set.insert(5);
//! set.insert(9);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(5));
//! ```

use std::{fmt, iter::FusedIterator};

/// A set of candidate values for one cell, stored as a bitset.
///
/// Bit `v - 1` represents value `v`; values from 1 to
/// [`MAX_VALUE`](Self::MAX_VALUE) are supported, enough for a 25x25 grid.
/// Iteration yields values in ascending order.
///
/// # Examples
///
/// ```
/// use arcdoku_core::CandidateSet;
///
/// // Start from every value a 9x9 cell can take
/// let mut candidates = CandidateSet::full(9);
///
/// candidates.remove(5);
/// candidates.remove(7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(5));
/// assert!(candidates.contains(1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CandidateSet(u32);

impl CandidateSet {
    /// Largest value a set can hold.
    pub const MAX_VALUE: u8 = 25;

    /// The set with no values.
    pub const EMPTY: Self = Self(0);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates the set of every value from 1 to `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_VALUE`](Self::MAX_VALUE).
    #[must_use]
    pub const fn full(size: usize) -> Self {
        assert!(
            size <= Self::MAX_VALUE as usize,
            "set size must be at most 25"
        );
        Self((1_u32 << size) - 1)
    }

    fn mask(value: u8) -> u32 {
        assert!(
            (1..=Self::MAX_VALUE).contains(&value),
            "Value must be between 1 and 25, got {value}"
        );
        1 << (value - 1)
    }

    /// Adds `value` to the set. Returns `true` if it was newly added.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside the range `1..=25`.
    pub fn insert(&mut self, value: u8) -> bool {
        let mask = Self::mask(value);
        let added = self.0 & mask == 0;
        self.0 |= mask;
        added
    }

    /// Removes `value` from the set. Returns `true` if it was present.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside the range `1..=25`.
    pub fn remove(&mut self, value: u8) -> bool {
        let mask = Self::mask(value);
        let removed = self.0 & mask != 0;
        self.0 &= !mask;
        removed
    }

    /// Returns `true` if `value` is in the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside the range `1..=25`.
    #[must_use]
    pub fn contains(self, value: u8) -> bool {
        self.0 & Self::mask(value) != 0
    }

    /// Number of values in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set holds no values.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole value of the set, or `None` unless exactly one
    /// value remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcdoku_core::CandidateSet;
    ///
    /// assert_eq!(CandidateSet::from_iter([7]).as_single(), Some(7));
    /// assert_eq!(CandidateSet::from_iter([1, 2]).as_single(), None);
    /// assert_eq!(CandidateSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<u8> {
        if self.len() != 1 {
            return None;
        }
        u8::try_from(self.0.trailing_zeros() + 1).ok()
    }

    /// Iterates the values in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<u8> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}

/// Ascending iterator over the values of a [`CandidateSet`].
#[derive(Debug, Clone)]
pub struct Iter(u32);

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let lowest = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        u8::try_from(lowest + 1).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_value_range() {
        let mut set = CandidateSet::new();
        set.insert(1);
        set.insert(25);
        assert!(set.contains(1));
        assert!(set.contains(25));
        assert_eq!(set.len(), 2);
    }

    #[test]
    #[should_panic(expected = "Value must be")]
    fn test_rejects_zero() {
        let mut set = CandidateSet::new();
        set.insert(0);
    }

    #[test]
    #[should_panic(expected = "Value must be")]
    fn test_rejects_twenty_six() {
        let mut set = CandidateSet::new();
        set.insert(26);
    }

    #[test]
    fn test_from_iter() {
        let set = CandidateSet::from_iter([1, 5, 9]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(1));
        assert!(set.contains(5));
        assert!(set.contains(9));
    }

    #[test]
    fn test_iteration_order() {
        let set = CandidateSet::from_iter([9, 1, 5, 3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_full_sets() {
        assert_eq!(CandidateSet::EMPTY.len(), 0);
        assert_eq!(CandidateSet::full(9).len(), 9);

        for value in 1..=9 {
            assert!(CandidateSet::full(9).contains(value));
        }

        let small = CandidateSet::full(4);
        assert!(small.contains(4));
        assert!(!small.contains(5));
    }

    #[test]
    fn test_insert_and_remove_report_presence() {
        let mut set = CandidateSet::new();
        assert!(set.insert(5));
        assert!(!set.insert(5));
        assert!(set.remove(5));
        assert!(!set.remove(5));
        assert!(set.is_empty());
    }

    #[test]
    fn test_as_single() {
        assert_eq!(CandidateSet::EMPTY.as_single(), None);
        assert_eq!(CandidateSet::from_iter([7]).as_single(), Some(7));
        assert_eq!(CandidateSet::from_iter([1, 9]).as_single(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(CandidateSet::EMPTY.to_string(), "{}");
        assert_eq!(CandidateSet::from_iter([4, 2, 8]).to_string(), "{2 4 8}");
    }

    proptest! {
        #[test]
        fn test_behaves_like_btree_set(values in proptest::collection::vec(1_u8..=25, 0..24)) {
            let set: CandidateSet = values.iter().copied().collect();
            let reference: BTreeSet<u8> = values.iter().copied().collect();

            prop_assert_eq!(set.len(), reference.len());
            let collected: Vec<u8> = set.iter().collect();
            let expected: Vec<u8> = reference.into_iter().collect();
            prop_assert_eq!(collected, expected);
        }

        #[test]
        fn test_insert_undoes_remove(value in 1_u8..=25) {
            let mut set = CandidateSet::full(25);
            prop_assert!(set.remove(value));
            prop_assert!(!set.contains(value));
            prop_assert!(set.insert(value));
            prop_assert_eq!(set, CandidateSet::full(25));
        }
    }
}
