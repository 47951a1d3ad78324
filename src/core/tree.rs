//! The prefix sum index structure.
//!
//! A fixed-size sequence of `i64` elements supporting point updates and
//! prefix/range sum queries, each in O(log n) slot visits. Externally the
//! sequence is 0-indexed; internally slots are 1-indexed with slot 0 left
//! as a sentinel so that the query loop terminates at position 0.
//!
//! The aggregate is additive sums only. Non-invertible aggregates (min/max)
//! and range updates are out of scope for this structure.

use crate::core::{lowest_set_bit, Error};

/// A Fenwick tree over a fixed-size sequence of 64-bit signed integers.
///
/// The element count is fixed at construction; values change only through
/// additive point updates. The structure exclusively owns its internal
/// slots and carries no synchronization: concurrent mutation requires
/// external locking by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSumIndex {
    /// Internal slots, 1-indexed; `tree[0]` is an unused sentinel.
    /// `tree[i]` holds the sum of the `lowest_set_bit(i)` logical elements
    /// ending at logical index `i - 1`.
    tree: Vec<i64>,
}

impl PrefixSumIndex {
    /// Create an index over `len` logical elements, all zero.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            tree: vec![0; len + 1],
        }
    }

    /// Create an index whose logical elements start as `values`.
    ///
    /// Equivalent to [`PrefixSumIndex::new`] followed by one update per
    /// element in increasing index order.
    #[must_use]
    pub fn from_values(values: &[i64]) -> Self {
        let mut index = Self::new(values.len());
        for (i, &value) in values.iter().enumerate() {
            // Index is in range by construction.
            let _ = index.update(i, value);
        }
        index
    }

    /// Get the number of logical elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    /// Check if the index holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add `delta` to the logical element at `index`.
    ///
    /// Walks every internal slot whose covered run includes `index`,
    /// starting at 1-indexed position `index + 1` and advancing by the
    /// position's own lowest set bit, O(log n) steps in total.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`. State is
    /// untouched on error.
    pub fn update(&mut self, index: usize, delta: i64) -> Result<(), Error> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index: index as i64,
                len: self.len(),
            });
        }

        let mut pos = index + 1;
        while pos <= self.len() {
            self.tree[pos] += delta;
            pos += lowest_set_bit(pos);
        }
        Ok(())
    }

    /// Sum of the logical elements in `[0, index]` inclusive.
    ///
    /// `index == -1` denotes the empty prefix and returns 0 without
    /// traversal (the walk starts at position `index + 1 == 0`, which
    /// terminates the loop immediately). Positions retreat by their own
    /// lowest set bit, O(log n) steps in total.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index` is outside `[-1, len)`.
    pub fn prefix_sum(&self, index: i64) -> Result<i64, Error> {
        if index < -1 || index >= self.len() as i64 {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.sum_of_first((index + 1) as usize))
    }

    /// Sum of the logical elements in `[left, right]` inclusive.
    ///
    /// Defined as `prefix_sum(right) - prefix_sum(left - 1)`; `left == 0`
    /// uses the empty-prefix convention. An empty range (`left > right`,
    /// both bounds still within `[0, len)`) returns 0 through an explicit
    /// guard rather than relying on the subtraction cancelling out.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if either bound is `>= len`.
    pub fn range_sum(&self, left: usize, right: usize) -> Result<i64, Error> {
        for bound in [left, right] {
            if bound >= self.len() {
                return Err(Error::IndexOutOfRange {
                    index: bound as i64,
                    len: self.len(),
                });
            }
        }
        if left > right {
            return Ok(0);
        }
        Ok(self.sum_of_first(right + 1) - self.sum_of_first(left))
    }

    /// Get the current value of the logical element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn value(&self, index: usize) -> Result<i64, Error> {
        self.range_sum(index, index)
    }

    /// Sum of all logical elements. Returns 0 for an empty index.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.sum_of_first(self.len())
    }

    /// Sum of the first `count` logical elements, `0 <= count <= len`.
    fn sum_of_first(&self, mut pos: usize) -> i64 {
        let mut acc = 0;
        while pos > 0 {
            acc += self.tree[pos];
            pos -= lowest_set_bit(pos);
        }
        acc
    }
}
