//! Prefix sum index - a Fenwick tree (binary indexed tree).
//!
//! Point updates and prefix/range sum queries over a fixed-size sequence of
//! 64-bit signed integers, each operation in O(log n) time.
//!
//! The pure Rust implementation lives in [`core`]; this module exposes it to
//! Python as the `prefix_sum_index` extension module.

#![allow(clippy::redundant_pub_crate)]

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

pub mod core;

impl From<core::Error> for PyErr {
    fn from(err: core::Error) -> Self {
        Self::new::<PyIndexError, _>(err.to_string())
    }
}

/// A Fenwick tree with O(log n) point updates and sum queries.
///
/// The element count is fixed at construction. Indices are 0-based;
/// `prefix_sum(-1)` is the empty prefix and returns 0.
#[pyclass]
pub struct PrefixSumIndex {
    inner: core::PrefixSumIndex,
}

#[pymethods]
impl PrefixSumIndex {
    /// Create an index over `size` elements, all zero.
    ///
    /// # Errors
    ///
    /// Returns error if `size` is negative.
    #[new]
    pub fn new(size: i64) -> PyResult<Self> {
        let size = usize::try_from(size)
            .map_err(|_| PyErr::new::<PyValueError, _>("size must be non-negative"))?;
        Ok(Self {
            inner: core::PrefixSumIndex::new(size),
        })
    }

    /// Create an index whose elements start as `values`.
    #[staticmethod]
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_values(values: Vec<i64>) -> Self {
        Self {
            inner: core::PrefixSumIndex::from_values(&values),
        }
    }

    /// Return the number of elements.
    fn __len__(&self) -> usize {
        self.inner.len()
    }

    /// Add `delta` to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns error if `index` is out of bounds.
    pub fn update(&mut self, index: i64, delta: i64) -> PyResult<()> {
        let index = usize::try_from(index).map_err(|_| core::Error::IndexOutOfRange {
            index,
            len: self.inner.len(),
        })?;
        self.inner.update(index, delta)?;
        Ok(())
    }

    /// Sum of the elements in `[0, index]` inclusive; `-1` returns 0.
    ///
    /// # Errors
    ///
    /// Returns error if `index` is outside `[-1, len)`.
    pub fn prefix_sum(&self, index: i64) -> PyResult<i64> {
        Ok(self.inner.prefix_sum(index)?)
    }

    /// Sum of the elements in `[left, right]` inclusive; 0 if `left > right`.
    ///
    /// # Errors
    ///
    /// Returns error if either bound is out of bounds.
    pub fn range_sum(&self, left: i64, right: i64) -> PyResult<i64> {
        let left = self.checked_bound(left)?;
        let right = self.checked_bound(right)?;
        Ok(self.inner.range_sum(left, right)?)
    }

    /// Get the current value of the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns error if `index` is out of bounds.
    pub fn value(&self, index: i64) -> PyResult<i64> {
        let index = self.checked_bound(index)?;
        Ok(self.inner.value(index)?)
    }

    /// Sum of all elements.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.inner.total()
    }
}

impl PrefixSumIndex {
    /// Reject negative bounds before handing them to the unsigned core API.
    fn checked_bound(&self, index: i64) -> Result<usize, core::Error> {
        usize::try_from(index).map_err(|_| core::Error::IndexOutOfRange {
            index,
            len: self.inner.len(),
        })
    }
}

/// Python module definition
#[pymodule]
fn prefix_sum_index(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PrefixSumIndex>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_index() {
        let index = PrefixSumIndex::new(5).unwrap();
        assert_eq!(index.__len__(), 5);
        assert_eq!(index.total(), 0);
    }

    #[test]
    fn test_negative_size_rejected() {
        assert!(PrefixSumIndex::new(-1).is_err());
    }

    #[test]
    fn test_from_values_and_queries() {
        let index = PrefixSumIndex::from_values(vec![1, 2, 3, 4, 5]);
        assert_eq!(index.prefix_sum(2).unwrap(), 6);
        assert_eq!(index.range_sum(1, 3).unwrap(), 9);
        assert_eq!(index.value(4).unwrap(), 5);
    }

    #[test]
    fn test_update_through_binding() {
        let mut index = PrefixSumIndex::from_values(vec![1, 2, 3]);
        index.update(2, 10).unwrap();
        assert_eq!(index.prefix_sum(2).unwrap(), 16);
    }

    #[test]
    fn test_negative_index_rejected() {
        let mut index = PrefixSumIndex::new(3).unwrap();
        assert!(index.update(-1, 5).is_err());
        assert!(index.value(-1).is_err());
        assert!(index.range_sum(-1, 2).is_err());
    }

    #[test]
    fn test_prefix_sum_minus_one_is_zero() {
        let index = PrefixSumIndex::new(0).unwrap();
        assert_eq!(index.prefix_sum(-1).unwrap(), 0);
    }
}
