//! Core Fenwick tree (binary indexed tree) implementation.
//!
//! This module contains the pure Rust implementation of the structure,
//! separated from the `PyO3` bindings to allow standalone testing and reuse
//! as an ordinary Rust dependency.
//!
//! The structure maintains one internal slot per logical element (plus an
//! unused sentinel at position 0). Slot `i` (1-indexed) holds the sum of a
//! contiguous run of logical elements ending at logical index `i - 1`, whose
//! length equals the lowest set bit of `i`. Point updates and prefix sum
//! queries both walk O(log n) such slots.

#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod error;
pub mod tree;

pub use error::Error;
pub use tree::PrefixSumIndex;

/// Value of the least-significant set bit of `i`.
///
/// `i & -i` in two's-complement representation; for a 1-indexed tree slot
/// this is the length of the run of logical elements the slot covers.
/// Returns 0 for `i == 0`.
#[inline]
#[must_use]
pub const fn lowest_set_bit(i: usize) -> usize {
    i & i.wrapping_neg()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_set_bit_powers_of_two() {
        assert_eq!(lowest_set_bit(1), 1);
        assert_eq!(lowest_set_bit(2), 2);
        assert_eq!(lowest_set_bit(8), 8);
        assert_eq!(lowest_set_bit(1 << 40), 1 << 40);
    }

    #[test]
    fn test_lowest_set_bit_composite() {
        assert_eq!(lowest_set_bit(3), 1);
        assert_eq!(lowest_set_bit(6), 2);
        assert_eq!(lowest_set_bit(12), 4);
        assert_eq!(lowest_set_bit(0b1011_0000), 0b1_0000);
    }

    #[test]
    fn test_lowest_set_bit_zero() {
        assert_eq!(lowest_set_bit(0), 0);
    }

    #[test]
    fn test_lowest_set_bit_odd_is_one() {
        for i in (1..1000).step_by(2) {
            assert_eq!(lowest_set_bit(i), 1);
        }
    }
}
