//! Error type for the prefix sum index.

use thiserror::Error;

/// Contract violations reported by [`crate::core::PrefixSumIndex`].
///
/// These are programmer errors, not transient conditions: the structure
/// never wraps an index around or truncates it, and a rejected call leaves
/// internal state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An update or query index fell outside the valid logical bounds.
    ///
    /// The valid bounds are `[0, len)` for updates and range bounds, and
    /// `[-1, len)` for prefix sum queries (`-1` denotes the empty prefix).
    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange { index: i64, len: usize },
}
