use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Safely converts a `usize` (a length or count) to an `i64`.
///
/// ## Errors
/// Returns `RuntimeError::OutOfRange` if the value exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use monkey::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(42).unwrap(), 42);
/// ```
pub fn usize_to_i64_checked(value: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::OutOfRange)
}

/// Converts an `i64` index to a `usize` if it is non-negative and
/// representable on this platform.
///
/// Negative indices yield `None`; callers treat that like any other
/// out-of-range index.
///
/// ## Example
/// ```
/// use monkey::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(3), Some(3));
/// assert_eq!(i64_to_usize_checked(-1), None);
/// ```
#[must_use]
pub fn i64_to_usize_checked(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
