/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// Converts an `i64` to `f64` if and only if it is exactly representable.
///
/// Returns `None` when the magnitude exceeds [`MAX_SAFE_INT`].
///
/// # Example
/// ```
/// use calctree::util::num::{MAX_SAFE_INT, i64_to_f64_exact};
///
/// assert_eq!(i64_to_f64_exact(42), Some(42.0));
/// assert_eq!(i64_to_f64_exact(-(MAX_SAFE_INT as i64) - 1), None);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64_exact(value: i64) -> Option<f64> {
    if value.unsigned_abs() > MAX_SAFE_INT {
        return None;
    }
    Some(value as f64)
}
