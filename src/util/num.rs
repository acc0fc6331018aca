use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest unsigned integer value exactly representable as an `f64`
/// (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds [`MAX_SAFE_U64_INT`] in
/// absolute value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use paint::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts an `f64` to `i64` by truncating toward zero.
///
/// Ordering comparisons and the modulo operator read numeric operands as
/// integers this way: `3.9` becomes `3`, `-3.9` becomes `-3`.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` if the value is not finite or
/// lies outside the exactly-representable integer range.
///
/// ## Example
/// ```
/// use paint::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(3.9, 1).unwrap(), 3);
/// assert_eq!(f64_to_i64_truncated(-3.9, 1).unwrap(), -3);
/// assert!(f64_to_i64_truncated(f64::NAN, 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() || value.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(RuntimeError::LiteralTooLarge { line });
    }

    Ok(value.trunc() as i64)
}
