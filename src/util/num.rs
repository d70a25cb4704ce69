/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds [`MAX_SAFE_I64_INT`] in absolute
/// value.
///
/// ## Example
/// ```
/// use revpol::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!").unwrap(), 42.0);
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts an `i64` to a `usize` if and only if it can be represented
/// exactly.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds the maximum
/// representable `usize`.
///
/// ## Example
/// ```
/// use revpol::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(42, "out of range").unwrap(), 42);
/// assert!(i64_to_usize_checked(-1, "out of range").is_err());
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}

/// Computes the floored modulus of two integers: the remainder takes the
/// sign of the divisor, so `floor_mod_i64(-7, 3) == 2`.
///
/// The divisor must be nonzero; callers check for zero first. The
/// adjustment only fires when the remainder and divisor signs differ, so
/// the sum cannot overflow even at the extremes of the `i64` range.
///
/// ## Example
/// ```
/// use revpol::util::num::floor_mod_i64;
///
/// assert_eq!(floor_mod_i64(7, 3), 1);
/// assert_eq!(floor_mod_i64(-7, 3), 2);
/// assert_eq!(floor_mod_i64(7, -3), -2);
/// assert_eq!(floor_mod_i64(1, i64::MAX), 1);
/// ```
#[must_use]
pub const fn floor_mod_i64(dividend: i64, divisor: i64) -> i64 {
    let remainder = dividend % divisor;
    if remainder != 0 && (remainder < 0) != (divisor < 0) {
        remainder + divisor
    } else {
        remainder
    }
}

/// Computes the floored modulus of two reals, with the remainder taking the
/// sign of the divisor.
///
/// ## Example
/// ```
/// use revpol::util::num::floor_mod_f64;
///
/// assert_eq!(floor_mod_f64(7.5, 2.0), 1.5);
/// assert_eq!(floor_mod_f64(-7.5, 2.0), 0.5);
/// ```
#[must_use]
pub fn floor_mod_f64(dividend: f64, divisor: f64) -> f64 {
    dividend - divisor * (dividend / divisor).floor()
}
