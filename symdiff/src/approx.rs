//! Approximate comparisons of floating-point values, using the library-wide [`EPSILON`].

use super::consts::EPSILON;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if `n` is within [`EPSILON`] of zero.
pub fn is_zero(n: f64) -> bool {
    approx_eq(n, 0.0)
}

/// Returns true if `n` is within [`EPSILON`] of one.
pub fn is_one(n: f64) -> bool {
    approx_eq(n, 1.0)
}

/// If `n` is within [`EPSILON`] of an integer that fits in an [`i32`], returns that integer.
pub fn as_integer(n: f64) -> Option<i32> {
    let rounded = n.round();
    if approx_eq(n, rounded) && rounded >= i32::MIN as f64 && rounded <= i32::MAX as f64 {
        Some(rounded as i32)
    } else {
        None
    }
}
