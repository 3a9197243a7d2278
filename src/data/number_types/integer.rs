//! # Integers
//!
//! Magnitudes are stored as `f64`, these helpers treat the integral ones as integers.

/// Greatest common divisor through the Euclidean algorithm.
///
/// `gcd(a, 0) = a` and `gcd(a, b) = gcd(b, a mod b)`. Intended for non negative integral values,
/// but any two finite values will terminate because the remainder of two floats is exact.
///
/// # Return value
///
/// NaN when either argument is not finite.
pub fn gcd(mut a: f64, mut b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }

    while b != 0_f64 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }

    a
}

/// Whether a magnitude has no fractional part.
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0_f64
}

/// Whether `numerator` is an exact multiple of `denominator`.
///
/// Works for non integral values too, e.g. `7.5` is divisible by `2.5`.
pub(crate) fn is_divisible(numerator: f64, denominator: f64) -> bool {
    numerator % denominator == 0_f64
}
