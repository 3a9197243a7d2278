//! # Signs
//!
//! The sign of a fraction is stored apart from its magnitudes.
use std::fmt;
use std::ops::{Mul, Neg};

/// Sign of a fraction.
///
/// Existing `Sign` types, such as the one in `num`, typically have a third value for the sign
/// of 0. A fraction with value zero is simply `Positive`, so that variant would only create
/// match cases that should never be possible.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// `x >= 0`
    Positive,
    /// `x < 0`
    Negative,
}

/// A value that can be split into a `Sign` and a magnitude.
pub trait Signed {
    /// Whether the value is positive (or zero) or negative.
    fn signum(&self) -> Sign;
    /// Whether `x >= 0`.
    fn is_positive(&self) -> bool {
        self.signum() == Sign::Positive
    }
    /// Whether `x < 0`.
    fn is_negative(&self) -> bool {
        self.signum() == Sign::Negative
    }
}

impl Signed for f64 {
    /// Zero, negative zero and NaN are all `Positive`.
    fn signum(&self) -> Sign {
        if *self < 0_f64 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

impl Sign {
    /// The sign of the product of two values, as computed in floating point.
    ///
    /// A product of zero is `Positive` regardless of the factors' signs. That includes products
    /// that underflow: `-1e-200 * 1e-200` is `-0.0`, so its sign is `Positive`.
    pub fn of_product(left: f64, right: f64) -> Self {
        Signed::signum(&(left * right))
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Sign::Positive, Sign::Positive) => Sign::Positive,
            (Sign::Positive, Sign::Negative) => Sign::Negative,
            (Sign::Negative, Sign::Positive) => Sign::Negative,
            (Sign::Negative, Sign::Negative) => Sign::Positive,
        }
    }
}

/// Attach the sign to a magnitude.
impl Mul<f64> for Sign {
    type Output = f64;

    fn mul(self, rhs: f64) -> Self::Output {
        match self {
            Sign::Positive => rhs,
            Sign::Negative => -rhs,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sign::Positive => "+",
            Sign::Negative => "-",
        })
    }
}
