//! # Fractions
//!
//! Exact computation with a ratio of two magnitudes.
//!
//! The magnitudes are native `f64` values, so they don't need to be integral: `3.5/5` is a valid
//! fraction. Only fractions with integral magnitudes can be reduced all the way to lowest terms.
use std::fmt;

use crate::data::number_types::integer::{gcd, is_divisible, is_integer};
use crate::data::number_types::sign::Sign;

mod cmp;
mod macros;
mod ops;
mod traits;

/// A signed ratio of two non negative magnitudes.
///
/// The sign is kept apart from the magnitudes, such that reduction and comparison don't need to
/// branch on it. A zero valued fraction is always `Sign::Positive`.
///
/// A fraction that doesn't represent a number, e.g. because it was created with a zero
/// denominator, has NaN magnitudes. It propagates through all arithmetic, and compares unequal
/// to everything. See `Fraction::is_nan`.
///
/// Equal values with non integral magnitudes, like `3.5/5` and `7/10`, are unordered as well;
/// use `Fraction::value_cmp` to order those.
///
/// Values are never mutated: reduction and arithmetic always create a new value.
#[derive(Copy, Clone, Debug)]
pub struct Fraction {
    numerator: f64,
    denominator: f64,
    sign: Sign,
}

impl Fraction {
    /// The fraction that doesn't represent a number.
    pub const NAN: Self = Self {
        numerator: f64::NAN,
        denominator: f64::NAN,
        sign: Sign::Positive,
    };

    /// Create a new fraction from two signed values.
    ///
    /// The values are not reduced.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Top value, may be any finite value.
    /// * `denominator`: Bottom value, should be nonzero.
    ///
    /// # Return value
    ///
    /// `Fraction::NAN` if the denominator is zero, or when either value is NaN.
    pub fn new<N: Into<f64>, D: Into<f64>>(numerator: N, denominator: D) -> Self {
        let (numerator, denominator) = (numerator.into(), denominator.into());
        if denominator == 0_f64 || numerator.is_nan() || denominator.is_nan() {
            return Self::NAN;
        }

        Self {
            numerator: numerator.abs(),
            denominator: denominator.abs(),
            sign: Sign::of_product(numerator, denominator),
        }
    }

    /// Non negative top value.
    pub fn numerator(&self) -> f64 {
        self.numerator
    }

    /// Non negative bottom value.
    pub fn denominator(&self) -> f64 {
        self.denominator
    }

    /// Whether the fraction is negative.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Whether this fraction doesn't represent a number.
    pub fn is_nan(&self) -> bool {
        self.numerator.is_nan() || self.denominator.is_nan()
    }

    /// Value as a native float, losing precision where `f64` can't represent it.
    pub fn to_f64(&self) -> f64 {
        self.sign * self.numerator / self.denominator
    }

    /// Whether the value of this fraction is a whole number.
    pub fn is_integer(&self) -> bool {
        is_divisible(self.numerator, self.denominator)
    }

    /// Whether the fraction is in lowest terms.
    ///
    /// This compares the stored values with those of the reduced fraction, see `strict_equals`.
    pub fn is_reduced(&self) -> bool {
        self.strict_equals(&self.reduced())
    }

    /// Reduce the fraction to lowest terms, as a new value.
    ///
    /// When one magnitude divides the other, this also works for non integral magnitudes. When
    /// that is not the case and either of them is not integral, no common divisor can be divided
    /// out and the value is returned unchanged.
    pub fn reduced(&self) -> Self {
        let Self { numerator, denominator, sign } = *self;

        if is_divisible(numerator, denominator) {
            Self::new(sign * (numerator / denominator), 1)
        } else if is_divisible(denominator, numerator) {
            Self::new(sign * 1_f64, denominator / numerator)
        } else if !is_integer(numerator) || !is_integer(denominator) {
            *self
        } else {
            let divisor = gcd(numerator, denominator);
            Self::new(sign * (numerator / divisor), denominator / divisor)
        }
    }

    /// Compare the stored values, without reducing.
    ///
    /// `3/9` and `1/3` are not strictly equal, while they are equal in value (`==`).
    pub fn strict_equals(&self, other: &Self) -> bool {
        self.numerator == other.numerator
            && self.denominator == other.denominator
            && self.sign == other.sign
    }

    /// Parse a fraction from text, yielding `Fraction::NAN` for text that can't be parsed.
    ///
    /// Both fraction notation (`"-3/5"`, `"1e2/1e7"`, `"1.2/2.4"`) and repeating decimal
    /// notation (`"12.34(567)"`, `"  -1.125 "`) are accepted. Use `str::parse` to find out why
    /// some text was rejected.
    pub fn from_string(text: &str) -> Self {
        text.parse().unwrap_or(Self::NAN)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

/// Writes the stored values, so an unreduced fraction is written unreduced.
///
/// `"N"` when the denominator is one, `"N/D"` otherwise, with the sign in front of `N`.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerator = self.sign * self.numerator;
        if self.denominator == 1_f64 {
            write!(f, "{}", numerator)
        } else {
            write!(f, "{}/{}", numerator, self.denominator)
        }
    }
}
