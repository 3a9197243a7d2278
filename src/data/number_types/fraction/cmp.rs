//! # Comparison
//!
//! Fractions compare with other fractions and with native floats.
//!
//! Equality between fractions is decided on the reduced values, ordering by cross
//! multiplication. Comparing with a float goes through the float value of the reduced fraction.
//! NaN fractions are neither equal to, nor ordered with respect to, anything.
//!
//! Fractions with non integral magnitudes don't always reduce to the same pair when their values
//! are equal: `3.5/5` and `7/10` are neither `==`, `<` nor `>`, and `partial_cmp` gives `None`.
//! `Fraction::value_cmp` orders such values by the sign of their difference.
use std::cmp::Ordering;

use crate::data::number_types::fraction::Fraction;
use crate::data::number_types::sign::Sign;

impl Fraction {
    /// Both sides of `self ? other` with the denominators multiplied away.
    ///
    /// Avoids division, so it is exact as long as the products are.
    fn cross_multiplied(&self, other: &Self) -> (f64, f64) {
        let left = self.sign * self.numerator * other.denominator;
        let right = other.sign * other.numerator * self.denominator;

        (left, right)
    }

    /// Order two values by the sign of their difference.
    ///
    /// Unlike `partial_cmp`, this finds `3.5/5` and `7/10` equal, because their difference
    /// reduces to zero.
    ///
    /// # Return value
    ///
    /// `None` only if the difference is NaN, e.g. because either value is.
    pub fn value_cmp(&self, other: &Self) -> Option<Ordering> {
        let difference = *self - *other;

        if difference.is_nan() {
            None
        } else if difference.numerator == 0_f64 {
            Some(Ordering::Equal)
        } else {
            match difference.sign {
                Sign::Positive => Some(Ordering::Greater),
                Sign::Negative => Some(Ordering::Less),
            }
        }
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.reduced().strict_equals(&other.reduced())
    }
}

impl PartialEq<f64> for Fraction {
    fn eq(&self, other: &f64) -> bool {
        self.reduced().to_f64() == *other
    }
}

impl PartialEq<Fraction> for f64 {
    fn eq(&self, other: &Fraction) -> bool {
        other == self
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self > other {
            Some(Ordering::Greater)
        } else if self < other {
            Some(Ordering::Less)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        let (left, right) = self.cross_multiplied(other);
        left < right
    }

    fn le(&self, other: &Self) -> bool {
        self == other || self < other
    }

    fn gt(&self, other: &Self) -> bool {
        let (left, right) = self.cross_multiplied(other);
        left > right
    }

    fn ge(&self, other: &Self) -> bool {
        self == other || self > other
    }
}

impl PartialOrd<f64> for Fraction {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.reduced().to_f64().partial_cmp(other)
    }
}

impl PartialOrd<Fraction> for f64 {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}
