//! # Arithmetic
//!
//! Every operation creates a new, reduced fraction.
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::traits::Inv;
use num::{One, Zero};

use crate::data::number_types::fraction::Fraction;

impl Neg for Fraction {
    type Output = Self;

    /// Flip the sign, keeping the magnitudes.
    ///
    /// Goes through the constructor so that zero stays positive.
    fn neg(self) -> Self::Output {
        Self::new(-self.sign * self.numerator, self.denominator)
    }
}

impl Inv for Fraction {
    type Output = Self;

    /// Swap numerator and denominator; the sign stays attached to the new numerator.
    ///
    /// The reciprocal of zero is `Fraction::NAN`.
    fn inv(self) -> Self::Output {
        Self::new(self.sign * self.denominator, self.numerator)
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.denominator == rhs.denominator {
            let numerator = self.sign * self.numerator + rhs.sign * rhs.numerator;
            return Self::new(numerator, self.denominator).reduced();
        }

        let numerator = self.sign * self.numerator * rhs.denominator
            + rhs.sign * rhs.numerator * self.denominator;
        let denominator = self.denominator * rhs.denominator;

        Self::new(numerator, denominator).reduced()
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let numerator = self.sign * rhs.sign * (self.numerator * rhs.numerator);
        let denominator = self.denominator * rhs.denominator;

        Self::new(numerator, denominator).reduced()
    }
}

impl Div for Fraction {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inv()
    }
}

macro_rules! forward_reference_operations {
    ($operation:ident, $method:ident, $assign_operation:ident, $assign_method:ident) => {
        impl $operation<&Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Self::Output {
                $operation::$method(self, *rhs)
            }
        }

        impl $operation<Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Self::Output {
                $operation::$method(*self, rhs)
            }
        }

        impl $operation<&Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Self::Output {
                $operation::$method(*self, *rhs)
            }
        }

        impl $assign_operation for Fraction {
            fn $assign_method(&mut self, rhs: Fraction) {
                *self = $operation::$method(*self, rhs);
            }
        }

        impl $assign_operation<&Fraction> for Fraction {
            fn $assign_method(&mut self, rhs: &Fraction) {
                *self = $operation::$method(*self, *rhs);
            }
        }
    }
}

forward_reference_operations!(Add, add, AddAssign, add_assign);
forward_reference_operations!(Sub, sub, SubAssign, sub_assign);
forward_reference_operations!(Mul, mul, MulAssign, mul_assign);
forward_reference_operations!(Div, div, DivAssign, div_assign);

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}
