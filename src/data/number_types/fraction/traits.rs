//! # Conversions and numeric traits
use num::{FromPrimitive, One, ToPrimitive, Zero};

use crate::data::number_types::fraction::Fraction;
use crate::data::number_types::sign::{Sign, Signed};

impl Signed for Fraction {
    fn signum(&self) -> Sign {
        self.sign
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::new(0, 1)
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0_f64
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::new(1, 1)
    }
}

impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        Fraction::to_f64(self).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        Fraction::to_f64(self).to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        if self.is_nan() {
            None
        } else {
            Some(Fraction::to_f64(self))
        }
    }
}

impl FromPrimitive for Fraction {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::new(n as f64, 1))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::new(n as f64, 1))
    }

    /// `None` for NaN.
    fn from_f64(n: f64) -> Option<Self> {
        let value = Self::new(n, 1);
        if value.is_nan() {
            None
        } else {
            Some(value)
        }
    }
}

/// A whole number over one.
macro_rules! from_native {
    ($t:ty) => {
        impl From<$t> for Fraction {
            fn from(value: $t) -> Self {
                Self::new(value, 1)
            }
        }
    }
}

from_native!(f64);
from_native!(f32);
from_native!(i32);
from_native!(u32);
from_native!(i16);
from_native!(u16);
from_native!(i8);
from_native!(u8);

impl From<i64> for Fraction {
    /// Loses precision beyond 2^53.
    fn from(value: i64) -> Self {
        Self::new(value as f64, 1)
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        Fraction::to_f64(&value)
    }
}
