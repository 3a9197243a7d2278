/// Shorthand for creating a fraction, mostly in tests.
///
/// ```
/// use refrac::F;
///
/// assert!(F!(-3, 5).strict_equals(&refrac::Fraction::new(-3, 5)));
/// assert!(F!(4).strict_equals(&refrac::Fraction::new(4, 1)));
/// ```
#[macro_export]
macro_rules! F {
    ($value:expr) => {
        $crate::Fraction::new($value as f64, 1_f64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Fraction::new($numer as f64, $denom as f64)
    };
}

/// Assert that two fractions have exactly the same stored values.
///
/// `assert_eq!` compares reduced values, this one doesn't reduce.
#[macro_export]
macro_rules! assert_strict_eq {
    ($left:expr, $right:expr) => {{
        let (left, right): ($crate::Fraction, $crate::Fraction) = ($left, $right);
        assert!(
            left.strict_equals(&right),
            "fractions are not strictly equal\n  left: {:?}\n right: {:?}", left, right,
        );
    }};
}
