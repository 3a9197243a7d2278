//! # Rust Exact Fractions
//!
//! A fraction type that keeps its sign apart from two non negative magnitudes, and that can be
//! read from fraction notation (`"3/5"`, `"1e2/-4"`) or repeating decimal notation
//! (`"1.2(3)"`).
//!
//! Construction never fails: text or numbers that don't describe a fraction produce a NaN
//! fraction, which propagates through arithmetic like a floating point NaN does. Callers that
//! want to know why text was rejected can use `str::parse` instead.
//!
//! ```
//! use refrac::Fraction;
//!
//! let third = Fraction::from_string("0.(3)");
//! let two_thirds: Fraction = "2/3".parse().unwrap();
//! assert_eq!(third + two_thirds, Fraction::new(1, 1));
//! assert!(Fraction::new(3, 0).is_nan());
//! ```
#![warn(missing_docs)]

pub use data::number_types::fraction::Fraction;
pub use data::number_types::integer::gcd;
pub use data::number_types::sign::Sign;
pub use io::error::{Parse as ParseError, ParseResult};
pub use io::text::repeating_decimal::RepeatingDecimal;

pub mod data;
pub mod io;
