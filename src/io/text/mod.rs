//! # Fractions from text
//!
//! Text is read in fraction notation when it contains exactly one `/`, and as a repeating
//! decimal otherwise.
//!
//! Fraction notation is `<top>/<bottom>`, where both sides are native float literals: `"3/5"`,
//! `"123/-5"`, `"1e2/1e7"` and `"1.2/2.4"` are all valid. Values are not reduced. Repeating
//! decimal notation is described in `repeating_decimal`.
use std::convert::TryFrom;
use std::str::FromStr;

use itertools::Itertools;
use log::debug;

use crate::data::number_types::fraction::Fraction;
use crate::io::error::{Parse as ParseError, ParseResult};
use crate::io::text::repeating_decimal::RepeatingDecimal;

pub mod repeating_decimal;

/// Read a value from text, reporting why that failed.
pub trait Parse: Sized {
    /// Parse the text.
    ///
    /// # Errors
    ///
    /// If the text doesn't describe a valid value.
    fn parse(text: &str) -> ParseResult<Self>;
}

/// One side of fraction notation.
impl Parse for f64 {
    fn parse(text: &str) -> ParseResult<Self> {
        let value: Self = text.trim().parse()
            .map_err(|error| ParseError::wrap_other(
                error,
                format!("Failed to parse value text \"{}\" into f64", text),
            ))?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ParseError::new(format!("Parsed value was {}, but should be finite.", value)))
        }
    }
}

impl Parse for Fraction {
    fn parse(text: &str) -> ParseResult<Self> {
        match split_fraction_notation(text) {
            Some((top, bottom)) => parse_fraction_notation(top, bottom)
                .map_err(|error| error.wrap(format!("Invalid fraction notation \"{}\"", text))),
            None => RepeatingDecimal::try_from(text)
                .map(Fraction::from)
                .map_err(|error| error.wrap(format!("Invalid decimal notation \"{}\"", text))),
        }
    }
}

impl FromStr for Fraction {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        <Self as Parse>::parse(text)
            .map_err(|error| {
                debug!("Could not read \"{}\" as a fraction: {}", text, error);
                error
            })
    }
}

/// The text on both sides of the only `/`, if there is exactly one and neither side is empty.
fn split_fraction_notation(text: &str) -> Option<(&str, &str)> {
    text.split('/')
        .collect_tuple()
        .filter(|(top, bottom): &(&str, &str)| !top.is_empty() && !bottom.is_empty())
}

fn parse_fraction_notation(top: &str, bottom: &str) -> ParseResult<Fraction> {
    let numerator = <f64 as Parse>::parse(top).map_err(|error| error.wrap("Invalid top value"))?;
    let denominator = <f64 as Parse>::parse(bottom)
        .map_err(|error| error.wrap("Invalid bottom value"))?;

    if denominator == 0_f64 {
        return Err(ParseError::new(format!("Bottom value \"{}\" is zero.", bottom)));
    }

    Ok(Fraction::new(numerator, denominator))
}
