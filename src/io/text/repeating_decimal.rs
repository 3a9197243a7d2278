//! # Repeating decimals
//!
//! Decimal notation with an optional repeating block in parentheses: `-12.34(567)` is
//! `-12.34567567567...`.
//!
//! The integer part is read as a native float, so `+1`, `1e2` and `1e2.(3)` are accepted. The
//! groups after the dot consist of digits only.
use std::convert::TryFrom;

use log::trace;
use num::Zero;

use crate::data::number_types::fraction::Fraction;
use crate::data::number_types::sign::Sign;
use crate::io::error::{Parse as ParseError, ParseResult};

/// A decimal split into its digit groups.
///
/// The fractional groups are kept as text: leading zeros determine their place value, so
/// `0.(03)` and `0.(3)` differ although `"03"` and `"3"` are the same number.
#[derive(Clone, Debug, PartialEq)]
pub struct RepeatingDecimal {
    sign: Sign,
    /// Value of the text before the dot, without its sign.
    integer: f64,
    /// Digits between the dot and the repeating block.
    non_repeating: Option<String>,
    /// Digits inside the parentheses.
    repeating: Option<String>,
}

impl RepeatingDecimal {
    /// Whether a `-` preceded the integer part.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Value of the text before the dot, without its sign.
    pub fn integer(&self) -> f64 {
        self.integer
    }

    /// Digits after the dot that don't repeat, if any.
    pub fn non_repeating(&self) -> Option<&str> {
        self.non_repeating.as_deref()
    }

    /// Digits that repeat forever, if any.
    pub fn repeating(&self) -> Option<&str> {
        self.repeating.as_deref()
    }
}

impl TryFrom<&str> for RepeatingDecimal {
    type Error = ParseError;

    /// Read `[+-]<integer>[.[<digits>][(<digits>)]]`, ignoring surrounding whitespace.
    ///
    /// The integer part is any finite float without a dot. A group after the dot that is written
    /// must contain digits: `"1."` is accepted, `"1.()"` is not.
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let text = text.trim();

        let (sign, text) = if let Some(unsigned) = text.strip_prefix('-') {
            (Sign::Negative, unsigned)
        } else if let Some(unsigned) = text.strip_prefix('+') {
            (Sign::Positive, unsigned)
        } else {
            (Sign::Positive, text)
        };

        let (integer, fractional) = match text.find('.') {
            None => (text, None),
            Some(index) => (&text[..index], Some(&text[(index + 1)..])),
        };

        let integer = integer_part(integer)?;
        let (non_repeating, repeating) = match fractional {
            None => (None, None),
            Some(fractional) => split_fractional(fractional)?,
        };

        Ok(Self {
            sign,
            integer,
            non_repeating: non_repeating.map(str::to_string),
            repeating: repeating.map(str::to_string),
        })
    }
}

/// Split the text after the dot into the non repeating and the repeating digits.
fn split_fractional(text: &str) -> ParseResult<(Option<&str>, Option<&str>)> {
    let (non_repeating, repeating) = match text.find('(') {
        None => (text, None),
        Some(index) => {
            let block = text[(index + 1)..].strip_suffix(')')
                .ok_or_else(|| ParseError::new(format!(
                    "Repeating part \"{}\" should end with \")\".", &text[index..],
                )))?;

            (&text[..index], Some(digits(block, "repeating part")?))
        },
    };

    let non_repeating = if non_repeating.is_empty() {
        None
    } else {
        Some(digits(non_repeating, "non-repeating part")?)
    };

    Ok((non_repeating, repeating))
}

/// Value of the text before the dot, which has already lost its sign.
fn integer_part(text: &str) -> ParseResult<f64> {
    if text.is_empty() {
        return Err(ParseError::new("The integer part contains no digits."));
    }
    if text.starts_with(|c| c == '+' || c == '-') {
        return Err(ParseError::new(format!("The integer part \"{}\" has a second sign.", text)));
    }

    let value: f64 = text.parse()
        .map_err(|error| ParseError::wrap_other(
            error,
            format!("Failed to parse integer part \"{}\" into f64", text),
        ))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::new(format!("Integer part was {}, but should be finite.", value)))
    }
}

/// Check that a group consists of at least one ASCII digit, and nothing else.
fn digits<'a>(text: &'a str, part: &str) -> ParseResult<&'a str> {
    if text.is_empty() {
        return Err(ParseError::new(format!("The {} contains no digits.", part)));
    }

    match text.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        None => Ok(text),
        Some((index, character)) => Err(ParseError::new(format!(
            "Unexpected character '{}' at position {} of the {} \"{}\".",
            character, index, part, text,
        ))),
    }
}

/// Value of a group of digits, read as a whole number.
fn whole_number(digits: &str) -> f64 {
    digits.bytes().fold(0_f64, |total, digit| total * 10_f64 + f64::from(digit - b'0'))
}

impl From<RepeatingDecimal> for Fraction {
    /// Sum the integer part, the non repeating part and the repeating part.
    ///
    /// With `n` non repeating digits `b` and `r` repeating digits `c`, the value of
    /// `a.b(c)` is `a + b / 10^n + c / (10^(n + r) - 10^n)`.
    fn from(value: RepeatingDecimal) -> Self {
        let RepeatingDecimal { sign, integer, non_repeating, repeating } = value;

        let integer_part = Fraction::new(integer, 1);

        let non_repeating_length = non_repeating.as_ref().map_or(0, String::len) as i32;
        let non_repeating_part = match &non_repeating {
            Some(digits) => Fraction::new(whole_number(digits), 10_f64.powi(non_repeating_length)),
            None => Fraction::zero(),
        };

        let repeating_part = match &repeating {
            Some(digits) => {
                let length = digits.len() as i32;
                let denominator = 10_f64.powi(non_repeating_length + length)
                    - 10_f64.powi(non_repeating_length);
                Fraction::new(whole_number(digits), denominator)
            },
            None => Fraction::zero(),
        };

        let unsigned = integer_part + non_repeating_part + repeating_part;
        trace!(
            "Repeating decimal {}{}.{}({}) is {}{}",
            sign, integer, non_repeating.as_deref().unwrap_or(""), repeating.as_deref().unwrap_or(""),
            sign, unsigned,
        );

        unsigned * Fraction::new(sign * 1_f64, 1)
    }
}
