//! # Reading fractions
//!
//! Parsing of text into fractions, and the errors that can occur while doing so.
pub mod error;
pub mod text;
