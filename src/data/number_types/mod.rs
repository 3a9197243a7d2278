//! # Number types
//!
//! The fraction type, and the sign and integer helpers it is built from.
pub mod fraction;
pub mod integer;
pub mod sign;
