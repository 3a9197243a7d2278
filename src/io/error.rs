//! # Errors
//!
//! Reasons why text could not be read as a fraction.
//!
//! Construction of a `Fraction` never fails; these errors only appear at the fallible boundary
//! (`str::parse`, `RepeatingDecimal::try_from`).
use std::error::Error;

use thiserror::Error;

/// Shorthand for results of parsing.
pub type ParseResult<T> = Result<T, Parse>;

/// The text was syntactically incorrect.
#[derive(Debug, Error)]
pub enum Parse {
    /// Describes what was wrong.
    #[error("{0}")]
    Message(String),
    /// Adds context to an earlier parse error.
    #[error("{description}")]
    Wrapped {
        /// What was being parsed.
        description: String,
        /// The more specific error.
        #[source]
        source: Box<Parse>,
    },
    /// Adds context to an error from outside this crate, like a failing float parse.
    #[error("{description}")]
    Other {
        /// What was being parsed.
        description: String,
        /// The foreign error.
        #[source]
        source: Box<dyn Error + Send + Sync + 'static>,
    },
}

impl Parse {
    /// Create a new error.
    ///
    /// # Arguments
    ///
    /// * `description`: Human readable reason.
    pub fn new(description: impl Into<String>) -> Self {
        Parse::Message(description.into())
    }

    /// Wrap an error from another library.
    ///
    /// # Arguments
    ///
    /// * `error`: The original error, kept as the source.
    /// * `description`: What was being done when the error occurred.
    pub fn wrap_other(
        error: impl Error + Send + Sync + 'static,
        description: impl Into<String>,
    ) -> Self {
        Parse::Other {
            description: description.into(),
            source: Box::new(error),
        }
    }

    /// Add context to this error.
    pub fn wrap(self, description: impl Into<String>) -> Self {
        Parse::Wrapped {
            description: description.into(),
            source: Box::new(self),
        }
    }
}
