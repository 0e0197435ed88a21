//! Errors raised by the library itself
//!
//! Almost every failure in this crate is a value (`Nothing`, `Error`, `Failure`).
//! The exception is [`Validation::collect`](crate::Validation::collect), which has
//! no identity element and therefore cannot reduce an empty input.

use std::error::Error as StdError;
use std::fmt;

/// Failure to reduce a sequence of validations.
///
/// # Examples
///
/// ```
/// use tidepool::{CollectError, Validation};
///
/// let empty: Vec<Validation<i32, &str>> = Vec::new();
/// let err = Validation::collect(empty).unwrap_err();
/// assert_eq!(err, CollectError::Empty);
/// assert_eq!(err.to_string(), "cannot collect an empty sequence of validations");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectError {
    /// The input held no validations.
    Empty,
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::Empty => write!(f, "cannot collect an empty sequence of validations"),
        }
    }
}

impl StdError for CollectError {}
