//! Success or a single error reason
//!
//! `Result<T, E>` holds either `Ok(value)` or `Error(reason)`. The reason is one
//! opaque value, usually a `String`; for accumulating several reasons use
//! [`Validation`](crate::Validation) instead.
//!
//! This type shares its name with `std::result::Result`. It is re-exported at the
//! crate root but kept out of the [prelude](crate::prelude), so importing the
//! prelude never shadows the standard type. Conversions in both directions are
//! provided by [`Result::from_std`] and [`Result::into_std`].
//!
//! # Catching panics
//!
//! [`Result::attempt`] is the one place where a failure that was *raised* rather
//! than *returned* is turned into data:
//!
//! ```
//! use tidepool::Result;
//!
//! let fine = Result::attempt(|| "ok-value");
//! assert_eq!(fine, Result::Ok("ok-value"));
//!
//! let broken = Result::<i32, _>::attempt(|| panic!("boom"));
//! assert_eq!(broken, Result::Error("boom".to_string()));
//! ```

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use crate::maybe::Maybe;
use crate::tag::{Tag, Tagged};
use crate::validation::Validation;

pub use crate::tag::is_result;

/// Message used by [`Result::attempt`] when a panic payload is neither `&str`
/// nor `String`.
pub const UNKNOWN_PANIC: &str = "unknown panic";

/// A successful value (`Ok`) or a single error reason (`Error`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<T, E> {
    /// Successful value
    Ok(T),
    /// Failure reason
    Error(E),
}

impl<T, E> Result<T, E> {
    /// Wrap a successful value.
    #[inline]
    pub fn ok(value: T) -> Self {
        Result::Ok(value)
    }

    /// Wrap an error reason.
    #[inline]
    pub fn error(reason: E) -> Self {
        Result::Error(reason)
    }

    /// `true` if this is `Ok`.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Result::Ok(_))
    }

    /// `true` if this is `Error`.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Result::Error(_))
    }

    /// Return the successful value, or `default` on `Error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Result;
    ///
    /// assert_eq!(Result::<_, &str>::ok(1).get_with_default(0), 1);
    /// assert_eq!(Result::error("bad").get_with_default(0), 0);
    /// ```
    #[inline]
    pub fn get_with_default(self, default: T) -> T {
        match self {
            Result::Ok(value) => value,
            Result::Error(_) => default,
        }
    }

    /// Apply `f` to a successful value, wrapping the output in `Ok`.
    ///
    /// An `Error` passes through untouched and `f` is not called.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Result::Ok(value) => Result::Ok(f(value)),
            Result::Error(reason) => Result::Error(reason),
        }
    }

    /// Apply `f` to the error reason, leaving `Ok` untouched.
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Result::Ok(value) => Result::Ok(value),
            Result::Error(reason) => Result::Error(f(reason)),
        }
    }

    /// Bind a successful value to a function returning a `Result`.
    ///
    /// The function's result is returned as-is, without an extra `Ok` layer.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Result;
    ///
    /// fn parse(s: &str) -> Result<i32, String> {
    ///     Result::from_std(s.parse::<i32>().map_err(|e| e.to_string()))
    /// }
    ///
    /// assert_eq!(Result::ok("42").chain(parse), Result::Ok(42));
    /// assert!(Result::ok("x").chain(parse).is_error());
    /// assert_eq!(
    ///     Result::<&str, _>::error("earlier".to_string()).chain(parse),
    ///     Result::Error("earlier".to_string())
    /// );
    /// ```
    #[inline]
    pub fn chain<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Result::Ok(value) => f(value),
            Result::Error(reason) => Result::Error(reason),
        }
    }

    /// `Ok(value)` unless `value` is the nil sentinel, then `Error(error)`.
    #[inline]
    pub fn from_nilable(value: Option<T>, error: E) -> Self {
        match value {
            Some(value) => Result::Ok(value),
            None => Result::Error(error),
        }
    }

    /// `Ok` for `Just`, `Error(error)` for `Nothing`.
    ///
    /// Going `Result -> Maybe -> Result` loses the original reason: the round
    /// trip always comes back with the `error` supplied here.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::{Maybe, Result};
    ///
    /// let lost = Maybe::from_result(Result::<i32, _>::error("y"));
    /// assert_eq!(Result::from_maybe(lost, "x"), Result::Error("x"));
    /// ```
    #[inline]
    pub fn from_maybe(maybe: Maybe<T>, error: E) -> Self {
        match maybe {
            Maybe::Just(value) => Result::Ok(value),
            Maybe::Nothing => Result::Error(error),
        }
    }

    /// Convert from the standard library result.
    #[inline]
    pub fn from_std(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Result::Ok(value),
            Err(reason) => Result::Error(reason),
        }
    }

    /// Convert into the standard library result, so `?` can be used.
    #[inline]
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self {
            Result::Ok(value) => Ok(value),
            Result::Error(reason) => Err(reason),
        }
    }
}

impl<T, E> Result<T, Vec<E>> {
    /// `Ok` for `Success`; `Error` carrying the whole reasons list for `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::{Result, Validation};
    ///
    /// let failed = Validation::<i32, _>::failure(vec!["a", "b"]);
    /// assert_eq!(Result::from_validation(failed), Result::Error(vec!["a", "b"]));
    /// ```
    #[inline]
    pub fn from_validation(validation: Validation<T, E>) -> Self {
        match validation {
            Validation::Success(value) => Result::Ok(value),
            Validation::Failure(reasons) => Result::Error(reasons),
        }
    }
}

impl<T> Result<T, String> {
    /// Run `f` and capture a panic as `Error(message)`.
    ///
    /// The panic message is taken from a `&str` or `String` payload; any other
    /// payload produces [`UNKNOWN_PANIC`]. The panic does not propagate past this
    /// call. The default panic hook still runs, so the message is also printed to
    /// stderr. Requires the `unwind` panic strategy.
    pub fn attempt<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Result::Ok(value),
            Err(payload) => {
                let message = panic_message(&*payload);
                #[cfg(feature = "tracing")]
                tracing::debug!(reason = %message, "attempt captured panic");
                Result::Error(message)
            }
        }
    }

    /// Run a fallible `f`, capturing both returned errors and panics as text.
    ///
    /// A returned `Err(e)` becomes `Error(e.to_string())`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Result;
    ///
    /// let parsed = Result::attempt_fallible(|| "12".parse::<u8>());
    /// assert_eq!(parsed, Result::Ok(12));
    ///
    /// let overflow = Result::attempt_fallible(|| "300".parse::<u8>());
    /// assert_eq!(
    ///     overflow,
    ///     Result::Error("number too large to fit in target type".to_string())
    /// );
    /// ```
    pub fn attempt_fallible<F, D>(f: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, D>,
        D: Display,
    {
        Result::attempt(f).chain(|inner| match inner {
            Ok(value) => Result::Ok(value),
            Err(err) => {
                let message = err.to_string();
                #[cfg(feature = "tracing")]
                tracing::debug!(reason = %message, "attempt captured error");
                Result::Error(message)
            }
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        UNKNOWN_PANIC.to_string()
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        Result::from_std(result)
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

impl<T, E> Tagged for Result<T, E> {
    fn tag(&self) -> Tag {
        match self {
            Result::Ok(_) => Tag::Ok,
            Result::Error(_) => Tag::Error,
        }
    }
}
