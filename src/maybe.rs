//! Optional values
//!
//! `Maybe<T>` holds either `Just(value)` or `Nothing`. It plays the same role as
//! `Option<T>` and converts to and from it freely, but carries the combinator
//! names and conversion rules shared with [`Result`](crate::Result) and
//! [`Validation`](crate::Validation).
//!
//! Absence is always a value: no function in this module panics.
//!
//! # Examples
//!
//! ```
//! use tidepool::Maybe;
//!
//! let port = Maybe::from_nilable(Some(8080)).map(|p| p + 1);
//! assert_eq!(port.get_with_default(80), 8081);
//!
//! let missing = Maybe::<u16>::from_nilable(None).map(|p| p + 1);
//! assert_eq!(missing.get_with_default(80), 80);
//! ```

use crate::result::Result;
use crate::tag::{Tag, Tagged};
use crate::validation::Validation;

pub use crate::tag::is_maybe;

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// Nesting is allowed and never flattened implicitly: mapping a `Just` with a
/// function that itself returns a `Maybe` yields `Maybe<Maybe<_>>`. Use
/// [`Maybe::chain`] to bind without the extra layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value
    Just(T),
    /// No value
    Nothing,
}

impl<T> Maybe<T> {
    /// Wrap a present value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Maybe;
    ///
    /// assert_eq!(Maybe::just(3), Maybe::Just(3));
    /// ```
    #[inline]
    pub fn just(value: T) -> Self {
        Maybe::Just(value)
    }

    /// The absent value.
    #[inline]
    pub fn nothing() -> Self {
        Maybe::Nothing
    }

    /// `true` if this is `Just`.
    #[inline]
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// `true` if this is `Nothing`.
    #[inline]
    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Return the inner value, or `default` when `Nothing`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Maybe;
    ///
    /// assert_eq!(Maybe::just(3).get_with_default(0), 3);
    /// assert_eq!(Maybe::nothing().get_with_default(0), 0);
    /// ```
    #[inline]
    pub fn get_with_default(self, default: T) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => default,
        }
    }

    /// Apply `f` to a present value, keeping the `Just` wrapper.
    ///
    /// `f` is not called on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).map(|x| x * 10), Maybe::Just(20));
    ///
    /// // no flattening
    /// assert_eq!(Maybe::just(2).map(Maybe::just), Maybe::Just(Maybe::Just(2)));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(f(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Bind a present value to a function that itself returns a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Maybe;
    ///
    /// fn half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::nothing() }
    /// }
    ///
    /// assert_eq!(Maybe::just(8).chain(half).chain(half), Maybe::Just(2));
    /// assert_eq!(Maybe::just(6).chain(half).chain(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn chain<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Just(value) => match f(value) {
                Maybe::Just(out) => Maybe::Just(out),
                Maybe::Nothing => Maybe::Nothing,
            },
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// `Nothing` for the nil sentinel (`None`), `Just` otherwise.
    #[inline]
    pub fn from_nilable(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }

    /// `Just` for `Ok`, `Nothing` for `Error`. The error reason is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::{Maybe, Result};
    ///
    /// assert_eq!(Maybe::from_result(Result::<_, &str>::ok(5)), Maybe::Just(5));
    /// assert_eq!(Maybe::from_result(Result::<i32, _>::error("nope")), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Maybe::Just(value),
            Result::Error(_) => Maybe::Nothing,
        }
    }

    /// `Just` for `Success`, `Nothing` for `Failure`. The reasons are dropped.
    #[inline]
    pub fn from_validation<E>(validation: Validation<T, E>) -> Self {
        match validation {
            Validation::Success(value) => Maybe::Just(value),
            Validation::Failure(_) => Maybe::Nothing,
        }
    }

    /// Borrow the inner value.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Convert into the standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_nilable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> Tagged for Maybe<T> {
    fn tag(&self) -> Tag {
        match self {
            Maybe::Just(_) => Tag::Just,
            Maybe::Nothing => Tag::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_constructors() {
        assert_eq!(Maybe::just("a"), Maybe::Just("a"));
        assert_eq!(Maybe::<i32>::nothing(), Maybe::Nothing);
        assert!(Maybe::just(1).is_just());
        assert!(Maybe::<i32>::nothing().is_nothing());
    }

    #[test]
    fn test_get_with_default() {
        assert_eq!(Maybe::<i32>::Nothing.get_with_default(0), 0);
        assert_eq!(Maybe::Just(3).get_with_default(0), 3);
    }

    #[test]
    fn test_map_identity_on_just() {
        assert_eq!(Maybe::Just(7).map(|x| x), Maybe::Just(7));
    }

    #[test]
    fn test_map_on_nothing_skips_function() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::Nothing.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(result, Maybe::Nothing);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_does_not_flatten() {
        let nested = Maybe::Just(1).map(|_| Maybe::<i32>::Nothing);
        assert_eq!(nested, Maybe::Just(Maybe::Nothing));
    }

    #[test]
    fn test_chain_just_to_just() {
        assert_eq!(Maybe::Just(2).chain(|x| Maybe::Just(x * 3)), Maybe::Just(6));
    }

    #[test]
    fn test_chain_just_to_nothing() {
        assert_eq!(Maybe::Just(2).chain(|_| Maybe::<i32>::Nothing), Maybe::Nothing);
    }

    #[test]
    fn test_chain_on_nothing_skips_function() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::Nothing.chain(|x| {
            calls.set(calls.get() + 1);
            Maybe::Just(x)
        });
        assert_eq!(result, Maybe::Nothing);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_is_maybe() {
        assert!(is_maybe(&Maybe::Just(1)));
        assert!(is_maybe(&Maybe::<()>::Nothing));
        assert!(!is_maybe(&Validation::<i32, ()>::Success(1)));
    }

    #[test]
    fn test_from_nilable() {
        assert_eq!(Maybe::from_nilable(Some("x")), Maybe::Just("x"));
        assert_eq!(Maybe::<&str>::from_nilable(None), Maybe::Nothing);
    }

    #[test]
    fn test_from_result() {
        assert_eq!(Maybe::from_result(Result::<_, ()>::Ok(5)), Maybe::Just(5));
        assert_eq!(Maybe::from_result(Result::<i32, _>::Error("e")), Maybe::Nothing);
    }

    #[test]
    fn test_from_validation() {
        assert_eq!(
            Maybe::from_validation(Validation::<_, &str>::Success(5)),
            Maybe::Just(5)
        );
        assert_eq!(
            Maybe::from_validation(Validation::<i32, _>::Failure(vec!["a", "b"])),
            Maybe::Nothing
        );
    }

    #[test]
    fn test_option_conversions() {
        let m: Maybe<i32> = Some(4).into();
        assert_eq!(m, Maybe::Just(4));
        let o: Option<i32> = Maybe::Just(4).into();
        assert_eq!(o, Some(4));
        assert_eq!(Maybe::<i32>::default().into_option(), None);
    }

    #[test]
    fn test_as_ref_keeps_original() {
        let m = Maybe::Just(String::from("owned"));
        assert_eq!(m.as_ref().map(|s| s.len()), Maybe::Just(5));
        assert!(m.is_just());
    }
}
