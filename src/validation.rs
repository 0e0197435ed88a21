//! Validation with accumulated failure reasons
//!
//! `Validation<T, E>` is either `Success(value)` or `Failure(reasons)`, where the
//! reasons are always a `Vec<E>`. Unlike [`Result`](crate::Result), combining two
//! failures keeps the reasons of both, so a caller can report every problem at once.
//!
//! # Examples
//!
//! ## Combining
//!
//! ```
//! use tidepool::Validation;
//!
//! let name = Validation::<&str, _>::failure(vec!["name is empty"]);
//! let age = Validation::<&str, _>::failure(vec!["age is negative"]);
//!
//! assert_eq!(
//!     name.concat(age),
//!     Validation::Failure(vec!["name is empty", "age is negative"])
//! );
//! ```
//!
//! ## Collecting
//!
//! ```
//! use tidepool::Validation;
//!
//! let checks = vec![
//!     Validation::<i32, _>::failure(vec!["x"]),
//!     Validation::success(1),
//!     Validation::failure(vec!["y", "z"]),
//! ];
//! assert_eq!(
//!     Validation::collect(checks),
//!     Ok(Validation::Failure(vec!["x", "y", "z"]))
//! );
//! ```

use crate::error::CollectError;
use crate::maybe::Maybe;
use crate::result::Result;
use crate::tag::{Tag, Tagged};
use crate::Semigroup;

pub use crate::tag::is_validation;

/// A successful value or a list of failure reasons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with its reasons
    Failure(Vec<E>),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation from the given reasons, used as-is.
    #[inline]
    pub fn failure(reasons: Vec<E>) -> Self {
        Validation::Failure(reasons)
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// The failure reasons, if any.
    #[inline]
    pub fn reasons(&self) -> Option<&[E]> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(reasons) => Some(reasons),
        }
    }

    /// Combine two validations.
    ///
    /// | self            | other           | result                  |
    /// |-----------------|-----------------|-------------------------|
    /// | `Success(_)`    | `Success(b)`    | `Success(b)`            |
    /// | `Success(_)`    | `Failure(rb)`   | `Failure(rb)`           |
    /// | `Failure(ra)`   | `Success(_)`    | `Failure(ra)`           |
    /// | `Failure(ra)`   | `Failure(rb)`   | `Failure(ra ++ rb)`     |
    ///
    /// Associative, but not commutative: the right-hand success wins and reasons
    /// keep their left-to-right order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Validation;
    ///
    /// let two = Validation::<_, &str>::success(2);
    /// let three = Validation::<_, &str>::success(3);
    /// assert_eq!(two.concat(three), Validation::Success(3));
    ///
    /// let failed = Validation::failure(vec!["e"]);
    /// assert_eq!(failed.concat(Validation::success(3)), Validation::Failure(vec!["e"]));
    /// ```
    pub fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Validation::Success(_), Validation::Success(value)) => Validation::Success(value),
            (Validation::Success(_), Validation::Failure(reasons)) => Validation::Failure(reasons),
            (Validation::Failure(reasons), Validation::Success(_)) => Validation::Failure(reasons),
            (Validation::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
        }
    }

    /// Reduce a sequence of validations with [`concat`](Validation::concat).
    ///
    /// The reduction runs from the right: `v1.concat(v2.concat(v3))`. Because
    /// `concat` is associative this yields the same reasons order as reading the
    /// input left to right, and the last success when nothing failed.
    ///
    /// There is no identity element, so an empty input is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::{CollectError, Validation};
    ///
    /// let all_ok = vec![
    ///     Validation::<_, &str>::success(1),
    ///     Validation::success(2),
    /// ];
    /// assert_eq!(Validation::collect(all_ok), Ok(Validation::Success(2)));
    ///
    /// let none: [Validation<i32, &str>; 0] = [];
    /// assert_eq!(Validation::collect(none), Err(CollectError::Empty));
    /// ```
    pub fn collect<I>(validations: I) -> std::result::Result<Self, CollectError>
    where
        I: IntoIterator<Item = Self>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut reversed = validations.into_iter().rev();
        let last = reversed.next().ok_or(CollectError::Empty)?;
        let collected = reversed.fold(last, |acc, validation| validation.concat(acc));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            success = collected.is_success(),
            reasons = collected.reasons().map_or(0, <[E]>::len),
            "collected validations"
        );

        Ok(collected)
    }

    /// Transform the success value; failures pass through unchanged.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(reasons) => Validation::Failure(reasons),
        }
    }

    /// Transform every failure reason; successes pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["a", "bc"]);
    /// assert_eq!(v.map_failure(str::len), Validation::Failure(vec![1, 2]));
    /// ```
    #[inline]
    pub fn map_failure<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(reasons) => {
                Validation::Failure(reasons.into_iter().map(f).collect())
            }
        }
    }

    /// `Success(value)` unless `value` is the nil sentinel, then `Failure(reasons)`.
    #[inline]
    pub fn from_nilable(value: Option<T>, reasons: Vec<E>) -> Self {
        match value {
            Some(value) => Validation::Success(value),
            None => Validation::Failure(reasons),
        }
    }

    /// `Success` for `Just`, `Failure(reasons)` for `Nothing`.
    #[inline]
    pub fn from_maybe(maybe: Maybe<T>, reasons: Vec<E>) -> Self {
        match maybe {
            Maybe::Just(value) => Validation::Success(value),
            Maybe::Nothing => Validation::Failure(reasons),
        }
    }

    /// `Success` for `Ok`; the single `Error` reason becomes a one-element list.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool::{Result, Validation};
    ///
    /// let v = Validation::from_result(Result::<i32, _>::error("bad"));
    /// assert_eq!(v, Validation::Failure(vec!["bad"]));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Validation::Success(value),
            Result::Error(reason) => Validation::Failure(vec![reason]),
        }
    }

    /// Convert into the standard library result.
    #[inline]
    pub fn into_std(self) -> std::result::Result<T, Vec<E>> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(reasons) => Err(reasons),
        }
    }
}

impl<T, E> Semigroup for Validation<T, E> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<T, E> Tagged for Validation<T, E> {
    fn tag(&self) -> Tag {
        match self {
            Validation::Success(_) => Tag::Success,
            Validation::Failure(_) => Tag::Failure,
        }
    }
}
