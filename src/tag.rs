//! Variant tags for structural shape checks
//!
//! Every sum type in this crate can report which variant it currently holds as a
//! [`Tag`]. The predicates [`is_maybe`], [`is_result`] and [`is_validation`] are
//! built on top of that, so they accept any [`Tagged`] value, including the
//! standard library's `Option` and `Result`.
//!
//! # Examples
//!
//! ```
//! use tidepool::tag::{is_maybe, is_result, Tag, Tagged};
//! use tidepool::Maybe;
//!
//! let m = Maybe::just(3);
//! assert_eq!(m.tag(), Tag::Just);
//! assert!(is_maybe(&m));
//! assert!(!is_result(&m));
//!
//! // std::option::Option reads as a Maybe
//! assert!(is_maybe(&None::<i32>));
//! ```

use std::fmt;

/// The variant a tagged value currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// `Maybe::Just`
    Just,
    /// `Maybe::Nothing`
    Nothing,
    /// `Result::Ok`
    Ok,
    /// `Result::Error`
    Error,
    /// `Validation::Success`
    Success,
    /// `Validation::Failure`
    Failure,
}

impl Tag {
    /// Name of the variant, lowercase.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Just => "just",
            Tag::Nothing => "nothing",
            Tag::Ok => "ok",
            Tag::Error => "error",
            Tag::Success => "success",
            Tag::Failure => "failure",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value whose shape can be read as one of the [`Tag`] variants.
pub trait Tagged {
    /// The variant currently held.
    fn tag(&self) -> Tag;
}

impl<T> Tagged for Option<T> {
    fn tag(&self) -> Tag {
        match self {
            Some(_) => Tag::Just,
            None => Tag::Nothing,
        }
    }
}

impl<T, E> Tagged for std::result::Result<T, E> {
    fn tag(&self) -> Tag {
        match self {
            Ok(_) => Tag::Ok,
            Err(_) => Tag::Error,
        }
    }
}

impl<X: Tagged + ?Sized> Tagged for &X {
    fn tag(&self) -> Tag {
        (**self).tag()
    }
}

/// `true` iff `x` is shaped like `Just(_)` or `Nothing`.
pub fn is_maybe<X: Tagged + ?Sized>(x: &X) -> bool {
    matches!(x.tag(), Tag::Just | Tag::Nothing)
}

/// `true` iff `x` is shaped like `Ok(_)` or `Error(_)`.
pub fn is_result<X: Tagged + ?Sized>(x: &X) -> bool {
    matches!(x.tag(), Tag::Ok | Tag::Error)
}

/// `true` iff `x` is shaped like `Success(_)` or `Failure(_)`.
pub fn is_validation<X: Tagged + ?Sized>(x: &X) -> bool {
    matches!(x.tag(), Tag::Success | Tag::Failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Maybe, Result, Validation};

    #[test]
    fn test_std_option_is_maybe() {
        assert!(is_maybe(&Some(1)));
        assert!(is_maybe(&None::<i32>));
        assert!(!is_result(&Some(1)));
    }

    #[test]
    fn test_std_result_is_result() {
        assert!(is_result(&Ok::<_, String>(1)));
        assert!(is_result(&Err::<i32, _>("bad")));
        assert!(!is_validation(&Ok::<_, String>(1)));
    }

    #[test]
    fn test_each_type_matches_only_its_own_predicate() {
        let m = Maybe::just(1);
        let r = Result::<i32, &str>::error("e");
        let v = Validation::<i32, &str>::failure(vec!["e"]);

        assert!(is_maybe(&m) && !is_result(&m) && !is_validation(&m));
        assert!(!is_maybe(&r) && is_result(&r) && !is_validation(&r));
        assert!(!is_maybe(&v) && !is_result(&v) && is_validation(&v));
    }

    #[test]
    fn test_predicates_see_through_references() {
        let m = Maybe::<i32>::nothing();
        let r = &&m;
        assert!(is_maybe(r));
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::Nothing.to_string(), "nothing");
        assert_eq!(Tag::Failure.as_str(), "failure");
    }
}
