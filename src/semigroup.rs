//! Associative combination
//!
//! [`Semigroup`] is the abstraction behind [`Validation::concat`](crate::Validation::concat):
//! reason lists are joined with it, and `Validation` is itself a semigroup whose
//! `combine` is `concat`.
//!
//! ```
//! use tidepool::{Semigroup, Validation};
//!
//! assert_eq!(vec!["a"].combine(vec!["b"]), vec!["a", "b"]);
//!
//! let joined = Validation::<i32, _>::failure(vec!["a"])
//!     .combine(Validation::failure(vec!["b"]));
//! assert_eq!(joined, Validation::Failure(vec!["a", "b"]));
//! ```

/// A type with an associative binary operation.
///
/// Implementations must satisfy:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
/// `combine` takes both sides by value; clone first to keep the originals.
pub trait Semigroup: Sized {
    /// Combine `self` with `other`, `self` first.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_combine_keeps_order() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_string_combine() {
        assert_eq!("tide".to_string().combine("pool".to_string()), "tidepool");
    }

    #[test]
    fn test_vec_associativity() {
        let (a, b, c) = (vec![1], vec![2], vec![3]);
        assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }
}
