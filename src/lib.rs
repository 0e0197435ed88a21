//! # Tidepool
//!
//! Three small sum types and a fixed set of combinators over them:
//!
//! - [`Maybe`]: a value that is present (`Just`) or absent (`Nothing`)
//! - [`Result`]: a success (`Ok`) or a single error reason (`Error`)
//! - [`Validation`]: a success or a list of failure reasons that accumulate
//!
//! Every type offers construction, extraction with a default, `map`, monadic
//! chaining, shape predicates, and one-way conversions from the other two types
//! and from nil-able values (`Option`). Failures are returned as data; the only
//! place a raised failure is caught is [`Result::attempt`].
//!
//! ## Quick Example
//!
//! ```rust
//! use tidepool::{Maybe, Result, Validation};
//!
//! fn lookup(key: &str) -> Maybe<u32> {
//!     Maybe::from_nilable(match key {
//!         "port" => Some(8080),
//!         _ => None,
//!     })
//! }
//!
//! let port = Result::from_maybe(lookup("port"), "port missing");
//! assert_eq!(port, Result::Ok(8080));
//!
//! let checks = vec![
//!     Validation::from_maybe(lookup("host"), vec!["host missing"]),
//!     Validation::from_result(Result::from_maybe(lookup("user"), "user missing")),
//! ];
//! assert_eq!(
//!     Validation::collect(checks),
//!     Ok(Validation::Failure(vec!["host missing", "user missing"]))
//! );
//! ```
//!
//! ## Cargo features
//!
//! - `serde`: `Serialize`/`Deserialize` for all three types
//! - `proptest`: `Arbitrary` for all three types
//! - `tracing`: debug events when [`Result::attempt`] captures a failure

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod maybe;
pub mod result;
pub mod semigroup;
pub mod tag;
pub mod testing;
pub mod validation;

// Re-exports
pub use error::CollectError;
pub use maybe::Maybe;
pub use result::Result;
pub use semigroup::Semigroup;
pub use tag::{Tag, Tagged};
pub use validation::Validation;

/// Prelude module for convenient imports
///
/// [`Result`] is left out so a glob import never shadows `std::result::Result`.
pub mod prelude {
    pub use crate::error::CollectError;
    pub use crate::maybe::Maybe;
    pub use crate::semigroup::Semigroup;
    pub use crate::tag::{is_maybe, is_result, is_validation, Tag, Tagged};
    pub use crate::validation::Validation;
}
