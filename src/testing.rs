//! Testing helpers
//!
//! Assertion macros for the three sum types, and (with the `proptest` feature)
//! `Arbitrary` implementations so they can be generated in property tests.
//!
//! The "present" assertions evaluate to the inner value, which keeps tests flat:
//!
//! ```rust
//! use tidepool::{assert_just, assert_reasons, assert_success, Maybe, Validation};
//!
//! let port = assert_just!(Maybe::just(8080));
//! assert_eq!(port, 8080);
//!
//! let v = Validation::<_, String>::success(42);
//! assert_eq!(assert_success!(v), 42);
//!
//! let v = Validation::<i32, _>::failure(vec!["a", "b"]);
//! assert_reasons!(v, vec!["a", "b"]);
//! ```

/// Assert that a maybe is `Just`, evaluating to the inner value.
#[macro_export]
macro_rules! assert_just {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Just(value) => value,
            $crate::Maybe::Nothing => panic!("Expected Just, got Nothing"),
        }
    };
}

/// Assert that a maybe is `Nothing`.
#[macro_export]
macro_rules! assert_nothing {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Nothing => {}
            $crate::Maybe::Just(value) => panic!("Expected Nothing, got Just: {:?}", value),
        }
    };
}

/// Assert that a result is `Ok`, evaluating to the inner value.
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            $crate::Result::Ok(value) => value,
            $crate::Result::Error(reason) => panic!("Expected Ok, got Error: {:?}", reason),
        }
    };
}

/// Assert that a result is `Error`, evaluating to the reason.
#[macro_export]
macro_rules! assert_error {
    ($result:expr) => {
        match $result {
            $crate::Result::Error(reason) => reason,
            $crate::Result::Ok(value) => panic!("Expected Error, got Ok: {:?}", value),
        }
    };
}

/// Assert that a validation succeeds, evaluating to the inner value.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(value) => value,
            $crate::Validation::Failure(reasons) => {
                panic!("Expected Success, got Failure: {:?}", reasons)
            }
        }
    };
}

/// Assert that a validation fails, evaluating to its reasons.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(reasons) => reasons,
            $crate::Validation::Success(value) => {
                panic!("Expected Failure, got Success: {:?}", value)
            }
        }
    };
}

/// Assert that a validation fails with exactly the expected reasons.
#[macro_export]
macro_rules! assert_reasons {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(reasons) => {
                assert_eq!(reasons, $expected);
            }
            $crate::Validation::Success(value) => {
                panic!(
                    "Expected Failure with reasons {:?}, got Success: {:?}",
                    $expected, value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use crate::{Maybe, Result, Validation};

    impl<T> Arbitrary for Maybe<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            proptest::option::of(any_with::<T>(args))
                .prop_map(Maybe::from_nilable)
                .boxed()
        }
    }

    impl<T, E> Arbitrary for Result<T, E>
    where
        T: Arbitrary + 'static,
        E: Arbitrary + 'static,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Result::ok),
                any_with::<E>(e_params).prop_map(Result::error),
            ]
            .boxed()
        }
    }

    // Failures always carry at least one reason.
    impl<T, E> Arbitrary for Validation<T, E>
    where
        T: Arbitrary + 'static,
        E: Arbitrary + 'static,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Validation::success),
                prop::collection::vec(any_with::<E>(e_params), 1..8).prop_map(Validation::failure),
            ]
            .boxed()
        }
    }
}
