//! Serde round trips for the sum types
#![cfg(feature = "serde")]

use tidepool::{Maybe, Result, Tag, Validation};

#[test]
fn test_maybe_json_shape() {
    let json = serde_json::to_string(&Maybe::just(3)).unwrap();
    assert_eq!(json, r#"{"Just":3}"#);
    assert_eq!(
        serde_json::to_string(&Maybe::<i32>::nothing()).unwrap(),
        r#""Nothing""#
    );
}

#[test]
fn test_result_from_json() {
    let r: Result<i32, String> = serde_json::from_str(r#"{"Error":"bad"}"#).unwrap();
    assert_eq!(r, Result::Error("bad".to_string()));
}

#[test]
fn test_validation_json_reasons_are_a_list() {
    let v = Validation::<i32, &str>::failure(vec!["a", "b"]);
    assert_eq!(
        serde_json::to_string(&v).unwrap(),
        r#"{"Failure":["a","b"]}"#
    );

    let scalar: std::result::Result<Validation<i32, String>, _> =
        serde_json::from_str(r#"{"Failure":"a"}"#);
    assert!(scalar.is_err());
}

#[test]
fn test_tag_json() {
    assert_eq!(serde_json::to_string(&Tag::Success).unwrap(), r#""Success""#);
}
