pub mod common;

#[macro_use]
extern crate lazy_static;

use common::DOGS;
use petstore::error::PetstoreError;
use petstore::{Dog, Model};
use serde_json::Value;

#[test]
fn round_trip_test() {
    let _ = env_logger::try_init();

    let dog = Dog::new("Dog").with_color("black").with_breed("Labrador");
    let json = dog.to_json().unwrap();
    assert_eq!(json, r#"{"className":"Dog","color":"black","breed":"Labrador"}"#);
    assert_eq!(Dog::from_json(&json).unwrap(), dog);

    for dog in DOGS.iter() {
        assert_eq!(&Dog::from_json(&dog.to_json().unwrap()).unwrap(), dog);
    }
}

#[test]
fn omit_empty_fields_test() {
    let _ = env_logger::try_init();

    assert_eq!(Dog::new("Dog").to_json().unwrap(), r#"{"className":"Dog"}"#);

    let dog = Dog::new("Dog").with_color("").with_breed("Beagle");
    assert_eq!(dog.to_json().unwrap(), r#"{"className":"Dog","breed":"Beagle"}"#);
}

#[test]
fn class_name_always_present_test() {
    let _ = env_logger::try_init();

    assert_eq!(Dog::new("").to_json().unwrap(), r#"{"className":""}"#);

    for dog in DOGS.iter() {
        let value: Value = serde_json::from_str(&dog.to_json().unwrap()).unwrap();
        assert_eq!(value["className"], Value::String(dog.class_name().into()));
    }
}

#[test]
fn decode_missing_optional_fields_test() {
    let _ = env_logger::try_init();

    let dog = Dog::from_json(r#"{"className":"Dog","color":"brown"}"#).unwrap();
    assert_eq!(dog.class_name(), "Dog");
    assert_eq!(dog.color(), "brown");
    assert_eq!(dog.breed(), "");
    assert_eq!(dog, Dog::new("Dog").with_color("brown"));
}

#[test]
fn decode_empty_and_null_fields_test() {
    let _ = env_logger::try_init();

    let dog = Dog::from_json(r#"{"className":"Dog","color":"","breed":null}"#).unwrap();
    assert_eq!(dog, Dog::new("Dog"));
    assert!(!dog.has_color());
    assert!(!dog.has_breed());
}

#[test]
fn decode_ignores_unknown_fields_test() {
    let _ = env_logger::try_init();

    let dog = Dog::from_json(
        r#"{"className":"Dog","breed":"Beagle","declawed":false,"tags":[{"id":1}]}"#,
    )
    .unwrap();
    assert_eq!(dog, Dog::new("Dog").with_breed("Beagle"));
}

#[test]
fn decode_missing_class_name_test() {
    let _ = env_logger::try_init();

    match Dog::from_json(r#"{"color":"brown"}"#) {
        Err(PetstoreError::Json(err)) => assert!(err.to_string().contains("className")),
        other => unreachable!("get: {:?}", other),
    }
}

#[test]
fn decode_malformed_test() {
    let _ = env_logger::try_init();

    assert!(matches!(Dog::from_json(r#"{"className":"Dog""#), Err(PetstoreError::Json(_))));
    assert!(matches!(Dog::from_json(r#"{"className":42}"#), Err(PetstoreError::Json(_))));
    assert!(matches!(Dog::from_json(r#""Dog""#), Err(PetstoreError::Json(_))));
}

#[test]
fn pretty_test() {
    let _ = env_logger::try_init();

    let dog = Dog::new("Dog").with_breed("Beagle");
    let pretty = dog.to_json_pretty().unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(Dog::from_json(&pretty).unwrap(), dog);
}
