//! Unit tests for serde interop on [`Value`] and [`Map`].

#![cfg(feature = "serde")]

use dashkit::value::{Map, Value};
use rstest::rstest;

fn document() -> Value {
    Value::map_of([
        ("name", Value::from("ada")),
        ("age", Value::Int(36)),
        ("score", Value::Float(9.5)),
        ("active", Value::Bool(true)),
        ("nickname", Value::Null),
        (
            "tags",
            Value::Seq(vec![Value::from("math"), Value::from("engines")]),
        ),
    ])
}

// =============================================================================
// serialization
// =============================================================================

#[test]
fn test_serializes_to_the_natural_json_shapes() {
    let rendered = serde_json::to_string(&document()).unwrap();
    assert_eq!(
        rendered,
        r#"{"name":"ada","age":36,"score":9.5,"active":true,"nickname":null,"tags":["math","engines"]}"#
    );
}

#[rstest]
#[case(Value::Null, "null")]
#[case(Value::Bool(false), "false")]
#[case(Value::Int(-7), "-7")]
#[case(Value::Float(2.5), "2.5")]
#[case(Value::from("hi"), "\"hi\"")]
#[case(Value::Seq(Vec::new()), "[]")]
fn test_scalar_serialization(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

#[test]
fn test_map_serialization_preserves_insertion_order() {
    let mut map = Map::new();
    map.insert("zeta".to_string(), Value::Int(1));
    map.insert("alpha".to_string(), Value::Int(2));
    map.insert("mid".to_string(), Value::Int(3));

    let rendered = serde_json::to_string(&map).unwrap();
    assert_eq!(rendered, r#"{"zeta":1,"alpha":2,"mid":3}"#);
}

// =============================================================================
// deserialization
// =============================================================================

#[test]
fn test_round_trip_through_json_preserves_structure() {
    let original = document();
    let rendered = serde_json::to_string(&original).unwrap();
    let restored: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_json_numbers_land_in_the_right_variants() {
    let parsed: Value = serde_json::from_str("[1, 1.5, -3]").unwrap();
    assert_eq!(
        parsed,
        Value::Seq(vec![Value::Int(1), Value::Float(1.5), Value::Int(-3)])
    );
}

#[test]
fn test_object_key_order_survives_deserialization() {
    let parsed: Value = serde_json::from_str(r#"{"b":1,"a":2,"c":3}"#).unwrap();
    let map = parsed.as_map().unwrap();
    let keys: Vec<&str> = map.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn test_map_deserialization_rejects_non_objects() {
    let result: Result<Map, _> = serde_json::from_str("[1, 2]");
    let message = result.unwrap_err().to_string();
    assert!(message.contains("expected a map"), "got: {message}");
}

#[test]
fn test_huge_unsigned_integers_are_rejected() {
    let result: Result<Value, _> = serde_json::from_str("18446744073709551615");
    assert!(result.is_err());
}
