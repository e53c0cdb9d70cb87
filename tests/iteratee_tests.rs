//! Unit tests for the iteratee coercion layer.

#![cfg(feature = "iteratee")]

use dashkit::iteratee::Iteratee;
use dashkit::value::{Key, Path, Value};

fn user(name: &str, active: bool) -> Value {
    Value::map_of([
        ("name", Value::from(name)),
        ("active", Value::Bool(active)),
        (
            "address",
            Value::map_of([("city", Value::from("london"))]),
        ),
    ])
}

// =============================================================================
// coercion table
// =============================================================================

#[test]
fn test_null_coerces_to_identity() {
    let iteratee = Iteratee::from_value(&Value::Null);
    let element = Value::from("unchanged");
    assert_eq!(iteratee.apply_value(&element), element);
}

#[test]
fn test_string_coerces_to_a_deep_property_getter() {
    let iteratee = Iteratee::from_value(&Value::from("address.city"));
    assert_eq!(
        iteratee.apply_value(&user("ada", true)),
        Value::from("london")
    );
    assert_eq!(iteratee.apply_value(&Value::Int(3)), Value::Null);
}

#[test]
fn test_mapping_coerces_to_a_partial_match() {
    let iteratee = Iteratee::from_value(&Value::map_of([("active", Value::Bool(true))]));
    assert_eq!(iteratee.apply_value(&user("ada", true)), Value::Bool(true));
    assert_eq!(iteratee.apply_value(&user("bob", false)), Value::Bool(false));
}

#[test]
fn test_pair_sequence_coerces_to_a_property_equality_probe() {
    let probe = Iteratee::from_value(&Value::from(vec![
        Value::from("name"),
        Value::from("ada"),
    ]));
    assert_eq!(probe.apply_value(&user("ada", true)), Value::Bool(true));
    assert_eq!(probe.apply_value(&user("bob", true)), Value::Bool(false));
}

#[test]
fn test_longer_sequence_coerces_to_a_key_path() {
    let iteratee = Iteratee::from_value(&Value::from(vec![
        Value::from("address"),
        Value::from("city"),
        Value::Int(0),
    ]));
    match &iteratee {
        Iteratee::Property(path) => assert_eq!(path.len(), 3),
        other => panic!("expected a property iteratee, got {other:?}"),
    }
}

// =============================================================================
// explicit constructors
// =============================================================================

#[test]
fn test_matches_property_constructor() {
    let probe = Iteratee::matches_property("address.city", Value::from("london"));
    assert_eq!(probe.apply_value(&user("ada", true)), Value::Bool(true));

    let missing = Iteratee::matches_property("address.country", Value::Null);
    // The path does not resolve, so the probe is false even against null.
    assert_eq!(missing.apply_value(&user("ada", true)), Value::Bool(false));
}

#[test]
fn test_func_receives_value_key_and_container() {
    let describe = Iteratee::func(|value, key, container| {
        Value::from(format!(
            "{key}={value} of {total}",
            total = container.len()
        ))
    });
    let container = Value::from(vec![10_i64, 20]);
    let rendered = describe.apply(&Value::Int(10), &Key::Index(0), &container);
    assert_eq!(rendered, Value::from("0=10 of 2"));
}

#[test]
fn test_path_conversion_is_prebuilt_not_reparsed() {
    let path = Path::parse("a.b");
    let iteratee = Iteratee::from(path.clone());
    let data = Value::map_of([("a", Value::map_of([("b", Value::Int(1))]))]);
    assert_eq!(iteratee.apply_value(&data), Value::Int(1));
    assert_eq!(path.len(), 2);
}
