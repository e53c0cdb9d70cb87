//! Unit tests for uniform sequence/mapping iteration.

#![cfg(feature = "collection")]

use dashkit::collection::{
    count_by, every, filter_, find_, find_last, flat_map_, for_each, group_by, includes, key_by,
    map_, max_by, mean_by, min_by, order_by, partition, pluck, reduce_, reduce_right, reject,
    size_, some, sort_by, sort_with, sum_by,
};
use dashkit::iteratee::Iteratee;
use dashkit::value::{Key, Value};

fn people() -> Value {
    Value::Seq(vec![
        Value::map_of([
            ("name", Value::from("ada")),
            ("team", Value::from("a")),
            ("age", Value::Int(36)),
        ]),
        Value::map_of([
            ("name", Value::from("bob")),
            ("team", Value::from("b")),
            ("age", Value::Int(25)),
        ]),
        Value::map_of([
            ("name", Value::from("cyd")),
            ("team", Value::from("a")),
            ("age", Value::Int(30)),
        ]),
    ])
}

// =============================================================================
// map / filter / reject
// =============================================================================

#[test]
fn test_map_over_a_sequence_with_a_property_iteratee() {
    let names = map_(&people(), &Iteratee::from("name"));
    assert_eq!(
        names,
        vec![Value::from("ada"), Value::from("bob"), Value::from("cyd")]
    );
}

#[test]
fn test_map_over_a_mapping_visits_values_in_insertion_order() {
    let scores = Value::map_of([("first", Value::Int(1)), ("second", Value::Int(2))]);
    let doubled = map_(
        &scores,
        &Iteratee::func(|value, _, _| Value::Int(value.as_int().unwrap_or(0) * 2)),
    );
    assert_eq!(doubled, vec![Value::Int(2), Value::Int(4)]);
}

#[test]
fn test_filter_with_a_matches_iteratee() {
    let team_a = filter_(
        &people(),
        &Iteratee::matches(Value::map_of([("team", Value::from("a"))])),
    );
    assert_eq!(team_a.len(), 2);

    let team_b = reject(
        &people(),
        &Iteratee::matches(Value::map_of([("team", Value::from("a"))])),
    );
    assert_eq!(team_b.len(), 1);
    assert_eq!(team_b[0].index("name"), Some(&Value::from("bob")));
}

#[test]
fn test_iteratees_over_scalars_yield_nothing() {
    assert!(map_(&Value::Int(5), &Iteratee::default()).is_empty());
    assert_eq!(size_(&Value::Int(5)), 0);
}

// =============================================================================
// reduce
// =============================================================================

#[test]
fn test_reduce_uses_the_first_element_without_a_seed() {
    let numbers = Value::from(vec![1_i64, 2, 3]);
    let sum = reduce_(
        &numbers,
        |accumulator, value, _| {
            Value::Int(accumulator.as_int().unwrap_or(0) + value.as_int().unwrap_or(0))
        },
        None,
    )
    .unwrap();
    assert_eq!(sum, Value::Int(6));
}

#[test]
fn test_reduce_empty_without_seed_is_an_error() {
    let empty = Value::Seq(Vec::new());
    let result = reduce_(&empty, |accumulator, _, _| accumulator.clone(), None);
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().to_string(),
        "reduce_: cannot reduce an empty collection without a seed accumulator"
    );

    // With a seed the empty reduction is just the seed.
    let seeded = reduce_(&empty, |accumulator, _, _| accumulator.clone(), Some(Value::Int(0)));
    assert_eq!(seeded.unwrap(), Value::Int(0));
}

#[test]
fn test_reduce_right_folds_backwards() {
    let letters = Value::Seq(vec![Value::from("a"), Value::from("b"), Value::from("c")]);
    let joined = reduce_right(
        &letters,
        |accumulator, value, _| {
            Value::from(format!(
                "{}{}",
                accumulator.as_str().unwrap_or(""),
                value.as_str().unwrap_or("")
            ))
        },
        None,
    )
    .unwrap();
    assert_eq!(joined, Value::from("cba"));
}

// =============================================================================
// searching and quantifiers
// =============================================================================

#[test]
fn test_find_and_find_last_scan_from_opposite_ends() {
    let team_a = Iteratee::matches(Value::map_of([("team", Value::from("a"))]));
    let first = find_(&people(), &team_a).unwrap();
    assert_eq!(first.index("name"), Some(&Value::from("ada")));

    let last = find_last(&people(), &team_a).unwrap();
    assert_eq!(last.index("name"), Some(&Value::from("cyd")));

    let nobody = Iteratee::matches(Value::map_of([("team", Value::from("z"))]));
    assert_eq!(find_(&people(), &nobody), None);
}

#[test]
fn test_every_and_some() {
    let adult = Iteratee::func(|value, _, _| {
        Value::Bool(
            value
                .index("age")
                .and_then(Value::as_int)
                .is_some_and(|age| age >= 18),
        )
    });
    assert!(every(&people(), &adult));
    assert!(some(&people(), &adult));

    let over_thirty_five = Iteratee::func(|value, _, _| {
        Value::Bool(
            value
                .index("age")
                .and_then(Value::as_int)
                .is_some_and(|age| age > 35),
        )
    });
    assert!(!every(&people(), &over_thirty_five));
    assert!(some(&people(), &over_thirty_five));

    // Vacuous truth on empty collections.
    assert!(every(&Value::Seq(Vec::new()), &Iteratee::default()));
    assert!(!some(&Value::Seq(Vec::new()), &Iteratee::default()));
}

// =============================================================================
// grouping
// =============================================================================

#[test]
fn test_group_by_keys_on_the_stringified_result() {
    let groups = group_by(&people(), &Iteratee::from("team"));
    assert_eq!(groups.len(), 2);
    let team_a = groups.get("a").and_then(Value::as_seq).unwrap();
    assert_eq!(team_a.len(), 2);
}

#[test]
fn test_count_by_tallies_group_sizes() {
    let counts = count_by(&people(), &Iteratee::from("team"));
    assert_eq!(counts.get("a"), Some(&Value::Int(2)));
    assert_eq!(counts.get("b"), Some(&Value::Int(1)));
}

#[test]
fn test_key_by_keeps_the_last_element_per_key() {
    let keyed = key_by(&people(), &Iteratee::from("team"));
    assert_eq!(
        keyed.get("a").unwrap().index("name"),
        Some(&Value::from("cyd"))
    );
}

#[test]
fn test_partition_preserves_relative_order() {
    let (team_a, others) = partition(
        &people(),
        &Iteratee::matches(Value::map_of([("team", Value::from("a"))])),
    );
    assert_eq!(team_a.len(), 2);
    assert_eq!(others.len(), 1);
    assert_eq!(team_a[0].index("name"), Some(&Value::from("ada")));
    assert_eq!(team_a[1].index("name"), Some(&Value::from("cyd")));
}

// =============================================================================
// miscellaneous
// =============================================================================

#[test]
fn test_for_each_visits_keys() {
    let scores = Value::map_of([("a", Value::Int(1)), ("b", Value::Int(2))]);
    let mut visited = Vec::new();
    for_each(&scores, |_, key| {
        if let Key::Name(name) = key {
            visited.push(name.clone());
        }
    });
    assert_eq!(visited, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_includes_searches_substrings_in_strings() {
    assert!(includes(&Value::from("pebbles"), &Value::from("ebb")));
    assert!(!includes(&Value::from("pebbles"), &Value::from("z")));
    assert!(includes(&Value::from(vec![1_i64, 2]), &Value::Int(2)));
    assert!(includes(
        &Value::map_of([("a", Value::Int(1))]),
        &Value::Int(1)
    ));
}

#[test]
fn test_pluck_maps_a_deep_path() {
    let ages = pluck(&people(), "age");
    assert_eq!(ages, vec![Value::Int(36), Value::Int(25), Value::Int(30)]);
}

#[test]
fn test_flat_map_flattens_one_level() {
    let nested = Value::Seq(vec![
        Value::map_of([("parts", Value::from(vec![1_i64, 2]))]),
        Value::map_of([("parts", Value::from(vec![3_i64]))]),
    ]);
    let parts = flat_map_(&nested, &Iteratee::from("parts"));
    assert_eq!(parts, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

// =============================================================================
// aggregation and ordering
// =============================================================================

#[test]
fn test_min_max_by_computed_key() {
    let youngest = min_by(&people(), &Iteratee::from("age")).unwrap();
    assert_eq!(youngest.index("name"), Some(&Value::from("bob")));

    let oldest = max_by(&people(), &Iteratee::from("age")).unwrap();
    assert_eq!(oldest.index("name"), Some(&Value::from("ada")));

    assert_eq!(min_by(&Value::Seq(Vec::new()), &Iteratee::default()), None);
}

#[test]
fn test_sum_and_mean_by() {
    let total = sum_by(&people(), &Iteratee::from("age"));
    assert!((total - 91.0).abs() < f64::EPSILON);

    let average = mean_by(&people(), &Iteratee::from("age")).unwrap();
    assert!((average - 91.0 / 3.0).abs() < f64::EPSILON);

    assert_eq!(mean_by(&Value::Seq(Vec::new()), &Iteratee::default()), None);
}

#[test]
fn test_sort_by_supports_descending_keys() {
    let by_age = sort_by(people().as_seq().unwrap(), &["age"]);
    assert_eq!(by_age[0].index("name"), Some(&Value::from("bob")));

    let by_age_desc = sort_by(people().as_seq().unwrap(), &["-age"]);
    assert_eq!(by_age_desc[0].index("name"), Some(&Value::from("ada")));
}

#[test]
fn test_sort_by_applies_keys_lexicographically() {
    let sorted = order_by(people().as_seq().unwrap(), &["team", "-age"]);
    let names: Vec<_> = sorted
        .iter()
        .map(|person| person.index("name").cloned().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![Value::from("ada"), Value::from("cyd"), Value::from("bob")]
    );
}

#[test]
fn test_sort_with_a_custom_comparator() {
    let items = people();
    let sorted = sort_with(items.as_seq().unwrap(), |left, right| {
        left.index("name").unwrap().compare(right.index("name").unwrap())
    });
    assert_eq!(sorted[0].index("name"), Some(&Value::from("ada")));
    assert_eq!(sorted[2].index("name"), Some(&Value::from("cyd")));
}
