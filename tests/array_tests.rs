//! Unit tests for sequence utilities: slicing, set algebra, zipping,
//! and sorted insertion.

#![cfg(feature = "array")]

use dashkit::array::{
    chunk, compact, difference, drop_items, duplicates, fill, flatten, flatten_deep, from_pairs,
    head, index_of, initial, intersection, last, last_index_of, pull, remove_where, slice,
    sorted_index, sorted_index_by, splice, tail, take, take_right, union, uniq, uniq_by, unzip,
    unzip_object, xor, zip_lists, zip_object,
};
use dashkit::iteratee::Iteratee;
use dashkit::value::Value;
use rstest::rstest;

fn ints(values: impl IntoIterator<Item = i64>) -> Vec<Value> {
    values.into_iter().map(Value::Int).collect()
}

// =============================================================================
// positional slicing
// =============================================================================

#[test]
fn test_head_last_initial_tail() {
    let items = ints([1, 2, 3]);
    assert_eq!(head(&items), Some(&Value::Int(1)));
    assert_eq!(last(&items), Some(&Value::Int(3)));
    assert_eq!(initial(&items), ints([1, 2]));
    assert_eq!(tail(&items), ints([2, 3]));

    assert_eq!(head(&[]), None);
    assert_eq!(last(&[]), None);
    assert!(initial(&[]).is_empty());
}

#[rstest]
#[case(0, vec![], ints([1, 2, 3]))]
#[case(2, ints([1, 2]), ints([3]))]
#[case(9, ints([1, 2, 3]), vec![])]
fn test_take_and_drop_are_complements(
    #[case] count: usize,
    #[case] taken: Vec<Value>,
    #[case] dropped: Vec<Value>,
) {
    let items = ints([1, 2, 3]);
    assert_eq!(take(&items, count), taken);
    assert_eq!(drop_items(&items, count), dropped);
}

#[test]
fn test_take_right_keeps_the_tail() {
    let items = ints([1, 2, 3, 4]);
    assert_eq!(take_right(&items, 2), ints([3, 4]));
    assert_eq!(take_right(&items, 9), ints([1, 2, 3, 4]));
}

#[test]
fn test_slice_clamps_out_of_range_bounds() {
    let items = ints([1, 2, 3, 4]);
    assert_eq!(slice(&items, 1, 3), ints([2, 3]));
    assert_eq!(slice(&items, 2, 99), ints([3, 4]));
    assert!(slice(&items, 3, 1).is_empty());
}

// =============================================================================
// chunking and flattening
// =============================================================================

#[test]
fn test_chunk_sizes() {
    let items = ints([1, 2, 3, 4, 5]);
    let chunks = chunk(&items, 2);
    assert_eq!(chunks, vec![ints([1, 2]), ints([3, 4]), ints([5])]);
    assert!(chunk(&items, 0).is_empty());
}

#[test]
fn test_flatten_goes_one_level() {
    let nested = vec![
        Value::Seq(ints([1, 2])),
        Value::Int(3),
        Value::Seq(vec![Value::Seq(ints([4]))]),
    ];
    assert_eq!(
        flatten(&nested),
        vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Seq(ints([4]))]
    );
    assert_eq!(flatten_deep(&nested), ints([1, 2, 3, 4]));
}

#[test]
fn test_compact_removes_falsey_elements() {
    let items = vec![
        Value::Int(1),
        Value::Null,
        Value::from(""),
        Value::Int(0),
        Value::from("keep"),
    ];
    assert_eq!(compact(&items), vec![Value::Int(1), Value::from("keep")]);
}

// =============================================================================
// set algebra
// =============================================================================

#[test]
fn test_difference_across_multiple_lists() {
    let items = ints([1, 2, 3, 4, 2]);
    let result = difference(&items, &[&ints([2]), &ints([4])]);
    assert_eq!(result, ints([1, 3]));
}

#[test]
fn test_union_collapses_duplicates_in_first_seen_order() {
    let first = ints([2, 1]);
    let second = ints([1, 3]);
    assert_eq!(union(&[&first, &second]), ints([2, 1, 3]));
}

#[test]
fn test_intersection_requires_presence_in_every_list() {
    let items = ints([1, 2, 3, 2]);
    let result = intersection(&items, &[&ints([2, 3]), &ints([3, 2, 9])]);
    assert_eq!(result, ints([2, 3]));
}

#[test]
fn test_xor_is_the_symmetric_difference() {
    let first = ints([1, 2]);
    let second = ints([2, 3]);
    let third = ints([3, 4]);
    assert_eq!(xor(&[&first, &second]), ints([1, 3]));
    // Reduced pairwise: xor(a, xor(b, c)).
    assert_eq!(xor(&[&first, &second, &third]), ints([1, 4]));
}

#[test]
fn test_uniq_widens_numbers_like_is_equal() {
    let items = vec![Value::Int(1), Value::Float(1.0), Value::Int(2)];
    assert_eq!(uniq(&items), vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn test_uniq_by_keeps_original_elements() {
    let people = vec![
        Value::map_of([("name", Value::from("ada")), ("team", Value::from("a"))]),
        Value::map_of([("name", Value::from("bob")), ("team", Value::from("a"))]),
        Value::map_of([("name", Value::from("cyd")), ("team", Value::from("b"))]),
    ];
    let by_team = uniq_by(&people, &Iteratee::from("team"));
    assert_eq!(by_team.len(), 2);
    assert_eq!(by_team[0].index("name"), Some(&Value::from("ada")));
    assert_eq!(by_team[1].index("name"), Some(&Value::from("cyd")));
}

#[test]
fn test_duplicates_reports_each_repeat_once() {
    let items = ints([1, 2, 1, 3, 2, 1]);
    assert_eq!(duplicates(&items), ints([1, 2]));
}

// =============================================================================
// zipping
// =============================================================================

#[test]
fn test_zip_stops_at_the_shortest_list() {
    let letters = vec![Value::from("a"), Value::from("b")];
    let numbers = ints([1, 2, 3]);
    let rows = zip_lists(&[&letters, &numbers]);
    assert_eq!(
        rows,
        vec![
            Value::Seq(vec![Value::from("a"), Value::Int(1)]),
            Value::Seq(vec![Value::from("b"), Value::Int(2)]),
        ]
    );

    // unzip over equally-shaped rows restores the columns.
    let columns = unzip(&rows);
    assert_eq!(
        columns,
        vec![
            Value::Seq(vec![Value::from("a"), Value::from("b")]),
            Value::Seq(ints([1, 2])),
        ]
    );
}

#[test]
fn test_zip_object_round_trips_through_unzip_object() {
    let keys = vec!["a".to_string(), "b".to_string()];
    let values = ints([1, 2]);
    let mapping = zip_object(&keys, &values);
    assert_eq!(unzip_object(&mapping), (keys, values));
}

#[test]
fn test_zip_object_fills_missing_values_with_null() {
    let mapping = zip_object(&["a".to_string(), "b".to_string()], &ints([1]));
    assert_eq!(mapping.get("b"), Some(&Value::Null));
}

#[test]
fn test_from_pairs_skips_malformed_rows() {
    let pairs = vec![
        Value::Seq(vec![Value::from("a"), Value::Int(1)]),
        Value::Int(7),
        Value::Seq(vec![Value::from("a"), Value::Int(9)]),
        Value::Seq(vec![Value::Int(3), Value::Int(4)]),
    ];
    let mapping = from_pairs(&pairs);
    assert_eq!(mapping.len(), 1);
    // Later pairs win for repeated keys.
    assert_eq!(mapping.get("a"), Some(&Value::Int(9)));
}

// =============================================================================
// searching
// =============================================================================

#[test]
fn test_sorted_index_is_the_leftmost_insertion_point() {
    let items = ints([10, 20, 20, 30]);
    assert_eq!(sorted_index(&items, &Value::Int(20)), 1);
    assert_eq!(sorted_index(&items, &Value::Int(5)), 0);
    assert_eq!(sorted_index(&items, &Value::Int(99)), 4);
}

#[test]
fn test_sorted_index_by_compares_computed_keys() {
    let items = vec![
        Value::map_of([("age", Value::Int(20))]),
        Value::map_of([("age", Value::Int(40))]),
    ];
    let probe = Value::map_of([("age", Value::Int(30))]);
    assert_eq!(sorted_index_by(&items, &probe, &Iteratee::from("age")), 1);
}

#[test]
fn test_index_of_and_last_index_of() {
    let items = ints([5, 7, 5]);
    assert_eq!(index_of(&items, &Value::Int(5)), Some(0));
    assert_eq!(last_index_of(&items, &Value::Int(5)), Some(2));
    assert_eq!(index_of(&items, &Value::Int(9)), None);
}

// =============================================================================
// in-place mutation
// =============================================================================

#[test]
fn test_fill_overwrites_the_given_range() {
    let mut items = ints([1, 2, 3, 4]);
    fill(&mut items, &Value::Int(0), 1, 3);
    assert_eq!(items, ints([1, 0, 0, 4]));
}

#[test]
fn test_splice_removes_and_inserts() {
    let mut items = ints([1, 2, 3, 4]);
    let removed = splice(&mut items, 1, 2, ints([9, 8]));
    assert_eq!(removed, ints([2, 3]));
    assert_eq!(items, ints([1, 9, 8, 4]));
}

#[test]
fn test_pull_removes_all_occurrences() {
    let mut items = ints([1, 2, 1, 3]);
    pull(&mut items, &ints([1]));
    assert_eq!(items, ints([2, 3]));
}

#[test]
fn test_in_place_operations_return_the_sequence_for_chaining() {
    let mut items = ints([1, 0, 2]);
    // The returned borrow stays tied to `items`, so calls can nest.
    let remaining = pull(fill(&mut items, &Value::Int(0), 0, 1), &ints([0])).len();
    assert_eq!(remaining, 1);
    assert_eq!(items, ints([2]));
}

#[test]
fn test_remove_where_returns_the_removed_elements() {
    let mut items = ints([1, 2, 3, 4]);
    let even = Iteratee::func(|value, _, _| {
        Value::Bool(value.as_int().is_some_and(|int| int % 2 == 0))
    });
    let removed = remove_where(&mut items, &even);
    assert_eq!(removed, ints([2, 4]));
    assert_eq!(items, ints([1, 3]));
}
