//! Unit tests for missing-tolerant arithmetic and descriptive
//! statistics.

#![cfg(feature = "number")]

use dashkit::number::{
    add_opt, clamp, divide_opt, in_range, max_value, mean, mean_values, median, min_value,
    multiply_opt, round_to, scale, std_deviation, subtract_opt, sum_values, variance, zscore,
};
use dashkit::value::Value;
use rstest::rstest;

// =============================================================================
// missing-tolerant arithmetic
// =============================================================================

#[test]
fn test_missing_operands_pass_through() {
    assert_eq!(add_opt(Some(2.0), Some(3.0)), Some(5.0));
    assert_eq!(add_opt(None, Some(3.0)), Some(3.0));
    assert_eq!(add_opt(Some(2.0), None), Some(2.0));
    assert_eq!(add_opt(None, None), None);

    assert_eq!(subtract_opt(Some(5.0), Some(2.0)), Some(3.0));
    assert_eq!(multiply_opt(Some(4.0), None), Some(4.0));
}

#[test]
fn test_divide_by_zero_is_none() {
    assert_eq!(divide_opt(Some(9.0), Some(3.0)), Some(3.0));
    assert_eq!(divide_opt(Some(9.0), Some(0.0)), None);
    assert_eq!(divide_opt(Some(9.0), None), Some(9.0));
}

// =============================================================================
// descriptive statistics
// =============================================================================

#[test]
fn test_mean_median_on_empty_input() {
    assert_eq!(mean(&[]), None);
    assert_eq!(median(&[]), None);
    assert_eq!(variance(&[]), None);
    assert_eq!(std_deviation(&[]), None);
}

#[rstest]
#[case(&[5.0, 1.0, 3.0, 2.0, 4.0], 3.0)]
#[case(&[1.0, 2.0, 3.0, 4.0], 2.5)]
#[case(&[7.0], 7.0)]
fn test_median_sorts_first(#[case] numbers: &[f64], #[case] expected: f64) {
    assert_eq!(median(numbers), Some(expected));
}

#[test]
fn test_variance_is_population_variance() {
    // Mean 3, squared deviations 4+1+0+1+4 = 10, over n=5.
    assert_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(2.0));
    assert_eq!(std_deviation(&[2.0, 2.0]), Some(0.0));
}

#[test]
fn test_zscore_rejects_zero_deviation() {
    assert_eq!(zscore(5.0, 3.0, 2.0), Some(1.0));
    assert_eq!(zscore(5.0, 3.0, 0.0), None);
}

// =============================================================================
// value-level folds
// =============================================================================

#[test]
fn test_sum_values_ignores_non_numeric_entries() {
    let mixed = Value::Seq(vec![
        Value::Int(1),
        Value::from("skip"),
        Value::Float(2.5),
        Value::Null,
    ]);
    assert!((sum_values(&mixed) - 3.5).abs() < f64::EPSILON);
}

#[test]
fn test_value_folds_over_mappings_use_the_values() {
    let scores = Value::map_of([
        ("a", Value::Int(4)),
        ("b", Value::Int(8)),
        ("label", Value::from("x")),
    ]);
    assert_eq!(mean_values(&scores), Some(6.0));
    assert_eq!(max_value(&scores), Some(8.0));
    assert_eq!(min_value(&scores), Some(4.0));
}

#[test]
fn test_value_folds_on_scalars_and_empties() {
    assert_eq!(mean_values(&Value::Int(7)), Some(7.0));
    assert_eq!(mean_values(&Value::from("text")), None);
    assert_eq!(max_value(&Value::Seq(Vec::new())), None);
    assert!((sum_values(&Value::Seq(Vec::new()))).abs() < f64::EPSILON);
}

// =============================================================================
// ranges and rounding
// =============================================================================

#[test]
fn test_clamp_bounds() {
    assert_eq!(clamp(5.0, 1.0, 3.0), 3.0);
    assert_eq!(clamp(-5.0, 1.0, 3.0), 1.0);
    assert_eq!(clamp(2.0, 1.0, 3.0), 2.0);
}

#[test]
fn test_in_range_is_half_open_and_swaps_backwards_bounds() {
    assert!(in_range(2.0, 1.0, 3.0));
    assert!(!in_range(3.0, 1.0, 3.0));
    assert!(in_range(1.0, 1.0, 3.0));
    // Backwards bounds behave the same.
    assert!(in_range(2.0, 3.0, 1.0));
}

#[rstest]
#[case(3.14159, 2, 3.14)]
#[case(3.145, 0, 3.0)]
#[case(1234.0, -2, 1200.0)]
fn test_round_to(#[case] value: f64, #[case] precision: i32, #[case] expected: f64) {
    assert!((round_to(value, precision) - expected).abs() < f64::EPSILON);
}

#[test]
fn test_scale_rescales_to_the_maximum() {
    assert_eq!(scale(&[1.0, 2.0, 4.0], 1.0), vec![0.25, 0.5, 1.0]);
    assert_eq!(scale(&[0.0, 0.0], 10.0), vec![0.0, 0.0]);
    assert!(scale(&[], 1.0).is_empty());
}
