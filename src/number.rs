//! Numeric helpers: missing-tolerant arithmetic and descriptive
//! statistics.
//!
//! The `*_opt` arithmetic wrappers follow one rule: a missing operand
//! makes the present operand the result, two missing operands make a
//! missing result. Division by zero is also a missing result rather than
//! an infinity.
//!
//! Statistics operate on `&[f64]`; the `*_values` folds bridge from the
//! dynamic [`Value`](crate::value::Value) world, coercing integers and
//! floats onto one number line and ignoring everything else.
//!
//! # Examples
//!
//! ```rust
//! use dashkit::number::{add_opt, median};
//!
//! assert_eq!(add_opt(Some(2.0), None), Some(2.0));
//! assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
//! ```

use crate::value::Value;

fn combine(
    left: Option<f64>,
    right: Option<f64>,
    operation: impl FnOnce(f64, f64) -> Option<f64>,
) -> Option<f64> {
    match (left, right) {
        (Some(left), Some(right)) => operation(left, right),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

/// Missing-tolerant addition.
pub fn add_opt(left: Option<f64>, right: Option<f64>) -> Option<f64> {
    combine(left, right, |left, right| Some(left + right))
}

/// Missing-tolerant subtraction; a single present operand is returned
/// as-is, whichever side it arrived on.
pub fn subtract_opt(left: Option<f64>, right: Option<f64>) -> Option<f64> {
    combine(left, right, |left, right| Some(left - right))
}

/// Missing-tolerant multiplication.
pub fn multiply_opt(left: Option<f64>, right: Option<f64>) -> Option<f64> {
    combine(left, right, |left, right| Some(left * right))
}

/// Missing-tolerant division; dividing by zero is a missing result.
///
/// # Examples
///
/// ```rust
/// use dashkit::number::divide_opt;
///
/// assert_eq!(divide_opt(Some(9.0), Some(3.0)), Some(3.0));
/// assert_eq!(divide_opt(Some(9.0), Some(0.0)), None);
/// assert_eq!(divide_opt(None, Some(3.0)), Some(3.0));
/// ```
pub fn divide_opt(left: Option<f64>, right: Option<f64>) -> Option<f64> {
    combine(left, right, |left, right| {
        if right == 0.0 { None } else { Some(left / right) }
    })
}

/// Arithmetic mean; `None` on empty input.
pub fn mean(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Median: middle element of the sorted input, averaging the two middle
/// elements for even lengths. `None` on empty input.
///
/// # Examples
///
/// ```rust
/// use dashkit::number::median;
///
/// assert_eq!(median(&[5.0, 1.0, 3.0, 2.0, 4.0]), Some(3.0));
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// ```
pub fn median(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(f64::midpoint(sorted[middle - 1], sorted[middle]))
    } else {
        Some(sorted[middle])
    }
}

/// Population variance; `None` on empty input.
pub fn variance(numbers: &[f64]) -> Option<f64> {
    let average = mean(numbers)?;
    #[allow(clippy::cast_precision_loss)]
    Some(
        numbers
            .iter()
            .map(|number| (number - average).powi(2))
            .sum::<f64>()
            / numbers.len() as f64,
    )
}

/// Population standard deviation; `None` on empty input.
pub fn std_deviation(numbers: &[f64]) -> Option<f64> {
    variance(numbers).map(f64::sqrt)
}

/// Standard score of `value` against a distribution's mean and standard
/// deviation; `None` when the deviation is zero.
pub fn zscore(value: f64, distribution_mean: f64, distribution_std: f64) -> Option<f64> {
    if distribution_std == 0.0 {
        None
    } else {
        Some((value - distribution_mean) / distribution_std)
    }
}

fn numeric_entries(collection: &Value) -> Vec<f64> {
    match collection {
        Value::Seq(items) => items.iter().filter_map(Value::as_number).collect(),
        Value::Map(entries) => entries.values().filter_map(Value::as_number).collect(),
        scalar => scalar.as_number().into_iter().collect(),
    }
}

/// Sums the numeric entries of a collection, ignoring the rest.
pub fn sum_values(collection: &Value) -> f64 {
    numeric_entries(collection).iter().sum()
}

/// Averages the numeric entries of a collection; `None` when there are
/// none.
pub fn mean_values(collection: &Value) -> Option<f64> {
    mean(&numeric_entries(collection))
}

/// Largest numeric entry of a collection.
pub fn max_value(collection: &Value) -> Option<f64> {
    numeric_entries(collection)
        .into_iter()
        .max_by(f64::total_cmp)
}

/// Smallest numeric entry of a collection.
pub fn min_value(collection: &Value) -> Option<f64> {
    numeric_entries(collection)
        .into_iter()
        .min_by(f64::total_cmp)
}

/// Clamps `value` into `lower..=upper`.
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    value.max(lower).min(upper)
}

/// Half-open range membership `start <= value < end`, with the bounds
/// swapped when given backwards.
pub fn in_range(value: f64, start: f64, end: f64) -> bool {
    let (low, high) = if start <= end { (start, end) } else { (end, start) };
    value >= low && value < high
}

/// Rounds to `precision` decimal places (negative precision rounds to
/// powers of ten).
///
/// # Examples
///
/// ```rust
/// use dashkit::number::round_to;
///
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(1234.0, -2), 1200.0);
/// ```
pub fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10.0_f64.powi(precision);
    (value * factor).round() / factor
}

/// Rescales numbers proportionally so the largest becomes `maximum`.
///
/// Empty input stays empty; an all-zero input stays all zero.
pub fn scale(numbers: &[f64], maximum: f64) -> Vec<f64> {
    let Some(largest) = numbers.iter().copied().max_by(f64::total_cmp) else {
        return Vec::new();
    };
    if largest == 0.0 {
        return numbers.to_vec();
    }
    numbers
        .iter()
        .map(|number| number / largest * maximum)
        .collect()
}
