//! Shape, equality, and order predicates over [`Value`]s.
//!
//! These are the truth-valued building blocks the rest of the library
//! leans on: collection filtering coerces its iteratee results through
//! [`truthy`], partial-match iteratees go through [`is_match`], and the
//! sorted-sequence checks come in the usual four monotonicity flavors.
//!
//! # Examples
//!
//! ```rust
//! use dashkit::predicate::{is_match, truthy};
//! use dashkit::value::Value;
//!
//! let user = Value::map_of([("name", Value::from("ada")), ("admin", Value::Bool(true))]);
//! let wanted = Value::map_of([("admin", Value::Bool(true))]);
//!
//! assert!(is_match(&user, &wanted));
//! assert!(!truthy(&Value::from("")));
//! ```

use crate::value::Value;

/// Returns `true` if the value is an integer or a float.
#[inline]
pub const fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// Returns `true` if the value is an integer.
#[inline]
pub const fn is_integer(value: &Value) -> bool {
    value.is_int()
}

/// Returns `true` if the value is a float.
#[inline]
pub const fn is_float(value: &Value) -> bool {
    value.is_float()
}

/// Returns `true` if the value is a boolean.
#[inline]
pub const fn is_boolean(value: &Value) -> bool {
    value.is_bool()
}

/// Returns `true` if the value is a string.
#[inline]
pub const fn is_string(value: &Value) -> bool {
    value.is_str()
}

/// Returns `true` if the value is a sequence.
#[inline]
pub const fn is_sequence(value: &Value) -> bool {
    value.is_seq()
}

/// Returns `true` if the value is a mapping.
#[inline]
pub const fn is_mapping(value: &Value) -> bool {
    value.is_map()
}

/// Returns `true` if the value is null.
#[inline]
pub const fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// Returns `true` for null and for empty strings, sequences, and mappings.
///
/// Numbers and booleans are never empty.
///
/// # Examples
///
/// ```rust
/// use dashkit::predicate::is_empty;
/// use dashkit::value::Value;
///
/// assert!(is_empty(&Value::Null));
/// assert!(is_empty(&Value::from("")));
/// assert!(!is_empty(&Value::Int(0)));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Str(_) | Value::Seq(_) | Value::Map(_) => value.is_empty(),
        _ => false,
    }
}

/// Returns `true` only for the literal integer zero.
///
/// This deliberately keeps the narrow integer-only semantics: a float
/// `0.0` is NOT zero here. Use [`truthy`] if you want the looser notion
/// under which both are falsey.
///
/// # Examples
///
/// ```rust
/// use dashkit::predicate::is_zero;
/// use dashkit::value::Value;
///
/// assert!(is_zero(&Value::Int(0)));
/// assert!(!is_zero(&Value::Float(0.0)));
/// assert!(!is_zero(&Value::from("0")));
/// ```
#[inline]
pub const fn is_zero(value: &Value) -> bool {
    matches!(value, Value::Int(0))
}

/// Returns the general truthiness of a value.
///
/// Falsey: null, `false`, integer `0`, float `0.0`, empty string, empty
/// sequence, empty mapping. Everything else is truthy. Every
/// predicate-position iteratee result in the collection module is run
/// through this.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) | Value::Int(0) => false,
        Value::Float(inner) => *inner != 0.0,
        Value::Str(text) => !text.is_empty(),
        Value::Seq(items) => !items.is_empty(),
        Value::Map(entries) => !entries.is_empty(),
        _ => true,
    }
}

/// Deep structural equality with numeric widening.
///
/// Like `PartialEq` on [`Value`] except that integers and floats compare
/// on one number line, so `Int(1)` equals `Float(1.0)`. Containers
/// recurse with the same rule.
///
/// # Examples
///
/// ```rust
/// use dashkit::predicate::is_equal;
/// use dashkit::value::Value;
///
/// assert!(is_equal(&Value::Int(1), &Value::Float(1.0)));
/// assert!(is_equal(
///     &Value::from(vec![Value::Int(1)]),
///     &Value::from(vec![Value::Float(1.0)]),
/// ));
/// assert!(!is_equal(&Value::Int(1), &Value::from("1")));
/// ```
pub fn is_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Seq(first), Value::Seq(second)) => {
            first.len() == second.len()
                && first.iter().zip(second.iter()).all(|(a, b)| is_equal(a, b))
        }
        (Value::Map(first), Value::Map(second)) => {
            first.len() == second.len()
                && first
                    .iter()
                    .all(|(key, value)| second.get(key).is_some_and(|other| is_equal(value, other)))
        }
        (first, second) if first.is_number() && second.is_number() => {
            // as_number is total on numeric variants
            first.as_number() == second.as_number()
        }
        (first, second) => first == second,
    }
}

/// Partial deep match of `source` against `target`.
///
/// Every key present in `source` must exist in `target` with a matching
/// value; mappings and sequences recurse, the first mismatch
/// short-circuits. Matching an empty mapping or sequence source succeeds
/// against any container of the same shape. Non-container sources fall
/// back to [`is_equal`].
///
/// # Examples
///
/// ```rust
/// use dashkit::predicate::is_match;
/// use dashkit::value::Value;
///
/// let target = Value::map_of([
///     ("a", Value::Int(1)),
///     ("b", Value::map_of([("c", Value::Int(2)), ("d", Value::Int(3))])),
/// ]);
/// let source = Value::map_of([("b", Value::map_of([("c", Value::Int(2))]))]);
///
/// assert!(is_match(&target, &source));
/// assert!(!is_match(&target, &Value::map_of([("a", Value::Int(9))])));
/// ```
pub fn is_match(target: &Value, source: &Value) -> bool {
    match (target, source) {
        (Value::Map(target_entries), Value::Map(source_entries)) => {
            source_entries.iter().all(|(key, wanted)| {
                target_entries
                    .get(key)
                    .is_some_and(|found| is_match(found, wanted))
            })
        }
        (Value::Seq(target_items), Value::Seq(source_items)) => {
            source_items.len() <= target_items.len()
                && source_items
                    .iter()
                    .zip(target_items.iter())
                    .all(|(wanted, found)| is_match(found, wanted))
        }
        (found, wanted) => is_equal(found, wanted),
    }
}

/// Returns `true` if every adjacent pair of `items` satisfies `comparator`.
///
/// Empty and single-element inputs are vacuously monotone.
///
/// # Examples
///
/// ```rust
/// use dashkit::predicate::is_monotone;
/// use dashkit::value::Value;
/// use std::cmp::Ordering;
///
/// let items = vec![Value::Int(1), Value::Int(1), Value::Int(3)];
/// assert!(is_monotone(&items, |left, right| {
///     left.compare(right) != Ordering::Greater
/// }));
/// ```
pub fn is_monotone<F>(items: &[Value], comparator: F) -> bool
where
    F: Fn(&Value, &Value) -> bool,
{
    items.windows(2).all(|pair| comparator(&pair[0], &pair[1]))
}

/// Returns `true` if the sequence never decreases.
pub fn is_increasing(items: &[Value]) -> bool {
    is_monotone(items, |left, right| {
        left.compare(right) != std::cmp::Ordering::Greater
    })
}

/// Returns `true` if each element is strictly greater than the last.
pub fn is_strictly_increasing(items: &[Value]) -> bool {
    is_monotone(items, |left, right| {
        left.compare(right) == std::cmp::Ordering::Less
    })
}

/// Returns `true` if the sequence never increases.
pub fn is_decreasing(items: &[Value]) -> bool {
    is_monotone(items, |left, right| {
        left.compare(right) != std::cmp::Ordering::Less
    })
}

/// Returns `true` if each element is strictly smaller than the last.
pub fn is_strictly_decreasing(items: &[Value]) -> bool {
    is_monotone(items, |left, right| {
        left.compare(right) == std::cmp::Ordering::Greater
    })
}
