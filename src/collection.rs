//! Collection utilities over sequences and mappings.
//!
//! Everything in this module is built on one shared iteration primitive,
//! [`iter_entries`]: given a container and a coerced
//! [`Iteratee`](crate::iteratee::Iteratee), it lazily yields
//! `(iteratee_result, value, key)` triples in order, or reversed (for
//! mappings that means reverse insertion order, for sequences index
//! `len-1` down to `0`). Scalars iterate as the empty collection.
//!
//! Predicate positions (filtering, `every`, `some`, `find_`) run the
//! iteratee result through [`truthy`](crate::predicate::truthy).
//!
//! # Examples
//!
//! ```rust
//! use dashkit::collection::{group_by, partition};
//! use dashkit::iteratee::Iteratee;
//! use dashkit::value::Value;
//!
//! let numbers = Value::from(vec![1_i64, 2, 3, 4]);
//! let at_least_three = Iteratee::func(|value, _, _| {
//!     Value::Bool(value.as_int().unwrap_or(0) >= 3)
//! });
//!
//! let (kept, dropped) = partition(&numbers, &at_least_three);
//! assert_eq!(kept, vec![Value::Int(3), Value::Int(4)]);
//! assert_eq!(dropped, vec![Value::Int(1), Value::Int(2)]);
//! ```

use crate::error::EmptyReductionError;
use crate::iteratee::Iteratee;
use crate::predicate::{is_equal, truthy};
use crate::value::{Key, Map, Value};

/// Lazily yields `(iteratee_result, value, key)` for every entry of the
/// container, in insertion/index order or reversed.
///
/// This is the iteration primitive the whole module shares. Non-container
/// values yield nothing.
pub fn iter_entries<'a>(
    container: &'a Value,
    iteratee: &'a Iteratee,
    reverse: bool,
) -> impl Iterator<Item = (Value, &'a Value, Key)> + 'a {
    raw_entries(container, reverse)
        .map(move |(key, value)| (iteratee.apply(value, &key, container), value, key))
}

/// Yields `(key, value)` pairs without applying an iteratee.
fn raw_entries(container: &Value, reverse: bool) -> Box<dyn Iterator<Item = (Key, &Value)> + '_> {
    match container {
        Value::Seq(items) => {
            let forward = items
                .iter()
                .enumerate()
                .map(|(position, value)| (Key::Index(position), value));
            if reverse {
                Box::new(forward.rev())
            } else {
                Box::new(forward)
            }
        }
        Value::Map(entries) => {
            let forward = entries
                .iter()
                .map(|(key, value)| (Key::Name(key.clone()), value));
            if reverse {
                Box::new(forward.rev())
            } else {
                Box::new(forward)
            }
        }
        _ => Box::new(std::iter::empty()),
    }
}

/// Maps every entry through the iteratee, collecting the results.
///
/// # Examples
///
/// ```rust
/// use dashkit::collection::map_;
/// use dashkit::iteratee::Iteratee;
/// use dashkit::value::Value;
///
/// let users = Value::from(vec![
///     Value::map_of([("name", Value::from("ada"))]),
///     Value::map_of([("name", Value::from("grace"))]),
/// ]);
/// assert_eq!(
///     map_(&users, &Iteratee::from("name")),
///     vec![Value::from("ada"), Value::from("grace")]
/// );
/// ```
pub fn map_(collection: &Value, iteratee: &Iteratee) -> Vec<Value> {
    iter_entries(collection, iteratee, false)
        .map(|(result, _, _)| result)
        .collect()
}

/// Collects the original entries whose iteratee result is truthy.
pub fn filter_(collection: &Value, predicate: &Iteratee) -> Vec<Value> {
    iter_entries(collection, predicate, false)
        .filter(|(result, _, _)| truthy(result))
        .map(|(_, value, _)| value.clone())
        .collect()
}

/// Collects the original entries whose iteratee result is falsey.
pub fn reject(collection: &Value, predicate: &Iteratee) -> Vec<Value> {
    iter_entries(collection, predicate, false)
        .filter(|(result, _, _)| !truthy(result))
        .map(|(_, value, _)| value.clone())
        .collect()
}

/// Folds the collection left-to-right with an explicit reducer.
///
/// With no seed, the first entry becomes the accumulator and iteration
/// starts at the second; reducing an empty collection without a seed is
/// an [`EmptyReductionError`].
///
/// # Errors
///
/// Returns [`EmptyReductionError`] when the collection is empty and no
/// seed accumulator was supplied.
///
/// # Examples
///
/// ```rust
/// use dashkit::collection::reduce_;
/// use dashkit::value::Value;
///
/// let numbers = Value::from(vec![1_i64, 2, 3]);
/// let total = reduce_(&numbers, |accumulator, value, _| {
///     Value::Int(accumulator.as_int().unwrap_or(0) + value.as_int().unwrap_or(0))
/// }, None)?;
/// assert_eq!(total, Value::Int(6));
/// # Ok::<(), dashkit::error::EmptyReductionError>(())
/// ```
pub fn reduce_<F>(
    collection: &Value,
    reducer: F,
    accumulator: Option<Value>,
) -> Result<Value, EmptyReductionError>
where
    F: Fn(&Value, &Value, &Key) -> Value,
{
    fold_entries(collection, reducer, accumulator, false, "reduce_")
}

/// Folds the collection right-to-left; otherwise exactly [`reduce_`].
///
/// # Errors
///
/// Returns [`EmptyReductionError`] when the collection is empty and no
/// seed accumulator was supplied.
pub fn reduce_right<F>(
    collection: &Value,
    reducer: F,
    accumulator: Option<Value>,
) -> Result<Value, EmptyReductionError>
where
    F: Fn(&Value, &Value, &Key) -> Value,
{
    fold_entries(collection, reducer, accumulator, true, "reduce_right")
}

fn fold_entries<F>(
    collection: &Value,
    reducer: F,
    accumulator: Option<Value>,
    reverse: bool,
    operation: &'static str,
) -> Result<Value, EmptyReductionError>
where
    F: Fn(&Value, &Value, &Key) -> Value,
{
    let mut entries = raw_entries(collection, reverse);
    let mut accumulator = match accumulator {
        Some(seed) => seed,
        None => match entries.next() {
            Some((_, value)) => value.clone(),
            None => return Err(EmptyReductionError { operation }),
        },
    };
    for (key, value) in entries {
        accumulator = reducer(&accumulator, value, &key);
    }
    Ok(accumulator)
}

/// Returns the first entry whose iteratee result is truthy.
///
/// "Not found" is `None`, never an error.
pub fn find_(collection: &Value, predicate: &Iteratee) -> Option<Value> {
    iter_entries(collection, predicate, false)
        .find(|(result, _, _)| truthy(result))
        .map(|(_, value, _)| value.clone())
}

/// Returns the last entry whose iteratee result is truthy.
pub fn find_last(collection: &Value, predicate: &Iteratee) -> Option<Value> {
    iter_entries(collection, predicate, true)
        .find(|(result, _, _)| truthy(result))
        .map(|(_, value, _)| value.clone())
}

/// Returns `true` if every entry satisfies the predicate (vacuously true
/// on empty collections).
pub fn every(collection: &Value, predicate: &Iteratee) -> bool {
    iter_entries(collection, predicate, false).all(|(result, _, _)| truthy(&result))
}

/// Returns `true` if any entry satisfies the predicate (false on empty
/// collections).
pub fn some(collection: &Value, predicate: &Iteratee) -> bool {
    iter_entries(collection, predicate, false).any(|(result, _, _)| truthy(&result))
}

/// Groups original entries by their iteratee result's display form.
///
/// Group order follows first appearance; entries keep collection order
/// within a group.
///
/// # Examples
///
/// ```rust
/// use dashkit::collection::group_by;
/// use dashkit::iteratee::Iteratee;
/// use dashkit::value::Value;
///
/// let numbers = Value::from(vec![1_i64, 2, 3, 4]);
/// let parity = Iteratee::func(|value, _, _| {
///     Value::Int(value.as_int().unwrap_or(0) % 2)
/// });
/// let groups = group_by(&numbers, &parity);
/// assert_eq!(groups.get("1"), Some(&Value::from(vec![1_i64, 3])));
/// assert_eq!(groups.get("0"), Some(&Value::from(vec![2_i64, 4])));
/// ```
pub fn group_by(collection: &Value, iteratee: &Iteratee) -> Map {
    let mut groups = Map::new();
    for (result, value, _) in iter_entries(collection, iteratee, false) {
        let bucket = result.to_string();
        match groups.get_mut(&bucket) {
            Some(Value::Seq(members)) => members.push(value.clone()),
            _ => {
                groups.insert(bucket, Value::Seq(vec![value.clone()]));
            }
        }
    }
    groups
}

/// Splits entries into `(truthy, falsey)` by the predicate.
///
/// # Examples
///
/// ```rust
/// use dashkit::collection::partition;
/// use dashkit::iteratee::Iteratee;
/// use dashkit::value::Value;
///
/// let numbers = Value::from(vec![1_i64, 2, 3, 4]);
/// let big = Iteratee::func(|value, _, _| Value::Bool(value.as_int().unwrap_or(0) >= 3));
/// assert_eq!(
///     partition(&numbers, &big),
///     (
///         vec![Value::Int(3), Value::Int(4)],
///         vec![Value::Int(1), Value::Int(2)],
///     )
/// );
/// ```
pub fn partition(collection: &Value, predicate: &Iteratee) -> (Vec<Value>, Vec<Value>) {
    let mut kept = Vec::new();
    let mut dropped = Vec::new();
    for (result, value, _) in iter_entries(collection, predicate, false) {
        if truthy(&result) {
            kept.push(value.clone());
        } else {
            dropped.push(value.clone());
        }
    }
    (kept, dropped)
}

/// Counts entries by their iteratee result's display form.
pub fn count_by(collection: &Value, iteratee: &Iteratee) -> Map {
    let mut counts = Map::new();
    for (result, _, _) in iter_entries(collection, iteratee, false) {
        let bucket = result.to_string();
        match counts.get_mut(&bucket) {
            Some(Value::Int(count)) => *count += 1,
            _ => {
                counts.insert(bucket, Value::Int(1));
            }
        }
    }
    counts
}

/// Indexes entries by their iteratee result's display form; later entries
/// overwrite earlier ones under the same key.
pub fn key_by(collection: &Value, iteratee: &Iteratee) -> Map {
    let mut index = Map::new();
    for (result, value, _) in iter_entries(collection, iteratee, false) {
        index.insert(result.to_string(), value.clone());
    }
    index
}

/// Visits every entry in order, for side effects.
pub fn for_each<F>(collection: &Value, mut visitor: F)
where
    F: FnMut(&Value, &Key),
{
    for (key, value) in raw_entries(collection, false) {
        visitor(value, &key);
    }
}

/// Visits every entry in reverse order, for side effects.
pub fn for_each_right<F>(collection: &Value, mut visitor: F)
where
    F: FnMut(&Value, &Key),
{
    for (key, value) in raw_entries(collection, true) {
        visitor(value, &key);
    }
}

/// Returns the number of entries (string length for strings, zero for
/// other scalars).
#[inline]
pub fn size_(collection: &Value) -> usize {
    collection.len()
}

/// Membership test: sequence elements, mapping values, or substring for
/// strings. Comparison is numeric-widening [`is_equal`].
pub fn includes(collection: &Value, target: &Value) -> bool {
    match collection {
        Value::Str(text) => target.as_str().is_some_and(|needle| text.contains(needle)),
        container if container.is_seq() || container.is_map() => {
            raw_entries(container, false).any(|(_, value)| is_equal(value, target))
        }
        _ => false,
    }
}

/// Extracts a deep property from every entry (a [`map_`] over a property
/// iteratee).
pub fn pluck(collection: &Value, path: impl Into<crate::value::Path>) -> Vec<Value> {
    map_(collection, &Iteratee::Property(path.into()))
}

/// Maps every entry through the iteratee and flattens sequence results
/// one level.
pub fn flat_map_(collection: &Value, iteratee: &Iteratee) -> Vec<Value> {
    let mut flattened = Vec::new();
    for (result, _, _) in iter_entries(collection, iteratee, false) {
        match result {
            Value::Seq(items) => flattened.extend(items),
            other => flattened.push(other),
        }
    }
    flattened
}

/// Returns the original entry whose iteratee result is smallest under
/// [`Value::compare`].
pub fn min_by(collection: &Value, iteratee: &Iteratee) -> Option<Value> {
    iter_entries(collection, iteratee, false)
        .min_by(|(left, _, _), (right, _, _)| left.compare(right))
        .map(|(_, value, _)| value.clone())
}

/// Returns the original entry whose iteratee result is largest under
/// [`Value::compare`].
pub fn max_by(collection: &Value, iteratee: &Iteratee) -> Option<Value> {
    iter_entries(collection, iteratee, false)
        .max_by(|(left, _, _), (right, _, _)| left.compare(right))
        .map(|(_, value, _)| value.clone())
}

/// Sums the numeric iteratee results, ignoring non-numeric ones.
pub fn sum_by(collection: &Value, iteratee: &Iteratee) -> f64 {
    iter_entries(collection, iteratee, false)
        .filter_map(|(result, _, _)| result.as_number())
        .sum()
}

/// Averages the numeric iteratee results; `None` when nothing numeric.
pub fn mean_by(collection: &Value, iteratee: &Iteratee) -> Option<f64> {
    let numbers: Vec<f64> = iter_entries(collection, iteratee, false)
        .filter_map(|(result, _, _)| result.as_number())
        .collect();
    if numbers.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Sorts a sequence by the multi-key order mini-language.
///
/// Each key is a deep path; a leading `-` means descending for that key.
/// Keys compare lexicographically in the order given, using
/// [`Value::compare`]. An empty key list sorts by the elements themselves.
///
/// The original invalid-argument failure mode (mutually exclusive
/// comparator and keys) cannot arise here: comparators go to
/// [`sort_with`] instead.
///
/// # Examples
///
/// ```rust
/// use dashkit::collection::sort_by;
/// use dashkit::value::Value;
///
/// let people = vec![
///     Value::map_of([("name", Value::from("ada")), ("age", Value::Int(36))]),
///     Value::map_of([("name", Value::from("grace")), ("age", Value::Int(36))]),
///     Value::map_of([("name", Value::from("alan")), ("age", Value::Int(41))]),
/// ];
/// let sorted = sort_by(&people, &["-age", "name"]);
/// assert_eq!(
///     sorted[0].index("name"),
///     Some(&Value::from("alan"))
/// );
/// assert_eq!(sorted[1].index("name"), Some(&Value::from("ada")));
/// ```
pub fn sort_by(items: &[Value], keys: &[&str]) -> Vec<Value> {
    let orders: Vec<(crate::value::Path, bool)> = keys
        .iter()
        .map(|&key| {
            key.strip_prefix('-').map_or_else(
                || (crate::value::Path::parse(key), false),
                |rest| (crate::value::Path::parse(rest), true),
            )
        })
        .collect();

    let mut sorted = items.to_vec();
    sorted.sort_by(|left, right| {
        if orders.is_empty() {
            return left.compare(right);
        }
        for (path, descending) in &orders {
            let null = Value::Null;
            let left_value = crate::object::get(left, path.clone()).unwrap_or(&null);
            let right_value = crate::object::get(right, path.clone()).unwrap_or(&null);
            let ordering = left_value.compare(right_value);
            let ordering = if *descending { ordering.reverse() } else { ordering };
            if ordering != std::cmp::Ordering::Equal {
                return ordering;
            }
        }
        std::cmp::Ordering::Equal
    });
    sorted
}

/// Alias for [`sort_by`] kept for lodash vocabulary parity.
#[inline]
pub fn order_by(items: &[Value], keys: &[&str]) -> Vec<Value> {
    sort_by(items, keys)
}

/// Sorts a sequence with an explicit comparator.
pub fn sort_with<F>(items: &[Value], comparator: F) -> Vec<Value>
where
    F: Fn(&Value, &Value) -> std::cmp::Ordering,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|left, right| comparator(left, right));
    sorted
}
