//! Sequence utilities: slicing, chunking, flattening, set algebra,
//! zipping, and sorted-insertion search.
//!
//! Functions here take slices and return fresh vectors; the handful of
//! genuinely mutating operations (`fill`, `splice`, `pull`,
//! `remove_where`) take `&mut Vec<Value>` and act in place. Element
//! comparison throughout is the numeric-widening
//! [`is_equal`](crate::predicate::is_equal), so `Int(1)` and `Float(1.0)`
//! collapse together in the set operations.
//!
//! # Examples
//!
//! ```rust
//! use dashkit::array::{chunk, uniq};
//! use dashkit::value::Value;
//!
//! let items: Vec<Value> = (1_i64..=5).map(Value::Int).collect();
//! assert_eq!(chunk(&items, 2).len(), 3);
//! assert_eq!(
//!     uniq(&[Value::Int(1), Value::Int(2), Value::Int(1)]),
//!     vec![Value::Int(1), Value::Int(2)]
//! );
//! ```

use crate::iteratee::Iteratee;
use crate::predicate::{is_equal, truthy};
use crate::value::{Map, Value};

/// Returns the first element.
#[inline]
pub fn head(items: &[Value]) -> Option<&Value> {
    items.first()
}

/// Returns the last element.
#[inline]
pub fn last(items: &[Value]) -> Option<&Value> {
    items.last()
}

/// Returns everything but the last element.
pub fn initial(items: &[Value]) -> Vec<Value> {
    items[..items.len().saturating_sub(1)].to_vec()
}

/// Returns everything but the first element.
pub fn tail(items: &[Value]) -> Vec<Value> {
    items.get(1..).unwrap_or(&[]).to_vec()
}

/// Returns the first `count` elements.
pub fn take(items: &[Value], count: usize) -> Vec<Value> {
    items[..count.min(items.len())].to_vec()
}

/// Returns the last `count` elements, in order.
pub fn take_right(items: &[Value], count: usize) -> Vec<Value> {
    items[items.len().saturating_sub(count)..].to_vec()
}

/// Returns the elements after the first `count`.
pub fn drop_items(items: &[Value], count: usize) -> Vec<Value> {
    items[count.min(items.len())..].to_vec()
}

/// Returns the elements before the last `count`.
pub fn drop_right(items: &[Value], count: usize) -> Vec<Value> {
    items[..items.len().saturating_sub(count)].to_vec()
}

/// Returns the half-open range `start..end`, both bounds clamped.
pub fn slice(items: &[Value], start: usize, end: usize) -> Vec<Value> {
    let end = end.min(items.len());
    let start = start.min(end);
    items[start..end].to_vec()
}

/// Splits the sequence into `ceil(len / size)` chunks of at most `size`
/// elements; concatenating the chunks reproduces the input.
///
/// A `size` of zero yields no chunks.
///
/// # Examples
///
/// ```rust
/// use dashkit::array::chunk;
/// use dashkit::value::Value;
///
/// let items: Vec<Value> = (1_i64..=5).map(Value::Int).collect();
/// let chunks = chunk(&items, 2);
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[2], vec![Value::Int(5)]);
/// ```
pub fn chunk(items: &[Value], size: usize) -> Vec<Vec<Value>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[Value]>::to_vec).collect()
}

/// Removes falsey elements (see [`truthy`](crate::predicate::truthy)).
pub fn compact(items: &[Value]) -> Vec<Value> {
    items.iter().filter(|item| truthy(item)).cloned().collect()
}

/// Flattens nested sequences one level.
pub fn flatten(items: &[Value]) -> Vec<Value> {
    let mut flattened = Vec::new();
    for item in items {
        match item {
            Value::Seq(inner) => flattened.extend(inner.iter().cloned()),
            other => flattened.push(other.clone()),
        }
    }
    flattened
}

/// Flattens nested sequences all the way down.
///
/// Idempotent: flattening an already-flat sequence returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use dashkit::array::flatten_deep;
/// use dashkit::value::Value;
///
/// let nested = vec![
///     Value::Int(1),
///     Value::from(vec![Value::Int(2), Value::from(vec![3_i64, 4])]),
/// ];
/// let flat = flatten_deep(&nested);
/// assert_eq!(flat, (1_i64..=4).map(Value::Int).collect::<Vec<_>>());
/// assert_eq!(flatten_deep(&flat), flat);
/// ```
pub fn flatten_deep(items: &[Value]) -> Vec<Value> {
    let mut flattened = Vec::new();
    for item in items {
        match item {
            Value::Seq(inner) => flattened.extend(flatten_deep(inner)),
            other => flattened.push(other.clone()),
        }
    }
    flattened
}

fn contains(haystack: &[Value], needle: &Value) -> bool {
    haystack.iter().any(|candidate| is_equal(candidate, needle))
}

/// Elements of `items` present in none of the `others`, defined by the
/// recursive reduction: difference against the first list, then
/// recursively against the rest. The base case (no `others`) returns
/// `items` unchanged, duplicates and all.
///
/// # Examples
///
/// ```rust
/// use dashkit::array::difference;
/// use dashkit::value::Value;
///
/// let items: Vec<Value> = (1_i64..=4).map(Value::Int).collect();
/// assert_eq!(
///     difference(&items, &[&[Value::Int(2)], &[Value::Int(4)]]),
///     vec![Value::Int(1), Value::Int(3)]
/// );
/// ```
pub fn difference(items: &[Value], others: &[&[Value]]) -> Vec<Value> {
    match others.split_first() {
        None => items.to_vec(),
        Some((first, rest)) => {
            let surviving: Vec<Value> = items
                .iter()
                .filter(|item| !contains(first, item))
                .cloned()
                .collect();
            difference(&surviving, rest)
        }
    }
}

/// First-seen-order union of the lists, duplicates collapsed.
pub fn union(lists: &[&[Value]]) -> Vec<Value> {
    let mut combined = Vec::new();
    for list in lists {
        combined.extend_from_slice(list);
    }
    uniq(&combined)
}

/// Elements of `items` present in every one of the `others`, duplicates
/// collapsed, first-seen order.
pub fn intersection(items: &[Value], others: &[&[Value]]) -> Vec<Value> {
    uniq(items)
        .into_iter()
        .filter(|item| others.iter().all(|list| contains(list, item)))
        .collect()
}

/// Symmetric difference, reduced recursively across the lists.
///
/// Duplicates collapse; elements keep first-seen order within each
/// reduction step.
///
/// # Examples
///
/// ```rust
/// use dashkit::array::xor;
/// use dashkit::value::Value;
///
/// let first: Vec<Value> = vec![Value::Int(1), Value::Int(2)];
/// let second: Vec<Value> = vec![Value::Int(2), Value::Int(3)];
/// assert_eq!(xor(&[&first, &second]), vec![Value::Int(1), Value::Int(3)]);
/// ```
pub fn xor(lists: &[&[Value]]) -> Vec<Value> {
    match lists.split_first() {
        None => Vec::new(),
        Some((first, [])) => uniq(first),
        Some((first, rest)) => {
            let rest_xor = xor(rest);
            let first = uniq(first);
            let mut result: Vec<Value> = first
                .iter()
                .filter(|item| !contains(&rest_xor, item))
                .cloned()
                .collect();
            result.extend(
                rest_xor
                    .iter()
                    .filter(|item| !contains(&first, item))
                    .cloned(),
            );
            result
        }
    }
}

/// Deduplicates, preserving first-seen order.
pub fn uniq(items: &[Value]) -> Vec<Value> {
    uniq_by(items, &Iteratee::Identity)
}

/// Deduplicates by a computed key, returning the ORIGINAL elements (not
/// the computed keys), first occurrence winning.
///
/// # Examples
///
/// ```rust
/// use dashkit::array::uniq_by;
/// use dashkit::iteratee::Iteratee;
/// use dashkit::value::Value;
///
/// let items = vec![Value::Float(1.2), Value::Float(1.9), Value::Float(2.4)];
/// let floor = Iteratee::func(|value, _, _| {
///     Value::Int(value.as_number().unwrap_or(0.0).floor() as i64)
/// });
/// assert_eq!(uniq_by(&items, &floor), vec![Value::Float(1.2), Value::Float(2.4)]);
/// ```
pub fn uniq_by(items: &[Value], iteratee: &Iteratee) -> Vec<Value> {
    let mut seen_keys: Vec<Value> = Vec::new();
    let mut result = Vec::new();
    for item in items {
        let dedup_key = iteratee.apply_value(item);
        if !contains(&seen_keys, &dedup_key) {
            seen_keys.push(dedup_key);
            result.push(item.clone());
        }
    }
    result
}

/// Elements that appear more than once, listed once each in first-seen
/// order.
pub fn duplicates(items: &[Value]) -> Vec<Value> {
    duplicates_by(items, &Iteratee::Identity)
}

/// Like [`duplicates`], with the repetition key computed by an iteratee;
/// ORIGINAL (first-occurrence) elements are returned.
pub fn duplicates_by(items: &[Value], iteratee: &Iteratee) -> Vec<Value> {
    let keys: Vec<Value> = items.iter().map(|item| iteratee.apply_value(item)).collect();
    let mut reported: Vec<Value> = Vec::new();
    let mut result = Vec::new();
    for (position, dedup_key) in keys.iter().enumerate() {
        let repeated = keys
            .iter()
            .skip(position + 1)
            .any(|later| is_equal(later, dedup_key));
        if repeated && !contains(&reported, dedup_key) {
            reported.push(dedup_key.clone());
            result.push(items[position].clone());
        }
    }
    result
}

/// Zips the lists positionally: element `i` of the result gathers element
/// `i` of every input, stopping at the shortest list.
pub fn zip_lists(lists: &[&[Value]]) -> Vec<Value> {
    let Some(shortest) = lists.iter().map(|list| list.len()).min() else {
        return Vec::new();
    };
    (0..shortest)
        .map(|position| {
            Value::Seq(lists.iter().map(|list| list[position].clone()).collect())
        })
        .collect()
}

/// Inverse of [`zip_lists`]: regroups a sequence of equally-shaped rows
/// into columns. Zipping is its own inverse, so this is `zip_lists` over
/// the rows.
pub fn unzip(rows: &[Value]) -> Vec<Value> {
    let borrowed: Vec<&[Value]> = rows
        .iter()
        .filter_map(|row| row.as_seq().map(Vec::as_slice))
        .collect();
    zip_lists(&borrowed)
}

/// Pairs keys with values into a mapping; missing values become null,
/// surplus values are dropped, duplicate keys keep the LAST pairing.
///
/// # Examples
///
/// ```rust
/// use dashkit::array::zip_object;
/// use dashkit::value::Value;
///
/// let keyed = zip_object(&["a".to_string(), "b".to_string()], &[Value::Int(1)]);
/// assert_eq!(keyed.get("a"), Some(&Value::Int(1)));
/// assert_eq!(keyed.get("b"), Some(&Value::Null));
/// ```
pub fn zip_object(keys: &[String], values: &[Value]) -> Map {
    let mut result = Map::with_capacity(keys.len());
    for (position, key) in keys.iter().enumerate() {
        result.insert(
            key.clone(),
            values.get(position).cloned().unwrap_or(Value::Null),
        );
    }
    result
}

/// Inverse of [`zip_object`]: splits a mapping back into parallel key and
/// value lists in insertion order.
pub fn unzip_object(map: &Map) -> (Vec<String>, Vec<Value>) {
    (
        map.keys().cloned().collect(),
        map.values().cloned().collect(),
    )
}

/// Builds a mapping from `[key, value]` pair rows; malformed rows are
/// skipped.
pub fn from_pairs(pairs: &[Value]) -> Map {
    let mut result = Map::new();
    for pair in pairs {
        if let Some([key, value]) = pair.as_seq().map(Vec::as_slice)
            && let Some(name) = key.as_str()
        {
            result.insert(name.to_string(), value.clone());
        }
    }
    result
}

/// Leftmost index at which `value` could be inserted while keeping the
/// sequence sorted (under [`Value::compare`]).
///
/// # Examples
///
/// ```rust
/// use dashkit::array::sorted_index;
/// use dashkit::value::Value;
///
/// let items: Vec<Value> = [1_i64, 3, 3, 5].map(Value::Int).to_vec();
/// assert_eq!(sorted_index(&items, &Value::Int(3)), 1);
/// assert_eq!(sorted_index(&items, &Value::Int(6)), 4);
/// ```
pub fn sorted_index(items: &[Value], value: &Value) -> usize {
    items.partition_point(|candidate| candidate.compare(value) == std::cmp::Ordering::Less)
}

/// [`sorted_index`] with the comparison key computed by an iteratee for
/// both the elements and the probe value.
pub fn sorted_index_by(items: &[Value], value: &Value, iteratee: &Iteratee) -> usize {
    let probe = iteratee.apply_value(value);
    items.partition_point(|candidate| {
        iteratee.apply_value(candidate).compare(&probe) == std::cmp::Ordering::Less
    })
}

/// First position of an element structurally equal to `value`.
pub fn index_of(items: &[Value], value: &Value) -> Option<usize> {
    items.iter().position(|candidate| is_equal(candidate, value))
}

/// Last position of an element structurally equal to `value`.
pub fn last_index_of(items: &[Value], value: &Value) -> Option<usize> {
    items.iter().rposition(|candidate| is_equal(candidate, value))
}

/// Appends a value in place and returns the sequence for chaining.
pub fn push(items: &mut Vec<Value>, value: Value) -> &mut Vec<Value> {
    items.push(value);
    items
}

/// Overwrites the half-open range `start..end` (clamped) with clones of
/// `value`, in place.
///
/// # Examples
///
/// ```rust
/// use dashkit::array::fill;
/// use dashkit::value::Value;
///
/// let mut items: Vec<Value> = (1_i64..=4).map(Value::Int).collect();
/// fill(&mut items, &Value::Int(0), 1, 3);
/// assert_eq!(items, [1_i64, 0, 0, 4].map(Value::Int).to_vec());
/// ```
pub fn fill<'a>(
    items: &'a mut Vec<Value>,
    value: &Value,
    start: usize,
    end: usize,
) -> &'a mut Vec<Value> {
    let end = end.min(items.len());
    let start = start.min(end);
    for slot in &mut items[start..end] {
        *slot = value.clone();
    }
    items
}

/// Removes `delete_count` elements at `start` (both clamped), inserts
/// `insertions` there, and returns the removed elements.
///
/// # Examples
///
/// ```rust
/// use dashkit::array::splice;
/// use dashkit::value::Value;
///
/// let mut items: Vec<Value> = (1_i64..=4).map(Value::Int).collect();
/// let removed = splice(&mut items, 1, 2, vec![Value::Int(9)]);
/// assert_eq!(removed, vec![Value::Int(2), Value::Int(3)]);
/// assert_eq!(items, [1_i64, 9, 4].map(Value::Int).to_vec());
/// ```
pub fn splice(
    items: &mut Vec<Value>,
    start: usize,
    delete_count: usize,
    insertions: Vec<Value>,
) -> Vec<Value> {
    let start = start.min(items.len());
    let end = start.saturating_add(delete_count).min(items.len());
    items.splice(start..end, insertions).collect()
}

/// Removes, in place, every element structurally equal to any of
/// `unwanted`.
pub fn pull<'a>(items: &'a mut Vec<Value>, unwanted: &[Value]) -> &'a mut Vec<Value> {
    items.retain(|item| !contains(unwanted, item));
    items
}

/// Removes, in place, every element the predicate accepts, returning the
/// removed elements in order.
pub fn remove_where(items: &mut Vec<Value>, predicate: &Iteratee) -> Vec<Value> {
    let mut removed = Vec::new();
    let mut kept = Vec::with_capacity(items.len());
    for item in items.drain(..) {
        if truthy(&predicate.apply_value(&item)) {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *items = kept;
    removed
}
