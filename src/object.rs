//! Object and deep-path utilities.
//!
//! Deep `get`/`set`/`has` over nested [`Value`](crate::value::Value)
//! structures addressed by [`Path`](crate::value::Path), plus structural
//! merge/defaults and the key/value transforms.
//!
//! Lookup is short-circuiting: the instant any intermediate step fails
//! (missing key, index out of range, non-container value) the traversal
//! stops and the caller gets `None` (or their supplied default). Nothing
//! here reports *where* a lookup failed; absence is a value, not an error.
//!
//! # Examples
//!
//! ```rust
//! use dashkit::object::{get, has, set};
//! use dashkit::value::Value;
//!
//! let mut data = Value::Null;
//! set(&mut data, "users[0].name", Value::from("ada"));
//!
//! assert!(has(&data, "users[0].name"));
//! assert_eq!(get(&data, "users[0].name"), Some(&Value::from("ada")));
//! assert_eq!(get(&data, "users[1].name"), None);
//! ```

use crate::value::{Key, Map, Path, Value};

/// Resolves a deep path, returning the found value or `None`.
///
/// The empty path addresses `obj` itself.
///
/// # Examples
///
/// ```rust
/// use dashkit::object::get;
/// use dashkit::value::Value;
///
/// let data = Value::map_of([
///     ("a", Value::map_of([("b", Value::map_of([("c", Value::Int(1))]))])),
/// ]);
/// assert_eq!(get(&data, "a.b.c"), Some(&Value::Int(1)));
/// assert_eq!(get(&data, "a.b.missing"), None);
/// assert_eq!(get(&data, "a.b.c.too.deep"), None);
/// ```
pub fn get<'a>(obj: &'a Value, path: impl Into<Path>) -> Option<&'a Value> {
    let path = path.into();
    let mut cursor = obj;
    for key in &path {
        cursor = cursor.index(key.clone())?;
    }
    Some(cursor)
}

/// Like [`get`], but falls back to `default` on lookup failure.
///
/// An explicit null at the path is a successful lookup, not a fallback.
///
/// # Examples
///
/// ```rust
/// use dashkit::object::get_or;
/// use dashkit::value::Value;
///
/// let data = Value::map_of([("a", Value::Null)]);
/// let fallback = Value::Int(-1);
///
/// assert_eq!(get_or(&data, "a", &fallback), &Value::Null);
/// assert_eq!(get_or(&data, "b", &fallback), &Value::Int(-1));
/// ```
pub fn get_or<'a>(obj: &'a Value, path: impl Into<Path>, default: &'a Value) -> &'a Value {
    get(obj, path).unwrap_or(default)
}

/// Returns `true` if the deep path resolves to any value, null included.
///
/// # Examples
///
/// ```rust
/// use dashkit::object::has;
/// use dashkit::value::Value;
///
/// let data = Value::map_of([(
///     "a",
///     Value::map_of([(
///         "b",
///         Value::from(vec![
///             Value::Int(0),
///             Value::map_of([("c", Value::from(vec![1_i64, 2]))]),
///         ]),
///     )]),
/// )]);
///
/// assert!(has(&data, "a.b.1.c.1"));
/// assert!(!has(&data, "a.b.1.c.2"));
/// ```
pub fn has(obj: &Value, path: impl Into<Path>) -> bool {
    get(obj, path).is_some()
}

/// Writes `value` at a deep path, creating intermediate containers.
///
/// A missing intermediate becomes a sequence when the next key is a
/// numeric index (padding with nulls up to that index) and a mapping
/// otherwise. An existing intermediate of the wrong shape is structurally
/// replaced: a scalar in the way becomes the needed container, and a
/// sequence addressed by a non-numeric name becomes a mapping. Existing
/// mappings absorb numeric keys as digit names, mirroring lookup.
///
/// Returns `obj` for call chaining. The empty path replaces `obj` itself.
///
/// # Examples
///
/// ```rust
/// use dashkit::object::set;
/// use dashkit::value::Value;
///
/// let mut data = Value::Null;
/// set(&mut data, "a.b[2]", Value::Int(7));
///
/// assert_eq!(
///     data,
///     Value::map_of([(
///         "a",
///         Value::map_of([("b", Value::from(vec![Value::Null, Value::Null, Value::Int(7)]))]),
///     )])
/// );
/// ```
pub fn set(obj: &mut Value, path: impl Into<Path>, value: Value) -> &mut Value {
    let path = path.into();
    let mut cursor: &mut Value = obj;
    for key in &path {
        cursor = descend(cursor, key);
    }
    *cursor = value;
    obj
}

/// Normalizes `container` to the shape `key` needs and returns the child
/// slot, creating it when absent.
fn descend<'a>(container: &'a mut Value, key: &Key) -> &'a mut Value {
    let index = key.as_index();

    let keep_shape = match &*container {
        Value::Map(_) => true,
        Value::Seq(_) => index.is_some(),
        _ => false,
    };
    if !keep_shape {
        *container = if index.is_some() {
            Value::Seq(Vec::new())
        } else {
            Value::Map(Map::new())
        };
    }

    match container {
        Value::Seq(items) => {
            // keep_shape guaranteed an index in the sequence case
            let position = index.unwrap_or(0);
            if position >= items.len() {
                items.resize(position + 1, Value::Null);
            }
            &mut items[position]
        }
        Value::Map(entries) => {
            let name = key.to_string();
            if !entries.contains_key(&name) {
                entries.insert(name.clone(), Value::Null);
            }
            entries.get_mut(&name).unwrap_or_else(|| unreachable!())
        }
        _ => unreachable!(),
    }
}

/// Deep-merges `sources` into `destination`, later sources winning.
///
/// Mappings merge recursively by key; sequences merge element-wise (the
/// longer side's tail survives); any other pairing overwrites. The
/// destination is mutated in place and also returned.
///
/// # Examples
///
/// ```rust
/// use dashkit::object::merge;
/// use dashkit::value::Value;
///
/// let mut destination = Value::map_of([("a", Value::Int(2))]);
/// merge(
///     &mut destination,
///     &[
///         Value::map_of([("a", Value::Int(1))]),
///         Value::map_of([("b", Value::Int(2))]),
///     ],
/// );
/// assert_eq!(
///     destination,
///     Value::map_of([("a", Value::Int(1)), ("b", Value::Int(2))])
/// );
/// ```
pub fn merge<'a>(destination: &'a mut Value, sources: &[Value]) -> &'a mut Value {
    for source in sources {
        merge_into(destination, source);
    }
    destination
}

fn merge_into(destination: &mut Value, source: &Value) {
    match (&mut *destination, source) {
        (Value::Map(existing), Value::Map(incoming)) => {
            for (key, value) in incoming.iter() {
                if let Some(slot) = existing.get_mut(key) {
                    merge_into(slot, value);
                } else {
                    existing.insert(key.clone(), value.clone());
                }
            }
        }
        (Value::Seq(existing), Value::Seq(incoming)) => {
            for (position, value) in incoming.iter().enumerate() {
                if position < existing.len() {
                    merge_into(&mut existing[position], value);
                } else {
                    existing.push(value.clone());
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}

/// Fills keys absent from `destination` with values from `sources`.
///
/// Shallow: an existing key is never touched, even if both sides are
/// mappings. Use [`defaults_deep`] for the recursive variant.
///
/// # Examples
///
/// ```rust
/// use dashkit::object::defaults;
/// use dashkit::value::Value;
///
/// let mut config = Value::map_of([("port", Value::Int(8080))]);
/// defaults(
///     &mut config,
///     &[Value::map_of([("port", Value::Int(80)), ("host", Value::from("localhost"))])],
/// );
/// assert_eq!(
///     config,
///     Value::map_of([("port", Value::Int(8080)), ("host", Value::from("localhost"))])
/// );
/// ```
pub fn defaults<'a>(destination: &'a mut Value, sources: &[Value]) -> &'a mut Value {
    for source in sources {
        if let (Value::Map(existing), Value::Map(incoming)) = (&mut *destination, source) {
            for (key, value) in incoming.iter() {
                if !existing.contains_key(key) {
                    existing.insert(key.clone(), value.clone());
                }
            }
        }
    }
    destination
}

/// Like [`defaults`], but recurses where both sides hold mappings.
pub fn defaults_deep<'a>(destination: &'a mut Value, sources: &[Value]) -> &'a mut Value {
    for source in sources {
        defaults_into(destination, source);
    }
    destination
}

fn defaults_into(destination: &mut Value, source: &Value) {
    if let (Value::Map(existing), Value::Map(incoming)) = (&mut *destination, source) {
        for (key, value) in incoming.iter() {
            if let Some(slot) = existing.get_mut(key) {
                defaults_into(slot, value);
            } else {
                existing.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Returns a copy of the top level of the value.
///
/// `Value` owns its children outright, so there is no aliasing for a
/// shallow copy to preserve and the result is structurally identical to
/// [`clone_deep`]. The name exists so call sites porting code that
/// distinguished the two depths keep reading the same.
#[inline]
pub fn clone_shallow(obj: &Value) -> Value {
    obj.clone()
}

/// Returns a deep copy of the value.
///
/// `Value`'s `Clone` is already deep; this name exists so call sites read
/// the same as their lodash counterparts.
#[inline]
pub fn clone_deep(obj: &Value) -> Value {
    obj.clone()
}

/// Deep copy with a customizer applied to every non-container value.
///
/// The customizer receives each scalar leaf; returning `Some` substitutes
/// the copy, `None` keeps the original. Containers are rebuilt around the
/// customized leaves.
///
/// # Examples
///
/// ```rust
/// use dashkit::object::clone_deep_with;
/// use dashkit::value::Value;
///
/// let data = Value::map_of([("a", Value::Int(1)), ("b", Value::from("x"))]);
/// let doubled = clone_deep_with(&data, &|leaf| {
///     leaf.as_int().map(|inner| Value::Int(inner * 2))
/// });
/// assert_eq!(
///     doubled,
///     Value::map_of([("a", Value::Int(2)), ("b", Value::from("x"))])
/// );
/// ```
pub fn clone_deep_with(obj: &Value, customizer: &dyn Fn(&Value) -> Option<Value>) -> Value {
    match obj {
        Value::Seq(items) => Value::Seq(
            items
                .iter()
                .map(|item| clone_deep_with(item, customizer))
                .collect(),
        ),
        Value::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), clone_deep_with(value, customizer)))
                .collect(),
        ),
        leaf => customizer(leaf).unwrap_or_else(|| leaf.clone()),
    }
}

/// Rebuilds a mapping with every key transformed.
///
/// The transform receives `(value, key)` and returns the replacement key;
/// colliding keys collapse, later entries winning position-preservingly.
/// Non-mapping inputs produce an empty mapping.
///
/// # Examples
///
/// ```rust
/// use dashkit::object::map_keys;
/// use dashkit::value::Value;
///
/// let data = Value::map_of([("a", Value::Int(1)), ("b", Value::Int(2))]);
/// let upper = map_keys(&data, |_, key| key.to_uppercase());
/// assert_eq!(
///     upper,
///     Value::map_of([("A", Value::Int(1)), ("B", Value::Int(2))])
/// );
/// ```
pub fn map_keys(obj: &Value, transform: impl Fn(&Value, &str) -> String) -> Value {
    let Some(entries) = obj.as_map() else {
        return Value::Map(Map::new());
    };
    let mut result = Map::with_capacity(entries.len());
    for (key, value) in entries.iter() {
        result.insert(transform(value, key), value.clone());
    }
    Value::Map(result)
}

/// Rebuilds a mapping with every value transformed, keys untouched.
///
/// # Examples
///
/// ```rust
/// use dashkit::object::map_values;
/// use dashkit::value::Value;
///
/// let data = Value::map_of([("a", Value::Int(1)), ("b", Value::Int(2))]);
/// let squared = map_values(&data, |value, _| {
///     Value::Int(value.as_int().unwrap_or(0).pow(2))
/// });
/// assert_eq!(
///     squared,
///     Value::map_of([("a", Value::Int(1)), ("b", Value::Int(4))])
/// );
/// ```
pub fn map_values(obj: &Value, transform: impl Fn(&Value, &str) -> Value) -> Value {
    let Some(entries) = obj.as_map() else {
        return Value::Map(Map::new());
    };
    let mut result = Map::with_capacity(entries.len());
    for (key, value) in entries.iter() {
        result.insert(key.clone(), transform(value, key));
    }
    Value::Map(result)
}

/// Swaps a mapping's keys and values.
///
/// Values are rendered through their display form to become keys; when
/// two values render identically, the later entry overwrites the earlier.
///
/// # Examples
///
/// ```rust
/// use dashkit::object::invert;
/// use dashkit::value::Value;
///
/// let data = Value::map_of([("a", Value::Int(1)), ("b", Value::Int(2))]);
/// assert_eq!(
///     invert(&data),
///     Value::map_of([("1", Value::from("a")), ("2", Value::from("b"))])
/// );
/// ```
pub fn invert(obj: &Value) -> Value {
    let Some(entries) = obj.as_map() else {
        return Value::Map(Map::new());
    };
    let mut result = Map::with_capacity(entries.len());
    for (key, value) in entries.iter() {
        result.insert(value.to_string(), Value::Str(key.clone()));
    }
    Value::Map(result)
}

/// Returns a mapping containing only the named keys, in the order named.
///
/// Missing keys are skipped, not nulled.
pub fn pick(obj: &Value, keys: &[&str]) -> Value {
    let Some(entries) = obj.as_map() else {
        return Value::Map(Map::new());
    };
    let mut result = Map::with_capacity(keys.len());
    for &key in keys {
        if let Some(value) = entries.get(key) {
            result.insert(key.to_string(), value.clone());
        }
    }
    Value::Map(result)
}

/// Returns a mapping without the named keys, other entries in order.
pub fn omit(obj: &Value, keys: &[&str]) -> Value {
    let Some(entries) = obj.as_map() else {
        return Value::Map(Map::new());
    };
    let mut result = Map::with_capacity(entries.len());
    for (key, value) in entries.iter() {
        if !keys.contains(&key.as_str()) {
            result.insert(key.clone(), value.clone());
        }
    }
    Value::Map(result)
}

/// Returns the first key whose value satisfies the predicate.
pub fn find_key(obj: &Value, predicate: impl Fn(&Value, &str) -> bool) -> Option<String> {
    let entries = obj.as_map()?;
    entries
        .iter()
        .find(|(key, value)| predicate(value, key))
        .map(|(key, _)| key.clone())
}

/// Returns the last key whose value satisfies the predicate.
pub fn find_last_key(obj: &Value, predicate: impl Fn(&Value, &str) -> bool) -> Option<String> {
    let entries = obj.as_map()?;
    entries
        .iter()
        .rev()
        .find(|(key, value)| predicate(value, key))
        .map(|(key, _)| key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn nested() -> Value {
        Value::map_of([(
            "a",
            Value::map_of([(
                "b",
                Value::from(vec![
                    Value::Int(0),
                    Value::map_of([("c", Value::from(vec![1_i64, 2]))]),
                ]),
            )]),
        )])
    }

    #[rstest]
    #[case("a.b.1.c.1", true)]
    #[case("a.b[1].c[1]", true)]
    #[case("a.b.1.c.2", false)]
    #[case("a.b.5", false)]
    #[case("a.x", false)]
    fn test_has_cases(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(has(&nested(), path), expected);
    }

    #[rstest]
    fn test_get_short_circuits_through_scalars() {
        let data = Value::map_of([("a", Value::Int(1))]);
        assert_eq!(get(&data, "a.b.c"), None);
    }

    #[rstest]
    fn test_set_replaces_scalar_intermediate_structurally() {
        let mut data = Value::map_of([("a", Value::Int(1))]);
        set(&mut data, "a.b", Value::Int(2));
        assert_eq!(
            data,
            Value::map_of([("a", Value::map_of([("b", Value::Int(2))]))])
        );
    }

    #[rstest]
    fn test_set_numeric_key_on_existing_map_uses_digit_name() {
        let mut data = Value::map_of([("a", Value::map_of([("0", Value::Int(9))]))]);
        set(&mut data, "a[0]", Value::Int(1));
        assert_eq!(
            data,
            Value::map_of([("a", Value::map_of([("0", Value::Int(1))]))])
        );
    }

    #[rstest]
    fn test_merge_sequences_element_wise() {
        let mut destination = Value::from(vec![1_i64, 2]);
        merge(&mut destination, &[Value::from(vec![9_i64])]);
        assert_eq!(destination, Value::from(vec![9_i64, 2]));

        merge(&mut destination, &[Value::from(vec![9_i64, 2, 3])]);
        assert_eq!(destination, Value::from(vec![9_i64, 2, 3]));
    }

    #[rstest]
    fn test_invert_overwrites_duplicate_values() {
        let data = Value::map_of([("a", Value::Int(1)), ("b", Value::Int(1))]);
        assert_eq!(invert(&data), Value::map_of([("1", Value::from("b"))]));
    }
}
