//! An insertion-order-preserving string-keyed map.
//!
//! [`Map`] is the mapping shape of the [`Value`](super::Value) model. Keys
//! are unique; iteration yields entries in the order they were first
//! inserted, and overwriting a key keeps its original position. Lookup is
//! a linear scan over the entry vector, which is fine here: this library
//! explicitly does not chase hot-path performance, and the mappings it is
//! used on are small.

use super::Value;

/// A string-keyed map that preserves insertion order.
///
/// # Iteration Order
///
/// Entries iterate in first-insertion order. Replacing the value of an
/// existing key does not move the entry; removing a key shifts later
/// entries forward, like `Vec::remove`.
///
/// # Examples
///
/// ```rust
/// use dashkit::value::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("b".to_string(), Value::Int(1));
/// map.insert("a".to_string(), Value::Int(2));
/// map.insert("b".to_string(), Value::Int(3)); // overwrite keeps position
///
/// let keys: Vec<&str> = map.keys().map(String::as_str).collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// assert_eq!(map.get("b"), Some(&Value::Int(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    entries: Vec<(String, Value)>,
}

impl Map {
    /// Creates an empty map.
    #[inline]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Creates an empty map with space reserved for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == key)
    }

    /// Returns a reference to the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value stored under `key`, if any.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Inserts `value` under `key`, returning the previous value if the
    /// key already existed.
    ///
    /// An existing key keeps its insertion position; a new key is appended
    /// at the end.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some(std::mem::replace(existing, value))
        } else {
            self.entries.push((key, value));
            None
        }
    }

    /// Removes and returns the value stored under `key`, if any.
    ///
    /// Later entries shift forward, preserving their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let position = self.entries.iter().position(|(name, _)| name == key)?;
        Some(self.entries.remove(position).1)
    }

    /// Returns an entry by insertion position.
    pub fn get_index(&self, position: usize) -> Option<(&String, &Value)> {
        self.entries.get(position).map(|(key, value)| (key, value))
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&String, &Value)> + ExactSizeIterator {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Iterates over `(key, value)` pairs with mutable values.
    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = (&String, &mut Value)> + ExactSizeIterator {
        self.entries.iter_mut().map(|(key, value)| (&*key, value))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &String> + ExactSizeIterator {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iterable: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iterable {
            map.insert(key, value);
        }
        map
    }
}

impl<'a> FromIterator<(&'a str, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (&'a str, Value)>>(iterable: I) -> Self {
        iterable
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}

impl Extend<(String, Value)> for Map {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iterable: I) {
        for (key, value) in iterable {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = MapIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        MapIter { inner: self.entries.iter() }
    }
}

/// Borrowing iterator over a [`Map`]'s entries in insertion order.
#[derive(Debug, Clone)]
pub struct MapIter<'a> {
    inner: std::slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for MapIter<'a> {
    type Item = (&'a String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for MapIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl ExactSizeIterator for MapIter<'_> {}

impl std::ops::Index<&str> for Map {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if the key is absent. Use [`Map::get`] for fallible lookup.
    fn index(&self, key: &str) -> &Value {
        self.get(key)
            .unwrap_or_else(|| panic!("no entry found for key {key:?}"))
    }
}
