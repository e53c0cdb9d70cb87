//! Conversions into [`Value`].
//!
//! Covers the obvious Rust primitives, vectors, arrays, and options. Map
//! construction goes through [`Value::map_of`] (a blanket `From` over
//! pair collections would overlap with the sequence conversions).

use super::{Map, Value};

impl Value {
    /// Builds a [`Value::Map`] from `(key, value)` pairs, in pair order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashkit::value::Value;
    ///
    /// let user = Value::map_of([("name", Value::from("ada")), ("age", Value::Int(36))]);
    /// assert_eq!(user.index("name"), Some(&Value::from("ada")));
    /// ```
    pub fn map_of<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Map(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds a [`Value::Seq`] from anything iterable over convertible items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashkit::value::Value;
    ///
    /// assert_eq!(Value::seq_of(1_i64..=3), Value::from(vec![1_i64, 2, 3]));
    /// ```
    pub fn seq_of<V: Into<Self>>(items: impl IntoIterator<Item = V>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<bool> for Value {
    fn from(inner: bool) -> Self {
        Self::Bool(inner)
    }
}

impl From<i64> for Value {
    fn from(inner: i64) -> Self {
        Self::Int(inner)
    }
}

impl From<i32> for Value {
    fn from(inner: i32) -> Self {
        Self::Int(i64::from(inner))
    }
}

impl From<u32> for Value {
    fn from(inner: u32) -> Self {
        Self::Int(i64::from(inner))
    }
}

impl From<f64> for Value {
    fn from(inner: f64) -> Self {
        Self::Float(inner)
    }
}

impl From<&str> for Value {
    fn from(inner: &str) -> Self {
        Self::Str(inner.to_string())
    }
}

impl From<String> for Value {
    fn from(inner: String) -> Self {
        Self::Str(inner)
    }
}

impl From<Map> for Value {
    fn from(inner: Map) -> Self {
        Self::Map(inner)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    /// `None` becomes [`Value::Null`].
    fn from(inner: Option<T>) -> Self {
        inner.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(items: I) -> Self {
        Self::Seq(items.into_iter().collect())
    }
}
