//! The dynamic value model.
//!
//! Every lodash-style operation in this library speaks one shared data
//! language: [`Value`], a closed tagged union over the scalar, sequence,
//! and mapping shapes the utilities traverse. Nested structures are plain
//! compositions of `Value`, so a deep path such as `a.b[0].c` has a single
//! well-defined meaning everywhere.
//!
//! "Explicitly absent" versus "explicitly null" is expressed with
//! `Option<Value>` at the API boundary; the library never invents a second
//! null sentinel.
//!
//! # Examples
//!
//! ```rust
//! use dashkit::value::{Map, Value};
//!
//! let user = Value::Map(Map::from_iter([
//!     ("name".to_string(), Value::from("ada")),
//!     ("logins".to_string(), Value::from(vec![1_i64, 2, 3])),
//! ]));
//!
//! assert!(user.is_map());
//! assert_eq!(user.len(), 2);
//! ```

mod convert;
mod map;
mod path;

#[cfg(feature = "serde")]
mod serde_impl;

pub use map::Map;
pub use path::{Key, Path};

use std::cmp::Ordering;
use std::fmt;

/// A dynamically typed value: scalar, sequence, or mapping.
///
/// `Value` is the pivot type of the whole library: object utilities walk
/// it by [`Path`], collection utilities iterate it uniformly whether it is
/// a [`Seq`](Value::Seq) or a [`Map`](Value::Map), and the chaining façade
/// threads one `Value` through every deferred step.
///
/// Structural equality is derived: `Int(1)` and `Float(1.0)` are *not*
/// equal under `PartialEq`. The looser numeric-aware comparison lives in
/// [`is_equal`](crate::predicate::is_equal) and
/// [`Value::compare`].
///
/// # Examples
///
/// ```rust
/// use dashkit::value::Value;
///
/// let sequence = Value::from(vec![1_i64, 2, 3]);
/// assert!(sequence.is_seq());
/// assert_eq!(sequence.index(1), Some(&Value::Int(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The explicit null value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// An owned string.
    Str(String),
    /// An ordered sequence of values.
    Seq(Vec<Value>),
    /// An insertion-order-preserving string-keyed mapping.
    Map(Map),
}

impl Value {
    /// Returns `true` if this value is [`Null`](Value::Null).
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if this value is a boolean.
    #[inline]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns `true` if this value is an integer.
    #[inline]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns `true` if this value is a float.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns `true` if this value is an integer or a float.
    #[inline]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Returns `true` if this value is a string.
    #[inline]
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Returns `true` if this value is a sequence.
    #[inline]
    pub const fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// Returns `true` if this value is a mapping.
    #[inline]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns the boolean payload, if any.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(inner) => Some(*inner),
            _ => None,
        }
    }

    /// Returns the integer payload, if any.
    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(inner) => Some(*inner),
            _ => None,
        }
    }

    /// Returns the value as an `f64` if it is numeric.
    ///
    /// Integers are widened; floats pass through. Every other variant is
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashkit::value::Value;
    ///
    /// assert_eq!(Value::Int(2).as_number(), Some(2.0));
    /// assert_eq!(Value::Float(2.5).as_number(), Some(2.5));
    /// assert_eq!(Value::from("2").as_number(), None);
    /// ```
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(inner) => Some(*inner as f64),
            Self::Float(inner) => Some(*inner),
            _ => None,
        }
    }

    /// Returns the string payload as a `&str`, if any.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(inner) => Some(inner.as_str()),
            _ => None,
        }
    }

    /// Returns the sequence payload, if any.
    #[inline]
    pub const fn as_seq(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Seq(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns the sequence payload mutably, if any.
    #[inline]
    pub const fn as_seq_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Self::Seq(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns the mapping payload, if any.
    #[inline]
    pub const fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns the mapping payload mutably, if any.
    #[inline]
    pub const fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Self::Map(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns the number of elements in a sequence, entries in a mapping,
    /// or characters in a string; scalars have length zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashkit::value::Value;
    ///
    /// assert_eq!(Value::from(vec![1_i64, 2]).len(), 2);
    /// assert_eq!(Value::from("abc").len(), 3);
    /// assert_eq!(Value::Null.len(), 0);
    /// ```
    pub fn len(&self) -> usize {
        match self {
            Self::Seq(items) => items.len(),
            Self::Map(entries) => entries.len(),
            Self::Str(text) => text.chars().count(),
            _ => 0,
        }
    }

    /// Returns `true` if [`len`](Self::len) is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a single [`Key`] in this value.
    ///
    /// `Index` keys address sequences; `Name` keys address mappings. A
    /// name that is all digits also addresses a sequence, so keys parsed
    /// from `"a.0"` and `"a[0]"` behave identically.
    ///
    /// Returns `None` for out-of-range indices, missing names, and
    /// non-container values.
    pub fn index(&self, key: impl Into<Key>) -> Option<&Self> {
        match (self, key.into()) {
            (Self::Seq(items), Key::Index(position)) => items.get(position),
            (Self::Seq(items), Key::Name(name)) => {
                name.parse::<usize>().ok().and_then(|position| items.get(position))
            }
            (Self::Map(entries), Key::Name(name)) => entries.get(&name),
            (Self::Map(entries), Key::Index(position)) => entries.get(&position.to_string()),
            _ => None,
        }
    }

    /// Mutable variant of [`index`](Self::index).
    pub fn index_mut(&mut self, key: impl Into<Key>) -> Option<&mut Self> {
        match (self, key.into()) {
            (Self::Seq(items), Key::Index(position)) => items.get_mut(position),
            (Self::Seq(items), Key::Name(name)) => {
                name.parse::<usize>().ok().and_then(|position| items.get_mut(position))
            }
            (Self::Map(entries), Key::Name(name)) => entries.get_mut(&name),
            (Self::Map(entries), Key::Index(position)) => entries.get_mut(&position.to_string()),
            _ => None,
        }
    }

    /// Totally orders two values for sorting.
    ///
    /// The order is by shape first (`Null < Bool < numbers < Str < Seq <
    /// Map`), then within a shape: booleans `false < true`, numbers
    /// numerically (`Int` and `Float` compare on one number line, `NaN`
    /// sorting last among numbers), strings lexicographically, sequences
    /// and mappings lexicographically element by element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashkit::value::Value;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(Value::Int(2).compare(&Value::Float(2.5)), Ordering::Less);
    /// assert_eq!(Value::Null.compare(&Value::Bool(false)), Ordering::Less);
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            (left, right) if left.is_number() && right.is_number() => {
                let left = left.as_number().unwrap_or(f64::NAN);
                let right = right.as_number().unwrap_or(f64::NAN);
                left.total_cmp(&right)
            }
            (Self::Str(left), Self::Str(right)) => left.cmp(right),
            (Self::Seq(left), Self::Seq(right)) => {
                for (first, second) in left.iter().zip(right.iter()) {
                    let ordering = first.compare(second);
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                }
                left.len().cmp(&right.len())
            }
            (Self::Map(left), Self::Map(right)) => {
                for ((left_key, left_value), (right_key, right_value)) in
                    left.iter().zip(right.iter())
                {
                    let key_ordering = left_key.cmp(right_key);
                    if key_ordering != Ordering::Equal {
                        return key_ordering;
                    }
                    let value_ordering = left_value.compare(right_value);
                    if value_ordering != Ordering::Equal {
                        return value_ordering;
                    }
                }
                left.len().cmp(&right.len())
            }
            (left, right) => left.shape_rank().cmp(&right.shape_rank()),
        }
    }

    /// Rank used to order values of different shapes.
    const fn shape_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::Str(_) => 3,
            Self::Seq(_) => 4,
            Self::Map(_) => 5,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value in a JSON-like form.
    ///
    /// Strings render as their raw contents without quotes at the top
    /// level (so interpolation produces clean text) but quoted inside
    /// containers.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(text) => write!(formatter, "{text}"),
            other => write_nested(other, formatter),
        }
    }
}

fn write_nested(value: &Value, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => write!(formatter, "null"),
        Value::Bool(inner) => write!(formatter, "{inner}"),
        Value::Int(inner) => write!(formatter, "{inner}"),
        Value::Float(inner) => write!(formatter, "{inner}"),
        Value::Str(text) => write!(formatter, "\"{text}\""),
        Value::Seq(items) => {
            write!(formatter, "[")?;
            for (position, item) in items.iter().enumerate() {
                if position > 0 {
                    write!(formatter, ", ")?;
                }
                write_nested(item, formatter)?;
            }
            write!(formatter, "]")
        }
        Value::Map(entries) => {
            write!(formatter, "{{")?;
            for (position, (key, item)) in entries.iter().enumerate() {
                if position > 0 {
                    write!(formatter, ", ")?;
                }
                write!(formatter, "\"{key}\": ")?;
                write_nested(item, formatter)?;
            }
            write!(formatter, "}}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_numeric_name_addresses_sequence() {
        let sequence = Value::from(vec![10_i64, 20, 30]);
        assert_eq!(sequence.index(Key::Name("1".to_string())), Some(&Value::Int(20)));
        assert_eq!(sequence.index(Key::Index(5)), None);
    }

    #[test]
    fn test_compare_orders_across_shapes() {
        let mut values = vec![
            Value::from("b"),
            Value::Null,
            Value::Float(1.5),
            Value::Bool(true),
            Value::Int(1),
        ];
        values.sort_by(|left, right| left.compare(right));
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Int(1),
                Value::Float(1.5),
                Value::from("b"),
            ]
        );
    }

    #[test]
    fn test_display_renders_containers() {
        let value = Value::from(vec![Value::Int(1), Value::from("x")]);
        assert_eq!(value.to_string(), "[1, \"x\"]");
    }
}
