//! The iteratee coercion layer.
//!
//! Every collection operation in this library is driven by an
//! [`Iteratee`]: one closed tagged type covering the callable shapes a
//! caller may hand in (a real function, a property path, a partial-match
//! mapping, a `[path, value]` equality probe, or nothing at all, meaning
//! identity). Coercion happens once, at the call boundary; after that
//! the iteratee is a pure function of `(value, key, container)` and never
//! mutates its inputs.
//!
//! There is no arity introspection: user functions always receive all
//! three arguments and are free to ignore the trailing ones.
//!
//! # Examples
//!
//! ```rust
//! use dashkit::iteratee::Iteratee;
//! use dashkit::value::Value;
//!
//! let by_name = Iteratee::from("name");
//! let user = Value::map_of([("name", Value::from("ada"))]);
//! assert_eq!(by_name.apply_value(&user), Value::from("ada"));
//!
//! let doubler = Iteratee::func(|value, _, _| {
//!     Value::Int(value.as_int().unwrap_or(0) * 2)
//! });
//! assert_eq!(doubler.apply_value(&Value::Int(21)), Value::Int(42));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::object::get;
use crate::predicate::{is_equal, is_match};
use crate::value::{Key, Path, Value};

/// The fixed-arity function shape behind [`Iteratee::Func`].
///
/// Arguments are `(value, key_or_index, container)`.
pub type IterFn = Rc<dyn Fn(&Value, &Key, &Value) -> Value>;

/// A coerced iteratee: the uniform callable driving collection traversal.
///
/// # Variants
///
/// | Caller supplies            | Variant             | Applied as                       |
/// |----------------------------|---------------------|----------------------------------|
/// | nothing / null             | `Identity`          | the element itself               |
/// | `"a.b"` or a path          | `Property`          | deep property getter             |
/// | a mapping                  | `Matches`           | partial-match predicate          |
/// | `[path, value]` pair       | `MatchesProperty`   | property-equality predicate      |
/// | a function                 | `Func`              | called with value, key, container|
///
/// Applying an iteratee never mutates its inputs.
#[derive(Clone)]
pub enum Iteratee {
    /// Returns the element unchanged.
    Identity,
    /// Returns the element's value at a deep path (null when absent).
    Property(Path),
    /// Boolean partial-match of the element against a source value.
    Matches(Value),
    /// Boolean equality test of the element's property against a value.
    MatchesProperty(Path, Value),
    /// A user function of `(value, key, container)`.
    Func(IterFn),
}

impl Iteratee {
    /// Wraps a closure as a function iteratee.
    ///
    /// The closure always receives `(value, key, container)`; ignore what
    /// you don't need.
    pub fn func<F>(function: F) -> Self
    where
        F: Fn(&Value, &Key, &Value) -> Value + 'static,
    {
        Self::Func(Rc::new(function))
    }

    /// Builds a partial-match iteratee (see
    /// [`is_match`](crate::predicate::is_match)).
    pub fn matches(source: Value) -> Self {
        Self::Matches(source)
    }

    /// Builds a property-equality iteratee.
    pub fn matches_property(path: impl Into<Path>, wanted: Value) -> Self {
        Self::MatchesProperty(path.into(), wanted)
    }

    /// Duck-typed coercion from a dynamic value, used by the chain
    /// registry where iteratee arguments arrive as recorded [`Value`]s.
    ///
    /// - null → identity
    /// - string → property path
    /// - one-element sequence → shallow property
    /// - two-element sequence → `[path, value]` equality probe
    /// - longer sequence → property path from the elements
    /// - mapping → partial match
    /// - any other scalar → whole-value equality probe
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashkit::iteratee::Iteratee;
    /// use dashkit::value::Value;
    ///
    /// let probe = Iteratee::from_value(&Value::from(vec![
    ///     Value::from("active"),
    ///     Value::Bool(true),
    /// ]));
    /// let user = Value::map_of([("active", Value::Bool(true))]);
    /// assert_eq!(probe.apply_value(&user), Value::Bool(true));
    /// ```
    pub fn from_value(source: &Value) -> Self {
        match source {
            Value::Null => Self::Identity,
            Value::Str(text) => Self::Property(Path::parse(text)),
            Value::Map(_) => Self::Matches(source.clone()),
            Value::Seq(items) => match items.as_slice() {
                [only] => Self::Property(Path::from_keys([value_to_key(only)])),
                [path_like, wanted] => Self::MatchesProperty(
                    value_to_path(path_like),
                    wanted.clone(),
                ),
                items => Self::Property(Path::from_keys(items.iter().map(value_to_key))),
            },
            scalar => Self::Matches(scalar.clone()),
        }
    }

    /// Applies the iteratee to one traversal position.
    pub fn apply(&self, value: &Value, key: &Key, container: &Value) -> Value {
        match self {
            Self::Identity => value.clone(),
            Self::Property(path) => get(value, path.clone()).cloned().unwrap_or(Value::Null),
            Self::Matches(source) => Value::Bool(is_match(value, source)),
            Self::MatchesProperty(path, wanted) => Value::Bool(
                get(value, path.clone()).is_some_and(|found| is_equal(found, wanted)),
            ),
            Self::Func(function) => function(value, key, container),
        }
    }

    /// Applies the iteratee to a bare value, synthesizing a zero key and
    /// a null container. Convenient for the element-keyed array helpers.
    pub fn apply_value(&self, value: &Value) -> Value {
        self.apply(value, &Key::Index(0), &Value::Null)
    }
}

fn value_to_key(value: &Value) -> Key {
    match value {
        Value::Int(position) if *position >= 0 => {
            Key::Index(usize::try_from(*position).unwrap_or(usize::MAX))
        }
        Value::Str(name) => Key::Name(name.clone()),
        other => Key::Name(other.to_string()),
    }
}

fn value_to_path(value: &Value) -> Path {
    match value {
        Value::Str(text) => Path::parse(text),
        Value::Seq(items) => Path::from_keys(items.iter().map(value_to_key)),
        other => Path::from_keys([value_to_key(other)]),
    }
}

impl Default for Iteratee {
    fn default() -> Self {
        Self::Identity
    }
}

impl fmt::Debug for Iteratee {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => formatter.write_str("Iteratee::Identity"),
            Self::Property(path) => write!(formatter, "Iteratee::Property({path})"),
            Self::Matches(source) => write!(formatter, "Iteratee::Matches({source})"),
            Self::MatchesProperty(path, wanted) => {
                write!(formatter, "Iteratee::MatchesProperty({path}, {wanted})")
            }
            Self::Func(_) => formatter.write_str("Iteratee::Func(<function>)"),
        }
    }
}

impl From<&str> for Iteratee {
    /// A string coerces to a deep property getter.
    fn from(path: &str) -> Self {
        Self::Property(Path::parse(path))
    }
}

impl From<String> for Iteratee {
    fn from(path: String) -> Self {
        Self::Property(Path::parse(&path))
    }
}

impl From<Path> for Iteratee {
    fn from(path: Path) -> Self {
        Self::Property(path)
    }
}

impl From<()> for Iteratee {
    /// Unit coerces to the identity iteratee.
    fn from((): ()) -> Self {
        Self::Identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_returns_element() {
        let iteratee = Iteratee::from(());
        assert_eq!(iteratee.apply_value(&Value::Int(3)), Value::Int(3));
    }

    #[rstest]
    fn test_property_missing_is_null() {
        let iteratee = Iteratee::from("a.b");
        assert_eq!(iteratee.apply_value(&Value::map_of([("a", Value::Int(1))])), Value::Null);
    }

    #[rstest]
    fn test_from_value_single_element_sequence_is_shallow_property() {
        let iteratee = Iteratee::from_value(&Value::from(vec![Value::from("a.b")]));
        // Shallow: the dot is part of the key, not a separator.
        let data = Value::map_of([("a.b", Value::Int(5))]);
        match &iteratee {
            Iteratee::Property(path) => assert_eq!(path.len(), 1),
            other => panic!("expected property iteratee, got {other:?}"),
        }
        assert_eq!(iteratee.apply_value(&data), Value::Int(5));
    }

    #[rstest]
    fn test_scalar_coerces_to_equality_probe() {
        let iteratee = Iteratee::from_value(&Value::Int(2));
        assert_eq!(iteratee.apply_value(&Value::Int(2)), Value::Bool(true));
        assert_eq!(iteratee.apply_value(&Value::Int(3)), Value::Bool(false));
    }
}
