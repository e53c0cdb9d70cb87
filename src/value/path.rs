//! Deep-path keys and the dotted path string syntax.
//!
//! A [`Path`] describes a route through nested sequences and mappings.
//! It can be supplied pre-split as a list of [`Key`]s or parsed from the
//! delimited string syntax:
//!
//! - `.` separates keys: `a.b.c`
//! - `[<int>]` embeds a numeric sequence index: `a.b[0].c`
//! - `\.` escapes a literal dot inside a key name: `a\.b` is one key
//!
//! Both forms normalize to the same flat ordered key list before any
//! traversal happens, so every object utility sees identical paths.
//!
//! # Examples
//!
//! ```rust
//! use dashkit::value::{Key, Path};
//!
//! let path = Path::parse("users[2].name");
//! let keys: Vec<Key> = path.iter().cloned().collect();
//! assert_eq!(
//!     keys,
//!     vec![
//!         Key::Name("users".to_string()),
//!         Key::Index(2),
//!         Key::Name("name".to_string()),
//!     ]
//! );
//! ```

use smallvec::SmallVec;
use std::fmt;

/// One step of a deep path: a sequence index or a mapping key name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A numeric position inside a sequence.
    Index(usize),
    /// A name inside a mapping (or, when all digits, a sequence position).
    Name(String),
}

impl Key {
    /// Returns the index payload, widening digit-only names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashkit::value::Key;
    ///
    /// assert_eq!(Key::Index(3).as_index(), Some(3));
    /// assert_eq!(Key::Name("3".to_string()).as_index(), Some(3));
    /// assert_eq!(Key::Name("x".to_string()).as_index(), None);
    /// ```
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(position) => Some(*position),
            Self::Name(name) => name.parse().ok(),
        }
    }

    /// Returns the name payload, if this key is a name.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name.as_str()),
            Self::Index(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(position) => write!(formatter, "{position}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

impl From<usize> for Key {
    fn from(position: usize) -> Self {
        Self::Index(position)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// A normalized deep path: a flat ordered list of [`Key`]s.
///
/// The empty path addresses the value itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    keys: SmallVec<[Key; 8]>,
}

impl Path {
    /// Creates the empty path.
    #[inline]
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a path from pre-split keys, skipping the string syntax.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashkit::value::{Key, Path};
    ///
    /// let path = Path::from_keys([Key::from("a"), Key::from(0_usize)]);
    /// assert_eq!(path, Path::parse("a[0]"));
    /// ```
    pub fn from_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self { keys: keys.into_iter().collect() }
    }

    /// Parses the dotted/bracketed path string syntax.
    ///
    /// Rules:
    ///
    /// - `.` flushes the current key name
    /// - `[` followed by one or more digits and `]` flushes the current
    ///   name (if any) and appends an [`Key::Index`]; malformed bracket
    ///   content is kept literally as part of the name
    /// - `\` escapes the next character (so `\.` is a literal dot)
    /// - an empty input parses to the empty path
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashkit::value::{Key, Path};
    ///
    /// assert_eq!(
    ///     Path::parse("a\\.b.c"),
    ///     Path::from_keys([Key::from("a.b"), Key::from("c")])
    /// );
    /// assert_eq!(
    ///     Path::parse("a[10].b"),
    ///     Path::from_keys([Key::from("a"), Key::from(10_usize), Key::from("b")])
    /// );
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut keys: SmallVec<[Key; 8]> = SmallVec::new();
        let mut buffer = String::new();
        // True when the previous token ended a key on its own, so a '.'
        // immediately after it is a separator, not an empty key name.
        let mut after_bracket = false;
        let mut characters = text.chars().peekable();

        if text.is_empty() {
            return Self::root();
        }

        while let Some(character) = characters.next() {
            match character {
                '\\' => {
                    if let Some(escaped) = characters.next() {
                        buffer.push(escaped);
                    } else {
                        buffer.push('\\');
                    }
                    after_bracket = false;
                }
                '.' => {
                    if after_bracket {
                        after_bracket = false;
                    } else {
                        keys.push(Key::Name(std::mem::take(&mut buffer)));
                    }
                }
                '[' => {
                    match scan_bracket_index(&mut characters) {
                        Some(position) => {
                            // An empty buffer here is a separator ('.' or a
                            // previous bracket just closed), not an empty key.
                            if !buffer.is_empty() {
                                keys.push(Key::Name(std::mem::take(&mut buffer)));
                            }
                            keys.push(Key::Index(position));
                            after_bracket = true;
                        }
                        None => {
                            buffer.push('[');
                            after_bracket = false;
                        }
                    }
                }
                other => {
                    buffer.push(other);
                    after_bracket = false;
                }
            }
        }

        if !buffer.is_empty() || !after_bracket {
            keys.push(Key::Name(buffer));
        }

        Self { keys }
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if this is the empty path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the keys in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }

    /// Returns the keys as a slice.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Appends a key, returning the extended path.
    pub fn join(mut self, key: impl Into<Key>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Splits the path into its first key and the remaining path.
    pub fn split_first(&self) -> Option<(&Key, Self)> {
        let (first, rest) = self.keys.split_first()?;
        Some((first, Self { keys: rest.iter().cloned().collect() }))
    }
}

/// Consumes `digits ]` from the character stream, if and only if the
/// bracket content is well formed. On failure nothing is consumed.
fn scan_bracket_index(
    characters: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Option<usize> {
    let mut digits = String::new();
    let mut lookahead = characters.clone();
    while let Some(&character) = lookahead.peek() {
        if character.is_ascii_digit() {
            digits.push(character);
            lookahead.next();
        } else {
            break;
        }
    }
    if digits.is_empty() || lookahead.peek() != Some(&']') {
        return None;
    }
    lookahead.next();
    let position = digits.parse().ok()?;
    *characters = lookahead;
    Some(position)
}

impl fmt::Display for Path {
    /// Renders the path back into the string syntax, escaping literal dots.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for key in &self.keys {
            match key {
                Key::Index(position) => write!(formatter, "[{position}]")?,
                Key::Name(name) => {
                    if !first {
                        write!(formatter, ".")?;
                    }
                    write!(formatter, "{}", name.replace('.', "\\."))?;
                }
            }
            first = false;
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for Path {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        Self::from_keys([key])
    }
}

impl From<usize> for Path {
    fn from(position: usize) -> Self {
        Self::from_keys([Key::Index(position)])
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Self::from_keys(keys)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
