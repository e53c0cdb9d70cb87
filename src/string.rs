//! String transformation utilities.
//!
//! Case conversion is built on one word-splitting state machine
//! ([`words`]): words break on non-alphanumeric separators, on
//! lower-to-upper and letter/digit boundaries, and before the last
//! capital of an acronym run (`HTMLParser` → `HTML`, `Parser`). All the
//! `*_case` functions are joins over that split.
//!
//! The HTML escape pair works over the fixed six-entity table
//! (`& < > " ' \``); [`unescape`] is the exact inverse of [`escape`] over
//! those entities and additionally accepts their decimal `&#NN;` forms.
//!
//! # Examples
//!
//! ```rust
//! use dashkit::string::{camel_case, kebab_case, snake_case};
//!
//! assert_eq!(camel_case("foo_bar baz"), "fooBarBaz");
//! assert_eq!(kebab_case("fooBarBaz"), "foo-bar-baz");
//! assert_eq!(snake_case("HTMLParser"), "html_parser");
//! ```

use crate::object::get;
use crate::value::Value;

/// Splits text into words on separators, case boundaries, and
/// letter/digit boundaries.
///
/// # Examples
///
/// ```rust
/// use dashkit::string::words;
///
/// assert_eq!(words("fooBar42 baz"), vec!["foo", "Bar", "42", "baz"]);
/// assert_eq!(words("HTMLParser"), vec!["HTML", "Parser"]);
/// assert_eq!(words(""), Vec::<String>::new());
/// ```
pub fn words(text: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();

    for character in text.chars() {
        if !character.is_alphanumeric() {
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(previous) = current.chars().last() {
            let case_boundary = previous.is_lowercase() && character.is_uppercase();
            let digit_boundary =
                previous.is_ascii_digit() != character.is_ascii_digit();
            if case_boundary || digit_boundary {
                result.push(std::mem::take(&mut current));
            } else if previous.is_uppercase()
                && character.is_lowercase()
                && current.chars().count() >= 2
            {
                // End of an acronym run: its last capital starts this word.
                let moved = current.pop().unwrap_or(previous);
                result.push(std::mem::take(&mut current));
                current.push(moved);
            }
        }
        current.push(character);
    }

    if !current.is_empty() {
        result.push(current);
    }
    result
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(text: &str) -> String {
    let mut characters = text.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &characters.as_str().to_lowercase()
    })
}

/// Lowercases the first character, leaving the rest untouched.
pub fn decapitalize(text: &str) -> String {
    let mut characters = text.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_lowercase().collect::<String>() + characters.as_str()
    })
}

/// Uppercases only the first character.
pub fn upper_first(text: &str) -> String {
    let mut characters = text.chars();
    characters.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + characters.as_str()
    })
}

/// Lowercases only the first character.
pub fn lower_first(text: &str) -> String {
    decapitalize(text)
}

/// Swaps the case of every character.
pub fn swap_case(text: &str) -> String {
    text.chars()
        .flat_map(|character| {
            if character.is_uppercase() {
                character.to_lowercase().collect::<Vec<char>>()
            } else {
                character.to_uppercase().collect::<Vec<char>>()
            }
        })
        .collect()
}

/// `camelCase` conversion.
pub fn camel_case(text: &str) -> String {
    let mut result = String::new();
    for (position, word) in words(text).iter().enumerate() {
        if position == 0 {
            result.push_str(&word.to_lowercase());
        } else {
            result.push_str(&capitalize(word));
        }
    }
    result
}

/// `PascalCase` conversion.
pub fn pascal_case(text: &str) -> String {
    words(text).iter().map(|word| capitalize(word)).collect()
}

/// `snake_case` conversion.
pub fn snake_case(text: &str) -> String {
    words(text)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<String>>()
        .join("_")
}

/// `kebab-case` conversion.
pub fn kebab_case(text: &str) -> String {
    words(text)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<String>>()
        .join("-")
}

/// `Start Case` conversion (each word capitalized, space separated).
pub fn start_case(text: &str) -> String {
    words(text)
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<String>>()
        .join(" ")
}

/// Repeats `fill` to cover `deficit` characters, truncating the tail.
fn fill_chars(fill: &str, deficit: usize) -> String {
    if fill.is_empty() {
        return String::new();
    }
    fill.chars().cycle().take(deficit).collect()
}

/// Centers `text` to `length` characters with `fill`, the extra
/// character (odd deficits) going on the right.
///
/// # Examples
///
/// ```rust
/// use dashkit::string::pad;
///
/// assert_eq!(pad("abc", 8, " "), "  abc   ");
/// assert_eq!(pad("abc", 2, " "), "abc");
/// ```
pub fn pad(text: &str, length: usize, fill: &str) -> String {
    let current = text.chars().count();
    if current >= length {
        return text.to_string();
    }
    let deficit = length - current;
    let left = deficit / 2;
    let right = deficit - left;
    format!("{}{}{}", fill_chars(fill, left), text, fill_chars(fill, right))
}

/// Left-pads to `length` characters.
pub fn pad_start(text: &str, length: usize, fill: &str) -> String {
    let current = text.chars().count();
    if current >= length {
        return text.to_string();
    }
    format!("{}{}", fill_chars(fill, length - current), text)
}

/// Right-pads to `length` characters.
pub fn pad_end(text: &str, length: usize, fill: &str) -> String {
    let current = text.chars().count();
    if current >= length {
        return text.to_string();
    }
    format!("{}{}", text, fill_chars(fill, length - current))
}

fn trim_set(characters: Option<&str>) -> impl Fn(char) -> bool + '_ {
    move |candidate| {
        characters.map_or_else(
            || candidate.is_whitespace(),
            |set| set.contains(candidate),
        )
    }
}

/// Trims characters from both ends; `None` trims whitespace.
///
/// # Examples
///
/// ```rust
/// use dashkit::string::trim_text;
///
/// assert_eq!(trim_text("  abc  ", None), "abc");
/// assert_eq!(trim_text("--abc--", Some("-")), "abc");
/// ```
pub fn trim_text(text: &str, characters: Option<&str>) -> String {
    text.trim_matches(trim_set(characters)).to_string()
}

/// Trims characters from the start; `None` trims whitespace.
pub fn trim_start_text(text: &str, characters: Option<&str>) -> String {
    text.trim_start_matches(trim_set(characters)).to_string()
}

/// Trims characters from the end; `None` trims whitespace.
pub fn trim_end_text(text: &str, characters: Option<&str>) -> String {
    text.trim_end_matches(trim_set(characters)).to_string()
}

/// Repeats the text `count` times.
pub fn repeat_text(text: &str, count: usize) -> String {
    text.repeat(count)
}

/// Truncates to at most `length` characters, ending with `omission` when
/// anything was cut.
///
/// # Examples
///
/// ```rust
/// use dashkit::string::truncate_text;
///
/// assert_eq!(truncate_text("hello world", 8, "..."), "hello...");
/// assert_eq!(truncate_text("short", 8, "..."), "short");
/// ```
pub fn truncate_text(text: &str, length: usize, omission: &str) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let omission_length = omission.chars().count();
    let kept = length.saturating_sub(omission_length);
    let mut result: String = text.chars().take(kept).collect();
    result.push_str(omission);
    result
}

/// Prepends `prefix` unless the text already starts with it.
pub fn ensure_starts_with(text: &str, prefix: &str) -> String {
    if text.starts_with(prefix) {
        text.to_string()
    } else {
        format!("{prefix}{text}")
    }
}

/// Appends `suffix` unless the text already ends with it.
pub fn ensure_ends_with(text: &str, suffix: &str) -> String {
    if text.ends_with(suffix) {
        text.to_string()
    } else {
        format!("{text}{suffix}")
    }
}

/// Replaces `${path}` placeholders by deep lookup into `bindings`.
///
/// Placeholder contents use the full dotted path syntax; paths that do
/// not resolve render as the empty string. A lone `$` or an unterminated
/// placeholder passes through literally.
///
/// # Examples
///
/// ```rust
/// use dashkit::string::interpolate;
/// use dashkit::value::Value;
///
/// let bindings = Value::map_of([(
///     "user",
///     Value::map_of([("name", Value::from("ada"))]),
/// )]);
/// assert_eq!(
///     interpolate("hello ${user.name}${user.title}!", &bindings),
///     "hello ada!"
/// );
/// ```
pub fn interpolate(template: &str, bindings: &Value) -> String {
    let mut result = String::with_capacity(template.len());
    let mut characters = template.chars().peekable();
    while let Some(character) = characters.next() {
        if character == '$' && characters.peek() == Some(&'{') {
            characters.next();
            let mut path = String::new();
            let mut closed = false;
            for inner in characters.by_ref() {
                if inner == '}' {
                    closed = true;
                    break;
                }
                path.push(inner);
            }
            if closed {
                if let Some(found) = get(bindings, path.as_str()) {
                    result.push_str(&found.to_string());
                }
            } else {
                result.push_str("${");
                result.push_str(&path);
            }
        } else {
            result.push(character);
        }
    }
    result
}

/// Joins URL segments, collapsing duplicate slashes at the joins and
/// merging query strings with `&`.
///
/// The scheme separator of the first segment survives untouched.
///
/// # Examples
///
/// ```rust
/// use dashkit::string::url_join;
///
/// assert_eq!(
///     url_join("https://example.com/", &["a/", "/b", "c?x=1", "?y=2"]),
///     "https://example.com/a/b/c?x=1&y=2"
/// );
/// ```
pub fn url_join(base: &str, parts: &[&str]) -> String {
    let mut queries: Vec<String> = Vec::new();

    let mut strip_query = |segment: &str| -> String {
        match segment.split_once('?') {
            Some((path, query)) => {
                if !query.is_empty() {
                    queries.push(query.to_string());
                }
                path.to_string()
            }
            None => segment.to_string(),
        }
    };

    let mut joined = strip_query(base);
    for &part in parts {
        let path = strip_query(part);
        if path.is_empty() {
            continue;
        }
        while joined.ends_with('/') {
            joined.pop();
        }
        joined.push('/');
        joined.push_str(path.trim_start_matches('/'));
    }

    if !queries.is_empty() {
        joined.push('?');
        joined.push_str(&queries.join("&"));
    }
    joined
}

/// The fixed escape table: the six characters HTML treats specially.
const HTML_ESCAPES: [(char, &str); 6] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
    ('`', "&#96;"),
];

/// Escapes the six HTML-special characters to entities.
///
/// # Examples
///
/// ```rust
/// use dashkit::string::escape;
///
/// assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for character in text.chars() {
        match HTML_ESCAPES.iter().find(|(raw, _)| *raw == character) {
            Some((_, entity)) => result.push_str(entity),
            None => result.push(character),
        }
    }
    result
}

/// Exact inverse of [`escape`] over the six-entity table, also accepting
/// the decimal `&#NN;` spellings of those characters.
///
/// # Examples
///
/// ```rust
/// use dashkit::string::{escape, unescape};
///
/// let text = "<a href=\"x\">&'`</a>";
/// assert_eq!(unescape(&escape(text)), text);
/// assert_eq!(unescape("&#60;&#62;"), "<>");
/// ```
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ampersand) = rest.find('&') {
        result.push_str(&rest[..ampersand]);
        rest = &rest[ampersand..];
        match rest.find(';') {
            Some(semicolon) => {
                let candidate = &rest[..=semicolon];
                match decode_entity(candidate) {
                    Some(character) => {
                        result.push(character);
                        rest = &rest[semicolon + 1..];
                    }
                    None => {
                        result.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            None => break,
        }
    }
    result.push_str(rest);
    result
}

fn decode_entity(candidate: &str) -> Option<char> {
    if let Some((raw, _)) = HTML_ESCAPES.iter().find(|(_, entity)| *entity == candidate) {
        return Some(*raw);
    }
    let digits = candidate.strip_prefix("&#")?.strip_suffix(';')?;
    let code: u32 = digits.parse().ok()?;
    let character = char::from_u32(code)?;
    HTML_ESCAPES
        .iter()
        .any(|(raw, _)| *raw == character)
        .then_some(character)
}

/// Formats a number with fixed precision and custom separators.
///
/// # Examples
///
/// ```rust
/// use dashkit::string::number_format;
///
/// assert_eq!(number_format(1234567.891, 2, ",", "."), "1.234.567,89");
/// assert_eq!(number_format(-1234.56, 0, ".", ","), "-1,235");
/// ```
pub fn number_format(value: f64, precision: usize, decimal_sep: &str, thousands_sep: &str) -> String {
    let formatted = format!("{value:.precision$}");
    let (sign, unsigned) = formatted
        .strip_prefix('-')
        .map_or(("", formatted.as_str()), |rest| ("-", rest));
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::new();
    for (position, digit) in digits.iter().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push_str(thousands_sep);
        }
        grouped.push(*digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}{decimal_sep}{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("foo_bar", vec!["foo", "bar"])]
    #[case("fooBar", vec!["foo", "Bar"])]
    #[case("FOOBar", vec!["FOO", "Bar"])]
    #[case("abc123def", vec!["abc", "123", "def"])]
    #[case("--x--", vec!["x"])]
    fn test_words_cases(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(words(input), expected);
    }

    #[rstest]
    #[case("foo bar", "fooBar")]
    #[case("FOO BAR", "fooBar")]
    #[case("foo-bar_baz", "fooBarBaz")]
    fn test_camel_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camel_case(input), expected);
    }

    #[rstest]
    fn test_pad_multi_character_fill_truncates() {
        assert_eq!(pad_start("x", 6, "ab"), "ababax");
        assert_eq!(pad_end("x", 4, "ab"), "xaba");
    }

    #[rstest]
    fn test_unescape_leaves_unknown_entities() {
        assert_eq!(unescape("&copy; &amp;"), "&copy; &");
    }

    #[rstest]
    fn test_escape_unescape_round_trip() {
        let text = "& < > \" ' ` plain";
        assert_eq!(unescape(&escape(text)), text);
    }

    #[rstest]
    fn test_url_join_preserves_scheme() {
        assert_eq!(url_join("http://x.test", &["api", "v1"]), "http://x.test/api/v1");
    }
}
