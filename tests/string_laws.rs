#![cfg(feature = "string")]
//! Property-based tests for string transform laws.
//!
//! 1. **Inverse**: `unescape(escape(text))` reproduces the input for any
//!    text, including text that already looks like an entity.
//! 2. **Shape**: the case conversions emit only their own separator
//!    alphabet, and are fixpoints on their own output.
//! 3. **Padding**: a padded string is never shorter than the requested
//!    width and always contains the original.

use dashkit::string;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_unescape_inverts_escape(text in ".*") {
        prop_assert_eq!(string::unescape(&string::escape(&text)), text);
    }

    #[test]
    fn prop_escape_output_is_entity_safe(text in ".*") {
        let escaped = string::escape(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
    }

    #[test]
    fn prop_snake_case_is_idempotent(text in "[ a-zA-Z0-9_-]{0,24}") {
        let once = string::snake_case(&text);
        prop_assert_eq!(string::snake_case(&once), once.clone());
        prop_assert!(once.chars().all(|c| c == '_' || c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn prop_kebab_case_is_idempotent(text in "[ a-zA-Z0-9_-]{0,24}") {
        let once = string::kebab_case(&text);
        prop_assert_eq!(string::kebab_case(&once), once.clone());
        prop_assert!(once.chars().all(|c| c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn prop_camel_case_has_no_separators(text in "[ a-zA-Z]{0,24}") {
        let converted = string::camel_case(&text);
        prop_assert!(!converted.contains(' '));
        prop_assert!(!converted.contains('_'));
        prop_assert!(!converted.contains('-'));
    }

    #[test]
    fn prop_padding_reaches_the_requested_width(
        text in "[a-z]{0,8}",
        width in 0_usize..16,
    ) {
        let padded = string::pad(&text, width, " ");
        prop_assert!(padded.chars().count() >= width);
        prop_assert!(padded.chars().count() >= text.chars().count());
        prop_assert!(padded.contains(&text));
    }

    #[test]
    fn prop_words_are_never_empty(text in "[ a-zA-Z0-9_-]{0,32}") {
        prop_assert!(string::words(&text).iter().all(|word| !word.is_empty()));
    }
}
