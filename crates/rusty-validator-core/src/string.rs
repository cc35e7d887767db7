//! String validation functions

use regex::Regex;

/// Length of a value in characters (Unicode scalar values), not bytes
pub fn char_length(value: &str) -> usize {
    value.chars().count()
}

/// True when the value has fewer than `min` characters
pub fn is_shorter_than(value: &str, min: usize) -> bool {
    char_length(value) < min
}

/// True when the value has more than `max` characters
pub fn is_longer_than(value: &str, max: usize) -> bool {
    char_length(value) > max
}

/// Unanchored regex search; anchor the pattern to require a full match
pub fn matches_pattern(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

/// A value counts as present when it is not the empty string.
/// Whitespace is a value.
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}
