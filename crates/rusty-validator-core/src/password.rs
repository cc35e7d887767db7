//! Password character-class checks
//!
//! Classes are ASCII: digits `[0-9]`, upper `[A-Z]`, lower `[a-z]`. A special
//! character is anything outside `[A-Za-z0-9]`, including spaces and
//! non-ASCII letters.

use crate::string::char_length;

/// At least `min` characters long
pub fn has_min_length(password: &str, min: usize) -> bool {
    char_length(password) >= min
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_upper_case(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lower_case(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_special_char(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}
