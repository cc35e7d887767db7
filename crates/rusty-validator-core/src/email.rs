//! Email shape validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed email shape: local part, `@`, dotted domain, alphabetic TLD of 2+ chars
pub const EMAIL_PATTERN: &str = r"(?i)^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).unwrap());

/// Checks that a value has the shape of an email address.
///
/// This is a shape check only; it does not resolve the domain.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
