//! Numeric validation functions
//!
//! Form values arrive as text. They are coerced the way a numeric input
//! would be: surrounding whitespace is ignored, blank text reads as zero, and
//! anything that does not parse is not a number at all.

/// Coerces a form value to a number, `None` when it is not numeric
pub fn coerce_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// True when the value is a number strictly below `min`
pub fn is_below(value: &str, min: f64) -> bool {
    coerce_number(value).is_some_and(|n| n < min)
}

/// True when the value is a number strictly above `max`
pub fn is_above(value: &str, max: f64) -> bool {
    coerce_number(value).is_some_and(|n| n > max)
}
