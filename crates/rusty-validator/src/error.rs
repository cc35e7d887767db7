// File: src/error.rs
// Purpose: Misuse errors raised by the engine (never end-user feedback)

use thiserror::Error;

/// Integration mistakes: unknown fields, dangling references, bad patterns.
///
/// Data-driven violations are not errors; they are collected in
/// [`ErrorReport`](crate::ErrorReport).
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("unknown field '{0}': not declared in the rule set")]
    UnknownField(String),

    #[error("field '{field}' confirms '{target}', which is not declared in the rule set")]
    UnknownConfirmTarget { field: String, target: String },

    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid validator config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
