// File: src/report.rs
// Purpose: Per-field error report

use serde::Serialize;
use std::collections::HashMap;

use crate::rules::RuleSet;

/// Field name to violated-rule messages.
///
/// An empty sequence means the field is valid. Serializes as a plain map
/// (`{"email": ["..."]}`) for UI bindings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorReport {
    errors: HashMap<String, Vec<String>>,
}

impl ErrorReport {
    /// Report with an empty sequence for every field of `rule_set`
    pub fn seeded(rule_set: &RuleSet) -> Self {
        Self {
            errors: rule_set
                .field_names()
                .map(|name| (name.to_string(), Vec::new()))
                .collect(),
        }
    }

    /// Replaces the messages of one field
    pub fn set(&mut self, field: impl Into<String>, messages: Vec<String>) {
        self.errors.insert(field.into(), messages);
    }

    /// Nothing has been validated yet
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// No field has a message
    pub fn is_valid(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// At least one field has a message
    pub fn has_errors(&self) -> bool {
        !self.is_valid()
    }

    /// Get all errors for a specific field
    pub fn get_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Get first error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|errors| errors.first())
            .map(String::as_str)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Fields with at least one message, in `rule_set` order
    pub fn invalid_fields<'a>(&'a self, rule_set: &'a RuleSet) -> Vec<&'a str> {
        rule_set
            .field_names()
            .filter(|name| self.get_errors(name).is_some_and(|e| !e.is_empty()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn into_inner(self) -> HashMap<String, Vec<String>> {
        self.errors
    }
}
