// File: src/evaluator.rs
// Purpose: Pure rule evaluation for one field against the current values

use std::collections::HashMap;

use rusty_validator_core as checks;
use tracing::trace;

use crate::error::Result;
use crate::rules::{FieldRules, Rule, RuleSet};
use crate::strength::PasswordStrength;

/// Current value of every field, by name
pub type ValueMap = HashMap<String, String>;

/// Outcome of evaluating one field
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Evaluation {
    /// Violated-rule messages in evaluation order; empty means valid
    pub messages: Vec<String>,
    /// Sub-check breakdown, present when the field carries a password policy
    pub strength: Option<PasswordStrength>,
}

impl Evaluation {
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Evaluates every rule of `field` and collects all violations.
///
/// A field missing from `rule_set` is an error; see [`evaluate_rules`] for
/// the evaluation itself.
pub fn evaluate(field: &str, rule_set: &RuleSet, values: &ValueMap) -> Result<Evaluation> {
    let field_rules = rule_set.field(field)?;
    Ok(evaluate_rules(field_rules, values))
}

/// Evaluates already resolved field rules.
///
/// Rules run in the fixed kind order and none of them short-circuits the
/// others: an empty value on a required field still goes through the
/// length, pattern and numeric checks. `confirm` reads the target's value
/// from `values` at call time.
///
/// A value missing from `values` (own or confirm target) is read as the
/// empty string.
pub fn evaluate_rules(field_rules: &FieldRules, values: &ValueMap) -> Evaluation {
    let field = field_rules.name();
    let value = lookup(values, field);

    let mut evaluation = Evaluation::default();

    for rule in field_rules.rules() {
        let violated = match rule {
            Rule::Required { .. } => !checks::is_present(value),
            Rule::Pattern { regex, .. } => !checks::matches_pattern(value, regex),
            Rule::MinLength { min, .. } => checks::is_shorter_than(value, *min),
            Rule::MaxLength { max, .. } => checks::is_longer_than(value, *max),
            Rule::Min { min, .. } => checks::is_below(value, *min),
            Rule::Max { max, .. } => checks::is_above(value, *max),
            Rule::Email { .. } => !checks::is_valid_email(value),
            Rule::Confirm { field: target, .. } => value != lookup(values, target),
            Rule::Password(policy) => {
                let strength = PasswordStrength::measure(value, policy);
                evaluation.strength = Some(strength);
                !strength.is_satisfied()
            }
        };

        trace!(field, rule = ?rule.kind(), violated, "rule evaluated");

        if violated {
            evaluation.messages.push(rule.message().to_string());
        }
    }

    evaluation
}

fn lookup<'a>(values: &'a ValueMap, field: &str) -> &'a str {
    values.get(field).map(String::as_str).unwrap_or("")
}
