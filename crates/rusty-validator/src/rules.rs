// File: src/rules.rs
// Purpose: Rule configuration data model (tagged rule variants, per-field rule lists, rule sets)

use regex::Regex;
use std::collections::HashSet;

use crate::error::{Result, ValidatorError};

/// Rule kinds in evaluation order.
///
/// The derived `Ord` is the fixed order the evaluator applies rules in,
/// regardless of the order they were declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    Required,
    Pattern,
    MinLength,
    MaxLength,
    Min,
    Max,
    Email,
    Confirm,
    Password,
}

/// A single validation rule with its message
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must not be empty
    Required { message: String },
    /// Value must contain a match of `regex` (anchor it for a full match)
    Pattern { regex: Regex, message: String },
    /// At least `min` characters
    MinLength { min: usize, message: String },
    /// At most `max` characters
    MaxLength { max: usize, message: String },
    /// Numeric value not below `min`
    Min { min: f64, message: String },
    /// Numeric value not above `max`
    Max { max: f64, message: String },
    /// Value has the shape of an email address
    Email { message: String },
    /// Value equals the current value of another field, looked up by name
    Confirm { field: String, message: String },
    /// Composite password policy, one umbrella message
    Password(PasswordPolicy),
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Rule::Required {
            message: message.into(),
        }
    }

    /// Compiles `pattern` into a pattern rule
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(Rule::Pattern {
            regex,
            message: message.into(),
        })
    }

    /// Pattern rule from an already compiled regex
    pub fn matching(regex: Regex, message: impl Into<String>) -> Self {
        Rule::Pattern {
            regex,
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Rule::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Rule::MaxLength {
            max,
            message: message.into(),
        }
    }

    pub fn min(min: f64, message: impl Into<String>) -> Self {
        Rule::Min {
            min,
            message: message.into(),
        }
    }

    pub fn max(max: f64, message: impl Into<String>) -> Self {
        Rule::Max {
            max,
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Rule::Email {
            message: message.into(),
        }
    }

    pub fn confirm(field: impl Into<String>, message: impl Into<String>) -> Self {
        Rule::Confirm {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn password(policy: PasswordPolicy) -> Self {
        Rule::Password(policy)
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Required { .. } => RuleKind::Required,
            Rule::Pattern { .. } => RuleKind::Pattern,
            Rule::MinLength { .. } => RuleKind::MinLength,
            Rule::MaxLength { .. } => RuleKind::MaxLength,
            Rule::Min { .. } => RuleKind::Min,
            Rule::Max { .. } => RuleKind::Max,
            Rule::Email { .. } => RuleKind::Email,
            Rule::Confirm { .. } => RuleKind::Confirm,
            Rule::Password(_) => RuleKind::Password,
        }
    }

    /// The message that enters the error report when this rule is violated
    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::Pattern { message, .. }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::Min { message, .. }
            | Rule::Max { message, .. }
            | Rule::Email { message }
            | Rule::Confirm { message, .. } => message,
            Rule::Password(policy) => &policy.message,
        }
    }
}

/// An enabled password sub-check and the message shown in the checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRule {
    pub message: String,
}

impl SubRule {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The always-on minimum length sub-check of a password policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthCheck {
    pub min: usize,
    pub message: String,
}

/// Composite password policy.
///
/// The length check is always enabled. Each character-class toggle is
/// enabled by being `Some`, carrying its own checklist message. Only
/// `message` ever enters the error report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: LengthCheck,
    pub number: Option<SubRule>,
    pub upper_case: Option<SubRule>,
    pub lower_case: Option<SubRule>,
    pub special_char: Option<SubRule>,
    pub message: String,
}

impl PasswordPolicy {
    /// Policy with only the length check enabled
    pub fn new(
        min_length: usize,
        min_length_message: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            min_length: LengthCheck {
                min: min_length,
                message: min_length_message.into(),
            },
            number: None,
            upper_case: None,
            lower_case: None,
            special_char: None,
            message: message.into(),
        }
    }

    pub fn require_number(mut self, message: impl Into<String>) -> Self {
        self.number = Some(SubRule::new(message));
        self
    }

    pub fn require_upper_case(mut self, message: impl Into<String>) -> Self {
        self.upper_case = Some(SubRule::new(message));
        self
    }

    pub fn require_lower_case(mut self, message: impl Into<String>) -> Self {
        self.lower_case = Some(SubRule::new(message));
        self
    }

    pub fn require_special_char(mut self, message: impl Into<String>) -> Self {
        self.special_char = Some(SubRule::new(message));
        self
    }
}

/// Ordered rules of one field
#[derive(Debug, Clone)]
pub struct FieldRules {
    name: String,
    rules: Vec<Rule>,
}

impl FieldRules {
    /// Rules are kept in evaluation order; declared order is preserved
    /// among rules of the same kind.
    pub fn new(name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut rules: Vec<Rule> = rules.into_iter().collect();
        rules.sort_by_key(Rule::kind);
        Self {
            name: name.into(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn has(&self, kind: RuleKind) -> bool {
        self.rules.iter().any(|r| r.kind() == kind)
    }

    /// The last password policy declared on this field, if any
    pub fn password_policy(&self) -> Option<&PasswordPolicy> {
        self.rules.iter().rev().find_map(|r| match r {
            Rule::Password(policy) => Some(policy),
            _ => None,
        })
    }

    /// Names of the fields this one confirms against
    pub fn confirm_targets(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().filter_map(|r| match r {
            Rule::Confirm { field, .. } => Some(field.as_str()),
            _ => None,
        })
    }
}

/// Every field of a form with its rules, in declared order.
///
/// Built once per session and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Like [`get`](Self::get), but an unknown name is a misuse error
    pub fn field(&self, name: &str) -> Result<&FieldRules> {
        self.get(name)
            .ok_or_else(|| ValidatorError::UnknownField(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldRules> {
        self.fields.iter()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The first field carrying a password policy
    pub fn password_field(&self) -> Option<&FieldRules> {
        self.fields.iter().find(|f| f.password_policy().is_some())
    }

    /// Fields whose `confirm` rule points at `target`
    pub fn dependents_of<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.confirm_targets().any(|t| t == target))
            .map(|f| f.name.as_str())
    }
}

/// Collects fields in declared order and checks cross-field references on build
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    fields: Vec<FieldRules>,
}

impl RuleSetBuilder {
    pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push(FieldRules::new(name, rules));
        self
    }

    pub fn build(self) -> Result<RuleSet> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(ValidatorError::DuplicateField(field.name.clone()));
            }
        }

        for field in &self.fields {
            for target in field.confirm_targets() {
                if !seen.contains(target) {
                    return Err(ValidatorError::UnknownConfirmTarget {
                        field: field.name.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(RuleSet {
            fields: self.fields,
        })
    }
}
