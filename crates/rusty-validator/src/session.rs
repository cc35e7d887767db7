// File: src/session.rs
// Purpose: Validation session owning values, error report and password strength

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::config::ValidatorConfig;
use crate::error::Result;
use crate::evaluator::{evaluate_rules, Evaluation, ValueMap};
use crate::report::ErrorReport;
use crate::rules::{FieldRules, RuleSet};
use crate::strength::{checklist, ChecklistItem, PasswordStrength};

/// The host event that triggered a submit (a form submission, typically).
///
/// The session suppresses its default action before validating.
pub trait SubmitEvent {
    fn prevent_default(&mut self);
}

/// Mutable state of one form: current values, per-field errors and the
/// password strength breakdown.
///
/// Every operation is synchronous and commits its result before it returns.
/// A misuse error (unknown field) commits nothing.
#[derive(Debug, Clone)]
pub struct ValidationSession {
    rule_set: RuleSet,
    config: ValidatorConfig,
    initial_values: ValueMap,
    values: ValueMap,
    errors: ErrorReport,
    strength: HashMap<String, PasswordStrength>,
    evaluated: HashSet<String>,
}

impl ValidationSession {
    /// Starts a session with the default configuration.
    ///
    /// Fields of `rule_set` missing from `initial_values` start as the empty
    /// string.
    pub fn new<I, K, V>(initial_values: I, rule_set: RuleSet) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_config(initial_values, rule_set, ValidatorConfig::default())
    }

    pub fn with_config<I, K, V>(initial_values: I, rule_set: RuleSet, config: ValidatorConfig) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values: ValueMap = initial_values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for name in values.keys().filter(|name| !rule_set.contains(name)) {
            warn!(field = %name, "initial value for a field without rules");
        }

        for name in rule_set.field_names() {
            values.entry(name.to_string()).or_default();
        }

        Self {
            rule_set,
            config,
            initial_values: values.clone(),
            values,
            errors: ErrorReport::default(),
            strength: HashMap::new(),
            evaluated: HashSet::new(),
        }
    }

    /// Stores a new value and, unless the mode defers it, validates the field.
    ///
    /// The field's messages are replaced, never appended to. Password
    /// strength is refreshed on every change regardless of mode.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        let field_rules = self.rule_set.field(field)?;
        self.values.insert(field.to_string(), value.into());

        let evaluation = evaluate_rules(field_rules, &self.values);
        if let Some(strength) = evaluation.strength {
            self.strength.insert(field.to_string(), strength);
        }

        if !self.config.mode.validates_on_change() {
            return Ok(());
        }

        self.commit(field, evaluation);

        if self.config.revalidate_dependents {
            self.revalidate_dependents(field);
        }

        Ok(())
    }

    /// Validates a field against its stored value (blur), without changing it
    pub fn touch(&mut self, field: &str) -> Result<()> {
        let field_rules = self.rule_set.field(field)?;

        if !self.config.mode.validates_on_blur() {
            return Ok(());
        }

        let evaluation = evaluate_rules(field_rules, &self.values);
        if let Some(strength) = evaluation.strength {
            self.strength.insert(field.to_string(), strength);
        }
        self.commit(field, evaluation);

        Ok(())
    }

    /// Validates every field in declared order and replaces the whole report.
    ///
    /// Returns the new report; the caller should only proceed when it
    /// [`is_valid`](ErrorReport::is_valid).
    pub fn submit_all(&mut self) -> ErrorReport {
        let mut report = ErrorReport::seeded(&self.rule_set);

        for field_rules in self.rule_set.fields() {
            let name = field_rules.name();
            let evaluation = evaluate_rules(field_rules, &self.values);
            if let Some(strength) = evaluation.strength {
                self.strength.insert(name.to_string(), strength);
            }
            self.evaluated.insert(name.to_string());
            report.set(name, evaluation.messages);
        }

        debug!(
            invalid = report.invalid_fields(&self.rule_set).len(),
            "form submitted"
        );

        self.errors = report;
        self.errors.clone()
    }

    /// Suppresses the event's default action, then runs [`submit_all`](Self::submit_all)
    pub fn submit<E: SubmitEvent + ?Sized>(&mut self, event: &mut E) -> ErrorReport {
        event.prevent_default();
        self.submit_all()
    }

    /// Restores the initial values and forgets every verdict
    pub fn reset(&mut self) {
        self.values = self.initial_values.clone();
        self.errors = ErrorReport::default();
        self.strength.clear();
        self.evaluated.clear();
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &ErrorReport {
        &self.errors
    }

    /// Messages of one field; empty when valid or not yet validated
    pub fn field_errors(&self, field: &str) -> Result<&[String]> {
        self.rule_set.field(field)?;
        Ok(self.errors.get_errors(field).unwrap_or_default())
    }

    pub fn first_error(&self, field: &str) -> Result<Option<&str>> {
        Ok(self.field_errors(field)?.first().map(String::as_str))
    }

    /// No field currently carries a message
    pub fn is_valid(&self) -> bool {
        self.errors.is_valid()
    }

    /// Strength of the password field, `None` until it was first evaluated
    pub fn password_strength(&self) -> Option<&PasswordStrength> {
        self.rule_set
            .password_field()
            .and_then(|f| self.strength.get(f.name()))
    }

    pub fn password_strength_for(&self, field: &str) -> Option<&PasswordStrength> {
        self.strength.get(field)
    }

    /// One row per enabled sub-check of the password field, empty when the
    /// rule set has no password policy
    pub fn password_checklist(&self) -> Vec<ChecklistItem> {
        let Some(field) = self.rule_set.password_field() else {
            return Vec::new();
        };
        let Some(policy) = field.password_policy() else {
            return Vec::new();
        };
        checklist(policy, self.strength.get(field.name()))
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn commit(&mut self, field: &str, evaluation: Evaluation) {
        if self.errors.is_empty() {
            self.errors = ErrorReport::seeded(&self.rule_set);
        }

        debug!(field, violations = evaluation.messages.len(), "field validated");

        self.evaluated.insert(field.to_string());
        self.errors.set(field, evaluation.messages);
    }

    fn revalidate_dependents(&mut self, field: &str) {
        let dependents: Vec<FieldRules> = self
            .rule_set
            .dependents_of(field)
            .filter(|name| self.evaluated.contains(*name))
            .filter_map(|name| self.rule_set.get(name).cloned())
            .collect();

        for dependent in dependents {
            let evaluation = evaluate_rules(&dependent, &self.values);
            self.commit(dependent.name(), evaluation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationMode;
    use crate::error::ValidatorError;
    use crate::rules::{PasswordPolicy, Rule};
    use pretty_assertions::assert_eq;

    fn signup_rules() -> RuleSet {
        let policy = PasswordPolicy::new(8, "at least 8 characters", "password too weak")
            .require_number("a digit")
            .require_upper_case("an upper-case letter");

        RuleSet::builder()
            .field("name", [Rule::required("name required"), Rule::min_length(3, "name too short")])
            .field("password", [Rule::required("password required"), Rule::password(policy)])
            .field(
                "passwordConfirm",
                [Rule::required("confirm required"), Rule::confirm("password", "mismatch")],
            )
            .build()
            .unwrap()
    }

    fn session() -> ValidationSession {
        ValidationSession::new([("name", "")], signup_rules())
    }

    #[test]
    fn test_missing_initial_values_default_to_empty() {
        let session = session();
        assert_eq!(session.value("password"), Some(""));
        assert_eq!(session.value("passwordConfirm"), Some(""));
        assert!(session.errors().is_empty());
        assert_eq!(session.password_strength(), None);
    }

    #[test]
    fn test_set_value_replaces_field_errors() {
        let mut session = session();

        session.set_value("name", "Al").unwrap();
        assert_eq!(session.field_errors("name").unwrap(), ["name too short"]);

        session.set_value("name", "Alice").unwrap();
        assert!(session.field_errors("name").unwrap().is_empty());
        assert_eq!(session.value("name"), Some("Alice"));
    }

    #[test]
    fn test_first_commit_seeds_every_field() {
        let mut session = session();
        session.set_value("name", "Al").unwrap();

        let report = session.errors();
        for name in ["name", "password", "passwordConfirm"] {
            assert!(report.contains_field(name), "missing {name}");
        }
        assert_eq!(session.first_error("name").unwrap(), Some("name too short"));
        assert_eq!(session.first_error("password").unwrap(), None);
    }

    #[test]
    fn test_unknown_field_commits_nothing() {
        let mut session = session();

        let err = session.set_value("nope", "x").unwrap_err();
        assert!(matches!(err, ValidatorError::UnknownField(_)));
        assert_eq!(session.value("nope"), None);
        assert!(session.errors().is_empty());

        assert!(session.touch("nope").is_err());
        assert!(session.field_errors("nope").is_err());
    }

    #[test]
    fn test_touch_uses_stored_value() {
        let mut session = ValidationSession::new([("name", "Al")], signup_rules());

        session.touch("name").unwrap();
        assert_eq!(session.field_errors("name").unwrap(), ["name too short"]);
        assert_eq!(session.value("name"), Some("Al"));
    }

    #[test]
    fn test_password_change_updates_strength() {
        let mut session = session();

        session.set_value("password", "password").unwrap();
        let strength = session.password_strength().unwrap();
        assert!(strength.min_length);
        assert!(!strength.number);
        assert!(!strength.upper_case);
        assert!(strength.lower_case);
        assert!(strength.special_char);
        assert_eq!(session.field_errors("password").unwrap(), ["password too weak"]);

        session.set_value("password", "Passw0rd").unwrap();
        assert!(session.password_strength().unwrap().is_satisfied());
        assert!(session.field_errors("password").unwrap().is_empty());
    }

    #[test]
    fn test_checklist_tracks_strength() {
        let mut session = session();
        assert!(session.password_checklist().iter().all(|i| !i.satisfied));

        session.set_value("password", "PASSWORD").unwrap();
        let satisfied: Vec<bool> = session
            .password_checklist()
            .iter()
            .map(|i| i.satisfied)
            .collect();
        assert_eq!(satisfied, vec![true, false, true]);
    }

    #[test]
    fn test_submit_prevents_default_first() {
        struct FormEvent {
            prevented: bool,
        }

        impl SubmitEvent for FormEvent {
            fn prevent_default(&mut self) {
                self.prevented = true;
            }
        }

        let mut session = session();
        let mut event = FormEvent { prevented: false };

        let report = session.submit(&mut event);
        assert!(event.prevented);
        assert!(report.has_errors());
        assert_eq!(report, *session.errors());
    }

    #[test]
    fn test_on_submit_mode_defers_errors_but_not_strength() {
        let config = ValidatorConfig {
            mode: ValidationMode::OnSubmit,
            ..Default::default()
        };
        let mut session = ValidationSession::with_config([("name", "")], signup_rules(), config);

        session.set_value("password", "abc").unwrap();
        session.touch("name").unwrap();
        assert!(session.errors().is_empty());
        assert!(session.password_strength().is_some());

        let report = session.submit_all();
        assert_eq!(report.get_error("name"), Some("name required"));
    }

    #[test]
    fn test_on_blur_mode_validates_on_touch_only() {
        let config = ValidatorConfig {
            mode: ValidationMode::OnBlur,
            ..Default::default()
        };
        let mut session = ValidationSession::with_config([("name", "")], signup_rules(), config);

        session.set_value("name", "Al").unwrap();
        assert!(session.errors().is_empty());

        session.touch("name").unwrap();
        assert_eq!(session.field_errors("name").unwrap(), ["name too short"]);
    }

    #[test]
    fn test_revalidate_dependents() {
        let config = ValidatorConfig {
            revalidate_dependents: true,
            ..Default::default()
        };
        let mut session = ValidationSession::with_config([("name", "")], signup_rules(), config);

        session.set_value("password", "Passw0rd").unwrap();
        session.set_value("passwordConfirm", "Passw0rd").unwrap();
        assert!(session.field_errors("passwordConfirm").unwrap().is_empty());

        session.set_value("password", "Passw0rd2").unwrap();
        assert_eq!(session.field_errors("passwordConfirm").unwrap(), ["mismatch"]);
    }

    #[test]
    fn test_dependents_not_revalidated_before_first_evaluation() {
        let config = ValidatorConfig {
            revalidate_dependents: true,
            ..Default::default()
        };
        let mut session = ValidationSession::with_config([("name", "")], signup_rules(), config);

        session.set_value("password", "Passw0rd").unwrap();
        assert!(session.field_errors("passwordConfirm").unwrap().is_empty());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = ValidationSession::new([("name", "Bob")], signup_rules());

        session.set_value("name", "Al").unwrap();
        session.set_value("password", "x").unwrap();
        session.reset();

        assert_eq!(session.value("name"), Some("Bob"));
        assert_eq!(session.value("password"), Some(""));
        assert!(session.errors().is_empty());
        assert_eq!(session.password_strength(), None);
    }
}
