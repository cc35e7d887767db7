// File: src/strength.rs
// Purpose: Password strength breakdown, the live-feedback channel beside the error report

use serde::Serialize;

use rusty_validator_core::{has_digit, has_lower_case, has_min_length, has_special_char, has_upper_case};

use crate::rules::PasswordPolicy;

/// One sub-check of a password policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordCheck {
    MinLength,
    Number,
    UpperCase,
    LowerCase,
    SpecialChar,
}

impl PasswordCheck {
    /// Checklist order
    pub const ALL: [PasswordCheck; 5] = [
        PasswordCheck::MinLength,
        PasswordCheck::Number,
        PasswordCheck::UpperCase,
        PasswordCheck::LowerCase,
        PasswordCheck::SpecialChar,
    ];
}

/// Satisfied flag per sub-check.
///
/// A toggle that is not enabled in the policy always reads as satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrength {
    pub min_length: bool,
    pub number: bool,
    pub upper_case: bool,
    pub lower_case: bool,
    pub special_char: bool,
}

impl PasswordStrength {
    pub fn measure(password: &str, policy: &PasswordPolicy) -> Self {
        Self {
            min_length: has_min_length(password, policy.min_length.min),
            number: policy.number.is_none() || has_digit(password),
            upper_case: policy.upper_case.is_none() || has_upper_case(password),
            lower_case: policy.lower_case.is_none() || has_lower_case(password),
            special_char: policy.special_char.is_none() || has_special_char(password),
        }
    }

    pub fn get(&self, check: PasswordCheck) -> bool {
        match check {
            PasswordCheck::MinLength => self.min_length,
            PasswordCheck::Number => self.number,
            PasswordCheck::UpperCase => self.upper_case,
            PasswordCheck::LowerCase => self.lower_case,
            PasswordCheck::SpecialChar => self.special_char,
        }
    }

    /// Every sub-check passes
    pub fn is_satisfied(&self) -> bool {
        PasswordCheck::ALL.iter().all(|&check| self.get(check))
    }
}

/// A checklist row for rendering: one per enabled sub-check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub check: PasswordCheck,
    pub message: String,
    pub satisfied: bool,
}

/// Builds the checklist for `policy`.
///
/// `strength` is `None` before the password was first evaluated, in which
/// case every row is reported unsatisfied.
pub fn checklist(policy: &PasswordPolicy, strength: Option<&PasswordStrength>) -> Vec<ChecklistItem> {
    let toggles = [
        (PasswordCheck::Number, &policy.number),
        (PasswordCheck::UpperCase, &policy.upper_case),
        (PasswordCheck::LowerCase, &policy.lower_case),
        (PasswordCheck::SpecialChar, &policy.special_char),
    ];

    let satisfied = |check: PasswordCheck| strength.is_some_and(|s| s.get(check));

    let mut items = vec![ChecklistItem {
        check: PasswordCheck::MinLength,
        message: policy.min_length.message.clone(),
        satisfied: satisfied(PasswordCheck::MinLength),
    }];

    items.extend(toggles.into_iter().filter_map(|(check, sub)| {
        sub.as_ref().map(|sub| ChecklistItem {
            check,
            message: sub.message.clone(),
            satisfied: satisfied(check),
        })
    }));

    items
}
