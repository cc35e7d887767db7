//! rusty-validator
//!
//! Declarative field validation for interactive forms. A [`RuleSet`] maps
//! each field to ordered rules; a [`ValidationSession`] owns the current
//! values and re-evaluates fields on change, on blur and on submit,
//! producing an [`ErrorReport`] and, for password fields, a
//! [`PasswordStrength`] breakdown.
//!
//! Rendering is left to the caller: everything the UI needs is exposed as
//! plain data.
//!
//! ```
//! use rusty_validator::{Rule, RuleSet, ValidationSession};
//!
//! let rules = RuleSet::builder()
//!     .field("name", [Rule::required("Name is required"), Rule::min_length(3, "Too short")])
//!     .field("email", [Rule::required("Email is required"), Rule::email("Invalid email")])
//!     .build()?;
//!
//! let mut session = ValidationSession::new([("name", ""), ("email", "")], rules);
//! session.set_value("name", "Al")?;
//! assert_eq!(session.first_error("name")?, Some("Too short"));
//!
//! let report = session.submit_all();
//! assert!(report.has_errors());
//! # Ok::<(), rusty_validator::ValidatorError>(())
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod report;
pub mod rules;
pub mod session;
pub mod shared;
pub mod strength;

pub use config::{ValidationMode, ValidatorConfig};
pub use error::{Result, ValidatorError};
pub use evaluator::{evaluate, evaluate_rules, Evaluation, ValueMap};
pub use report::ErrorReport;
pub use rules::{FieldRules, LengthCheck, PasswordPolicy, Rule, RuleKind, RuleSet, RuleSetBuilder, SubRule};
pub use session::{SubmitEvent, ValidationSession};
pub use shared::SharedSession;
pub use strength::{checklist, ChecklistItem, PasswordCheck, PasswordStrength};
