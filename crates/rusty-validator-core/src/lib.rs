//! rusty-validator core
//!
//! Stateless predicates shared by the rule evaluator. Every function here
//! answers a single yes/no question about a string value; messages and rule
//! ordering live in the `rusty-validator` crate.

pub mod email;
pub mod numeric;
pub mod password;
pub mod string;

// Re-export all predicates
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
