#![forbid(unsafe_code)]

//! Rule storage, the generic matcher and the built-in string rule types

pub mod builtin;
mod matcher;
mod rule;
mod string_matcher;

// Re-export core types
pub use matcher::Matcher;
pub use rule::{Handler, Rule, RuleSpec};
pub use string_matcher::{MatchInput, StringMatcher};
