#![forbid(unsafe_code)]

//! rulematch: extensible rule matching
//!
//! Callers register named rule types (predicates over a value and a pattern),
//! add rules pairing a type with a pattern, and ask whether a value matches
//! any rule. `StringMatcher` comes with `startsWith`, `contains` and `regex`
//! rule types installed.
//!
//! ```
//! use rulematch::StringMatcher;
//!
//! let mut matcher = StringMatcher::new();
//! matcher.add_rule("startsWith", "/api");
//! matcher.add_rule("contains", vec!["admin", "debug"]);
//!
//! assert!(matcher.matches("/api/users"));
//! assert!(matcher.matches("/x/admin/y"));
//! assert!(!matcher.matches("/x"));
//! assert!(!matcher.matches(&42));
//! ```

mod logging;

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{Error, RulesetError};

// Re-export core domain types for convenient access
pub use rules::{Handler, MatchInput, Matcher, Rule, RuleSpec, StringMatcher};
pub use types::{Patterns, RuleType};
