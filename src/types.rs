#![forbid(unsafe_code)]

//! Core domain types for rulematch
//!
//! This module defines the identifier and pattern types shared by the
//! matcher engine, the ruleset loader and the command-line front end.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a rule type, the key a handler is registered under
///
/// Any string is a valid rule type. Names are compared exactly, so
/// `"startsWith"` and `"startswith"` are different types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleType(String);

impl RuleType {
    /// Creates a new RuleType
    pub fn new(name: impl Into<String>) -> Self {
        RuleType(name.into())
    }

    /// Returns the rule type as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RuleType {
    fn from(name: String) -> Self {
        RuleType(name)
    }
}

impl From<&str> for RuleType {
    fn from(name: &str) -> Self {
        RuleType(name.to_string())
    }
}

impl From<&RuleType> for RuleType {
    fn from(name: &RuleType) -> Self {
        name.clone()
    }
}

impl From<RuleType> for String {
    fn from(rule_type: RuleType) -> Self {
        rule_type.0
    }
}

// Hash/Eq are derived over the single String field, so lookups by &str agree.
impl Borrow<str> for RuleType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One pattern or a sequence of patterns supplied for a single rule type
///
/// A sequence is expanded into one stored rule per element when it is added
/// to a matcher, so stored rules always carry exactly one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Patterns<P> {
    /// Several patterns, expanded in order
    Many(Vec<P>),
    /// A single pattern
    One(P),
}

impl<P> Patterns<P> {
    /// Number of rules these patterns expand into
    pub fn len(&self) -> usize {
        match self {
            Patterns::Many(patterns) => patterns.len(),
            Patterns::One(_) => 1,
        }
    }

    /// True for an empty sequence, which expands into no rules
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens into the individual patterns, preserving order
    pub fn into_vec(self) -> Vec<P> {
        match self {
            Patterns::Many(patterns) => patterns,
            Patterns::One(pattern) => vec![pattern],
        }
    }
}

impl<P> IntoIterator for Patterns<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl From<&str> for Patterns<String> {
    fn from(pattern: &str) -> Self {
        Patterns::One(pattern.to_string())
    }
}

impl From<String> for Patterns<String> {
    fn from(pattern: String) -> Self {
        Patterns::One(pattern)
    }
}

impl From<Vec<String>> for Patterns<String> {
    fn from(patterns: Vec<String>) -> Self {
        Patterns::Many(patterns)
    }
}

impl From<Vec<&str>> for Patterns<String> {
    fn from(patterns: Vec<&str>) -> Self {
        Patterns::Many(patterns.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Patterns<String> {
    fn from(patterns: &[&str]) -> Self {
        Patterns::Many(patterns.iter().map(|p| p.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Patterns<String> {
    fn from(patterns: [&str; N]) -> Self {
        Patterns::Many(patterns.iter().map(|p| p.to_string()).collect())
    }
}
