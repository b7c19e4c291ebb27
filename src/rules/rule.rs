#![forbid(unsafe_code)]

//! Stored rules, rule specifications and handler types

use crate::types::{Patterns, RuleType};

/// A predicate implementing one rule type
///
/// Called with the candidate value and the pattern of the rule under
/// evaluation. Handlers are expected to be pure and total.
pub type Handler<V, P> = Box<dyn Fn(&V, &P) -> bool + Send + Sync>;

/// A single stored rule: a rule type paired with exactly one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<P> {
    rule_type: RuleType,
    pattern: P,
}

impl<P> Rule<P> {
    /// Creates a new rule
    pub fn new(rule_type: impl Into<RuleType>, pattern: P) -> Self {
        Self {
            rule_type: rule_type.into(),
            pattern,
        }
    }

    /// The rule type this rule dispatches to
    pub fn rule_type(&self) -> &RuleType {
        &self.rule_type
    }

    /// The pattern handed to the handler
    pub fn pattern(&self) -> &P {
        &self.pattern
    }
}

/// A possibly incomplete rule specification, as found in a ruleset
///
/// Only specifications carrying both a rule type and patterns produce rules;
/// anything else is skipped when the ruleset is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec<P> {
    pub rule_type: Option<RuleType>,
    pub patterns: Option<Patterns<P>>,
}

impl<P> RuleSpec<P> {
    /// A complete specification
    pub fn new(rule_type: impl Into<RuleType>, patterns: impl Into<Patterns<P>>) -> Self {
        Self {
            rule_type: Some(rule_type.into()),
            patterns: Some(patterns.into()),
        }
    }

    /// A specification with a rule type but no pattern
    pub fn type_only(rule_type: impl Into<RuleType>) -> Self {
        Self {
            rule_type: Some(rule_type.into()),
            patterns: None,
        }
    }

    /// A specification with a pattern but no rule type
    pub fn pattern_only(patterns: impl Into<Patterns<P>>) -> Self {
        Self {
            rule_type: None,
            patterns: Some(patterns.into()),
        }
    }

    /// True when both elements are present
    pub fn is_complete(&self) -> bool {
        self.rule_type.is_some() && self.patterns.is_some()
    }

    /// Splits a complete specification into its parts
    pub fn into_parts(self) -> Option<(RuleType, Patterns<P>)> {
        Some((self.rule_type?, self.patterns?))
    }
}

impl<P> Default for RuleSpec<P> {
    fn default() -> Self {
        Self {
            rule_type: None,
            patterns: None,
        }
    }
}

impl<P, T, Q> From<(T, Q)> for RuleSpec<P>
where
    T: Into<RuleType>,
    Q: Into<Patterns<P>>,
{
    fn from((rule_type, patterns): (T, Q)) -> Self {
        RuleSpec::new(rule_type, patterns)
    }
}
