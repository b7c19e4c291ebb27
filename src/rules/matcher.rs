#![forbid(unsafe_code)]

//! Generic rule registry and evaluation engine
//!
//! The Matcher is responsible for:
//! - Keeping rules in insertion order, one pattern per stored rule
//! - Binding rule type names to handler predicates
//! - Bulk-adding rulesets, skipping incomplete specifications
//! - Evaluating a value against every rule until one matches

use crate::config::RulesetFile;
use crate::error::RulesetError;
use crate::logging::{debug, trace};
use crate::rules::{Handler, Rule, RuleSpec};
use crate::types::{Patterns, RuleType};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Ordered rule list plus the rule type registry
///
/// `V` is the type of the values being matched and `P` the pattern type
/// stored with each rule. Handlers are looked up by name every time a value
/// is evaluated, so registering a handler affects rules that were added
/// before it as well as those added after.
pub struct Matcher<V: ?Sized, P> {
    rules: Vec<Rule<P>>,
    handlers: HashMap<RuleType, Handler<V, P>>,
}

impl<V: ?Sized, P> Matcher<V, P> {
    /// Create a matcher with no rules and no rule types
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Add one rule per pattern
    ///
    /// A sequence of patterns is expanded into individual rules in order.
    /// The rule type does not need to be registered yet; until it is, the
    /// rules are inert.
    pub fn add_rule(&mut self, rule_type: impl Into<RuleType>, patterns: impl Into<Patterns<P>>) {
        let rule_type = rule_type.into();
        let patterns = patterns.into();

        if !self.handlers.contains_key(&rule_type) {
            trace!(rule_type = %rule_type, "adding rules for unregistered rule type");
        }

        self.rules.reserve(patterns.len());
        for pattern in patterns {
            self.rules.push(Rule::new(&rule_type, pattern));
        }
    }

    /// Add every complete specification in a ruleset
    ///
    /// Specifications missing a rule type or a pattern are skipped silently.
    pub fn add_ruleset<I, S>(&mut self, ruleset: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<RuleSpec<P>>,
    {
        for (index, spec) in ruleset.into_iter().enumerate() {
            match spec.into().into_parts() {
                Some((rule_type, patterns)) => self.add_rule(rule_type, patterns),
                None => {
                    debug!(index, "skipping incomplete rule specification");
                }
            }
        }
    }

    /// Bind a handler to a rule type, replacing any previous handler
    pub fn register_rule_type<F>(&mut self, rule_type: impl Into<RuleType>, handler: F)
    where
        F: Fn(&V, &P) -> bool + Send + Sync + 'static,
    {
        let rule_type = rule_type.into();
        if self.handlers.insert(rule_type.clone(), Box::new(handler)).is_some() {
            debug!(rule_type = %rule_type, "replaced rule type handler");
        }
    }

    /// Check whether any rule matches the value
    pub fn matches(&self, value: &V) -> bool {
        self.matching_rule(value).is_some()
    }

    /// Find the first rule, in insertion order, that matches the value
    ///
    /// Rules whose type has no handler never match.
    pub fn matching_rule(&self, value: &V) -> Option<&Rule<P>> {
        self.rules.iter().find(|rule| {
            match self.handlers.get(rule.rule_type().as_str()) {
                Some(handler) => handler(value, rule.pattern()),
                None => {
                    trace!(rule_type = %rule.rule_type(), "no handler bound, rule is inert");
                    false
                }
            }
        })
    }

    /// Check whether a handler is bound to the rule type
    pub fn has_rule_type(&self, rule_type: &str) -> bool {
        self.handlers.contains_key(rule_type)
    }

    /// Names of all registered rule types, sorted
    pub fn rule_types(&self) -> Vec<&RuleType> {
        let mut names: Vec<&RuleType> = self.handlers.keys().collect();
        names.sort();
        names
    }

    /// Iterate over stored rules in evaluation order
    pub fn rules(&self) -> impl Iterator<Item = &Rule<P>> {
        self.rules.iter()
    }

    /// Remove every rule, keeping registered rule types
    pub fn clear_rules(&mut self) {
        self.rules.clear();
    }

    /// Get the number of stored rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the matcher holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<V: ?Sized, P: DeserializeOwned> Matcher<V, P> {
    /// Load a ruleset file and add its rules
    ///
    /// # Errors
    ///
    /// Returns `RulesetError::NotFound` if the path is not a readable file and
    /// `RulesetError::InvalidFormat` if it does not hold a sequence of rules.
    /// Individual malformed entries are skipped, not reported.
    pub fn load_ruleset_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), RulesetError> {
        let file = RulesetFile::load(path)?;
        self.add_ruleset(file.into_specs::<P>());
        Ok(())
    }
}

impl<V: ?Sized, P> Default for Matcher<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized, P: fmt::Debug> fmt::Debug for Matcher<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("rules", &self.rules)
            .field("rule_types", &self.rule_types())
            .finish()
    }
}
