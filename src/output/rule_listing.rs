#![forbid(unsafe_code)]

//! Formatters for `rulematch list`

use crate::rules::StringMatcher;
use serde::Serialize;

/// One stored rule as shown by `rulematch list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleEntry {
    /// Position in evaluation order, starting at 1
    pub position: usize,
    pub rule_type: String,
    pub pattern: String,
    /// False when no handler is bound to the rule type
    pub active: bool,
}

/// Snapshot of a matcher's rules and registered rule types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleListing {
    pub rules: Vec<RuleEntry>,
    pub rule_types: Vec<String>,
}

impl RuleListing {
    pub fn from_matcher(matcher: &StringMatcher) -> Self {
        let rules = matcher
            .rules()
            .enumerate()
            .map(|(index, rule)| RuleEntry {
                position: index + 1,
                rule_type: rule.rule_type().to_string(),
                pattern: rule.pattern().clone(),
                active: matcher.has_rule_type(rule.rule_type().as_str()),
            })
            .collect();

        let rule_types = matcher
            .rule_types()
            .into_iter()
            .map(|t| t.to_string())
            .collect();

        Self { rules, rule_types }
    }
}

/// Human-readable formatter for rule listings
pub struct RuleListingHumanFormatter;

impl RuleListingHumanFormatter {
    pub fn new() -> Self {
        RuleListingHumanFormatter
    }

    pub fn format(&self, listing: &RuleListing) -> String {
        let mut output = String::new();

        output.push_str(&format!("Rule types: {}\n", listing.rule_types.join(", ")));
        output.push('\n');

        if listing.rules.is_empty() {
            output.push_str("No rules loaded.\n");
            return output;
        }

        output.push_str(&format!("Rules ({} in evaluation order):\n", listing.rules.len()));
        for entry in &listing.rules {
            output.push_str(&format!(
                "  {:>3}. {} {:?}",
                entry.position, entry.rule_type, entry.pattern
            ));
            if !entry.active {
                output.push_str("  [inert: no handler]");
            }
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, listing: &RuleListing) {
        print!("{}", self.format(listing));
    }
}

impl Default for RuleListingHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL formatter for rule listings, one record per rule
pub struct RuleListingJsonlFormatter;

impl RuleListingJsonlFormatter {
    pub fn new() -> Self {
        RuleListingJsonlFormatter
    }

    pub fn format(&self, listing: &RuleListing) -> String {
        let mut output = String::new();
        for entry in &listing.rules {
            if let Ok(json) = serde_json::to_string(entry) {
                output.push_str(&json);
                output.push('\n');
            }
        }
        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, listing: &RuleListing) {
        print!("{}", self.format(listing));
    }
}

impl Default for RuleListingJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
