#![forbid(unsafe_code)]

//! String specialization of the matcher
//!
//! `StringMatcher` wraps a `Matcher<str, String>` preloaded with the built-in
//! string rule types, and accepts any `MatchInput` as the candidate value.
//! Inputs that are not strings never match.

use crate::error::RulesetError;
use crate::rules::builtin::{self, BUILTIN_RULE_TYPES};
use crate::rules::{Matcher, Rule, RuleSpec};
use crate::types::{Patterns, RuleType};
use std::borrow::Cow;
use std::path::Path;

/// A candidate value that may or may not be a string
pub trait MatchInput {
    /// The string form of the value, or None when the value is not a string
    fn as_match_str(&self) -> Option<&str>;
}

impl MatchInput for str {
    fn as_match_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl MatchInput for String {
    fn as_match_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl MatchInput for Cow<'_, str> {
    fn as_match_str(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl MatchInput for serde_json::Value {
    fn as_match_str(&self) -> Option<&str> {
        self.as_str()
    }
}

impl<T: MatchInput> MatchInput for Option<T> {
    fn as_match_str(&self) -> Option<&str> {
        self.as_ref().and_then(MatchInput::as_match_str)
    }
}

impl<T: MatchInput + ?Sized> MatchInput for &T {
    fn as_match_str(&self) -> Option<&str> {
        (**self).as_match_str()
    }
}

impl<T: MatchInput + ?Sized> MatchInput for Box<T> {
    fn as_match_str(&self) -> Option<&str> {
        (**self).as_match_str()
    }
}

macro_rules! not_a_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MatchInput for $ty {
                fn as_match_str(&self) -> Option<&str> {
                    None
                }
            }
        )*
    };
}

not_a_string!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T> MatchInput for [T] {
    fn as_match_str(&self) -> Option<&str> {
        None
    }
}

impl<T> MatchInput for Vec<T> {
    fn as_match_str(&self) -> Option<&str> {
        None
    }
}

/// Matcher over string values with `startsWith`, `contains` and `regex`
/// installed
///
/// The built-in rule types can be replaced with `register_rule_type`; the
/// replacement then applies to every rule of that type.
#[derive(Debug)]
pub struct StringMatcher {
    inner: Matcher<str, String>,
}

impl StringMatcher {
    /// Create a matcher with the built-in rule types and no rules
    pub fn new() -> Self {
        let mut inner = Matcher::new();
        inner.register_rule_type(builtin::STARTS_WITH, |v: &str, p: &String| {
            builtin::starts_with(v, p)
        });
        inner.register_rule_type(builtin::CONTAINS, |v: &str, p: &String| {
            builtin::contains(v, p)
        });
        inner.register_rule_type(builtin::REGEX, |v: &str, p: &String| builtin::regex(v, p));
        Self { inner }
    }

    /// Names of the rule types installed at construction
    pub fn builtin_rule_types() -> &'static [&'static str] {
        &BUILTIN_RULE_TYPES
    }

    /// Add one rule per pattern; see [`Matcher::add_rule`]
    pub fn add_rule(
        &mut self,
        rule_type: impl Into<RuleType>,
        patterns: impl Into<Patterns<String>>,
    ) {
        self.inner.add_rule(rule_type, patterns);
    }

    /// Add every complete specification; see [`Matcher::add_ruleset`]
    pub fn add_ruleset<I, S>(&mut self, ruleset: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<RuleSpec<String>>,
    {
        self.inner.add_ruleset(ruleset);
    }

    /// Load a ruleset file; see [`Matcher::load_ruleset_from_file`]
    ///
    /// # Errors
    ///
    /// Returns `RulesetError::NotFound` or `RulesetError::InvalidFormat`.
    pub fn load_ruleset_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), RulesetError> {
        self.inner.load_ruleset_from_file(path)
    }

    /// Bind a handler to a rule type, replacing any previous handler
    pub fn register_rule_type<F>(&mut self, rule_type: impl Into<RuleType>, handler: F)
    where
        F: Fn(&str, &String) -> bool + Send + Sync + 'static,
    {
        self.inner.register_rule_type(rule_type, handler);
    }

    /// Check whether any rule matches the value
    ///
    /// Values that are not strings return false without consulting any rule.
    pub fn matches<T: MatchInput + ?Sized>(&self, value: &T) -> bool {
        self.matching_rule(value).is_some()
    }

    /// Find the first rule that matches the value
    pub fn matching_rule<T: MatchInput + ?Sized>(&self, value: &T) -> Option<&Rule<String>> {
        let value = value.as_match_str()?;
        self.inner.matching_rule(value)
    }

    /// Check whether a handler is bound to the rule type
    pub fn has_rule_type(&self, rule_type: &str) -> bool {
        self.inner.has_rule_type(rule_type)
    }

    /// Names of all registered rule types, sorted
    pub fn rule_types(&self) -> Vec<&RuleType> {
        self.inner.rule_types()
    }

    /// Iterate over stored rules in evaluation order
    pub fn rules(&self) -> impl Iterator<Item = &Rule<String>> {
        self.inner.rules()
    }

    /// Remove every rule, keeping registered rule types
    pub fn clear_rules(&mut self) {
        self.inner.clear_rules();
    }

    /// Get the number of stored rules
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the matcher holds no rules
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The underlying generic matcher
    pub fn as_matcher(&self) -> &Matcher<str, String> {
        &self.inner
    }
}

impl Default for StringMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_matcher() -> StringMatcher {
        let mut matcher = StringMatcher::new();
        matcher.add_rule("startsWith", "/api");
        matcher.add_rule("contains", "admin");
        matcher
    }

    #[test]
    fn test_builtins_installed() {
        let matcher = StringMatcher::new();
        for name in StringMatcher::builtin_rule_types() {
            assert!(matcher.has_rule_type(name), "missing builtin {}", name);
        }
        assert!(matcher.is_empty());
    }

    #[test]
    fn test_prefix_and_substring_rules() {
        let matcher = api_matcher();
        assert!(matcher.matches("/api/x"));
        assert!(matcher.matches("/x/admin/y"));
        assert!(!matcher.matches("/x"));
    }

    #[test]
    fn test_regex_rule() {
        let mut matcher = StringMatcher::new();
        matcher.add_rule("regex", r"^/users/\d+$");

        assert!(matcher.matches("/users/12"));
        assert!(!matcher.matches("/users/me"));
    }

    #[test]
    fn test_non_string_never_matches() {
        let mut matcher = StringMatcher::new();
        matcher.add_rule("regex", ".*");
        matcher.register_rule_type("always", |_: &str, _: &String| true);
        matcher.add_rule("always", "x");

        assert!(!matcher.matches(&42));
        assert!(!matcher.matches(&true));
        assert!(!matcher.matches(&3.5));
        assert!(!matcher.matches(&vec!["a", "b"]));
        assert!(!matcher.matches(&None::<String>));
        assert!(matcher.matching_rule(&42u8).is_none());
    }

    #[test]
    fn test_json_values() {
        let matcher = api_matcher();
        assert!(matcher.matches(&json!("/api/users")));
        assert!(!matcher.matches(&json!(42)));
        assert!(!matcher.matches(&json!(null)));
        assert!(!matcher.matches(&json!(["/api"])));
        assert!(!matcher.matches(&json!({"path": "/api"})));
    }

    #[test]
    fn test_string_like_inputs() {
        let matcher = api_matcher();
        assert!(matcher.matches(&String::from("/api")));
        assert!(matcher.matches(&Cow::Borrowed("/api")));
        assert!(matcher.matches(&Some("/admin")));
        assert!(matcher.matches(&Box::<str>::from("/api")));
    }

    #[test]
    fn test_override_builtin() {
        let mut matcher = StringMatcher::new();
        matcher.add_rule("startsWith", "/API");
        assert!(!matcher.matches("/api/x"));

        matcher.register_rule_type("startsWith", |v: &str, p: &String| {
            v.to_lowercase().starts_with(&p.to_lowercase())
        });
        assert!(matcher.matches("/api/x"));

        matcher.add_rule("startsWith", "/V2");
        assert!(matcher.matches("/v2/x"));
    }

    #[test]
    fn test_expanded_patterns_equal_individual_adds() {
        let mut expanded = StringMatcher::new();
        expanded.add_rule("contains", vec!["a", "b", "c"]);

        let mut individual = StringMatcher::new();
        individual.add_rule("contains", "a");
        individual.add_rule("contains", "b");
        individual.add_rule("contains", "c");

        assert_eq!(expanded.len(), individual.len());
        let left: Vec<&Rule<String>> = expanded.rules().collect();
        let right: Vec<&Rule<String>> = individual.rules().collect();
        assert_eq!(left, right);

        for probe in ["a", "xbx", "zzz", "", "c"] {
            assert_eq!(expanded.matches(probe), individual.matches(probe));
        }
    }

    #[test]
    fn test_matching_rule_reports_rule() {
        let matcher = api_matcher();
        let rule = matcher.matching_rule("/x/admin").unwrap();
        assert_eq!(rule.rule_type().as_str(), "contains");
        assert_eq!(rule.pattern(), "admin");
    }

    #[test]
    fn test_as_matcher() {
        let matcher = api_matcher();
        assert_eq!(matcher.as_matcher().len(), 2);
        assert!(matcher.as_matcher().matches("/api"));
    }
}
