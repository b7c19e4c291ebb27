#![forbid(unsafe_code)]

//! Built-in string rule types
//!
//! Three handlers are installed into every `StringMatcher`:
//! - `startsWith`: literal prefix
//! - `contains`: literal substring
//! - `regex`: regular expression with at least one match in the value

use crate::logging::debug;
use regex::Regex;

/// Rule type name for prefix matching
pub const STARTS_WITH: &str = "startsWith";

/// Rule type name for substring matching
pub const CONTAINS: &str = "contains";

/// Rule type name for regular expression matching
pub const REGEX: &str = "regex";

/// All built-in rule type names, in installation order
pub const BUILTIN_RULE_TYPES: [&str; 3] = [STARTS_WITH, CONTAINS, REGEX];

/// True if `value` begins with `pattern`
///
/// An empty pattern matches every value.
pub fn starts_with(value: &str, pattern: &str) -> bool {
    value.starts_with(pattern)
}

/// True if `pattern` occurs anywhere in `value`
///
/// An empty pattern matches every value.
pub fn contains(value: &str, pattern: &str) -> bool {
    value.contains(pattern)
}

/// True if the regular expression `pattern` matches somewhere in `value`
///
/// Patterns use the `regex` crate syntax; flags are written inline, e.g.
/// `(?i)admin`. The pattern is compiled on every call. A pattern that fails
/// to compile never matches.
pub fn regex(value: &str, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(value),
        Err(e) => {
            debug!(pattern, error = %e, "invalid regex pattern never matches");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with() {
        assert!(starts_with("/api/users", "/api"));
        assert!(starts_with("/api", "/api"));
        assert!(!starts_with("/v1/api", "/api"));
        assert!(!starts_with("/ap", "/api"));
    }

    #[test]
    fn test_starts_with_empty() {
        assert!(starts_with("anything", ""));
        assert!(starts_with("", ""));
        assert!(!starts_with("", "x"));
    }

    #[test]
    fn test_contains() {
        assert!(contains("/x/admin/y", "admin"));
        assert!(contains("admin", "admin"));
        assert!(contains("admin/x", "admin"));
        assert!(!contains("/x/adm/in", "admin"));
    }

    #[test]
    fn test_contains_empty() {
        assert!(contains("abc", ""));
        assert!(contains("", ""));
        assert!(!contains("", "a"));
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        assert!(!contains("/ADMIN", "admin"));
    }

    #[test]
    fn test_regex_unanchored() {
        assert!(regex("/users/42/profile", r"/\d+/"));
        assert!(!regex("/users/me/profile", r"/\d+/"));
    }

    #[test]
    fn test_regex_anchors() {
        assert!(regex("/api/v1", r"^/api"));
        assert!(!regex("/v1/api", r"^/api"));
        assert!(regex("image.png", r"\.png$"));
    }

    #[test]
    fn test_regex_inline_flags() {
        assert!(regex("/ADMIN", "(?i)admin"));
        assert!(!regex("/ADMIN", "admin"));
    }

    #[test]
    fn test_regex_empty_value() {
        assert!(regex("", "^$"));
        assert!(!regex("", "a"));
    }

    #[test]
    fn test_invalid_regex_never_matches() {
        assert!(!regex("(((", "((("));
        assert!(!regex("abc", "[unclosed"));
    }

    #[test]
    fn test_builtin_names() {
        assert_eq!(BUILTIN_RULE_TYPES, ["startsWith", "contains", "regex"]);
    }
}
