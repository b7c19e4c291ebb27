//! Common helper functions shared across CLI commands
//!
//! This module provides exit codes, logging setup and construction of the
//! string matcher from ruleset files and inline rules.

use crate::cli::args::{ColorChoice, RuleSources};
use crate::error::Error;
use crate::rules::StringMatcher;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Every value matched (check) or the command succeeded (list)
pub const EXIT_SUCCESS: i32 = 0;
/// At least one value matched no rule
pub const EXIT_NO_MATCH: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Default log filter when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "rulematch=debug";

/// Install a stderr log subscriber when verbose output is requested
pub fn init_logging(verbose: bool) {
    if !verbose {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed when running inside tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve the color choice against the current stdout
pub(crate) fn resolve_color(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}

/// Split an inline rule of the form TYPE=PATTERN
///
/// Only the first `=` separates; the pattern may contain further `=`.
///
/// # Errors
///
/// Returns `Error::InvalidRuleArg` if there is no `=`.
pub(crate) fn parse_rule_arg(arg: &str) -> Result<(&str, &str), Error> {
    arg.split_once('=')
        .ok_or_else(|| Error::InvalidRuleArg(arg.to_string()))
}

/// Build a string matcher from ruleset files, then inline rules
///
/// # Errors
///
/// Returns `Error::Ruleset` if a ruleset file is missing or malformed, and
/// `Error::InvalidRuleArg` for an inline rule without `=`.
pub(crate) fn build_matcher(sources: &RuleSources) -> Result<StringMatcher, Error> {
    let mut matcher = StringMatcher::new();

    for path in &sources.rulesets {
        matcher.load_ruleset_from_file(path)?;
    }

    for arg in &sources.rules {
        let (rule_type, pattern) = parse_rule_arg(arg)?;
        matcher.add_rule(rule_type, pattern);
    }

    Ok(matcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_parse_rule_arg() {
        assert_eq!(parse_rule_arg("startsWith=/api").unwrap(), ("startsWith", "/api"));
        assert_eq!(parse_rule_arg("regex=a=b").unwrap(), ("regex", "a=b"));
        assert_eq!(parse_rule_arg("contains=").unwrap(), ("contains", ""));
    }

    #[test]
    fn test_parse_rule_arg_missing_separator() {
        let err = parse_rule_arg("startsWith").unwrap_err();
        assert!(matches!(err, Error::InvalidRuleArg(_)));
    }

    #[test]
    fn test_build_matcher_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rules.json");
        fs::write(&path, r#"[["startsWith", "/api"]]"#).unwrap();

        let sources = RuleSources {
            rulesets: vec![path],
            rules: vec!["contains=admin".to_string()],
        };
        let matcher = build_matcher(&sources).unwrap();

        let types: Vec<&str> = matcher.rules().map(|r| r.rule_type().as_str()).collect();
        assert_eq!(types, vec!["startsWith", "contains"]);
    }

    #[test]
    fn test_build_matcher_missing_ruleset() {
        let sources = RuleSources {
            rulesets: vec![PathBuf::from("/nonexistent/rules.json")],
            rules: vec![],
        };
        let err = build_matcher(&sources).unwrap_err();
        assert!(matches!(err, Error::Ruleset(ref e) if e.is_not_found()));
    }

    #[test]
    fn test_resolve_color_explicit() {
        assert_eq!(
            resolve_color(ColorChoice::Always),
            termcolor::ColorChoice::Always
        );
        assert_eq!(
            resolve_color(ColorChoice::Never),
            termcolor::ColorChoice::Never
        );
    }
}
