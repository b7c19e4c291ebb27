//! Check command implementation
//!
//! This module implements the `rulematch check` command, which:
//! - Builds a string matcher from ruleset files and inline rules
//! - Evaluates each value, reporting the first matching rule
//! - Exits non-zero when any value matched no rule

use crate::cli::args::{ColorChoice, OutputFormat, RuleSources};
use crate::cli::common::{EXIT_ERROR, EXIT_NO_MATCH, EXIT_SUCCESS, build_matcher, resolve_color};
use crate::error::Error;
use crate::output::{CheckHumanFormatter, CheckJsonlFormatter, CheckOutcome};
use crate::rules::StringMatcher;
use serde_json::Value;
use std::io::{self, BufRead};

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: Every value matched
/// - 1: At least one value matched no rule
/// - 2: Error
pub fn run_check(
    values: &[String],
    sources: &RuleSources,
    json: bool,
    format: OutputFormat,
    color: ColorChoice,
) -> i32 {
    match run_check_inner(values, sources, json, format, color) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_NO_MATCH,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of check command; returns whether all values matched
fn run_check_inner(
    values: &[String],
    sources: &RuleSources,
    json: bool,
    format: OutputFormat,
    color: ColorChoice,
) -> Result<bool, Error> {
    let matcher = build_matcher(sources)?;

    let values = if values.is_empty() {
        read_stdin_values()?
    } else {
        values.to_vec()
    };

    let outcomes: Vec<CheckOutcome> = values
        .into_iter()
        .map(|raw| evaluate(&matcher, to_input(raw, json)))
        .collect();

    match format {
        OutputFormat::Human => {
            CheckHumanFormatter::new().write_to_stdout(&outcomes, resolve_color(color))?;
        }
        OutputFormat::Jsonl => CheckJsonlFormatter::new().write_to_stdout(&outcomes),
    }

    Ok(outcomes.iter().all(|o| o.matched))
}

/// Read values from stdin, one per line
fn read_stdin_values() -> Result<Vec<String>, Error> {
    let stdin = io::stdin();
    let mut values = Vec::new();
    for line in stdin.lock().lines() {
        values.push(line?);
    }
    Ok(values)
}

/// Turn a raw argument into the value to match
///
/// With `json`, the argument is parsed as JSON; text that is not valid JSON
/// is kept as a plain string.
fn to_input(raw: String, json: bool) -> Value {
    if json {
        serde_json::from_str(&raw).unwrap_or(Value::String(raw))
    } else {
        Value::String(raw)
    }
}

fn evaluate(matcher: &StringMatcher, value: Value) -> CheckOutcome {
    let rule = matcher.matching_rule(&value);
    CheckOutcome {
        matched: rule.is_some(),
        rule_type: rule.map(|r| r.rule_type().to_string()),
        pattern: rule.map(|r| r.pattern().clone()),
        value,
    }
}
