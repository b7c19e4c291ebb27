#![forbid(unsafe_code)]

//! Formatters for the results of `rulematch check`
//!
//! Human output is one line per value with a coloured ✓/✗ marker. JSONL
//! output is one record per value.

use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

/// Outcome of evaluating one value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    /// The value as evaluated (a JSON string unless `--json` parsed it)
    pub value: Value,
    pub matched: bool,
    /// Rule type of the first matching rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    /// Pattern of the first matching rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl CheckOutcome {
    fn display_value(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Human-readable formatter for check outcomes
pub struct CheckHumanFormatter;

impl CheckHumanFormatter {
    pub fn new() -> Self {
        CheckHumanFormatter
    }

    /// Write outcomes to a colour-capable writer
    pub fn write(&self, out: &mut dyn WriteColor, outcomes: &[CheckOutcome]) -> io::Result<()> {
        for outcome in outcomes {
            let (icon, color) = if outcome.matched {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Red)
            };

            out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
            write!(out, "{}", icon)?;
            out.reset()?;
            write!(out, " {}", outcome.display_value())?;

            match (&outcome.rule_type, &outcome.pattern) {
                (Some(rule_type), Some(pattern)) => {
                    writeln!(out, "  ({} {:?})", rule_type, pattern)?;
                }
                _ => writeln!(out)?,
            }
        }

        let matched = outcomes.iter().filter(|o| o.matched).count();
        writeln!(out)?;
        writeln!(out, "{} of {} values matched", matched, outcomes.len())?;
        Ok(())
    }

    /// Format outcomes as plain text
    pub fn format(&self, outcomes: &[CheckOutcome]) -> String {
        let mut buffer = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail
        let _ = self.write(&mut buffer, outcomes);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, outcomes: &[CheckOutcome], color: ColorChoice) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(color);
        self.write(&mut stdout, outcomes)
    }
}

impl Default for CheckHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL formatter for check outcomes
pub struct CheckJsonlFormatter;

impl CheckJsonlFormatter {
    pub fn new() -> Self {
        CheckJsonlFormatter
    }

    /// Format outcomes as JSON Lines, one record per value in input order
    pub fn format(&self, outcomes: &[CheckOutcome]) -> String {
        let mut output = String::new();
        for outcome in outcomes {
            if let Ok(json) = serde_json::to_string(outcome) {
                output.push_str(&json);
                output.push('\n');
            }
        }
        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, outcomes: &[CheckOutcome]) {
        print!("{}", self.format(outcomes));
    }
}

impl Default for CheckJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcomes() -> Vec<CheckOutcome> {
        vec![
            CheckOutcome {
                value: json!("/api/x"),
                matched: true,
                rule_type: Some("startsWith".to_string()),
                pattern: Some("/api".to_string()),
            },
            CheckOutcome {
                value: json!(42),
                matched: false,
                rule_type: None,
                pattern: None,
            },
        ]
    }

    #[test]
    fn test_human_format() {
        let output = CheckHumanFormatter::new().format(&outcomes());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "✓ /api/x  (startsWith \"/api\")");
        assert_eq!(lines[1], "✗ 42");
        assert!(output.contains("1 of 2 values matched"));
    }

    #[test]
    fn test_human_format_empty() {
        let output = CheckHumanFormatter::new().format(&[]);
        assert!(output.contains("0 of 0 values matched"));
    }

    #[test]
    fn test_jsonl_format() {
        let output = CheckJsonlFormatter::new().format(&outcomes());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["value"], "/api/x");
        assert_eq!(first["matched"], true);
        assert_eq!(first["rule_type"], "startsWith");
        assert_eq!(first["pattern"], "/api");

        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["value"], 42);
        assert_eq!(second["matched"], false);
        assert!(second.get("rule_type").is_none());
    }
}
