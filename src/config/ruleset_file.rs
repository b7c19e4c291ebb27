//! Reading rulesets from JSON and TOML files
//!
//! A ruleset file holds a sequence of rule specifications. In JSON the
//! document is the sequence itself:
//!
//! ```json
//! [["startsWith", "/api"], ["regex", ["^/v\\d+/", "\\.php$"]]]
//! ```
//!
//! TOML has no top-level arrays, so the sequence lives under `rules`, either
//! positionally or as an array of tables:
//!
//! ```toml
//! rules = [["startsWith", "/api"]]
//!
//! # or
//! [[rules]]
//! type = "contains"
//! pattern = "admin"
//! ```
//!
//! Entries are decoded leniently: anything that is not a usable
//! `[type, pattern]` pair becomes an incomplete specification, which the
//! matcher skips.

use crate::error::RulesetError;
use crate::logging::debug;
use crate::rules::RuleSpec;
use crate::types::{Patterns, RuleType};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Key holding the rule sequence in TOML rulesets
const TOML_RULES_KEY: &str = "rules";

/// Serialization format of a ruleset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesetFormat {
    Json,
    Toml,
}

impl RulesetFormat {
    /// Pick the format from the file extension
    ///
    /// `.toml` selects TOML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => RulesetFormat::Toml,
            _ => RulesetFormat::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RulesetFormat::Json => "json",
            RulesetFormat::Toml => "toml",
        }
    }
}

/// The raw entries of a parsed ruleset file
#[derive(Debug, Clone)]
pub struct RulesetFile {
    path: PathBuf,
    format: RulesetFormat,
    entries: Vec<Value>,
}

impl RulesetFile {
    /// Read and parse a ruleset file
    ///
    /// # Errors
    ///
    /// Returns `RulesetError::NotFound` if the file cannot be read, and
    /// `RulesetError::InvalidFormat` if it is not valid UTF-8, fails to parse,
    /// or does not hold a sequence.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulesetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                RulesetError::invalid_format(path, format!("File is not valid UTF-8: {}", e))
            }
            _ => RulesetError::NotFound {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let file = Self::parse(&content, RulesetFormat::from_path(path), path)?;
        debug!(
            path = %path.display(),
            format = file.format.as_str(),
            entries = file.entries.len(),
            "loaded ruleset file"
        );
        Ok(file)
    }

    /// Parse ruleset content in the given format
    ///
    /// `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns `RulesetError::InvalidFormat` if the content fails to parse or
    /// does not hold a sequence.
    pub fn parse(
        content: &str,
        format: RulesetFormat,
        path: impl AsRef<Path>,
    ) -> Result<Self, RulesetError> {
        let path = path.as_ref();
        let document = match format {
            RulesetFormat::Json => serde_json::from_str::<Value>(content).map_err(|e| {
                RulesetError::invalid_format(path, format!("Failed to parse JSON: {}", e))
            })?,
            RulesetFormat::Toml => parse_toml_rules(content, path)?,
        };

        let entries = match document {
            Value::Array(entries) => entries,
            other => {
                return Err(RulesetError::invalid_format(
                    path,
                    format!("Expected a sequence of rules, found {}", describe(&other)),
                ));
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            format,
            entries,
        })
    }

    /// Path the ruleset was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> RulesetFormat {
        self.format
    }

    /// Raw entries, in file order
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    /// Decode every entry into a rule specification
    ///
    /// One specification is produced per entry, complete or not, so the
    /// skipping decision stays with the matcher.
    pub fn into_specs<P: DeserializeOwned>(self) -> Vec<RuleSpec<P>> {
        self.entries.into_iter().map(spec_from_entry).collect()
    }
}

/// Extract the `rules` array from a TOML document as JSON
fn parse_toml_rules(content: &str, path: &Path) -> Result<Value, RulesetError> {
    let mut table: toml::Table = toml::from_str(content)
        .map_err(|e| RulesetError::invalid_format(path, format!("Failed to parse TOML: {}", e)))?;

    let rules = table.remove(TOML_RULES_KEY).ok_or_else(|| {
        RulesetError::invalid_format(
            path,
            format!("Missing top-level '{}' array", TOML_RULES_KEY),
        )
    })?;

    serde_json::to_value(rules).map_err(|e| {
        RulesetError::invalid_format(path, format!("Unsupported TOML value: {}", e))
    })
}

/// Decode one entry, positional `[type, pattern]` or keyed `{type, pattern}`
fn spec_from_entry<P: DeserializeOwned>(entry: Value) -> RuleSpec<P> {
    let (rule_type, pattern) = match entry {
        Value::Array(items) => {
            let mut items = items.into_iter();
            (items.next(), items.next())
        }
        Value::Object(mut map) => (map.remove("type"), map.remove("pattern")),
        _ => (None, None),
    };

    let rule_type = match rule_type {
        Some(Value::String(name)) => Some(RuleType::from(name)),
        _ => None,
    };

    let patterns = pattern
        .filter(|value| !value.is_null())
        .and_then(|value| Patterns::<P>::deserialize(value).ok());

    RuleSpec {
        rule_type,
        patterns,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
