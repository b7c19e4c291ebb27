//! Error types for rulematch
//!
//! Loading a ruleset from disk is the only fallible library operation, so the
//! library surface is a single `RulesetError`. The top-level `Error` adds the
//! failures the command-line front end can hit on its own.

use std::path::PathBuf;

/// Errors raised while loading a ruleset file
#[derive(Debug, thiserror::Error)]
pub enum RulesetError {
    /// The path does not reference a readable file
    #[error("Ruleset not found: {}: {}", .path.display(), .source)]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be parsed, or did not resolve to a sequence of rules
    #[error("Invalid ruleset format in {}: {}", .path.display(), .message)]
    InvalidFormat { path: PathBuf, message: String },
}

impl RulesetError {
    pub(crate) fn invalid_format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        RulesetError::InvalidFormat {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns true for the `NotFound` variant
    pub fn is_not_found(&self) -> bool {
        matches!(self, RulesetError::NotFound { .. })
    }

    /// Returns true for the `InvalidFormat` variant
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, RulesetError::InvalidFormat { .. })
    }
}

/// Top-level error type for rulematch
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Ruleset loading error
    #[error("Ruleset error: {0}")]
    Ruleset(#[from] RulesetError),

    /// A `--rule` argument that is not of the form TYPE=PATTERN
    #[error("Invalid rule argument '{0}': expected TYPE=PATTERN")]
    InvalidRuleArg(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RulesetError::NotFound {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.is_not_found());
        assert!(!err.is_invalid_format());
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = RulesetError::invalid_format("rules.toml", "expected an array");
        assert!(err.is_invalid_format());
        assert_eq!(
            err.to_string(),
            "Invalid ruleset format in rules.toml: expected an array"
        );
    }

    #[test]
    fn test_error_from_ruleset_error() {
        let err: Error = RulesetError::invalid_format("r.json", "bad").into();
        assert!(matches!(err, Error::Ruleset(_)));
        assert!(err.to_string().starts_with("Ruleset error:"));
    }
}
