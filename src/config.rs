//! Ruleset file parsing

pub mod ruleset_file;

pub use ruleset_file::{RulesetFile, RulesetFormat};
