//! CLI argument parsing using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for rulematch commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// rulematch CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "rulematch")]
#[command(about = "Match values against prefix, substring and regex rulesets")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Log ruleset loading and rule evaluation to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Where rules come from: ruleset files first, then inline rules
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSources {
    /// Ruleset file to load (JSON, or TOML with a `rules` array)
    #[arg(short = 'r', long = "ruleset", value_name = "FILE")]
    pub rulesets: Vec<PathBuf>,

    /// Inline rule, e.g. --rule startsWith=/api
    #[arg(long = "rule", value_name = "TYPE=PATTERN")]
    pub rules: Vec<String>,
}

/// Available rulematch subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether values match any rule
    Check {
        /// Values to check (read from stdin, one per line, when omitted)
        values: Vec<String>,

        #[command(flatten)]
        sources: RuleSources,

        /// Parse each value as JSON; non-string values never match
        #[arg(long)]
        json: bool,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// List loaded rules in evaluation order
    List {
        #[command(flatten)]
        sources: RuleSources,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}
