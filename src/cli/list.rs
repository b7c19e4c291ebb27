//! List command implementation
//!
//! This module implements the `rulematch list` command, which shows the
//! expanded rules in evaluation order and the registered rule types, marking
//! rules whose type has no handler.

use crate::cli::args::{OutputFormat, RuleSources};
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, build_matcher};
use crate::error::Error;
use crate::output::{RuleListing, RuleListingHumanFormatter, RuleListingJsonlFormatter};

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
pub fn run_list(sources: &RuleSources, format: OutputFormat) -> i32 {
    match run_list_inner(sources, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_list_inner(sources: &RuleSources, format: OutputFormat) -> Result<(), Error> {
    let matcher = build_matcher(sources)?;
    let listing = RuleListing::from_matcher(&matcher);

    match format {
        OutputFormat::Human => RuleListingHumanFormatter::new().write_to_stdout(&listing),
        OutputFormat::Jsonl => RuleListingJsonlFormatter::new().write_to_stdout(&listing),
    }

    Ok(())
}
