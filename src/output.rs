//! Output formatters (human and JSONL)

pub mod check_report;
pub mod rule_listing;

pub use check_report::{CheckHumanFormatter, CheckJsonlFormatter, CheckOutcome};
pub use rule_listing::{
    RuleEntry, RuleListing, RuleListingHumanFormatter, RuleListingJsonlFormatter,
};
