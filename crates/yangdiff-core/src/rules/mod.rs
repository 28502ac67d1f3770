//! Compatibility rules: declarative source, ordered table, shared handle

pub mod rule;
pub mod source;
pub mod table;

pub use rule::CompatibilityRule;
pub use source::{RuleDoc, RuleFormat, RuleSetDoc};
pub use table::{load_rules_from_path, load_rules_from_str, RuleTable, SharedRuleTable};
