//! yangdiff core - YANG module-tree comparison and compatibility classification
//!
//! This crate provides:
//! - An arena-backed, read-only statement model loaded from YAML or JSON trees
//! - A declarative compatibility rule table with a shared, reloadable handle
//! - Node matching, per-keyword change detection and tree roll-up
//! - Text and JSON report projection of comparison results
//!
//! ```
//! use yangdiff_core::{
//!     ComparatorRegistry, CompareType, ModuleSetDoc, RuleTable, SchemaContext, StatementDoc as S,
//!     YangComparator,
//! };
//!
//! let module = |max: &str| {
//!     ModuleSetDoc::new([S::new("module").arg("acme").children([
//!         S::simple("namespace", "urn:acme"),
//!         S::simple("prefix", "a"),
//!         S::new("leaf-list").arg("dns").children([
//!             S::simple("type", "string"),
//!             S::simple("max-elements", max),
//!         ]),
//!     ])])
//! };
//! let left = SchemaContext::from_doc(&module("10")).unwrap();
//! let right = SchemaContext::from_doc(&module("5")).unwrap();
//!
//! let results = YangComparator::new(&left, &right).compare(
//!     CompareType::Tree,
//!     &RuleTable::new(),
//!     &ComparatorRegistry::standard(),
//! );
//! assert_eq!(yangdiff_core::render::overall_verdict(&results).name(), "nbc");
//! ```

pub mod compare;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod rules;

// Used by the logging macros
pub use yangdiff_core_types;

pub use compare::{
    ChangeCondition, ChangeType, ComparatorKind, ComparatorRegistry, CompareEngine, CompareResult,
    CompareType, Compatibility, CompatibilityInfo, StatementResult, TraversalMode, TreeResult,
    YangComparator,
};
pub use errors::{ExError, ExErrorKind, Result, YangDiffError};
pub use model::{ModuleSetDoc, NodeRef, SchemaContext, StatementDoc};
pub use render::{render_text, ComparisonReport};
pub use rules::{CompatibilityRule, RuleTable, SharedRuleTable};
