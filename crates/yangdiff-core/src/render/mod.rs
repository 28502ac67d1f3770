//! Report projection of comparison results
//!
//! - `text`: the plain per-module listing
//! - `report`: the structured [`ComparisonReport`] serialized as JSON

pub mod report;
pub mod text;

pub use report::{
    overall_verdict, ComparisonReport, ModuleReport, PathEntry, PathSections, ReportSummary,
    Sections, StatementEntry,
};
pub use text::{group_by_module, render_text};
