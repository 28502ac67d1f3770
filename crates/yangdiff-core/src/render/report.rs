//! Structured comparison report

use crate::compare::{
    ChangeType, Compatibility, CompatibilityInfo, CompareResult, CompareType, StatementResult,
    TreeResult,
};
use crate::errors::{Result, YangDiffError};
use crate::render::text::{group_by_module, origin, reported_side, statement_text};
use serde::Serialize;

/// Worst verdict across all results; BC when there are none
pub fn overall_verdict(results: &[CompareResult<'_>]) -> Compatibility {
    results
        .iter()
        .map(|r| r.verdict())
        .max()
        .unwrap_or(Compatibility::BackwardCompatible)
}

/// Result counts per verdict
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub backward_compatible: usize,
    pub unknown: usize,
    pub non_backward_compatible: usize,
}

impl ReportSummary {
    fn count(results: &[CompareResult<'_>]) -> Self {
        let mut summary = ReportSummary {
            total: results.len(),
            ..Default::default()
        };
        for result in results {
            match result.verdict() {
                Compatibility::BackwardCompatible => summary.backward_compatible += 1,
                Compatibility::Unknown => summary.unknown += 1,
                Compatibility::NonBackwardCompatible => summary.non_backward_compatible += 1,
            }
        }
        summary
    }
}

/// One statement change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementEntry {
    pub statement: String,
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<CompatibilityInfo>,
}

/// One schema node change with the statement changes under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub path: String,
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<CompatibilityInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meta: Vec<StatementEntry>,
}

/// Added, deleted and changed entries of one kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sections<T> {
    pub added: Vec<T>,
    pub deleted: Vec<T>,
    pub changed: Vec<T>,
}

impl<T> Default for Sections<T> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            deleted: Vec::new(),
            changed: Vec::new(),
        }
    }
}

impl<T> Sections<T> {
    fn push(&mut self, change_type: ChangeType, entry: T) {
        match change_type {
            ChangeType::Add => self.added.push(entry),
            ChangeType::Delete => self.deleted.push(entry),
            ChangeType::Modify => self.changed.push(entry),
        }
    }
}

/// Path sections plus the paths whose status moved to obsolete or deprecated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathSections {
    #[serde(flatten)]
    pub sections: Sections<PathEntry>,
    pub obsoleted: Vec<PathEntry>,
    pub deprecated: Vec<PathEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statements: Option<Sections<StatementEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathSections>,
}

/// Serializable projection of one comparison pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    pub compare_type: CompareType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_digest: Option<String>,
    /// Only classified passes carry a verdict
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Compatibility>,
    pub summary: ReportSummary,
    pub modules: Vec<ModuleReport>,
}

impl ComparisonReport {
    pub fn build(
        compare_type: CompareType,
        results: &[CompareResult<'_>],
        rules_digest: Option<String>,
    ) -> Self {
        let with_statements = matches!(compare_type, CompareType::Stmt | CompareType::CompatibleCheck);
        let with_paths = matches!(compare_type, CompareType::Tree | CompareType::CompatibleCheck);
        let with_compat = compare_type == CompareType::CompatibleCheck;

        let mut modules = Vec::new();
        for (name, group) in group_by_module(results) {
            let mut statements = Sections::default();
            let mut paths = PathSections::default();
            for result in group {
                match result {
                    CompareResult::Statement(s) => {
                        statements.push(s.change_type, statement_entry(s, with_compat));
                    }
                    CompareResult::Tree(t) => {
                        let entry = path_entry(t, with_compat);
                        if t.change_type == ChangeType::Modify {
                            match status_moved_to(t) {
                                Some("obsolete") => paths.obsoleted.push(entry.clone()),
                                Some("deprecated") => paths.deprecated.push(entry.clone()),
                                _ => {}
                            }
                        }
                        paths.sections.push(t.change_type, entry);
                    }
                }
            }
            modules.push(ModuleReport {
                name,
                statements: with_statements.then_some(statements),
                paths: with_paths.then_some(paths),
            });
        }

        ComparisonReport {
            compare_type,
            rules_digest,
            verdict: (compare_type != CompareType::Stmt).then(|| overall_verdict(results)),
            summary: ReportSummary::count(results),
            modules,
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the report cannot be encoded.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(YangDiffError::from)?)
    }
}

fn statement_entry(result: &StatementResult<'_>, with_compat: bool) -> StatementEntry {
    StatementEntry {
        statement: statement_text(result),
        origin: origin(reported_side(result.change_type, result.left, result.right)),
        compatibility: if with_compat {
            result.compatibility.clone()
        } else {
            None
        },
    }
}

fn path_entry(result: &TreeResult<'_>, with_compat: bool) -> PathEntry {
    PathEntry {
        path: result.schema_path.clone(),
        origin: origin(reported_side(result.change_type, result.left, result.right)),
        compatibility: with_compat.then(|| result.compatibility.clone()),
        meta: result
            .meta_results
            .iter()
            .map(|m| statement_entry(m, with_compat))
            .collect(),
    }
}

/// New status of a node whose `status` statement changed
fn status_moved_to<'a>(result: &TreeResult<'a>) -> Option<&'a str> {
    result
        .meta_results
        .iter()
        .filter_map(|m| m.right)
        .filter(|r| r.is("status"))
        .find_map(|r| r.argument().map(str::trim))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pass_is_bc() {
        assert_eq!(overall_verdict(&[]), Compatibility::BackwardCompatible);
        let report = ComparisonReport::build(CompareType::CompatibleCheck, &[], None);
        assert_eq!(report.verdict, Some(Compatibility::BackwardCompatible));
        assert_eq!(report.summary.total, 0);
        assert!(report.modules.is_empty());
    }

    #[test]
    fn test_stmt_report_has_no_verdict() {
        let report = ComparisonReport::build(CompareType::Stmt, &[], Some("abc".into()));
        let json = report.to_json_pretty().unwrap();
        assert!(!json.contains("\"verdict\""));
        assert!(json.contains("\"compare_type\": \"stmt\""));
        assert!(json.contains("\"rules_digest\": \"abc\""));
    }

    #[test]
    fn test_worst_verdict_wins() {
        let results = vec![
            CompareResult::Statement(StatementResult::new(
                ChangeType::Add,
                None,
                None,
                Some(CompatibilityInfo::nbc("x")),
            )),
            CompareResult::Statement(StatementResult::new(
                ChangeType::Add,
                None,
                None,
                Some(CompatibilityInfo::new(Compatibility::Unknown, None)),
            )),
        ];
        assert_eq!(overall_verdict(&results), Compatibility::NonBackwardCompatible);
        assert_eq!(ReportSummary::count(&results).unknown, 1);
    }
}
