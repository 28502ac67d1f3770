//! Plain text rendering

use crate::compare::{ChangeType, CompareResult, StatementResult, TreeResult};
use crate::model::NodeRef;
use std::collections::BTreeMap;

const SECTION_ORDER: [ChangeType; 3] = [ChangeType::Add, ChangeType::Delete, ChangeType::Modify];

/// Group results under the module they are reported in, keeping result order
/// inside each group
pub fn group_by_module<'r, 'a>(
    results: &'r [CompareResult<'a>],
) -> BTreeMap<String, Vec<&'r CompareResult<'a>>> {
    let mut groups: BTreeMap<String, Vec<&'r CompareResult<'a>>> = BTreeMap::new();
    for result in results {
        let module = result.module_name().unwrap_or_default().to_string();
        groups.entry(module).or_default().push(result);
    }
    groups
}

/// Render results as text:
///
/// ```text
/// module:acme
///     added:
///         leaf speed	@module:acme acme.yang:12
///     deleted:
///     changed:
///         FROM max-elements 10 TO max-elements 5	@module:acme acme.yang:20
/// ```
pub fn render_text(results: &[CompareResult<'_>]) -> String {
    let mut out = String::new();
    for (module, group) in group_by_module(results) {
        out.push_str(&format!("module:{}\n", module));
        for change_type in SECTION_ORDER {
            out.push_str(&format!("\t{}:\n", change_type.section()));
            for result in group.iter().filter(|r| r.change_type() == change_type) {
                out.push_str("\t\t");
                match result {
                    CompareResult::Statement(s) => out.push_str(&statement_line(s)),
                    CompareResult::Tree(t) => out.push_str(&tree_lines(t, "\t\t")),
                }
                out.push('\n');
            }
        }
    }
    out
}

/// `@module:NAME position` of the reported side
pub(crate) fn origin(node: Option<NodeRef<'_>>) -> String {
    let Some(node) = node else {
        return String::new();
    };
    let position = node.position();
    if position.is_empty() {
        format!("@module:{}", node.module_name())
    } else {
        format!("@module:{} {}", node.module_name(), position)
    }
}

fn display(node: Option<NodeRef<'_>>) -> String {
    node.map(|n| n.display()).unwrap_or_default()
}

pub(crate) fn statement_text(result: &StatementResult<'_>) -> String {
    match result.change_type {
        ChangeType::Add => display(result.right),
        ChangeType::Delete => display(result.left),
        ChangeType::Modify => format!("FROM {} TO {}", display(result.left), display(result.right)),
    }
}

pub(crate) fn reported_side<'a>(
    change_type: ChangeType,
    left: Option<NodeRef<'a>>,
    right: Option<NodeRef<'a>>,
) -> Option<NodeRef<'a>> {
    match change_type {
        ChangeType::Delete => left.or(right),
        ChangeType::Add | ChangeType::Modify => right.or(left),
    }
}

fn statement_line(result: &StatementResult<'_>) -> String {
    format!(
        "{}\t{}",
        statement_text(result),
        origin(reported_side(result.change_type, result.left, result.right))
    )
}

fn tree_lines(result: &TreeResult<'_>, indent: &str) -> String {
    let mut out = format!(
        "{}\t{}",
        result.schema_path,
        origin(reported_side(result.change_type, result.left, result.right))
    );
    for meta in &result.meta_results {
        out.push('\n');
        out.push_str(indent);
        out.push('\t');
        out.push_str(meta.change_type.section());
        out.push_str(": ");
        out.push_str(&statement_line(meta));
    }
    out
}
