//! Module-set comparison passes

use crate::compare::aggregate::{module_tree_nodes, CompareEngine, TraversalMode};
use crate::compare::condition::ChangeType;
use crate::compare::equality::nodes_equal;
use crate::compare::kinds::ComparatorRegistry;
use crate::compare::matcher::{search, MatchedSet};
use crate::compare::result::{CompareResult, StatementResult};
use crate::model::{NodeRef, SchemaContext};
use crate::rules::RuleTable;
use crate::{log_op_end, log_op_start};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use yangdiff_core_types::PassContext;

/// Output shape of a comparison pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompareType {
    /// Plain statement diff, unclassified
    Stmt,
    /// Schema-node diff with compatibility roll-up
    Tree,
    /// Full classified diff of the module sets
    CompatibleCheck,
}

impl CompareType {
    pub fn name(&self) -> &'static str {
        match self {
            CompareType::Stmt => "stmt",
            CompareType::Tree => "tree",
            CompareType::CompatibleCheck => "compatible-check",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "stmt" => Some(CompareType::Stmt),
            "tree" => Some(CompareType::Tree),
            "compatible-check" => Some(CompareType::CompatibleCheck),
            _ => None,
        }
    }
}

impl fmt::Display for CompareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compares a left (older) module set with a right (newer) one
#[derive(Debug, Clone, Copy)]
pub struct YangComparator<'a> {
    left: &'a SchemaContext,
    right: &'a SchemaContext,
}

impl<'a> YangComparator<'a> {
    pub fn new(left: &'a SchemaContext, right: &'a SchemaContext) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &'a SchemaContext {
        self.left
    }

    pub fn right(&self) -> &'a SchemaContext {
        self.right
    }

    /// Run one pass with a fresh [`PassContext`]
    pub fn compare(
        &self,
        compare_type: CompareType,
        rules: &RuleTable,
        registry: &ComparatorRegistry,
    ) -> Vec<CompareResult<'a>> {
        self.compare_with_context(&PassContext::new(), compare_type, rules, registry)
    }

    /// Run one pass. Results are ordered by left module, then by traversal.
    pub fn compare_with_context(
        &self,
        ctx: &PassContext,
        compare_type: CompareType,
        rules: &RuleTable,
        registry: &ComparatorRegistry,
    ) -> Vec<CompareResult<'a>> {
        log_op_start!(
            "compare",
            pass_id = %ctx.pass_id,
            compare_type = compare_type.name(),
            origin = ctx.origin.as_deref().unwrap_or("library")
        );
        let start = Instant::now();

        let engine = CompareEngine::new(rules, registry);
        let results = match compare_type {
            CompareType::Stmt => self.statement_pass(),
            CompareType::Tree => self.tree_pass(&engine),
            CompareType::CompatibleCheck => engine.compare_statements(
                &self.left.modules(),
                &self.right.modules(),
                TraversalMode::All,
            ),
        };

        log_op_end!(
            "compare",
            duration_ms = start.elapsed().as_millis() as u64,
            pass_id = %ctx.pass_id,
            compare_type = compare_type.name(),
            result_count = results.len() as u64
        );
        results
    }

    fn statement_pass(&self) -> Vec<CompareResult<'a>> {
        let mut results = Vec::new();
        for left in self.left.modules() {
            let right = left.argument().and_then(|name| self.right.module(name));
            results.extend(plain_diff(Some(left), right));
        }
        for right in self.right.modules() {
            if right.module_entry().is_submodule() {
                continue;
            }
            let known = right
                .argument()
                .is_some_and(|name| self.left.module(name).is_some());
            if !known {
                results.extend(plain_diff(None, Some(right)));
            }
        }
        results
    }

    fn tree_pass(&self, engine: &CompareEngine<'_>) -> Vec<CompareResult<'a>> {
        let mut results = Vec::new();
        for left in self.left.modules().into_iter().filter(|m| m.is_main_module()) {
            let right = left
                .argument()
                .and_then(|name| self.right.module(name))
                .filter(|m| m.is_main_module());
            let right_nodes = right.map(module_tree_nodes).unwrap_or_default();
            results.extend(engine.compare_statements(
                &module_tree_nodes(left),
                &right_nodes,
                TraversalMode::SchemaOnly,
            ));
        }
        for right in self.right.modules().into_iter().filter(|m| m.is_main_module()) {
            let known = right
                .argument()
                .and_then(|name| self.left.module(name))
                .is_some_and(|m| m.is_main_module());
            if !known {
                results.extend(engine.compare_statements(
                    &[],
                    &module_tree_nodes(right),
                    TraversalMode::SchemaOnly,
                ));
            }
        }
        results
    }
}

/// Unclassified diff over declared sub-statements
fn plain_diff<'a>(left: Option<NodeRef<'a>>, right: Option<NodeRef<'a>>) -> Vec<CompareResult<'a>> {
    let unclassified = |change_type| {
        CompareResult::Statement(StatementResult::new(change_type, left, right, None))
    };
    let (l, r) = match (left, right) {
        (None, None) => return Vec::new(),
        (None, Some(_)) => return vec![unclassified(ChangeType::Add)],
        (Some(_), None) => return vec![unclassified(ChangeType::Delete)],
        (Some(l), Some(r)) => (l, r),
    };

    let mut results = Vec::new();
    if !nodes_equal(l, r) {
        results.push(unclassified(ChangeType::Modify));
    }

    let rights = r.children();
    let mut found = MatchedSet::new();
    for child in l.children() {
        let partner = search(child, &rights, &found);
        if let Some(partner) = partner {
            found.insert(partner);
        }
        results.extend(plain_diff(Some(child), partner));
    }
    for child in rights {
        if !found.contains(&child) {
            results.extend(plain_diff(None, Some(child)));
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModuleSetDoc, StatementDoc as S};

    fn ctx(modules: Vec<S>) -> SchemaContext {
        SchemaContext::from_doc(&ModuleSetDoc::new(modules)).unwrap()
    }

    fn acme(children: Vec<S>) -> S {
        S::new("module")
            .arg("acme")
            .children([S::simple("namespace", "urn:acme"), S::simple("prefix", "a")])
            .children(children)
    }

    #[test]
    fn test_compare_type_names() {
        for t in [CompareType::Stmt, CompareType::Tree, CompareType::CompatibleCheck] {
            assert_eq!(CompareType::from_name(t.name()), Some(t));
        }
        assert_eq!(CompareType::from_name("COMPATIBLE_CHECK"), Some(CompareType::CompatibleCheck));
        assert_eq!(CompareType::from_name("xml"), None);
    }

    #[test]
    fn test_stmt_pass_reports_unclassified_changes() {
        let left = ctx(vec![acme(vec![S::simple("organization", "Acme")])]);
        let right = ctx(vec![acme(vec![S::simple("organization", "Acme Corp")])]);
        let results = YangComparator::new(&left, &right).compare(
            CompareType::Stmt,
            &RuleTable::new(),
            &ComparatorRegistry::standard(),
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].change_type(), ChangeType::Modify);
        assert!(results[0].compatibility().is_none());
    }

    #[test]
    fn test_stmt_pass_new_module_is_one_add() {
        let left = ctx(vec![acme(vec![])]);
        let right = ctx(vec![
            acme(vec![]),
            S::new("module")
                .arg("extra")
                .children([S::simple("namespace", "urn:x"), S::simple("prefix", "x")]),
        ]);
        let results = YangComparator::new(&left, &right).compare(
            CompareType::Stmt,
            &RuleTable::new(),
            &ComparatorRegistry::standard(),
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].change_type(), ChangeType::Add);
        assert_eq!(results[0].module_name(), Some("extra"));
    }

    #[test]
    fn test_tree_pass_includes_augmented_nodes() {
        let left = ctx(vec![acme(vec![S::new("container").arg("sys")])]);
        let right = ctx(vec![acme(vec![
            S::new("container").arg("sys"),
            S::new("augment")
                .arg("/a:sys")
                .child(S::new("leaf").arg("extra").child(S::simple("type", "string"))),
        ])]);
        let results = YangComparator::new(&left, &right).compare(
            CompareType::Tree,
            &RuleTable::new(),
            &ComparatorRegistry::standard(),
        );
        assert_eq!(results.len(), 1);
        let CompareResult::Tree(tree) = &results[0] else {
            panic!("expected a tree result");
        };
        assert_eq!(tree.schema_path, "/a:sys/a:extra");
        assert_eq!(tree.change_type, ChangeType::Add);
    }
}
