//! Recursive comparison of statement lists
//!
//! [`CompareEngine`] pairs statements with [`search`], asks the pair's
//! [`ComparatorKind`] for change conditions, classifies each condition
//! against the [`RuleTable`] and descends into children. Schema nodes produce
//! [`TreeResult`]s that absorb the statement results found underneath them.

use crate::compare::condition::{ChangeCondition, ChangeType, CompatibilityInfo};
use crate::compare::kinds::{types_comparable, ComparatorKind, ComparatorRegistry};
use crate::compare::matcher::{search, MatchedSet};
use crate::compare::result::{CompareResult, StatementResult, TreeResult};
use crate::model::keyword::{LINKAGE_KEYWORDS, META_KEYWORDS};
use crate::model::NodeRef;
use crate::rules::RuleTable;

/// Which statements of a list take part in a comparison.
///
/// Inactive schema nodes never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalMode {
    /// Everything but schema nodes and referencable definitions
    MetaOnly,
    /// Schema nodes only
    SchemaOnly,
    All,
}

impl TraversalMode {
    pub fn admits(&self, node: &NodeRef<'_>) -> bool {
        if node.is_schema_node() && !node.is_active() {
            return false;
        }
        match self {
            TraversalMode::MetaOnly => !node.is_schema_node() && !node.is_referencable(),
            TraversalMode::SchemaOnly => node.is_schema_node(),
            TraversalMode::All => true,
        }
    }
}

const REFERENCABLE_DEFINITIONS: &[&str] = &["typedef", "identity", "feature", "extension"];

/// Comparison driver bound to one rule table and comparator registry
#[derive(Debug, Clone, Copy)]
pub struct CompareEngine<'e> {
    rules: &'e RuleTable,
    registry: &'e ComparatorRegistry,
}

impl<'e> CompareEngine<'e> {
    pub fn new(rules: &'e RuleTable, registry: &'e ComparatorRegistry) -> Self {
        Self { rules, registry }
    }

    pub fn rules(&self) -> &'e RuleTable {
        self.rules
    }

    pub fn registry(&self) -> &'e ComparatorRegistry {
        self.registry
    }

    /// Compare two statement lists.
    ///
    /// Each admitted left statement is paired with at most one admitted right
    /// statement of the same keyword; no right statement is paired twice.
    /// Left statements without a partner are deletions, right statements
    /// left over are additions.
    pub fn compare_statements<'a>(
        &self,
        lefts: &[NodeRef<'a>],
        rights: &[NodeRef<'a>],
        mode: TraversalMode,
    ) -> Vec<CompareResult<'a>> {
        let rights: Vec<NodeRef<'a>> = rights.iter().copied().filter(|r| mode.admits(r)).collect();
        let mut found = MatchedSet::new();
        let mut results = Vec::new();

        for left in lefts.iter().copied().filter(|l| mode.admits(l)) {
            match search(left, &rights, &found) {
                Some(right) => {
                    found.insert(right);
                    results.extend(self.compare(Some(left), Some(right)));
                }
                None => results.extend(self.compare(Some(left), None)),
            }
        }
        for right in rights {
            if !found.contains(&right) {
                results.extend(self.compare(None, Some(right)));
            }
        }
        results
    }

    /// Compare one pair, at least one side present
    pub fn compare<'a>(
        &self,
        left: Option<NodeRef<'a>>,
        right: Option<NodeRef<'a>>,
    ) -> Vec<CompareResult<'a>> {
        let Some(node) = left.or(right) else {
            return Vec::new();
        };
        let kind = self.registry.lookup(node.statement_key());
        if kind.is_schema_node() {
            self.compare_schema_node(kind, left, right)
        } else {
            self.compare_statement(kind, left, right)
        }
    }

    /// Rule verdict for a condition, falling back to the comparator default.
    /// `None` drops the condition.
    fn classify(
        &self,
        kind: ComparatorKind,
        node: NodeRef<'_>,
        left: Option<NodeRef<'_>>,
        right: Option<NodeRef<'_>>,
        condition: ChangeCondition,
    ) -> Option<CompatibilityInfo> {
        let parent = node.logical_parent().map(|p| p.statement_key());
        match self.rules.lookup(node.statement_key(), parent, condition) {
            Some(rule) => {
                tracing::trace!(
                    rule_id = rule.rule_id(),
                    keyword = node.statement_key(),
                    condition = condition.name(),
                    "rule matched"
                );
                Some(rule.info())
            }
            // reordering alone is only reported when a rule asks for it
            None if condition == ChangeCondition::SequenceChanged => None,
            None => Some(kind.default_verdict(left, right, condition)),
        }
    }

    fn compare_statement<'a>(
        &self,
        kind: ComparatorKind,
        left: Option<NodeRef<'a>>,
        right: Option<NodeRef<'a>>,
    ) -> Vec<CompareResult<'a>> {
        let Some(node) = left.or(right) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        for condition in kind.diff(left, right) {
            if condition == ChangeCondition::Ignore {
                continue;
            }
            if let Some(info) = self.classify(kind, node, left, right, condition) {
                results.push(CompareResult::Statement(StatementResult::new(
                    ChangeType::for_condition(condition),
                    left,
                    right,
                    Some(info),
                )));
            }
        }
        if let (Some(l), Some(r)) = (left, right) {
            results.extend(self.compare_children(kind, l, r));
        }
        results
    }

    fn compare_children<'a>(
        &self,
        kind: ComparatorKind,
        left: NodeRef<'a>,
        right: NodeRef<'a>,
    ) -> Vec<CompareResult<'a>> {
        match kind {
            ComparatorKind::Module => self.compare_module_children(left, right),
            ComparatorKind::Type if !types_comparable(left, right) => Vec::new(),
            ComparatorKind::SchemaNode | ComparatorKind::Augment => {
                let mut results = self.compare_statements(
                    &left.effective_children(),
                    &right.effective_children(),
                    TraversalMode::MetaOnly,
                );
                results.extend(self.compare_statements(
                    &left.schema_children(),
                    &right.schema_children(),
                    TraversalMode::SchemaOnly,
                ));
                results
            }
            ComparatorKind::Operation => {
                let mut results = self.compare_statements(
                    &left.effective_children(),
                    &right.effective_children(),
                    TraversalMode::MetaOnly,
                );
                results.extend(self.compare_statements(
                    &operation_io(left),
                    &operation_io(right),
                    TraversalMode::All,
                ));
                results
            }
            _ => self.compare_statements(
                &left.effective_children(),
                &right.effective_children(),
                TraversalMode::All,
            ),
        }
    }

    fn compare_module_children<'a>(&self, left: NodeRef<'a>, right: NodeRef<'a>) -> Vec<CompareResult<'a>> {
        let select = |module: NodeRef<'a>, keywords: &[&str]| -> Vec<NodeRef<'a>> {
            module
                .children()
                .into_iter()
                .filter(|c| c.keyword().is_any(keywords))
                .collect()
        };

        let mut results = self.compare_statements(
            &select(left, META_KEYWORDS),
            &select(right, META_KEYWORDS),
            TraversalMode::All,
        );
        results.extend(self.compare_statements(
            &select(left, LINKAGE_KEYWORDS),
            &select(right, LINKAGE_KEYWORDS),
            TraversalMode::All,
        ));
        if !(left.is_main_module() && right.is_main_module()) {
            return results;
        }

        let definitions = |module: NodeRef<'a>| -> Vec<NodeRef<'a>> {
            module_members(module)
                .iter()
                .flat_map(|m| m.effective_children())
                .filter(|c| {
                    !c.keyword().is_any(META_KEYWORDS) && !c.keyword().is_any(LINKAGE_KEYWORDS)
                })
                .collect()
        };
        let referencables = |module: NodeRef<'a>| -> Vec<NodeRef<'a>> {
            module_members(module)
                .iter()
                .flat_map(|m| m.effective_children())
                .filter(|c| c.keyword().is_any(REFERENCABLE_DEFINITIONS))
                .collect()
        };
        let augments = |module: NodeRef<'a>| -> Vec<NodeRef<'a>> {
            module_members(module)
                .iter()
                .flat_map(|m| m.augments())
                .collect()
        };

        results.extend(self.compare_statements(
            &definitions(left),
            &definitions(right),
            TraversalMode::MetaOnly,
        ));
        results.extend(self.compare_statements(
            &referencables(left),
            &referencables(right),
            TraversalMode::All,
        ));
        results.extend(self.compare_statements(
            &module_schema_children(left),
            &module_schema_children(right),
            TraversalMode::SchemaOnly,
        ));
        results.extend(self.compare_statements(
            &augments(left),
            &augments(right),
            TraversalMode::SchemaOnly,
        ));
        results
    }

    fn compare_schema_node<'a>(
        &self,
        kind: ComparatorKind,
        left: Option<NodeRef<'a>>,
        right: Option<NodeRef<'a>>,
    ) -> Vec<CompareResult<'a>> {
        let Some(node) = right.or(left) else {
            return Vec::new();
        };
        let path = if kind == ComparatorKind::Augment {
            node.argument().unwrap_or_default().to_string()
        } else {
            node.schema_path()
        };

        let mut trees = Vec::new();
        for condition in kind.diff(left, right) {
            if let Some(info) = self.classify(kind, node, left, right, condition) {
                trees.push(TreeResult::new(
                    path.clone(),
                    ChangeType::for_condition(condition),
                    left,
                    right,
                    info,
                ));
            }
        }

        let (Some(l), Some(r)) = (left, right) else {
            return trees.into_iter().map(CompareResult::Tree).collect();
        };

        // Statement results fold into this node's trees; nested tree results
        // keep their order. Without a tree of its own the node gets a
        // synthesized BC modification where its first statement change was.
        let mut statements = Vec::new();
        let mut nested: Vec<Option<CompareResult<'a>>> = Vec::new();
        let mut slot = None;
        for child in self.compare_children(kind, l, r) {
            match child {
                CompareResult::Statement(s) => {
                    if slot.is_none() {
                        slot = Some(nested.len());
                    }
                    statements.push(s);
                }
                tree @ CompareResult::Tree(_) => nested.push(Some(tree)),
            }
        }

        if statements.is_empty() {
            return trees
                .into_iter()
                .map(CompareResult::Tree)
                .chain(nested.into_iter().flatten())
                .collect();
        }

        if trees.is_empty() {
            let mut synthesized =
                TreeResult::new(path, ChangeType::Modify, left, right, CompatibilityInfo::bc());
            for statement in statements {
                synthesized.attach(statement);
            }
            let at = slot.unwrap_or(0);
            nested.insert(at, Some(CompareResult::Tree(synthesized)));
            return nested.into_iter().flatten().collect();
        }

        for tree in &mut trees {
            for statement in &statements {
                tree.attach(statement.clone());
            }
        }
        trees
            .into_iter()
            .map(CompareResult::Tree)
            .chain(nested.into_iter().flatten())
            .collect()
    }
}

/// `input` and `output` of an operation that are active and have at least
/// one active schema child
fn operation_io(operation: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    operation
        .effective_children()
        .into_iter()
        .filter(|c| c.keyword().is_any(&["input", "output"]))
        .filter(|c| c.is_active() && c.schema_children().iter().any(|s| s.is_active()))
        .collect()
}

/// A main module followed by the submodules that belong to it
pub(crate) fn module_members(module: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    let mut members = vec![module];
    if module.is_main_module() {
        let name = module.module_name();
        members.extend(
            module
                .context()
                .modules()
                .into_iter()
                .filter(|m| m.module_entry().is_submodule() && m.module_entry().main_module() == name),
        );
    }
    members
}

/// Top-level schema nodes of a module and its submodules
pub(crate) fn module_schema_children(module: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    module_members(module)
        .iter()
        .flat_map(|m| m.schema_children())
        .collect()
}

/// Schema nodes a module contributes: its own top-level nodes followed by
/// the nodes its augments add
pub(crate) fn module_tree_nodes(module: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    let members = module_members(module);
    let mut nodes: Vec<NodeRef<'_>> = members.iter().flat_map(|m| m.schema_children()).collect();
    for augment in members.iter().flat_map(|m| m.augments()) {
        nodes.extend(augment.schema_children());
    }
    nodes
}
