//! Comparison results

use crate::compare::condition::{ChangeType, Compatibility, CompatibilityInfo};
use crate::model::NodeRef;

/// Change to one non-schema statement.
///
/// `compatibility` is `None` for plain statement diffs, which classify nothing.
#[derive(Debug, Clone)]
pub struct StatementResult<'a> {
    pub change_type: ChangeType,
    pub left: Option<NodeRef<'a>>,
    pub right: Option<NodeRef<'a>>,
    pub compatibility: Option<CompatibilityInfo>,
}

impl<'a> StatementResult<'a> {
    pub fn new(
        change_type: ChangeType,
        left: Option<NodeRef<'a>>,
        right: Option<NodeRef<'a>>,
        compatibility: Option<CompatibilityInfo>,
    ) -> Self {
        Self {
            change_type,
            left,
            right,
            compatibility,
        }
    }

    /// Unclassified results count as backward compatible
    pub fn verdict(&self) -> Compatibility {
        self.compatibility
            .as_ref()
            .map(|c| c.compatibility)
            .unwrap_or(Compatibility::BackwardCompatible)
    }
}

/// Change to one schema node, with the statement changes underneath it
#[derive(Debug, Clone)]
pub struct TreeResult<'a> {
    pub schema_path: String,
    pub change_type: ChangeType,
    pub left: Option<NodeRef<'a>>,
    pub right: Option<NodeRef<'a>>,
    pub compatibility: CompatibilityInfo,
    pub meta_results: Vec<StatementResult<'a>>,
}

impl<'a> TreeResult<'a> {
    pub fn new(
        schema_path: impl Into<String>,
        change_type: ChangeType,
        left: Option<NodeRef<'a>>,
        right: Option<NodeRef<'a>>,
        compatibility: CompatibilityInfo,
    ) -> Self {
        Self {
            schema_path: schema_path.into(),
            change_type,
            left,
            right,
            compatibility,
            meta_results: Vec::new(),
        }
    }

    /// Record a statement change under this node and roll its verdict up.
    ///
    /// An NBC child makes the node NBC; an UNKNOWN child only lowers a BC
    /// node. A rolled-up verdict carries no description.
    pub fn attach(&mut self, result: StatementResult<'a>) {
        let current = self.compatibility.compatibility;
        match result.verdict() {
            Compatibility::NonBackwardCompatible if current != Compatibility::NonBackwardCompatible => {
                self.compatibility = CompatibilityInfo::new(Compatibility::NonBackwardCompatible, None);
            }
            Compatibility::Unknown if current == Compatibility::BackwardCompatible => {
                self.compatibility = CompatibilityInfo::new(Compatibility::Unknown, None);
            }
            _ => {}
        }
        self.meta_results.push(result);
    }
}

/// One entry of a comparison result list
#[derive(Debug, Clone)]
pub enum CompareResult<'a> {
    Statement(StatementResult<'a>),
    Tree(TreeResult<'a>),
}

impl<'a> CompareResult<'a> {
    pub fn change_type(&self) -> ChangeType {
        match self {
            CompareResult::Statement(s) => s.change_type,
            CompareResult::Tree(t) => t.change_type,
        }
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        match self {
            CompareResult::Statement(s) => s.left,
            CompareResult::Tree(t) => t.left,
        }
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        match self {
            CompareResult::Statement(s) => s.right,
            CompareResult::Tree(t) => t.right,
        }
    }

    pub fn compatibility(&self) -> Option<&CompatibilityInfo> {
        match self {
            CompareResult::Statement(s) => s.compatibility.as_ref(),
            CompareResult::Tree(t) => Some(&t.compatibility),
        }
    }

    pub fn verdict(&self) -> Compatibility {
        match self {
            CompareResult::Statement(s) => s.verdict(),
            CompareResult::Tree(t) => t.compatibility.compatibility,
        }
    }

    /// Module a result is reported under: the right side's for additions
    /// and modifications, the left side's for deletions
    pub fn module_name(&self) -> Option<&'a str> {
        let node = match self.change_type() {
            ChangeType::Delete => self.left().or(self.right()),
            ChangeType::Add | ChangeType::Modify => self.right().or(self.left()),
        };
        node.map(|n| n.module_name())
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, CompareResult::Tree(_))
    }
}
