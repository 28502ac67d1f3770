//! Per-keyword comparator family
//!
//! Every statement keyword maps to one [`ComparatorKind`]. A kind decides which
//! [`ChangeCondition`]s a left/right pair exhibits and the verdict to use when
//! no rule covers a condition. Traversal of children is driven by
//! [`CompareEngine`](crate::compare::CompareEngine).

use crate::compare::bounds::SectionExpression;
use crate::compare::condition::{ChangeCondition, Compatibility, CompatibilityInfo};
use crate::compare::equality::nodes_equal;
use crate::compare::matcher::{search, MatchedSet};
use crate::compare::unique::unique_nodes;
use crate::model::{NodeRef, SchemaTreeType};
use std::collections::BTreeMap;

/// Closed set of comparator behaviours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComparatorKind {
    Common,
    SchemaNode,
    Operation,
    Augment,
    Module,
    Namespace,
    Config,
    Mandatory,
    Default,
    Description,
    Reference,
    Units,
    EnumBit,
    ValuePosition,
    Identifier,
    IfFeature,
    WhenMust,
    Pattern,
    MaxElements,
    MinElements,
    RangeLength,
    Status,
    Type,
    Base,
    Unique,
}

type Pair<'a> = (Option<NodeRef<'a>>, Option<NodeRef<'a>>);

impl ComparatorKind {
    /// Kinds whose results are tree results keyed by schema path
    pub fn is_schema_node(&self) -> bool {
        matches!(
            self,
            ComparatorKind::SchemaNode | ComparatorKind::Operation | ComparatorKind::Augment
        )
    }

    /// Change conditions between `left` and `right`; empty when unchanged
    pub fn diff(&self, left: Option<NodeRef<'_>>, right: Option<NodeRef<'_>>) -> Vec<ChangeCondition> {
        let pair = (left, right);
        match self {
            ComparatorKind::SchemaNode | ComparatorKind::Operation | ComparatorKind::Augment => {
                schema_node_diff(pair)
            }
            ComparatorKind::Config => config_diff(pair),
            ComparatorKind::Mandatory => mandatory_diff(pair),
            ComparatorKind::MaxElements => max_elements_diff(pair),
            ComparatorKind::MinElements => min_elements_diff(pair),
            ComparatorKind::RangeLength => range_length_diff(pair),
            ComparatorKind::Status => status_diff(pair),
            ComparatorKind::Type => type_diff(pair),
            ComparatorKind::Unique => unique_diff(pair),
            _ => common_diff(pair),
        }
    }

    /// Verdict for `condition` when no rule applies
    pub fn default_verdict(
        &self,
        left: Option<NodeRef<'_>>,
        right: Option<NodeRef<'_>>,
        condition: ChangeCondition,
    ) -> CompatibilityInfo {
        use ChangeCondition as C;
        use ComparatorKind as K;

        match (self, condition) {
            (K::SchemaNode | K::Operation | K::Augment, C::MandatoryAdded | C::Deleted) => {
                CompatibilityInfo::new(Compatibility::NonBackwardCompatible, None)
            }
            (K::Type, C::Changed | C::IntegerTypeChanged | C::Deleted) => {
                CompatibilityInfo::new(Compatibility::NonBackwardCompatible, None)
            }
            (K::Module, C::Deleted | C::Changed) => {
                nbc("deleting a module or changing its name is non-backward-compatible")
            }
            (K::Namespace, C::Changed) => nbc("namespace MUST NOT be changed"),
            (K::Config, C::Reduce) => {
                nbc("config is changed from false to true, it's non-backward-compatible")
            }
            (K::Mandatory, C::Reduce) => {
                nbc("mandatory is changed from false to true, it's non-backward-compatible")
            }
            (K::Default, C::Deleted | C::Changed) => {
                nbc("deleting or changing a default is non-backward-compatible")
            }
            (K::Description, C::Deleted) => nbc("deleting a description is non-backward-compatible"),
            (K::Reference, C::Deleted) => nbc("deleting a reference is non-backward-compatible"),
            (K::Units, C::Deleted | C::Changed) => {
                nbc("deleting or changing units is non-backward-compatible")
            }
            (K::EnumBit, C::Deleted) => nbc("deleting an enum or bit is non-backward-compatible"),
            (K::EnumBit, C::Added) => CompatibilityInfo::new(
                Compatibility::BackwardCompatible,
                Some("adding an enum or bit is backward-compatible".to_string()),
            ),
            (K::ValuePosition, C::Changed) => {
                nbc("changing an enum value or bit position is non-backward-compatible")
            }
            (K::Identifier, C::Deleted) => nbc("the statement is deleted, it's non-backward-compatible"),
            (K::IfFeature, C::Added) => nbc("adding an if-feature is non-backward-compatible"),
            (K::IfFeature, C::Changed) => unknown("if-feature is changed, compatibility is unknown"),
            (K::WhenMust, C::Added) => nbc("adding a when or must is non-backward-compatible"),
            (K::WhenMust, C::Changed) => unknown("when or must is changed, compatibility is unknown"),
            (K::Pattern, C::Added) => nbc("adding a pattern is non-backward-compatible"),
            (K::Pattern, C::Changed) => unknown("pattern is changed, compatibility is unknown"),
            (K::MaxElements, C::Reduce) => nbc("max-elements is reduced, it's non-backward-compatible"),
            (K::MinElements, C::Reduce) => nbc("min-elements is increased, it's non-backward-compatible"),
            (K::RangeLength, C::Reduce) => {
                nbc("the range or length is reduced, it's non-backward-compatible")
            }
            (K::Status, C::Reduce) => nbc(
                "unacceptable status change; only current to deprecated or obsolete \
                 and deprecated to obsolete are acceptable",
            ),
            (K::Unique, C::Added | C::Reduce) => {
                nbc("adding a unique constraint or a node to one is non-backward-compatible")
            }
            (K::Base, C::Deleted) if base_parent_is(left, right, "identity") => {
                nbc("deleting a base of an identity is non-backward-compatible")
            }
            (K::Base, C::Added) if base_parent_is(left, right, "type") => {
                nbc("adding a base to an identityref is non-backward-compatible")
            }
            _ => CompatibilityInfo::bc(),
        }
    }
}

fn nbc(description: &str) -> CompatibilityInfo {
    CompatibilityInfo::nbc(description)
}

fn unknown(description: &str) -> CompatibilityInfo {
    CompatibilityInfo::new(Compatibility::Unknown, Some(description.to_string()))
}

fn base_parent_is(left: Option<NodeRef<'_>>, right: Option<NodeRef<'_>>, keyword: &str) -> bool {
    left.or(right)
        .and_then(|b| b.logical_parent())
        .is_some_and(|p| p.is(keyword))
}

/// Added / Deleted / Changed, plus SequenceChanged when the ordinal moved
pub(crate) fn common_diff(pair: Pair<'_>) -> Vec<ChangeCondition> {
    match pair {
        (None, None) => Vec::new(),
        (None, Some(_)) => vec![ChangeCondition::Added],
        (Some(_), None) => vec![ChangeCondition::Deleted],
        (Some(left), Some(right)) => {
            let mut conditions = Vec::new();
            if !nodes_equal(left, right) {
                conditions.push(ChangeCondition::Changed);
            }
            if left.sequence_index() != right.sequence_index() {
                conditions.push(ChangeCondition::SequenceChanged);
            }
            conditions
        }
    }
}

fn sequence_only(left: NodeRef<'_>, right: NodeRef<'_>) -> Option<ChangeCondition> {
    (left.sequence_index() != right.sequence_index()).then_some(ChangeCondition::SequenceChanged)
}

fn schema_node_diff(pair: Pair<'_>) -> Vec<ChangeCondition> {
    match pair {
        (None, Some(right)) if right.is_mandatory() => vec![ChangeCondition::MandatoryAdded],
        _ => common_diff(pair),
    }
}

/// An absent `config` takes the value inherited from the enclosing nodes
fn config_diff(pair: Pair<'_>) -> Vec<ChangeCondition> {
    let Some(present) = pair.0.or(pair.1) else {
        return Vec::new();
    };
    if present.tree_type() != SchemaTreeType::Data {
        return vec![ChangeCondition::Ignore];
    }
    let left = pair.0.map_or_else(|| inherited_config(present), is_true);
    let right = pair.1.map_or_else(|| inherited_config(present), is_true);
    let direction = match (left, right) {
        (true, false) => Some(ChangeCondition::Reduce),
        (false, true) => Some(ChangeCondition::Expand),
        _ => None,
    };
    with_direction(pair, direction)
}

fn is_true(node: NodeRef<'_>) -> bool {
    node.argument().is_some_and(|a| a.trim() == "true")
}

/// Effective config above the schema node holding `config`; `true` at the top
fn inherited_config(config: NodeRef<'_>) -> bool {
    let mut current = config.logical_parent().and_then(|n| n.closest_ancestor_node());
    while let Some(node) = current {
        if let Some(stmt) = node.child("config") {
            return is_true(stmt);
        }
        current = node.closest_ancestor_node();
    }
    true
}

/// Common conditions plus `direction` when both sides are declared; only
/// `direction` when one side falls back to its implicit value
fn with_direction(pair: Pair<'_>, direction: Option<ChangeCondition>) -> Vec<ChangeCondition> {
    match (pair, direction) {
        ((Some(_), Some(_)), direction) => {
            let mut conditions = common_diff(pair);
            conditions.extend(direction);
            conditions
        }
        (_, Some(direction)) => vec![direction],
        (_, None) => common_diff(pair),
    }
}

/// An absent `mandatory` is `false`
fn mandatory_diff(pair: Pair<'_>) -> Vec<ChangeCondition> {
    let left = pair.0.is_some_and(is_true);
    let right = pair.1.is_some_and(is_true);
    let direction = match (left, right) {
        (true, false) => Some(ChangeCondition::Expand),
        (false, true) => Some(ChangeCondition::Reduce),
        _ => None,
    };
    with_direction(pair, direction)
}

/// `None` is `unbounded`
fn parse_max(node: NodeRef<'_>) -> Option<Option<u64>> {
    match node.argument().map(str::trim) {
        Some("unbounded") => Some(None),
        Some(value) => value.parse::<u64>().ok().map(Some),
        None => None,
    }
}

fn parse_min(node: NodeRef<'_>) -> Option<u64> {
    node.argument().and_then(|a| a.trim().parse::<u64>().ok())
}

/// Bound direction with implicit values for absent sides. `None` when a
/// declared argument does not parse.
fn bound_sides<T>(
    pair: Pair<'_>,
    parse: impl Fn(NodeRef<'_>) -> Option<T>,
    implicit: T,
) -> Option<(T, T)>
where
    T: Copy,
{
    let side = |node: Option<NodeRef<'_>>| match node {
        Some(node) => parse(node),
        None => Some(implicit),
    };
    Some((side(pair.0)?, side(pair.1)?))
}

/// An absent `max-elements` is `unbounded`
fn max_elements_diff(pair: Pair<'_>) -> Vec<ChangeCondition> {
    let Some((l, r)) = bound_sides(pair, parse_max, None) else {
        return common_diff(pair);
    };
    let direction = match (l, r) {
        (None, Some(_)) => Some(ChangeCondition::Reduce),
        (Some(_), None) => Some(ChangeCondition::Expand),
        (Some(l), Some(r)) if l < r => Some(ChangeCondition::Expand),
        (Some(l), Some(r)) if l > r => Some(ChangeCondition::Reduce),
        _ => None,
    };
    bound_conditions(pair, direction)
}

/// An absent `min-elements` is `0`
fn min_elements_diff(pair: Pair<'_>) -> Vec<ChangeCondition> {
    let Some((l, r)) = bound_sides(pair, parse_min, 0) else {
        return common_diff(pair);
    };
    let direction = match l.cmp(&r) {
        std::cmp::Ordering::Greater => Some(ChangeCondition::Expand),
        std::cmp::Ordering::Less => Some(ChangeCondition::Reduce),
        std::cmp::Ordering::Equal => None,
    };
    bound_conditions(pair, direction)
}

/// Numeric bounds ignore textual differences such as `05` against `5`
fn bound_conditions(pair: Pair<'_>, direction: Option<ChangeCondition>) -> Vec<ChangeCondition> {
    match pair {
        (Some(left), Some(right)) => {
            let mut conditions: Vec<_> = direction.into_iter().collect();
            conditions.extend(sequence_only(left, right));
            conditions
        }
        _ => match direction {
            Some(direction) => vec![direction],
            None => common_diff(pair),
        },
    }
}

fn range_length_diff(pair: Pair<'_>) -> Vec<ChangeCondition> {
    let (Some(left), Some(right)) = pair else {
        return common_diff(pair);
    };
    let parsed = (
        left.argument().and_then(SectionExpression::parse),
        right.argument().and_then(SectionExpression::parse),
    );
    let (Some(l), Some(r)) = parsed else {
        return common_diff(pair);
    };
    let mut conditions = Vec::new();
    if !l.same_as(&r) {
        if l.is_subset(&r) {
            conditions.push(ChangeCondition::Expand);
        } else if r.is_subset(&l) {
            conditions.push(ChangeCondition::Reduce);
        } else {
            conditions.push(ChangeCondition::Changed);
        }
    }
    conditions.extend(sequence_only(left, right));
    conditions
}

fn status_value(node: NodeRef<'_>) -> &str {
    node.argument().map(str::trim).unwrap_or("current")
}

/// An absent `status` is `current`
fn status_diff(pair: Pair<'_>) -> Vec<ChangeCondition> {
    match pair {
        (Some(left), Some(right)) => {
            let mut conditions = Vec::new();
            let (l, r) = (status_value(left), status_value(right));
            if l != r {
                if l == "current" || (l == "deprecated" && r == "obsolete") {
                    conditions.push(ChangeCondition::Expand);
                } else {
                    conditions.push(ChangeCondition::Reduce);
                }
            }
            conditions.extend(sequence_only(left, right));
            conditions
        }
        // departing from the implicit current baseline
        (None, Some(right)) if status_value(right) != "current" => vec![ChangeCondition::Reduce],
        // returning to the implicit current baseline
        (Some(left), None) if status_value(left) != "current" => vec![ChangeCondition::Reduce],
        _ => common_diff(pair),
    }
}

fn type_diff(pair: Pair<'_>) -> Vec<ChangeCondition> {
    let (Some(left), Some(right)) = pair else {
        return common_diff(pair);
    };
    match (left.restriction(), right.restriction()) {
        (Some(l), Some(r)) if l == r => Vec::new(),
        (Some(l), Some(r)) if l.is_integer() && r.is_integer() => {
            vec![ChangeCondition::IntegerTypeChanged]
        }
        _ => vec![ChangeCondition::Changed],
    }
}

/// Type sub-statements are only compared within one restriction class or
/// across integer types
pub(crate) fn types_comparable(left: NodeRef<'_>, right: NodeRef<'_>) -> bool {
    match (left.restriction(), right.restriction()) {
        (Some(l), Some(r)) => l == r || (l.is_integer() && r.is_integer()),
        _ => false,
    }
}

/// A right side naming every left node plus more tightens the constraint (`Reduce`)
fn unique_diff(pair: Pair<'_>) -> Vec<ChangeCondition> {
    let (Some(left), Some(right)) = pair else {
        return common_diff(pair);
    };
    if left.argument() == right.argument() {
        return Vec::new();
    }
    let left_nodes = unique_nodes(left);
    let right_nodes = unique_nodes(right);
    let condition = match left_nodes.len().cmp(&right_nodes.len()) {
        std::cmp::Ordering::Equal => ChangeCondition::Changed,
        std::cmp::Ordering::Less if all_found(&left_nodes, &right_nodes) => ChangeCondition::Reduce,
        std::cmp::Ordering::Greater if all_found(&right_nodes, &left_nodes) => ChangeCondition::Expand,
        _ => ChangeCondition::Changed,
    };
    vec![condition]
}

fn all_found(needles: &[NodeRef<'_>], haystack: &[NodeRef<'_>]) -> bool {
    needles
        .iter()
        .all(|n| search(*n, haystack, &MatchedSet::new()).is_some())
}

/// Keyword to comparator mapping, built once and read-only afterwards.
/// Unregistered keywords use [`ComparatorKind::Common`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparatorRegistry {
    kinds: BTreeMap<String, ComparatorKind>,
}

impl ComparatorRegistry {
    /// Empty registry: every keyword is compared with the common behaviour
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the builtin YANG keyword mapping
    pub fn standard() -> Self {
        use ComparatorKind as K;
        let mut registry = Self::new();
        let entries: &[(&[&str], ComparatorKind)] = &[
            (&["config"], K::Config),
            (&["enum", "bit"], K::EnumBit),
            (&["module", "submodule"], K::Module),
            (&["namespace"], K::Namespace),
            (
                &[
                    "container", "list", "choice", "case", "input", "output", "notification",
                    "leaf-list", "leaf", "anydata", "anyxml",
                ],
                K::SchemaNode,
            ),
            (&["rpc", "action"], K::Operation),
            (&["augment"], K::Augment),
            (&["type"], K::Type),
            (&["value", "position"], K::ValuePosition),
            (&["range", "length"], K::RangeLength),
            (&["pattern"], K::Pattern),
            (&["default"], K::Default),
            (&["units"], K::Units),
            (&["description"], K::Description),
            (&["reference"], K::Reference),
            (&["when", "must"], K::WhenMust),
            (&["mandatory"], K::Mandatory),
            (&["max-elements"], K::MaxElements),
            (&["min-elements"], K::MinElements),
            (&["status"], K::Status),
            (&["base"], K::Base),
            (&["typedef", "extension", "feature", "identity"], K::Identifier),
            (&["if-feature"], K::IfFeature),
            (&["unique"], K::Unique),
        ];
        for (keywords, kind) in entries {
            for keyword in *keywords {
                registry.register(*keyword, *kind);
            }
        }
        registry
    }

    /// Map a statement key (builtin keyword or `module:extension`) to a kind
    pub fn register(&mut self, keyword: impl Into<String>, kind: ComparatorKind) {
        self.kinds.insert(keyword.into(), kind);
    }

    pub fn lookup(&self, keyword: &str) -> ComparatorKind {
        self.kinds
            .get(keyword)
            .copied()
            .unwrap_or(ComparatorKind::Common)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModuleSetDoc, SchemaContext, StatementDoc as S};

    fn list_with(children: Vec<S>) -> SchemaContext {
        let doc = ModuleSetDoc::new([S::new("module").arg("m").children([
            S::simple("namespace", "urn:m"),
            S::simple("prefix", "m"),
            S::new("list").arg("l").children(children),
        ])]);
        SchemaContext::from_doc(&doc).unwrap()
    }

    fn stmt<'a>(ctx: &'a SchemaContext, keyword: &str) -> Option<NodeRef<'a>> {
        ctx.module("m")
            .and_then(|m| m.child("list"))
            .and_then(|l| l.child(keyword))
    }

    #[test]
    fn test_unregistered_keyword_is_common() {
        let registry = ComparatorRegistry::standard();
        assert_eq!(registry.lookup("organization"), ComparatorKind::Common);
        assert_eq!(registry.lookup("acme:ext"), ComparatorKind::Common);
        assert_eq!(registry.lookup("leaf"), ComparatorKind::SchemaNode);
        assert_eq!(ComparatorRegistry::new().lookup("leaf"), ComparatorKind::Common);
    }

    #[test]
    fn test_max_elements_directions() {
        let ten = list_with(vec![S::simple("max-elements", "10")]);
        let five = list_with(vec![S::simple("max-elements", "5")]);
        let unbounded = list_with(vec![S::simple("max-elements", "unbounded")]);
        let kind = ComparatorKind::MaxElements;
        assert_eq!(
            kind.diff(stmt(&ten, "max-elements"), stmt(&five, "max-elements")),
            vec![ChangeCondition::Reduce]
        );
        assert_eq!(
            kind.diff(stmt(&five, "max-elements"), stmt(&unbounded, "max-elements")),
            vec![ChangeCondition::Expand]
        );
        assert_eq!(
            kind.diff(stmt(&unbounded, "max-elements"), stmt(&ten, "max-elements")),
            vec![ChangeCondition::Reduce]
        );
        assert_eq!(kind.diff(None, stmt(&ten, "max-elements")), vec![ChangeCondition::Reduce]);
        assert_eq!(kind.diff(stmt(&ten, "max-elements"), None), vec![ChangeCondition::Expand]);
        assert_eq!(
            kind.diff(None, stmt(&unbounded, "max-elements")),
            vec![ChangeCondition::Added]
        );
        let verdict = kind.default_verdict(None, None, ChangeCondition::Reduce);
        assert_eq!(verdict.compatibility, Compatibility::NonBackwardCompatible);
        assert!(verdict.description.unwrap().contains("reduced"));
    }

    #[test]
    fn test_min_elements_directions() {
        let one = list_with(vec![S::simple("min-elements", "1")]);
        let three = list_with(vec![S::simple("min-elements", "3")]);
        let kind = ComparatorKind::MinElements;
        assert_eq!(
            kind.diff(stmt(&one, "min-elements"), stmt(&three, "min-elements")),
            vec![ChangeCondition::Reduce]
        );
        assert_eq!(
            kind.diff(stmt(&three, "min-elements"), stmt(&one, "min-elements")),
            vec![ChangeCondition::Expand]
        );
        assert_eq!(kind.diff(None, stmt(&one, "min-elements")), vec![ChangeCondition::Reduce]);
        assert_eq!(kind.diff(stmt(&three, "min-elements"), None), vec![ChangeCondition::Expand]);
    }

    #[test]
    fn test_status_transitions() {
        let current = list_with(vec![S::simple("status", "current")]);
        let deprecated = list_with(vec![S::simple("status", "deprecated")]);
        let obsolete = list_with(vec![S::simple("status", "obsolete")]);
        let none = list_with(vec![]);
        let kind = ComparatorKind::Status;
        assert_eq!(
            kind.diff(stmt(&deprecated, "status"), stmt(&obsolete, "status")),
            vec![ChangeCondition::Expand]
        );
        assert_eq!(
            kind.diff(stmt(&current, "status"), stmt(&deprecated, "status")),
            vec![ChangeCondition::Expand]
        );
        assert_eq!(
            kind.diff(stmt(&obsolete, "status"), stmt(&deprecated, "status")),
            vec![ChangeCondition::Reduce]
        );
        assert_eq!(
            kind.diff(stmt(&none, "status"), stmt(&deprecated, "status")),
            vec![ChangeCondition::Reduce]
        );
        assert_eq!(
            kind.diff(stmt(&none, "status"), stmt(&current, "status")),
            vec![ChangeCondition::Added]
        );
    }

    #[test]
    fn test_mandatory_absent_is_false() {
        let on = list_with(vec![S::simple("mandatory", "true")]);
        let off = list_with(vec![S::simple("mandatory", "false")]);
        let none = list_with(vec![]);
        let kind = ComparatorKind::Mandatory;
        assert_eq!(
            kind.diff(stmt(&none, "mandatory"), stmt(&on, "mandatory")),
            vec![ChangeCondition::Reduce]
        );
        assert_eq!(
            kind.diff(stmt(&on, "mandatory"), stmt(&off, "mandatory")),
            vec![ChangeCondition::Changed, ChangeCondition::Expand]
        );
        assert_eq!(
            kind.diff(stmt(&none, "mandatory"), stmt(&off, "mandatory")),
            vec![ChangeCondition::Added]
        );
    }

    #[test]
    fn test_base_verdict_depends_on_parent() {
        let doc = ModuleSetDoc::new([S::new("module").arg("m").children([
            S::simple("namespace", "urn:m"),
            S::simple("prefix", "m"),
            S::new("identity").arg("eth").child(S::simple("base", "iface")),
            S::new("leaf").arg("t").child(
                S::new("type")
                    .arg("identityref")
                    .child(S::simple("base", "iface")),
            ),
        ])]);
        let ctx = SchemaContext::from_doc(&doc).unwrap();
        let module = ctx.module("m").unwrap();
        let identity_base = module.child("identity").and_then(|i| i.child("base"));
        let type_base = module
            .child("leaf")
            .and_then(|l| l.child("type"))
            .and_then(|t| t.child("base"));
        let kind = ComparatorKind::Base;
        let nbc = Compatibility::NonBackwardCompatible;
        let bc = Compatibility::BackwardCompatible;
        assert_eq!(kind.default_verdict(identity_base, None, ChangeCondition::Deleted).compatibility, nbc);
        assert_eq!(kind.default_verdict(None, identity_base, ChangeCondition::Added).compatibility, bc);
        assert_eq!(kind.default_verdict(None, type_base, ChangeCondition::Added).compatibility, nbc);
        assert_eq!(kind.default_verdict(type_base, None, ChangeCondition::Deleted).compatibility, bc);
    }

    #[test]
    fn test_unique_growth_is_reduce() {
        let base = vec![
            S::new("leaf").arg("a"),
            S::new("leaf").arg("b"),
        ];
        let left = list_with(
            base.iter().cloned().chain([S::simple("unique", "a")]).collect(),
        );
        let right = list_with(
            base.iter().cloned().chain([S::simple("unique", "a b")]).collect(),
        );
        assert_eq!(
            ComparatorKind::Unique.diff(stmt(&left, "unique"), stmt(&right, "unique")),
            vec![ChangeCondition::Reduce]
        );
        assert_eq!(
            ComparatorKind::Unique.diff(stmt(&right, "unique"), stmt(&left, "unique")),
            vec![ChangeCondition::Expand]
        );
    }
}
