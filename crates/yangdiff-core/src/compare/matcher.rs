//! Pairing of left statements with right candidates

use crate::compare::equality::{nodes_equal, value_equal};
use crate::model::grammar::statement_def;
use crate::model::{NodeRef, SchemaContext, StatementId};
use std::collections::HashSet;

/// Statements already paired during one traversal.
///
/// Membership is by identity (context and statement id): two distinct
/// statements with equal values are never confused.
#[derive(Debug, Default)]
pub struct MatchedSet {
    members: HashSet<(usize, StatementId)>,
}

impl MatchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(node: &NodeRef<'_>) -> (usize, StatementId) {
        (node.context() as *const SchemaContext as usize, node.id())
    }

    pub fn insert(&mut self, node: NodeRef<'_>) -> bool {
        self.members.insert(Self::key(&node))
    }

    pub fn contains(&self, node: &NodeRef<'_>) -> bool {
        self.members.contains(&Self::key(node))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Recursive similarity score.
///
/// 0 for different keywords, 1 for unequal values, 2 for equal values with a
/// different number of effective children. Otherwise 3 plus, for each child
/// of `a`, its best score against a not yet used child of `b` (greedy, first
/// maximum wins).
pub fn similarity(a: NodeRef<'_>, b: NodeRef<'_>) -> u32 {
    if a.keyword_identity() != b.keyword_identity() {
        return 0;
    }
    if !value_equal(a, b) {
        return 1;
    }
    let a_children = a.effective_children();
    let b_children = b.effective_children();
    if a_children.len() != b_children.len() {
        return 2;
    }

    let mut score = 3;
    let mut used = MatchedSet::new();
    for child in &a_children {
        let mut best = 0;
        let mut best_node = None;
        for candidate in &b_children {
            if used.contains(candidate) {
                continue;
            }
            let s = similarity(*child, *candidate);
            if s > best {
                best = s;
                best_node = Some(*candidate);
            }
        }
        score += best;
        if let Some(node) = best_node {
            used.insert(node);
        }
    }
    score
}

/// Find the counterpart of `statement` among `candidates`.
///
/// Equal candidates win, ties broken by [`similarity`]. Failing that the
/// grammar decides: a statement that may appear at most once under its
/// parent, or an extension statement, pairs with the first unmatched
/// candidate; an unbounded statement has no counterpart.
pub fn search<'r>(
    statement: NodeRef<'_>,
    candidates: &[NodeRef<'r>],
    matched: &MatchedSet,
) -> Option<NodeRef<'r>> {
    let unmatched: Vec<NodeRef<'r>> = candidates
        .iter()
        .copied()
        .filter(|c| c.keyword_identity() == statement.keyword_identity() && !matched.contains(c))
        .collect();
    if unmatched.is_empty() {
        return None;
    }

    let equal: Vec<NodeRef<'r>> = unmatched
        .iter()
        .copied()
        .filter(|c| nodes_equal(statement, *c))
        .collect();
    if equal.len() == 1 {
        return Some(equal[0]);
    }
    if equal.len() > 1 {
        let mut best = 0;
        let mut best_node = None;
        for candidate in &equal {
            let s = similarity(statement, *candidate);
            if s <= 1 {
                continue;
            }
            if s > best {
                best = s;
                best_node = Some(*candidate);
            }
        }
        if best_node.is_some() {
            return best_node;
        }
    }

    let parent = statement.logical_parent()?;
    let first_unmatched = unmatched.first().copied();
    let Some(def) = statement_def(parent.keyword()) else {
        if parent.is_unknown_extension() {
            tracing::debug!(keyword = %statement.keyword(), "positional match under extension");
            return first_unmatched;
        }
        return None;
    };
    match def.cardinality(statement.keyword()) {
        None if statement.is_unknown_extension() => {
            tracing::debug!(keyword = %statement.keyword(), "positional match of extension statement");
            first_unmatched
        }
        None => None,
        Some(cardinality) if cardinality.is_unbounded() => None,
        Some(_) => first_unmatched,
    }
}
