//! Structural equality between statements of two contexts

use crate::model::NodeRef;

/// Same keyword identity and same argument
pub fn value_equal(a: NodeRef<'_>, b: NodeRef<'_>) -> bool {
    a.keyword_identity() == b.keyword_identity() && a.argument() == b.argument()
}

/// Equality of optional statements; two absent statements are equal
pub fn statements_equal(a: Option<NodeRef<'_>>, b: Option<NodeRef<'_>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => nodes_equal(a, b),
        _ => false,
    }
}

/// Structural equality.
///
/// Schema nodes must also share a namespace and have equal closest ancestor
/// nodes. Identifier references compare their resolved targets when both
/// resolve and their arguments when neither does.
pub fn nodes_equal(a: NodeRef<'_>, b: NodeRef<'_>) -> bool {
    if a.is_schema_node() && b.is_schema_node() {
        if a.namespace() != b.namespace() {
            return false;
        }
        if !statements_equal(a.closest_ancestor_node(), b.closest_ancestor_node()) {
            return false;
        }
    }

    if a.is_identifier_ref() && b.is_identifier_ref() {
        if a.keyword_identity() != b.keyword_identity() {
            return false;
        }
        return match (a.reference(), b.reference()) {
            (Some(left), Some(right)) => left == right,
            (None, None) => a.argument() == b.argument(),
            _ => false,
        };
    }

    value_equal(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModuleSetDoc, SchemaContext, StatementDoc as S};

    fn module(ns: &str, leaf_type: &str) -> ModuleSetDoc {
        ModuleSetDoc::new([S::new("module").arg("m").children([
            S::simple("namespace", ns),
            S::simple("prefix", "m"),
            S::new("typedef").arg("t1").child(S::simple("type", "string")),
            S::new("container").arg("c").child(
                S::new("leaf").arg("l").child(S::simple("type", leaf_type)),
            ),
        ])])
    }

    fn leaf(ctx: &SchemaContext) -> NodeRef<'_> {
        ctx.module("m")
            .and_then(|m| m.child("container"))
            .and_then(|c| c.child("leaf"))
            .unwrap()
    }

    #[test]
    fn test_schema_nodes_need_same_namespace() {
        let left = SchemaContext::from_doc(&module("urn:a", "string")).unwrap();
        let same = SchemaContext::from_doc(&module("urn:a", "string")).unwrap();
        let moved = SchemaContext::from_doc(&module("urn:b", "string")).unwrap();
        assert!(nodes_equal(leaf(&left), leaf(&same)));
        assert!(!nodes_equal(leaf(&left), leaf(&moved)));
    }

    #[test]
    fn test_resolved_and_unresolved_references_differ() {
        let left = SchemaContext::from_doc(&module("urn:a", "t1")).unwrap();
        let right = SchemaContext::from_doc(&module("urn:a", "t2")).unwrap();
        let left_type = leaf(&left).child("type").unwrap();
        let right_type = leaf(&right).child("type").unwrap();
        assert!(left_type.reference().is_some());
        assert!(right_type.reference().is_none());
        assert!(!nodes_equal(left_type, right_type));
        assert!(nodes_equal(left_type, left_type));
    }

    #[test]
    fn test_absent_statements() {
        let ctx = SchemaContext::from_doc(&module("urn:a", "string")).unwrap();
        assert!(statements_equal(None, None));
        assert!(!statements_equal(Some(leaf(&ctx)), None));
    }
}
