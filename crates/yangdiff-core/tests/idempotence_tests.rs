//! Property tests: a module set compared with itself reports nothing

mod common;

use common::{context, module, run};
use proptest::prelude::*;
use yangdiff_core::compare::{search, similarity, MatchedSet};
use yangdiff_core::{CompareType, RuleTable, StatementDoc as S};

#[derive(Debug, Clone)]
enum Shape {
    Leaf { ty: &'static str, described: bool },
    LeafList { max: Option<u8> },
    Container(Vec<Shape>),
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        (
            prop::sample::select(vec!["string", "int8", "uint32", "boolean"]),
            any::<bool>()
        )
            .prop_map(|(ty, described)| Shape::Leaf { ty, described }),
        prop::option::of(1u8..20).prop_map(|max| Shape::LeafList { max }),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Shape::Container)
    })
}

/// Siblings are named by position so names stay unique
fn to_doc(shape: &Shape, index: usize) -> S {
    let name = format!("n{}", index);
    match shape {
        Shape::Leaf { ty, described } => {
            let mut leaf = S::new("leaf").arg(name).child(S::simple("type", *ty));
            if *described {
                leaf = leaf.child(S::simple("description", "generated"));
            }
            leaf
        }
        Shape::LeafList { max } => {
            let mut list = S::new("leaf-list")
                .arg(name)
                .child(S::simple("type", "string"));
            if let Some(max) = max {
                list = list.child(S::simple("max-elements", max.to_string()));
            }
            list
        }
        Shape::Container(children) => S::new("container").arg(name).children(
            children
                .iter()
                .enumerate()
                .map(|(i, child)| to_doc(child, i)),
        ),
    }
}

fn module_docs(shapes: &[Shape]) -> Vec<S> {
    vec![module(
        "gen",
        "g",
        shapes.iter().enumerate().map(|(i, s)| to_doc(s, i)).collect(),
    )]
}

proptest! {
    #[test]
    fn prop_self_comparison_is_empty(shapes in prop::collection::vec(shape(), 0..5)) {
        let left = context(module_docs(&shapes));
        let right = context(module_docs(&shapes));

        for compare_type in [CompareType::Stmt, CompareType::Tree, CompareType::CompatibleCheck] {
            let results = run(&left, &right, compare_type, &RuleTable::new());
            prop_assert!(results.is_empty(), "{}: {:?}", compare_type, results);
        }
    }

    #[test]
    fn prop_identical_statements_find_each_other(shapes in prop::collection::vec(shape(), 1..5)) {
        let left = context(module_docs(&shapes));
        let right = context(module_docs(&shapes));
        let left_module = left.modules()[0];
        let right_module = right.modules()[0];

        let candidates = right_module.children();
        let matched = MatchedSet::new();
        for (i, stmt) in left_module.children().into_iter().enumerate() {
            let found = search(stmt, &candidates, &matched);
            prop_assert!(found.is_some_and(|f| f.same_node(&candidates[i])));
        }

        prop_assert!(similarity(left_module, right_module) >= 3);
        prop_assert_eq!(
            similarity(left_module, right_module),
            similarity(right_module, left_module)
        );
    }
}
