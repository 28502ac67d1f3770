//! Full classified comparison of module sets

mod common;

use common::{acme, context, leaf, module, run, statements, tree_at};
use yangdiff_core::render::overall_verdict;
use yangdiff_core::{
    ChangeType, CompareType, Compatibility, RuleTable, StatementDoc as S,
};

#[test]
fn test_identical_sets_produce_nothing() {
    let build = || acme(vec![leaf("a", "string"), S::simple("organization", "Acme")]);
    let left = build();
    let right = build();

    let results = run(&left, &right, CompareType::CompatibleCheck, &RuleTable::new());

    assert!(results.is_empty(), "{results:?}");
}

#[test]
fn test_module_deleted_is_nbc() {
    let left = context(vec![module("acme", "a", vec![]), module("extra", "x", vec![])]);
    let right = context(vec![module("acme", "a", vec![])]);

    let results = run(&left, &right, CompareType::CompatibleCheck, &RuleTable::new());

    assert_eq!(results.len(), 1, "{results:?}");
    assert_eq!(results[0].change_type(), ChangeType::Delete);
    assert_eq!(results[0].verdict(), Compatibility::NonBackwardCompatible);
    assert_eq!(results[0].module_name(), Some("extra"));
}

#[test]
fn test_module_added_is_bc() {
    let left = context(vec![module("acme", "a", vec![])]);
    let right = context(vec![module("acme", "a", vec![]), module("extra", "x", vec![])]);

    let results = run(&left, &right, CompareType::CompatibleCheck, &RuleTable::new());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].change_type(), ChangeType::Add);
    assert_eq!(overall_verdict(&results), Compatibility::BackwardCompatible);
}

#[test]
fn test_namespace_change_is_nbc() {
    let with_ns = |ns: &str| {
        context(vec![S::new("module")
            .arg("acme")
            .children([S::simple("namespace", ns), S::simple("prefix", "a")])])
    };
    let left = with_ns("urn:acme");
    let right = with_ns("urn:acme:v2");

    let results = run(&left, &right, CompareType::CompatibleCheck, &RuleTable::new());

    assert_eq!(results.len(), 1);
    let info = results[0].compatibility().unwrap();
    assert_eq!(info.compatibility, Compatibility::NonBackwardCompatible);
    assert!(info.description.as_deref().unwrap().contains("namespace"));
}

#[test]
fn test_enum_added_is_bc_and_removed_is_nbc() {
    fn colors(names: &[&str]) -> yangdiff_core::SchemaContext {
        acme(vec![S::new("leaf").arg("color").child(
            S::new("type")
                .arg("enumeration")
                .children(names.iter().map(|n| S::simple("enum", *n))),
        )])
    }
    let two = colors(&["red", "green"]);
    let three = colors(&["red", "green", "blue"]);

    let added = run(&two, &three, CompareType::CompatibleCheck, &RuleTable::new());
    let tree = tree_at(&added, "/a:color");
    assert_eq!(tree.compatibility.compatibility, Compatibility::BackwardCompatible);
    assert_eq!(tree.meta_results.len(), 1);
    assert_eq!(tree.meta_results[0].change_type, ChangeType::Add);

    let removed = run(&three, &two, CompareType::CompatibleCheck, &RuleTable::new());
    let tree = tree_at(&removed, "/a:color");
    assert_eq!(tree.compatibility.compatibility, Compatibility::NonBackwardCompatible);
}

#[test]
fn test_typedef_deleted_is_nbc() {
    let left = acme(vec![S::new("typedef").arg("percent").child(S::simple("type", "uint8"))]);
    let right = acme(vec![]);

    let results = run(&left, &right, CompareType::CompatibleCheck, &RuleTable::new());

    let stmts = statements(&results);
    assert_eq!(stmts.len(), 1);
    assert_eq!(stmts[0].change_type, ChangeType::Delete);
    assert_eq!(stmts[0].verdict(), Compatibility::NonBackwardCompatible);
}

#[test]
fn test_identity_base_removed_is_nbc() {
    let identities = |with_base: bool| {
        let mut eth = S::new("identity").arg("ethernet");
        if with_base {
            eth = eth.child(S::simple("base", "interface-type"));
        }
        acme(vec![S::new("identity").arg("interface-type"), eth])
    };
    let left = identities(true);
    let right = identities(false);

    let results = run(&left, &right, CompareType::CompatibleCheck, &RuleTable::new());

    assert_eq!(results.len(), 1, "{results:?}");
    assert_eq!(results[0].verdict(), Compatibility::NonBackwardCompatible);
    assert_eq!(
        results[0].left().and_then(|n| n.argument()),
        Some("interface-type")
    );
}

#[test]
fn test_if_feature_added_is_nbc() {
    let left = acme(vec![S::new("feature").arg("ipv6"), leaf("addr6", "string")]);
    let right = acme(vec![
        S::new("feature").arg("ipv6"),
        leaf("addr6", "string").child(S::simple("if-feature", "ipv6")),
    ]);

    let results = run(&left, &right, CompareType::CompatibleCheck, &RuleTable::new());

    let tree = tree_at(&results, "/a:addr6");
    assert_eq!(tree.compatibility.compatibility, Compatibility::NonBackwardCompatible);
}

#[test]
fn test_unique_replaced_is_nbc() {
    let list = |unique: &str| {
        acme(vec![S::new("list").arg("server").children([
            S::simple("key", "name"),
            leaf("name", "string"),
            leaf("ip", "string"),
            S::simple("unique", unique),
        ])])
    };
    let left = list("ip");
    let right = list("ip name");

    let results = run(&left, &right, CompareType::CompatibleCheck, &RuleTable::new());

    let tree = tree_at(&results, "/a:server");
    assert_eq!(tree.compatibility.compatibility, Compatibility::NonBackwardCompatible);
    let kinds: Vec<_> = tree.meta_results.iter().map(|m| m.change_type).collect();
    assert_eq!(kinds, vec![ChangeType::Delete, ChangeType::Add]);
}

#[test]
fn test_extension_statements_pair_in_order() {
    // GIVEN two unmatched extension statements on each side
    let build = |args: [&str; 2]| {
        context(vec![
            module(
                "ext-mod",
                "e",
                vec![S::new("extension")
                    .arg("annot")
                    .child(S::simple("argument", "text"))],
            ),
            module(
                "acme",
                "a",
                vec![
                    S::new("import").arg("ext-mod").child(S::simple("prefix", "ext")),
                    leaf("x", "string").children(args.map(|a| S::simple("ext:annot", a))),
                ],
            ),
        ])
    };
    let left = build(["a", "b"]);
    let right = build(["c", "d"]);

    let results = run(&left, &right, CompareType::CompatibleCheck, &RuleTable::new());

    // THEN they are paired first-to-first, second-to-second
    let tree = tree_at(&results, "/a:x");
    let pairs: Vec<_> = tree
        .meta_results
        .iter()
        .map(|m| {
            (
                m.left.and_then(|n| n.argument()),
                m.right.and_then(|n| n.argument()),
            )
        })
        .collect();
    assert_eq!(pairs, vec![(Some("a"), Some("c")), (Some("b"), Some("d"))]);
    assert!(tree
        .meta_results
        .iter()
        .all(|m| m.change_type == ChangeType::Modify));
}

#[test]
fn test_submodule_content_belongs_to_main_module() {
    let build = |extra: bool| {
        let mut sub_children = vec![
            S::new("belongs-to").arg("acme").child(S::simple("prefix", "a")),
            leaf("from-sub", "string"),
        ];
        if extra {
            sub_children.push(leaf("more", "string"));
        }
        context(vec![
            module(
                "acme",
                "a",
                vec![S::new("include").arg("acme-sub")],
            ),
            S::new("submodule").arg("acme-sub").children(sub_children),
        ])
    };
    let left = build(false);
    let right = build(true);

    let results = run(&left, &right, CompareType::CompatibleCheck, &RuleTable::new());

    assert_eq!(results.len(), 1, "{results:?}");
    assert_eq!(tree_at(&results, "/a:more").change_type, ChangeType::Add);
    assert_eq!(results[0].module_name(), Some("acme-sub"));
}
