//! Text and JSON projection of full comparison passes

mod common;

use common::{acme, context, leaf, module, run};
use serde_json::Value;
use yangdiff_core::{render_text, CompareType, ComparisonReport, RuleTable, StatementDoc as S};

fn with_source(mut module: S, source: &str) -> S {
    module.source = Some(source.to_string());
    module
}

#[test]
fn test_stmt_text_lists_added_statement_with_position() {
    let left = context(vec![with_source(
        module("acme", "a", vec![leaf("x", "string")]),
        "acme.yang",
    )]);
    let right = context(vec![with_source(
        module("acme", "a", vec![leaf("x", "string"), leaf("y", "int8").at_line(9)]),
        "acme.yang",
    )]);

    let results = run(&left, &right, CompareType::Stmt, &RuleTable::new());

    assert_eq!(
        render_text(&results),
        "module:acme\n\tadded:\n\t\tleaf y\t@module:acme acme.yang:9\n\tdeleted:\n\tchanged:\n"
    );
}

#[test]
fn test_tree_text_nests_meta_changes() {
    let described = |text: &str| {
        acme(vec![leaf("x", "string")
            .at_line(3)
            .child(S::simple("description", text).at_line(4))])
    };
    let left = described("old");
    let right = described("new");

    let results = run(&left, &right, CompareType::Tree, &RuleTable::new());

    assert_eq!(
        render_text(&results),
        "module:acme\n\tadded:\n\tdeleted:\n\tchanged:\n\
         \t\t/a:x\t@module:acme 3\n\
         \t\t\tchanged: FROM description old TO description new\t@module:acme 4\n"
    );
}

#[test]
fn test_new_module_origin_without_position() {
    let left = context(vec![module("acme", "a", vec![])]);
    let right = context(vec![module("acme", "a", vec![]), module("extra", "x", vec![])]);

    let results = run(&left, &right, CompareType::CompatibleCheck, &RuleTable::new());

    assert_eq!(
        render_text(&results),
        "module:extra\n\tadded:\n\t\tmodule extra\t@module:extra\n\tdeleted:\n\tchanged:\n"
    );
}

#[test]
fn test_report_collects_obsoleted_and_deprecated_paths() {
    let left = acme(vec![leaf("x", "string"), leaf("y", "string")]);
    let right = acme(vec![
        leaf("x", "string").child(S::simple("status", "obsolete")),
        leaf("y", "string").child(S::simple("status", "deprecated")),
    ]);

    let results = run(&left, &right, CompareType::CompatibleCheck, &RuleTable::new());
    let report = ComparisonReport::build(CompareType::CompatibleCheck, &results, None);
    let json: Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["compare_type"], "compatible-check");
    assert_eq!(json["verdict"], "nbc");
    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["summary"]["non_backward_compatible"], 2);

    let paths = &json["modules"][0]["paths"];
    assert_eq!(paths["changed"].as_array().unwrap().len(), 2);
    assert_eq!(paths["obsoleted"][0]["path"], "/a:x");
    assert_eq!(paths["deprecated"][0]["path"], "/a:y");
    assert_eq!(paths["obsoleted"][0]["compatibility"]["compatibility"], "nbc");
}

#[test]
fn test_stmt_report_has_statements_only() {
    let left = acme(vec![leaf("x", "string")]);
    let right = acme(vec![]);

    let results = run(&left, &right, CompareType::Stmt, &RuleTable::new());
    let report = ComparisonReport::build(CompareType::Stmt, &results, Some("d1".into()));
    let json: Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

    assert!(json.get("verdict").is_none());
    assert_eq!(json["rules_digest"], "d1");
    let module = &json["modules"][0];
    assert_eq!(module["name"], "acme");
    assert!(module.get("paths").is_none());
    let deleted = &module["statements"]["deleted"][0];
    assert_eq!(deleted["statement"], "leaf x");
    assert!(deleted.get("compatibility").is_none());
}
