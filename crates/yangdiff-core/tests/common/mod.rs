#![allow(dead_code)]

use yangdiff_core::rules::{load_rules_from_str, RuleFormat};
use yangdiff_core::{
    ComparatorRegistry, CompareResult, CompareType, ModuleSetDoc, RuleTable, SchemaContext,
    StatementDoc as S, StatementResult, TreeResult, YangComparator,
};

/// A main module `name` with namespace `urn:<name>` and the given prefix
pub fn module(name: &str, prefix: &str, children: Vec<S>) -> S {
    S::new("module")
        .arg(name)
        .children([
            S::simple("namespace", format!("urn:{}", name)),
            S::simple("prefix", prefix),
        ])
        .children(children)
}

/// Build a context, panicking on malformed test input
pub fn context(modules: Vec<S>) -> SchemaContext {
    SchemaContext::from_doc(&ModuleSetDoc::new(modules)).expect("test module set should load")
}

/// Context holding the single module `acme` (prefix `a`)
pub fn acme(children: Vec<S>) -> SchemaContext {
    context(vec![module("acme", "a", children)])
}

pub fn leaf(name: &str, ty: &str) -> S {
    S::new("leaf").arg(name).child(S::simple("type", ty))
}

pub fn container(name: &str, children: Vec<S>) -> S {
    S::new("container").arg(name).children(children)
}

pub fn rules(yaml: &str) -> RuleTable {
    load_rules_from_str(yaml, RuleFormat::Yaml).expect("test rules should load")
}

/// Run one pass with the standard registry
pub fn run<'a>(
    left: &'a SchemaContext,
    right: &'a SchemaContext,
    compare_type: CompareType,
    rules: &RuleTable,
) -> Vec<CompareResult<'a>> {
    YangComparator::new(left, right).compare(compare_type, rules, &ComparatorRegistry::standard())
}

pub fn trees<'r, 'a>(results: &'r [CompareResult<'a>]) -> Vec<&'r TreeResult<'a>> {
    results
        .iter()
        .filter_map(|r| match r {
            CompareResult::Tree(t) => Some(t),
            CompareResult::Statement(_) => None,
        })
        .collect()
}

pub fn statements<'r, 'a>(results: &'r [CompareResult<'a>]) -> Vec<&'r StatementResult<'a>> {
    results
        .iter()
        .filter_map(|r| match r {
            CompareResult::Statement(s) => Some(s),
            CompareResult::Tree(_) => None,
        })
        .collect()
}

/// The only tree result at `path`
pub fn tree_at<'r, 'a>(results: &'r [CompareResult<'a>], path: &str) -> &'r TreeResult<'a> {
    let matching: Vec<_> = trees(results)
        .into_iter()
        .filter(|t| t.schema_path == path)
        .collect();
    assert_eq!(matching.len(), 1, "expected one tree result at {path}: {results:?}");
    matching[0]
}
