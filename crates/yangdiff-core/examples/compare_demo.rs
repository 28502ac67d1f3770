//! Compare Demonstration
//!
//! Two revisions of a small module compared in all three modes.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Changes between the revisions:
//! 1. A mandatory leaf is added (NBC)
//! 2. `max-elements` shrinks (NBC unless a rule relaxes it)
//! 3. An enum value is added (BC)

use yangdiff_core::rules::{load_rules_from_str, RuleFormat};
use yangdiff_core::{
    render::overall_verdict, render_text, ComparatorRegistry, CompareType, ComparisonReport,
    ModuleSetDoc, RuleTable, SchemaContext, StatementDoc as S, YangComparator,
};

fn revision(new: bool) -> ModuleSetDoc {
    let mut system = S::new("container").arg("system").children([
        S::new("leaf-list").arg("dns").children([
            S::simple("type", "string"),
            S::simple("max-elements", if new { "4" } else { "8" }),
        ]),
        S::new("leaf").arg("mode").child(
            S::new("type")
                .arg("enumeration")
                .child(S::new("enum").arg("fast"))
                .child(S::new("enum").arg("safe"))
                .children(new.then(|| S::new("enum").arg("eco"))),
        ),
    ]);
    if new {
        system = system.child(
            S::new("leaf")
                .arg("hostname")
                .children([S::simple("type", "string"), S::simple("mandatory", "true")]),
        );
    }
    ModuleSetDoc::new([S::new("module").arg("acme-system").children([
        S::simple("namespace", "urn:acme:system"),
        S::simple("prefix", "sys"),
        system,
    ])])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== yangdiff Compare Demo ===\n");

    let left = SchemaContext::from_doc(&revision(false))?;
    let right = SchemaContext::from_doc(&revision(true))?;
    let comparator = YangComparator::new(&left, &right);
    let registry = ComparatorRegistry::standard();

    for compare_type in [CompareType::Stmt, CompareType::Tree] {
        println!("## {}\n", compare_type);
        let results = comparator.compare(compare_type, &RuleTable::new(), &registry);
        print!("{}", render_text(&results));
        println!();
    }

    println!("## compatible-check with a relaxing rule\n");
    let rules = load_rules_from_str(
        "rules:\n  - rule-id: dns-limit\n    statements: [max-elements]\n    condition: reduce\n    compatible: bc\n",
        RuleFormat::Yaml,
    )?;
    let results = comparator.compare(CompareType::CompatibleCheck, &rules, &registry);
    println!("verdict: {}", overall_verdict(&results));
    let report = ComparisonReport::build(CompareType::CompatibleCheck, &results, Some(rules.digest()?));
    println!("{}", report.to_json_pretty()?);

    Ok(())
}
