//! Resolution of `unique` arguments to the leaves they name

use crate::model::NodeRef;

/// Leaves named by a `unique` statement, resolved against its list.
/// Descendant paths that do not resolve are skipped.
pub fn unique_nodes<'a>(unique: NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let Some(list) = unique.logical_parent() else {
        return Vec::new();
    };
    unique
        .argument()
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|path| resolve_descendant(list, path))
        .collect()
}

fn resolve_descendant<'a>(from: NodeRef<'a>, path: &str) -> Option<NodeRef<'a>> {
    let mut current = from;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let name = segment.split_once(':').map_or(segment, |(_, local)| local);
        current = find_data_child(current, name)?;
    }
    Some(current)
}

/// Data-tree child by name; `choice` and `case` do not appear in data paths
fn find_data_child<'a>(node: NodeRef<'a>, name: &str) -> Option<NodeRef<'a>> {
    for child in node.schema_children() {
        if child.keyword().is_any(&["choice", "case"]) {
            if let Some(found) = find_data_child(child, name) {
                return Some(found);
            }
        } else if child.argument() == Some(name) {
            return Some(child);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModuleSetDoc, SchemaContext, StatementDoc as S};

    #[test]
    fn test_resolves_nested_and_choice_members() {
        let doc = ModuleSetDoc::new([S::new("module").arg("m").children([
            S::simple("namespace", "urn:m"),
            S::simple("prefix", "m"),
            S::new("list").arg("server").children([
                S::simple("key", "name"),
                S::simple("unique", "ip m:opts/port missing"),
                S::new("leaf").arg("name"),
                S::new("leaf").arg("ip"),
                S::new("container").arg("opts").child(
                    S::new("choice")
                        .arg("c")
                        .child(S::new("case").arg("a").child(S::new("leaf").arg("port"))),
                ),
            ]),
        ])]);
        let ctx = SchemaContext::from_doc(&doc).unwrap();
        let unique = ctx
            .module("m")
            .and_then(|m| m.child("list"))
            .and_then(|l| l.child("unique"))
            .unwrap();
        let names: Vec<_> = unique_nodes(unique)
            .iter()
            .map(|n| n.argument().unwrap_or_default().to_string())
            .collect();
        assert_eq!(names, vec!["ip", "port"]);
    }
}
