//! Serialized statement trees
//!
//! A module set is a list of `module` / `submodule` statement documents, read
//! from YAML or JSON. Grouping and augment expansion happens upstream: a
//! `uses` statement carries the nodes it instantiates in `expansion`.
//!
//! ```yaml
//! modules:
//!   - keyword: module
//!     arg: acme
//!     children:
//!       - { keyword: namespace, arg: "urn:acme" }
//!       - { keyword: prefix, arg: acme }
//!       - keyword: container
//!         arg: system
//!         children:
//!           - { keyword: leaf, arg: hostname, children: [{ keyword: type, arg: string }] }
//! ```

use crate::errors::{io_error, parse_error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One statement and its sub-statements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatementDoc {
    pub keyword: String,

    #[serde(default, alias = "arg", skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,

    /// Inactive schema nodes (e.g. disabled by a feature) are skipped by comparison
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Overrides the namespace inherited from the module for this subtree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Source line, reporting only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// Source file, only meaningful on module roots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<StatementDoc>,

    /// Nodes contributed by expansion (grouping instantiation); effective but not declared
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expansion: Vec<StatementDoc>,
}

impl StatementDoc {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Default::default()
        }
    }

    pub fn arg(mut self, argument: impl Into<String>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    pub fn child(mut self, child: StatementDoc) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = StatementDoc>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn expanded(mut self, node: StatementDoc) -> Self {
        self.expansion.push(node);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = Some(false);
        self
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Shorthand for a leaf-like statement `keyword argument;`
    pub fn simple(keyword: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::new(keyword).arg(argument)
    }
}

/// A set of modules making up one side of a comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleSetDoc {
    pub modules: Vec<StatementDoc>,
}

impl ModuleSetDoc {
    pub fn new(modules: impl IntoIterator<Item = StatementDoc>) -> Self {
        Self {
            modules: modules.into_iter().collect(),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| parse_error("module set (YAML)", e))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| parse_error("module set (JSON)", e))
    }

    /// Read a module set; `.json` files are JSON, anything else is YAML
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        if is_json_path(path) {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }
}

pub(crate) fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
