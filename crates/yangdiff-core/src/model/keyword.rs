//! Statement keywords

use std::fmt;

/// Keyword of a statement as written in the source tree.
///
/// Builtin keywords are plain identifiers (`container`, `max-elements`).
/// Extension keywords carry the prefix they were written with; the module the
/// prefix maps to is resolved later by the owning [`SchemaContext`].
///
/// [`SchemaContext`]: crate::model::SchemaContext
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Keyword {
    Builtin(String),
    Extension { prefix: String, name: String },
}

impl Keyword {
    /// Parse a raw keyword; anything with a `prefix:` part is an extension
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((prefix, name)) if !prefix.is_empty() && !name.is_empty() => Keyword::Extension {
                prefix: prefix.to_string(),
                name: name.to_string(),
            },
            _ => Keyword::Builtin(raw.to_string()),
        }
    }

    /// Local part of the keyword
    pub fn local_name(&self) -> &str {
        match self {
            Keyword::Builtin(name) => name,
            Keyword::Extension { name, .. } => name,
        }
    }

    pub fn is_extension(&self) -> bool {
        matches!(self, Keyword::Extension { .. })
    }

    /// True when this is the builtin keyword `name`
    pub fn is(&self, name: &str) -> bool {
        matches!(self, Keyword::Builtin(k) if k == name)
    }

    /// True when this is one of the builtin keywords in `names`
    pub fn is_any(&self, names: &[&str]) -> bool {
        match self {
            Keyword::Builtin(k) => names.contains(&k.as_str()),
            Keyword::Extension { .. } => false,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Keyword::Builtin(name) => write!(f, "{}", name),
            Keyword::Extension { prefix, name } => write!(f, "{}:{}", prefix, name),
        }
    }
}

/// Keywords whose statements are schema nodes. `uses` is virtual: it is a
/// schema node for filtering purposes but is flattened away from schema children.
pub const SCHEMA_NODE_KEYWORDS: &[&str] = &[
    "container",
    "list",
    "leaf",
    "leaf-list",
    "choice",
    "case",
    "anydata",
    "anyxml",
    "rpc",
    "action",
    "input",
    "output",
    "notification",
    "augment",
    "uses",
];

/// Keywords of statements other statements refer to by name
pub const REFERENCABLE_KEYWORDS: &[&str] = &["typedef", "grouping", "identity", "feature", "extension"];

/// Keywords whose argument names another statement
pub const IDENTIFIER_REF_KEYWORDS: &[&str] = &["type", "base", "if-feature", "uses"];

/// Module header and meta statements
pub const META_KEYWORDS: &[&str] = &[
    "yang-version",
    "namespace",
    "prefix",
    "belongs-to",
    "organization",
    "contact",
    "description",
    "reference",
    "revision",
];

/// Module linkage statements
pub const LINKAGE_KEYWORDS: &[&str] = &["import", "include"];
