//! Sub-statement cardinality of builtin statements (RFC 7950).
//!
//! Used by the node matcher to decide whether an unmatched statement may be
//! paired positionally. Extension statements have no definition here.

use crate::model::keyword::Keyword;

/// Allowed occurrence count of a sub-statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    pub min: u32,
    /// `None` means unbounded
    pub max: Option<u32>,
}

impl Cardinality {
    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }
}

const ONE: Cardinality = Cardinality {
    min: 1,
    max: Some(1),
};
const OPT: Cardinality = Cardinality {
    min: 0,
    max: Some(1),
};
const MANY: Cardinality = Cardinality { min: 0, max: None };
const SOME: Cardinality = Cardinality { min: 1, max: None };

type Subs = &'static [(&'static str, Cardinality)];

/// Grammar entry of one builtin keyword
#[derive(Debug)]
pub struct StatementDef {
    pub keyword: &'static str,
    substatements: Subs,
}

impl StatementDef {
    /// Cardinality of `child` under this statement, `None` if not permitted.
    /// Extension children are never declared.
    pub fn cardinality(&self, child: &Keyword) -> Option<Cardinality> {
        match child {
            Keyword::Builtin(name) => self
                .substatements
                .iter()
                .find(|(k, _)| *k == name.as_str())
                .map(|(_, c)| *c),
            Keyword::Extension { .. } => None,
        }
    }
}

const NONE: Subs = &[];

const DOC: Subs = &[("description", OPT), ("reference", OPT)];

const ERROR_INFO: Subs = &[
    ("description", OPT),
    ("error-app-tag", OPT),
    ("error-message", OPT),
    ("reference", OPT),
];

const MODULE_BODY: Subs = &[
    ("anydata", MANY),
    ("anyxml", MANY),
    ("augment", MANY),
    ("choice", MANY),
    ("contact", OPT),
    ("container", MANY),
    ("description", OPT),
    ("deviation", MANY),
    ("extension", MANY),
    ("feature", MANY),
    ("grouping", MANY),
    ("identity", MANY),
    ("import", MANY),
    ("include", MANY),
    ("leaf", MANY),
    ("leaf-list", MANY),
    ("list", MANY),
    ("namespace", ONE),
    ("notification", MANY),
    ("organization", OPT),
    ("prefix", ONE),
    ("reference", OPT),
    ("revision", MANY),
    ("rpc", MANY),
    ("typedef", MANY),
    ("uses", MANY),
    ("yang-version", ONE),
];

const SUBMODULE_BODY: Subs = &[
    ("anydata", MANY),
    ("anyxml", MANY),
    ("augment", MANY),
    ("belongs-to", ONE),
    ("choice", MANY),
    ("contact", OPT),
    ("container", MANY),
    ("description", OPT),
    ("deviation", MANY),
    ("extension", MANY),
    ("feature", MANY),
    ("grouping", MANY),
    ("identity", MANY),
    ("import", MANY),
    ("include", MANY),
    ("leaf", MANY),
    ("leaf-list", MANY),
    ("list", MANY),
    ("notification", MANY),
    ("organization", OPT),
    ("reference", OPT),
    ("revision", MANY),
    ("rpc", MANY),
    ("typedef", MANY),
    ("uses", MANY),
    ("yang-version", ONE),
];

const CONTAINER: Subs = &[
    ("action", MANY),
    ("anydata", MANY),
    ("anyxml", MANY),
    ("choice", MANY),
    ("config", OPT),
    ("container", MANY),
    ("description", OPT),
    ("grouping", MANY),
    ("if-feature", MANY),
    ("leaf", MANY),
    ("leaf-list", MANY),
    ("list", MANY),
    ("must", MANY),
    ("notification", MANY),
    ("presence", OPT),
    ("reference", OPT),
    ("status", OPT),
    ("typedef", MANY),
    ("uses", MANY),
    ("when", OPT),
];

const LEAF: Subs = &[
    ("config", OPT),
    ("default", OPT),
    ("description", OPT),
    ("if-feature", MANY),
    ("mandatory", OPT),
    ("must", MANY),
    ("reference", OPT),
    ("status", OPT),
    ("type", ONE),
    ("units", OPT),
    ("when", OPT),
];

const LEAF_LIST: Subs = &[
    ("config", OPT),
    ("default", MANY),
    ("description", OPT),
    ("if-feature", MANY),
    ("max-elements", OPT),
    ("min-elements", OPT),
    ("must", MANY),
    ("ordered-by", OPT),
    ("reference", OPT),
    ("status", OPT),
    ("type", ONE),
    ("units", OPT),
    ("when", OPT),
];

const LIST: Subs = &[
    ("action", MANY),
    ("anydata", MANY),
    ("anyxml", MANY),
    ("choice", MANY),
    ("config", OPT),
    ("container", MANY),
    ("description", OPT),
    ("grouping", MANY),
    ("if-feature", MANY),
    ("key", OPT),
    ("leaf", MANY),
    ("leaf-list", MANY),
    ("list", MANY),
    ("max-elements", OPT),
    ("min-elements", OPT),
    ("must", MANY),
    ("notification", MANY),
    ("ordered-by", OPT),
    ("reference", OPT),
    ("status", OPT),
    ("typedef", MANY),
    ("unique", MANY),
    ("uses", MANY),
    ("when", OPT),
];

const CHOICE: Subs = &[
    ("anydata", MANY),
    ("anyxml", MANY),
    ("case", MANY),
    ("choice", MANY),
    ("config", OPT),
    ("container", MANY),
    ("default", OPT),
    ("description", OPT),
    ("if-feature", MANY),
    ("leaf", MANY),
    ("leaf-list", MANY),
    ("list", MANY),
    ("mandatory", OPT),
    ("reference", OPT),
    ("status", OPT),
    ("when", OPT),
];

const CASE: Subs = &[
    ("anydata", MANY),
    ("anyxml", MANY),
    ("choice", MANY),
    ("container", MANY),
    ("description", OPT),
    ("if-feature", MANY),
    ("leaf", MANY),
    ("leaf-list", MANY),
    ("list", MANY),
    ("reference", OPT),
    ("status", OPT),
    ("uses", MANY),
    ("when", OPT),
];

const ANYDATA: Subs = &[
    ("config", OPT),
    ("description", OPT),
    ("if-feature", MANY),
    ("mandatory", OPT),
    ("must", MANY),
    ("reference", OPT),
    ("status", OPT),
    ("when", OPT),
];

const GROUPING: Subs = &[
    ("action", MANY),
    ("anydata", MANY),
    ("anyxml", MANY),
    ("choice", MANY),
    ("container", MANY),
    ("description", OPT),
    ("grouping", MANY),
    ("leaf", MANY),
    ("leaf-list", MANY),
    ("list", MANY),
    ("notification", MANY),
    ("reference", OPT),
    ("status", OPT),
    ("typedef", MANY),
    ("uses", MANY),
];

const USES: Subs = &[
    ("augment", MANY),
    ("description", OPT),
    ("if-feature", MANY),
    ("reference", OPT),
    ("refine", MANY),
    ("status", OPT),
    ("when", OPT),
];

const REFINE: Subs = &[
    ("config", OPT),
    ("default", MANY),
    ("description", OPT),
    ("if-feature", MANY),
    ("mandatory", OPT),
    ("max-elements", OPT),
    ("min-elements", OPT),
    ("must", MANY),
    ("presence", OPT),
    ("reference", OPT),
];

const AUGMENT: Subs = &[
    ("action", MANY),
    ("anydata", MANY),
    ("anyxml", MANY),
    ("case", MANY),
    ("choice", MANY),
    ("container", MANY),
    ("description", OPT),
    ("if-feature", MANY),
    ("leaf", MANY),
    ("leaf-list", MANY),
    ("list", MANY),
    ("notification", MANY),
    ("reference", OPT),
    ("status", OPT),
    ("uses", MANY),
    ("when", OPT),
];

const OPERATION: Subs = &[
    ("description", OPT),
    ("grouping", MANY),
    ("if-feature", MANY),
    ("input", OPT),
    ("output", OPT),
    ("reference", OPT),
    ("status", OPT),
    ("typedef", MANY),
];

const IO: Subs = &[
    ("anydata", MANY),
    ("anyxml", MANY),
    ("choice", MANY),
    ("container", MANY),
    ("grouping", MANY),
    ("leaf", MANY),
    ("leaf-list", MANY),
    ("list", MANY),
    ("must", MANY),
    ("typedef", MANY),
    ("uses", MANY),
];

const NOTIFICATION: Subs = &[
    ("anydata", MANY),
    ("anyxml", MANY),
    ("choice", MANY),
    ("container", MANY),
    ("description", OPT),
    ("grouping", MANY),
    ("if-feature", MANY),
    ("leaf", MANY),
    ("leaf-list", MANY),
    ("list", MANY),
    ("must", MANY),
    ("reference", OPT),
    ("status", OPT),
    ("typedef", MANY),
    ("uses", MANY),
];

const TYPEDEF: Subs = &[
    ("default", OPT),
    ("description", OPT),
    ("reference", OPT),
    ("status", OPT),
    ("type", ONE),
    ("units", OPT),
];

const TYPE: Subs = &[
    ("base", MANY),
    ("bit", MANY),
    ("enum", MANY),
    ("fraction-digits", OPT),
    ("length", OPT),
    ("path", OPT),
    ("pattern", MANY),
    ("range", OPT),
    ("require-instance", OPT),
    ("type", MANY),
];

const IDENTITY: Subs = &[
    ("base", MANY),
    ("description", OPT),
    ("if-feature", MANY),
    ("reference", OPT),
    ("status", OPT),
];

const FEATURE: Subs = &[
    ("description", OPT),
    ("if-feature", MANY),
    ("reference", OPT),
    ("status", OPT),
];

const EXTENSION: Subs = &[
    ("argument", OPT),
    ("description", OPT),
    ("reference", OPT),
    ("status", OPT),
];

const ENUM: Subs = &[
    ("description", OPT),
    ("if-feature", MANY),
    ("reference", OPT),
    ("status", OPT),
    ("value", OPT),
];

const BIT: Subs = &[
    ("description", OPT),
    ("if-feature", MANY),
    ("position", OPT),
    ("reference", OPT),
    ("status", OPT),
];

const PATTERN: Subs = &[
    ("description", OPT),
    ("error-app-tag", OPT),
    ("error-message", OPT),
    ("modifier", OPT),
    ("reference", OPT),
];

const IMPORT: Subs = &[
    ("description", OPT),
    ("prefix", ONE),
    ("reference", OPT),
    ("revision-date", OPT),
];

const INCLUDE: Subs = &[
    ("description", OPT),
    ("reference", OPT),
    ("revision-date", OPT),
];

const DEVIATION: Subs = &[
    ("description", OPT),
    ("deviate", SOME),
    ("reference", OPT),
];

const DEVIATE: Subs = &[
    ("config", OPT),
    ("default", MANY),
    ("mandatory", OPT),
    ("max-elements", OPT),
    ("min-elements", OPT),
    ("must", MANY),
    ("type", OPT),
    ("unique", MANY),
    ("units", OPT),
];

macro_rules! defs {
    ($($kw:literal => $subs:expr),* $(,)?) => {
        &[$(StatementDef { keyword: $kw, substatements: $subs }),*]
    };
}

static DEFS: &[StatementDef] = defs! {
    "module" => MODULE_BODY,
    "submodule" => SUBMODULE_BODY,
    "import" => IMPORT,
    "include" => INCLUDE,
    "revision" => DOC,
    "belongs-to" => &[("prefix", ONE)],
    "typedef" => TYPEDEF,
    "type" => TYPE,
    "container" => CONTAINER,
    "must" => ERROR_INFO,
    "leaf" => LEAF,
    "leaf-list" => LEAF_LIST,
    "list" => LIST,
    "choice" => CHOICE,
    "case" => CASE,
    "anydata" => ANYDATA,
    "anyxml" => ANYDATA,
    "grouping" => GROUPING,
    "uses" => USES,
    "refine" => REFINE,
    "augment" => AUGMENT,
    "rpc" => OPERATION,
    "action" => OPERATION,
    "input" => IO,
    "output" => IO,
    "notification" => NOTIFICATION,
    "identity" => IDENTITY,
    "feature" => FEATURE,
    "extension" => EXTENSION,
    "argument" => &[("yin-element", OPT)],
    "deviation" => DEVIATION,
    "deviate" => DEVIATE,
    "enum" => ENUM,
    "bit" => BIT,
    "range" => ERROR_INFO,
    "length" => ERROR_INFO,
    "pattern" => PATTERN,
    "when" => DOC,
    "yang-version" => NONE,
    "namespace" => NONE,
    "prefix" => NONE,
    "organization" => NONE,
    "contact" => NONE,
    "description" => NONE,
    "reference" => NONE,
    "revision-date" => NONE,
    "config" => NONE,
    "default" => NONE,
    "mandatory" => NONE,
    "max-elements" => NONE,
    "min-elements" => NONE,
    "ordered-by" => NONE,
    "presence" => NONE,
    "status" => NONE,
    "units" => NONE,
    "key" => NONE,
    "unique" => NONE,
    "value" => NONE,
    "position" => NONE,
    "fraction-digits" => NONE,
    "path" => NONE,
    "require-instance" => NONE,
    "base" => NONE,
    "if-feature" => NONE,
    "error-app-tag" => NONE,
    "error-message" => NONE,
    "modifier" => NONE,
    "yin-element" => NONE,
};

/// Grammar entry of a builtin keyword; `None` for extensions and unknown keywords
pub fn statement_def(keyword: &Keyword) -> Option<&'static StatementDef> {
    match keyword {
        Keyword::Builtin(name) => DEFS.iter().find(|d| d.keyword == name.as_str()),
        Keyword::Extension { .. } => None,
    }
}
