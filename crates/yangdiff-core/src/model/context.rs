//! Arena-backed statement trees
//!
//! A [`SchemaContext`] owns every statement of one side of a comparison.
//! Nodes are addressed by [`StatementId`]; parent links are ids, so the tree
//! has no ownership cycles. [`NodeRef`] is the read-only view the comparison
//! engine works with.

use crate::errors::{Result, YangDiffError};
use crate::model::doc::{ModuleSetDoc, StatementDoc};
use crate::model::keyword::{
    Keyword, IDENTIFIER_REF_KEYWORDS, REFERENCABLE_KEYWORDS, SCHEMA_NODE_KEYWORDS,
};
use crate::model::restriction::{BuiltinType, Restriction};
use std::collections::BTreeMap;
use std::fmt;

const MAX_TYPEDEF_DEPTH: usize = 32;

/// Stable handle of a statement inside its context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatementId(usize);

impl StatementId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Resolved target of an identifier reference (`type`, `base`, `if-feature`, `uses`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    /// Keyword of the target (`typedef`, `identity`, `feature`, `grouping`)
    pub keyword: String,
    pub namespace: Option<String>,
    pub name: String,
}

/// Which schema tree a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaTreeType {
    Data,
    Rpc,
    Notification,
}

#[derive(Debug, Clone)]
struct Statement {
    keyword: Keyword,
    argument: Option<String>,
    parent: Option<StatementId>,
    children: Vec<StatementId>,
    expansion: Vec<StatementId>,
    module: usize,
    namespace_override: Option<String>,
    namespace: Option<String>,
    line: Option<u32>,
    active: bool,
    identity: String,
    key: String,
    reference: Option<Reference>,
    reference_target: Option<StatementId>,
}

/// Header facts of one module or submodule
#[derive(Debug, Clone)]
pub struct ModuleEntry {
    root: StatementId,
    name: String,
    submodule: bool,
    main_module: String,
    prefix: Option<String>,
    path_prefix: Option<String>,
    namespace: Option<String>,
    source: Option<String>,
    imports: BTreeMap<String, String>,
}

impl ModuleEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_submodule(&self) -> bool {
        self.submodule
    }

    /// Name of the main module (itself, or the module a submodule belongs to)
    pub fn main_module(&self) -> &str {
        &self.main_module
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// All statements of one module set
#[derive(Debug, Default)]
pub struct SchemaContext {
    statements: Vec<Statement>,
    modules: Vec<ModuleEntry>,
}

impl SchemaContext {
    /// Build a context from a module set document.
    ///
    /// Headers (prefix, namespace, imports, belongs-to) are read first, then
    /// namespaces, extension keywords and identifier references are resolved.
    pub fn from_doc(doc: &ModuleSetDoc) -> Result<Self> {
        let mut ctx = SchemaContext::default();

        for module_doc in &doc.modules {
            let keyword = Keyword::parse(module_doc.keyword.trim());
            if !keyword.is_any(&["module", "submodule"]) {
                return Err(YangDiffError::NotAModule {
                    keyword: module_doc.keyword.clone(),
                }
                .into());
            }
            let name = module_doc
                .argument
                .clone()
                .filter(|a| !a.trim().is_empty())
                .ok_or(YangDiffError::UnnamedModule)?;
            if ctx.modules.iter().any(|m| m.name == name) {
                return Err(YangDiffError::DuplicateModule { name }.into());
            }

            let index = ctx.modules.len();
            let root = ctx.alloc(module_doc, None, index)?;
            ctx.modules.push(ModuleEntry {
                root,
                main_module: name.clone(),
                name,
                submodule: keyword.is("submodule"),
                prefix: None,
                path_prefix: None,
                namespace: None,
                source: module_doc.source.clone(),
                imports: BTreeMap::new(),
            });
        }

        ctx.resolve_headers()?;
        ctx.resolve_namespaces();
        ctx.resolve_keywords();
        ctx.resolve_references();
        Ok(ctx)
    }

    fn alloc(
        &mut self,
        doc: &StatementDoc,
        parent: Option<StatementId>,
        module: usize,
    ) -> Result<StatementId> {
        let raw = doc.keyword.trim();
        if raw.is_empty() {
            let parent = parent
                .map(|p| self.node(p).display())
                .unwrap_or_else(|| "<root>".to_string());
            return Err(YangDiffError::EmptyKeyword { parent }.into());
        }

        let id = StatementId(self.statements.len());
        self.statements.push(Statement {
            keyword: Keyword::parse(raw),
            argument: doc.argument.clone(),
            parent,
            children: Vec::new(),
            expansion: Vec::new(),
            module,
            namespace_override: doc.namespace.clone(),
            namespace: None,
            line: doc.line,
            active: doc.active.unwrap_or(true),
            identity: String::new(),
            key: String::new(),
            reference: None,
            reference_target: None,
        });

        for child in &doc.children {
            let child_id = self.alloc(child, Some(id), module)?;
            self.statements[id.0].children.push(child_id);
        }
        for node in &doc.expansion {
            let node_id = self.alloc(node, Some(id), module)?;
            self.statements[id.0].expansion.push(node_id);
        }
        Ok(id)
    }

    fn child_argument(&self, id: StatementId, keyword: &str) -> Option<String> {
        self.statements[id.0]
            .children
            .iter()
            .map(|c| &self.statements[c.0])
            .find(|s| s.keyword.is(keyword))
            .and_then(|s| s.argument.clone())
    }

    fn child_ids(&self, id: StatementId, keyword: &str) -> Vec<StatementId> {
        self.statements[id.0]
            .children
            .iter()
            .copied()
            .filter(|c| self.statements[c.0].keyword.is(keyword))
            .collect()
    }

    fn resolve_headers(&mut self) -> Result<()> {
        for index in 0..self.modules.len() {
            let root = self.modules[index].root;
            let mut imports = BTreeMap::new();
            for import in self.child_ids(root, "import") {
                if let (Some(module), Some(prefix)) = (
                    self.statements[import.0].argument.clone(),
                    self.child_argument(import, "prefix"),
                ) {
                    imports.insert(prefix, module);
                }
            }
            let entry = &mut self.modules[index];
            entry.imports = imports;
            if !entry.submodule {
                let prefix = self.child_argument(root, "prefix");
                let namespace = self.child_argument(root, "namespace");
                let entry = &mut self.modules[index];
                entry.path_prefix = prefix.clone();
                entry.prefix = prefix;
                entry.namespace = namespace;
            }
        }

        for index in 0..self.modules.len() {
            if !self.modules[index].submodule {
                continue;
            }
            let root = self.modules[index].root;
            let belongs_to = self.child_ids(root, "belongs-to").into_iter().next();
            let Some(belongs_to) = belongs_to else {
                continue;
            };
            let parent_name = self.statements[belongs_to.0]
                .argument
                .clone()
                .unwrap_or_default();
            let prefix = self.child_argument(belongs_to, "prefix");
            let parent = self
                .modules
                .iter()
                .find(|m| !m.submodule && m.name == parent_name)
                .map(|m| (m.namespace.clone(), m.path_prefix.clone()))
                .ok_or_else(|| YangDiffError::UnknownParentModule {
                    submodule: self.modules[index].name.clone(),
                    module: parent_name.clone(),
                })?;

            let entry = &mut self.modules[index];
            entry.main_module = parent_name;
            entry.prefix = prefix;
            entry.namespace = parent.0;
            entry.path_prefix = parent.1;
        }
        Ok(())
    }

    fn resolve_namespaces(&mut self) {
        // Parents are allocated before their children.
        for i in 0..self.statements.len() {
            let stmt = &self.statements[i];
            let namespace = match (&stmt.namespace_override, stmt.parent) {
                (Some(ns), _) => Some(ns.clone()),
                (None, Some(parent)) => self.statements[parent.0].namespace.clone(),
                (None, None) => self.modules[stmt.module].namespace.clone(),
            };
            self.statements[i].namespace = namespace;
        }
    }

    /// Main-module name a prefix maps to inside `module`
    fn resolve_prefix(&self, module: usize, prefix: &str) -> Option<String> {
        let entry = &self.modules[module];
        if entry.prefix.as_deref() == Some(prefix) {
            return Some(entry.main_module.clone());
        }
        entry.imports.get(prefix).cloned()
    }

    /// Top-level definition `keyword name` in a main module or any of its submodules
    fn find_top_level(&self, main_module: &str, keyword: &str, name: &str) -> Option<StatementId> {
        self.modules
            .iter()
            .filter(|m| m.main_module == main_module)
            .flat_map(|m| self.statements[m.root.0].children.iter().copied())
            .find(|c| {
                let s = &self.statements[c.0];
                s.keyword.is(keyword) && s.argument.as_deref() == Some(name)
            })
    }

    fn resolve_keywords(&mut self) {
        for i in 0..self.statements.len() {
            let stmt = &self.statements[i];
            let (identity, key) = match &stmt.keyword {
                Keyword::Builtin(name) => (name.clone(), name.clone()),
                Keyword::Extension { prefix, name } => {
                    let module = self.resolve_prefix(stmt.module, prefix);
                    let identity = format!("{}:{}", module.as_deref().unwrap_or(prefix), name);
                    let defined = module
                        .as_deref()
                        .and_then(|m| self.find_top_level(m, "extension", name))
                        .is_some();
                    let key = match (defined, module) {
                        (true, Some(m)) => format!("{}:{}", m, name),
                        _ => format!("{}:{}", prefix, name),
                    };
                    (identity, key)
                }
            };
            self.statements[i].identity = identity;
            self.statements[i].key = key;
        }
    }

    fn resolve_references(&mut self) {
        let mut resolved = Vec::new();
        for i in 0..self.statements.len() {
            let stmt = &self.statements[i];
            if !stmt.keyword.is_any(IDENTIFIER_REF_KEYWORDS) {
                continue;
            }
            let Some(argument) = stmt.argument.as_deref().map(str::trim) else {
                continue;
            };
            if let Some(target) = self.lookup_reference(StatementId(i), argument) {
                resolved.push((i, target));
            }
        }
        for (i, (reference, target)) in resolved {
            self.statements[i].reference = Some(reference);
            self.statements[i].reference_target = Some(target);
        }
    }

    fn lookup_reference(&self, id: StatementId, argument: &str) -> Option<(Reference, StatementId)> {
        let stmt = &self.statements[id.0];
        let target_keyword = match stmt.keyword.local_name() {
            "type" => "typedef",
            "base" => "identity",
            "if-feature" => "feature",
            "uses" => "grouping",
            _ => return None,
        };
        // if-feature expressions are not single references
        if argument.is_empty() || argument.contains(char::is_whitespace) || argument.contains('(') {
            return None;
        }
        let (prefix, name) = match argument.split_once(':') {
            Some((p, n)) => (Some(p), n),
            None => (None, argument),
        };
        if target_keyword == "typedef" && prefix.is_none() && BuiltinType::from_name(name).is_some() {
            return None;
        }

        let own_main = self.modules[stmt.module].main_module.clone();
        let target_module = match prefix {
            Some(p) => self.resolve_prefix(stmt.module, p)?,
            None => own_main.clone(),
        };

        let mut target = None;
        if target_module == own_main && matches!(target_keyword, "typedef" | "grouping") {
            let mut scope = stmt.parent;
            while let Some(scope_id) = scope {
                let found = self.statements[scope_id.0].children.iter().copied().find(|c| {
                    let s = &self.statements[c.0];
                    s.keyword.is(target_keyword) && s.argument.as_deref() == Some(name)
                });
                if found.is_some() {
                    target = found;
                    break;
                }
                scope = self.statements[scope_id.0].parent;
            }
        }
        let target = target.or_else(|| self.find_top_level(&target_module, target_keyword, name))?;

        let reference = Reference {
            keyword: target_keyword.to_string(),
            namespace: self.statements[target.0].namespace.clone(),
            name: name.to_string(),
        };
        Some((reference, target))
    }

    /// View of a statement
    pub fn node(&self, id: StatementId) -> NodeRef<'_> {
        NodeRef { ctx: self, id }
    }

    /// Module and submodule roots in declaration order
    pub fn modules(&self) -> Vec<NodeRef<'_>> {
        self.modules.iter().map(|m| self.node(m.root)).collect()
    }

    /// First module or submodule named `name`
    pub fn module(&self, name: &str) -> Option<NodeRef<'_>> {
        self.modules
            .iter()
            .find(|m| m.name == name)
            .map(|m| self.node(m.root))
    }

    pub fn module_entries(&self) -> &[ModuleEntry] {
        &self.modules
    }

    /// Number of statements in the arena
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Read-only handle on one statement of a [`SchemaContext`]
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    ctx: &'a SchemaContext,
    id: StatementId,
}

impl<'a> NodeRef<'a> {
    fn stmt(&self) -> &'a Statement {
        &self.ctx.statements[self.id.0]
    }

    fn wrap(&self, id: StatementId) -> NodeRef<'a> {
        NodeRef { ctx: self.ctx, id }
    }

    pub fn id(&self) -> StatementId {
        self.id
    }

    pub fn context(&self) -> &'a SchemaContext {
        self.ctx
    }

    /// Identity comparison: same context, same statement
    pub fn same_node(&self, other: &NodeRef<'_>) -> bool {
        std::ptr::eq(self.ctx, other.ctx) && self.id == other.id
    }

    pub fn keyword(&self) -> &'a Keyword {
        &self.stmt().keyword
    }

    /// Keyword with extension prefixes resolved to module names; two
    /// statements have the same keyword iff their identities are equal
    pub fn keyword_identity(&self) -> &'a str {
        &self.stmt().identity
    }

    /// Statement key used for rule lookup and comparator dispatch:
    /// the builtin keyword, `module:extension` for resolved extensions,
    /// or the raw `prefix:name` otherwise
    pub fn statement_key(&self) -> &'a str {
        &self.stmt().key
    }

    pub fn argument(&self) -> Option<&'a str> {
        self.stmt().argument.as_deref()
    }

    pub fn is(&self, keyword: &str) -> bool {
        self.stmt().keyword.is(keyword)
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.stmt().parent.map(|p| self.wrap(p))
    }

    /// Parent ignoring `uses` nodes; the statement a node logically sits under
    pub fn logical_parent(&self) -> Option<NodeRef<'a>> {
        let mut parent = self.parent();
        while let Some(p) = parent {
            if !p.is("uses") {
                return Some(p);
            }
            parent = p.parent();
        }
        None
    }

    /// Declared sub-statements in source order
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        self.stmt().children.iter().map(|c| self.wrap(*c)).collect()
    }

    /// Declared sub-statements followed by expansion nodes
    pub fn effective_children(&self) -> Vec<NodeRef<'a>> {
        let stmt = self.stmt();
        stmt.children
            .iter()
            .chain(stmt.expansion.iter())
            .map(|c| self.wrap(*c))
            .collect()
    }

    /// First effective sub-statement with the builtin keyword
    pub fn child(&self, keyword: &str) -> Option<NodeRef<'a>> {
        self.effective_children().into_iter().find(|c| c.is(keyword))
    }

    /// Ordinal among the parent's sub-statements, `None` at a root
    pub fn sequence_index(&self) -> Option<usize> {
        let parent = &self.ctx.statements[self.stmt().parent?.0];
        parent
            .children
            .iter()
            .chain(parent.expansion.iter())
            .position(|c| *c == self.id)
    }

    pub fn is_schema_node(&self) -> bool {
        self.keyword().is_any(SCHEMA_NODE_KEYWORDS)
    }

    /// `uses` is a schema node that never appears in schema children
    pub fn is_virtual(&self) -> bool {
        self.is("uses")
    }

    pub fn is_referencable(&self) -> bool {
        self.keyword().is_any(REFERENCABLE_KEYWORDS)
    }

    pub fn is_identifier_ref(&self) -> bool {
        self.keyword().is_any(IDENTIFIER_REF_KEYWORDS)
    }

    /// Extension statements, resolved or not, have no builtin grammar
    pub fn is_unknown_extension(&self) -> bool {
        self.keyword().is_extension()
    }

    pub fn is_active(&self) -> bool {
        self.stmt().active
    }

    pub fn is_main_module(&self) -> bool {
        self.is("module")
    }

    /// Mandatory per RFC 7950 section 3
    pub fn is_mandatory(&self) -> bool {
        match self.keyword().local_name() {
            _ if self.keyword().is_extension() => false,
            "leaf" | "choice" | "anydata" | "anyxml" => self
                .child("mandatory")
                .and_then(|m| m.argument())
                .is_some_and(|a| a.trim() == "true"),
            "list" | "leaf-list" => self
                .child("min-elements")
                .and_then(|m| m.argument())
                .and_then(|a| a.trim().parse::<u64>().ok())
                .is_some_and(|n| n > 0),
            "container" => {
                self.child("presence").is_none()
                    && self.schema_children().iter().any(|c| c.is_mandatory())
            }
            _ => false,
        }
    }

    pub fn namespace(&self) -> Option<&'a str> {
        self.stmt().namespace.as_deref()
    }

    pub fn module_entry(&self) -> &'a ModuleEntry {
        &self.ctx.modules[self.stmt().module]
    }

    /// Name of the module or submodule the statement is written in
    pub fn module_name(&self) -> &'a str {
        &self.module_entry().name
    }

    pub fn line(&self) -> Option<u32> {
        self.stmt().line
    }

    /// `source:line`, or whichever part is known
    pub fn position(&self) -> String {
        match (self.module_entry().source(), self.line()) {
            (Some(source), Some(line)) => format!("{}:{}", source, line),
            (Some(source), None) => source.to_string(),
            (None, Some(line)) => line.to_string(),
            (None, None) => String::new(),
        }
    }

    /// `keyword argument` as written
    pub fn display(&self) -> String {
        match self.argument() {
            Some(arg) => format!("{} {}", self.keyword(), arg),
            None => self.keyword().to_string(),
        }
    }

    /// Nearest ancestor schema node, skipping `uses`
    pub fn closest_ancestor_node(&self) -> Option<NodeRef<'a>> {
        let mut parent = self.parent();
        while let Some(p) = parent {
            if p.is_schema_node() && !p.is_virtual() {
                return Some(p);
            }
            parent = p.parent();
        }
        None
    }

    /// Absolute schema path, `/prefix:name/...`; under an augment the path
    /// starts at the augment target
    pub fn schema_path(&self) -> String {
        let mut segments = Vec::new();
        let mut base = String::new();
        let mut current = Some(*self);
        while let Some(node) = current {
            if node.is("augment") {
                base = node.argument().unwrap_or_default().trim_end_matches('/').to_string();
                break;
            }
            if node.is_schema_node() && !node.is_virtual() {
                let name = node.argument().unwrap_or_default();
                match node.module_entry().path_prefix.as_deref() {
                    Some(prefix) => segments.push(format!("{}:{}", prefix, name)),
                    None => segments.push(name.to_string()),
                }
            }
            current = node.parent();
        }

        let mut path = base;
        for segment in segments.iter().rev() {
            path.push('/');
            path.push_str(segment);
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    pub fn tree_type(&self) -> SchemaTreeType {
        let mut current = Some(*self);
        while let Some(node) = current {
            if node.keyword().is_any(&["rpc", "action", "input", "output"]) {
                return SchemaTreeType::Rpc;
            }
            if node.is("notification") {
                return SchemaTreeType::Notification;
            }
            current = node.parent();
        }
        SchemaTreeType::Data
    }

    pub fn reference(&self) -> Option<&'a Reference> {
        self.stmt().reference.as_ref()
    }

    pub fn reference_target(&self) -> Option<NodeRef<'a>> {
        self.stmt().reference_target.map(|t| self.wrap(t))
    }

    /// Effective schema-node children: `uses` flattened, augments excluded,
    /// only nodes sharing this node's namespace
    pub fn schema_children(&self) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        for child in self.effective_children() {
            if !child.is_schema_node() || child.is("augment") {
                continue;
            }
            if child.is_virtual() {
                out.extend(child.schema_children());
                continue;
            }
            if child.namespace() == self.namespace() {
                out.push(child);
            }
        }
        out
    }

    /// Top-level `augment` statements
    pub fn augments(&self) -> Vec<NodeRef<'a>> {
        self.effective_children()
            .into_iter()
            .filter(|c| c.is("augment"))
            .collect()
    }

    /// Restriction class of a `type` statement
    pub fn restriction(&self) -> Option<Restriction> {
        if !self.is("type") {
            return None;
        }
        Some(self.resolve_restriction(0))
    }

    fn resolve_restriction(&self, depth: usize) -> Restriction {
        let name = self.argument().unwrap_or_default().trim();
        if !name.contains(':') {
            if let Some(builtin) = BuiltinType::from_name(name) {
                return Restriction::Builtin(builtin);
            }
        }
        if depth < MAX_TYPEDEF_DEPTH {
            if let Some(inner) = self.reference_target().and_then(|t| t.child("type")) {
                return inner.resolve_restriction(depth + 1);
            }
        }
        Restriction::Unresolved(name.to_string())
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.display(), self.id.0)
    }
}
