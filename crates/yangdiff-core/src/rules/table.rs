//! Ordered rule table and its shared, reloadable handle

use crate::compare::condition::ChangeCondition;
use crate::errors::{Result, YangDiffError};
use crate::rules::rule::CompatibilityRule;
use crate::rules::source::{RuleFormat, RuleSetDoc};
use crate::{log_op_end, log_op_error, log_op_start};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Compatibility rules in declaration order; the first match wins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleTable {
    rules: Vec<CompatibilityRule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a rule document; see [`RuleTable::deserialize`]
    pub fn from_doc(doc: &RuleSetDoc) -> Result<Self> {
        let mut table = Self::new();
        table.deserialize(doc)?;
        Ok(table)
    }

    /// Append a rule. Returns false, leaving the table unchanged, when the
    /// rule id is already present.
    pub fn add_rule(&mut self, rule: CompatibilityRule) -> bool {
        if self.get(rule.rule_id()).is_some() {
            return false;
        }
        self.rules.push(rule);
        true
    }

    /// Replace the whole table with the rules of `doc`.
    ///
    /// # Errors
    ///
    /// Any invalid rule fails the call before the current content is touched.
    pub fn deserialize(&mut self, doc: &RuleSetDoc) -> Result<()> {
        let rules = doc.to_rules()?;
        self.rules.clear();
        for rule in rules {
            let rule_id = rule.rule_id().to_string();
            if !self.add_rule(rule) {
                tracing::warn!(rule_id = %rule_id, "duplicate rule id, later declaration skipped");
            }
        }
        Ok(())
    }

    /// First rule covering `statement` under `parent` for `condition`
    pub fn lookup(
        &self,
        statement: &str,
        parent: Option<&str>,
        condition: ChangeCondition,
    ) -> Option<&CompatibilityRule> {
        self.rules
            .iter()
            .find(|rule| rule.matches(statement, parent, condition))
    }

    pub fn get(&self, rule_id: &str) -> Option<&CompatibilityRule> {
        self.rules.iter().find(|r| r.rule_id() == rule_id)
    }

    pub fn rules(&self) -> &[CompatibilityRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// SHA-256 (hex) of the canonical JSON of the ordered rule list.
    ///
    /// Reordering rules changes the digest.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the rules cannot be encoded.
    pub fn digest(&self) -> Result<String> {
        let canonical = serde_json::to_string(&self.rules).map_err(YangDiffError::from)?;
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Load a rule table from a YAML or JSON file
pub fn load_rules_from_path(path: &Path) -> Result<RuleTable> {
    log_op_start!("load_rules", path = %path.display());
    let start = std::time::Instant::now();

    let result = RuleSetDoc::from_path(path)
        .and_then(|doc| RuleTable::from_doc(&doc))
        .map_err(|e| {
            log_op_error!(
                "load_rules",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "load_rules",
        duration_ms = start.elapsed().as_millis() as u64,
        rule_count = result.len() as u64,
        digest = %result.digest().unwrap_or_default()
    );
    Ok(result)
}

/// Load a rule table from an in-memory source
pub fn load_rules_from_str(content: &str, format: RuleFormat) -> Result<RuleTable> {
    let doc = RuleSetDoc::parse(content, format)?;
    let table = RuleTable::from_doc(&doc)?;
    tracing::debug!(rule_count = table.len(), "rules loaded");
    Ok(table)
}

/// A rule table shared between comparison passes.
///
/// Each pass takes a [`snapshot`](SharedRuleTable::snapshot) and keeps it for
/// its whole duration; [`reload`](SharedRuleTable::reload) swaps the table
/// wholesale, so a pass sees either the old or the new rules, never a mix.
#[derive(Debug, Default)]
pub struct SharedRuleTable {
    inner: RwLock<Arc<RuleTable>>,
}

impl SharedRuleTable {
    pub fn new(table: RuleTable) -> Self {
        Self {
            inner: RwLock::new(Arc::new(table)),
        }
    }

    pub fn snapshot(&self) -> Arc<RuleTable> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn reload(&self, table: RuleTable) {
        let table = Arc::new(table);
        match self.inner.write() {
            Ok(mut guard) => *guard = table,
            Err(poisoned) => *poisoned.into_inner() = table,
        }
    }
}
