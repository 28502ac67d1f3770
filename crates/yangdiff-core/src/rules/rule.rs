//! A single compatibility rule

use crate::compare::condition::{ChangeCondition, Compatibility, CompatibilityInfo};
use serde::Serialize;

/// Immutable rule: which statements it covers, the condition it matches and
/// the verdict it assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CompatibilityRule {
    rule_id: String,
    statements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_statement: Option<String>,
    condition: ChangeCondition,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    except_conditions: Vec<ChangeCondition>,
    compatible: Compatibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CompatibilityRule {
    pub fn new(
        rule_id: impl Into<String>,
        condition: ChangeCondition,
        compatibility: Compatibility,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            statements: Vec::new(),
            parent_statement: None,
            condition,
            except_conditions: Vec::new(),
            compatible: compatibility,
            description: None,
        }
    }

    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.statements.push(statement.into());
        self
    }

    pub fn with_statements<I, S>(mut self, statements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statements.extend(statements.into_iter().map(Into::into));
        self
    }

    pub fn with_parent_statement(mut self, parent: impl Into<String>) -> Self {
        self.parent_statement = Some(parent.into());
        self
    }

    pub fn with_except_conditions(
        mut self,
        conditions: impl IntoIterator<Item = ChangeCondition>,
    ) -> Self {
        self.except_conditions.extend(conditions);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn parent_statement(&self) -> Option<&str> {
        self.parent_statement.as_deref()
    }

    pub fn condition(&self) -> ChangeCondition {
        self.condition
    }

    pub fn except_conditions(&self) -> &[ChangeCondition] {
        &self.except_conditions
    }

    pub fn compatibility(&self) -> Compatibility {
        self.compatible
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Verdict this rule assigns
    pub fn info(&self) -> CompatibilityInfo {
        CompatibilityInfo::new(self.compatible, self.description.clone())
    }

    /// Whether this rule's condition covers `condition`.
    ///
    /// `any` covers everything but `ignore`, an `ignore` rule covers nothing,
    /// and `changed` also covers the changed family unless excepted.
    pub fn matches_condition(&self, condition: ChangeCondition) -> bool {
        match self.condition {
            ChangeCondition::Any => condition != ChangeCondition::Ignore,
            ChangeCondition::Ignore => false,
            rule if rule == condition => true,
            ChangeCondition::Changed if condition.is_changed_family() => {
                !self.except_conditions.contains(&condition)
            }
            _ => false,
        }
    }

    /// Full match against a statement key, its parent key and a condition
    pub fn matches(&self, statement: &str, parent: Option<&str>, condition: ChangeCondition) -> bool {
        if !self.statements.iter().any(|s| s == statement) {
            return false;
        }
        if let Some(required) = &self.parent_statement {
            if parent != Some(required.as_str()) {
                return false;
            }
        }
        self.matches_condition(condition)
    }
}
