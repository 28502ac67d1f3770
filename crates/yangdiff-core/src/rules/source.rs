//! Declarative rule source (YAML or JSON)
//!
//! ```yaml
//! rules:
//!   - rule-id: max-elements-reduce
//!     statements: [max-elements]
//!     condition: reduce
//!     compatible: nbc
//!     description: "the max-elements is reduced"
//! ```
//!
//! Declaration order is significant: the first matching rule wins.

use crate::compare::condition::{ChangeCondition, Compatibility};
use crate::errors::{io_error, parse_error, Result, YangDiffError};
use crate::rules::rule::CompatibilityRule;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialization format of a rule source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    Yaml,
    Json,
}

impl RuleFormat {
    /// `.json` is JSON, anything else is YAML
    pub fn from_path(path: &Path) -> Self {
        if crate::model::doc::is_json_path(path) {
            RuleFormat::Json
        } else {
            RuleFormat::Yaml
        }
    }
}

/// One rule as written; every field is optional here so that a missing
/// field is reported with the rule it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RuleDoc {
    #[serde(default)]
    pub rule_id: Option<String>,
    #[serde(default)]
    pub statements: Vec<String>,
    #[serde(default)]
    pub parent_statement: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub except_conditions: Vec<String>,
    #[serde(default)]
    pub compatible: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Ordered list of rule documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSetDoc {
    #[serde(default)]
    pub rules: Vec<RuleDoc>,
}

impl RuleSetDoc {
    pub fn parse(content: &str, format: RuleFormat) -> Result<Self> {
        match format {
            RuleFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error("rule source (YAML)", e))
            }
            RuleFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error("rule source (JSON)", e))
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        Self::parse(&content, RuleFormat::from_path(path))
    }

    /// Validate every rule; the first invalid rule aborts the whole set
    pub fn to_rules(&self) -> Result<Vec<CompatibilityRule>> {
        self.rules
            .iter()
            .enumerate()
            .map(|(index, doc)| doc.to_rule(index))
            .collect()
    }
}

impl RuleDoc {
    fn to_rule(&self, index: usize) -> Result<CompatibilityRule> {
        let rule_id = match self.rule_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                return Err(YangDiffError::MissingRuleField {
                    rule_id: format!("#{}", index + 1),
                    field: "rule-id".to_string(),
                }
                .into())
            }
        };
        let missing = |field: &str| -> crate::errors::ExError {
            YangDiffError::MissingRuleField {
                rule_id: rule_id.clone(),
                field: field.to_string(),
            }
            .into()
        };

        let statements: Vec<String> = self
            .statements
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if statements.is_empty() {
            return Err(missing("statements"));
        }

        let condition_name = self.condition.as_deref().ok_or_else(|| missing("condition"))?;
        let condition =
            ChangeCondition::from_name(condition_name).ok_or_else(|| YangDiffError::UnknownCondition {
                rule_id: rule_id.clone(),
                condition: condition_name.to_string(),
            })?;

        let mut except_conditions = Vec::with_capacity(self.except_conditions.len());
        for name in &self.except_conditions {
            let except = ChangeCondition::from_name(name)
                .filter(|c| condition == ChangeCondition::Changed && c.is_changed_family())
                .ok_or_else(|| YangDiffError::InvalidExceptCondition {
                    rule_id: rule_id.clone(),
                    condition: name.clone(),
                })?;
            except_conditions.push(except);
        }

        let compatible_name = self.compatible.as_deref().ok_or_else(|| missing("compatible"))?;
        let compatibility =
            Compatibility::from_name(compatible_name).ok_or_else(|| YangDiffError::UnknownCompatibility {
                rule_id: rule_id.clone(),
                compatibility: compatible_name.to_string(),
            })?;

        let mut rule = CompatibilityRule::new(rule_id.clone(), condition, compatibility)
            .with_statements(statements)
            .with_except_conditions(except_conditions);
        if let Some(parent) = self.parent_statement.as_deref().map(str::trim) {
            if !parent.is_empty() {
                rule = rule.with_parent_statement(parent);
            }
        }
        if let Some(description) = &self.description {
            rule = rule.with_description(description.clone());
        }
        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    const SOURCE: &str = r#"
rules:
  - rule-id: r1
    statements: [max-elements, min-elements]
    condition: changed
    except-conditions: [reduce]
    compatible: bc
  - rule-id: r2
    statements: [base]
    parent-statement: identity
    condition: deleted
    compatible: nbc
    description: delete a base
"#;

    #[test]
    fn test_parse_yaml_rule_set() {
        let rules = RuleSetDoc::parse(SOURCE, RuleFormat::Yaml)
            .unwrap()
            .to_rules()
            .unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].except_conditions(), &[ChangeCondition::Reduce]);
        assert_eq!(rules[1].parent_statement(), Some("identity"));
        assert_eq!(rules[1].description(), Some("delete a base"));
    }

    #[test]
    fn test_missing_condition_names_rule() {
        let doc = RuleSetDoc::parse(
            r#"{"rules":[{"rule-id":"x","statements":["leaf"],"compatible":"bc"}]}"#,
            RuleFormat::Json,
        )
        .unwrap();
        let err = doc.to_rules().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::MissingField);
        assert_eq!(err.rule_id(), Some("x"));
    }

    #[test]
    fn test_missing_rule_id_uses_position() {
        let doc = RuleSetDoc::parse(
            "rules:\n  - statements: [leaf]\n    condition: added\n    compatible: bc\n",
            RuleFormat::Yaml,
        )
        .unwrap();
        let err = doc.to_rules().unwrap_err();
        assert_eq!(err.rule_id(), Some("#1"));
    }

    #[test]
    fn test_except_condition_only_on_changed() {
        let doc = RuleSetDoc::parse(
            "rules:\n  - rule-id: e\n    statements: [leaf]\n    condition: added\n    except-conditions: [reduce]\n    compatible: bc\n",
            RuleFormat::Yaml,
        )
        .unwrap();
        assert_eq!(
            doc.to_rules().unwrap_err().kind(),
            ExErrorKind::InvalidExceptCondition
        );
    }

    #[test]
    fn test_unknown_compatibility() {
        let doc = RuleSetDoc::parse(
            "rules:\n  - rule-id: c\n    statements: [leaf]\n    condition: added\n    compatible: maybe\n",
            RuleFormat::Yaml,
        )
        .unwrap();
        assert_eq!(
            doc.to_rules().unwrap_err().kind(),
            ExErrorKind::UnknownCompatibility
        );
    }
}
