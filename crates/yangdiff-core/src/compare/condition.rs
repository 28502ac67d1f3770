//! Change conditions and compatibility verdicts

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened to a statement between left and right.
///
/// A single pair can carry several conditions (for example `Changed` and
/// `SequenceChanged`). `Any` only appears in rules. `Ignore` also marks
/// `config` outside the data tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeCondition {
    Added,
    MandatoryAdded,
    Deleted,
    Changed,
    SequenceChanged,
    Expand,
    Reduce,
    IntegerTypeChanged,
    Any,
    Ignore,
}

impl ChangeCondition {
    pub const ALL: [ChangeCondition; 10] = [
        ChangeCondition::Added,
        ChangeCondition::MandatoryAdded,
        ChangeCondition::Deleted,
        ChangeCondition::Changed,
        ChangeCondition::SequenceChanged,
        ChangeCondition::Expand,
        ChangeCondition::Reduce,
        ChangeCondition::IntegerTypeChanged,
        ChangeCondition::Any,
        ChangeCondition::Ignore,
    ];

    /// Conditions a `changed` rule also covers unless excepted
    pub const CHANGED_FAMILY: [ChangeCondition; 4] = [
        ChangeCondition::Expand,
        ChangeCondition::Reduce,
        ChangeCondition::SequenceChanged,
        ChangeCondition::IntegerTypeChanged,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChangeCondition::Added => "added",
            ChangeCondition::MandatoryAdded => "mandatory-added",
            ChangeCondition::Deleted => "deleted",
            ChangeCondition::Changed => "changed",
            ChangeCondition::SequenceChanged => "sequence-changed",
            ChangeCondition::Expand => "expand",
            ChangeCondition::Reduce => "reduce",
            ChangeCondition::IntegerTypeChanged => "integer-type-changed",
            ChangeCondition::Any => "any",
            ChangeCondition::Ignore => "ignore",
        }
    }

    /// Parse a rule-file condition name, case-insensitive; `_` is accepted for `-`
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|c| c.name() == normalized)
    }

    pub fn is_changed_family(&self) -> bool {
        Self::CHANGED_FAMILY.contains(self)
    }
}

impl fmt::Display for ChangeCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compatibility verdict. Ordered so that the worst verdict is the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Compatibility {
    #[serde(rename = "bc")]
    BackwardCompatible,
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "nbc")]
    NonBackwardCompatible,
}

impl Compatibility {
    pub fn name(&self) -> &'static str {
        match self {
            Compatibility::BackwardCompatible => "bc",
            Compatibility::Unknown => "unknown",
            Compatibility::NonBackwardCompatible => "nbc",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bc" | "backward-compatible" => Some(Compatibility::BackwardCompatible),
            "nbc" | "non-backward-compatible" => Some(Compatibility::NonBackwardCompatible),
            "unknown" => Some(Compatibility::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Compatibility::BackwardCompatible => "BC",
            Compatibility::Unknown => "UNKNOWN",
            Compatibility::NonBackwardCompatible => "NBC",
        })
    }
}

/// Verdict plus the human-readable reason, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityInfo {
    pub compatibility: Compatibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CompatibilityInfo {
    pub fn new(compatibility: Compatibility, description: Option<String>) -> Self {
        Self {
            compatibility,
            description,
        }
    }

    pub fn bc() -> Self {
        Self::new(Compatibility::BackwardCompatible, None)
    }

    pub fn nbc(description: impl Into<String>) -> Self {
        Self::new(Compatibility::NonBackwardCompatible, Some(description.into()))
    }
}

/// Kind of a reported change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Add,
    Modify,
    Delete,
}

impl ChangeType {
    /// Section label used by text and JSON reports
    pub fn section(&self) -> &'static str {
        match self {
            ChangeType::Add => "added",
            ChangeType::Modify => "changed",
            ChangeType::Delete => "deleted",
        }
    }

    /// Change type a condition is reported under
    pub fn for_condition(condition: ChangeCondition) -> Self {
        match condition {
            ChangeCondition::Added | ChangeCondition::MandatoryAdded => ChangeType::Add,
            ChangeCondition::Deleted => ChangeType::Delete,
            _ => ChangeType::Modify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_verdict_is_max() {
        let worst = [
            Compatibility::BackwardCompatible,
            Compatibility::NonBackwardCompatible,
            Compatibility::Unknown,
        ]
        .into_iter()
        .max();
        assert_eq!(worst, Some(Compatibility::NonBackwardCompatible));
        assert!(Compatibility::Unknown > Compatibility::BackwardCompatible);
    }

    #[test]
    fn test_condition_names_round_trip() {
        for condition in ChangeCondition::ALL {
            assert_eq!(ChangeCondition::from_name(condition.name()), Some(condition));
        }
        assert_eq!(
            ChangeCondition::from_name("INTEGER_TYPE_CHANGED"),
            Some(ChangeCondition::IntegerTypeChanged)
        );
        assert_eq!(ChangeCondition::from_name("renamed"), None);
    }

    #[test]
    fn test_compatibility_serde_names() {
        let json = serde_json::to_string(&Compatibility::NonBackwardCompatible).unwrap();
        assert_eq!(json, "\"nbc\"");
        assert_eq!(Compatibility::from_name("BC"), Some(Compatibility::BackwardCompatible));
    }
}
