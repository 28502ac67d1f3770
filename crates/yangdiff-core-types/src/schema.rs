//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_PASS_ID: &str = "pass_id";

// Comparison identifiers
pub const FIELD_COMPARE_TYPE: &str = "compare_type";
pub const FIELD_MODULE: &str = "module";
pub const FIELD_RULE_ID: &str = "rule_id";
pub const FIELD_KEYWORD: &str = "keyword";

// Collection sizes
pub const FIELD_RESULT_COUNT: &str = "result_count";
pub const FIELD_RULE_COUNT: &str = "rule_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_PASS_ID.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_error_fields_are_namespaced() {
        assert!(FIELD_ERR_KIND.starts_with("err."));
        assert!(FIELD_ERR_CODE.starts_with("err."));
    }
}
