use thiserror::Error;
use yangdiff_core_types::PassId;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Only loading can fail: statement documents, rule sources and IO. A
/// comparison pass over well-formed trees never produces an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input documents
    InvalidInput,
    InvalidStatementTree,
    UnknownModule,

    // Rule sources
    MissingField,
    UnknownCondition,
    UnknownCompatibility,
    InvalidExceptCondition,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidStatementTree => "ERR_INVALID_STATEMENT_TREE",
            ExErrorKind::UnknownModule => "ERR_UNKNOWN_MODULE",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::UnknownCondition => "ERR_UNKNOWN_CONDITION",
            ExErrorKind::UnknownCompatibility => "ERR_UNKNOWN_COMPATIBILITY",
            ExErrorKind::InvalidExceptCondition => "ERR_INVALID_EXCEPT_CONDITION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields support programmatic handling; the context fields
/// point at the module, rule or pass that was being loaded.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    module: Option<String>,
    rule_id: Option<String>,
    pass_id: Option<PassId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            module: None,
            rule_id: None,
            pass_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add module context
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Add rule id context
    pub fn with_rule_id(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }

    /// Add pass id context
    pub fn with_pass_id(mut self, pass_id: PassId) -> Self {
        self.pass_id = Some(pass_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the module context, if any
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// Get the rule id context, if any
    pub fn rule_id(&self) -> Option<&str> {
        self.rule_id.as_deref()
    }

    /// Get the pass id context, if any
    pub fn pass_id(&self) -> Option<&PassId> {
        self.pass_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(module) = &self.module {
            write!(f, " (module: {})", module)?;
        }
        if let Some(rule_id) = &self.rule_id {
            write!(f, " (rule_id: {})", rule_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

/// Rich error variants raised while loading comparison inputs
#[derive(Debug, Error)]
pub enum YangDiffError {
    // ===== Statement documents =====
    /// A top-level entry is not a module or submodule
    #[error("Top-level statement must be module or submodule, found '{keyword}'")]
    NotAModule { keyword: String },

    /// A statement has an empty keyword
    #[error("Statement with empty keyword under {parent}")]
    EmptyKeyword { parent: String },

    /// A module or submodule has no name argument
    #[error("Module statement has no name")]
    UnnamedModule,

    /// Two modules with the same name in one module set
    #[error("Module {name} is declared more than once")]
    DuplicateModule { name: String },

    /// A submodule names a parent module absent from the set
    #[error("Submodule {submodule} belongs to unknown module {module}")]
    UnknownParentModule { submodule: String, module: String },

    // ===== Rule sources =====
    /// A required rule field is missing or empty
    #[error("Rule {rule_id} is missing required field '{field}'")]
    MissingRuleField { rule_id: String, field: String },

    /// Condition name is not part of the change taxonomy
    #[error("Rule {rule_id} uses unknown condition '{condition}'")]
    UnknownCondition { rule_id: String, condition: String },

    /// Compatibility name is not bc/nbc/unknown
    #[error("Rule {rule_id} uses unknown compatibility '{compatibility}'")]
    UnknownCompatibility {
        rule_id: String,
        compatibility: String,
    },

    /// Except-condition is not a sub-condition of `changed`, or the rule is not a `changed` rule
    #[error("Rule {rule_id} has invalid except-condition '{condition}'")]
    InvalidExceptCondition { rule_id: String, condition: String },

    // ===== Integration =====
    /// Source text could not be parsed
    #[error("Parse error in {what}: {message}")]
    Parse { what: String, message: String },

    /// File could not be read or written
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },

    /// Serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<YangDiffError> for ExError {
    fn from(err: YangDiffError) -> Self {
        let message = err.to_string();
        match err {
            YangDiffError::NotAModule { .. }
            | YangDiffError::EmptyKeyword { .. }
            | YangDiffError::UnnamedModule => ExError::new(ExErrorKind::InvalidStatementTree)
                .with_op("load_module_set")
                .with_message(message),

            YangDiffError::DuplicateModule { name } => {
                ExError::new(ExErrorKind::InvalidStatementTree)
                    .with_op("load_module_set")
                    .with_module(name)
                    .with_message(message)
            }

            YangDiffError::UnknownParentModule { submodule, .. } => {
                ExError::new(ExErrorKind::UnknownModule)
                    .with_op("load_module_set")
                    .with_module(submodule)
                    .with_message(message)
            }

            YangDiffError::MissingRuleField { rule_id, .. } => {
                ExError::new(ExErrorKind::MissingField)
                    .with_op("load_rules")
                    .with_rule_id(rule_id)
                    .with_message(message)
            }

            YangDiffError::UnknownCondition { rule_id, .. } => {
                ExError::new(ExErrorKind::UnknownCondition)
                    .with_op("load_rules")
                    .with_rule_id(rule_id)
                    .with_message(message)
            }

            YangDiffError::UnknownCompatibility { rule_id, .. } => {
                ExError::new(ExErrorKind::UnknownCompatibility)
                    .with_op("load_rules")
                    .with_rule_id(rule_id)
                    .with_message(message)
            }

            YangDiffError::InvalidExceptCondition { rule_id, .. } => {
                ExError::new(ExErrorKind::InvalidExceptCondition)
                    .with_op("load_rules")
                    .with_rule_id(rule_id)
                    .with_message(message)
            }

            YangDiffError::Parse { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse")
                .with_message(message),

            YangDiffError::Io { .. } => ExError::new(ExErrorKind::Io)
                .with_op("io")
                .with_message(message),

            YangDiffError::Serialization { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("serialize")
                .with_message(message),
        }
    }
}

impl From<serde_json::Error> for YangDiffError {
    fn from(err: serde_json::Error) -> Self {
        YangDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Create an IO error for the given path
pub fn io_error(path: &std::path::Path, err: std::io::Error) -> ExError {
    YangDiffError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
    .into()
}

/// Create a parse error for the named source
pub fn parse_error(what: &str, err: impl std::fmt::Display) -> ExError {
    YangDiffError::Parse {
        what: what.to_string(),
        message: err.to_string(),
    }
    .into()
}
