//! Correlation types for comparison passes
//!
//! Every comparison pass gets a `PassId` so that its start/end events and
//! any errors raised while loading its inputs can be tied together.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single comparison pass
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassId(String);

impl PassId {
    /// Generate a new PassId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for PassId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through one comparison pass
#[derive(Debug, Clone)]
pub struct PassContext {
    pub pass_id: PassId,
    /// Free-form label of the caller (e.g. `cli`), recorded on start events
    pub origin: Option<String>,
}

impl PassContext {
    /// Create a new context with a fresh PassId
    pub fn new() -> Self {
        Self {
            pass_id: PassId::new(),
            origin: None,
        }
    }

    /// Create a context with an existing PassId
    pub fn with_pass_id(pass_id: PassId) -> Self {
        Self {
            pass_id,
            origin: None,
        }
    }

    /// Record where the pass was started from
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

impl Default for PassContext {
    fn default() -> Self {
        Self::new()
    }
}
