//! Read-only statement model the comparison engine consumes

mod context;
pub mod doc;
pub mod grammar;
pub mod keyword;
pub mod restriction;

pub use context::{ModuleEntry, NodeRef, Reference, SchemaContext, SchemaTreeType, StatementId};
pub use doc::{ModuleSetDoc, StatementDoc};
pub use keyword::Keyword;
pub use restriction::{BuiltinType, Restriction};

use crate::errors::Result;
use std::path::Path;

impl SchemaContext {
    /// Read and build a context from a YAML or JSON module set file
    pub fn load(path: &Path) -> Result<Self> {
        let doc = ModuleSetDoc::from_path(path)?;
        SchemaContext::from_doc(&doc).map_err(|e| e.with_op("load_module_set"))
    }
}
