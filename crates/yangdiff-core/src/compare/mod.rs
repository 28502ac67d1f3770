//! Comparison engine: node pairing, per-keyword change detection,
//! compatibility classification and tree roll-up

pub mod aggregate;
pub mod bounds;
pub mod comparator;
pub mod condition;
pub mod equality;
pub mod kinds;
pub mod matcher;
pub mod result;
pub mod unique;

pub use aggregate::{CompareEngine, TraversalMode};
pub use comparator::{CompareType, YangComparator};
pub use condition::{ChangeCondition, ChangeType, Compatibility, CompatibilityInfo};
pub use kinds::{ComparatorKind, ComparatorRegistry};
pub use matcher::{search, similarity, MatchedSet};
pub use result::{CompareResult, StatementResult, TreeResult};
