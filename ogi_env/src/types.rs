//! Common types for the OGI environment abstraction.

use serde::{Deserialize, Serialize};

/// Identifier for a simulated agent, e.g. `ogi_0` or `fl_3`.
///
/// Ordering is lexicographic on the string form, which gives the
/// synchronizer a canonical agent order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(String);

impl AgentId {
    /// Creates an id of the form `<prefix>_<index>`.
    pub fn indexed(prefix: &str, index: usize) -> Self {
        Self(format!("{}_{}", prefix, index))
    }
    
    /// Wraps an arbitrary string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
