use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// stable identifier of a simulated person. ordering is lexicographic and
/// defines the canonical processing order of a population.
#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> AgentId {
        AgentId(id.into())
    }
}

impl Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
