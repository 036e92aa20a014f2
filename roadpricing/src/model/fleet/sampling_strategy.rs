use serde::{Deserialize, Serialize};

/// how random draws are bound to agents during fleet composition.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SamplingStrategy {
    /// one generator consumed agent by agent in canonical order, single-threaded.
    #[default]
    Sequential,
    /// each agent draws from its own stream of the seeded generator, keyed by
    /// the agent's canonical index. agents are processed in parallel.
    PerAgentStream,
}
