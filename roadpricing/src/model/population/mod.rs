mod agent;
mod population;
mod population_error;

pub use agent::Agent;
pub use population::{AgentRecord, Population};
pub use population_error::PopulationError;
