use super::{Agent, PopulationError};
use crate::util::fs_utils;
use roadpricing_core::model::AgentId;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};

/// row of a population file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub agent_id: AgentId,
}

/// the agents of a scenario, keyed by id. iteration order of the underlying
/// map is arbitrary; use [`Population::sorted_agent_ids`] wherever order matters.
#[derive(Debug, Default)]
pub struct Population {
    agents: HashMap<AgentId, Agent>,
}

impl Population {
    pub fn new() -> Population {
        Population::default()
    }

    pub fn insert(&mut self, agent: Agent) -> Result<(), PopulationError> {
        if self.agents.contains_key(&agent.id) {
            return Err(PopulationError::DuplicateAgent(agent.id));
        }
        self.agents.insert(agent.id.clone(), agent);
        Ok(())
    }

    pub fn get(&self, agent_id: &AgentId) -> Option<&Agent> {
        self.agents.get(agent_id)
    }

    pub fn get_mut(&mut self, agent_id: &AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(agent_id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// agent ids in their canonical (lexicographic) order.
    pub fn sorted_agent_ids(&self) -> Vec<AgentId> {
        let mut ids = self.agents.keys().cloned().collect::<Vec<_>>();
        ids.sort();
        ids
    }

    pub fn read_csv(filepath: &Path) -> Result<Population, PopulationError> {
        let name = filepath.to_string_lossy().to_string();
        let reader = fs_utils::create_reader(filepath)
            .map_err(|e| PopulationError::ReadError(name.clone(), e))?;
        let mut population = Population::new();
        for row in reader.into_deserialize::<AgentRecord>() {
            let record = row.map_err(|e| PopulationError::CsvReadError(name.clone(), e))?;
            population.insert(Agent::new(record.agent_id))?;
        }
        log::info!("read {} agents from {name}", population.len());
        Ok(population)
    }
}

impl TryFrom<Vec<AgentId>> for Population {
    type Error = PopulationError;

    fn try_from(ids: Vec<AgentId>) -> Result<Self, Self::Error> {
        let mut population = Population::new();
        for id in ids.into_iter() {
            population.insert(Agent::new(id))?;
        }
        Ok(population)
    }
}
