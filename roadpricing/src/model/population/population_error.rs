use roadpricing_core::model::AgentId;

#[derive(thiserror::Error, Debug)]
pub enum PopulationError {
    #[error("agent '{0}' appears more than once in the population")]
    DuplicateAgent(AgentId),
    #[error("failure opening population file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure reading population file {0}: {1}")]
    CsvReadError(String, csv::Error),
}
