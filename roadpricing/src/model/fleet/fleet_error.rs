use roadpricing_core::model::{AgentId, ModeGroup, TravelMode, VehicleId, VehicleTypeId};

#[derive(thiserror::Error, Debug)]
pub enum FleetError {
    #[error("invalid fleet configuration: {0}")]
    ConfigurationError(String),
    #[error("vehicle types for mode group '{0}' have already been registered")]
    DuplicateRegistrationError(ModeGroup),
    #[error("no vehicle types registered for mode group '{0}'")]
    UnregisteredModeGroup(ModeGroup),
    #[error("vehicle type '{0}' is not registered")]
    UnknownVehicleType(VehicleTypeId),
    #[error("vehicle '{0}' already exists in the vehicle store")]
    DuplicateVehicleError(VehicleId),
    #[error("no weight table configured for mode group '{0}' required by mode '{1}'")]
    MissingWeightTable(ModeGroup, TravelMode),
    #[error("agent '{0}' not found in population")]
    MissingAgent(AgentId),
    #[error("failure reading vehicles from {0}: {1}")]
    CsvReadError(String, csv::Error),
    #[error("{0}")]
    InternalError(String),
}
