use super::{AgentId, TravelMode};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash)]
#[serde(transparent)]
pub struct VehicleId(pub String);

impl VehicleId {
    pub fn new(id: impl Into<String>) -> VehicleId {
        VehicleId(id.into())
    }

    /// the id of the vehicle an agent owns for a given travel mode, "{agent}_{mode}".
    pub fn for_agent(agent_id: &AgentId, mode: &TravelMode) -> VehicleId {
        VehicleId(format!("{agent_id}_{mode}"))
    }
}

impl Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::VehicleId;
    use crate::model::{AgentId, TravelMode};

    #[test]
    fn test_vehicle_id_is_mode_qualified() {
        let agent = AgentId::new("bb_1234");
        assert_eq!(
            VehicleId::for_agent(&agent, &TravelMode::Car),
            VehicleId::new("bb_1234_car")
        );
        assert_eq!(
            VehicleId::for_agent(&agent, &TravelMode::Freight),
            VehicleId::new("bb_1234_freight")
        );
    }
}
