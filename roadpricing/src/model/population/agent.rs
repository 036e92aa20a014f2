use roadpricing_core::model::{AgentId, TravelMode, VehicleId};
use std::collections::BTreeMap;

/// a simulated person. the simulator resolves which vehicle the agent drives
/// on a leg through the mode to vehicle id mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub id: AgentId,
    vehicle_ids: BTreeMap<TravelMode, VehicleId>,
}

impl Agent {
    pub fn new(id: AgentId) -> Agent {
        Agent {
            id,
            vehicle_ids: BTreeMap::new(),
        }
    }

    /// records the vehicles of this agent, replacing any previous vehicle
    /// for the same mode.
    pub fn insert_vehicle_ids(&mut self, vehicle_ids: BTreeMap<TravelMode, VehicleId>) {
        self.vehicle_ids.extend(vehicle_ids);
    }

    pub fn vehicle_id(&self, mode: &TravelMode) -> Option<&VehicleId> {
        self.vehicle_ids.get(mode)
    }

    pub fn vehicle_ids(&self) -> &BTreeMap<TravelMode, VehicleId> {
        &self.vehicle_ids
    }
}
