use super::VehicleType;
use roadpricing_core::model::{AgentId, TravelMode, VehicleId, VehicleTypeId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// a vehicle owned by one agent for one travel mode.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: VehicleId,
    pub agent_id: AgentId,
    pub mode: TravelMode,
    pub vehicle_type: Arc<VehicleType>,
}

impl Vehicle {
    pub fn new(agent_id: AgentId, mode: TravelMode, vehicle_type: Arc<VehicleType>) -> Vehicle {
        Vehicle {
            id: VehicleId::for_agent(&agent_id, &mode),
            agent_id,
            mode,
            vehicle_type,
        }
    }
}

/// a vehicle that does not belong to the generated fleet, such as a bus.
#[derive(Debug, Clone)]
pub struct TransitVehicle {
    pub id: VehicleId,
    pub vehicle_type: Arc<VehicleType>,
}

/// row of a vehicles file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub vehicle_id: VehicleId,
    pub agent_id: AgentId,
    pub mode: TravelMode,
    pub vehicle_type_id: VehicleTypeId,
}

impl From<&Vehicle> for VehicleRecord {
    fn from(v: &Vehicle) -> Self {
        VehicleRecord {
            vehicle_id: v.id.clone(),
            agent_id: v.agent_id.clone(),
            mode: v.mode,
            vehicle_type_id: v.vehicle_type.id.clone(),
        }
    }
}

/// row of a transit vehicles file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitVehicleRecord {
    pub vehicle_id: VehicleId,
    pub vehicle_type_id: VehicleTypeId,
}
