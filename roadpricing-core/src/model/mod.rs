mod agent_id;
mod link_id;
mod mode_group;
mod sim_time;
mod travel_mode;
mod vehicle_id;
mod vehicle_type_id;

pub use agent_id::AgentId;
pub use link_id::LinkId;
pub use mode_group::ModeGroup;
pub use sim_time::{SimTime, SimTimeError};
pub use travel_mode::TravelMode;
pub use vehicle_id::VehicleId;
pub use vehicle_type_id::VehicleTypeId;
