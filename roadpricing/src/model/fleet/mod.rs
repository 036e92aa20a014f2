mod category_weight_table;
mod engine_information;
mod fleet_composer;
mod fleet_error;
mod sampling_strategy;
mod vehicle;
mod vehicle_category;
mod vehicle_store;
mod vehicle_type;
mod vehicle_type_registry;
mod weighted_category_sampler;

pub use category_weight_table::{CategoryWeight, CategoryWeightTable, KBA_2023_SHARES};
pub use engine_information::{EngineInformation, HbefaVehicleCategory};
pub use fleet_composer::{FleetComposer, FleetSummary};
pub use fleet_error::FleetError;
pub use sampling_strategy::SamplingStrategy;
pub use vehicle::{TransitVehicle, TransitVehicleRecord, Vehicle, VehicleRecord};
pub use vehicle_category::VehicleCategory;
pub use vehicle_store::{TransitVehicleStore, VehicleSource, VehicleStore};
pub use vehicle_type::{VehicleType, VehicleTypeKey, VehicleTypeRecord};
pub use vehicle_type_registry::VehicleTypeRegistry;
pub use weighted_category_sampler::WeightedCategorySampler;
