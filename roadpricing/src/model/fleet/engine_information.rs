use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HbefaVehicleCategory {
    PassengerCar,
    HeavyGoodsVehicle,
    NonHbefaVehicle,
}

impl Display for HbefaVehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HbefaVehicleCategory::PassengerCar => "PASSENGER_CAR",
            HbefaVehicleCategory::HeavyGoodsVehicle => "HEAVY_GOODS_VEHICLE",
            HbefaVehicleCategory::NonHbefaVehicle => "NON_HBEFA_VEHICLE",
        };
        write!(f, "{s}")
    }
}

/// powertrain metadata handed to the emissions collaborator. technology and
/// size class are always the HBEFA "average" for generated fleets.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineInformation {
    pub hbefa_vehicle_category: HbefaVehicleCategory,
    pub hbefa_technology: String,
    pub hbefa_size_class: String,
    pub hbefa_emissions_concept: String,
}

impl EngineInformation {
    pub const AVERAGE: &'static str = "average";

    pub fn average(category: HbefaVehicleCategory, emissions_concept: &str) -> EngineInformation {
        EngineInformation {
            hbefa_vehicle_category: category,
            hbefa_technology: String::from(Self::AVERAGE),
            hbefa_size_class: String::from(Self::AVERAGE),
            hbefa_emissions_concept: String::from(emissions_concept),
        }
    }
}
