use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// powertrain of a vehicle. the same closed set applies to every mode group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    Petrol,
    Diesel,
    Lpg,
    Cng,
    /// plug-in hybrid, petrol/electric
    HybridPetrol,
    /// plug-in hybrid, diesel/electric
    HybridDiesel,
    Electric,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 7] = [
        VehicleCategory::Petrol,
        VehicleCategory::Diesel,
        VehicleCategory::Lpg,
        VehicleCategory::Cng,
        VehicleCategory::HybridPetrol,
        VehicleCategory::HybridDiesel,
        VehicleCategory::Electric,
    ];

    /// camel-cased name used to build vehicle type ids, such as "hybridPetrol".
    pub fn type_name(&self) -> &'static str {
        match self {
            VehicleCategory::Petrol => "petrol",
            VehicleCategory::Diesel => "diesel",
            VehicleCategory::Lpg => "lpg",
            VehicleCategory::Cng => "cng",
            VehicleCategory::HybridPetrol => "hybridPetrol",
            VehicleCategory::HybridDiesel => "hybridDiesel",
            VehicleCategory::Electric => "electric",
        }
    }

    /// HBEFA emissions concept consumed by emission factor lookups.
    pub fn emissions_concept(&self) -> &'static str {
        match self {
            VehicleCategory::Petrol => "petrol (4S)",
            VehicleCategory::Diesel => "diesel",
            VehicleCategory::Lpg => "bifuel LPG/petrol",
            VehicleCategory::Cng => "bifuel CNG/petrol",
            VehicleCategory::HybridPetrol => "Plug-in Hybrid petrol/electric",
            VehicleCategory::HybridDiesel => "Plug-in Hybrid diesel/electric",
            VehicleCategory::Electric => "electricity",
        }
    }
}

impl Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VehicleCategory::Petrol => "petrol",
            VehicleCategory::Diesel => "diesel",
            VehicleCategory::Lpg => "lpg",
            VehicleCategory::Cng => "cng",
            VehicleCategory::HybridPetrol => "hybrid_petrol",
            VehicleCategory::HybridDiesel => "hybrid_diesel",
            VehicleCategory::Electric => "electric",
        };
        write!(f, "{s}")
    }
}
