use super::TollError;
use crate::model::fleet::{
    TransitVehicleStore, VehicleCategory, VehicleSource, VehicleStore, VehicleType,
};
use roadpricing_core::model::{VehicleId, VehicleTypeId};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

/// multiplier applied to the base toll amount for one vehicle category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TollFactor {
    pub category: VehicleCategory,
    pub factor: f64,
}

impl TollFactor {
    pub fn new(category: VehicleCategory, factor: f64) -> TollFactor {
        TollFactor { category, factor }
    }
}

/// ordered toll factors by vehicle category.
#[derive(Debug, Clone, PartialEq)]
pub struct TollFactorTable {
    factors: Vec<TollFactor>,
}

impl Default for TollFactorTable {
    /// combustion engines pay double, gas engines the base amount and
    /// electric vehicles half.
    fn default() -> Self {
        use VehicleCategory as C;
        TollFactorTable {
            factors: vec![
                TollFactor::new(C::Petrol, 2.0),
                TollFactor::new(C::Diesel, 2.0),
                TollFactor::new(C::HybridPetrol, 2.0),
                TollFactor::new(C::HybridDiesel, 2.0),
                TollFactor::new(C::Cng, 1.0),
                TollFactor::new(C::Lpg, 1.0),
                TollFactor::new(C::Electric, 0.5),
            ],
        }
    }
}

impl TollFactorTable {
    pub fn try_new(factors: Vec<TollFactor>) -> Result<TollFactorTable, TollError> {
        let mut seen = HashSet::new();
        for f in factors.iter() {
            if !seen.insert(f.category) {
                return Err(TollError::ConfigurationError(format!(
                    "toll factor for category '{}' given more than once",
                    f.category
                )));
            }
            if !f.factor.is_finite() || f.factor < 0.0 {
                return Err(TollError::ConfigurationError(format!(
                    "toll factor for category '{}' must be finite and non-negative, found {}",
                    f.category, f.factor
                )));
            }
        }
        Ok(TollFactorTable { factors })
    }

    pub fn factor(&self, category: &VehicleCategory) -> Option<f64> {
        self.factors
            .iter()
            .find(|f| &f.category == category)
            .map(|f| f.factor)
    }

    pub fn factors(&self) -> &[TollFactor] {
        &self.factors
    }
}

/// resolves a vehicle's type from the fleet or the transit vehicles and
/// returns the toll factor of its category.
#[derive(Debug)]
pub struct VehicleTypeTollFactor {
    factors: TollFactorTable,
    vehicles: Arc<VehicleStore>,
    transit_vehicles: Arc<TransitVehicleStore>,
    warned: Mutex<HashSet<VehicleTypeId>>,
}

impl VehicleTypeTollFactor {
    pub fn new(
        factors: TollFactorTable,
        vehicles: Arc<VehicleStore>,
        transit_vehicles: Arc<TransitVehicleStore>,
    ) -> VehicleTypeTollFactor {
        VehicleTypeTollFactor {
            factors,
            vehicles,
            transit_vehicles,
            warned: Mutex::new(HashSet::new()),
        }
    }

    /// looks up the vehicle in the fleet first, then in the transit vehicles.
    pub fn resolve(&self, vehicle_id: &VehicleId) -> Option<&Arc<VehicleType>> {
        self.vehicles
            .vehicle_type(vehicle_id)
            .or_else(|| self.transit_vehicles.vehicle_type(vehicle_id))
    }

    /// the factor for a vehicle type. types without a category, or whose
    /// category has no factor, are charged nothing.
    pub fn factor(&self, vehicle_type: &VehicleType) -> f64 {
        let found = vehicle_type
            .category()
            .and_then(|c| self.factors.factor(&c));
        match found {
            Some(factor) => factor,
            None => {
                self.warn_once(vehicle_type);
                0.0
            }
        }
    }

    fn warn_once(&self, vehicle_type: &VehicleType) {
        let first = match self.warned.lock() {
            Ok(mut warned) => warned.insert(vehicle_type.id.clone()),
            Err(_) => true,
        };
        if first {
            match vehicle_type.category() {
                Some(c) => log::warn!(
                    "no toll factor for category '{c}' of vehicle type '{}', charging 0",
                    vehicle_type.id
                ),
                None => log::warn!(
                    "vehicle type '{}' has no vehicle category, charging 0",
                    vehicle_type.id
                ),
            }
        }
    }
}
