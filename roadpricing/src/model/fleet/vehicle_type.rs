use super::{EngineInformation, HbefaVehicleCategory, VehicleCategory};
use roadpricing_core::model::{ModeGroup, VehicleTypeId};
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::meter};

/// identity of a generated vehicle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct VehicleTypeKey {
    pub mode_group: ModeGroup,
    pub category: VehicleCategory,
}

impl VehicleTypeKey {
    pub fn new(mode_group: ModeGroup, category: VehicleCategory) -> VehicleTypeKey {
        VehicleTypeKey {
            mode_group,
            category,
        }
    }
}

/// a vehicle type definition. generated types carry a [`VehicleTypeKey`];
/// types of vehicles coming from outside the generated fleet (transit) do not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleType {
    pub id: VehicleTypeId,
    pub key: Option<VehicleTypeKey>,
    pub engine: EngineInformation,
    pub length: Length,
    pub pce: f64,
}

impl VehicleType {
    pub const DEFAULT_LENGTH_METERS: f64 = 7.5;
    pub const DEFAULT_PCE: f64 = 1.0;
    pub const FREIGHT_LENGTH_METERS: f64 = 15.0;
    pub const FREIGHT_PCE: f64 = 3.5;

    /// creates the vehicle type for a category within a mode group. freight
    /// types are longer, occupy more road capacity and have ids suffixed with
    /// "Freight" so both groups share no ids.
    pub fn new(mode_group: ModeGroup, category: VehicleCategory) -> VehicleType {
        let (id, hbefa_category, length, pce) = match mode_group {
            ModeGroup::Passenger => (
                category.type_name().to_string(),
                HbefaVehicleCategory::PassengerCar,
                Self::DEFAULT_LENGTH_METERS,
                Self::DEFAULT_PCE,
            ),
            ModeGroup::Freight => (
                format!("{}Freight", category.type_name()),
                HbefaVehicleCategory::HeavyGoodsVehicle,
                Self::FREIGHT_LENGTH_METERS,
                Self::FREIGHT_PCE,
            ),
        };
        VehicleType {
            id: VehicleTypeId(id),
            key: Some(VehicleTypeKey::new(mode_group, category)),
            engine: EngineInformation::average(hbefa_category, category.emissions_concept()),
            length: Length::new::<meter>(length),
            pce,
        }
    }

    /// a vehicle type without a powertrain category, such as a transit bus type.
    pub fn uncategorized(id: VehicleTypeId) -> VehicleType {
        VehicleType {
            id,
            key: None,
            engine: EngineInformation::average(
                HbefaVehicleCategory::NonHbefaVehicle,
                EngineInformation::AVERAGE,
            ),
            length: Length::new::<meter>(Self::DEFAULT_LENGTH_METERS),
            pce: Self::DEFAULT_PCE,
        }
    }

    pub fn category(&self) -> Option<VehicleCategory> {
        self.key.map(|k| k.category)
    }

    pub fn mode_group(&self) -> Option<ModeGroup> {
        self.key.map(|k| k.mode_group)
    }
}

/// row of a vehicle types file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleTypeRecord {
    pub vehicle_type_id: VehicleTypeId,
    pub mode_group: Option<ModeGroup>,
    pub category: Option<VehicleCategory>,
    pub hbefa_vehicle_category: HbefaVehicleCategory,
    pub hbefa_technology: String,
    pub hbefa_size_class: String,
    pub hbefa_emissions_concept: String,
    /// meters
    pub length: f64,
    pub pce: f64,
}

impl From<&VehicleType> for VehicleTypeRecord {
    fn from(t: &VehicleType) -> Self {
        VehicleTypeRecord {
            vehicle_type_id: t.id.clone(),
            mode_group: t.mode_group(),
            category: t.category(),
            hbefa_vehicle_category: t.engine.hbefa_vehicle_category,
            hbefa_technology: t.engine.hbefa_technology.clone(),
            hbefa_size_class: t.engine.hbefa_size_class.clone(),
            hbefa_emissions_concept: t.engine.hbefa_emissions_concept.clone(),
            length: t.length.get::<meter>(),
            pce: t.pce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freight_types_are_longer_and_heavier() {
        let car = VehicleType::new(ModeGroup::Passenger, VehicleCategory::HybridDiesel);
        let truck = VehicleType::new(ModeGroup::Freight, VehicleCategory::HybridDiesel);
        assert_eq!(car.id, VehicleTypeId::new("hybridDiesel"));
        assert_eq!(truck.id, VehicleTypeId::new("hybridDieselFreight"));
        assert_eq!(truck.length.get::<meter>(), 15.0);
        assert_eq!(truck.pce, 3.5);
        assert_eq!(car.pce, 1.0);
        assert_eq!(
            truck.engine.hbefa_vehicle_category,
            HbefaVehicleCategory::HeavyGoodsVehicle
        );
        assert_eq!(
            car.engine.hbefa_emissions_concept,
            "Plug-in Hybrid diesel/electric"
        );
    }

    #[test]
    fn test_uncategorized_type_has_no_key() {
        let bus = VehicleType::uncategorized(VehicleTypeId::new("Bus_veh_type"));
        assert_eq!(bus.category(), None);
        assert_eq!(bus.mode_group(), None);
    }
}
