use super::{
    FleetError, TransitVehicle, TransitVehicleRecord, Vehicle, VehicleRecord, VehicleType,
    VehicleTypeRegistry,
};
use crate::util::fs_utils;
use itertools::Itertools;
use kdam::tqdm;
use roadpricing_core::model::{VehicleId, VehicleTypeId};
use std::{collections::HashMap, path::Path, sync::Arc};

/// resolves the vehicle type of a vehicle id.
pub trait VehicleSource {
    fn vehicle_type(&self, vehicle_id: &VehicleId) -> Option<&Arc<VehicleType>>;
}

/// the vehicles of the generated fleet.
#[derive(Debug, Default)]
pub struct VehicleStore {
    vehicles: HashMap<VehicleId, Vehicle>,
}

impl VehicleStore {
    pub fn new() -> VehicleStore {
        VehicleStore::default()
    }

    pub fn insert(&mut self, vehicle: Vehicle) -> Result<(), FleetError> {
        if self.vehicles.contains_key(&vehicle.id) {
            return Err(FleetError::DuplicateVehicleError(vehicle.id));
        }
        self.vehicles.insert(vehicle.id.clone(), vehicle);
        Ok(())
    }

    pub fn get(&self, vehicle_id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(vehicle_id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// vehicles ordered by id.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles
            .values()
            .sorted_by(|a, b| a.id.cmp(&b.id))
    }

    /// reads a vehicles file, binding each row to the registered vehicle type
    /// with the same id.
    pub fn read_csv(
        filepath: &Path,
        registry: &VehicleTypeRegistry,
    ) -> Result<VehicleStore, FleetError> {
        let name = filepath.to_string_lossy().to_string();
        let reader = fs_utils::create_reader(filepath).map_err(|e| {
            FleetError::ConfigurationError(format!("failure opening {name}: {e}"))
        })?;
        let mut store = VehicleStore::new();
        let rows = tqdm!(
            reader.into_deserialize::<VehicleRecord>(),
            desc = "read vehicles"
        );
        for row in rows {
            let record = row.map_err(|e| FleetError::CsvReadError(name.clone(), e))?;
            let vehicle_type = registry
                .get_by_id(&record.vehicle_type_id)
                .ok_or_else(|| FleetError::UnknownVehicleType(record.vehicle_type_id.clone()))?;
            store.insert(Vehicle {
                id: record.vehicle_id,
                agent_id: record.agent_id,
                mode: record.mode,
                vehicle_type: vehicle_type.clone(),
            })?;
        }
        eprintln!();
        log::info!("read {} vehicles from {name}", store.len());
        Ok(store)
    }
}

impl VehicleSource for VehicleStore {
    fn vehicle_type(&self, vehicle_id: &VehicleId) -> Option<&Arc<VehicleType>> {
        self.vehicles.get(vehicle_id).map(|v| &v.vehicle_type)
    }
}

/// vehicles operated by the transit schedule. their types have no category.
#[derive(Debug, Default)]
pub struct TransitVehicleStore {
    vehicles: HashMap<VehicleId, TransitVehicle>,
}

impl TransitVehicleStore {
    pub fn new() -> TransitVehicleStore {
        TransitVehicleStore::default()
    }

    pub fn insert(&mut self, vehicle: TransitVehicle) -> Result<(), FleetError> {
        if self.vehicles.contains_key(&vehicle.id) {
            return Err(FleetError::DuplicateVehicleError(vehicle.id));
        }
        self.vehicles.insert(vehicle.id.clone(), vehicle);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// reads a transit vehicles file. vehicles sharing a type id share one
    /// uncategorized [`VehicleType`].
    pub fn read_csv(filepath: &Path) -> Result<TransitVehicleStore, FleetError> {
        let name = filepath.to_string_lossy().to_string();
        let reader = fs_utils::create_reader(filepath).map_err(|e| {
            FleetError::ConfigurationError(format!("failure opening {name}: {e}"))
        })?;
        let mut types: HashMap<VehicleTypeId, Arc<VehicleType>> = HashMap::new();
        let mut store = TransitVehicleStore::new();
        for row in reader.into_deserialize::<TransitVehicleRecord>() {
            let record = row.map_err(|e| FleetError::CsvReadError(name.clone(), e))?;
            let vehicle_type = types
                .entry(record.vehicle_type_id.clone())
                .or_insert_with(|| Arc::new(VehicleType::uncategorized(record.vehicle_type_id)))
                .clone();
            store.insert(TransitVehicle {
                id: record.vehicle_id,
                vehicle_type,
            })?;
        }
        log::info!(
            "read {} transit vehicles of {} types from {name}",
            store.len(),
            types.len()
        );
        Ok(store)
    }
}

impl VehicleSource for TransitVehicleStore {
    fn vehicle_type(&self, vehicle_id: &VehicleId) -> Option<&Arc<VehicleType>> {
        self.vehicles.get(vehicle_id).map(|v| &v.vehicle_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fleet::VehicleCategory;
    use roadpricing_core::model::{AgentId, ModeGroup, TravelMode};

    #[test]
    fn test_duplicate_vehicle_rejected() {
        let vehicle_type = Arc::new(VehicleType::new(
            ModeGroup::Passenger,
            VehicleCategory::Petrol,
        ));
        let mut store = VehicleStore::new();
        let agent = AgentId::new("1");
        store
            .insert(Vehicle::new(
                agent.clone(),
                TravelMode::Car,
                vehicle_type.clone(),
            ))
            .expect("test invariant failed: first insert failed");
        let result = store.insert(Vehicle::new(agent, TravelMode::Car, vehicle_type));
        assert!(matches!(result, Err(FleetError::DuplicateVehicleError(id)) if id.0 == "1_car"));
    }

    #[test]
    fn test_transit_lookup() {
        let mut store = TransitVehicleStore::new();
        let bus = Arc::new(VehicleType::uncategorized(VehicleTypeId::new("bus")));
        store
            .insert(TransitVehicle {
                id: VehicleId::new("pt_bus_1"),
                vehicle_type: bus.clone(),
            })
            .expect("test invariant failed: insert failed");
        let found = store
            .vehicle_type(&VehicleId::new("pt_bus_1"))
            .expect("transit vehicle missing");
        assert!(Arc::ptr_eq(found, &bus));
        assert!(store.vehicle_type(&VehicleId::new("1_car")).is_none());
    }
}
