use super::{FleetError, VehicleCategory, VehicleType, VehicleTypeKey};
use roadpricing_core::model::{ModeGroup, VehicleTypeId};
use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

/// owns the generated vehicle types of a run. each mode group is registered
/// exactly once, creating one [`VehicleType`] per [`VehicleCategory`].
#[derive(Debug, Default)]
pub struct VehicleTypeRegistry {
    types: BTreeMap<VehicleTypeKey, Arc<VehicleType>>,
    registered: BTreeSet<ModeGroup>,
}

impl VehicleTypeRegistry {
    pub fn new() -> VehicleTypeRegistry {
        VehicleTypeRegistry::default()
    }

    /// builds a registry with both the passenger and the freight types.
    pub fn with_all_mode_groups() -> Result<VehicleTypeRegistry, FleetError> {
        let mut registry = VehicleTypeRegistry::new();
        for mode_group in ModeGroup::ALL {
            registry.register(mode_group)?;
        }
        Ok(registry)
    }

    /// creates and stores the vehicle types of a mode group.
    ///
    /// # Arguments
    ///
    /// * `mode_group` - group to create types for
    ///
    /// # Returns
    ///
    /// * the new types by category, or an error if this group was registered before
    pub fn register(
        &mut self,
        mode_group: ModeGroup,
    ) -> Result<BTreeMap<VehicleCategory, Arc<VehicleType>>, FleetError> {
        if !self.registered.insert(mode_group) {
            return Err(FleetError::DuplicateRegistrationError(mode_group));
        }
        let mut created = BTreeMap::new();
        for category in VehicleCategory::ALL {
            let vehicle_type = Arc::new(VehicleType::new(mode_group, category));
            self.types.insert(
                VehicleTypeKey::new(mode_group, category),
                vehicle_type.clone(),
            );
            created.insert(category, vehicle_type);
        }
        log::debug!(
            "registered {} vehicle types for mode group '{mode_group}'",
            created.len()
        );
        Ok(created)
    }

    pub fn is_registered(&self, mode_group: &ModeGroup) -> bool {
        self.registered.contains(mode_group)
    }

    pub fn get(
        &self,
        mode_group: ModeGroup,
        category: VehicleCategory,
    ) -> Option<&Arc<VehicleType>> {
        self.types.get(&VehicleTypeKey::new(mode_group, category))
    }

    pub fn get_by_id(&self, id: &VehicleTypeId) -> Option<&Arc<VehicleType>> {
        self.types.values().find(|t| &t.id == id)
    }

    /// registered types, ordered by mode group and then category.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<VehicleType>> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
