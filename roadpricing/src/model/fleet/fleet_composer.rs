use super::{
    CategoryWeightTable, FleetError, SamplingStrategy, Vehicle, VehicleStore, VehicleType,
    VehicleTypeKey, VehicleTypeRegistry, WeightedCategorySampler,
};
use crate::model::population::Population;
use kdam::tqdm;
use rayon::prelude::*;
use roadpricing_core::model::{AgentId, ModeGroup, TravelMode, VehicleId};
use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

/// the vehicle types drawn for one agent, in mode order.
type AgentDraw = (AgentId, Vec<(TravelMode, Arc<VehicleType>)>);

/// outcome of a composition run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FleetSummary {
    pub agents: usize,
    pub vehicles: usize,
    /// number of draws per generated vehicle type
    pub draws: BTreeMap<VehicleTypeKey, usize>,
}

/// assigns each agent one vehicle per configured travel mode. car and ride
/// share one passenger draw; freight draws from its own table. passenger draws
/// always precede freight draws within an agent.
#[derive(Debug, Clone)]
pub struct FleetComposer {
    modes: BTreeSet<TravelMode>,
    tables: BTreeMap<ModeGroup, CategoryWeightTable>,
    strategy: SamplingStrategy,
}

impl FleetComposer {
    pub fn new(
        modes: &[TravelMode],
        tables: Vec<CategoryWeightTable>,
        strategy: SamplingStrategy,
    ) -> Result<FleetComposer, FleetError> {
        if modes.is_empty() {
            return Err(FleetError::ConfigurationError(String::from(
                "at least one travel mode must be equipped with vehicles",
            )));
        }
        let mut by_group = BTreeMap::new();
        for table in tables.into_iter() {
            let mode_group = table.mode_group();
            if by_group.insert(mode_group, table).is_some() {
                return Err(FleetError::ConfigurationError(format!(
                    "more than one weight table given for mode group '{mode_group}'"
                )));
            }
        }
        let modes = modes.iter().cloned().collect::<BTreeSet<_>>();
        for mode in modes.iter() {
            if !by_group.contains_key(&mode.mode_group()) {
                return Err(FleetError::MissingWeightTable(mode.mode_group(), *mode));
            }
        }
        Ok(FleetComposer {
            modes,
            tables: by_group,
            strategy,
        })
    }

    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    /// mode groups drawn for each agent, in draw order.
    fn mode_groups(&self) -> Vec<ModeGroup> {
        self.modes
            .iter()
            .map(|m| m.mode_group())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// draws vehicle types for every agent and materializes their vehicles.
    ///
    /// # Arguments
    ///
    /// * `population` - agents to equip. each agent receives its mode to vehicle id mapping
    /// * `registry`   - vehicle types, must hold every mode group in use
    /// * `sampler`    - seeded random source
    /// * `vehicles`   - store receiving the new vehicles
    ///
    /// # Returns
    ///
    /// * a summary of the vehicles created
    pub fn compose(
        &self,
        population: &mut Population,
        registry: &VehicleTypeRegistry,
        sampler: &mut WeightedCategorySampler,
        vehicles: &mut VehicleStore,
    ) -> Result<FleetSummary, FleetError> {
        let mode_groups = self.mode_groups();
        for mode_group in mode_groups.iter() {
            if !registry.is_registered(mode_group) {
                return Err(FleetError::UnregisteredModeGroup(*mode_group));
            }
        }

        let agent_ids = population.sorted_agent_ids();
        log::info!(
            "composing fleet for {} agents, modes [{}], {:?} sampling with seed {}",
            agent_ids.len(),
            self.modes.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(", "),
            self.strategy,
            sampler.seed()
        );

        let draws: Vec<AgentDraw> = match self.strategy {
            SamplingStrategy::Sequential => {
                let iter = tqdm!(
                    agent_ids.into_iter(),
                    total = population.len(),
                    desc = "draw vehicle types"
                );
                let mut result = Vec::with_capacity(population.len());
                for agent_id in iter {
                    let types = self.draw_agent(&mode_groups, registry, sampler)?;
                    result.push((agent_id, types));
                }
                eprintln!();
                result
            }
            SamplingStrategy::PerAgentStream => {
                let root: &WeightedCategorySampler = sampler;
                agent_ids
                    .into_par_iter()
                    .enumerate()
                    .map(|(index, agent_id)| {
                        let mut agent_sampler = root.stream(index as u64);
                        let types =
                            self.draw_agent(&mode_groups, registry, &mut agent_sampler)?;
                        Ok((agent_id, types))
                    })
                    .collect::<Result<Vec<_>, FleetError>>()?
            }
        };

        let mut summary = FleetSummary {
            agents: draws.len(),
            ..Default::default()
        };
        for (agent_id, types) in draws.into_iter() {
            let mut vehicle_ids: BTreeMap<TravelMode, VehicleId> = BTreeMap::new();
            let mut drawn: BTreeSet<VehicleTypeKey> = BTreeSet::new();
            for (mode, vehicle_type) in types.into_iter() {
                if let Some(key) = vehicle_type.key {
                    if drawn.insert(key) {
                        *summary.draws.entry(key).or_default() += 1;
                    }
                }
                let vehicle = Vehicle::new(agent_id.clone(), mode, vehicle_type);
                vehicle_ids.insert(mode, vehicle.id.clone());
                vehicles.insert(vehicle)?;
                summary.vehicles += 1;
            }
            population
                .get_mut(&agent_id)
                .ok_or_else(|| FleetError::MissingAgent(agent_id.clone()))?
                .insert_vehicle_ids(vehicle_ids);
        }

        log::info!(
            "created {} vehicles for {} agents",
            summary.vehicles,
            summary.agents
        );
        for (key, count) in summary.draws.iter() {
            log::debug!(
                "{} {}: {count} ({:.3}%)",
                key.mode_group,
                key.category,
                100.0 * *count as f64 / summary.agents.max(1) as f64
            );
        }
        Ok(summary)
    }

    /// takes one draw per mode group and fans the drawn type out to the
    /// group's configured modes.
    fn draw_agent(
        &self,
        mode_groups: &[ModeGroup],
        registry: &VehicleTypeRegistry,
        sampler: &mut WeightedCategorySampler,
    ) -> Result<Vec<(TravelMode, Arc<VehicleType>)>, FleetError> {
        let mut result = Vec::with_capacity(self.modes.len());
        for mode_group in mode_groups.iter() {
            let table = self.tables.get(mode_group).ok_or_else(|| {
                FleetError::InternalError(format!(
                    "weight table for mode group '{mode_group}' missing after validation"
                ))
            })?;
            let category = sampler.sample(table)?;
            let vehicle_type = registry
                .get(*mode_group, category)
                .ok_or(FleetError::UnregisteredModeGroup(*mode_group))?;
            for mode in self.modes.iter().filter(|m| m.mode_group() == *mode_group) {
                result.push((*mode, vehicle_type.clone()));
            }
        }
        Ok(result)
    }
}
