use super::RoadPricingAppError;
use crate::{
    config::ScenarioConfig,
    model::{
        fleet::{
            FleetSummary, VehicleRecord, VehicleStore, VehicleTypeRecord, VehicleTypeRegistry,
            WeightedCategorySampler,
        },
        population::Population,
    },
    util::fs_utils,
};
use std::path::Path;

pub const VEHICLE_TYPES_FILENAME: &str = "vehicle-types.csv";
pub const VEHICLES_FILENAME: &str = "vehicles.csv";
pub const FLEET_SUMMARY_FILENAME: &str = "fleet-summary.json";

/// equips every agent of a population with vehicles and writes the vehicle
/// types, vehicles and a summary of the drawn categories to the output
/// directory.
pub fn run_fleet(
    population_file: &Path,
    output_directory: &Path,
    conf: &ScenarioConfig,
) -> Result<(), RoadPricingAppError> {
    let composer = conf.fleet.build_composer()?;
    let mut population = Population::read_csv(population_file)?;
    let mut registry = VehicleTypeRegistry::new();
    for mode_group in conf.fleet.mode_groups() {
        registry.register(mode_group)?;
    }
    let mut sampler = WeightedCategorySampler::from_seed(conf.seed);
    let mut vehicles = VehicleStore::new();
    let summary = composer.compose(&mut population, &registry, &mut sampler, &mut vehicles)?;

    std::fs::create_dir_all(output_directory).map_err(|e| {
        RoadPricingAppError::WriteError(output_directory.to_string_lossy().to_string(), e.to_string())
    })?;
    let types_file = output_directory.join(VEHICLE_TYPES_FILENAME);
    let n_types = fs_utils::write_csv(
        &types_file,
        conf.overwrite,
        registry.iter().map(|t| VehicleTypeRecord::from(&**t)),
    )
    .map_err(|e| write_error(&types_file, e))?;
    let vehicles_file = output_directory.join(VEHICLES_FILENAME);
    let n_vehicles = fs_utils::write_csv(
        &vehicles_file,
        conf.overwrite,
        vehicles.iter_sorted().map(VehicleRecord::from),
    )
    .map_err(|e| write_error(&vehicles_file, e))?;
    write_summary(&output_directory.join(FLEET_SUMMARY_FILENAME), &summary, conf)?;

    log::info!(
        "wrote {n_types} vehicle types and {n_vehicles} vehicles to {}",
        output_directory.to_string_lossy()
    );
    eprintln!("finished.");
    Ok(())
}

fn write_summary(
    filepath: &Path,
    summary: &FleetSummary,
    conf: &ScenarioConfig,
) -> Result<(), RoadPricingAppError> {
    let name = filepath.to_string_lossy().to_string();
    if filepath.exists() && !conf.overwrite {
        return Err(RoadPricingAppError::WriteError(
            name,
            String::from("file already exists"),
        ));
    }
    let draws = summary
        .draws
        .iter()
        .map(|(key, count)| {
            serde_json::json!({
                "mode_group": key.mode_group,
                "category": key.category,
                "count": count,
            })
        })
        .collect::<Vec<_>>();
    let json = serde_json::json!({
        "seed": conf.seed,
        "sampling": conf.fleet.sampling,
        "agents": summary.agents,
        "vehicles": summary.vehicles,
        "draws": draws,
    });
    let contents = serde_json::to_string_pretty(&json)
        .map_err(|e| RoadPricingAppError::WriteError(name.clone(), e.to_string()))?;
    std::fs::write(filepath, contents)
        .map_err(|e| RoadPricingAppError::WriteError(name, e.to_string()))
}

pub(super) fn write_error(filepath: &Path, e: csv::Error) -> RoadPricingAppError {
    RoadPricingAppError::WriteError(filepath.to_string_lossy().to_string(), e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadpricing_core::model::TravelMode;
    use std::collections::HashMap;

    fn write_population(dir: &Path, n: usize) -> std::path::PathBuf {
        let filepath = dir.join("population.csv");
        let mut contents = String::from("agent_id\n");
        for i in 0..n {
            contents.push_str(&format!("person_{i}\n"));
        }
        std::fs::write(&filepath, contents).expect("test invariant failed: cannot write population");
        filepath
    }

    fn read_vehicles(filepath: &Path) -> Vec<VehicleRecord> {
        fs_utils::create_reader(filepath)
            .expect("test invariant failed: cannot open vehicles")
            .into_deserialize::<VehicleRecord>()
            .collect::<Result<Vec<_>, _>>()
            .expect("test invariant failed: cannot read vehicles")
    }

    #[test]
    fn test_run_fleet() {
        let dir = tempfile::tempdir().expect("test invariant failed: cannot create directory");
        let population = write_population(dir.path(), 50);
        let conf = ScenarioConfig::default();
        let out_a = dir.path().join("a");
        let out_b = dir.path().join("b");
        run_fleet(&population, &out_a, &conf).expect("fleet run failed");
        run_fleet(&population, &out_b, &conf).expect("fleet run failed");

        let vehicles = read_vehicles(&out_a.join(VEHICLES_FILENAME));
        assert_eq!(vehicles.len(), 150);
        assert_eq!(vehicles, read_vehicles(&out_b.join(VEHICLES_FILENAME)));

        // car and ride share the passenger draw
        let mut by_agent: HashMap<_, HashMap<TravelMode, _>> = HashMap::new();
        for v in vehicles.iter() {
            by_agent
                .entry(v.agent_id.clone())
                .or_default()
                .insert(v.mode, v.vehicle_type_id.clone());
        }
        for modes in by_agent.values() {
            assert_eq!(modes.get(&TravelMode::Car), modes.get(&TravelMode::Ride));
            let freight = modes
                .get(&TravelMode::Freight)
                .expect("missing freight vehicle");
            assert!(freight.to_string().ends_with("Freight"));
        }

        let n_types = fs_utils::create_reader(&out_a.join(VEHICLE_TYPES_FILENAME))
            .expect("test invariant failed: cannot open vehicle types")
            .into_deserialize::<VehicleTypeRecord>()
            .count();
        assert_eq!(n_types, 14);
        assert!(out_a.join(FLEET_SUMMARY_FILENAME).exists());
    }

    #[test]
    fn test_run_fleet_refuses_overwrite() {
        let dir = tempfile::tempdir().expect("test invariant failed: cannot create directory");
        let population = write_population(dir.path(), 3);
        let conf = ScenarioConfig::default();
        let out = dir.path().join("out");
        run_fleet(&population, &out, &conf).expect("fleet run failed");
        let again = run_fleet(&population, &out, &conf);
        assert!(matches!(again, Err(RoadPricingAppError::WriteError(_, _))));
    }
}
