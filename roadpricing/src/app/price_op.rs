use super::{fleet_op::write_error, RoadPricingAppError};
use crate::{
    config::ScenarioConfig,
    model::{
        fleet::{TransitVehicleStore, VehicleStore, VehicleTypeRegistry},
        network::Network,
        toll::{LinkTraversal, TollPricingPolicy, TollZone, VehicleTypeTollFactor},
    },
    util::fs_utils,
};
use roadpricing_core::util::geo_utils;
use std::{path::Path, sync::Arc};

/// charges every link traversal event and writes one row per event with
/// its amount.
pub fn run_price(
    network_file: &Path,
    area_file: &Path,
    vehicles_file: &Path,
    transit_vehicles_file: Option<&Path>,
    events_file: &Path,
    output_file: &Path,
    conf: &ScenarioConfig,
) -> Result<(), RoadPricingAppError> {
    let scheme = conf.toll.build_scheme()?;
    let factors = conf.toll.build_factors()?;
    let speed_threshold = conf.toll.validate_speed_threshold()?;
    let area = geo_utils::read_area_wkt(area_file)?;

    let network = Network::read_csv(network_file)?;
    let zone = TollZone::new(area, &network, speed_threshold);

    let registry = VehicleTypeRegistry::with_all_mode_groups()?;
    let vehicles = VehicleStore::read_csv(vehicles_file, &registry)?;
    let transit_vehicles = match transit_vehicles_file {
        Some(f) => TransitVehicleStore::read_csv(f)?,
        None => TransitVehicleStore::new(),
    };
    let factor =
        VehicleTypeTollFactor::new(factors, Arc::new(vehicles), Arc::new(transit_vehicles));
    let policy = TollPricingPolicy::new(zone, scheme, factor);

    let traversals = LinkTraversal::read_csv(events_file)?;
    let charges = policy.charge_traversals(traversals)?;
    let n = fs_utils::write_csv(output_file, conf.overwrite, charges)
        .map_err(|e| write_error(output_file, e))?;
    log::info!("wrote {n} charged link traversals to {}", output_file.to_string_lossy());
    eprintln!("finished.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::zone_op::tests::write_inputs,
        model::toll::{TollChargeRecord, TollError, TollWindow},
    };
    use roadpricing_core::model::SimTime;

    const VEHICLES_CSV: &str = "\
vehicle_id,agent_id,mode,vehicle_type_id
alice_car,alice,car,petrol
alice_ride,alice,ride,petrol
bob_car,bob,car,electric
bob_freight,bob,freight,dieselFreight
";

    const TRANSIT_CSV: &str = "\
vehicle_id,vehicle_type_id
bus_1,Bus_veh_type
";

    const EVENTS_CSV: &str = "\
agent_id,vehicle_id,link_id,time
alice,alice_car,inside,28800
alice,alice_car,inside,21600
alice,alice_car,outside,28800
bob,bob_car,inside,30000
bob,bob_freight,fast,35999
bus,bus_1,inside,28800
alice,alice_ride,inside,NaN
";

    fn conf() -> ScenarioConfig {
        let mut conf = ScenarioConfig::default();
        conf.toll.windows = vec![TollWindow::new(
            SimTime::from_hms(7, 0, 0),
            SimTime::from_hms(10, 0, 0),
            2.0,
        )];
        conf
    }

    fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let filepath = dir.join(name);
        std::fs::write(&filepath, contents).expect("test invariant failed: cannot write input");
        filepath
    }

    #[test]
    fn test_run_price() {
        let dir = tempfile::tempdir().expect("test invariant failed: cannot create directory");
        let (network, area) = write_inputs(dir.path());
        let vehicles = write(dir.path(), "vehicles.csv", VEHICLES_CSV);
        let transit = write(dir.path(), "transit.csv", TRANSIT_CSV);
        let events = write(dir.path(), "events.csv", EVENTS_CSV);
        let output = dir.path().join("charges.csv");
        run_price(
            &network,
            &area,
            &vehicles,
            Some(&transit),
            &events,
            &output,
            &conf(),
        )
        .expect("price run failed");

        let amounts = fs_utils::create_reader(&output)
            .expect("test invariant failed: cannot open charges")
            .into_deserialize::<TollChargeRecord>()
            .map(|r| r.map(|r| r.amount))
            .collect::<Result<Vec<_>, _>>()
            .expect("test invariant failed: cannot read charges");
        assert_eq!(amounts, vec![4.0, 0.0, 0.0, 1.0, 4.0, 0.0, 0.0]);
    }

    #[test]
    fn test_run_price_unresolved_vehicle() {
        let dir = tempfile::tempdir().expect("test invariant failed: cannot create directory");
        let (network, area) = write_inputs(dir.path());
        let vehicles = write(dir.path(), "vehicles.csv", VEHICLES_CSV);
        let events = write(dir.path(), "events.csv", EVENTS_CSV);
        let output = dir.path().join("charges.csv");
        // bus_1 is unknown without the transit vehicles
        let result = run_price(&network, &area, &vehicles, None, &events, &output, &conf());
        assert!(matches!(
            result,
            Err(RoadPricingAppError::TollError {
                source: TollError::UnresolvedVehicleError { .. }
            })
        ));
    }

    #[test]
    fn test_run_price_requires_windows() {
        let dir = tempfile::tempdir().expect("test invariant failed: cannot create directory");
        let (network, area) = write_inputs(dir.path());
        let vehicles = write(dir.path(), "vehicles.csv", VEHICLES_CSV);
        let events = write(dir.path(), "events.csv", EVENTS_CSV);
        let output = dir.path().join("charges.csv");
        let result = run_price(
            &network,
            &area,
            &vehicles,
            None,
            &events,
            &output,
            &ScenarioConfig::default(),
        );
        assert!(matches!(
            result,
            Err(RoadPricingAppError::TollError {
                source: TollError::ConfigurationError(_)
            })
        ));
    }
}
