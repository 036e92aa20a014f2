use super::{run_fleet, run_price, run_speed_limit, run_zone, RoadPricingAppError};
use crate::config::ScenarioConfig;
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RoadPricingAppArguments {
    #[command(subcommand)]
    pub app: App,
    #[arg(long, global = true, help = "path to .toml or .json scenario configuration")]
    pub configuration_file: Option<String>,
}

#[derive(Subcommand)]
pub enum App {
    /// assign vehicle types and vehicles to every agent of a population
    Fleet {
        #[arg(long, help = "population CSV with an agent_id column")]
        population: String,
        #[arg(long, help = "directory receiving vehicle-types.csv and vehicles.csv")]
        output_directory: String,
    },
    /// list the links inside a toll area
    Zone {
        #[arg(long, help = "network links CSV")]
        network: String,
        #[arg(long, help = "file containing a WKT POLYGON or MULTIPOLYGON")]
        area: String,
        #[arg(long, help = "output CSV of tolled link ids")]
        output_file: String,
    },
    /// lower link free speeds to the configured speed limit
    SpeedLimit {
        #[arg(long, help = "network links CSV")]
        network: String,
        #[arg(long, help = "file containing a WKT POLYGON or MULTIPOLYGON limiting where the speed limit applies")]
        area: Option<String>,
        #[arg(long, help = "output network links CSV")]
        output_file: String,
    },
    /// charge tolls for link traversal events
    Price {
        #[arg(long, help = "network links CSV")]
        network: String,
        #[arg(long, help = "file containing a WKT POLYGON or MULTIPOLYGON of the toll area")]
        area: String,
        #[arg(long, help = "vehicles CSV written by the fleet command")]
        vehicles: String,
        #[arg(long, help = "transit vehicles CSV with vehicle_id and vehicle_type_id columns")]
        transit_vehicles: Option<String>,
        #[arg(long, help = "link traversal events CSV")]
        events: String,
        #[arg(long, help = "output CSV of charged events")]
        output_file: String,
    },
}

pub fn run(args: &RoadPricingAppArguments) -> Result<(), RoadPricingAppError> {
    env_logger::init();
    if let Some(f) = &args.configuration_file {
        log::info!("reading scenario configuration from {f}");
    }
    let conf = ScenarioConfig::load(args.configuration_file.as_ref())?;
    match &args.app {
        App::Fleet {
            population,
            output_directory,
        } => run_fleet(Path::new(population), Path::new(output_directory), &conf),
        App::Zone {
            network,
            area,
            output_file,
        } => run_zone(
            Path::new(network),
            Path::new(area),
            Path::new(output_file),
            &conf,
        ),
        App::SpeedLimit {
            network,
            area,
            output_file,
        } => run_speed_limit(
            Path::new(network),
            area.as_ref().map(Path::new),
            Path::new(output_file),
            &conf,
        ),
        App::Price {
            network,
            area,
            vehicles,
            transit_vehicles,
            events,
            output_file,
        } => run_price(
            Path::new(network),
            Path::new(area),
            Path::new(vehicles),
            transit_vehicles.as_ref().map(Path::new),
            Path::new(events),
            Path::new(output_file),
            &conf,
        ),
    }
}
