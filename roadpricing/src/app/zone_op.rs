use super::{fleet_op::write_error, RoadPricingAppError};
use crate::{
    config::ScenarioConfig,
    model::{
        network::Network,
        toll::{TollZone, TolledLinkRecord},
    },
    util::fs_utils,
};
use roadpricing_core::util::geo_utils;
use std::path::Path;

/// writes the ids of the links inside the toll area.
pub fn run_zone(
    network_file: &Path,
    area_file: &Path,
    output_file: &Path,
    conf: &ScenarioConfig,
) -> Result<(), RoadPricingAppError> {
    let speed_threshold = conf.toll.validate_speed_threshold()?;
    let area = geo_utils::read_area_wkt(area_file)?;
    let network = Network::read_csv(network_file)?;
    let zone = TollZone::new(area, &network, speed_threshold);
    let rows = zone
        .sorted_link_ids()
        .into_iter()
        .map(|link_id| TolledLinkRecord {
            link_id: link_id.clone(),
        });
    let n = fs_utils::write_csv(output_file, conf.overwrite, rows)
        .map_err(|e| write_error(output_file, e))?;
    log::info!("wrote {n} tolled links to {}", output_file.to_string_lossy());
    eprintln!("finished.");
    Ok(())
}
