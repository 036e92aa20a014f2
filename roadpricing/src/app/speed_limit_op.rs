use super::RoadPricingAppError;
use crate::{config::ScenarioConfig, model::network::Network};
use roadpricing_core::util::geo_utils;
use std::path::Path;

/// applies the configured speed limit and writes the resulting network.
pub fn run_speed_limit(
    network_file: &Path,
    area_file: Option<&Path>,
    output_file: &Path,
    conf: &ScenarioConfig,
) -> Result<(), RoadPricingAppError> {
    let area = match area_file {
        Some(f) => Some(geo_utils::read_area_wkt(f)?),
        None => None,
    };
    let policy = conf.speed_limit()?.build_policy(area)?;
    let mut network = Network::read_csv(network_file)?;
    policy.apply(&mut network);
    let n = network.write_csv(output_file, conf.overwrite)?;
    log::info!("wrote {n} links to {}", output_file.to_string_lossy());
    eprintln!("finished.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app::zone_op::tests::write_inputs, config::SpeedLimitConfig};
    use roadpricing_core::model::LinkId;
    use uom::si::{f64::Velocity, velocity::meter_per_second};

    fn conf(limit: f64) -> ScenarioConfig {
        ScenarioConfig {
            speed_limit: Some(SpeedLimitConfig {
                limit: Velocity::new::<meter_per_second>(limit),
                only_on_type: None,
                not_on_type: Some(String::from("trunk")),
            }),
            ..Default::default()
        }
    }

    fn speed(network: &Network, id: &str) -> f64 {
        network
            .get(&LinkId::new(id))
            .expect("test invariant failed: missing link")
            .freespeed
            .get::<meter_per_second>()
    }

    #[test]
    fn test_run_speed_limit_in_area() {
        let dir = tempfile::tempdir().expect("test invariant failed: cannot create directory");
        let (network, area) = write_inputs(dir.path());
        let output = dir.path().join("limited.csv");
        run_speed_limit(&network, Some(&area), &output, &conf(8.33))
            .expect("speed limit run failed");
        let result = Network::read_csv(&output).expect("test invariant failed: bad output");
        assert_eq!(result.len(), 5);
        assert_eq!(speed(&result, "inside"), 8.33);
        assert_eq!(speed(&result, "fast"), 27.78);
        assert_eq!(speed(&result, "outside"), 13.89);
        assert_eq!(speed(&result, "rail"), 22.22);
    }

    #[test]
    fn test_run_speed_limit_requires_section() {
        let dir = tempfile::tempdir().expect("test invariant failed: cannot create directory");
        let (network, _) = write_inputs(dir.path());
        let output = dir.path().join("limited.csv");
        let result = run_speed_limit(&network, None, &output, &ScenarioConfig::default());
        assert!(matches!(result, Err(RoadPricingAppError::ConfigError { .. })));
    }
}
