use crate::{
    config::ConfigError,
    model::{fleet::FleetError, network::NetworkError, population::PopulationError, toll::TollError},
};
use roadpricing_core::util::geo_utils::GeoUtilsError;

#[derive(thiserror::Error, Debug)]
pub enum RoadPricingAppError {
    #[error("failure reading run configuration: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },
    #[error("failure composing fleet: {source}")]
    FleetError {
        #[from]
        source: FleetError,
    },
    #[error("failure reading population: {source}")]
    PopulationError {
        #[from]
        source: PopulationError,
    },
    #[error("failure processing network: {source}")]
    NetworkError {
        #[from]
        source: NetworkError,
    },
    #[error("failure pricing link traversals: {source}")]
    TollError {
        #[from]
        source: TollError,
    },
    #[error("failure reading area: {source}")]
    GeoUtilsError {
        #[from]
        source: GeoUtilsError,
    },
    #[error("failure writing {0}: {1}")]
    WriteError(String, String),
}
