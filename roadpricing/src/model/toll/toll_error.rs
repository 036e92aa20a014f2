use roadpricing_core::{
    model::{LinkId, SimTime, VehicleId},
    util::geo_utils::GeoUtilsError,
};

#[derive(thiserror::Error, Debug)]
pub enum TollError {
    #[error("invalid toll configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid toll area: {0}")]
    InvalidArea(#[from] GeoUtilsError),
    #[error("vehicle '{vehicle_id}' entering link '{link_id}' at {time} is not in the vehicle store or the transit vehicle store")]
    UnresolvedVehicleError {
        vehicle_id: VehicleId,
        link_id: LinkId,
        time: SimTime,
    },
    #[error("failure opening {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure reading link traversals from {0}: {1}")]
    CsvReadError(String, csv::Error),
    #[error("failure writing {0}: {1}")]
    CsvWriteError(String, csv::Error),
}
