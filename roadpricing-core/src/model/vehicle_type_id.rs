use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash)]
#[serde(transparent)]
pub struct VehicleTypeId(pub String);

impl VehicleTypeId {
    pub fn new(id: impl Into<String>) -> VehicleTypeId {
        VehicleTypeId(id.into())
    }
}

impl Display for VehicleTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
