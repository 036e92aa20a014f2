use super::ModeGroup;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// travel modes that are equipped with their own vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Car,
    Ride,
    Freight,
}

impl TravelMode {
    pub const ALL: [TravelMode; 3] = [TravelMode::Car, TravelMode::Ride, TravelMode::Freight];

    /// the mode group whose weight table and vehicle types serve this mode.
    pub fn mode_group(&self) -> ModeGroup {
        match self {
            TravelMode::Car | TravelMode::Ride => ModeGroup::Passenger,
            TravelMode::Freight => ModeGroup::Freight,
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelMode::Car => write!(f, "car"),
            TravelMode::Ride => write!(f, "ride"),
            TravelMode::Freight => write!(f, "freight"),
        }
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(TravelMode::Car),
            "ride" => Ok(TravelMode::Ride),
            "freight" => Ok(TravelMode::Freight),
            other => Err(format!(
                "the mode `{other}` provided does not have vehicle types"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TravelMode;
    use crate::model::ModeGroup;

    #[test]
    fn test_mode_groups() {
        assert_eq!(TravelMode::Car.mode_group(), ModeGroup::Passenger);
        assert_eq!(TravelMode::Ride.mode_group(), ModeGroup::Passenger);
        assert_eq!(TravelMode::Freight.mode_group(), ModeGroup::Freight);
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert_eq!(" Car".parse::<TravelMode>(), Ok(TravelMode::Car));
        assert!("pt".parse::<TravelMode>().is_err());
    }
}
