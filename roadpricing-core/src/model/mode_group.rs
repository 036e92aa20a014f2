use super::TravelMode;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// groups travel modes that share a category distribution and a set of
/// vehicle types. the derived ordering (passenger before freight) is the
/// order in which an agent's draws are taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeGroup {
    Passenger,
    Freight,
}

impl ModeGroup {
    pub const ALL: [ModeGroup; 2] = [ModeGroup::Passenger, ModeGroup::Freight];

    pub fn travel_modes(&self) -> Vec<TravelMode> {
        TravelMode::ALL
            .into_iter()
            .filter(|m| m.mode_group() == *self)
            .collect()
    }
}

impl Display for ModeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeGroup::Passenger => write!(f, "passenger"),
            ModeGroup::Freight => write!(f, "freight"),
        }
    }
}
