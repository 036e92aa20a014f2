use super::NetworkError;
use geo::{Coord, Point};
use roadpricing_core::{
    model::{LinkId, TravelMode},
    util::geo_utils,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uom::si::{f64::Velocity, velocity::meter_per_second};

/// a directed road segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: LinkId,
    pub from: Coord<f64>,
    pub to: Coord<f64>,
    pub freespeed: Velocity,
    /// road classification such as "highway.primary"
    pub link_type: Option<String>,
    /// network modes permitted on this link, such as "car" or "bike"
    pub allowed_modes: BTreeSet<String>,
}

impl Link {
    /// the point used to locate this link within an area.
    pub fn midpoint(&self) -> Point<f64> {
        geo_utils::link_midpoint(&self.from, &self.to)
    }

    /// true if any of the travel modes may use this link.
    pub fn allows_any(&self, modes: &[TravelMode]) -> bool {
        modes
            .iter()
            .any(|m| self.allowed_modes.contains(&m.to_string()))
    }
}

/// row of a network file. allowed modes are separated by "|".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub link_id: LinkId,
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
    /// meters per second
    pub freespeed: f64,
    pub link_type: Option<String>,
    pub allowed_modes: String,
}

impl TryFrom<LinkRecord> for Link {
    type Error = NetworkError;

    fn try_from(r: LinkRecord) -> Result<Self, Self::Error> {
        if !r.freespeed.is_finite() || r.freespeed < 0.0 {
            return Err(NetworkError::InvalidFreespeed(r.link_id, r.freespeed));
        }
        let allowed_modes = r
            .allowed_modes
            .split('|')
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(String::from)
            .collect();
        Ok(Link {
            id: r.link_id,
            from: Coord {
                x: r.from_x,
                y: r.from_y,
            },
            to: Coord { x: r.to_x, y: r.to_y },
            freespeed: Velocity::new::<meter_per_second>(r.freespeed),
            link_type: r.link_type.filter(|t| !t.is_empty()),
            allowed_modes,
        })
    }
}

impl From<&Link> for LinkRecord {
    fn from(l: &Link) -> Self {
        LinkRecord {
            link_id: l.id.clone(),
            from_x: l.from.x,
            from_y: l.from.y,
            to_x: l.to.x,
            to_y: l.to.y,
            freespeed: l.freespeed.get::<meter_per_second>(),
            link_type: l.link_type.clone(),
            allowed_modes: l
                .allowed_modes
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join("|"),
        }
    }
}
