use crate::model::network::{Link, Network};
use geo::MultiPolygon;
use rayon::prelude::*;
use roadpricing_core::{model::TravelMode, util::geo_utils};
use uom::si::{f64::Velocity, velocity::meter_per_second};

/// lowers the free speed of matching links to a limit.
#[derive(Debug, Clone)]
pub struct SpeedLimitPolicy {
    pub limit: Velocity,
    pub area: Option<MultiPolygon<f64>>,
    /// only links whose type contains this text
    pub only_on_type: Option<String>,
    /// only links whose type does not contain this text
    pub not_on_type: Option<String>,
}

impl SpeedLimitPolicy {
    pub fn new(limit: Velocity) -> SpeedLimitPolicy {
        SpeedLimitPolicy {
            limit,
            area: None,
            only_on_type: None,
            not_on_type: None,
        }
    }

    /// true if the link type filters, mode and area all select this link.
    /// links without a type are never selected when a type filter is set.
    pub fn applies_to(&self, link: &Link) -> bool {
        let link_type = link.link_type.as_deref();
        let only_ok = match (&self.only_on_type, link_type) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(pat), Some(t)) => t.contains(pat.as_str()),
        };
        let not_ok = match (&self.not_on_type, link_type) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(pat), Some(t)) => !t.contains(pat.as_str()),
        };
        let area_ok = match &self.area {
            None => true,
            Some(area) => geo_utils::area_contains(area, &link.midpoint()),
        };
        only_ok && not_ok && area_ok && link.allows_any(&TravelMode::ALL)
    }

    /// applies the limit to the network.
    ///
    /// # Returns
    ///
    /// the number of links whose free speed was lowered
    pub fn apply(&self, network: &mut Network) -> usize {
        let limit = self.limit;
        let lowered = network
            .links_mut()
            .par_iter_mut()
            .filter(|link| self.applies_to(link))
            .map(|link| {
                if link.freespeed > limit {
                    link.freespeed = limit;
                    1
                } else {
                    0
                }
            })
            .sum::<usize>();
        log::info!(
            "applied speed limit of {} m/s, lowered free speed on {lowered} links",
            limit.get::<meter_per_second>()
        );
        lowered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, Coord};
    use roadpricing_core::model::LinkId;
    use std::collections::BTreeSet;

    fn mps(v: f64) -> Velocity {
        Velocity::new::<meter_per_second>(v)
    }

    fn link(id: &str, x: f64, speed: f64, link_type: Option<&str>, modes: &[&str]) -> Link {
        Link {
            id: LinkId::new(id),
            from: Coord { x, y: 5.0 },
            to: Coord { x: x + 1.0, y: 5.0 },
            freespeed: mps(speed),
            link_type: link_type.map(String::from),
            allowed_modes: modes.iter().map(|m| m.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    fn mock_network() -> Network {
        Network::try_new(vec![
            link("primary", 2.0, 22.2, Some("highway.primary"), &["car"]),
            link("motorway", 4.0, 33.3, Some("highway.motorway"), &["car", "freight"]),
            link("slow", 6.0, 8.3, Some("highway.residential"), &["car"]),
            link("bus_lane", 7.0, 22.2, Some("highway.primary"), &["bus"]),
            link("untyped", 8.0, 22.2, None, &["ride"]),
            link("far", 50.0, 22.2, Some("highway.primary"), &["car"]),
        ])
        .expect("test invariant failed: bad network")
    }

    fn speed(network: &Network, id: &str) -> f64 {
        network
            .get(&LinkId::new(id))
            .expect("test invariant failed: missing link")
            .freespeed
            .get::<meter_per_second>()
    }

    #[test]
    fn test_limit_everywhere() {
        let mut network = mock_network();
        let lowered = SpeedLimitPolicy::new(mps(13.9)).apply(&mut network);
        assert_eq!(lowered, 4);
        assert_eq!(speed(&network, "primary"), 13.9);
        assert_eq!(speed(&network, "slow"), 8.3);
        assert_eq!(speed(&network, "bus_lane"), 22.2);
        assert_eq!(speed(&network, "untyped"), 13.9);
    }

    #[test]
    fn test_type_filters() {
        let mut network = mock_network();
        let policy = SpeedLimitPolicy {
            not_on_type: Some(String::from("motorway")),
            ..SpeedLimitPolicy::new(mps(13.9))
        };
        let lowered = policy.apply(&mut network);
        assert_eq!(lowered, 2);
        assert_eq!(speed(&network, "motorway"), 33.3);
        assert_eq!(speed(&network, "untyped"), 22.2);

        let mut network = mock_network();
        let policy = SpeedLimitPolicy {
            only_on_type: Some(String::from("motorway")),
            ..SpeedLimitPolicy::new(mps(27.8))
        };
        assert_eq!(policy.apply(&mut network), 1);
        assert_eq!(speed(&network, "motorway"), 27.8);
        assert_eq!(speed(&network, "primary"), 22.2);
    }

    #[test]
    fn test_area_filter() {
        let mut network = mock_network();
        let area = MultiPolygon::new(vec![polygon![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0),
            (x: 0.0, y: 10.0),
            (x: 0.0, y: 0.0),
        ]]);
        let policy = SpeedLimitPolicy {
            area: Some(area),
            ..SpeedLimitPolicy::new(mps(13.9))
        };
        assert_eq!(policy.apply(&mut network), 3);
        assert_eq!(speed(&network, "far"), 22.2);
    }
}
