use crate::model::network::Network;
use geo::MultiPolygon;
use itertools::Itertools;
use rayon::prelude::*;
use roadpricing_core::{model::LinkId, util::geo_utils};
use std::collections::HashSet;
use uom::si::{f64::Velocity, velocity::meter_per_second};

/// finds the links whose midpoint lies in the interior of the area. links on
/// the area boundary are outside. when a speed threshold is given, links with
/// a free speed above it are excluded.
///
/// # Arguments
///
/// * `network` - links to test
/// * `area` - toll area
/// * `speed_threshold` - optional upper bound on link free speed
///
/// # Returns
///
/// the ids of the links inside the area
pub fn links_inside(
    network: &Network,
    area: &MultiPolygon<f64>,
    speed_threshold: Option<Velocity>,
) -> HashSet<LinkId> {
    network
        .links()
        .par_iter()
        .filter(|link| match speed_threshold {
            Some(threshold) => link.freespeed <= threshold,
            None => true,
        })
        .filter(|link| geo_utils::area_contains(area, &link.midpoint()))
        .map(|link| link.id.clone())
        .collect()
}

/// the tolled area and the links it covers.
#[derive(Debug, Clone)]
pub struct TollZone {
    area: MultiPolygon<f64>,
    tolled_links: HashSet<LinkId>,
}

impl TollZone {
    pub fn new(
        area: MultiPolygon<f64>,
        network: &Network,
        speed_threshold: Option<Velocity>,
    ) -> TollZone {
        log::info!("identifying links inside the toll area");
        let tolled_links = links_inside(network, &area, speed_threshold);
        match speed_threshold {
            Some(t) => log::info!(
                "found {} of {} links inside the toll area with free speed at most {} m/s",
                tolled_links.len(),
                network.len(),
                t.get::<meter_per_second>()
            ),
            None => log::info!(
                "found {} of {} links inside the toll area",
                tolled_links.len(),
                network.len()
            ),
        }
        if tolled_links.is_empty() {
            log::warn!("toll area contains no links, no tolls will be charged");
        }
        TollZone { area, tolled_links }
    }

    pub fn area(&self) -> &MultiPolygon<f64> {
        &self.area
    }

    pub fn is_tolled(&self, link_id: &LinkId) -> bool {
        self.tolled_links.contains(link_id)
    }

    pub fn len(&self) -> usize {
        self.tolled_links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tolled_links.is_empty()
    }

    /// tolled link ids in sorted order.
    pub fn sorted_link_ids(&self) -> Vec<&LinkId> {
        self.tolled_links.iter().sorted().collect_vec()
    }
}
