use super::{
    LinkTraversal, TollChargeRecord, TollError, TollScheme, TollZone, VehicleTypeTollFactor,
};
use kdam::tqdm;
use roadpricing_core::model::{AgentId, LinkId, SimTime, VehicleId};

/// prices a single link entry.
pub trait TollPricing: Send + Sync {
    fn charge(
        &self,
        agent_id: &AgentId,
        vehicle_id: &VehicleId,
        link_id: &LinkId,
        time: SimTime,
    ) -> Result<f64, TollError>;
}

/// a cordon toll: entering a link inside the zone during a toll window costs
/// the window's base amount scaled by the vehicle's category factor.
#[derive(Debug)]
pub struct TollPricingPolicy {
    zone: TollZone,
    scheme: TollScheme,
    factor: VehicleTypeTollFactor,
}

impl TollPricingPolicy {
    pub fn new(
        zone: TollZone,
        scheme: TollScheme,
        factor: VehicleTypeTollFactor,
    ) -> TollPricingPolicy {
        TollPricingPolicy {
            zone,
            scheme,
            factor,
        }
    }

    pub fn zone(&self) -> &TollZone {
        &self.zone
    }

    /// prices a sequence of link traversals in order. each entry is charged
    /// independently.
    pub fn charge_traversals(
        &self,
        traversals: Vec<LinkTraversal>,
    ) -> Result<Vec<TollChargeRecord>, TollError> {
        let mut charges = Vec::with_capacity(traversals.len());
        let mut total = 0.0;
        let mut n_charged = 0;
        for t in tqdm!(traversals.into_iter(), desc = "price link traversals") {
            let amount = self.charge(
                &t.agent_id,
                &t.vehicle_id,
                &t.link_id,
                SimTime::from_seconds(t.time),
            )?;
            if amount > 0.0 {
                n_charged += 1;
                total += amount;
            }
            charges.push(TollChargeRecord::new(t, amount));
        }
        eprintln!();
        log::info!(
            "charged {n_charged} of {} link traversals, total amount {total}",
            charges.len()
        );
        Ok(charges)
    }
}

impl TollPricing for TollPricingPolicy {
    fn charge(
        &self,
        agent_id: &AgentId,
        vehicle_id: &VehicleId,
        link_id: &LinkId,
        time: SimTime,
    ) -> Result<f64, TollError> {
        if !self.zone.is_tolled(link_id) {
            return Ok(0.0);
        }
        if !time.seconds().is_finite() {
            log::warn!(
                "agent '{agent_id}' entered link '{link_id}' with vehicle '{vehicle_id}' at invalid time {}, charging 0",
                time.seconds()
            );
            return Ok(0.0);
        }
        let base_amount = match self.scheme.amount_at(time.seconds()) {
            Some(amount) => amount,
            None => return Ok(0.0),
        };
        let vehicle_type =
            self.factor
                .resolve(vehicle_id)
                .ok_or_else(|| TollError::UnresolvedVehicleError {
                    vehicle_id: vehicle_id.clone(),
                    link_id: link_id.clone(),
                    time,
                })?;
        let factor = self.factor.factor(vehicle_type);
        log::debug!(
            "agent '{agent_id}' vehicle '{vehicle_id}' of type '{}' entered link '{link_id}' at {time}: {base_amount} x {factor}",
            vehicle_type.id
        );
        Ok(base_amount * factor)
    }
}
