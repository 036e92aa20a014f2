use crate::model::fleet::{
    CategoryWeight, CategoryWeightTable, FleetComposer, FleetError, SamplingStrategy,
    KBA_2023_SHARES,
};
use roadpricing_core::model::{ModeGroup, TravelMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// which travel modes receive vehicles and how their categories are drawn.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct FleetConfig {
    pub modes: Vec<TravelMode>,
    pub sampling: SamplingStrategy,
    pub passenger_weights: Vec<CategoryWeight>,
    pub freight_weights: Vec<CategoryWeight>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        let kba = KBA_2023_SHARES
            .iter()
            .map(|(c, w)| CategoryWeight::new(*c, *w))
            .collect::<Vec<_>>();
        Self {
            modes: TravelMode::ALL.to_vec(),
            sampling: SamplingStrategy::default(),
            passenger_weights: kba.clone(),
            freight_weights: kba,
        }
    }
}

impl FleetConfig {
    pub fn weights(&self, mode_group: &ModeGroup) -> &[CategoryWeight] {
        match mode_group {
            ModeGroup::Passenger => &self.passenger_weights,
            ModeGroup::Freight => &self.freight_weights,
        }
    }

    /// the mode groups of the configured modes.
    pub fn mode_groups(&self) -> BTreeSet<ModeGroup> {
        self.modes.iter().map(|m| m.mode_group()).collect()
    }

    /// validates the weight tables of the configured mode groups and builds
    /// the composer. tables of unused groups are not validated.
    pub fn build_composer(&self) -> Result<FleetComposer, FleetError> {
        let tables = self
            .mode_groups()
            .into_iter()
            .map(|group| CategoryWeightTable::try_new(group, self.weights(&group).to_vec()))
            .collect::<Result<Vec<_>, _>>()?;
        FleetComposer::new(&self.modes, tables, self.sampling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fleet::VehicleCategory;

    #[test]
    fn test_default_composer() {
        let composer = FleetConfig::default()
            .build_composer()
            .expect("default fleet configuration rejected");
        assert_eq!(composer.strategy(), SamplingStrategy::Sequential);
    }

    #[test]
    fn test_unused_group_not_validated() {
        let conf = FleetConfig {
            modes: vec![TravelMode::Car],
            freight_weights: vec![],
            ..Default::default()
        };
        assert!(conf.build_composer().is_ok());
    }

    #[test]
    fn test_zero_weights_rejected() {
        let conf = FleetConfig {
            passenger_weights: vec![CategoryWeight::new(VehicleCategory::Petrol, 0.0)],
            ..Default::default()
        };
        assert!(matches!(
            conf.build_composer(),
            Err(FleetError::ConfigurationError(_))
        ));
    }
}
