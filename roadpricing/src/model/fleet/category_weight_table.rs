use super::{FleetError, VehicleCategory};
use roadpricing_core::model::ModeGroup;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// relative weight of a category within a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CategoryWeight {
    pub category: VehicleCategory,
    pub weight: f64,
}

impl CategoryWeight {
    pub fn new(category: VehicleCategory, weight: f64) -> CategoryWeight {
        CategoryWeight { category, weight }
    }
}

/// passenger car stock shares by powertrain, KBA 2023 annual balance. plug-in
/// hybrid shares are split across petrol and diesel variants.
pub const KBA_2023_SHARES: [(VehicleCategory, f64); 7] = [
    (VehicleCategory::Petrol, 0.626769717),
    (VehicleCategory::Diesel, 0.296138944),
    (VehicleCategory::Lpg, 0.006704345),
    (VehicleCategory::Cng, 0.001653867),
    (VehicleCategory::HybridPetrol, 0.005743607878685),
    (VehicleCategory::HybridDiesel, 0.00014232617104426),
    (VehicleCategory::Electric, 0.020067541),
];

/// the weighted category distribution of one mode group. entries keep the
/// order they were configured in; sampling walks them in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeightTable {
    mode_group: ModeGroup,
    entries: Vec<CategoryWeight>,
    total_weight: f64,
}

impl CategoryWeightTable {
    /// validates and builds a weight table.
    ///
    /// # Arguments
    ///
    /// * `mode_group` - group this distribution applies to
    /// * `entries`    - categories with their weights, in sampling order
    ///
    /// # Returns
    ///
    /// * the table, or a configuration error if it is empty, repeats a category,
    ///   contains a negative or non-finite weight, or has no positive weight
    pub fn try_new(
        mode_group: ModeGroup,
        entries: Vec<CategoryWeight>,
    ) -> Result<CategoryWeightTable, FleetError> {
        if entries.is_empty() {
            return Err(FleetError::ConfigurationError(format!(
                "weight table for mode group '{mode_group}' is empty"
            )));
        }
        let mut seen = HashSet::new();
        for entry in entries.iter() {
            if !seen.insert(entry.category) {
                return Err(FleetError::ConfigurationError(format!(
                    "weight table for mode group '{mode_group}' lists category '{}' more than once",
                    entry.category
                )));
            }
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(FleetError::ConfigurationError(format!(
                    "weight table for mode group '{mode_group}' has invalid weight {} for category '{}'",
                    entry.weight, entry.category
                )));
            }
        }
        let total_weight: f64 = entries.iter().map(|e| e.weight).sum();
        if total_weight <= 0.0 {
            return Err(FleetError::ConfigurationError(format!(
                "weight table for mode group '{mode_group}' has total weight {total_weight}, must be positive"
            )));
        }
        Ok(CategoryWeightTable {
            mode_group,
            entries,
            total_weight,
        })
    }

    /// the German passenger car stock distribution. freight uses the same shares.
    pub fn kba_2023(mode_group: ModeGroup) -> CategoryWeightTable {
        let entries = KBA_2023_SHARES
            .iter()
            .map(|(c, w)| CategoryWeight::new(*c, *w))
            .collect::<Vec<_>>();
        let total_weight = entries.iter().map(|e| e.weight).sum();
        CategoryWeightTable {
            mode_group,
            entries,
            total_weight,
        }
    }

    pub fn mode_group(&self) -> ModeGroup {
        self.mode_group
    }

    pub fn entries(&self) -> &[CategoryWeight] {
        &self.entries
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// normalized probability of drawing a category, if it is in the table.
    pub fn probability(&self, category: &VehicleCategory) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| &e.category == category)
            .map(|e| e.weight / self.total_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_tables() {
        let empty = CategoryWeightTable::try_new(ModeGroup::Passenger, vec![]);
        assert!(matches!(empty, Err(FleetError::ConfigurationError(_))));

        let all_zero = CategoryWeightTable::try_new(
            ModeGroup::Passenger,
            vec![
                CategoryWeight::new(VehicleCategory::Petrol, 0.0),
                CategoryWeight::new(VehicleCategory::Diesel, 0.0),
            ],
        );
        assert!(matches!(all_zero, Err(FleetError::ConfigurationError(_))));

        let negative = CategoryWeightTable::try_new(
            ModeGroup::Freight,
            vec![
                CategoryWeight::new(VehicleCategory::Petrol, 1.0),
                CategoryWeight::new(VehicleCategory::Diesel, -0.5),
            ],
        );
        assert!(matches!(negative, Err(FleetError::ConfigurationError(_))));

        let repeated = CategoryWeightTable::try_new(
            ModeGroup::Freight,
            vec![
                CategoryWeight::new(VehicleCategory::Cng, 1.0),
                CategoryWeight::new(VehicleCategory::Cng, 1.0),
            ],
        );
        assert!(matches!(repeated, Err(FleetError::ConfigurationError(_))));
    }

    #[test]
    fn test_zero_weights_are_allowed_alongside_positive() {
        let table = CategoryWeightTable::try_new(
            ModeGroup::Passenger,
            vec![
                CategoryWeight::new(VehicleCategory::Electric, 0.0),
                CategoryWeight::new(VehicleCategory::Diesel, 3.0),
                CategoryWeight::new(VehicleCategory::Petrol, 1.0),
            ],
        )
        .expect("test invariant failed: valid table rejected");
        assert_eq!(table.total_weight(), 4.0);
        assert_eq!(table.probability(&VehicleCategory::Diesel), Some(0.75));
        assert_eq!(table.probability(&VehicleCategory::Electric), Some(0.0));
        assert_eq!(table.probability(&VehicleCategory::Lpg), None);
    }

    #[test]
    fn test_kba_table_keeps_configured_order() {
        let table = CategoryWeightTable::kba_2023(ModeGroup::Passenger);
        let order = table.entries().iter().map(|e| e.category).collect::<Vec<_>>();
        assert_eq!(order, VehicleCategory::ALL.to_vec());
        assert!((table.total_weight() - 0.957220348).abs() < 1e-6);
    }
}
