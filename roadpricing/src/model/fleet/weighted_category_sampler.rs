use super::{CategoryWeightTable, FleetError, VehicleCategory};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// draws vehicle categories from weight tables using a seeded ChaCha8 stream,
/// so identical seeds reproduce identical fleets on every platform.
#[derive(Debug, Clone)]
pub struct WeightedCategorySampler {
    seed: u64,
    rng: ChaCha8Rng,
}

impl WeightedCategorySampler {
    pub fn from_seed(seed: u64) -> WeightedCategorySampler {
        WeightedCategorySampler {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// a sampler over an independent stream of this sampler's seed. streams
    /// do not overlap, so draws on one never affect draws on another.
    pub fn stream(&self, stream: u64) -> WeightedCategorySampler {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(stream);
        WeightedCategorySampler {
            seed: self.seed,
            rng,
        }
    }

    /// draws one category.
    ///
    /// # Arguments
    ///
    /// * `table` - distribution to draw from
    ///
    /// # Returns
    ///
    /// * a category listed in the table with a positive weight
    pub fn sample(&mut self, table: &CategoryWeightTable) -> Result<VehicleCategory, FleetError> {
        let total = table.total_weight();
        if table.is_empty() || total <= 0.0 || !total.is_finite() {
            return Err(FleetError::ConfigurationError(format!(
                "cannot sample from weight table for mode group '{}' with {} entries and total weight {}",
                table.mode_group(),
                table.len(),
                total
            )));
        }
        let u = self.rng.random::<f64>() * total;
        let mut cumulative = 0.0;
        for entry in table.entries() {
            cumulative += entry.weight;
            if u < cumulative {
                return Ok(entry.category);
            }
        }
        // rounding can leave u at the very top of the range
        table
            .entries()
            .iter()
            .rev()
            .find(|e| e.weight > 0.0)
            .map(|e| e.category)
            .ok_or_else(|| {
                FleetError::InternalError(format!(
                    "random value {u} for choosing a vehicle category exceeded total weight {total}"
                ))
            })
    }
}
