use crate::model::toll::{TollError, TollFactor, TollFactorTable, TollScheme, TollWindow};
use serde::{Deserialize, Serialize};
use uom::si::f64::Velocity;

/// toll windows, category factors and the optional zone speed threshold.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct TollConfig {
    pub windows: Vec<TollWindow>,
    pub factors: Vec<TollFactor>,
    /// links faster than this (m/s) are never tolled
    pub speed_threshold: Option<Velocity>,
}

impl Default for TollConfig {
    fn default() -> Self {
        Self {
            windows: vec![],
            factors: TollFactorTable::default().factors().to_vec(),
            speed_threshold: None,
        }
    }
}

impl TollConfig {
    pub fn build_scheme(&self) -> Result<TollScheme, TollError> {
        TollScheme::try_new(self.windows.clone())
    }

    pub fn build_factors(&self) -> Result<TollFactorTable, TollError> {
        TollFactorTable::try_new(self.factors.clone())
    }

    pub fn validate_speed_threshold(&self) -> Result<Option<Velocity>, TollError> {
        match self.speed_threshold {
            Some(t) if !t.value.is_finite() || t.value < 0.0 => {
                Err(TollError::ConfigurationError(format!(
                    "speed threshold must be finite and non-negative, found {} m/s",
                    t.value
                )))
            }
            other => Ok(other),
        }
    }
}
