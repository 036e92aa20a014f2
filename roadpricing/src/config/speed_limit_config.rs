use super::ConfigError;
use crate::model::speed_limit::SpeedLimitPolicy;
use geo::MultiPolygon;
use serde::{Deserialize, Serialize};
use uom::si::f64::Velocity;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SpeedLimitConfig {
    /// meters per second
    pub limit: Velocity,
    #[serde(default)]
    pub only_on_type: Option<String>,
    #[serde(default)]
    pub not_on_type: Option<String>,
}

impl SpeedLimitConfig {
    pub fn build_policy(
        &self,
        area: Option<MultiPolygon<f64>>,
    ) -> Result<SpeedLimitPolicy, ConfigError> {
        if !self.limit.value.is_finite() || self.limit.value <= 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "speed limit must be positive, found {} m/s",
                self.limit.value
            )));
        }
        Ok(SpeedLimitPolicy {
            limit: self.limit,
            area,
            only_on_type: self.only_on_type.clone(),
            not_on_type: self.not_on_type.clone(),
        })
    }
}
