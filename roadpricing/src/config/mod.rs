mod config_error;
mod fleet_config;
mod scenario_config;
mod speed_limit_config;
mod toll_config;

pub use config_error::ConfigError;
pub use fleet_config::FleetConfig;
pub use scenario_config::{ScenarioConfig, ENV_PREFIX};
pub use speed_limit_config::SpeedLimitConfig;
pub use toll_config::TollConfig;
