use super::{ConfigError, FleetConfig, SpeedLimitConfig, TollConfig};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// prefix of environment variables overriding configuration values, such as
/// `ROADPRICING__SEED=42` or `ROADPRICING__FLEET__SAMPLING=per_agent_stream`.
pub const ENV_PREFIX: &str = "ROADPRICING";

/// configuration of a road pricing scenario.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    /// seed of the vehicle category generator
    pub seed: u64,
    pub fleet: FleetConfig,
    pub toll: TollConfig,
    pub speed_limit: Option<SpeedLimitConfig>,
    /// replace existing output files
    pub overwrite: bool,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 4711,
            fleet: FleetConfig::default(),
            toll: TollConfig::default(),
            speed_limit: None,
            overwrite: false,
        }
    }
}

impl ScenarioConfig {
    /// loads the configuration from an optional file, then applies
    /// environment overrides. values missing from both take their defaults.
    pub fn load(filepath: Option<&String>) -> Result<ScenarioConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(f) = filepath {
            builder = builder.add_source(File::new(f, file_format(f)?));
        }
        let source = filepath.cloned().unwrap_or_else(|| String::from("defaults"));
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::ConfigReadError {
                msg: format!("failed reading '{source}'"),
                source: e,
            })?;
        let scenario: ScenarioConfig =
            config
                .try_deserialize()
                .map_err(|e| ConfigError::ConfigReadError {
                    msg: format!("failed decoding '{source}'"),
                    source: e,
                })?;
        log::info!(
            "loaded scenario configuration from {source} with seed {}",
            scenario.seed
        );
        Ok(scenario)
    }

    pub fn speed_limit(&self) -> Result<&SpeedLimitConfig, ConfigError> {
        self.speed_limit
            .as_ref()
            .ok_or_else(|| ConfigError::MissingSection(String::from("speed_limit")))
    }
}

impl TryFrom<&String> for ScenarioConfig {
    type Error = ConfigError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        ScenarioConfig::load(Some(f))
    }
}

fn file_format(f: &str) -> Result<FileFormat, ConfigError> {
    if f.ends_with(".toml") {
        Ok(FileFormat::Toml)
    } else if f.ends_with(".json") {
        Ok(FileFormat::Json)
    } else {
        Err(ConfigError::UnsupportedFileType(f.to_string()))
    }
}
