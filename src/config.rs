//! Codec configuration.
//!
//! The lat/lng domain is fixed; the only tunables are the default bit
//! precision and how out-of-domain coordinates are treated.
use crate::compute::validation::validate_precision;
use serde::de::Error;

pub use bithash_types::config::CoordinatePolicy;

/// Precision used when none is given: 26 bits per axis.
pub const DEFAULT_PRECISION: u32 = 52;

/// Codec configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "Config::default_precision")]
    pub default_precision: u32,

    #[serde(default)]
    pub coordinate_policy: CoordinatePolicy,
}

impl Config {
    const fn default_precision() -> u32 {
        DEFAULT_PRECISION
    }

    pub fn with_default_precision(mut self, precision: u32) -> Self {
        self.default_precision = precision;
        self
    }

    pub fn with_coordinate_policy(mut self, policy: CoordinatePolicy) -> Self {
        self.coordinate_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_precision(self.default_precision).map_err(|e| e.to_string())?;

        if self.default_precision % 2 != 0 {
            log::warn!(
                "Default precision {} is odd; latitude gets one bit fewer than longitude",
                self.default_precision
            );
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_precision: Self::default_precision(),
            coordinate_policy: CoordinatePolicy::default(),
        }
    }
}
