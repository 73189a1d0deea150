//! Configured codec facade and its builder.
//!
//! `GeoBitHash` carries a validated [`Config`] and forwards to the free
//! functions in [`crate::compute`], filling in the default precision and
//! coordinate policy. It holds no mutable state and is `Send + Sync`.

use crate::compute::{codec, neighbors};
use crate::config::{Config, CoordinatePolicy};
use crate::error::{BithashError, Result};
use bithash_types::bbox::BoundingBox;
use bithash_types::neighbors::{Direction, NeighborSet};
use std::path::Path;

/// Codec with a fixed default precision and coordinate policy.
///
/// ```rust
/// use bithash::GeoBitHash;
///
/// let codec = GeoBitHash::default();
/// let hash = codec.encode(40.7128, -74.0060)?;
/// let bbox = codec.decode(hash)?;
/// assert!(bbox.contains(40.7128, -74.0060));
/// # Ok::<(), bithash::BithashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeoBitHash {
    config: Config,
}

impl GeoBitHash {
    pub fn new(config: Config) -> Result<Self> {
        config.validate().map_err(BithashError::Config)?;
        Ok(Self { config })
    }

    pub fn builder() -> GeoBitHashBuilder {
        GeoBitHashBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn precision(&self) -> u32 {
        self.config.default_precision
    }

    pub fn encode(&self, lat: f64, lng: f64) -> Result<u64> {
        self.encode_at(lat, lng, self.precision())
    }

    pub fn encode_at(&self, lat: f64, lng: f64, precision: u32) -> Result<u64> {
        codec::encode_with_policy(lat, lng, precision, self.config.coordinate_policy)
    }

    pub fn decode(&self, hash: u64) -> Result<BoundingBox> {
        codec::decode(hash, self.precision())
    }

    pub fn decode_at(&self, hash: u64, precision: u32) -> Result<BoundingBox> {
        codec::decode(hash, precision)
    }

    pub fn neighbor(&self, hash: u64, direction: Direction) -> Result<u64> {
        neighbors::neighbor_of(hash, direction, self.precision())
    }

    pub fn neighbors(&self, hash: u64) -> Result<NeighborSet> {
        neighbors::all_neighbors(hash, self.precision())
    }

    pub fn neighbors_at(&self, hash: u64, precision: u32) -> Result<NeighborSet> {
        neighbors::all_neighbors(hash, precision)
    }
}

/// Builder for [`GeoBitHash`].
#[derive(Debug, Default)]
pub struct GeoBitHashBuilder {
    config: Config,
}

impl GeoBitHashBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.config = self.config.with_default_precision(precision);
        self
    }

    pub fn coordinate_policy(mut self, policy: CoordinatePolicy) -> Self {
        self.config = self.config.with_coordinate_policy(policy);
        self
    }

    /// Load configuration from a JSON file, or TOML when the `toml` feature
    /// is enabled and the file ends in `.toml`.
    pub fn config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BithashError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        #[cfg(feature = "toml")]
        if path.extension().is_some_and(|ext| ext == "toml") {
            self.config =
                Config::from_toml(&contents).map_err(|e| BithashError::Config(e.to_string()))?;
            return Ok(self);
        }

        self.config =
            Config::from_json(&contents).map_err(|e| BithashError::Config(e.to_string()))?;
        Ok(self)
    }

    pub fn build(self) -> Result<GeoBitHash> {
        GeoBitHash::new(self.config)
    }
}
