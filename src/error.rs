//! Error types for encoding, decoding and neighbor lookups.

use std::fmt;
use thiserror::Error;

/// Coordinate axis named in out-of-domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

#[derive(Debug, Error)]
pub enum BithashError {
    /// Precision outside `1..=64`.
    #[error("invalid precision {0}: must be between 1 and 64 bits")]
    InvalidPrecision(u32),

    /// Coordinate outside the fixed lat/lng domain.
    #[error("{axis} out of range: {value}")]
    OutOfDomain { axis: Axis, value: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BithashError>;
