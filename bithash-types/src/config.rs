use serde::{Deserialize, Serialize};

/// How encoding treats coordinates outside `[-90, 90] x [-180, 180]`.
///
/// Non-finite coordinates are rejected under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoordinatePolicy {
    /// Return an out-of-domain error.
    #[default]
    Reject,
    /// Clamp into the domain and log a warning.
    Clamp,
}
