//! Bit-interleaved geohash encoding with neighbor lookup.
//!
//! Points are encoded into a `u64` whose low `precision` bits alternate
//! longitude and latitude bisections, longitude first. Decoding yields the
//! bounding box a hash denotes, and the eight adjacent cells can be found
//! with wraparound at the antimeridian and past the poles.
//!
//! ```rust
//! use bithash::{all_neighbors, decode, encode};
//!
//! let hash = encode(40.7128, -74.0060, 52)?;
//! let bbox = decode(hash, 52)?;
//! assert!(bbox.contains(40.7128, -74.0060));
//!
//! let around = all_neighbors(hash, 52)?;
//! assert!(!around.contains(hash));
//! # Ok::<(), bithash::BithashError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod spatial;

pub use builder::{GeoBitHash, GeoBitHashBuilder};
pub use config::{Config, CoordinatePolicy, DEFAULT_PRECISION};
pub use error::{Axis, BithashError, Result};

pub use compute::codec::{decode, decode_inferred, encode, encode_with_policy, infer_precision};
pub use compute::neighbors::{all_neighbors, east, neighbor, neighbor_of, north, south, west};
pub use compute::validation::MAX_PRECISION;

pub use bithash_types::bbox::BoundingBox;
pub use bithash_types::neighbors::{Direction, NeighborSet};
pub use bithash_types::{MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{BithashError, Config, CoordinatePolicy, GeoBitHash, Result};

    pub use crate::{BoundingBox, Direction, NeighborSet};

    pub use crate::{all_neighbors, decode, encode};

    pub use geo::{Point, Rect};
}
