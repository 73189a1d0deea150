//! # bithash-types
//!
//! Plain value types shared by the `bithash` codec:
//!
//! - **Bounding boxes**: `BoundingBox`, the lat/lng rectangle a hash denotes
//! - **Neighbors**: `Direction` and `NeighborSet`, the eight adjacent hashes
//! - **Policies**: `CoordinatePolicy`, how out-of-domain input is treated
//!
//! All types are serializable with Serde. Bounding boxes convert into
//! `geo::Rect` for use with the rest of the `geo` ecosystem.
//!
//! ## Examples
//!
//! ```rust
//! use bithash_types::bbox::BoundingBox;
//!
//! let bbox = BoundingBox::new(0.0, 90.0, 0.0, 180.0);
//! assert_eq!(bbox.center(), (45.0, 90.0));
//! ```

pub mod bbox;
pub mod config;
pub mod neighbors;

/// Southern edge of the latitude domain.
pub const MIN_LAT: f64 = -90.0;
/// Northern edge of the latitude domain.
pub const MAX_LAT: f64 = 90.0;
/// Western edge of the longitude domain.
pub const MIN_LNG: f64 = -180.0;
/// Eastern edge of the longitude domain.
pub const MAX_LNG: f64 = 180.0;
