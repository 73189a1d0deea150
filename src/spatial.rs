//! Convenience wrappers taking and returning `geo` types.
//!
//! `geo` points are `(x, y)`, i.e. `(lng, lat)`; the wrappers take care of
//! the axis order so callers never pass latitude as `x`.

use crate::compute::{codec, neighbors};
use crate::error::Result;
use bithash_types::neighbors::Direction;
use geo::{Point, Rect};

/// Encode a `geo::Point` (x = longitude, y = latitude).
///
/// # Examples
///
/// ```rust
/// use bithash::{Point, spatial::encode_point};
///
/// let origin = Point::new(0.0, 0.0);
/// assert_eq!(encode_point(&origin, 2)?, 0b11);
/// # Ok::<(), bithash::BithashError>(())
/// ```
pub fn encode_point(point: &Point, precision: u32) -> Result<u64> {
    codec::encode(point.y(), point.x(), precision)
}

/// Decode a hash into a `geo::Rect`.
///
/// # Examples
///
/// ```rust
/// use bithash::spatial::decode_rect;
///
/// let rect = decode_rect(0b11, 2)?;
/// assert_eq!(rect.min().x, 0.0);
/// assert_eq!(rect.max().y, 90.0);
/// # Ok::<(), bithash::BithashError>(())
/// ```
pub fn decode_rect(hash: u64, precision: u32) -> Result<Rect> {
    codec::decode(hash, precision).map(Rect::from)
}

/// The eight neighbor cells of `hash` as rectangles, in `Direction::ALL` order.
pub fn neighbor_rects(hash: u64, precision: u32) -> Result<Vec<(Direction, Rect)>> {
    let set = neighbors::all_neighbors(hash, precision)?;
    set.iter()
        .map(|(direction, neighbor)| Ok((direction, decode_rect(neighbor, precision)?)))
        .collect()
}
