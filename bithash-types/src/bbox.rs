use crate::{MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};
use geo::Rect;
use serde::{Deserialize, Serialize};

/// The rectangular lat/lng region denoted by a hash at a given precision.
///
/// Boxes are produced by decoding; they are never stored alongside the hash.
/// A decoded box always satisfies `min_lat <= max_lat`, `min_lng <= max_lng`
/// and lies inside `[-90, 90] x [-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge
    pub min_lat: f64,
    /// Northern edge
    pub max_lat: f64,
    /// Western edge
    pub min_lng: f64,
    /// Eastern edge
    pub max_lng: f64,
}

impl BoundingBox {
    /// Create a bounding box from its four edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use bithash_types::bbox::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(0.0, 45.0, 0.0, 90.0);
    /// assert_eq!(bbox.height(), 45.0);
    /// assert_eq!(bbox.width(), 90.0);
    /// ```
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// The whole encodable domain, the starting box of every bisection.
    pub const fn domain() -> Self {
        Self {
            min_lat: MIN_LAT,
            max_lat: MAX_LAT,
            min_lng: MIN_LNG,
            max_lng: MAX_LNG,
        }
    }

    /// Center as `(lat, lng)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Check if a point lies inside the box, edges included.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }

    /// Check if this box shares any area or edge with another.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.max_lng < other.min_lng
            || self.min_lng > other.max_lng
            || self.max_lat < other.min_lat
            || self.min_lat > other.max_lat)
    }

    /// Whether the box touches the north or south pole.
    pub fn touches_pole(&self) -> bool {
        self.max_lat >= MAX_LAT || self.min_lat <= MIN_LAT
    }

    /// Whether the box touches the antimeridian on either side.
    pub fn touches_antimeridian(&self) -> bool {
        self.max_lng >= MAX_LNG || self.min_lng <= MIN_LNG
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        Rect::new(
            geo::coord! { x: bbox.min_lng, y: bbox.min_lat },
            geo::coord! { x: bbox.max_lng, y: bbox.max_lat },
        )
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::new(rect.min().y, rect.max().y, rect.min().x, rect.max().x)
    }
}
