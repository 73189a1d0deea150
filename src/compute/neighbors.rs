//! The eight hashes adjacent to a box.
//!
//! A cardinal neighbor is found by stepping half a box past the relevant
//! edge from the box center line and re-encoding that point. Diagonals
//! reuse the east or west neighbor's box and step north or south from it,
//! so their longitude span always matches the cardinal neighbor's.
//!
//! Longitude wraps across the antimeridian. Latitude past a pole is moved
//! by half the domain (`lat - 180` north, `lat + 180` south), which keeps a
//! one-box step valid but is not a spherical wrap.

use crate::compute::codec::{decode, decode_unchecked, encode_unchecked};
use crate::compute::validation::{validate_bounds, validate_precision};
use crate::error::Result;
use bithash_types::bbox::BoundingBox;
use bithash_types::neighbors::{Direction, NeighborSet};
use bithash_types::{MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};

/// Hash of the box directly south of `bbox`.
///
/// # Examples
///
/// ```
/// use bithash::compute::neighbors::south;
/// use bithash_types::bbox::BoundingBox;
///
/// let bbox = BoundingBox::new(0.0, 45.0, 0.0, 90.0);
/// assert_eq!(south(&bbox, 4)?, 0b1001);
/// # Ok::<(), bithash::BithashError>(())
/// ```
pub fn south(bbox: &BoundingBox, precision: u32) -> Result<u64> {
    validate_inputs(bbox, precision)?;
    Ok(south_unchecked(bbox, precision))
}

/// Hash of the box directly north of `bbox`.
pub fn north(bbox: &BoundingBox, precision: u32) -> Result<u64> {
    validate_inputs(bbox, precision)?;
    Ok(north_unchecked(bbox, precision))
}

/// Hash of the box directly east of `bbox`, wrapping at the antimeridian.
pub fn east(bbox: &BoundingBox, precision: u32) -> Result<u64> {
    validate_inputs(bbox, precision)?;
    Ok(east_unchecked(bbox, precision))
}

/// Hash of the box directly west of `bbox`, wrapping at the antimeridian.
pub fn west(bbox: &BoundingBox, precision: u32) -> Result<u64> {
    validate_inputs(bbox, precision)?;
    Ok(west_unchecked(bbox, precision))
}

/// Hash of the box adjacent to `bbox` in `direction`.
pub fn neighbor(bbox: &BoundingBox, direction: Direction, precision: u32) -> Result<u64> {
    validate_inputs(bbox, precision)?;
    Ok(neighbor_unchecked(bbox, direction, precision))
}

/// Hash adjacent to `hash` in `direction`, at the same precision.
///
/// # Examples
///
/// ```
/// use bithash::compute::neighbors::neighbor_of;
/// use bithash_types::neighbors::Direction;
///
/// assert_eq!(neighbor_of(0b1100, Direction::NorthEast, 4)?, 0b1111);
/// # Ok::<(), bithash::BithashError>(())
/// ```
pub fn neighbor_of(hash: u64, direction: Direction, precision: u32) -> Result<u64> {
    let bbox = decode(hash, precision)?;
    Ok(neighbor_unchecked(&bbox, direction, precision))
}

/// All eight neighbors of `hash`.
///
/// Decodes the input once, derives the four cardinals from that box, then
/// decodes the east and west results to derive the diagonals.
///
/// # Examples
///
/// ```
/// use bithash::compute::neighbors::all_neighbors;
///
/// let set = all_neighbors(0b1100, 4)?;
/// assert_eq!(set.north, 0b1101);
/// assert_eq!(set.south_west, 0b0011);
/// # Ok::<(), bithash::BithashError>(())
/// ```
pub fn all_neighbors(hash: u64, precision: u32) -> Result<NeighborSet> {
    let bbox = decode(hash, precision)?;

    let north = north_unchecked(&bbox, precision);
    let south = south_unchecked(&bbox, precision);
    let east = east_unchecked(&bbox, precision);
    let west = west_unchecked(&bbox, precision);

    let east_box = decode_unchecked(east, precision);
    let west_box = decode_unchecked(west, precision);

    Ok(NeighborSet {
        north,
        south,
        east,
        west,
        north_east: north_unchecked(&east_box, precision),
        north_west: north_unchecked(&west_box, precision),
        south_east: south_unchecked(&east_box, precision),
        south_west: south_unchecked(&west_box, precision),
    })
}

fn validate_inputs(bbox: &BoundingBox, precision: u32) -> Result<()> {
    validate_precision(precision)?;
    validate_bounds(bbox)
}

fn neighbor_unchecked(bbox: &BoundingBox, direction: Direction, precision: u32) -> u64 {
    match direction {
        Direction::North => north_unchecked(bbox, precision),
        Direction::South => south_unchecked(bbox, precision),
        Direction::East => east_unchecked(bbox, precision),
        Direction::West => west_unchecked(bbox, precision),
        Direction::NorthEast => {
            let east_box = decode_unchecked(east_unchecked(bbox, precision), precision);
            north_unchecked(&east_box, precision)
        }
        Direction::NorthWest => {
            let west_box = decode_unchecked(west_unchecked(bbox, precision), precision);
            north_unchecked(&west_box, precision)
        }
        Direction::SouthEast => {
            let east_box = decode_unchecked(east_unchecked(bbox, precision), precision);
            south_unchecked(&east_box, precision)
        }
        Direction::SouthWest => {
            let west_box = decode_unchecked(west_unchecked(bbox, precision), precision);
            south_unchecked(&west_box, precision)
        }
    }
}

fn south_unchecked(bbox: &BoundingBox, precision: u32) -> u64 {
    let (_, lng) = bbox.center();
    let mut lat = bbox.min_lat - bbox.height() / 2.0;

    if lat < MIN_LAT {
        let wrapped = -(MIN_LAT + (MIN_LAT - lat));
        log::debug!("South neighbor latitude {} wrapped to {}", lat, wrapped);
        lat = wrapped;
    }

    encode_unchecked(lat, lng, precision)
}

fn north_unchecked(bbox: &BoundingBox, precision: u32) -> u64 {
    let (_, lng) = bbox.center();
    let mut lat = bbox.max_lat + bbox.height() / 2.0;

    if lat > MAX_LAT {
        let wrapped = -(MAX_LAT - (lat - MAX_LAT));
        log::debug!("North neighbor latitude {} wrapped to {}", lat, wrapped);
        lat = wrapped;
    }

    encode_unchecked(lat, lng, precision)
}

fn east_unchecked(bbox: &BoundingBox, precision: u32) -> u64 {
    let (lat, _) = bbox.center();
    let mut lng = bbox.max_lng + bbox.width() / 2.0;

    if lng > MAX_LNG {
        let wrapped = (MIN_LNG + (lng - MAX_LNG)).max(MIN_LNG);
        log::debug!("East neighbor longitude {} wrapped to {}", lng, wrapped);
        lng = wrapped;
    }

    encode_unchecked(lat, lng, precision)
}

fn west_unchecked(bbox: &BoundingBox, precision: u32) -> u64 {
    let (lat, _) = bbox.center();
    let mut lng = bbox.min_lng - bbox.width() / 2.0;

    if lng < MIN_LNG {
        // Overshoots past 180; the clamp still encodes into the easternmost column.
        let wrapped = (MAX_LNG - (lng + MAX_LNG)).min(MAX_LNG);
        log::debug!("West neighbor longitude {} wrapped to {}", lng, wrapped);
        lng = wrapped;
    }

    encode_unchecked(lat, lng, precision)
}
