//! Bidirectional mapping between points and bit-interleaved hashes.
//!
//! A hash of precision `p` holds `p` meaningful low-order bits. Bit `p - 1`
//! (the first one produced) splits longitude, the next splits latitude, and
//! the two axes alternate from there. Longitude therefore receives
//! `ceil(p / 2)` bits and latitude `floor(p / 2)`.

use crate::compute::validation::{validate_coordinate, validate_finite, validate_precision};
use crate::error::{BithashError, Result};
use bithash_types::bbox::BoundingBox;
use bithash_types::config::CoordinatePolicy;
use bithash_types::{MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};

/// Encode a point into a hash of `precision` bits.
///
/// Coordinates outside the domain are rejected; see [`encode_with_policy`]
/// for clamping.
///
/// # Examples
///
/// ```
/// use bithash::compute::codec::encode;
///
/// assert_eq!(encode(0.0, 0.0, 2)?, 0b11);
/// assert_eq!(encode(10.0, 10.0, 4)?, 0b1100);
/// # Ok::<(), bithash::BithashError>(())
/// ```
pub fn encode(lat: f64, lng: f64, precision: u32) -> Result<u64> {
    encode_with_policy(lat, lng, precision, CoordinatePolicy::Reject)
}

/// Encode a point, treating out-of-domain coordinates per `policy`.
pub fn encode_with_policy(
    lat: f64,
    lng: f64,
    precision: u32,
    policy: CoordinatePolicy,
) -> Result<u64> {
    validate_precision(precision)?;

    let (lat, lng) = match policy {
        CoordinatePolicy::Reject => {
            validate_coordinate(lat, lng)?;
            (lat, lng)
        }
        CoordinatePolicy::Clamp => {
            validate_finite(lat, lng)?;
            let clamped = (lat.clamp(MIN_LAT, MAX_LAT), lng.clamp(MIN_LNG, MAX_LNG));
            if clamped != (lat, lng) {
                log::warn!(
                    "Clamping out-of-domain coordinate ({}, {}) to ({}, {})",
                    lat,
                    lng,
                    clamped.0,
                    clamped.1
                );
            }
            clamped
        }
    };

    Ok(encode_unchecked(lat, lng, precision))
}

/// Bisection core. `precision` must already be validated.
pub(crate) fn encode_unchecked(lat: f64, lng: f64, precision: u32) -> u64 {
    let mut bbox = BoundingBox::domain();
    let mut hash = 0u64;

    for step in 0..precision {
        hash <<= 1;
        if step % 2 == 0 {
            let mid = (bbox.min_lng + bbox.max_lng) / 2.0;
            if lng < mid {
                bbox.max_lng = mid;
            } else {
                hash |= 1;
                bbox.min_lng = mid;
            }
        } else {
            let mid = (bbox.min_lat + bbox.max_lat) / 2.0;
            if lat < mid {
                bbox.max_lat = mid;
            } else {
                hash |= 1;
                bbox.min_lat = mid;
            }
        }
    }

    hash
}

/// Decode a hash of `precision` bits into the box it denotes.
///
/// Bits above `precision` must be zero.
///
/// # Examples
///
/// ```
/// use bithash::compute::codec::decode;
/// use bithash_types::bbox::BoundingBox;
///
/// let bbox = decode(3, 2)?;
/// assert_eq!(bbox, BoundingBox::new(0.0, 90.0, 0.0, 180.0));
/// # Ok::<(), bithash::BithashError>(())
/// ```
pub fn decode(hash: u64, precision: u32) -> Result<BoundingBox> {
    validate_precision(precision)?;

    if precision < u64::BITS && hash >> precision != 0 {
        return Err(BithashError::InvalidInput(format!(
            "hash {:#x} has bits set above precision {}",
            hash, precision
        )));
    }

    Ok(decode_unchecked(hash, precision))
}

pub(crate) fn decode_unchecked(hash: u64, precision: u32) -> BoundingBox {
    let mut bbox = BoundingBox::domain();

    for step in 0..precision {
        let bit = (hash >> (precision - 1 - step)) & 1;
        if step % 2 == 0 {
            let mid = (bbox.min_lng + bbox.max_lng) / 2.0;
            if bit == 0 {
                bbox.max_lng = mid;
            } else {
                bbox.min_lng = mid;
            }
        } else {
            let mid = (bbox.min_lat + bbox.max_lat) / 2.0;
            if bit == 0 {
                bbox.max_lat = mid;
            } else {
                bbox.min_lat = mid;
            }
        }
    }

    bbox
}

/// Bit count of `hash` up to and including its highest set bit.
///
/// Leading zero bits of the original hash cannot be recovered, so this
/// under-counts for any hash whose first produced bit was 0.
pub fn infer_precision(hash: u64) -> Result<u32> {
    if hash == 0 {
        return Err(BithashError::InvalidPrecision(0));
    }
    Ok(hash.ilog2() + 1)
}

/// Decode with precision inferred from the highest set bit.
///
/// Best effort only: prefer [`decode`] with the precision used to encode.
pub fn decode_inferred(hash: u64) -> Result<BoundingBox> {
    let precision = infer_precision(hash)?;
    log::debug!("Inferred precision {} for hash {:#x}", precision, hash);
    Ok(decode_unchecked(hash, precision))
}
