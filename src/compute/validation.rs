//! Validation for precision, coordinates and bounding boxes.

use crate::error::{Axis, BithashError, Result};
use bithash_types::bbox::BoundingBox;
use bithash_types::{MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};

/// Largest precision the 64-bit accumulator can hold.
pub const MAX_PRECISION: u32 = 64;

/// Validates a bit precision is in `1..=64`.
///
/// # Examples
///
/// ```
/// use bithash::compute::validation::validate_precision;
///
/// assert!(validate_precision(52).is_ok());
/// assert!(validate_precision(0).is_err());
/// assert!(validate_precision(65).is_err());
/// ```
pub fn validate_precision(bits: u32) -> Result<()> {
    if bits == 0 || bits > MAX_PRECISION {
        return Err(BithashError::InvalidPrecision(bits));
    }
    Ok(())
}

/// Validates a coordinate is finite and inside the domain.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// # Examples
///
/// ```
/// use bithash::compute::validation::validate_coordinate;
///
/// assert!(validate_coordinate(40.7128, -74.0060).is_ok());
/// assert!(validate_coordinate(95.0, 0.0).is_err());
/// assert!(validate_coordinate(0.0, f64::NAN).is_err());
/// ```
pub fn validate_coordinate(lat: f64, lng: f64) -> Result<()> {
    validate_finite(lat, lng)?;

    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(BithashError::OutOfDomain {
            axis: Axis::Latitude,
            value: lat,
        });
    }

    if !(MIN_LNG..=MAX_LNG).contains(&lng) {
        return Err(BithashError::OutOfDomain {
            axis: Axis::Longitude,
            value: lng,
        });
    }

    Ok(())
}

pub(crate) fn validate_finite(lat: f64, lng: f64) -> Result<()> {
    if !lat.is_finite() {
        return Err(BithashError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lng.is_finite() {
        return Err(BithashError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lng
        )));
    }

    Ok(())
}

/// Validates a box has ordered, in-domain edges.
pub fn validate_bounds(bbox: &BoundingBox) -> Result<()> {
    validate_coordinate(bbox.min_lat, bbox.min_lng)?;
    validate_coordinate(bbox.max_lat, bbox.max_lng)?;

    if bbox.min_lat > bbox.max_lat {
        return Err(BithashError::InvalidInput(format!(
            "min_lat ({}) must be <= max_lat ({})",
            bbox.min_lat, bbox.max_lat
        )));
    }
    if bbox.min_lng > bbox.max_lng {
        return Err(BithashError::InvalidInput(format!(
            "min_lng ({}) must be <= max_lng ({})",
            bbox.min_lng, bbox.max_lng
        )));
    }

    Ok(())
}
