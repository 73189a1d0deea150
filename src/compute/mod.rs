//! Core computation for the bit-interleaved geohash.
//!
//! - `validation`: precision, coordinate and bounds checks
//! - `codec`: encode points to hashes and decode hashes to boxes
//! - `neighbors`: the eight adjacent hashes of a box

pub mod codec;
pub mod neighbors;
pub mod validation;
