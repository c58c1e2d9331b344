//! Pixel dimensions and their normalization to even integers.

use std::fmt;

use crate::error::{Error, Result};

/// Smallest width or height accepted, in pixels.
pub const MIN_DIMENSION: u32 = 64;

/// Normalize a raw (possibly fractional) side length.
///
/// Values below [`MIN_DIMENSION`] are rejected. Everything else is truncated
/// down to the nearest even integer, so `153.584` becomes `152` and `1023.0`
/// becomes `1022`.
pub fn normalize(value: f64) -> Result<u32> {
    if !value.is_finite() || value < MIN_DIMENSION as f64 {
        return Err(Error::InvalidDimension { value });
    }

    let even = (value / 2.0).floor() * 2.0;
    if even > u32::MAX as f64 {
        return Err(Error::InvalidDimension { value });
    }

    Ok(even as u32)
}

/// A validated width/height pair.
///
/// Both sides are even and at least [`MIN_DIMENSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Build dimensions from raw side lengths, normalizing both.
    /// Width is validated first.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            width: normalize(width)?,
            height: normalize(height)?,
        })
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Height divided by width, the same orientation as ratio specs.
    pub fn ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
