//! Resolution calculation from a base resolution and a height:width ratio.
//!
//! Two strategies are available:
//! - anchored: one side stays at the base resolution and the other is scaled
//!   ([`aspect_ratio`]); `overextend` decides which side is the anchor
//! - constant resolution: the pixel count stays near `base²` while the sides
//!   follow the ratio ([`constant_resolution`])
//!
//! All results go through [`normalize`](crate::dimensions::normalize), so the
//! sides are even and at least 64 pixels.

use crate::dimensions::Dimensions;
use crate::error::Result;

/// How the base resolution constrains the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Both sides stay at or below the base resolution.
    #[default]
    Bounded,
    /// One side stays exactly at the base resolution, the other may exceed it.
    Overextend,
    /// Pixel count stays near `base²`.
    ConstantResolution,
}

impl Mode {
    /// Pick a mode from the two node flags. Constant resolution wins.
    pub fn from_flags(overextend: bool, constant_resolution: bool) -> Self {
        if constant_resolution {
            Mode::ConstantResolution
        } else if overextend {
            Mode::Overextend
        } else {
            Mode::Bounded
        }
    }
}

/// Compute dimensions with one side anchored to `base`.
///
/// `ratio` is height divided by width. A ratio of exactly 1 produces a
/// square of `base` in both modes.
pub fn aspect_ratio(base: u32, ratio: f64, overextend: bool) -> Result<Dimensions> {
    let mut width = base as f64;
    let mut height = base as f64;

    if overextend {
        if ratio > 1.0 {
            height *= ratio;
        } else {
            width /= ratio;
        }
    } else if ratio > 1.0 {
        width /= ratio;
    } else {
        height *= ratio;
    }

    let dimensions = Dimensions::new(width, height)?;
    log::debug!(
        "aspect_ratio(base={}, ratio={:.4}, overextend={}) -> {}",
        base,
        ratio,
        overextend,
        dimensions
    );
    Ok(dimensions)
}

/// Compute dimensions whose area approximates `base²` while matching `ratio`.
pub fn constant_resolution(base: u32, ratio: f64) -> Result<Dimensions> {
    let pixel_count = base as f64 * base as f64;
    let height = (pixel_count * ratio).sqrt();
    let width = height / ratio;

    let dimensions = Dimensions::new(width, height)?;
    log::debug!(
        "constant_resolution(base={}, ratio={:.4}) -> {} ({} px)",
        base,
        ratio,
        dimensions,
        dimensions.pixel_count()
    );
    Ok(dimensions)
}

/// Dispatch to the strategy selected by `mode`.
pub fn resolve(base: u32, ratio: f64, mode: Mode) -> Result<Dimensions> {
    match mode {
        Mode::Bounded => aspect_ratio(base, ratio, false),
        Mode::Overextend => aspect_ratio(base, ratio, true),
        Mode::ConstantResolution => constant_resolution(base, ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_bounded_portrait_shrinks_width() {
        let d = aspect_ratio(1024, 4.0 / 3.0, false).unwrap();
        assert_eq!((d.width, d.height), (768, 1024));
    }

    #[test]
    fn test_overextend_portrait_grows_height() {
        let d = aspect_ratio(512, 4.0 / 3.0, true).unwrap();
        assert_eq!((d.width, d.height), (512, 682));
    }

    #[test]
    fn test_bounded_landscape_shrinks_height() {
        // 16:9 label -> ratio 9/16
        let d = aspect_ratio(1024, 9.0 / 16.0, false).unwrap();
        assert_eq!((d.width, d.height), (1024, 576));
    }

    #[test]
    fn test_overextend_landscape_grows_width() {
        let d = aspect_ratio(1024, 9.0 / 16.0, true).unwrap();
        assert_eq!((d.width, d.height), (1820, 1024));
    }

    #[test]
    fn test_square_is_base_in_both_modes() {
        for base in [64, 512, 777, 1024, 8192] {
            let expected = crate::dimensions::normalize(base as f64).unwrap();
            for overextend in [false, true] {
                let d = aspect_ratio(base, 1.0, overextend).unwrap();
                assert_eq!((d.width, d.height), (expected, expected));
            }
        }
    }

    #[test]
    fn test_extreme_ratio_below_floor_fails() {
        let result = aspect_ratio(512, 1.0 / 21.0, false);
        assert!(matches!(result, Err(Error::InvalidDimension { .. })));
    }

    #[test]
    fn test_constant_resolution_square() {
        let d = constant_resolution(1024, 1.0).unwrap();
        assert_eq!((d.width, d.height), (1024, 1024));
    }

    #[test]
    fn test_constant_resolution_keeps_ratio() {
        let d = constant_resolution(1024, 4.0 / 3.0).unwrap();
        assert!((d.ratio() - 4.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn test_constant_resolution_keeps_pixel_count() {
        let d = constant_resolution(1024, 4.0 / 3.0).unwrap();
        assert_eq!(d.pixel_count(), 1_047_252);
    }

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(Mode::from_flags(false, false), Mode::Bounded);
        assert_eq!(Mode::from_flags(true, false), Mode::Overextend);
        assert_eq!(Mode::from_flags(false, true), Mode::ConstantResolution);
        assert_eq!(Mode::from_flags(true, true), Mode::ConstantResolution);
    }

    #[test]
    fn test_resolve_dispatches_on_mode() {
        assert_eq!(
            resolve(1024, 4.0 / 3.0, Mode::Bounded).unwrap(),
            aspect_ratio(1024, 4.0 / 3.0, false).unwrap()
        );
        assert_eq!(
            resolve(512, 4.0 / 3.0, Mode::Overextend).unwrap(),
            aspect_ratio(512, 4.0 / 3.0, true).unwrap()
        );
        assert_eq!(
            resolve(1024, 4.0 / 3.0, Mode::ConstantResolution).unwrap(),
            constant_resolution(1024, 4.0 / 3.0).unwrap()
        );
    }
}
