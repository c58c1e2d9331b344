//! Ratio specifications: labels like `landscape (16:9)` or explicit components.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static RATIO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+)").expect("ratio pattern is valid"));

/// A requested aspect ratio, written width first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatioSpec {
    /// Human-readable label containing an embedded `W:H`.
    Label(String),
    /// Explicit width and height components.
    Components { width: u32, height: u32 },
}

impl RatioSpec {
    /// Extract the `(width, height)` components.
    ///
    /// Labels use the first `W:H` match anywhere in the string.
    pub fn components(&self) -> Result<(u32, u32)> {
        let (width, height) = match self {
            RatioSpec::Label(label) => parse_label(label)?,
            RatioSpec::Components { width, height } => (*width, *height),
        };

        if width == 0 || height == 0 {
            return Err(Error::InvalidRatio { width, height });
        }
        Ok((width, height))
    }

    /// Height divided by width.
    pub fn ratio(&self) -> Result<f64> {
        let (width, height) = self.components()?;
        Ok(height as f64 / width as f64)
    }
}

impl FromStr for RatioSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Validate eagerly so CLI parsing reports bad labels.
        parse_label(s)?;
        Ok(RatioSpec::Label(s.to_string()))
    }
}

fn parse_label(label: &str) -> Result<(u32, u32)> {
    let caps = RATIO_PATTERN
        .captures(label)
        .ok_or_else(|| Error::InvalidFormat(label.to_string()))?;

    // Digits-only captures can still overflow u32.
    let width = caps[1]
        .parse()
        .map_err(|_| Error::InvalidFormat(label.to_string()))?;
    let height = caps[2]
        .parse()
        .map_err(|_| Error::InvalidFormat(label.to_string()))?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_ratio_is_height_over_width() {
        let spec = RatioSpec::Label("landscape (16:9)".to_string());
        assert_eq!(spec.components().unwrap(), (16, 9));
        assert!((spec.ratio().unwrap() - 9.0 / 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_bare_ratio_label() {
        let spec = RatioSpec::Label("1:1".to_string());
        assert_eq!(spec.ratio().unwrap(), 1.0);
    }

    #[test]
    fn test_label_uses_first_match() {
        let spec = RatioSpec::Label("3:4 or 4:3".to_string());
        assert_eq!(spec.components().unwrap(), (3, 4));
    }

    #[test]
    fn test_label_without_pattern_fails() {
        let spec = RatioSpec::Label("square".to_string());
        assert!(matches!(spec.ratio(), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_label_with_overflowing_digits_fails() {
        let spec = RatioSpec::Label("99999999999:1".to_string());
        assert!(matches!(spec.ratio(), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_zero_component_rejected() {
        let spec = RatioSpec::Label("0:5".to_string());
        assert!(matches!(spec.ratio(), Err(Error::InvalidRatio { .. })));

        let spec = RatioSpec::Components { width: 4, height: 0 };
        assert!(matches!(spec.ratio(), Err(Error::InvalidRatio { .. })));
    }

    #[test]
    fn test_components_ratio() {
        let spec = RatioSpec::Components { width: 3, height: 4 };
        assert!((spec.ratio().unwrap() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_str() {
        let spec: RatioSpec = "portrait (9:16)".parse().unwrap();
        assert_eq!(spec, RatioSpec::Label("portrait (9:16)".to_string()));
        assert!("portrait".parse::<RatioSpec>().is_err());
    }
}
