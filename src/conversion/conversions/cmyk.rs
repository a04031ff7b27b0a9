//! CMYK <-> RGB conversions.

use crate::codification::{CmykCode, CodificationKind, ColourCode, RgbCode};
use crate::conversion::traits::{ColourConversion, expect_input};
use crate::error::Result;
use crate::num_utils::{clamp_unit, max};

/// CMYK to RGB. The result is always opaque.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmykToRgb;

impl CmykToRgb {
    /// Convert a typed [`CmykCode`].
    pub fn apply(&self, cmyk: &CmykCode) -> Result<RgbCode> {
        let key = 1.0 - cmyk.black();
        let channel = |ink: f32| clamp_unit((1.0 - ink) * key);

        RgbCode::new(
            channel(cmyk.cyan()),
            channel(cmyk.magenta()),
            channel(cmyk.yellow()),
        )
    }
}

impl ColourConversion for CmykToRgb {
    fn id(&self) -> &str {
        "cmyk_to_rgb"
    }

    fn input(&self) -> CodificationKind {
        CodificationKind::Cmyk
    }

    fn output(&self) -> CodificationKind {
        CodificationKind::Rgb
    }

    fn convert(&self, code: &ColourCode) -> Result<ColourCode> {
        let cmyk = expect_input::<CmykCode>(self, code)?;
        Ok(self.apply(cmyk)?.into())
    }
}

/// RGB to CMYK. Alpha is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbToCmyk;

impl RgbToCmyk {
    /// Convert a typed [`RgbCode`].
    pub fn apply(&self, rgb: &RgbCode) -> Result<CmykCode> {
        let black = 1.0 - max(&[rgb.red(), rgb.green(), rgb.blue()])?;

        // Pure black: no coloured ink at all.
        if black >= 1.0 {
            return CmykCode::new(0.0, 0.0, 0.0, 1.0);
        }

        let ink = |channel: f32| clamp_unit((1.0 - channel - black) / (1.0 - black));
        CmykCode::new(
            ink(rgb.red()),
            ink(rgb.green()),
            ink(rgb.blue()),
            clamp_unit(black),
        )
    }
}

impl ColourConversion for RgbToCmyk {
    fn id(&self) -> &str {
        "rgb_to_cmyk"
    }

    fn input(&self) -> CodificationKind {
        CodificationKind::Rgb
    }

    fn output(&self) -> CodificationKind {
        CodificationKind::Cmyk
    }

    fn convert(&self, code: &ColourCode) -> Result<ColourCode> {
        let rgb = expect_input::<RgbCode>(self, code)?;
        Ok(self.apply(rgb)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codification::HasOpacity;

    #[test]
    fn test_cmyk_to_rgb_primaries() {
        let red = CmykToRgb
            .apply(&CmykCode::from_percentages(0, 100, 100, 0).unwrap())
            .unwrap();
        assert_eq!(red, RgbCode::from_255(255, 0, 0).unwrap());

        let black = CmykToRgb
            .apply(&CmykCode::from_percentages(30, 20, 10, 100).unwrap())
            .unwrap();
        assert_eq!(black, RgbCode::from_255(0, 0, 0).unwrap());

        let white = CmykToRgb
            .apply(&CmykCode::from_percentages(0, 0, 0, 0).unwrap())
            .unwrap();
        assert_eq!(white, RgbCode::from_255(255, 255, 255).unwrap());
        assert!(white.is_opaque());
    }

    #[test]
    fn test_rgb_to_cmyk_primaries() {
        let red = RgbToCmyk.apply(&RgbCode::from_255(255, 0, 0).unwrap()).unwrap();
        assert_eq!(red.to_code(), "C0 M100 Y100 K0");

        let yellow = RgbToCmyk
            .apply(&RgbCode::from_255(255, 255, 0).unwrap())
            .unwrap();
        assert_eq!(yellow.to_code(), "C0 M0 Y100 K0");
    }

    #[test]
    fn test_rgb_to_cmyk_black_has_no_ink() {
        let black = RgbToCmyk.apply(&RgbCode::from_255(0, 0, 0).unwrap()).unwrap();
        assert_eq!(black.to_code(), "C0 M0 Y0 K100");
    }

    #[test]
    fn test_rgb_to_cmyk_drops_alpha() {
        let translucent = RgbCode::from_255_with_alpha(255, 255, 255, 25).unwrap();
        let white = RgbToCmyk.apply(&translucent).unwrap();
        assert_eq!(white.to_code(), "C0 M0 Y0 K0");
    }
}
