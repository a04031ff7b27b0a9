//! HSV <-> RGB conversions.

use super::{hue_sextant, hue_x, rgb_hue_degrees};
use crate::codification::{CodificationKind, ColourCode, HasOpacity, HsvCode, RgbCode};
use crate::constants::PERCENT_MAX;
use crate::conversion::traits::{ColourConversion, expect_input};
use crate::error::Result;
use crate::num_utils::{clamp_unit, denormalize_unit, max, min};

/// HSV (HSB) to RGB.
#[derive(Debug, Clone, Copy, Default)]
pub struct HsvToRgb;

impl HsvToRgb {
    /// Convert a typed [`HsvCode`].
    pub fn apply(&self, hsv: &HsvCode) -> Result<RgbCode> {
        let hue = hsv.hue_degrees() as f32;
        let value = hsv.brightness();

        let chroma = value * hsv.saturation();
        let (r, g, b) = hue_sextant(hue, chroma, hue_x(hue, chroma));
        let m = value - chroma;

        RgbCode::with_alpha(
            clamp_unit(r + m),
            clamp_unit(g + m),
            clamp_unit(b + m),
            hsv.alpha(),
        )
    }
}

impl ColourConversion for HsvToRgb {
    fn id(&self) -> &str {
        "hsv_to_rgb"
    }

    fn input(&self) -> CodificationKind {
        CodificationKind::Hsv
    }

    fn output(&self) -> CodificationKind {
        CodificationKind::Rgb
    }

    fn convert(&self, code: &ColourCode) -> Result<ColourCode> {
        let hsv = expect_input::<HsvCode>(self, code)?;
        Ok(self.apply(hsv)?.into())
    }
}

/// RGB to HSV (HSB).
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbToHsv;

impl RgbToHsv {
    /// Convert a typed [`RgbCode`].
    pub fn apply(&self, rgb: &RgbCode) -> Result<HsvCode> {
        let (r, g, b) = (rgb.red(), rgb.green(), rgb.blue());
        let max = max(&[r, g, b])?;
        let delta = max - min(&[r, g, b])?;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };
        let hue = rgb_hue_degrees(r, g, b, max, delta);

        HsvCode::from_degrees_with_alpha(
            hue,
            denormalize_unit(0, PERCENT_MAX, saturation),
            denormalize_unit(0, PERCENT_MAX, max),
            rgb.alpha_percentage(),
        )
    }
}

impl ColourConversion for RgbToHsv {
    fn id(&self) -> &str {
        "rgb_to_hsv"
    }

    fn input(&self) -> CodificationKind {
        CodificationKind::Rgb
    }

    fn output(&self) -> CodificationKind {
        CodificationKind::Hsv
    }

    fn convert(&self, code: &ColourCode) -> Result<ColourCode> {
        let rgb = expect_input::<RgbCode>(self, code)?;
        Ok(self.apply(rgb)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_to_rgb_primaries() {
        let cases = [
            ((0, 100, 100), (255, 0, 0)),
            ((120, 100, 100), (0, 255, 0)),
            ((240, 100, 100), (0, 0, 255)),
            ((60, 100, 100), (255, 255, 0)),
            ((0, 0, 0), (0, 0, 0)),
            ((0, 0, 100), (255, 255, 255)),
        ];

        for ((h, s, v), (r, g, b)) in cases {
            let rgb = HsvToRgb.apply(&HsvCode::from_degrees(h, s, v).unwrap()).unwrap();
            assert_eq!(rgb, RgbCode::from_255(r, g, b).unwrap(), "hsv({}, {}, {})", h, s, v);
        }
    }

    #[test]
    fn test_hsv_to_rgb_keeps_alpha() {
        let hsv = HsvCode::from_degrees_with_alpha(0, 100, 100, 50).unwrap();
        let rgb = HsvToRgb.apply(&hsv).unwrap();
        assert_eq!(rgb.alpha_percentage(), 50);
    }

    #[test]
    fn test_rgb_to_hsv() {
        let hsv = RgbToHsv.apply(&RgbCode::from_255(64, 128, 191).unwrap()).unwrap();
        assert_eq!(hsv, HsvCode::from_degrees(210, 66, 75).unwrap());
    }

    #[test]
    fn test_rgb_to_hsv_black_has_no_saturation() {
        let hsv = RgbToHsv.apply(&RgbCode::from_255(0, 0, 0).unwrap()).unwrap();
        assert_eq!(hsv, HsvCode::from_degrees(0, 0, 0).unwrap());
    }
}
