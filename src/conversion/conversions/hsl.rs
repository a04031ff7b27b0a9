//! HSL <-> RGB conversions.

use super::{hue_sextant, hue_x, rgb_hue_degrees};
use crate::codification::{CodificationKind, ColourCode, HasOpacity, HslCode, RgbCode};
use crate::constants::{CHANNEL_MAX, DEGREES_MAX};
use crate::conversion::traits::{ColourConversion, expect_input};
use crate::error::Result;
use crate::num_utils::{clamp_unit, denormalize_unit, max, min};

/// HSL to RGB.
#[derive(Debug, Clone, Copy, Default)]
pub struct HslToRgb;

impl HslToRgb {
    /// Convert a typed [`HslCode`].
    pub fn apply(&self, hsl: &HslCode) -> Result<RgbCode> {
        let hue = hsl.hue_degrees() as f32;
        let lightness = hsl.lightness();

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * hsl.saturation();
        let (r, g, b) = hue_sextant(hue, chroma, hue_x(hue, chroma));
        let m = lightness - chroma / 2.0;

        let channel = |value: f32| denormalize_unit(0, CHANNEL_MAX, value + m);
        RgbCode::from_255_with_alpha(channel(r), channel(g), channel(b), hsl.alpha_percentage())
    }
}

impl ColourConversion for HslToRgb {
    fn id(&self) -> &str {
        "hsl_to_rgb"
    }

    fn input(&self) -> CodificationKind {
        CodificationKind::Hsl
    }

    fn output(&self) -> CodificationKind {
        CodificationKind::Rgb
    }

    fn convert(&self, code: &ColourCode) -> Result<ColourCode> {
        let hsl = expect_input::<HslCode>(self, code)?;
        Ok(self.apply(hsl)?.into())
    }
}

/// RGB to HSL.
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbToHsl;

impl RgbToHsl {
    /// Convert a typed [`RgbCode`].
    pub fn apply(&self, rgb: &RgbCode) -> Result<HslCode> {
        let (r, g, b) = (rgb.red(), rgb.green(), rgb.blue());
        let max = max(&[r, g, b])?;
        let min = min(&[r, g, b])?;
        let delta = max - min;

        let lightness = (max + min) / 2.0;
        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };
        let hue = rgb_hue_degrees(r, g, b, max, delta);

        HslCode::with_alpha(
            hue as f32 / DEGREES_MAX as f32,
            clamp_unit(saturation),
            clamp_unit(lightness),
            rgb.alpha(),
        )
    }
}

impl ColourConversion for RgbToHsl {
    fn id(&self) -> &str {
        "rgb_to_hsl"
    }

    fn input(&self) -> CodificationKind {
        CodificationKind::Rgb
    }

    fn output(&self) -> CodificationKind {
        CodificationKind::Hsl
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
    fn test_hsl_to_rgb() {
        let rgb = HslToRgb.apply(&HslCode::from_degrees(210, 50, 50).unwrap()).unwrap();
        assert_eq!(rgb, RgbCode::from_255(64, 128, 191).unwrap());

        let red = HslToRgb.apply(&HslCode::from_degrees(0, 100, 50).unwrap()).unwrap();
        assert_eq!(red, RgbCode::from_255(255, 0, 0).unwrap());
    }

    #[test]
    fn test_hsl_to_rgb_hue_360_is_red() {
        let red = HslToRgb.apply(&HslCode::from_degrees(360, 100, 50).unwrap()).unwrap();
        assert_eq!(red, RgbCode::from_255(255, 0, 0).unwrap());
    }

    #[test]
    fn test_hsl_to_rgb_keeps_alpha() {
        let hsl = HslCode::from_degrees_with_alpha(120, 100, 50, 25).unwrap();
        let rgb = HslToRgb.apply(&hsl).unwrap();
        assert_eq!(rgb, RgbCode::from_255_with_alpha(0, 255, 0, 25).unwrap());
    }

    #[test]
    fn test_rgb_to_hsl() {
        let hsl = RgbToHsl.apply(&RgbCode::from_255(64, 128, 191).unwrap()).unwrap();
        assert_eq!(hsl, HslCode::from_degrees(210, 50, 50).unwrap());
    }

    #[test]
    fn test_rgb_to_hsl_greys_have_no_saturation() {
        for level in [0, 128, 255] {
            let hsl = RgbToHsl
                .apply(&RgbCode::from_255(level, level, level).unwrap())
                .unwrap();
            assert_eq!(hsl.hue_degrees(), 0);
            assert_eq!(hsl.saturation_percentage(), 0);
        }
    }

    #[test]
    fn test_rgb_to_hsl_keeps_alpha() {
        let rgb = RgbCode::from_255_with_alpha(0, 0, 255, 75).unwrap();
        let hsl = RgbToHsl.apply(&rgb).unwrap();
        assert_eq!(hsl, HslCode::from_degrees_with_alpha(240, 100, 50, 75).unwrap());
    }
}
