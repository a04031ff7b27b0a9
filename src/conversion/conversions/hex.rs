//! Hex <-> RGB conversions.

use crate::codification::{CodificationKind, ColourCode, HasOpacity, HexCode, RgbCode};
use crate::constants::CHANNEL_MAX;
use crate::conversion::traits::{ColourConversion, expect_input};
use crate::error::Result;
use crate::num_utils::int_to_hex_width;

/// Hex to RGB.
///
/// Each digit group becomes a 0-255 channel; a missing alpha group means
/// fully opaque.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexToRgb;

impl HexToRgb {
    /// Convert a typed [`HexCode`].
    pub fn apply(&self, hex: &HexCode) -> Result<RgbCode> {
        RgbCode::from_255_with_alpha(
            hex.red255(),
            hex.green255(),
            hex.blue255(),
            hex.alpha_percentage(),
        )
    }
}

impl ColourConversion for HexToRgb {
    fn id(&self) -> &str {
        "hex_to_rgb"
    }

    fn input(&self) -> CodificationKind {
        CodificationKind::Hex
    }

    fn output(&self) -> CodificationKind {
        CodificationKind::Rgb
    }

    fn convert(&self, code: &ColourCode) -> Result<ColourCode> {
        let hex = expect_input::<HexCode>(self, code)?;
        Ok(self.apply(hex)?.into())
    }
}

/// RGB to Hex.
///
/// Produces `#RRGGBB` when the colour is fully opaque and `#RRGGBBAA`
/// otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbToHex;

impl RgbToHex {
    /// Convert a typed [`RgbCode`].
    pub fn apply(&self, rgb: &RgbCode) -> Result<HexCode> {
        let mut digits = String::with_capacity(8);
        for channel in [rgb.red255(), rgb.green255(), rgb.blue255()] {
            digits.push_str(&int_to_hex_width(channel as u32, 2));
        }

        let alpha = rgb.alpha255();
        if alpha != CHANNEL_MAX {
            digits.push_str(&int_to_hex_width(alpha as u32, 2));
        }

        HexCode::new(&digits)
    }
}

impl ColourConversion for RgbToHex {
    fn id(&self) -> &str {
        "rgb_to_hex"
    }

    fn input(&self) -> CodificationKind {
        CodificationKind::Rgb
    }

    fn output(&self) -> CodificationKind {
        CodificationKind::Hex
    }

    fn convert(&self, code: &ColourCode) -> Result<ColourCode> {
        let rgb = expect_input::<RgbCode>(self, code)?;
        Ok(self.apply(rgb)?.into())
    }
}
