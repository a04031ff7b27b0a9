//! Built-in conversion implementations.
//!
//! Every codification is linked to RGB in both directions, which makes RGB
//! the hub of the default registry.

mod cmyk;
mod hex;
mod hsl;
mod hsv;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::constants::DEGREES_MAX;
use crate::conversion::traits::ColourConversion;
use crate::num_utils::round_to;

pub use cmyk::{CmykToRgb, RgbToCmyk};
pub use hex::{HexToRgb, RgbToHex};
pub use hsl::{HslToRgb, RgbToHsl};
pub use hsv::{HsvToRgb, RgbToHsv};

/// The conversions registered by [`ConversionRegistry::new`], in order.
///
/// [`ConversionRegistry::new`]: crate::ConversionRegistry::new
pub fn default_conversions() -> Vec<Arc<dyn ColourConversion>> {
    vec![
        Arc::new(HexToRgb),
        Arc::new(RgbToHex),
        Arc::new(CmykToRgb),
        Arc::new(RgbToCmyk),
        Arc::new(HslToRgb),
        Arc::new(RgbToHsl),
        Arc::new(HsvToRgb),
        Arc::new(RgbToHsv),
    ]
}

/// Red, green and blue before adding the lightness/value offset, picked by
/// the 60° segment the hue falls in.
///
/// `hue` is in degrees and wraps around 360.
fn hue_sextant(hue: f32, chroma: f32, x: f32) -> (f32, f32, f32) {
    let h = hue.rem_euclid(DEGREES_MAX as f32);

    if h < 60.0 {
        (chroma, x, 0.0)
    } else if h < 120.0 {
        (x, chroma, 0.0)
    } else if h < 180.0 {
        (0.0, chroma, x)
    } else if h < 240.0 {
        (0.0, x, chroma)
    } else if h < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    }
}

/// Second-largest component of a hue segment.
fn hue_x(hue: f32, chroma: f32) -> f32 {
    chroma * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs())
}

/// Hue of an RGB triple in whole degrees, in `[0, 360)`.
///
/// `max` and `delta` are the largest channel and the spread between the
/// largest and smallest channel. A grey (`delta == 0`) has hue 0.
fn rgb_hue_degrees(red: f32, green: f32, blue: f32, max: f32, delta: f32) -> i32 {
    if delta == 0.0 {
        return 0;
    }

    let segment = if max == red {
        ((green - blue) / delta) % 6.0
    } else if max == green {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };

    let mut hue = round_to(segment * 60.0, 0) as i32;
    if hue < 0 {
        hue += DEGREES_MAX;
    }
    hue % DEGREES_MAX
}
