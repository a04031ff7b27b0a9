//! HSV (also known as HSB) codification.

use std::hash::{Hash, Hasher};

use super::{HasOpacity, check_unit, normalize_scaled};
use crate::constants::{DEGREES_MAX, PERCENT_MAX};
use crate::error::Result;
use crate::num_utils::denormalize_unit;

/// A colour as hue, saturation and value (brightness) plus alpha.
///
/// HSV has no CSS notation, so it only offers opacity, not CSS rendering.
#[derive(Debug, Clone, Copy)]
pub struct HsvCode {
    hue: f32,
    saturation: f32,
    brightness: f32,
    alpha: f32,
}

/// HSB is the same model as HSV under another name.
pub type HsbCode = HsvCode;

impl HsvCode {
    /// Create an opaque code from normalized components.
    pub fn new(hue: f32, saturation: f32, brightness: f32) -> Result<Self> {
        Self::with_alpha(hue, saturation, brightness, 1.0)
    }

    /// Create a code from normalized components and alpha.
    pub fn with_alpha(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Result<Self> {
        Ok(Self {
            hue: check_unit(hue, "Hue")?,
            saturation: check_unit(saturation, "Saturation")?,
            brightness: check_unit(brightness, "Brightness")?,
            alpha: check_unit(alpha, "Alpha")?,
        })
    }

    /// Create an opaque code from degrees and percentages.
    pub fn from_degrees(hue: i32, saturation: i32, brightness: i32) -> Result<Self> {
        Self::from_degrees_with_alpha(hue, saturation, brightness, PERCENT_MAX)
    }

    /// Create a code from degrees, percentages and an alpha percentage.
    pub fn from_degrees_with_alpha(
        hue: i32,
        saturation: i32,
        brightness: i32,
        alpha: i32,
    ) -> Result<Self> {
        Self::with_alpha(
            normalize_scaled(hue, DEGREES_MAX, "Hue")?,
            normalize_scaled(saturation, PERCENT_MAX, "Saturation")?,
            normalize_scaled(brightness, PERCENT_MAX, "Brightness")?,
            normalize_scaled(alpha, PERCENT_MAX, "Alpha")?,
        )
    }

    /// Normalized hue.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Normalized saturation.
    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Normalized brightness (value).
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Hue in degrees (0-360).
    pub fn hue_degrees(&self) -> i32 {
        denormalize_unit(0, DEGREES_MAX, self.hue)
    }

    /// Saturation percentage (0-100).
    pub fn saturation_percentage(&self) -> i32 {
        denormalize_unit(0, PERCENT_MAX, self.saturation)
    }

    /// Brightness percentage (0-100).
    pub fn brightness_percentage(&self) -> i32 {
        denormalize_unit(0, PERCENT_MAX, self.brightness)
    }

    fn comparison_key(&self) -> (i32, i32, i32, i32) {
        (
            self.hue_degrees(),
            self.saturation_percentage(),
            self.brightness_percentage(),
            self.alpha_percentage(),
        )
    }
}

impl HasOpacity for HsvCode {
    fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl PartialEq for HsvCode {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for HsvCode {}

impl Hash for HsvCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}
