//! HSL codification.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::{
    AcceptedByCss, CodificationKind, HasOpacity, check_unit, css_alpha_percentage,
    format_css_alpha, normalize_scaled, parse_int,
};
use crate::constants::{DEGREES_MAX, PERCENT_MAX};
use crate::error::{ColourError, Result};
use crate::num_utils::denormalize_unit;

/// `hsl(h, s%, l%)`
static CSS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})%\s*,\s*([0-9]{1,3})%\s*\)$")
        .expect("Invalid hsl regex")
});

/// `hsla(h, s%, l%, a)`
static CSS_ALPHA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})%\s*,\s*([0-9]{1,3})%\s*,\s*(1|0(?:\.[0-9]{1,2})?)\s*\)$",
    )
    .expect("Invalid hsla regex")
});

/// A colour as hue, saturation and lightness plus alpha.
///
/// Hue is exposed in degrees (0-360); saturation, lightness and alpha as
/// percentages (0-100).
#[derive(Debug, Clone, Copy)]
pub struct HslCode {
    hue: f32,
    saturation: f32,
    lightness: f32,
    alpha: f32,
}

impl HslCode {
    /// Create an opaque code from normalized components.
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Result<Self> {
        Self::with_alpha(hue, saturation, lightness, 1.0)
    }

    /// Create a code from normalized components and alpha.
    pub fn with_alpha(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Result<Self> {
        Ok(Self {
            hue: check_unit(hue, "Hue")?,
            saturation: check_unit(saturation, "Saturation")?,
            lightness: check_unit(lightness, "Lightness")?,
            alpha: check_unit(alpha, "Alpha")?,
        })
    }

    /// Create an opaque code from degrees and percentages.
    pub fn from_degrees(hue: i32, saturation: i32, lightness: i32) -> Result<Self> {
        Self::from_degrees_with_alpha(hue, saturation, lightness, PERCENT_MAX)
    }

    /// Create a code from degrees, percentages and an alpha percentage.
    pub fn from_degrees_with_alpha(
        hue: i32,
        saturation: i32,
        lightness: i32,
        alpha: i32,
    ) -> Result<Self> {
        Self::with_alpha(
            normalize_scaled(hue, DEGREES_MAX, "Hue")?,
            normalize_scaled(saturation, PERCENT_MAX, "Saturation")?,
            normalize_scaled(lightness, PERCENT_MAX, "Lightness")?,
            normalize_scaled(alpha, PERCENT_MAX, "Alpha")?,
        )
    }

    /// Parse `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
    pub fn from_css(css: &str) -> Result<Self> {
        const KIND: CodificationKind = CodificationKind::Hsl;

        let (captures, alpha) = if let Some(captures) = CSS_ALPHA_PATTERN.captures(css) {
            let alpha = css_alpha_percentage(&captures[4], KIND, css)?;
            (captures, alpha)
        } else if let Some(captures) = CSS_PATTERN.captures(css) {
            (captures, PERCENT_MAX)
        } else {
            return Err(ColourError::malformed(KIND, css));
        };

        Self::from_degrees_with_alpha(
            parse_int(&captures[1], KIND, css)?,
            parse_int(&captures[2], KIND, css)?,
            parse_int(&captures[3], KIND, css)?,
            alpha,
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

    /// Normalized lightness.
    pub fn lightness(&self) -> f32 {
        self.lightness
    }

    /// Hue in degrees (0-360).
    pub fn hue_degrees(&self) -> i32 {
        denormalize_unit(0, DEGREES_MAX, self.hue)
    }

    /// Saturation percentage (0-100).
    pub fn saturation_percentage(&self) -> i32 {
        denormalize_unit(0, PERCENT_MAX, self.saturation)
    }

    /// Lightness percentage (0-100).
    pub fn lightness_percentage(&self) -> i32 {
        denormalize_unit(0, PERCENT_MAX, self.lightness)
    }

    fn comparison_key(&self) -> (i32, i32, i32, i32) {
        (
            self.hue_degrees(),
            self.saturation_percentage(),
            self.lightness_percentage(),
            self.alpha_percentage(),
        )
    }
}

impl HasOpacity for HslCode {
    fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl AcceptedByCss for HslCode {
    fn to_css_code(&self) -> String {
        if self.is_opaque() {
            format!(
                "hsl({}, {}%, {}%)",
                self.hue_degrees(),
                self.saturation_percentage(),
                self.lightness_percentage()
            )
        } else {
            format!(
                "hsla({}, {}%, {}%, {})",
                self.hue_degrees(),
                self.saturation_percentage(),
                self.lightness_percentage(),
                format_css_alpha(self.alpha)
            )
        }
    }
}

impl PartialEq for HslCode {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for HslCode {}

impl Hash for HslCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

impl fmt::Display for HslCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_code())
    }
}

impl FromStr for HslCode {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_css(s)
    }
}
