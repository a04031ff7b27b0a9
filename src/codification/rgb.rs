//! RGB codification.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::{
    AcceptedByCss, CodificationKind, HasOpacity, check_unit, css_alpha_percentage,
    format_css_alpha, normalize_scaled, parse_int,
};
use crate::constants::{CHANNEL_MAX, PERCENT_MAX};
use crate::error::{ColourError, Result};
use crate::num_utils::denormalize_unit;

/// `rgb(r, g, b)`
static CSS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)$")
        .expect("Invalid rgb regex")
});

/// `rgba(r, g, b, a)`
static CSS_ALPHA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*(1|0(?:\.[0-9]{1,2})?)\s*\)$",
    )
    .expect("Invalid rgba regex")
});

/// A colour as red, green and blue channels plus alpha.
///
/// Channels are stored normalized to `[0, 1]` and exposed on the 0-255 scale;
/// alpha is exposed as a 0-100 percentage.
#[derive(Debug, Clone, Copy)]
pub struct RgbCode {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

impl RgbCode {
    /// Create an opaque code from normalized channels.
    pub fn new(red: f32, green: f32, blue: f32) -> Result<Self> {
        Self::with_alpha(red, green, blue, 1.0)
    }

    /// Create a code from normalized channels and alpha.
    pub fn with_alpha(red: f32, green: f32, blue: f32, alpha: f32) -> Result<Self> {
        Ok(Self {
            red: check_unit(red, "Red")?,
            green: check_unit(green, "Green")?,
            blue: check_unit(blue, "Blue")?,
            alpha: check_unit(alpha, "Alpha")?,
        })
    }

    /// Create an opaque code from 0-255 channels.
    pub fn from_255(red: i32, green: i32, blue: i32) -> Result<Self> {
        Self::from_255_with_alpha(red, green, blue, PERCENT_MAX)
    }

    /// Create a code from 0-255 channels and a 0-100 alpha percentage.
    pub fn from_255_with_alpha(red: i32, green: i32, blue: i32, alpha: i32) -> Result<Self> {
        Self::with_alpha(
            normalize_scaled(red, CHANNEL_MAX, "Red")?,
            normalize_scaled(green, CHANNEL_MAX, "Green")?,
            normalize_scaled(blue, CHANNEL_MAX, "Blue")?,
            normalize_scaled(alpha, PERCENT_MAX, "Alpha")?,
        )
    }

    /// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// Text that does not match either form fails with
    /// [`ColourError::Malformed`] before any range check.
    pub fn from_css(css: &str) -> Result<Self> {
        const KIND: CodificationKind = CodificationKind::Rgb;

        let (captures, alpha) = if let Some(captures) = CSS_ALPHA_PATTERN.captures(css) {
            let alpha = css_alpha_percentage(&captures[4], KIND, css)?;
            (captures, alpha)
        } else if let Some(captures) = CSS_PATTERN.captures(css) {
            (captures, PERCENT_MAX)
        } else {
            return Err(ColourError::malformed(KIND, css));
        };

        Self::from_255_with_alpha(
            parse_int(&captures[1], KIND, css)?,
            parse_int(&captures[2], KIND, css)?,
            parse_int(&captures[3], KIND, css)?,
            alpha,
        )
    }

    /// Normalized red channel.
    pub fn red(&self) -> f32 {
        self.red
    }

    /// Normalized green channel.
    pub fn green(&self) -> f32 {
        self.green
    }

    /// Normalized blue channel.
    pub fn blue(&self) -> f32 {
        self.blue
    }

    /// Red channel on the 0-255 scale.
    pub fn red255(&self) -> i32 {
        denormalize_unit(0, CHANNEL_MAX, self.red)
    }

    /// Green channel on the 0-255 scale.
    pub fn green255(&self) -> i32 {
        denormalize_unit(0, CHANNEL_MAX, self.green)
    }

    /// Blue channel on the 0-255 scale.
    pub fn blue255(&self) -> i32 {
        denormalize_unit(0, CHANNEL_MAX, self.blue)
    }

    /// Alpha on the 0-255 scale.
    pub fn alpha255(&self) -> i32 {
        denormalize_unit(0, CHANNEL_MAX, self.alpha)
    }

    fn comparison_key(&self) -> (i32, i32, i32, i32) {
        (
            self.red255(),
            self.green255(),
            self.blue255(),
            self.alpha_percentage(),
        )
    }
}

impl HasOpacity for RgbCode {
    fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl AcceptedByCss for RgbCode {
    fn to_css_code(&self) -> String {
        if self.is_opaque() {
            format!(
                "rgb({}, {}, {})",
                self.red255(),
                self.green255(),
                self.blue255()
            )
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.red255(),
                self.green255(),
                self.blue255(),
                format_css_alpha(self.alpha)
            )
        }
    }
}

impl PartialEq for RgbCode {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for RgbCode {}

impl Hash for RgbCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

impl fmt::Display for RgbCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_code())
    }
}

impl FromStr for RgbCode {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_css(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_code_opaque() {
        let rgb = RgbCode::new(0.25, 0.5, 0.75).unwrap();
        assert_eq!(rgb.to_css_code(), "rgb(64, 128, 191)");
        assert_eq!(rgb.to_string(), "rgb(64, 128, 191)");
    }

    #[test]
    fn test_css_code_with_alpha() {
        let rgb = RgbCode::with_alpha(0.25, 0.5, 0.75, 0.33).unwrap();
        assert_eq!(rgb.to_css_code(), "rgba(64, 128, 191, 0.33)");
    }

    #[test]
    fn test_default_alpha_is_opaque() {
        let rgb = RgbCode::from_255(10, 20, 30).unwrap();
        assert!(rgb.is_opaque());
        assert_eq!(rgb.alpha_percentage(), 100);
    }

    #[test]
    fn test_normalized_boundaries() {
        assert!(RgbCode::with_alpha(0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(RgbCode::with_alpha(1.0, 1.0, 1.0, 1.0).is_ok());
        assert!(RgbCode::new(-0.0001, 0.0, 0.0).is_err());
        assert!(RgbCode::new(0.0, 1.0001, 0.0).is_err());
        assert!(RgbCode::with_alpha(0.0, 0.0, 0.0, 1.0001).is_err());
        assert!(RgbCode::new(f32::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_integer_boundaries() {
        assert!(RgbCode::from_255_with_alpha(0, 0, 0, 0).is_ok());
        assert!(RgbCode::from_255_with_alpha(255, 255, 255, 100).is_ok());
        assert!(RgbCode::from_255(256, 0, 0).is_err());
        assert!(RgbCode::from_255(0, -1, 0).is_err());
        assert!(RgbCode::from_255_with_alpha(0, 0, 0, 101).is_err());
    }

    #[test]
    fn test_out_of_range_error_names_property() {
        let err = RgbCode::from_255(0, 0, 300).unwrap_err();
        match err {
            ColourError::OutOfRange {
                property, value, ..
            } => {
                assert_eq!(property, "Blue");
                assert_eq!(value, "300");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_css() {
        let rgb = RgbCode::from_css("rgb(63, 127, 88)").unwrap();
        assert_eq!(rgb.red255(), 63);
        assert_eq!(rgb.green255(), 127);
        assert_eq!(rgb.blue255(), 88);
        assert!(rgb.is_opaque());

        let rgba = RgbCode::from_css("rgba(63   , 127, 88  ,    0.18  )").unwrap();
        assert_eq!(rgba.alpha_percentage(), 18);
        assert_eq!(rgba, RgbCode::from_css("rgba(63,127,88,0.18)").unwrap());

        let opaque = RgbCode::from_css("rgba(1, 2, 3, 1)").unwrap();
        assert!(opaque.is_opaque());
    }

    #[test]
    fn test_parse_malformed_fails_before_range_check() {
        for text in [
            "rgv(0,0,0)",
            "rgb[0,0,0]",
            "rgb(0)",
            "rgb(-1,0,0)",
            "rgb(0,0.5,0)",
            "rgb(0,0,0,0)",
            "rgba(0,0,0,-0.5)",
            "rgba(0,0,0,0,5)",
            "rgba(0,0,0,0.123)",
            "",
        ] {
            let err = RgbCode::from_css(text).unwrap_err();
            assert!(err.is_malformed(), "{} should be malformed, got {:?}", text, err);
        }
    }

    #[test]
    fn test_parse_out_of_range_is_not_malformed() {
        let err = RgbCode::from_css("rgb(256, 0, 0)").unwrap_err();
        assert!(matches!(err, ColourError::OutOfRange { .. }));
    }

    #[test]
    fn test_css_round_trip_text() {
        for text in ["rgb(0, 0, 0)", "rgb(255, 255, 255)", "rgba(12, 34, 56, 0.50)"] {
            assert_eq!(RgbCode::from_css(text).unwrap().to_css_code(), text);
        }
    }

    #[test]
    fn test_css_round_trip_alpha_ties() {
        for (alpha, text) in [
            (0.125, "rgba(64, 128, 191, 0.13)"),
            (0.625, "rgba(64, 128, 191, 0.63)"),
        ] {
            let rgb = RgbCode::with_alpha(0.25, 0.5, 0.75, alpha).unwrap();
            let css = rgb.to_css_code();
            assert_eq!(css, text);
            assert_eq!(RgbCode::from_css(&css).unwrap(), rgb);
        }
    }

    #[test]
    fn test_equality_uses_rounded_components() {
        let a = RgbCode::new(0.4, 0.4, 0.4).unwrap();
        let b = RgbCode::new(0.4001, 0.3999, 0.4).unwrap();
        assert_eq!(a, b);

        let c = RgbCode::with_alpha(0.4, 0.4, 0.4, 0.5).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_str() {
        let rgb: RgbCode = "rgb(1, 2, 3)".parse().unwrap();
        assert_eq!(rgb, RgbCode::from_255(1, 2, 3).unwrap());
    }
}
