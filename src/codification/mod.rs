//! Colour codifications.
//!
//! A codification is one way of writing a colour down: RGB, HSL, HSV, CMYK or
//! a hexadecimal string. Every codification is an immutable value type that
//! validates its components on construction and stores them normalized to
//! `[0, 1]`. Equality is always computed on the rounded, user-facing scale,
//! so values differing only by float noise compare equal.
//!
//! ## Capabilities
//!
//! - [`HasOpacity`]: RGB, HSL, HSV and Hex carry an alpha component.
//! - [`AcceptedByCss`]: RGB, HSL and Hex can be rendered as CSS text.
//!
//! CMYK has neither capability.

mod cmyk;
mod hex;
mod hsl;
mod hsv;
mod rgb;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::constants::{CSS_ALPHA_DECIMALS, PERCENT_MAX};
use crate::conversion::ConversionRegistry;
use crate::error::{ColourError, Result};
use crate::num_utils;

pub use cmyk::CmykCode;
pub use hex::HexCode;
pub use hsl::HslCode;
pub use hsv::{HsbCode, HsvCode};
pub use rgb::RgbCode;

/// Tag identifying a codification, used to key conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodificationKind {
    /// Red, green, blue (and alpha)
    Rgb,
    /// Hue, saturation, lightness (and alpha)
    Hsl,
    /// Hue, saturation, value/brightness (and alpha)
    Hsv,
    /// Cyan, magenta, yellow, black
    Cmyk,
    /// Hexadecimal string
    Hex,
}

impl CodificationKind {
    /// Every codification, in declaration order.
    pub const ALL: [CodificationKind; 5] = [
        CodificationKind::Rgb,
        CodificationKind::Hsl,
        CodificationKind::Hsv,
        CodificationKind::Cmyk,
        CodificationKind::Hex,
    ];

    /// Type name used in messages (e.g. `"RgbCode"`).
    pub fn name(&self) -> &'static str {
        match self {
            CodificationKind::Rgb => "RgbCode",
            CodificationKind::Hsl => "HslCode",
            CodificationKind::Hsv => "HsvCode",
            CodificationKind::Cmyk => "CmykCode",
            CodificationKind::Hex => "HexCode",
        }
    }

    /// Whether codes of this kind can be written as CSS text.
    pub fn is_css_accepted(&self) -> bool {
        matches!(
            self,
            CodificationKind::Rgb | CodificationKind::Hsl | CodificationKind::Hex
        )
    }

    /// Whether codes of this kind carry an alpha component.
    pub fn has_opacity(&self) -> bool {
        !matches!(self, CodificationKind::Cmyk)
    }
}

impl fmt::Display for CodificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A codification that exposes an opacity (alpha) component.
pub trait HasOpacity {
    /// Alpha value in `[0, 1]`.
    fn alpha(&self) -> f32;

    /// Alpha as a percentage in `[0, 100]`.
    fn alpha_percentage(&self) -> i32 {
        num_utils::denormalize_unit(0, PERCENT_MAX, self.alpha())
    }

    /// Whether alpha is exactly 1.
    fn is_opaque(&self) -> bool {
        self.alpha() == 1.0
    }
}

/// A codification that can be used as a CSS colour value.
pub trait AcceptedByCss: HasOpacity {
    /// CSS representation of the code.
    fn to_css_code(&self) -> String;
}

/// Implemented by every codification struct, linking it to its
/// [`CodificationKind`] and to the [`ColourCode`] union.
pub trait Codification: Clone + fmt::Debug + Into<ColourCode> {
    /// Tag of this codification.
    const KIND: CodificationKind;

    /// Unwrap a [`ColourCode`] holding this codification.
    fn from_code(code: ColourCode) -> Option<Self>;

    /// Borrow this codification out of a [`ColourCode`].
    fn from_code_ref(code: &ColourCode) -> Option<&Self>;
}

/// A colour written in any of the supported codifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColourCode {
    /// RGB codification
    Rgb(RgbCode),
    /// HSL codification
    Hsl(HslCode),
    /// HSV/HSB codification
    Hsv(HsvCode),
    /// CMYK codification
    Cmyk(CmykCode),
    /// Hexadecimal codification
    Hex(HexCode),
}

impl ColourCode {
    /// Tag of the held codification.
    pub fn kind(&self) -> CodificationKind {
        match self {
            ColourCode::Rgb(_) => CodificationKind::Rgb,
            ColourCode::Hsl(_) => CodificationKind::Hsl,
            ColourCode::Hsv(_) => CodificationKind::Hsv,
            ColourCode::Cmyk(_) => CodificationKind::Cmyk,
            ColourCode::Hex(_) => CodificationKind::Hex,
        }
    }

    /// CSS capability of the held code, if it has one.
    pub fn as_css(&self) -> Option<&dyn AcceptedByCss> {
        match self {
            ColourCode::Rgb(code) => Some(code),
            ColourCode::Hsl(code) => Some(code),
            ColourCode::Hex(code) => Some(code),
            ColourCode::Hsv(_) | ColourCode::Cmyk(_) => None,
        }
    }

    /// Opacity capability of the held code, if it has one.
    pub fn as_opacity(&self) -> Option<&dyn HasOpacity> {
        match self {
            ColourCode::Rgb(code) => Some(code),
            ColourCode::Hsl(code) => Some(code),
            ColourCode::Hsv(code) => Some(code),
            ColourCode::Hex(code) => Some(code),
            ColourCode::Cmyk(_) => None,
        }
    }

    /// Wrap this code in a [`Colour`] using the default converter.
    pub fn to_colour(&self) -> Colour {
        Colour::new(self.clone())
    }

    /// Wrap this code in a [`Colour`] using a custom converter.
    pub fn to_colour_with(&self, converter: Arc<ConversionRegistry>) -> Colour {
        Colour::with_converter(self.clone(), converter)
    }
}

macro_rules! impl_codification {
    ($ty:ident, $variant:ident) => {
        impl Codification for $ty {
            const KIND: CodificationKind = CodificationKind::$variant;

            fn from_code(code: ColourCode) -> Option<Self> {
                match code {
                    ColourCode::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_code_ref(code: &ColourCode) -> Option<&Self> {
                match code {
                    ColourCode::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for ColourCode {
            fn from(code: $ty) -> Self {
                ColourCode::$variant(code)
            }
        }

        impl $ty {
            /// Wrap this code in a [`Colour`] using the default converter.
            pub fn to_colour(&self) -> Colour {
                Colour::new(self.clone())
            }
        }
    };
}

impl_codification!(RgbCode, Rgb);
impl_codification!(HslCode, Hsl);
impl_codification!(HsvCode, Hsv);
impl_codification!(CmykCode, Cmyk);
impl_codification!(HexCode, Hex);

/// Validate a normalized component.
pub(crate) fn check_unit(value: f32, property: &str) -> Result<f32> {
    if num_utils::is_between(0.0, 1.0, value) {
        Ok(value)
    } else {
        Err(ColourError::out_of_range(property, value, "[0.0, 1.0]"))
    }
}

/// Validate an integer component on `[0, max]` and normalize it.
pub(crate) fn normalize_scaled(value: i32, max: i32, property: &str) -> Result<f32> {
    if num_utils::is_between(0, max, value) {
        num_utils::normalize(0, max, value)
    } else {
        Err(ColourError::out_of_range(
            property,
            value,
            format!("[0, {}]", max),
        ))
    }
}

/// Render an alpha value the way CSS expects it (`0.33`).
///
/// Ties round half up, like [`HasOpacity::alpha_percentage`], so the text
/// reads back as an equal code.
pub(crate) fn format_css_alpha(alpha: f32) -> String {
    let rounded = num_utils::round_to(alpha, CSS_ALPHA_DECIMALS as i32);
    format!("{:.*}", CSS_ALPHA_DECIMALS, rounded)
}

/// Parse a CSS alpha literal (`1`, `0`, `0.5`, `0.33`) into a percentage.
pub(crate) fn css_alpha_percentage(
    literal: &str,
    codification: CodificationKind,
    text: &str,
) -> Result<i32> {
    let alpha: f32 = literal
        .parse()
        .map_err(|_| ColourError::malformed(codification, text))?;
    num_utils::denormalize(0, PERCENT_MAX, alpha)
}

/// Parse a captured decimal integer.
pub(crate) fn parse_int(
    literal: &str,
    codification: CodificationKind,
    text: &str,
) -> Result<i32> {
    literal
        .parse()
        .map_err(|_| ColourError::malformed(codification, text))
}
