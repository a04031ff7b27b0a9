//! colourcode - colour codifications and conversions
//!
//! Colours written as RGB, HSL, HSV (HSB), CMYK or hexadecimal codes, with
//! validated constructors, CSS and native text forms, and a conversion
//! registry that converts between any two codifications, chaining
//! conversions through RGB when no direct one exists.
//!
//! ```rust,ignore
//! use colourcode::{Colour, HexCode, HslCode};
//!
//! let red = Colour::new(HexCode::new("#FF0000")?);
//! let hsl: HslCode = red.as_code()?;
//! assert_eq!(hsl.to_css_code(), "hsl(0, 100%, 50%)");
//! ```

pub mod codification;
mod colour;
pub mod config;
mod constants;
pub mod conversion;
mod error;
pub mod num_utils;
mod web;

pub use codification::{
    AcceptedByCss, CmykCode, Codification, CodificationKind, ColourCode, HasOpacity, HexCode,
    HsbCode, HslCode, HsvCode, RgbCode,
};
pub use colour::Colour;
pub use config::{BuiltinConversion, CONFIG_VERSION, RegistryConfig};
pub use constants::{CHANNEL_MAX, DEGREES_MAX, PERCENT_MAX};
pub use conversion::{
    ColourConversion, ComposedConversion, ConversionRegistry, IdentityConversion,
};
pub use error::{ColourError, Result};
pub use web::{WebColour, from_css_text, is_css_colour_code};
