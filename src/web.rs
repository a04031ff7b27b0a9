//! CSS front door: colours read from and written as CSS text.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use crate::codification::{AcceptedByCss, CodificationKind, ColourCode, HexCode, HslCode, RgbCode};
use crate::colour::Colour;
use crate::conversion::ConversionRegistry;
use crate::error::{ColourError, Result};

/// A parser for one CSS-accepted codification.
type CssParser = (CodificationKind, fn(&str) -> Result<ColourCode>);

/// Parsers tried, in order, on CSS text.
const CSS_PARSERS: [CssParser; 3] = [
    (CodificationKind::Rgb, parse_rgb),
    (CodificationKind::Hex, parse_hex),
    (CodificationKind::Hsl, parse_hsl),
];

fn parse_rgb(text: &str) -> Result<ColourCode> {
    RgbCode::from_css(text).map(ColourCode::from)
}

fn parse_hex(text: &str) -> Result<ColourCode> {
    HexCode::new(text).map(ColourCode::from)
}

fn parse_hsl(text: &str) -> Result<ColourCode> {
    HslCode::from_css(text).map(ColourCode::from)
}

/// Run `parsers` in order and keep the first success.
///
/// A parser rejecting the text (malformed, or a component out of range)
/// hands over to the next one; any other error is returned as is.
fn parse_css_with(parsers: &[CssParser], text: &str) -> Result<Option<ColourCode>> {
    for (kind, parse) in parsers {
        match parse(text) {
            Ok(code) => {
                log::debug!("'{}' parsed as {}", text, kind);
                return Ok(Some(code));
            }
            Err(err) if err.is_rejection() => {
                log::trace!("'{}' is not {}: {}", text, kind, err);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(None)
}

fn parse_css(text: &str) -> Result<ColourCode> {
    parse_css_with(&CSS_PARSERS, text)?.ok_or_else(|| ColourError::NotCssColourCode {
        value: text.to_string(),
    })
}

fn is_css_with(parsers: &[CssParser], text: &str) -> Result<bool> {
    Ok(parse_css_with(parsers, text)?.is_some())
}

/// Whether `text` is a CSS colour: `rgb(...)`/`rgba(...)`, a hex code, or
/// `hsl(...)`/`hsla(...)`.
///
/// Text every parser rejects gives `Ok(false)`. A parser failing for any
/// other reason is a bug, and its error is returned.
pub fn is_css_colour_code(text: &str) -> Result<bool> {
    is_css_with(&CSS_PARSERS, text)
}

/// Read a colour from CSS text.
pub fn from_css_text(text: &str) -> Result<Colour> {
    Ok(Colour::new(parse_css(text)?))
}

/// A code in one of the codifications CSS accepts.
#[derive(Debug, Clone)]
enum CssCode {
    Rgb(RgbCode),
    Hsl(HslCode),
    Hex(HexCode),
}

impl CssCode {
    fn to_css_code(&self) -> String {
        match self {
            CssCode::Rgb(code) => code.to_css_code(),
            CssCode::Hsl(code) => code.to_css_code(),
            CssCode::Hex(code) => code.to_css_code(),
        }
    }
}

impl TryFrom<&ColourCode> for CssCode {
    type Error = ColourError;

    fn try_from(code: &ColourCode) -> Result<Self> {
        match code {
            ColourCode::Rgb(rgb) => Ok(CssCode::Rgb(*rgb)),
            ColourCode::Hsl(hsl) => Ok(CssCode::Hsl(*hsl)),
            ColourCode::Hex(hex) => Ok(CssCode::Hex(hex.clone())),
            ColourCode::Hsv(_) | ColourCode::Cmyk(_) => {
                Err(ColourError::NotAcceptedByCss { kind: code.kind() })
            }
        }
    }
}

/// A colour held in a codification CSS accepts (RGB, HSL or Hex).
///
/// Equality and hashing are those of the underlying [`Colour`].
#[derive(Debug, Clone)]
pub struct WebColour {
    css: CssCode,
    colour: Colour,
}

impl WebColour {
    /// Create a web colour using the shared default registry.
    ///
    /// Fails with [`ColourError::NotAcceptedByCss`] for HSV and CMYK codes.
    pub fn new(code: impl Into<ColourCode>) -> Result<Self> {
        Self::with_converter(code, ConversionRegistry::shared_default())
    }

    /// Create a web colour using a custom registry.
    pub fn with_converter(
        code: impl Into<ColourCode>,
        converter: Arc<ConversionRegistry>,
    ) -> Result<Self> {
        let code = code.into();
        let css = CssCode::try_from(&code)?;

        Ok(Self {
            css,
            colour: Colour::with_converter(code, converter),
        })
    }

    /// Parse CSS text.
    pub fn from_css(text: &str) -> Result<Self> {
        Self::new(parse_css(text)?)
    }

    /// CSS text of the held code.
    pub fn to_css_code(&self) -> String {
        self.css.to_css_code()
    }

    /// The underlying colour.
    pub fn colour(&self) -> &Colour {
        &self.colour
    }

    /// Convert into the underlying colour.
    pub fn into_colour(self) -> Colour {
        self.colour
    }
}

impl PartialEq for WebColour {
    fn eq(&self, other: &Self) -> bool {
        self.colour == other.colour
    }
}

impl Eq for WebColour {}

impl Hash for WebColour {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.colour.hash(state);
    }
}

impl From<WebColour> for Colour {
    fn from(web: WebColour) -> Self {
        web.colour
    }
}

impl fmt::Display for WebColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_code())
    }
}

impl FromStr for WebColour {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_css(s)
    }
}
