//! Codification-agnostic colour handle.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::codification::{Codification, CodificationKind, ColourCode, RgbCode};
use crate::conversion::ConversionRegistry;
use crate::error::Result;

/// A colour, whatever codification it was written in.
///
/// Holds one code and the registry used to read it in other codifications.
/// Conversions are computed on every request; the held code never changes.
///
/// Two colours are equal when they have the same RGB projection, so
/// `#FF0000` equals `hsl(0, 100%, 50%)`. When neither colour can reach RGB
/// through its registry the held codes are compared instead; a colour that
/// reaches RGB never equals one that does not.
#[derive(Debug, Clone)]
pub struct Colour {
    code: ColourCode,
    converter: Arc<ConversionRegistry>,
}

impl Colour {
    /// Create a colour using the shared default registry.
    pub fn new(code: impl Into<ColourCode>) -> Self {
        Self::with_converter(code, ConversionRegistry::shared_default())
    }

    /// Create a colour using a custom registry.
    pub fn with_converter(code: impl Into<ColourCode>, converter: Arc<ConversionRegistry>) -> Self {
        Self {
            code: code.into(),
            converter,
        }
    }

    /// The code this colour was created from.
    pub fn code(&self) -> &ColourCode {
        &self.code
    }

    /// The registry used for conversions.
    pub fn converter(&self) -> &Arc<ConversionRegistry> {
        &self.converter
    }

    /// Codification of the held code.
    pub fn kind(&self) -> CodificationKind {
        self.code.kind()
    }

    /// This colour written in `target`.
    pub fn convert(&self, target: CodificationKind) -> Result<ColourCode> {
        Ok(self.converter.convert(&self.code, target)?.into_owned())
    }

    /// This colour written in the codification `T`.
    ///
    /// ```rust,ignore
    /// let hsl: HslCode = Colour::new(HexCode::new("#F00")?).as_code()?;
    /// ```
    pub fn as_code<T: Codification>(&self) -> Result<T> {
        self.converter.convert_to(&self.code)
    }

    fn canonical(&self) -> Option<RgbCode> {
        match self.as_code::<RgbCode>() {
            Ok(rgb) => Some(rgb),
            Err(err) => {
                log::trace!("{} colour has no RGB projection: {}", self.kind(), err);
                None
            }
        }
    }
}

impl PartialEq for Colour {
    fn eq(&self, other: &Self) -> bool {
        match (self.canonical(), other.canonical()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.code == other.code,
            _ => false,
        }
    }
}

impl Eq for Colour {}

impl Hash for Colour {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.canonical() {
            Some(rgb) => rgb.hash(state),
            None => self.code.hash(state),
        }
    }
}

impl<T: Codification> From<T> for Colour {
    fn from(code: T) -> Self {
        Colour::new(code)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::codification::{CmykCode, HexCode, HslCode, HsvCode};
    use crate::conversion::{ColourConversion, IdentityConversion};
    use crate::error::ColourError;

    fn hex_only_registry() -> Arc<ConversionRegistry> {
        Arc::new(
            ConversionRegistry::from_conversions([
                Arc::new(IdentityConversion::new(CodificationKind::Hex))
                    as Arc<dyn ColourConversion>,
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_colour_keeps_its_code() {
        let hex = HexCode::new("#ABC").unwrap();
        let colour = Colour::new(hex.clone());

        assert_eq!(colour.code(), &ColourCode::from(hex));
        assert_eq!(colour.kind(), CodificationKind::Hex);

        let _ = colour.as_code::<HslCode>().unwrap();
        assert_eq!(colour.kind(), CodificationKind::Hex);
    }

    #[test]
    fn test_as_code() {
        let colour = Colour::new(HexCode::new("#FF0000").unwrap());

        let hsl = colour.as_code::<HslCode>().unwrap();
        assert_eq!(hsl, HslCode::from_degrees(0, 100, 50).unwrap());

        let cmyk = colour.as_code::<CmykCode>().unwrap();
        assert_eq!(cmyk.to_code(), "C0 M100 Y100 K0");

        let hex = colour.as_code::<HexCode>().unwrap();
        assert_eq!(hex.value(), "#FF0000");
    }

    #[test]
    fn test_convert_by_kind() {
        let colour = Colour::new(HsvCode::from_degrees(240, 100, 100).unwrap());
        let rgb = colour.convert(CodificationKind::Rgb).unwrap();
        assert_eq!(rgb, ColourCode::from(RgbCode::from_255(0, 0, 255).unwrap()));
    }

    #[test]
    fn test_equal_across_codifications() {
        let from_hex = Colour::new(HexCode::new("#FF0000").unwrap());
        let from_hsl = Colour::new(HslCode::from_degrees(0, 100, 50).unwrap());
        let from_cmyk = Colour::new(CmykCode::from_percentages(0, 100, 100, 0).unwrap());
        let green = Colour::new(RgbCode::from_255(0, 255, 0).unwrap());

        assert_eq!(from_hex, from_hsl);
        assert_eq!(from_hsl, from_cmyk);
        assert_ne!(from_hex, green);

        let set: HashSet<Colour> = [from_hex, from_hsl, from_cmyk, green].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_equality_ignores_registry_instance() {
        let shared = Colour::new(HexCode::new("#123456").unwrap());
        let own = Colour::with_converter(
            RgbCode::from_255(0x12, 0x34, 0x56).unwrap(),
            Arc::new(ConversionRegistry::new()),
        );
        assert_eq!(shared, own);
    }

    #[test]
    fn test_missing_path_is_reported() {
        let colour = Colour::with_converter(HexCode::new("#ABC").unwrap(), hex_only_registry());
        assert!(matches!(
            colour.as_code::<RgbCode>(),
            Err(ColourError::Unreachable { .. })
        ));
        // Same codification never needs a path.
        assert!(colour.as_code::<HexCode>().is_ok());
    }

    #[test]
    fn test_equality_without_rgb_projection() {
        let registry = hex_only_registry();
        let a = Colour::with_converter(HexCode::new("#AABBCC").unwrap(), Arc::clone(&registry));
        let b = Colour::with_converter(HexCode::new("#ABC").unwrap(), Arc::clone(&registry));
        let c = Colour::with_converter(HexCode::new("#ABD").unwrap(), registry);
        let reachable = Colour::new(HexCode::new("#ABC").unwrap());

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, reachable);
    }

    #[test]
    fn test_to_colour() {
        let rgb = RgbCode::from_255(1, 2, 3).unwrap();
        assert_eq!(rgb.to_colour(), Colour::from(rgb));
        assert_eq!(ColourCode::from(rgb).to_colour(), Colour::new(rgb));
    }
}
