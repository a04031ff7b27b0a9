//! Trait definitions for conversions between codifications.

use std::fmt;
use std::sync::Arc;

use crate::codification::{Codification, CodificationKind, ColourCode};
use crate::error::{ColourError, Result};

/// A pure mapping from one codification to another.
///
/// Each built-in conversion (Hex to RGB, RGB to CMYK, ...) implements this
/// trait. The registry only relies on the declared [`input`](Self::input) and
/// [`output`](Self::output) kinds to find paths, then calls
/// [`convert`](Self::convert).
pub trait ColourConversion: Send + Sync {
    /// Identifier of this conversion (e.g. `"hex_to_rgb"`).
    fn id(&self) -> &str;

    /// Codification accepted by [`convert`](Self::convert).
    fn input(&self) -> CodificationKind;

    /// Codification produced by [`convert`](Self::convert).
    fn output(&self) -> CodificationKind;

    /// Convert a code of the [`input`](Self::input) kind.
    ///
    /// Never fails for a well-formed code of the declared input kind; a code
    /// of any other kind yields [`ColourError::InputMismatch`].
    fn convert(&self, code: &ColourCode) -> Result<ColourCode>;
}

impl fmt::Debug for dyn ColourConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} -> {})", self.id(), self.input(), self.output())
    }
}

/// Borrow the typed input of a conversion out of a [`ColourCode`].
pub(crate) fn expect_input<'a, T: Codification>(
    conversion: &dyn ColourConversion,
    code: &'a ColourCode,
) -> Result<&'a T> {
    T::from_code_ref(code).ok_or_else(|| ColourError::InputMismatch {
        conversion: conversion.id().to_string(),
        expected: T::KIND,
        found: code.kind(),
    })
}

/// A conversion that returns its input unchanged.
#[derive(Debug, Clone, Copy)]
pub struct IdentityConversion {
    kind: CodificationKind,
}

impl IdentityConversion {
    /// Create the identity conversion of a codification.
    pub fn new(kind: CodificationKind) -> Self {
        Self { kind }
    }
}

impl ColourConversion for IdentityConversion {
    fn id(&self) -> &str {
        "identity"
    }

    fn input(&self) -> CodificationKind {
        self.kind
    }

    fn output(&self) -> CodificationKind {
        self.kind
    }

    fn convert(&self, code: &ColourCode) -> Result<ColourCode> {
        if code.kind() != self.kind {
            return Err(ColourError::InputMismatch {
                conversion: self.id().to_string(),
                expected: self.kind,
                found: code.kind(),
            });
        }
        Ok(code.clone())
    }
}

/// Two conversions applied in sequence: `first`, then `then`.
///
/// The declared input is the input of `first` and the declared output is the
/// output of `then`.
pub struct ComposedConversion {
    id: String,
    first: Arc<dyn ColourConversion>,
    then: Arc<dyn ColourConversion>,
}

impl ComposedConversion {
    /// Chain two conversions. Fails if `first` does not produce what `then`
    /// consumes.
    pub fn new(first: Arc<dyn ColourConversion>, then: Arc<dyn ColourConversion>) -> Result<Self> {
        if first.output() != then.input() {
            return Err(ColourError::IncompatibleComposition {
                produced: first.output(),
                consumed: then.input(),
            });
        }

        Ok(Self {
            id: format!("{}+{}", first.id(), then.id()),
            first,
            then,
        })
    }

    /// The step applied first.
    pub fn first(&self) -> &Arc<dyn ColourConversion> {
        &self.first
    }

    /// The step applied to the result of [`first`](Self::first).
    pub fn then(&self) -> &Arc<dyn ColourConversion> {
        &self.then
    }
}

impl fmt::Debug for ComposedConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedConversion")
            .field("id", &self.id)
            .field("input", &self.input())
            .field("output", &self.output())
            .finish()
    }
}

impl ColourConversion for ComposedConversion {
    fn id(&self) -> &str {
        &self.id
    }

    fn input(&self) -> CodificationKind {
        self.first.input()
    }

    fn output(&self) -> CodificationKind {
        self.then.output()
    }

    fn convert(&self, code: &ColourCode) -> Result<ColourCode> {
        let intermediate = self.first.convert(code)?;
        self.then.convert(&intermediate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codification::{HexCode, HslCode, RgbCode};
    use crate::conversion::conversions::{HexToRgb, RgbToHex, RgbToHsl};

    #[test]
    fn test_identity_returns_input() {
        let identity = IdentityConversion::new(CodificationKind::Hex);
        let code: ColourCode = HexCode::new("#ABC").unwrap().into();

        assert_eq!(identity.input(), CodificationKind::Hex);
        assert_eq!(identity.output(), CodificationKind::Hex);
        assert_eq!(identity.convert(&code).unwrap(), code);
    }

    #[test]
    fn test_identity_rejects_other_kinds() {
        let identity = IdentityConversion::new(CodificationKind::Hex);
        let code: ColourCode = RgbCode::from_255(1, 2, 3).unwrap().into();

        assert!(matches!(
            identity.convert(&code),
            Err(ColourError::InputMismatch { .. })
        ));
    }

    #[test]
    fn test_composed_endpoints_and_execution() {
        let composed = ComposedConversion::new(Arc::new(HexToRgb), Arc::new(RgbToHsl)).unwrap();

        assert_eq!(composed.input(), CodificationKind::Hex);
        assert_eq!(composed.output(), CodificationKind::Hsl);
        assert_eq!(composed.id(), "hex_to_rgb+rgb_to_hsl");

        let code: ColourCode = HexCode::new("#FF0000").unwrap().into();
        let result = composed.convert(&code).unwrap();
        assert_eq!(
            result,
            ColourCode::from(HslCode::from_degrees(0, 100, 50).unwrap())
        );
    }

    #[test]
    fn test_composed_rejects_mismatched_steps() {
        let result = ComposedConversion::new(Arc::new(HexToRgb), Arc::new(HexToRgb));
        assert!(matches!(
            result,
            Err(ColourError::IncompatibleComposition {
                produced: CodificationKind::Rgb,
                consumed: CodificationKind::Hex,
            })
        ));
    }

    #[test]
    fn test_composed_can_nest() {
        let there = ComposedConversion::new(Arc::new(HexToRgb), Arc::new(RgbToHex)).unwrap();
        let back = ComposedConversion::new(Arc::new(there), Arc::new(HexToRgb)).unwrap();

        assert_eq!(back.input(), CodificationKind::Hex);
        assert_eq!(back.output(), CodificationKind::Rgb);

        let code: ColourCode = HexCode::new("#12345678").unwrap().into();
        let rgb = back.convert(&code).unwrap();
        assert_eq!(rgb.kind(), CodificationKind::Rgb);
    }
}
