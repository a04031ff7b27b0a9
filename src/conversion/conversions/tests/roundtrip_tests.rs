//! Round trips through RGB using only direct conversions.

use super::fixtures::{all_colours, opaque_colours};
use crate::codification::{CodificationKind, ColourCode};
use crate::conversion::ConversionRegistry;
use crate::conversion::conversions::{
    CmykToRgb, HexToRgb, HslToRgb, HsvToRgb, RgbToCmyk, RgbToHex, RgbToHsl, RgbToHsv,
};
use crate::conversion::traits::ColourConversion;

/// The direct `kind -> RGB` and `RGB -> kind` pair.
fn rgb_pair(kind: CodificationKind) -> (Box<dyn ColourConversion>, Box<dyn ColourConversion>) {
    match kind {
        CodificationKind::Hex => (Box::new(HexToRgb), Box::new(RgbToHex)),
        CodificationKind::Hsl => (Box::new(HslToRgb), Box::new(RgbToHsl)),
        CodificationKind::Hsv => (Box::new(HsvToRgb), Box::new(RgbToHsv)),
        CodificationKind::Cmyk => (Box::new(CmykToRgb), Box::new(RgbToCmyk)),
        CodificationKind::Rgb => unreachable!("RGB is the hub"),
    }
}

#[test]
fn test_every_code_converts_to_its_rgb() {
    for fixture in all_colours() {
        for code in fixture.codes() {
            if code.kind() == CodificationKind::Rgb {
                continue;
            }
            let (to_rgb, _) = rgb_pair(code.kind());
            let rgb = to_rgb.convert(&code).unwrap();
            assert_eq!(
                rgb,
                ColourCode::from(fixture.rgb),
                "{} {} -> RGB",
                fixture.name,
                code.kind()
            );
        }
    }
}

#[test]
fn test_rgb_converts_to_every_code() {
    for fixture in all_colours() {
        let rgb = ColourCode::from(fixture.rgb);
        for expected in fixture.codes() {
            if expected.kind() == CodificationKind::Rgb {
                continue;
            }
            let (_, from_rgb) = rgb_pair(expected.kind());
            assert_eq!(
                from_rgb.convert(&rgb).unwrap(),
                expected,
                "{} RGB -> {}",
                fixture.name,
                expected.kind()
            );
        }
    }
}

#[test]
fn test_round_trip_through_rgb_restores_code() {
    for fixture in all_colours() {
        for code in fixture.codes() {
            if code.kind() == CodificationKind::Rgb {
                continue;
            }
            let (to_rgb, from_rgb) = rgb_pair(code.kind());
            let back = from_rgb.convert(&to_rgb.convert(&code).unwrap()).unwrap();
            assert_eq!(back, code, "{} {} round trip", fixture.name, code.kind());
        }
    }
}

#[test]
fn test_registry_round_trips_match_direct_conversions() {
    let registry = ConversionRegistry::new();

    for fixture in opaque_colours() {
        for code in fixture.codes() {
            let rgb = registry.convert(&code, CodificationKind::Rgb).unwrap();
            let back = registry.convert(&rgb, code.kind()).unwrap();
            assert_eq!(*back, code, "{} {} via registry", fixture.name, code.kind());
        }
    }
}

#[test]
fn test_hex_alpha_survives_round_trip() {
    let registry = ConversionRegistry::new();

    for fixture in all_colours() {
        let hex = ColourCode::from(fixture.hex.clone());
        let rgb = registry.convert(&hex, CodificationKind::Rgb).unwrap();
        let back = registry.convert(&rgb, CodificationKind::Hex).unwrap();
        match back.as_ref() {
            ColourCode::Hex(code) => assert_eq!(code.value(), fixture.hex.value()),
            other => panic!("expected a hex code, got {:?}", other),
        }
    }
}
