//! CMYK codification.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::{CodificationKind, check_unit, normalize_scaled, parse_int};
use crate::constants::PERCENT_MAX;
use crate::error::{ColourError, Result};
use crate::num_utils::denormalize_unit;

/// `C<c> M<m> Y<y> K<k>`
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^C([0-9]{1,3}) M([0-9]{1,3}) Y([0-9]{1,3}) K([0-9]{1,3})$")
        .expect("Invalid cmyk regex")
});

/// A colour as cyan, magenta, yellow and black ink coverage.
///
/// CMYK is a print model and carries no opacity.
#[derive(Debug, Clone, Copy)]
pub struct CmykCode {
    cyan: f32,
    magenta: f32,
    yellow: f32,
    black: f32,
}

impl CmykCode {
    /// Create a code from normalized ink coverages.
    pub fn new(cyan: f32, magenta: f32, yellow: f32, black: f32) -> Result<Self> {
        Ok(Self {
            cyan: check_unit(cyan, "Cyan")?,
            magenta: check_unit(magenta, "Magenta")?,
            yellow: check_unit(yellow, "Yellow")?,
            black: check_unit(black, "Black")?,
        })
    }

    /// Create a code from ink percentages (0-100).
    pub fn from_percentages(cyan: i32, magenta: i32, yellow: i32, black: i32) -> Result<Self> {
        Self::new(
            normalize_scaled(cyan, PERCENT_MAX, "Cyan")?,
            normalize_scaled(magenta, PERCENT_MAX, "Magenta")?,
            normalize_scaled(yellow, PERCENT_MAX, "Yellow")?,
            normalize_scaled(black, PERCENT_MAX, "Black")?,
        )
    }

    /// Parse the native `C25 M50 Y75 K44` notation.
    pub fn from_code(code: &str) -> Result<Self> {
        const KIND: CodificationKind = CodificationKind::Cmyk;

        let captures = CODE_PATTERN
            .captures(code)
            .ok_or_else(|| ColourError::malformed(KIND, code))?;

        Self::from_percentages(
            parse_int(&captures[1], KIND, code)?,
            parse_int(&captures[2], KIND, code)?,
            parse_int(&captures[3], KIND, code)?,
            parse_int(&captures[4], KIND, code)?,
        )
    }

    /// Render the native notation.
    pub fn to_code(&self) -> String {
        format!(
            "C{} M{} Y{} K{}",
            self.cyan_percentage(),
            self.magenta_percentage(),
            self.yellow_percentage(),
            self.black_percentage()
        )
    }

    /// Normalized cyan.
    pub fn cyan(&self) -> f32 {
        self.cyan
    }

    /// Normalized magenta.
    pub fn magenta(&self) -> f32 {
        self.magenta
    }

    /// Normalized yellow.
    pub fn yellow(&self) -> f32 {
        self.yellow
    }

    /// Normalized black (key).
    pub fn black(&self) -> f32 {
        self.black
    }

    /// Cyan percentage (0-100).
    pub fn cyan_percentage(&self) -> i32 {
        denormalize_unit(0, PERCENT_MAX, self.cyan)
    }

    /// Magenta percentage (0-100).
    pub fn magenta_percentage(&self) -> i32 {
        denormalize_unit(0, PERCENT_MAX, self.magenta)
    }

    /// Yellow percentage (0-100).
    pub fn yellow_percentage(&self) -> i32 {
        denormalize_unit(0, PERCENT_MAX, self.yellow)
    }

    /// Black percentage (0-100).
    pub fn black_percentage(&self) -> i32 {
        denormalize_unit(0, PERCENT_MAX, self.black)
    }

    fn comparison_key(&self) -> (i32, i32, i32, i32) {
        (
            self.cyan_percentage(),
            self.magenta_percentage(),
            self.yellow_percentage(),
            self.black_percentage(),
        )
    }
}

impl PartialEq for CmykCode {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for CmykCode {}

impl Hash for CmykCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

impl fmt::Display for CmykCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

impl FromStr for CmykCode {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_code() {
        let cmyk = CmykCode::new(0.25, 0.5, 0.75, 0.44).unwrap();
        assert_eq!(cmyk.to_code(), "C25 M50 Y75 K44");
        assert_eq!(cmyk.to_string(), "C25 M50 Y75 K44");
    }

    #[test]
    fn test_from_code() {
        let cmyk = CmykCode::from_code("C10 M0 Y100 K7").unwrap();
        assert_eq!(cmyk.cyan_percentage(), 10);
        assert_eq!(cmyk.magenta_percentage(), 0);
        assert_eq!(cmyk.yellow_percentage(), 100);
        assert_eq!(cmyk.black_percentage(), 7);
        assert_eq!(cmyk.to_code(), "C10 M0 Y100 K7");
    }

    #[test]
    fn test_from_code_malformed() {
        for text in [
            "",
            "C10 M0 Y100",
            "c10 m0 y100 k7",
            "C10  M0 Y100 K7",
            "C10,M0,Y100,K7",
            "C-1 M0 Y0 K0",
            "C1000 M0 Y0 K0",
        ] {
            let err = CmykCode::from_code(text).unwrap_err();
            assert!(err.is_malformed(), "{} should be malformed", text);
        }
    }

    #[test]
    fn test_from_code_out_of_range() {
        let err = CmykCode::from_code("C101 M0 Y0 K0").unwrap_err();
        assert!(matches!(err, ColourError::OutOfRange { .. }));
    }

    #[test]
    fn test_boundaries() {
        assert!(CmykCode::from_percentages(0, 0, 0, 0).is_ok());
        assert!(CmykCode::from_percentages(100, 100, 100, 100).is_ok());
        assert!(CmykCode::from_percentages(101, 0, 0, 0).is_err());
        assert!(CmykCode::from_percentages(0, 0, 0, -1).is_err());
        assert!(CmykCode::new(1.0, 1.0, 1.0, 1.0).is_ok());
        assert!(CmykCode::new(0.0, 0.0, 1.0001, 0.0).is_err());
        assert!(CmykCode::new(0.0, -0.0001, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_equality_on_percentages() {
        let a = CmykCode::from_percentages(20, 40, 60, 80).unwrap();
        let b = CmykCode::new(0.2001, 0.3999, 0.6, 0.8).unwrap();
        assert_eq!(a, b);
    }
}
