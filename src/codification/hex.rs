//! Hexadecimal codification.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::{AcceptedByCss, CodificationKind, HasOpacity};
use crate::constants::CHANNEL_MAX;
use crate::error::{ColourError, Result};
use crate::num_utils;

/// `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`, with an optional `#`.
static HEX_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{4}|[0-9a-fA-F]{3})$")
        .expect("Invalid hex code regex")
});

/// A colour written as a hexadecimal string.
///
/// The digits are kept uppercase and exactly as given (simplified or not,
/// with or without explicit alpha). Equality ignores both kinds of
/// redundancy: `#ABCF`, `#AABBCCFF` and `#AABBCC` are all equal.
#[derive(Debug, Clone)]
pub struct HexCode {
    digits: String,
    /// Red, green, blue and alpha on the 0-255 scale.
    channels: [i32; 4],
}

impl HexCode {
    /// Parse a hex code such as `"#fa39e4"`, `"ABC"` or `"#AABBCC80"`.
    pub fn new(code: &str) -> Result<Self> {
        const KIND: CodificationKind = CodificationKind::Hex;

        if code.trim().is_empty() {
            return Err(ColourError::malformed(KIND, code));
        }

        let captures = HEX_CODE_PATTERN
            .captures(code)
            .ok_or_else(|| ColourError::malformed(KIND, code))?;
        let digits = captures[1].to_ascii_uppercase();
        let channels = Self::parse_channels(&Self::expand(&digits))?;

        Ok(Self { digits, channels })
    }

    fn parse_channels(expanded: &str) -> Result<[i32; 4]> {
        let channel = |i: usize| -> Result<i32> {
            Ok(num_utils::hex_to_int(&expanded[i * 2..i * 2 + 2])? as i32)
        };
        let alpha = if expanded.len() == 8 {
            channel(3)?
        } else {
            CHANNEL_MAX
        };

        Ok([channel(0)?, channel(1)?, channel(2)?, alpha])
    }

    fn expand(digits: &str) -> String {
        if digits.len() == 3 || digits.len() == 4 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        }
    }

    /// The code with its leading `#` (e.g. `"#FA39E4"`).
    pub fn value(&self) -> String {
        format!("#{}", self.digits)
    }

    /// The uppercase digits without `#`.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The 6- or 8-digit form of the code, without `#`.
    pub fn expanded(&self) -> String {
        Self::expand(&self.digits)
    }

    /// Whether the code uses the short form, where each digit stands for two.
    ///
    /// `#AF3` simplifies `#AAFF33`; `#ABFF33` is not simplified.
    pub fn is_simplified(&self) -> bool {
        self.digits.len() == 3 || self.digits.len() == 4
    }

    /// Whether the code spells out its alpha (`#ABF3`, `#ABFF39FA`).
    pub fn has_explicit_opacity(&self) -> bool {
        self.digits.len() == 4 || self.digits.len() == 8
    }

    /// Red channel on the 0-255 scale.
    pub fn red255(&self) -> i32 {
        self.channels[0]
    }

    /// Green channel on the 0-255 scale.
    pub fn green255(&self) -> i32 {
        self.channels[1]
    }

    /// Blue channel on the 0-255 scale.
    pub fn blue255(&self) -> i32 {
        self.channels[2]
    }

    /// Alpha on the 0-255 scale; 255 when the opacity is implicit.
    pub fn alpha255(&self) -> i32 {
        self.channels[3]
    }

    /// Canonical form used for equality and hashing.
    fn reduced(&self) -> String {
        let mut value = self.digits.clone();

        let redundant_alpha = (value.len() == 4 && value.ends_with('F'))
            || (value.len() == 8 && value.ends_with("FF"));
        if redundant_alpha {
            let colour_len = if value.len() == 4 { 3 } else { 6 };
            value.truncate(colour_len);
        }

        if Self::can_be_simplified(&value) {
            value = value.chars().step_by(2).collect();
        }

        value
    }

    fn can_be_simplified(value: &str) -> bool {
        if value.len() != 6 && value.len() != 8 {
            return false;
        }

        value
            .as_bytes()
            .chunks(2)
            .all(|pair| pair[0] == pair[1])
    }
}

impl HasOpacity for HexCode {
    fn alpha(&self) -> f32 {
        self.alpha255() as f32 / CHANNEL_MAX as f32
    }
}

impl AcceptedByCss for HexCode {
    fn to_css_code(&self) -> String {
        self.value()
    }
}

impl PartialEq for HexCode {
    fn eq(&self, other: &Self) -> bool {
        self.reduced() == other.reduced()
    }
}

impl Eq for HexCode {}

impl Hash for HexCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reduced().hash(state);
    }
}

impl fmt::Display for HexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

impl FromStr for HexCode {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
