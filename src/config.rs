//! Registry configuration.
//!
//! A [`RegistryConfig`] lists, in registration order, the built-in conversions
//! a [`ConversionRegistry`] should hold. It can be exported to and imported
//! from JSON so an application can ship its own conversion set.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::codification::CodificationKind;
use crate::conversion::conversions::{
    CmykToRgb, HexToRgb, HslToRgb, HsvToRgb, RgbToCmyk, RgbToHex, RgbToHsl, RgbToHsv,
};
use crate::conversion::{ColourConversion, ConversionRegistry, IdentityConversion};
use crate::error::{ColourError, Result};

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// A built-in conversion, as named in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinConversion {
    HexToRgb,
    RgbToHex,
    CmykToRgb,
    RgbToCmyk,
    HslToRgb,
    RgbToHsl,
    HsvToRgb,
    RgbToHsv,
    /// Identity of a single codification
    Identity(CodificationKind),
}

impl BuiltinConversion {
    /// The built-in conversions of the default registry, in order.
    pub fn defaults() -> &'static [BuiltinConversion] {
        &[
            BuiltinConversion::HexToRgb,
            BuiltinConversion::RgbToHex,
            BuiltinConversion::CmykToRgb,
            BuiltinConversion::RgbToCmyk,
            BuiltinConversion::HslToRgb,
            BuiltinConversion::RgbToHsl,
            BuiltinConversion::HsvToRgb,
            BuiltinConversion::RgbToHsv,
        ]
    }

    /// Create the conversion.
    pub fn instantiate(&self) -> Arc<dyn ColourConversion> {
        match self {
            BuiltinConversion::HexToRgb => Arc::new(HexToRgb),
            BuiltinConversion::RgbToHex => Arc::new(RgbToHex),
            BuiltinConversion::CmykToRgb => Arc::new(CmykToRgb),
            BuiltinConversion::RgbToCmyk => Arc::new(RgbToCmyk),
            BuiltinConversion::HslToRgb => Arc::new(HslToRgb),
            BuiltinConversion::RgbToHsl => Arc::new(RgbToHsl),
            BuiltinConversion::HsvToRgb => Arc::new(HsvToRgb),
            BuiltinConversion::RgbToHsv => Arc::new(RgbToHsv),
            BuiltinConversion::Identity(kind) => Arc::new(IdentityConversion::new(*kind)),
        }
    }
}

/// Which conversions a registry holds, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Conversions, in registration order
    pub conversions: Vec<BuiltinConversion>,
}

impl RegistryConfig {
    /// Create a configuration listing the default conversions.
    pub fn new() -> Self {
        Self::with_conversions(BuiltinConversion::defaults().to_vec())
    }

    /// Create a configuration listing the given conversions.
    pub fn with_conversions(conversions: Vec<BuiltinConversion>) -> Self {
        Self {
            version: CONFIG_VERSION,
            conversions,
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ColourError::UnsupportedConfigVersion {
                expected: CONFIG_VERSION,
                found: config.version,
            });
        }

        Ok(config)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionRegistry {
    /// Build a registry from a configuration.
    ///
    /// Fails with [`ColourError::EmptyConversions`] if the configuration lists
    /// no conversion.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        Self::from_conversions(config.conversions.iter().map(BuiltinConversion::instantiate))
    }
}
