//! Error types for codification and conversion operations.

use thiserror::Error;

use crate::codification::CodificationKind;

/// Errors that can occur while building, parsing or converting colour codes.
#[derive(Error, Debug)]
pub enum ColourError {
    /// A numeric component lies outside its valid range
    #[error("{property} value is out of range {range}. (value={value})")]
    OutOfRange {
        /// Name of the offending property (e.g. "Red", "Hue")
        property: String,
        /// The rejected value, as given
        value: String,
        /// The valid range, rendered as `[min, max]`
        range: String,
    },

    /// A range whose bounds are equal cannot be used to (de)normalize
    #[error("Range has to contain at least one natural number. (Range: [{min}, {max}])")]
    DegenerateRange {
        /// Lower bound
        min: i32,
        /// Upper bound
        max: i32,
    },

    /// A min/max query was made over no values at all
    #[error("It's necessary to specify at least one number")]
    NoValues,

    /// A string that should hold a base-16 number does not
    #[error("'{value}' is not a hexadecimal number")]
    InvalidHexNumber {
        /// The rejected text
        value: String,
    },

    /// Text does not match the grammar of the requested codification
    #[error("Given expression doesn't match {codification} code. (value='{value}')")]
    Malformed {
        /// Codification whose grammar was applied
        codification: CodificationKind,
        /// The rejected text
        value: String,
    },

    /// A conversion was requested without a target codification
    #[error("You must indicate the target codification of the conversion")]
    MissingTarget,

    /// A registry was requested with no conversions at all
    #[error("You must provide a not empty collection of available conversions")]
    EmptyConversions,

    /// No direct or composed conversion links the two codifications
    #[error("There isn't any available conversion that converts {from} to {to}")]
    Unreachable {
        /// Codification of the input code
        from: CodificationKind,
        /// Requested codification
        to: CodificationKind,
    },

    /// A conversion was applied to a code of the wrong codification
    #[error("Conversion '{conversion}' expects {expected} but received {found}")]
    InputMismatch {
        /// Identifier of the conversion
        conversion: String,
        /// Declared input codification
        expected: CodificationKind,
        /// Codification actually received
        found: CodificationKind,
    },

    /// Two conversions whose intermediate codifications differ were chained
    #[error("Cannot chain a conversion producing {produced} into one consuming {consumed}")]
    IncompatibleComposition {
        /// Output codification of the first step
        produced: CodificationKind,
        /// Input codification of the second step
        consumed: CodificationKind,
    },

    /// A conversion produced a codification other than the one it declares
    #[error("Conversion '{conversion}' declares {expected} but produced {found}")]
    UnexpectedOutput {
        /// Identifier of the conversion
        conversion: String,
        /// Declared output codification
        expected: CodificationKind,
        /// Codification actually produced
        found: CodificationKind,
    },

    /// Text matched none of the CSS-accepted codifications
    #[error("'{value}' is not a valid CSS colour code")]
    NotCssColourCode {
        /// The rejected text
        value: String,
    },

    /// A web colour was built from a codification CSS does not accept
    #[error("{kind} is not accepted by CSS")]
    NotAcceptedByCss {
        /// The offending codification
        kind: CodificationKind,
    },

    /// Registry configuration written by a newer version of the format
    #[error("Unsupported config version: expected at most {expected}, found {found}")]
    UnsupportedConfigVersion {
        /// Newest supported version
        expected: u32,
        /// Version found in the document
        found: u32,
    },

    /// JSON parsing or serialization error
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ColourError {
    /// Create an out-of-range error for a property.
    pub fn out_of_range(
        property: impl Into<String>,
        value: impl ToString,
        range: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            property: property.into(),
            value: value.to_string(),
            range: range.into(),
        }
    }

    /// Create a malformed-text error for a codification.
    pub fn malformed(codification: CodificationKind, value: impl Into<String>) -> Self {
        Self::Malformed {
            codification,
            value: value.into(),
        }
    }

    /// Create an invalid hexadecimal number error.
    pub fn invalid_hex_number(value: impl Into<String>) -> Self {
        Self::InvalidHexNumber {
            value: value.into(),
        }
    }

    /// Whether this error means "the input is not a valid value for the
    /// codification" (malformed text or a component out of range), as
    /// opposed to a misuse of the engine.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::OutOfRange { .. })
    }

    /// Whether this error was raised by a grammar mismatch, before any
    /// numeric validation took place.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColourError>;
