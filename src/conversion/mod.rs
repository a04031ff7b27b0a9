//! Conversion between codifications.
//!
//! Each conversion maps one [`CodificationKind`](crate::CodificationKind) to
//! another. The [`ConversionRegistry`] holds an ordered list of them and, when
//! no single conversion links two kinds, chains several together.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use colourcode::{CodificationKind, ConversionRegistry, HexCode, HslCode};
//!
//! let registry = ConversionRegistry::new();
//! let red = HexCode::new("#FF0000")?.into();
//!
//! // Hex -> RGB -> HSL
//! let hsl: HslCode = registry.convert_to(&red)?;
//! ```

pub mod conversions;
mod registry;
mod traits;

pub use conversions::default_conversions;
pub use registry::ConversionRegistry;
pub use traits::{ColourConversion, ComposedConversion, IdentityConversion};
