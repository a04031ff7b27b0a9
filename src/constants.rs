//! Scales on which codification components are exposed to callers.

/// Upper bound of an 8-bit colour channel.
pub const CHANNEL_MAX: i32 = 255;

/// Upper bound of a percentage (saturation, lightness, CMYK inks, alpha).
pub const PERCENT_MAX: i32 = 100;

/// Upper bound of a hue, in degrees.
pub const DEGREES_MAX: i32 = 360;

/// Decimal digits used when rendering alpha in CSS text.
pub const CSS_ALPHA_DECIMALS: usize = 2;
