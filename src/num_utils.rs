//! Numeric helpers shared by the codifications and conversions.
//!
//! Every codification stores its components normalized to `[0, 1]` and
//! exposes them on an integer scale (0-255, 0-100, 0-360). These helpers move
//! values between both worlds, plus the hexadecimal helpers used by
//! [`HexCode`](crate::HexCode).

use crate::error::{ColourError, Result};

/// Map `value` from `[min, max]` onto `[0, 1]`.
///
/// Fails if the range is degenerate (`min == max`) or `value` lies outside it.
pub fn normalize(min: i32, max: i32, value: i32) -> Result<f32> {
    if min == max {
        return Err(ColourError::DegenerateRange { min, max });
    }

    if !is_between(min, max, value) {
        return Err(ColourError::out_of_range(
            "Number",
            value,
            format!("[{}, {}]", min, max),
        ));
    }

    Ok((value - min) as f32 / (max - min) as f32)
}

/// Map `t` from `[0, 1]` onto the integer range `[min, max]`, rounding half up.
///
/// Fails if the range is degenerate (`min == max`) or `t` lies outside `[0, 1]`.
pub fn denormalize(min: i32, max: i32, t: f32) -> Result<i32> {
    if min == max {
        return Err(ColourError::DegenerateRange { min, max });
    }

    if !is_between(0.0, 1.0, t) {
        return Err(ColourError::out_of_range("Number", t, "[0, 1]"));
    }

    Ok(denormalize_unit(min, max, t))
}

/// Denormalize a component that has already been validated.
///
/// `t` is clamped to `[0, 1]`, so float noise never leaks out of the range.
pub(crate) fn denormalize_unit(min: i32, max: i32, t: f32) -> i32 {
    let t = clamp_unit(t);
    round_half_up(t * max as f32 + min as f32 * (1.0 - t)) as i32
}

/// Clamp to `[0, 1]`. NaN collapses to 0.
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Round `value` to `decimals` decimal places, half up.
pub fn round_to(value: f32, decimals: i32) -> f32 {
    let offset = 10f32.powi(decimals);
    round_half_up(value * offset) / offset
}

/// Largest of the given numbers.
pub fn max(values: &[f32]) -> Result<f32> {
    let (first, rest) = values.split_first().ok_or(ColourError::NoValues)?;
    Ok(rest
        .iter()
        .fold(*first, |acc, &v| if acc < v { v } else { acc }))
}

/// Smallest of the given numbers.
pub fn min(values: &[f32]) -> Result<f32> {
    let (first, rest) = values.split_first().ok_or(ColourError::NoValues)?;
    Ok(rest
        .iter()
        .fold(*first, |acc, &v| if acc > v { v } else { acc }))
}

/// Inclusive range check. `false` for NaN.
pub fn is_between<T: PartialOrd>(min: T, max: T, value: T) -> bool {
    min <= value && value <= max
}

/// Parse a base-16 number, case-insensitively.
pub fn hex_to_int(hex: &str) -> Result<u32> {
    if hex.is_empty() || hex.len() > 8 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColourError::invalid_hex_number(hex));
    }

    u32::from_str_radix(hex, 16).map_err(|_| ColourError::invalid_hex_number(hex))
}

/// Format a number in uppercase base 16, without padding.
pub fn int_to_hex(value: u32) -> String {
    format!("{:X}", value)
}

/// Format a number in uppercase base 16, left-padded with zeros to `width`.
pub fn int_to_hex_width(value: u32, width: usize) -> String {
    format!("{:0width$X}", value, width = width)
}
