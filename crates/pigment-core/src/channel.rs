//! Channel validation for untyped RGB input.
//!
//! Inside the engine RGB channels live in [`u8`], so validity is a type-level
//! guarantee. Values arriving from untyped boundaries (JavaScript numbers,
//! JSON, raw quantizer output) pass through here first; nothing is clamped or
//! rounded on the way in.

use crate::error::ColorError;

/// Check whether a value is a valid RGB channel: an integer in `0..=255`.
///
/// Fractional values are rejected rather than rounded, so `12.5` is invalid
/// even though it lies inside the range. `NaN` and infinities are invalid.
pub fn is_valid(value: f64) -> bool {
    value.fract() == 0.0 && (0.0..=255.0).contains(&value)
}

/// Validate a named channel value, returning it as a byte.
pub fn validate(channel: &'static str, value: f64) -> Result<u8, ColorError> {
    if is_valid(value) {
        Ok(value as u8)
    } else {
        Err(ColorError::InvalidChannel { channel, value })
    }
}
