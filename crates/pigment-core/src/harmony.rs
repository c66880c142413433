//! Harmony derivation: related colors found by rotating hue.
//!
//! All derivation happens in HSL on the entry's stored hue; saturation and
//! lightness carry over unchanged. Derived entries get fresh RGB and hex
//! forms and no position, since they are computed rather than sampled.

use crate::color::HslColor;
use crate::palette::PaletteEntry;

/// Hue offset of the complementary color, in degrees.
pub const COMPLEMENTARY_ANGLE: i32 = 180;

/// Default hue offset for analogous colors, in degrees.
pub const ANALOGOUS_ANGLE: i32 = 30;

/// The complementary color: hue rotated half way round the wheel.
pub fn complementary(color: &PaletteEntry) -> PaletteEntry {
    rotate(color.hsl, COMPLEMENTARY_ANGLE as i64)
}

/// The two analogous colors at `-angle` and `+angle` degrees, in that order.
pub fn analogous(color: &PaletteEntry, angle: i32) -> [PaletteEntry; 2] {
    let angle = angle as i64;
    [rotate(color.hsl, -angle), rotate(color.hsl, angle)]
}

// Offsets are widened to i64 so negating or adding any i32 angle stays
// defined; rem_euclid brings the hue back into [0, 360).
fn rotate(hsl: HslColor, offset: i64) -> PaletteEntry {
    let h = (hsl.h as i64 + offset).rem_euclid(360) as u16;
    PaletteEntry::from_hsl(HslColor { h, ..hsl })
}
