//! JavaScript-facing mirror types.

use pigment_core::{HslColor, PaletteEntry};
use serde::Deserialize;

/// An incoming palette color for harmony derivation.
///
/// Only the HSL form matters: rotation happens on the stored hue, and the
/// derived entry's RGB and hex are recomputed from the rotated HSL. Other
/// fields on the JavaScript object are ignored.
#[derive(Debug, Deserialize)]
pub struct ColorInputJs {
    pub hsl: HslColor,
}

impl ColorInputJs {
    pub fn into_entry(self) -> PaletteEntry {
        PaletteEntry::from_hsl(self.hsl)
    }
}
