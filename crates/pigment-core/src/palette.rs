//! The palette entry aggregate produced by extraction.

use crate::color::{HexColor, HslColor, RgbColor};

/// A location inside a raster, as percentages of its dimensions.
///
/// Percentages make the position independent of the raster's resolution, so
/// a UI can place a marker over a scaled-down preview without rescaling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One palette color in every representation a consumer needs.
///
/// The three color forms are computed once at assembly and describe the same
/// color; `hsl` is the authoritative form for harmony derivation. `position`
/// is `None` when no raster was available or the lookup failed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteEntry {
    pub hex: HexColor,
    pub rgb: RgbColor,
    pub hsl: HslColor,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub position: Option<Position>,
}

impl PaletteEntry {
    /// Build an entry from an RGB color, deriving the hex and HSL forms.
    pub fn from_rgb(rgb: RgbColor) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
            position: None,
        }
    }

    /// Build an entry from an HSL color, deriving the RGB and hex forms.
    ///
    /// The given HSL is stored as-is rather than re-derived from the rounded
    /// RGB, so chained harmony derivations never accumulate rounding drift.
    pub fn from_hsl(hsl: HslColor) -> Self {
        let rgb = hsl.to_rgb();
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl,
            position: None,
        }
    }

    /// Return the entry with its position set.
    pub fn with_position(mut self, position: Option<Position>) -> Self {
        self.position = position;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_derives_all_forms() {
        let entry = PaletteEntry::from_rgb(RgbColor::new(255, 87, 51));
        assert_eq!(entry.hex.to_string(), "#FF5733");
        assert_eq!(entry.rgb, RgbColor::new(255, 87, 51));
        assert_eq!(entry.hsl, HslColor::new(11, 100, 60));
        assert_eq!(entry.position, None);
    }

    #[test]
    fn test_from_hsl_keeps_given_hsl() {
        let hsl = HslColor::new(190, 50, 50);
        let entry = PaletteEntry::from_hsl(hsl);
        // The stored HSL is the input, not a re-derivation from rounded RGB.
        assert_eq!(entry.hsl, hsl);
        assert_eq!(entry.rgb, hsl.to_rgb());
        assert_eq!(entry.hex, hsl.to_rgb().to_hex());
    }

    #[test]
    fn test_with_position() {
        let entry = PaletteEntry::from_rgb(RgbColor::new(1, 2, 3))
            .with_position(Some(Position { x: 25.0, y: 75.0 }));
        assert_eq!(entry.position, Some(Position { x: 25.0, y: 75.0 }));
    }
}
