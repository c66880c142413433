//! JSON palette export.

use pigment_core::{ExportError, PaletteEntry};

/// Serialize the palette as pretty-printed JSON (two-space indent).
///
/// Entries keep their palette order; entries without a position omit the
/// field entirely rather than writing `null`.
pub fn export(palette: &[PaletteEntry]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(palette).map_err(|e| ExportError::Json {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pigment_core::{PaletteEntry, Position, RgbColor};

    #[test]
    fn test_exports_all_color_forms() {
        let palette = vec![PaletteEntry::from_rgb(RgbColor::new(255, 87, 51))];
        let json = export(&palette).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["hex"], "#FF5733");
        assert_eq!(parsed[0]["rgb"]["r"], 255);
        assert_eq!(parsed[0]["rgb"]["g"], 87);
        assert_eq!(parsed[0]["rgb"]["b"], 51);
        assert_eq!(parsed[0]["hsl"]["h"], 11);
        assert_eq!(parsed[0]["hsl"]["s"], 100);
        assert_eq!(parsed[0]["hsl"]["l"], 60);
    }

    #[test]
    fn test_position_is_omitted_when_absent() {
        let palette = vec![PaletteEntry::from_rgb(RgbColor::new(0, 0, 0))];
        let json = export(&palette).unwrap();
        assert!(!json.contains("position"));
    }

    #[test]
    fn test_position_is_written_when_present() {
        let entry = PaletteEntry::from_rgb(RgbColor::new(0, 0, 0))
            .with_position(Some(Position { x: 25.0, y: 75.0 }));
        let json = export(&[entry]).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["position"]["x"], 25.0);
        assert_eq!(parsed[0]["position"]["y"], 75.0);
    }

    #[test]
    fn test_round_trips_through_serde() {
        let palette = vec![
            PaletteEntry::from_rgb(RgbColor::new(255, 87, 51))
                .with_position(Some(Position { x: 10.0, y: 20.0 })),
            PaletteEntry::from_rgb(RgbColor::new(0, 128, 255)),
        ];
        let json = export(&palette).unwrap();
        let back: Vec<PaletteEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }

    #[test]
    fn test_uses_two_space_indent() {
        let palette = vec![PaletteEntry::from_rgb(RgbColor::new(1, 2, 3))];
        let json = export(&palette).unwrap();
        assert!(json.contains("\n    \"hex\""));
    }
}
