//! Export formats for extracted palettes.
//!
//! Supported formats:
//! - JSON (the full palette structure, pretty-printed)
//! - CSS (custom properties on `:root`)

pub mod css;
pub mod json;

use pigment_core::{ExportError, PaletteEntry};

/// Export a palette to pretty-printed JSON.
pub fn export_json(palette: &[PaletteEntry]) -> Result<String, ExportError> {
    json::export(palette)
}

/// Export a palette to CSS custom properties.
pub fn export_css(palette: &[PaletteEntry]) -> String {
    css::export(palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pigment_core::RgbColor;

    fn sample_palette() -> Vec<PaletteEntry> {
        vec![
            PaletteEntry::from_rgb(RgbColor::new(255, 87, 51)),
            PaletteEntry::from_rgb(RgbColor::new(51, 255, 87)),
        ]
    }

    #[test]
    fn test_export_json() {
        let json = export_json(&sample_palette()).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("#FF5733"));
    }

    #[test]
    fn test_export_css() {
        let css = export_css(&sample_palette());
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-2: #33FF57;"));
    }
}
