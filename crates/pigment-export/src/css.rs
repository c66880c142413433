//! CSS custom-property palette export.

use pigment_core::PaletteEntry;

/// Render the palette as CSS custom properties on `:root`.
///
/// Each color contributes three properties, numbered from 1 in palette
/// order: the hex value, the bare RGB channels, and the bare HSL components.
/// The bare forms slot into `rgb(var(--color-1-rgb))`-style usage.
pub fn export(palette: &[PaletteEntry]) -> String {
    let mut css = String::from(":root {\n");

    for (index, entry) in palette.iter().enumerate() {
        let n = index + 1;
        css.push_str(&format!("  --color-{}: {};\n", n, entry.hex));
        css.push_str(&format!(
            "  --color-{}-rgb: {}, {}, {};\n",
            n, entry.rgb.r, entry.rgb.g, entry.rgb.b
        ));
        css.push_str(&format!(
            "  --color-{}-hsl: {}, {}%, {}%;\n",
            n, entry.hsl.h, entry.hsl.s, entry.hsl.l
        ));
    }

    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use pigment_core::RgbColor;

    #[test]
    fn test_exports_expected_properties() {
        let palette = vec![
            PaletteEntry::from_rgb(RgbColor::new(255, 87, 51)),
            PaletteEntry::from_rgb(RgbColor::new(0, 0, 0)),
        ];
        let css = export(&palette);
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(
            lines,
            vec![
                ":root {",
                "  --color-1: #FF5733;",
                "  --color-1-rgb: 255, 87, 51;",
                "  --color-1-hsl: 11, 100%, 60%;",
                "  --color-2: #000000;",
                "  --color-2-rgb: 0, 0, 0;",
                "  --color-2-hsl: 0, 0%, 0%;",
                "}",
            ]
        );
    }

    #[test]
    fn test_empty_palette_yields_empty_root_block() {
        assert_eq!(export(&[]), ":root {\n}");
    }

    #[test]
    fn test_numbering_starts_at_one() {
        let palette = vec![PaletteEntry::from_rgb(RgbColor::new(10, 20, 30))];
        let css = export(&palette);
        assert!(css.contains("--color-1:"));
        assert!(!css.contains("--color-0"));
    }
}
