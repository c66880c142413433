//! Palette assembly: quantized colors to full palette entries.

use pigment_core::{ExtractError, PaletteEntry, RgbColor};
use rayon::prelude::*;

use crate::locate::find_color_position;
use crate::quantizer::Quantizer;
use crate::raster::Raster;
use crate::ExtractConfig;

/// Assemble palette entries from quantizer output.
///
/// Each color becomes an entry carrying its hex and HSL forms. When a raster
/// is given, positions are looked up in parallel, one search per entry over
/// the shared buffer; entries keep the order the colors were given in
/// regardless of which lookup finishes first. Without a raster every
/// position stays `None`.
///
/// Fails with [`ExtractError::NoColorsExtracted`] when `colors` is empty.
pub fn assemble_palette(
    colors: &[RgbColor],
    raster: Option<&Raster>,
    config: &ExtractConfig,
) -> Result<Vec<PaletteEntry>, ExtractError> {
    if colors.is_empty() {
        return Err(ExtractError::NoColorsExtracted);
    }

    let mut entries: Vec<PaletteEntry> =
        colors.iter().copied().map(PaletteEntry::from_rgb).collect();

    if let Some(raster) = raster {
        entries.par_iter_mut().for_each(|entry| {
            entry.position = find_color_position(raster, entry.rgb, config.sample_step);
        });
    }

    Ok(entries)
}

/// Run the full extraction pipeline: quantize, then assemble with positions.
pub fn extract_palette(
    raster: &Raster,
    quantizer: &dyn Quantizer,
    config: &ExtractConfig,
) -> Result<Vec<PaletteEntry>, ExtractError> {
    let colors = quantizer.quantize(raster, config.color_count);
    assemble_palette(&colors, Some(raster), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantizer::FixedPalette;
    use pigment_core::{HslColor, Position};

    /// 2x2 RGBA raster: red, green / blue, white.
    fn four_color_raster() -> Raster {
        let data = vec![
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255,
        ];
        Raster::from_rgba(2, 2, data).unwrap()
    }

    fn step_one() -> ExtractConfig {
        ExtractConfig {
            sample_step: 1,
            ..ExtractConfig::default()
        }
    }

    #[test]
    fn test_empty_colors_is_an_error() {
        let result = assemble_palette(&[], None, &ExtractConfig::default());
        assert!(matches!(result, Err(ExtractError::NoColorsExtracted)));
    }

    #[test]
    fn test_no_raster_leaves_positions_unset() {
        let colors = [RgbColor::new(255, 87, 51), RgbColor::new(0, 0, 255)];
        let palette = assemble_palette(&colors, None, &ExtractConfig::default()).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette[0].hex.to_string(), "#FF5733");
        assert_eq!(palette[0].hsl, HslColor::new(11, 100, 60));
        assert!(palette.iter().all(|entry| entry.position.is_none()));
    }

    #[test]
    fn test_positions_found_per_entry() {
        let colors = [
            RgbColor::new(0, 0, 255),
            RgbColor::new(255, 255, 255),
            RgbColor::new(255, 0, 0),
        ];
        let palette = assemble_palette(&colors, Some(&four_color_raster()), &step_one()).unwrap();
        assert_eq!(palette[0].position, Some(Position { x: 0.0, y: 50.0 }));
        assert_eq!(palette[1].position, Some(Position { x: 50.0, y: 50.0 }));
        assert_eq!(palette[2].position, Some(Position { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn test_entries_keep_quantizer_order() {
        let colors = [
            RgbColor::new(255, 255, 255),
            RgbColor::new(255, 0, 0),
            RgbColor::new(0, 255, 0),
            RgbColor::new(0, 0, 255),
        ];
        let palette = assemble_palette(&colors, Some(&four_color_raster()), &step_one()).unwrap();
        let out: Vec<RgbColor> = palette.iter().map(|entry| entry.rgb).collect();
        assert_eq!(out, colors);
    }

    #[test]
    fn test_duplicate_colors_get_the_same_position() {
        let red = RgbColor::new(255, 0, 0);
        let palette =
            assemble_palette(&[red, red], Some(&four_color_raster()), &step_one()).unwrap();
        assert_eq!(palette[0].position, palette[1].position);
    }

    #[test]
    fn test_extract_palette_end_to_end() {
        let quantizer = FixedPalette::new(vec![
            RgbColor::new(255, 0, 0),
            RgbColor::new(255, 255, 255),
        ]);
        let palette = extract_palette(&four_color_raster(), &quantizer, &step_one()).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette[0].hex.to_string(), "#FF0000");
        assert_eq!(palette[0].position, Some(Position { x: 0.0, y: 0.0 }));
        assert_eq!(palette[1].position, Some(Position { x: 50.0, y: 50.0 }));
    }

    #[test]
    fn test_extract_palette_respects_color_count() {
        let quantizer = FixedPalette::new(vec![
            RgbColor::new(1, 1, 1),
            RgbColor::new(2, 2, 2),
            RgbColor::new(3, 3, 3),
            RgbColor::new(4, 4, 4),
        ]);
        let config = ExtractConfig {
            color_count: 3,
            sample_step: 1,
        };
        let palette = extract_palette(&four_color_raster(), &quantizer, &config).unwrap();
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_empty_quantizer_output_surfaces_no_colors() {
        let result = extract_palette(
            &four_color_raster(),
            &FixedPalette::default(),
            &ExtractConfig::default(),
        );
        assert!(matches!(result, Err(ExtractError::NoColorsExtracted)));
    }
}
