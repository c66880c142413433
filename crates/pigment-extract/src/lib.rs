//! Palette extraction over raw raster buffers.
//!
//! This crate turns quantized colors and pixel data into finished palettes:
//! 1. **Quantization**: an injected [`Quantizer`] reduces the raster to its
//!    dominant colors (or a [`FixedPalette`] supplies them directly)
//! 2. **Assembly**: every color gets hex and HSL forms
//! 3. **Position search**: each color is located in the raster in parallel,
//!    reported as percentage coordinates
//!
//! # Example
//!
//! ```
//! use pigment_core::RgbColor;
//! use pigment_extract::{extract_palette, ExtractConfig, FixedPalette, Raster};
//!
//! // A 2x1 image: a red pixel, then a blue one.
//! let raster = Raster::from_rgba(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255])?;
//! let quantizer = FixedPalette::new(vec![RgbColor::new(255, 0, 0)]);
//! let config = ExtractConfig {
//!     sample_step: 1,
//!     ..ExtractConfig::default()
//! };
//!
//! let palette = extract_palette(&raster, &quantizer, &config)?;
//! assert_eq!(palette[0].hex.to_string(), "#FF0000");
//! assert_eq!(palette[0].position.unwrap().x, 0.0);
//! # Ok::<(), pigment_core::ExtractError>(())
//! ```

pub mod assemble;
pub mod locate;
pub mod quantizer;
pub mod raster;

// Re-export commonly used types
pub use assemble::{assemble_palette, extract_palette};
pub use locate::find_color_position;
pub use quantizer::{FixedPalette, Quantizer};
pub use raster::{PixelFormat, Raster};

#[cfg(feature = "kmeans")]
pub use quantizer::KmeansQuantizer;

use pigment_core::ExtractError;

/// Default number of colors extracted from an image.
pub const DEFAULT_COLOR_COUNT: usize = 6;

/// Smallest supported color count.
pub const MIN_COLOR_COUNT: usize = 3;

/// Largest supported color count.
pub const MAX_COLOR_COUNT: usize = 12;

/// Default sampling stride for position search, in pixels.
pub const POSITION_SAMPLE_STEP: u32 = 10;

/// Configuration for palette extraction.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Number of colors requested from the quantizer.
    pub color_count: usize,

    /// Pixel stride for position search sampling.
    /// Larger steps are faster and less precise.
    pub sample_step: u32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            color_count: DEFAULT_COLOR_COUNT,
            sample_step: POSITION_SAMPLE_STEP,
        }
    }
}

impl ExtractConfig {
    /// Set the color count, enforcing the supported range.
    pub fn with_color_count(mut self, count: usize) -> Result<Self, ExtractError> {
        if !(MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&count) {
            return Err(ExtractError::InvalidColorCount {
                count,
                min: MIN_COLOR_COUNT,
                max: MAX_COLOR_COUNT,
            });
        }
        self.color_count = count;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_config_default() {
        let config = ExtractConfig::default();
        assert_eq!(config.color_count, 6);
        assert_eq!(config.sample_step, 10);
    }

    #[test]
    fn test_with_color_count_accepts_supported_range() {
        for count in [3, 6, 12] {
            let config = ExtractConfig::default().with_color_count(count).unwrap();
            assert_eq!(config.color_count, count);
        }
    }

    #[test]
    fn test_with_color_count_rejects_out_of_range() {
        for count in [0, 2, 13] {
            let result = ExtractConfig::default().with_color_count(count);
            assert!(matches!(
                result,
                Err(ExtractError::InvalidColorCount { min: 3, max: 12, .. })
            ));
        }
    }
}
