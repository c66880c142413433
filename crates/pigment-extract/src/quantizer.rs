//! The quantization seam.
//!
//! Reducing a raster to its dominant colors is an injected algorithm, not
//! something this crate implements. Any clustering strategy (median cut,
//! k-means, octree) fits behind [`Quantizer`]; the extraction pipeline only
//! cares about the colors that come out.

use pigment_core::RgbColor;

use crate::raster::Raster;

/// A dominant-color quantization algorithm.
pub trait Quantizer {
    /// Produce up to `max_colors` representative colors for the raster.
    ///
    /// An empty result means no colors could be extracted; the caller decides
    /// how to surface that.
    fn quantize(&self, raster: &Raster, max_colors: usize) -> Vec<RgbColor>;
}

/// A quantizer that returns a fixed list of colors, truncated to the
/// requested count.
///
/// Useful when the palette is already known (brand colors, a design system)
/// and only positions and format conversions are wanted, and as a
/// deterministic stand-in for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedPalette {
    colors: Vec<RgbColor>,
}

impl FixedPalette {
    /// Create a fixed quantizer over the given colors.
    pub fn new(colors: Vec<RgbColor>) -> Self {
        Self { colors }
    }
}

impl Quantizer for FixedPalette {
    fn quantize(&self, _raster: &Raster, max_colors: usize) -> Vec<RgbColor> {
        self.colors.iter().copied().take(max_colors).collect()
    }
}

#[cfg(feature = "kmeans")]
mod kmeans {
    use kmeans_colors::get_kmeans;
    use palette::{IntoColor, Lab, Srgb};

    use super::{Quantizer, Raster, RgbColor};

    /// A quantizer backed by k-means clustering in Lab space.
    ///
    /// Fully transparent pixels are skipped so invisible regions cannot
    /// dominate the palette. A fixed seed keeps runs deterministic.
    #[derive(Debug, Clone)]
    pub struct KmeansQuantizer {
        /// Maximum clustering iterations.
        pub max_iterations: usize,
        /// Convergence threshold passed to the solver.
        pub convergence: f32,
        /// Pixel sampling stride (1 = every pixel).
        pub sample_stride: usize,
        /// Seed for centroid initialization.
        pub seed: u64,
    }

    impl Default for KmeansQuantizer {
        fn default() -> Self {
            Self {
                max_iterations: 20,
                convergence: 1e-4,
                sample_stride: 1,
                seed: 0,
            }
        }
    }

    impl Quantizer for KmeansQuantizer {
        fn quantize(&self, raster: &Raster, max_colors: usize) -> Vec<RgbColor> {
            let bytes_per_pixel = raster.format().bytes_per_pixel();
            let stride = self.sample_stride.max(1);

            let lab_pixels: Vec<Lab> = raster
                .data()
                .chunks_exact(bytes_per_pixel)
                .step_by(stride)
                .filter(|px| px.len() < 4 || px[3] > 0)
                .map(|px| Srgb::<u8>::new(px[0], px[1], px[2]).into_linear().into_color())
                .collect();

            if lab_pixels.is_empty() || max_colors == 0 {
                return Vec::new();
            }

            let kmeans = get_kmeans(
                max_colors,
                self.max_iterations,
                self.convergence,
                false,
                &lab_pixels,
                self.seed,
            );

            kmeans
                .centroids
                .iter()
                .map(|&lab| {
                    let rgb_f32: Srgb<f32> = Srgb::from_linear(lab.into_color());
                    let rgb = rgb_f32.into_format::<u8>();
                    RgbColor::new(rgb.red, rgb.green, rgb.blue)
                })
                .collect()
        }
    }
}

#[cfg(feature = "kmeans")]
pub use kmeans::KmeansQuantizer;
