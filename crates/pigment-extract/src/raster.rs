//! Raster buffers: the pixel data extraction operates on.
//!
//! The engine never decodes image files. Callers hand it raw row-major bytes
//! (a canvas `ImageData` buffer, a decoded frame) together with dimensions,
//! and everything downstream works against this one type.

use pigment_core::{ExtractError, RgbColor};

/// Pixel layout of a raster buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Four bytes per pixel, alpha last.
    Rgba,
    /// Three bytes per pixel.
    Rgb,
}

impl PixelFormat {
    /// Bytes per pixel.
    pub const fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgba => 4,
            PixelFormat::Rgb => 3,
        }
    }
}

/// A raster image: dimensions plus a row-major byte buffer.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Raster {
    /// Create a raster over row-major RGBA bytes.
    ///
    /// Fails when the buffer length does not match `width * height * 4`;
    /// a zero-dimension raster with an empty buffer is valid but has no
    /// addressable pixels.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ExtractError> {
        Self::new(width, height, PixelFormat::Rgba, data)
    }

    /// Create a raster over row-major RGB bytes.
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ExtractError> {
        Self::new(width, height, PixelFormat::Rgb, data)
    }

    fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, ExtractError> {
        // Computed in u64: width * height * 4 can exceed a 32-bit usize, and
        // a wrapped product must not slip past the length check.
        let expected = (width as u64)
            .saturating_mul(height as u64)
            .saturating_mul(format.bytes_per_pixel() as u64);
        if data.len() as u64 != expected {
            return Err(ExtractError::RasterSizeMismatch {
                width,
                height,
                expected,
                actual: data.len() as u64,
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel layout of the underlying buffer.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// The raw row-major bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the raster has no addressable pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The color at `(x, y)`. Alpha, if present, is ignored.
    ///
    /// Panics when the coordinate is outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> RgbColor {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * self.format.bytes_per_pixel();
        RgbColor::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// All pixel colors in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = RgbColor> + '_ {
        self.data
            .chunks_exact(self.format.bytes_per_pixel())
            .map(|px| RgbColor::new(px[0], px[1], px[2]))
    }
}

#[cfg(feature = "image")]
impl Raster {
    /// Build a raster from a decoded RGBA image.
    pub fn from_image(image: image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            format: PixelFormat::Rgba,
            data: image.into_raw(),
        }
    }
}
