//! Error types for the Pigment engine.

use thiserror::Error;

/// Top-level error type for the Pigment engine.
#[derive(Debug, Error)]
pub enum PigmentError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors during color validation and parsing.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("Invalid {channel} channel value {value}: expected an integer in 0..=255")]
    InvalidChannel { channel: &'static str, value: f64 },

    #[error("Invalid hex color format: {input}")]
    InvalidHexFormat { input: String },
}

/// Errors during palette extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No colors extracted from image")]
    NoColorsExtracted,

    #[error("Raster buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    RasterSizeMismatch {
        width: u32,
        height: u32,
        expected: u64,
        actual: u64,
    },

    #[error("Color count {count} outside supported range {min}..={max}")]
    InvalidColorCount {
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("Color error: {0}")]
    Color(#[from] ColorError),
}

/// Errors during palette export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization failed: {reason}")]
    Json { reason: String },
}
