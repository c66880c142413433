//! Core color types and operations for the Pigment palette engine.
//!
//! This crate provides the foundational pieces used across all other pigment
//! crates:
//! - Color representations (RGB, HSL, canonical hex) and conversions
//! - Channel validation for values from untyped boundaries
//! - Euclidean color distance
//! - Harmony derivation (complementary and analogous colors)
//! - The palette entry aggregate produced by extraction
//! - Error types
//!
//! # Example
//!
//! ```
//! use pigment_core::{harmony, PaletteEntry, RgbColor};
//!
//! let coral = RgbColor::new(255, 87, 51);
//! assert_eq!(coral.to_hex().to_string(), "#FF5733");
//!
//! let entry = PaletteEntry::from_rgb(coral);
//! let complement = harmony::complementary(&entry);
//! assert_eq!(complement.hsl.h, 191);
//! ```

pub mod channel;
pub mod color;
pub mod error;
pub mod harmony;
pub mod palette;

// Re-export commonly used types
pub use color::{HexColor, HslColor, RgbColor};
pub use error::{ColorError, ExportError, ExtractError, PigmentError};
pub use harmony::{analogous, complementary, ANALOGOUS_ANGLE, COMPLEMENTARY_ANGLE};
pub use palette::{PaletteEntry, Position};
