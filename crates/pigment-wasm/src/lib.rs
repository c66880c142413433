//! WebAssembly bindings for the Pigment palette engine.
//!
//! This crate provides a JavaScript/TypeScript API for extracting palettes
//! from canvas pixel data in web browsers.
//!
//! ## Example
//!
//! ```js
//! import { PigmentEngine, complementaryColor } from 'pigment-engine';
//!
//! const engine = new PigmentEngine();
//!
//! // Hand over the canvas pixels
//! engine.loadRaster(canvas.width, canvas.height, imageData.data);
//!
//! // Assemble a palette from quantizer output
//! const palette = engine.extract([[255, 87, 51], [0, 128, 255]]);
//!
//! // Derive harmonies and export
//! const complement = complementaryColor(palette[0]);
//! const css = engine.exportCss();
//! ```

use wasm_bindgen::prelude::*;

use pigment_core::{harmony, ColorError, HexColor, HslColor, PaletteEntry, RgbColor};
use pigment_extract::{assemble_palette, ExtractConfig, Raster};

mod types;

pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// The main palette engine interface for JavaScript.
#[wasm_bindgen]
pub struct PigmentEngine {
    raster: Option<Raster>,
    palette: Vec<PaletteEntry>,
    config: ExtractConfig,
}

#[wasm_bindgen]
impl PigmentEngine {
    /// Create a new engine instance.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            raster: None,
            palette: Vec::new(),
            config: ExtractConfig::default(),
        }
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Load RGBA pixel data (for example a canvas `ImageData` buffer).
    ///
    /// Later extractions search this raster for color positions.
    #[wasm_bindgen(js_name = loadRaster)]
    pub fn load_raster(&mut self, width: u32, height: u32, data: &[u8]) -> Result<(), JsError> {
        let raster = Raster::from_rgba(width, height, data.to_vec())
            .map_err(|e| JsError::new(&format!("Invalid raster: {}", e)))?;
        self.raster = Some(raster);
        Ok(())
    }

    /// Drop the loaded raster; later extractions skip position search.
    #[wasm_bindgen(js_name = clearRaster)]
    pub fn clear_raster(&mut self) {
        self.raster = None;
    }

    /// Check whether a raster is loaded.
    #[wasm_bindgen(js_name = hasRaster)]
    pub fn has_raster(&self) -> bool {
        self.raster.is_some()
    }

    /// Set how many colors extraction requests from the quantizer (3 to 12).
    #[wasm_bindgen(js_name = setColorCount)]
    pub fn set_color_count(&mut self, count: usize) -> Result<(), JsError> {
        self.config = self
            .config
            .clone()
            .with_color_count(count)
            .map_err(|e| JsError::new(&format!("Invalid color count: {}", e)))?;
        Ok(())
    }

    /// Assemble a palette from quantizer output.
    ///
    /// `colors` is an array of `[r, g, b]` triples as produced by a
    /// JavaScript quantizer. Each channel must be an integer in 0..=255.
    /// When a raster is loaded, every entry also gets the position where its
    /// color sits in the image.
    #[wasm_bindgen]
    pub fn extract(&mut self, colors: JsValue) -> Result<JsValue, JsError> {
        let triples: Vec<[f64; 3]> = serde_wasm_bindgen::from_value(colors)
            .map_err(|e| JsError::new(&format!("Invalid colors: {}", e)))?;

        let colors = colors_from_triples(&triples)
            .map_err(|e| JsError::new(&format!("Invalid color: {}", e)))?;

        let palette = assemble_palette(&colors, self.raster.as_ref(), &self.config)
            .map_err(|e| JsError::new(&format!("Extraction error: {}", e)))?;

        let result = serde_wasm_bindgen::to_value(&palette)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))?;

        self.palette = palette;
        Ok(result)
    }

    /// Get the last extracted palette.
    #[wasm_bindgen(js_name = getPalette)]
    pub fn get_palette(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.palette)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Find where a color sits in the loaded raster.
    ///
    /// Returns `{ x, y }` percentages, or `null` when no raster is loaded.
    #[wasm_bindgen(js_name = findColorPosition)]
    pub fn find_color_position(&self, r: f64, g: f64, b: f64) -> Result<JsValue, JsError> {
        let color = RgbColor::from_f64(r, g, b)
            .map_err(|e| JsError::new(&format!("Invalid color: {}", e)))?;

        let raster = match &self.raster {
            Some(raster) => raster,
            None => return Ok(JsValue::NULL),
        };

        match pigment_extract::find_color_position(raster, color, self.config.sample_step) {
            Some(position) => serde_wasm_bindgen::to_value(&position)
                .map_err(|e| JsError::new(&format!("Serialization error: {}", e))),
            None => Ok(JsValue::NULL),
        }
    }

    /// Export the last extracted palette as pretty-printed JSON.
    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsError> {
        if self.palette.is_empty() {
            return Err(JsError::new("No palette extracted. Call extract() first."));
        }
        pigment_export::export_json(&self.palette)
            .map_err(|e| JsError::new(&format!("JSON export error: {}", e)))
    }

    /// Export the last extracted palette as CSS custom properties.
    #[wasm_bindgen(js_name = exportCss)]
    pub fn export_css(&self) -> Result<String, JsError> {
        if self.palette.is_empty() {
            return Err(JsError::new("No palette extracted. Call extract() first."));
        }
        Ok(pigment_export::export_css(&self.palette))
    }
}

impl Default for PigmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert raw `[r, g, b]` triples into validated colors.
fn colors_from_triples(triples: &[[f64; 3]]) -> Result<Vec<RgbColor>, ColorError> {
    triples
        .iter()
        .map(|&[r, g, b]| RgbColor::from_f64(r, g, b))
        .collect()
}

/// The complementary color of a palette entry.
#[wasm_bindgen(js_name = complementaryColor)]
pub fn complementary_color(color: JsValue) -> Result<JsValue, JsError> {
    let input: ColorInputJs = serde_wasm_bindgen::from_value(color)
        .map_err(|e| JsError::new(&format!("Invalid color: {}", e)))?;

    let entry = harmony::complementary(&input.into_entry());
    serde_wasm_bindgen::to_value(&entry)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// The two analogous colors of a palette entry, at `-angle` and `+angle`
/// degrees (30 when omitted).
#[wasm_bindgen(js_name = analogousColors)]
pub fn analogous_colors(color: JsValue, angle: Option<i32>) -> Result<JsValue, JsError> {
    let input: ColorInputJs = serde_wasm_bindgen::from_value(color)
        .map_err(|e| JsError::new(&format!("Invalid color: {}", e)))?;

    let entries = harmony::analogous(
        &input.into_entry(),
        angle.unwrap_or(harmony::ANALOGOUS_ANGLE),
    );
    serde_wasm_bindgen::to_value(&entries)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Format validated RGB channels as a hex string like `#FF5733`.
#[wasm_bindgen(js_name = rgbToHex)]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> Result<String, JsError> {
    let color = RgbColor::from_f64(r, g, b)
        .map_err(|e| JsError::new(&format!("Invalid color: {}", e)))?;
    Ok(color.to_hex().to_string())
}

/// Parse a hex string into `{ r, g, b }` channels.
#[wasm_bindgen(js_name = hexToRgb)]
pub fn hex_to_rgb(hex: &str) -> Result<JsValue, JsError> {
    let color = HexColor::parse(hex)
        .map_err(|e| JsError::new(&format!("Invalid hex color: {}", e)))?;
    serde_wasm_bindgen::to_value(&color.to_rgb())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Convert validated RGB channels to `{ h, s, l }`.
#[wasm_bindgen(js_name = rgbToHsl)]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Result<JsValue, JsError> {
    let color = RgbColor::from_f64(r, g, b)
        .map_err(|e| JsError::new(&format!("Invalid color: {}", e)))?;
    serde_wasm_bindgen::to_value(&color.to_hsl())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Convert HSL components to `{ r, g, b }`.
#[wasm_bindgen(js_name = hslToRgb)]
pub fn hsl_to_rgb(h: u16, s: u8, l: u8) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&HslColor::new(h, s, l).to_rgb())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Check whether a string is a parseable hex color.
#[wasm_bindgen(js_name = isValidHexColor)]
pub fn is_valid_hex_color(hex: &str) -> bool {
    HexColor::parse(hex).is_ok()
}

/// Format RGB channels as a CSS `rgb(...)` string.
#[wasm_bindgen(js_name = formatRgbString)]
pub fn format_rgb_string(r: f64, g: f64, b: f64) -> Result<String, JsError> {
    let color = RgbColor::from_f64(r, g, b)
        .map_err(|e| JsError::new(&format!("Invalid color: {}", e)))?;
    Ok(color.to_css_string())
}

/// Format HSL components as a CSS `hsl(...)` string.
#[wasm_bindgen(js_name = formatHslString)]
pub fn format_hsl_string(h: u16, s: u8, l: u8) -> String {
    HslColor::new(h, s, l).to_css_string()
}

/// Get the engine version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
