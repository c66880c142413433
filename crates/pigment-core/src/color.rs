//! Color representations and the conversions between them.
//!
//! Three representations cover the engine's needs: [`RgbColor`] is the
//! canonical working form, [`HslColor`] is the form harmony math operates on,
//! and [`HexColor`] is the display/interchange form. Conversions round to the
//! integer domain of the target type; nothing is clamped silently.

use std::fmt;

use crate::channel;
use crate::error::ColorError;

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color in HSL form: hue in degrees `[0, 360)`, saturation and lightness
/// as integer percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HslColor {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// A color in canonical hex form.
///
/// There is exactly one serialization per color: `#RRGGBB`, uppercase.
/// Parsing accepts either letter case but requires the leading `#`, and
/// always normalizes to the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct HexColor(RgbColor);

impl RgbColor {
    /// Create a color from channel bytes.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from untyped channel values, validating each.
    ///
    /// Channels must be integers in `0..=255`; negative, out-of-range, and
    /// fractional values fail with [`ColorError::InvalidChannel`] naming the
    /// offending channel.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Result<Self, ColorError> {
        Ok(Self {
            r: channel::validate("red", r)?,
            g: channel::validate("green", g)?,
            b: channel::validate("blue", b)?,
        })
    }

    /// Convert to canonical hex form (e.g. `#FF5733`).
    pub fn to_hex(&self) -> HexColor {
        HexColor(*self)
    }

    /// Convert to HSL.
    ///
    /// Hue is rounded to the nearest degree and wraps into `[0, 360)`;
    /// saturation and lightness are rounded to integer percentages.
    /// Achromatic colors report hue 0 and saturation 0.
    pub fn to_hsl(&self) -> HslColor {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return HslColor {
                h: 0,
                s: 0,
                l: (l * 100.0).round() as u8,
            };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // Branch on the maximum channel; red is checked first, then green.
        let h = if r >= g && r >= b {
            ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if g >= b {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        HslColor {
            // Rounding can produce an exact 360, which wraps to 0.
            h: (h * 360.0).round() as u16 % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }

    /// Euclidean distance to another color in RGB space.
    ///
    /// Ranges from 0 (identical) to `sqrt(3 * 255^2)`, about 441.67, for
    /// diagonally opposite corners of the color cube.
    pub fn distance(&self, other: &RgbColor) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Format as a CSS color function, e.g. `rgb(255, 87, 51)`.
    pub fn to_css_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl HslColor {
    /// Create an HSL color. Hue wraps modulo 360.
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h: h % 360, s, l }
    }

    /// Convert to RGB, rounding each channel to the nearest byte.
    pub fn to_rgb(&self) -> RgbColor {
        let h = self.h as f64 / 360.0;
        let s = self.s as f64 / 100.0;
        let l = self.l as f64 / 100.0;

        if self.s == 0 {
            let v = (l * 255.0).round() as u8;
            return RgbColor::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        RgbColor::new(
            (hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
            (hue_to_rgb(p, q, h) * 255.0).round() as u8,
            (hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
        )
    }

    /// Format as a CSS color function, e.g. `hsl(11, 100%, 60%)`.
    pub fn to_css_string(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl HexColor {
    /// Parse a hex color: a leading `#` followed by six hex digits in either
    /// case. Anything else fails with [`ColorError::InvalidHexFormat`].
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        parse_hex_digits(input)
            .map(HexColor)
            .ok_or_else(|| ColorError::InvalidHexFormat {
                input: input.to_string(),
            })
    }

    /// The underlying RGB channels.
    pub fn to_rgb(&self) -> RgbColor {
        self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.r, self.0.g, self.0.b)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> String {
        hex.to_string()
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(input: String) -> Result<Self, ColorError> {
        Self::parse(&input)
    }
}

fn parse_hex_digits(input: &str) -> Option<RgbColor> {
    let digits = input.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(RgbColor::new(r, g, b))
}

/// One segment of the HSL-to-RGB hue interpolation.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
