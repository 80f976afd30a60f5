//! Translucent colors and their terminal rendition.

use std::{fmt, str::FromStr};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f32,
}

impl Default for Rgba {
    /// Translucent blue, `rgba(0, 102, 255, 0.5)`.
    fn default() -> Self {
        Self::new(0, 102, 255, 0.5)
    }
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    /// Create a color; alpha is clamped to `[0, 1]` and NaN becomes 0.
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same RGB with a different opacity.
    pub fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Composite this color over an opaque background.
    ///
    /// Terminals have no alpha channel, so translucency is baked into the
    /// resulting cell color.
    pub fn over(self, background: Rgba) -> Color {
        let mix = |fg: u8, bg: u8| -> u8 {
            let v = fg as f32 * self.a + bg as f32 * (1.0 - self.a);
            v.round().clamp(0.0, 255.0) as u8
        };
        Color::Rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_string()
    }
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    input: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color '{}': expected #rrggbb, rgb(r, g, b) or rgba(r, g, b, a)",
            self.input
        )
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(err());
            }
            let channel =
                |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
            return Ok(Self::opaque(channel(0)?, channel(2)?, channel(4)?));
        }

        let (args, has_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(err());
        };
        let args = args.strip_suffix(')').ok_or_else(err)?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();

        let expected = if has_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(err());
        }

        let channel = |p: &str| p.parse::<u8>().map_err(|_| err());
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = if has_alpha {
            parts[3].parse::<f32>().map_err(|_| err())?
        } else {
            1.0
        };
        Ok(Self::new(r, g, b, a))
    }
}

impl TryFrom<String> for Rgba {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
