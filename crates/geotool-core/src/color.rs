//! RGB colors as used for shape fills, the selection highlight and markers.
//!
//! Colors are stored as packed `0xRRGGBB` values so that every `Color` is
//! valid by construction. The textual form is the CSS-style `#rrggbb` hex
//! string, which is also the serde representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// An opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const BLACK: Color = Color(0x000000);
    pub const RED: Color = Color(0xff0000);

    /// Creates a color from a packed `0xRRGGBB` value. Bits above 24 are dropped.
    pub const fn from_hex(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Returns the packed `0xRRGGBB` value.
    pub const fn hex(&self) -> u32 {
        self.0
    }

    pub const fn r(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(&self) -> u8 {
        self.0 as u8
    }

    /// Parses `#rrggbb`, `rrggbb` or the short `#rgb` form.
    pub fn parse(value: &str) -> Result<Self> {
        let digits = value.trim().trim_start_matches('#');
        let invalid = |reason: &str| Error::InvalidColor {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("expected hexadecimal digits"));
        }

        match digits.len() {
            6 => u32::from_str_radix(digits, 16)
                .map(Color::from_hex)
                .map_err(|e| invalid(&e.to_string())),
            3 => {
                // #abc expands to #aabbcc
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                u32::from_str_radix(&expanded, 16)
                    .map(Color::from_hex)
                    .map_err(|e| invalid(&e.to_string()))
            }
            _ => Err(invalid("expected 3 or 6 hex digits")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse(&raw).map_err(serde::de::Error::custom)
    }
}
