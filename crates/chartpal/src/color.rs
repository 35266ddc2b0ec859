//! The [`Color`] value type.
//!
//! A color is a 24-bit RGB triplet. Its canonical text form is `#RRGGBB` in
//! uppercase; parsing accepts either case, so equality between two colors is
//! case-insensitive with respect to the text they came from.
//!
//! ```rust
//! use chartpal::Color;
//!
//! let a: Color = "#ff00aa".parse().unwrap();
//! let b: Color = "#FF00AA".parse().unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "#FF00AA");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorParseError;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Fallback for values that cannot be resolved, and the light-mode padding slot.
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// Dark-mode padding slot.
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses six hex digits with no `#` prefix.
    pub fn from_hex_digits(hex: &str) -> Result<Self, ColorParseError> {
        if hex.len() != 6 {
            return Err(ColorParseError::InvalidLength(hex.chars().count()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Canonical `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        Self::from_hex_digits(hex)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
