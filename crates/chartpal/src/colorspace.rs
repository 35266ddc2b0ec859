//! Hex <-> HSL conversion.
//!
//! Stylesheets written for component libraries usually declare colors as bare
//! HSL triples (`--primary: 220 100% 50%;`), while chart code wants concrete
//! hex values. This module is the bridge between the two.
//!
//! # Precision
//!
//! [`Hsl`] stores whole degrees and whole percent points, matching how the
//! values are written in stylesheets. Going `Color -> Hsl -> Color` therefore
//! loses a little precision: a percent point of lightness spans roughly 2.5
//! channel units, so a round trip can move a channel by a few units. Callers
//! that compare colors after a round trip must allow for this.
//!
//! # Range
//!
//! [`hsl_to_hex`] does not validate its inputs. Hues outside `[0, 360)` match
//! none of the six sectors and produce the achromatic component only;
//! saturation or lightness outside `[0, 100]` produce whatever the formula
//! gives, saturated into `0..=255` per channel. Nothing panics.

use crate::color::Color;

/// A color in hue/saturation/lightness form.
///
/// `h` is in degrees (`0..360`), `s` and `l` are percentages (`0..=100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    pub fn to_color(self) -> Color {
        hsl_to_hex(f64::from(self.h), f64::from(self.s), f64::from(self.l))
    }

    /// Same hue and saturation, different lightness.
    pub fn with_lightness(self, l: u8) -> Self {
        Self { l, ..self }
    }

    /// Hue rotated by `degrees`, wrapping at 360.
    pub fn rotate_hue(self, degrees: u16) -> Self {
        let h = (u32::from(self.h) + u32::from(degrees)) % 360;
        Self { h: h as u16, ..self }
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        hex_to_hsl(color)
    }
}

/// Converts a color to HSL, rounding each component to the nearest integer.
pub fn hex_to_hsl(color: Color) -> Hsl {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    // A hue just under 1.0 rounds up to 360, which is the same angle as 0.
    let hue = (h * 360.0).round() as u16 % 360;
    Hsl {
        h: hue,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Converts HSL (degrees, percent, percent) to a color.
///
/// Takes real numbers because stylesheet values may carry fractions
/// (`210 40% 96.1%`); see the module docs for out-of-range behaviour.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> Color {
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&h) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    Color::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Scales a 0..1 component to a byte. `as` saturates, and NaN becomes 0.
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round() as u8
}
