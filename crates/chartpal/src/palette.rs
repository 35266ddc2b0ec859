//! Accessible palette suggestions.
//!
//! Given the pool of named colors a design system declares, pick one color
//! per family and spread their lightness a little so adjacent chart series
//! stay distinguishable.
//!
//! # Algorithm
//!
//! 1. Group the pool by family: the part of each name before the first
//!    hyphen (`blue-500` and `blue-100` are both `blue`).
//! 2. From each family keep the member closest to an ideal saturation and
//!    lightness (Manhattan distance in percent points). Ties keep the
//!    earliest member.
//! 3. If that leaves fewer colors than requested, append variants of the
//!    first representative with its hue rotated by a fixed step.
//! 4. Shift the i-th color's lightness by `i * step`, clamped to a readable
//!    band.
//!
//! The tuning knobs live in [`PaletteOptions`]. Defaults:
//!
//! | Knob | Default |
//! |------|---------|
//! | ideal saturation | 65 |
//! | ideal lightness | 55 |
//! | variant hue step | 30 degrees |
//! | lightness step | 2 points per position |
//! | lightness band | 45..=70 |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::colorspace::{hex_to_hsl, Hsl};
use crate::error::OptionsError;
use crate::types::NamedColor;

/// Tuning knobs for [`generate_palette_with`].
///
/// Deserializes with every field optional, so a config file only needs the
/// values it changes:
///
/// ```rust
/// use chartpal::PaletteOptions;
///
/// let options: PaletteOptions = serde_yaml::from_str("max_lightness: 60").unwrap();
/// assert_eq!(options.max_lightness, 60);
/// assert_eq!(options.min_lightness, 45);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    pub ideal_saturation: i32,
    pub ideal_lightness: i32,
    /// Degrees added to the hue of each synthesized variant.
    pub hue_step: u16,
    /// Lightness added per output position.
    pub lightness_step: i32,
    pub min_lightness: i32,
    pub max_lightness: i32,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            ideal_saturation: 65,
            ideal_lightness: 55,
            hue_step: 30,
            lightness_step: 2,
            min_lightness: 45,
            max_lightness: 70,
        }
    }
}

impl PaletteOptions {
    /// Checks that the ideal point and lightness band are valid percentages.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let percent = 0..=100;
        if !percent.contains(&self.ideal_saturation) || !percent.contains(&self.ideal_lightness) {
            return Err(OptionsError::InvalidIdeal {
                saturation: self.ideal_saturation,
                lightness: self.ideal_lightness,
            });
        }
        if self.min_lightness > self.max_lightness
            || !percent.contains(&self.min_lightness)
            || !percent.contains(&self.max_lightness)
        {
            return Err(OptionsError::InvalidLightnessRange {
                min: self.min_lightness,
                max: self.max_lightness,
            });
        }
        Ok(())
    }

    /// Reads options from a YAML document and validates them. Missing keys
    /// keep their defaults.
    pub fn from_yaml(text: &str) -> crate::Result<Self> {
        let options: Self = serde_yaml::from_str(text)
            .map_err(|err| OptionsError::Malformed(err.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    fn distance(&self, hsl: Hsl) -> i32 {
        (i32::from(hsl.s) - self.ideal_saturation).abs()
            + (i32::from(hsl.l) - self.ideal_lightness).abs()
    }

    fn lightness_at(&self, base: u8, position: usize) -> u8 {
        let position = i32::try_from(position).unwrap_or(i32::MAX);
        let shifted = i32::from(base).saturating_add(position.saturating_mul(self.lightness_step));
        // Unvalidated options may have min > max.
        shifted
            .max(self.min_lightness)
            .min(self.max_lightness)
            .clamp(0, 100) as u8
    }
}

/// Suggests `count` chart colors from a pool using the default options.
///
/// Returns exactly `count` colors, or none at all when the pool is empty.
pub fn generate_accessible_palette(pool: &[NamedColor], count: usize) -> Vec<Color> {
    generate_palette_with(pool, count, &PaletteOptions::default())
}

/// Suggests `count` chart colors from a pool using explicit options.
pub fn generate_palette_with(
    pool: &[NamedColor],
    count: usize,
    options: &PaletteOptions,
) -> Vec<Color> {
    if pool.is_empty() {
        return Vec::new();
    }

    let mut representatives = representatives(pool, options);
    while representatives.len() < count {
        // Variants always derive from the first representative.
        let source = &representatives[0];
        let rotated = hex_to_hsl(source.value).rotate_hue(options.hue_step);
        let variant = NamedColor::new(format!("{}-variant", source.name), rotated.to_color());
        representatives.push(variant);
    }

    representatives
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, color)| {
            let hsl = hex_to_hsl(color.value);
            hsl.with_lightness(options.lightness_at(hsl.l, i)).to_color()
        })
        .collect()
}

/// One color per family, in the order families first appear.
fn representatives(pool: &[NamedColor], options: &PaletteOptions) -> Vec<NamedColor> {
    let mut order: Vec<&str> = Vec::new();
    let mut best: HashMap<&str, (&NamedColor, i32)> = HashMap::new();

    for color in pool {
        let family = color.family();
        let distance = options.distance(hex_to_hsl(color.value));
        match best.get_mut(family) {
            Some(entry) => {
                if distance < entry.1 {
                    *entry = (color, distance);
                }
            }
            None => {
                order.push(family);
                best.insert(family, (color, distance));
            }
        }
    }

    order
        .into_iter()
        .filter_map(|family| best.get(family).map(|(color, _)| (*color).clone()))
        .collect()
}
