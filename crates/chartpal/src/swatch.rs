//! Helpers for presenting colors next to a chart.
//!
//! A front end shows a fixed number of chart slots per mode, offers the
//! imported pool as swatches to pick from, and labels each color with its
//! design-system name when it has one. These functions compute those views
//! from the value types; they hold no state of their own.

use crate::color::Color;
use crate::types::{ColorConfig, NamedColor};

/// Slots shown before the user adds any.
pub const DEFAULT_SLOTS: usize = 8;
/// Upper bound on chart slots.
pub const MAX_SLOTS: usize = 20;

impl ColorConfig {
    /// Black light slots and white dark slots, [`DEFAULT_SLOTS`] of each.
    pub fn placeholder() -> Self {
        Self::new(
            vec![Color::BLACK; DEFAULT_SLOTS],
            vec![Color::WHITE; DEFAULT_SLOTS],
        )
    }

    /// Number of slots both modes can fill.
    pub fn active_count(&self) -> usize {
        self.light.len().min(self.dark.len())
    }

    /// Exactly `count` slots per mode (at most [`MAX_SLOTS`]): extra colors
    /// are dropped, missing light slots are black and missing dark slots white.
    pub fn fitted(&self, count: usize) -> Self {
        let count = count.min(MAX_SLOTS);
        Self::new(
            fit(&self.light, count, Color::BLACK),
            fit(&self.dark, count, Color::WHITE),
        )
    }

    /// Puts a suggested color at `index` in light mode and at the mirrored
    /// position in dark mode, so the dark palette runs in reverse.
    ///
    /// Does nothing when `index` is outside the active slots.
    pub fn apply_suggestion(&mut self, index: usize, color: Color) {
        let active = self.active_count();
        if index >= active {
            return;
        }
        self.light[index] = color;
        self.dark[active - 1 - index] = color;
    }
}

fn fit(colors: &[Color], count: usize, pad: Color) -> Vec<Color> {
    let mut fitted: Vec<Color> = colors.iter().take(count).copied().collect();
    fitted.resize(count, pad);
    fitted
}

/// Every distinct color worth offering as a swatch: the pool first, then
/// chart colors that are not placeholder slots.
pub fn unique_colors(pool: &[NamedColor], config: &ColorConfig) -> Vec<Color> {
    let pool_colors = pool.iter().map(|c| c.value);
    let light = config.light.iter().copied().filter(|c| *c != Color::BLACK);
    let dark = config.dark.iter().copied().filter(|c| *c != Color::WHITE);

    let mut unique = Vec::new();
    for color in pool_colors.chain(light).chain(dark) {
        if !unique.contains(&color) {
            unique.push(color);
        }
    }
    unique
}

/// Display label for a color: its first name in the pool, else its hex form.
pub fn color_name(pool: &[NamedColor], color: Color) -> String {
    pool.iter()
        .find(|named| named.value == color)
        .map_or_else(|| color.to_string(), |named| named.name.clone())
}
