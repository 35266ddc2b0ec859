//! Value types shared by the parser, the palette generator and the exporter.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A color declared under a name, e.g. `--brand: #FF00AA;` becomes
/// `NamedColor { name: "brand", value: #FF00AA }`.
///
/// Names are not unique within a pool: a stylesheet that declares `--brand`
/// in both `:root` and `.dark` yields two entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    pub value: Color,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, value: Color) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The part of the name before the first hyphen (`blue-500` -> `blue`).
    pub fn family(&self) -> &str {
        self.name.split('-').next().unwrap_or(&self.name)
    }
}

/// Chart colors for light and dark mode.
///
/// The two lists are independent and may differ in length; see
/// [`ColorConfig::fitted`] for producing a uniform slot count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    pub light: Vec<Color>,
    pub dark: Vec<Color>,
}

impl ColorConfig {
    pub fn new(light: Vec<Color>, dark: Vec<Color>) -> Self {
        Self { light, dark }
    }

    /// True when neither mode has any color.
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }
}
