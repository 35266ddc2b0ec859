//! Light/dark chart color extraction.
//!
//! [`parse_colors`] turns a stylesheet into a [`ColorConfig`]. The `:root`
//! block feeds light mode and the `.dark` block feeds dark mode. For each
//! block the first strategy that produces anything wins:
//!
//! 1. **Chart slots**: `--chart-1`, `--chart-2`, ... in the order written.
//! 2. **Bare HSL triples**: every `--name: H S% L%` declaration, de-duplicated.
//! 3. **Everything else**: the semantic names (`primary`, `accent`, ...)
//!    first, then every other declaration in the block.
//!
//! Text that contains neither block is treated as a loose list of
//! declarations and scanned for HSL triples as a whole.
//!
//! Values may reference other properties with `var(--name)`; references are
//! looked up in a table of every declaration in the text, whatever block it
//! sits in. Anything that cannot be resolved becomes black.

use std::collections::HashMap;

use crate::color::Color;
use crate::colorspace::hsl_to_hex;
use crate::types::ColorConfig;

use super::scanner::{find_block, Declaration, HslDeclaration};

/// Selector whose block supplies light-mode colors.
pub const LIGHT_SELECTOR: &str = ":root";
/// Selector whose block supplies dark-mode colors.
pub const DARK_SELECTOR: &str = ".dark";

/// Names that usually carry a design system's brand colors. Each may also
/// appear with a `-foreground` suffix.
pub const SEMANTIC_NAMES: [&str; 11] = [
    "primary",
    "secondary",
    "accent",
    "muted",
    "background",
    "foreground",
    "success",
    "warning",
    "error",
    "destructive",
    "creative",
];

/// How many `var()` hops the resolver follows before giving up.
const MAX_REFERENCE_DEPTH: usize = 32;

/// Extracts light and dark chart colors from stylesheet text.
///
/// Never fails; missing or unusable input produces empty lists.
///
/// ```rust
/// use chartpal::parse_colors;
///
/// let config = parse_colors(":root { --chart-1: 220 100% 50%; --chart-2: 0 0% 0%; }");
/// let light: Vec<String> = config.light.iter().map(|c| c.to_string()).collect();
/// assert_eq!(light, ["#0055FF", "#000000"]);
/// assert!(config.dark.is_empty());
/// ```
pub fn parse_colors(text: &str) -> ColorConfig {
    let variables = VariableTable::from_text(text);
    let light_block = find_block(text, LIGHT_SELECTOR);
    let dark_block = find_block(text, DARK_SELECTOR);

    // Only a stylesheet with no mode blocks at all is read as a flat list.
    let loose = light_block.is_none() && dark_block.is_none();
    let extract = |block: Option<&str>| match block {
        Some(body) => block_colors(body, &variables),
        None if loose => hsl_colors(text),
        None => Vec::new(),
    };

    ColorConfig {
        light: extract(light_block),
        dark: extract(dark_block),
    }
}

/// Every custom property declared anywhere in a stylesheet, keyed by its
/// full name (`--primary`). Later declarations replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct VariableTable<'a> {
    entries: HashMap<&'a str, &'a str>,
}

impl<'a> VariableTable<'a> {
    pub fn from_text(text: &'a str) -> Self {
        let entries = Declaration::scan(text)
            .map(|decl| (decl.property, decl.value))
            .collect();
        Self { entries }
    }

    /// Raw value of a property, looked up by its full name.
    pub fn get(&self, property: &str) -> Option<&'a str> {
        self.entries.get(property).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a raw declaration value to a concrete color.
    ///
    /// - `var(--name)` follows the reference through the table.
    /// - A triple of numbers separated by single spaces is read as HSL.
    /// - `#RRGGBB` is taken as is.
    /// - Anything else, including a missing or runaway reference, is black.
    pub fn resolve(&self, value: &str) -> Color {
        let mut value = value.trim();
        for _ in 0..=MAX_REFERENCE_DEPTH {
            let Some(reference) = value.strip_prefix("var(") else {
                return resolve_literal(value);
            };
            let property = reference.strip_suffix(')').unwrap_or(reference).trim();
            match self.get(property) {
                Some(next) => value = next.trim(),
                None => return Color::BLACK,
            }
        }
        Color::BLACK
    }
}

/// HSL triples are split on single spaces: `220  100% 50%` has an empty
/// second part and does not read as HSL.
fn resolve_literal(value: &str) -> Color {
    if value.contains(' ') {
        let mut parts = value.split(' ').map(|part| leading_number(part.trim_start()));
        if let (Some(Some(h)), Some(Some(s)), Some(Some(l))) =
            (parts.next(), parts.next(), parts.next())
        {
            return hsl_to_hex(h, s, l);
        }
    }
    value.parse().unwrap_or(Color::BLACK)
}

/// Parses the longest numeric prefix of a token (`"50%"` -> 50, `"1.5rem"` -> 1.5).
fn leading_number(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        if fraction_end > fraction_start || digits > 0 {
            digits += fraction_end - fraction_start;
            end = fraction_end;
        }
    }
    if digits == 0 {
        return None;
    }
    token[..end].parse().ok()
}

fn block_colors(body: &str, variables: &VariableTable<'_>) -> Vec<Color> {
    let chart = chart_colors(body, variables);
    if !chart.is_empty() {
        return chart;
    }
    let hsl = hsl_colors(body);
    if !hsl.is_empty() {
        return hsl;
    }
    prioritized_colors(body, variables)
}

fn chart_colors(body: &str, variables: &VariableTable<'_>) -> Vec<Color> {
    Declaration::scan(body)
        .filter(|decl| is_chart_slot(decl.name()))
        .map(|decl| variables.resolve(decl.value))
        .collect()
}

/// Colors written as bare HSL triples, first occurrence of each color kept.
fn hsl_colors(text: &str) -> Vec<Color> {
    let mut colors = Vec::new();
    for decl in HslDeclaration::scan(text) {
        push_unique(&mut colors, hsl_to_hex(decl.h, decl.s, decl.l));
    }
    colors
}

fn prioritized_colors(body: &str, variables: &VariableTable<'_>) -> Vec<Color> {
    let mut colors = Vec::new();
    for decl in Declaration::scan(body).filter(|decl| is_semantic(decl.name())) {
        push_unique(&mut colors, variables.resolve(decl.value));
    }

    let semantic_count = colors.len();
    for decl in Declaration::scan(body) {
        let color = variables.resolve(decl.value);
        if !colors[..semantic_count].contains(&color) {
            colors.push(color);
        }
    }
    colors
}

fn is_chart_slot(name: &str) -> bool {
    name.strip_prefix("chart-")
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

fn is_semantic(name: &str) -> bool {
    let base = name.strip_suffix("-foreground").unwrap_or(name);
    SEMANTIC_NAMES.contains(&base)
}

fn push_unique(colors: &mut Vec<Color>, color: Color) {
    if !colors.contains(&color) {
        colors.push(color);
    }
}
