//! Stylesheet export.

use std::fmt::Write;

use crate::color::Color;
use crate::stylesheet::{DARK_SELECTOR, LIGHT_SELECTOR};
use crate::types::ColorConfig;

/// Renders a config as `--chart-N` declarations in `:root` and `.dark` blocks.
///
/// ```rust
/// use chartpal::{to_stylesheet, Color, ColorConfig};
///
/// let config = ColorConfig::new(vec![Color::BLACK], vec![Color::WHITE]);
/// assert_eq!(
///     to_stylesheet(&config),
///     ":root {\n  --chart-1: #000000;\n}\n\n.dark {\n  --chart-1: #FFFFFF;\n}"
/// );
/// ```
pub fn to_stylesheet(config: &ColorConfig) -> String {
    format!(
        "{} {{\n{}\n}}\n\n{} {{\n{}\n}}",
        LIGHT_SELECTOR,
        chart_declarations(&config.light),
        DARK_SELECTOR,
        chart_declarations(&config.dark)
    )
}

fn chart_declarations(colors: &[Color]) -> String {
    let mut out = String::new();
    for (i, color) in colors.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "  --chart-{}: {};", i + 1, color);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylesheet::parse_colors;

    #[test]
    fn test_empty_config_keeps_both_blocks() {
        assert_eq!(
            to_stylesheet(&ColorConfig::default()),
            ":root {\n\n}\n\n.dark {\n\n}"
        );
    }

    #[test]
    fn test_modes_of_different_length() {
        let config = ColorConfig::new(
            vec![Color::new(1, 2, 3), Color::new(4, 5, 6)],
            vec![Color::new(7, 8, 9)],
        );
        let css = to_stylesheet(&config);
        assert!(css.contains("  --chart-2: #040506;"));
        assert!(!css[css.find(".dark").unwrap()..].contains("--chart-2"));
    }

    #[test]
    fn test_export_parses_back() {
        let config = ColorConfig::new(
            vec![Color::new(0x12, 0x34, 0x56), Color::new(0xAB, 0xCD, 0xEF)],
            vec![Color::new(0xFE, 0xDC, 0xBA)],
        );
        assert_eq!(parse_colors(&to_stylesheet(&config)), config);
    }
}
