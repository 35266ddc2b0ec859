//! Named color extraction.
//!
//! Where [`parse_colors`](super::parse_colors) answers "which colors go on the
//! chart", [`extract_named_colors`] answers "which colors does this design
//! system have, and what are they called". The result is the pool that
//! palette suggestions are drawn from.

use crate::colorspace::hsl_to_hex;
use crate::types::NamedColor;

use super::scanner::{HexDeclaration, HslDeclaration};

/// Collects every custom property whose value is an HSL triple or a
/// `#RRGGBB` color.
///
/// HSL declarations come first, then hex declarations, each group in textual
/// order. Duplicate names are kept. Names may use letters, digits and
/// hyphens; a declaration like `--my_color` is not collected.
///
/// ```rust
/// use chartpal::extract_named_colors;
///
/// let pool = extract_named_colors("--brand: #FF00AA;");
/// assert_eq!(pool.len(), 1);
/// assert_eq!(pool[0].name, "brand");
/// assert_eq!(pool[0].value.to_string(), "#FF00AA");
/// ```
pub fn extract_named_colors(text: &str) -> Vec<NamedColor> {
    let hsl = HslDeclaration::scan_named(text)
        .map(|decl| NamedColor::new(decl.name, hsl_to_hex(decl.h, decl.s, decl.l)));
    let hex = HexDeclaration::scan(text).filter_map(|decl| {
        decl.hex
            .parse()
            .ok()
            .map(|value| NamedColor::new(decl.name, value))
    });
    hsl.chain(hex).collect()
}
