//! Declaration scanners.
//!
//! Each declaration shape the parser cares about has its own small record
//! type with a `scan` constructor that sweeps a piece of text and yields the
//! matches in textual order. The sweeps do not tokenize CSS or track nesting.
//! A declaration is anything that looks like `--name: value;`, wherever it
//! appears, comments included.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `--name: value;` with the value running up to the next semicolon.
static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(--[A-Za-z0-9_-]+):\s*([^;]+);").expect("valid regex"));

/// `--name: H S% L%` (the `%` after saturation is optional).
static HSL_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"--([A-Za-z0-9_-]+):\s*([0-9]+)\s+([0-9]+)%?\s+([0-9]+)%").expect("valid regex")
});

/// [`HSL_DECLARATION`] restricted to names without underscores.
static NAMED_HSL_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"--([A-Za-z0-9-]+):\s*([0-9]+)\s+([0-9]+)%?\s+([0-9]+)%").expect("valid regex")
});

/// `--name: #RRGGBB`, name without underscores.
static HEX_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--([A-Za-z0-9-]+):\s*(#[A-Fa-f0-9]{6})").expect("valid regex"));

/// A custom-property declaration with its raw, trimmed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Property name including the leading `--`.
    pub property: &'a str,
    pub value: &'a str,
}

impl<'a> Declaration<'a> {
    pub fn scan(text: &'a str) -> impl Iterator<Item = Declaration<'a>> + 'a {
        DECLARATION.captures_iter(text).map(|caps| Declaration {
            property: group(&caps, 1),
            value: group(&caps, 2).trim(),
        })
    }

    /// Property name without the leading `--`.
    pub fn name(&self) -> &'a str {
        self.property.strip_prefix("--").unwrap_or(self.property)
    }
}

/// A declaration whose value is written as a bare HSL triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslDeclaration<'a> {
    pub name: &'a str,
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl<'a> HslDeclaration<'a> {
    pub fn scan(text: &'a str) -> impl Iterator<Item = HslDeclaration<'a>> + 'a {
        Self::scan_with(&HSL_DECLARATION, text)
    }

    /// Like [`scan`](Self::scan), but skips names containing `_`, matching
    /// the names [`HexDeclaration::scan`] accepts.
    pub fn scan_named(text: &'a str) -> impl Iterator<Item = HslDeclaration<'a>> + 'a {
        Self::scan_with(&NAMED_HSL_DECLARATION, text)
    }

    fn scan_with(
        pattern: &'static Regex,
        text: &'a str,
    ) -> impl Iterator<Item = HslDeclaration<'a>> + 'a {
        pattern.captures_iter(text).filter_map(|caps| {
            Some(HslDeclaration {
                name: group(&caps, 1),
                h: group(&caps, 2).parse().ok()?,
                s: group(&caps, 3).parse().ok()?,
                l: group(&caps, 4).parse().ok()?,
            })
        })
    }
}

/// A declaration whose value starts with a six-digit hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexDeclaration<'a> {
    pub name: &'a str,
    /// The color text including `#`, exactly as written.
    pub hex: &'a str,
}

impl<'a> HexDeclaration<'a> {
    pub fn scan(text: &'a str) -> impl Iterator<Item = HexDeclaration<'a>> + 'a {
        HEX_DECLARATION
            .captures_iter(text)
            .map(|caps| HexDeclaration {
                name: group(&caps, 1),
                hex: group(&caps, 2),
            })
    }
}

/// Returns the body of the first `selector { ... }` block.
///
/// The selector must be followed (after optional whitespace) by `{`. The body
/// ends at the first `}`, so a nested block cuts the outer one short.
pub fn find_block<'a>(text: &'a str, selector: &str) -> Option<&'a str> {
    text.match_indices(selector).find_map(|(start, _)| {
        let rest = text[start + selector.len()..].trim_start();
        let body = rest.strip_prefix('{')?;
        body.find('}').map(|end| &body[..end])
    })
}

fn group<'a>(caps: &Captures<'a>, index: usize) -> &'a str {
    caps.get(index).map_or("", |m| m.as_str())
}
