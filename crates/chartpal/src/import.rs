//! Importing colors typed or pasted by a user.
//!
//! Users paste two kinds of text: stylesheet fragments, and plain lists of
//! hex values copied from a design tool (`F7F6F7, F1F0F2, DEDCDF`). The
//! latter are often sloppy: some tokens carry `#`, some are separated by
//! newlines rather than commas, and text recognized from screenshots tends
//! to read the digit `0` as the letter `O`.
//!
//! [`import_hex_tokens`] handles the lists. Bad tokens are skipped rather
//! than failing the batch; the result records what was dropped so the caller
//! can warn about it. [`import_text`] decides which kind of text it was given.

use serde::Serialize;

use crate::color::Color;
use crate::error::ImportError;
use crate::stylesheet::{extract_named_colors, parse_colors};
use crate::types::{ColorConfig, NamedColor};

/// Result of importing a list of hex tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualImport {
    /// Valid colors in light mode, the same colors reversed in dark mode.
    pub config: ColorConfig,
    /// Tokens that were not valid colors, as written.
    pub skipped: Vec<String>,
}

impl ManualImport {
    /// True when some, but not all, tokens were rejected.
    pub fn is_partial(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// What [`import_text`] made of its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Import {
    /// The text looked like a stylesheet.
    Stylesheet {
        config: ColorConfig,
        named: Vec<NamedColor>,
    },
    /// The text was a list of hex tokens.
    Tokens(ManualImport),
}

impl Import {
    pub fn config(&self) -> &ColorConfig {
        match self {
            Import::Stylesheet { config, .. } => config,
            Import::Tokens(manual) => &manual.config,
        }
    }
}

/// Parses delimited hex tokens.
///
/// Tokens are separated by whitespace, `,` or `;`, and may start with `#`.
/// The letter `O` is read as the digit `0` before validation.
///
/// ```rust
/// use chartpal::import_hex_tokens;
///
/// let imported = import_hex_tokens("F7F6F7, BAD!!, DEDCDF").unwrap();
/// assert_eq!(imported.config.light.len(), 2);
/// assert!(imported.is_partial());
/// ```
pub fn import_hex_tokens(text: &str) -> Result<ManualImport, ImportError> {
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(ImportError::Empty);
    }

    let mut colors = Vec::new();
    let mut skipped = Vec::new();
    for token in &tokens {
        match clean_hex_token(token) {
            Some(color) => colors.push(color),
            None => skipped.push((*token).to_string()),
        }
    }

    if colors.is_empty() {
        return Err(ImportError::NoValidColors {
            tokens: tokens.len(),
        });
    }

    let dark = colors.iter().rev().copied().collect();
    Ok(ManualImport {
        config: ColorConfig::new(colors, dark),
        skipped,
    })
}

/// Imports pasted text, treating it as a stylesheet when it declares custom
/// properties and as a hex token list otherwise.
pub fn import_text(text: &str) -> Result<Import, ImportError> {
    if text.trim().is_empty() {
        return Err(ImportError::Empty);
    }
    if text.contains("--") {
        return Ok(Import::Stylesheet {
            config: parse_colors(text),
            named: extract_named_colors(text),
        });
    }
    import_hex_tokens(text).map(Import::Tokens)
}

fn clean_hex_token(token: &str) -> Option<Color> {
    let digits = token.strip_prefix('#').unwrap_or(token);
    let cleaned = digits.replace('O', "0").to_ascii_uppercase();
    Color::from_hex_digits(&cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(colors: &[Color]) -> Vec<String> {
        colors.iter().map(Color::to_string).collect()
    }

    #[test]
    fn test_partial_import() {
        let imported = import_hex_tokens("F7F6F7, BAD!!, DEDCDF").unwrap();
        assert_eq!(hex(&imported.config.light), ["#F7F6F7", "#DEDCDF"]);
        assert_eq!(hex(&imported.config.dark), ["#DEDCDF", "#F7F6F7"]);
        assert_eq!(imported.skipped, ["BAD!!"]);
        assert!(imported.is_partial());
    }

    #[test]
    fn test_all_valid_is_not_partial() {
        let imported = import_hex_tokens("#112233\n#445566").unwrap();
        assert!(!imported.is_partial());
        assert_eq!(imported.config.light.len(), 2);
    }

    #[test]
    fn test_mixed_delimiters() {
        let imported = import_hex_tokens("112233;445566 ,\t778899\n\nAABBCC").unwrap();
        assert_eq!(imported.config.light.len(), 4);
    }

    #[test]
    fn test_letter_o_read_as_zero() {
        let imported = import_hex_tokens("FFOOOO").unwrap();
        assert_eq!(hex(&imported.config.light), ["#FF0000"]);
    }

    #[test]
    fn test_lowercase_o_is_not_corrected() {
        let err = import_hex_tokens("ffoooo").unwrap_err();
        assert_eq!(err, ImportError::NoValidColors { tokens: 1 });
    }

    #[test]
    fn test_lowercase_hex_accepted() {
        let imported = import_hex_tokens("abcdef").unwrap();
        assert_eq!(hex(&imported.config.light), ["#ABCDEF"]);
    }

    #[test]
    fn test_nothing_valid() {
        assert_eq!(
            import_hex_tokens("nope, 12345, #1234567"),
            Err(ImportError::NoValidColors { tokens: 3 })
        );
    }

    #[test]
    fn test_only_delimiters_is_empty() {
        assert_eq!(import_hex_tokens(" ,;\n"), Err(ImportError::Empty));
    }

    #[test]
    fn test_import_text_dispatches_stylesheets() {
        let imported = import_text("--primary: 220 100% 50%").unwrap();
        match &imported {
            Import::Stylesheet { config, named } => {
                assert_eq!(hex(&config.light), ["#0055FF"]);
                assert_eq!(named.len(), 1);
            }
            Import::Tokens(_) => panic!("expected stylesheet import"),
        }
    }

    #[test]
    fn test_import_text_dispatches_tokens() {
        let imported = import_text("#F7F6F7, #DEDCDF").unwrap();
        assert!(matches!(imported, Import::Tokens(_)));
        assert_eq!(imported.config().light.len(), 2);
    }

    #[test]
    fn test_import_text_blank() {
        assert_eq!(import_text("   \n"), Err(ImportError::Empty));
    }
}
