//! # Chartpal - chart palettes from design-system stylesheets
//!
//! Design systems already define their colors, usually as CSS custom
//! properties. Chartpal reads those definitions and turns them into chart
//! colors for light and dark mode, suggests accessible palettes from the
//! named colors it finds, and writes the result back out as a stylesheet.
//!
//! ## Quick Start
//!
//! ```rust
//! use chartpal::{extract_named_colors, generate_accessible_palette, parse_colors, to_stylesheet};
//!
//! let css = r#"
//! :root {
//!   --primary: 222 47% 11%;
//!   --accent: 210 40% 96.1%;
//!   --chart-1: 12 76% 61%;
//!   --chart-2: 173 58% 39%;
//! }
//! .dark {
//!   --chart-1: 220 70% 50%;
//!   --chart-2: 160 60% 45%;
//! }
//! "#;
//!
//! // Chart colors per mode
//! let config = parse_colors(css);
//! assert_eq!(config.light.len(), 2);
//! assert_eq!(config.dark.len(), 2);
//!
//! // Every named color, as a pool for suggestions
//! let pool = extract_named_colors(css);
//! let suggestion = generate_accessible_palette(&pool, 4);
//! assert_eq!(suggestion.len(), 4);
//!
//! // Back to CSS
//! let exported = to_stylesheet(&config);
//! assert!(exported.starts_with(":root {"));
//! ```
//!
//! ## Modules
//!
//! - [`colorspace`]: hex <-> HSL conversion
//! - [`stylesheet`]: declaration scanning, chart color and named color extraction
//! - [`palette`]: palette suggestions from a pool of named colors
//! - [`import`]: pasted hex lists
//! - [`swatch`]: slot fitting and swatch labelling
//!
//! ## Failure model
//!
//! Reading stylesheets never fails. Values that cannot be resolved become
//! black and blocks that are missing produce empty lists; callers decide what
//! an empty result means to their users. Errors are reserved for input that
//! has to be exactly right: literal colors ([`ColorParseError`]), pasted
//! token lists ([`ImportError`]) and palette tuning ([`OptionsError`]).

mod color;
pub mod colorspace;
mod error;
mod export;
pub mod import;
pub mod palette;
pub mod stylesheet;
pub mod swatch;
mod types;

pub use color::Color;
pub use colorspace::{hex_to_hsl, hsl_to_hex, Hsl};
pub use error::{ChartpalError, ColorParseError, ImportError, OptionsError, Result};
pub use export::to_stylesheet;
pub use import::{import_hex_tokens, import_text, Import, ManualImport};
pub use palette::{generate_accessible_palette, generate_palette_with, PaletteOptions};
pub use stylesheet::{extract_named_colors, parse_colors};
pub use swatch::{color_name, unique_colors, DEFAULT_SLOTS, MAX_SLOTS};
pub use types::{ColorConfig, NamedColor};
