//! Stylesheet scanning.
//!
//! Two entry points read stylesheet text:
//!
//! - [`parse_colors`] picks out the chart colors for light and dark mode.
//! - [`extract_named_colors`] collects every color declaration with its name.
//!
//! Both sit on the declaration scanners in [`scanner`], which sweep raw text
//! rather than parse CSS, so partial files and bare variable lists work too.

mod named;
mod parser;
pub mod scanner;

pub use named::extract_named_colors;
pub use parser::{parse_colors, VariableTable, DARK_SELECTOR, LIGHT_SELECTOR, SEMANTIC_NAMES};
