//! Error types for the chartpal crate.
//!
//! Stylesheet scanning never fails: unresolvable values fall back to black and
//! missing blocks yield empty lists. Errors only surface at the edges where a
//! caller hands us something that must be exactly right (a literal color, a
//! batch of pasted tokens, tuning options).

use thiserror::Error;

/// Errors from parsing a literal `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The input was empty or only whitespace.
    #[error("empty color string")]
    Empty,

    /// The input did not start with `#`.
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    /// The digits after `#` were not exactly six characters long.
    #[error("color must have 6 hex digits, got {0}")]
    InvalidLength(usize),

    /// One of the six characters was not a hex digit.
    #[error("invalid hex digits in color '{0}'")]
    InvalidHex(String),
}

/// Errors from importing manually entered colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// Nothing but whitespace was supplied.
    #[error("no input to import")]
    Empty,

    /// Tokens were present but none of them was a valid color.
    #[error("no valid color values found in {tokens} token(s)")]
    NoValidColors { tokens: usize },
}

/// Errors from validating [`PaletteOptions`](crate::PaletteOptions).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The ideal saturation/lightness point lies outside `0..=100`.
    #[error("ideal point ({saturation}, {lightness}) must lie within 0..=100")]
    InvalidIdeal { saturation: i32, lightness: i32 },

    /// The lightness clamp is inverted or outside `0..=100`.
    #[error("lightness range {min}..={max} is not a valid percentage range")]
    InvalidLightnessRange { min: i32, max: i32 },

    /// The options document could not be read as YAML.
    #[error("malformed options: {0}")]
    Malformed(String),
}

/// Umbrella error for callers that do not care which stage failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartpalError {
    #[error(transparent)]
    Color(#[from] ColorParseError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Options(#[from] OptionsError),
}

/// Result type for chartpal operations.
pub type Result<T> = std::result::Result<T, ChartpalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_valid_colors_display() {
        let err = ImportError::NoValidColors { tokens: 3 };
        let msg = err.to_string();
        assert!(msg.contains("no valid color"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_lightness_range_display() {
        let err = OptionsError::InvalidLightnessRange { min: 70, max: 45 };
        assert!(err.to_string().contains("70..=45"));
    }

    #[test]
    fn test_umbrella_from_conversion() {
        let err: ChartpalError = ColorParseError::InvalidLength(3).into();
        assert_eq!(err.to_string(), "color must have 6 hex digits, got 3");
    }
}
