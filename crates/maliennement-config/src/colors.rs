//! Color parsing and validation for config values.
//!
//! Config colors are hex strings: `#RGB`, `#RRGGBB`, or `#RRGGBBAA`.

use std::sync::LazyLock;

use maliennement_common::{Color, ConfigError};
use regex::Regex;

/// Hex color: #RGB, #RRGGBB, or #RRGGBBAA.
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("hex color regex")
});

/// Parse a config color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();
    if !HEX_RE.is_match(s) {
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    let digits = &s[1..];
    let expanded;
    let digits = if digits.len() == 3 {
        expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
        expanded.as_str()
    } else {
        digits
    };

    Color::from_hex(digits).ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")))
}

/// Whether a string is a color the shell accepts.
pub fn validate_color(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}
