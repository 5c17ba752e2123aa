//! General CSS color parsing.
//!
//! Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()` and
//! `hsl()`/`hsla()` in comma or space syntax, `transparent`, and the CSS
//! named colors. Matching is case-insensitive.

mod functions;
mod named;


use shadecraft_common::{Color, ColorParseError};

use functions::{parse_function, parse_hex, FUNCTION_RE, HEX_RE};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ColorParseError> {
    let s = s.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if s.starts_with('#') {
        return parse_hex(&s).ok_or(ColorParseError::InvalidHex(s));
    }

    if s.starts_with("rgb") || s.starts_with("hsl") {
        return parse_function(&s).ok_or(ColorParseError::InvalidFunction(s));
    }

    if s == "transparent" {
        return Ok(Color::from_rgba(0, 0, 0, 0));
    }

    named::lookup(&s)
        .map(|[r, g, b]| Color::from_rgb(r, g, b))
        .ok_or(ColorParseError::UnknownName(s))
}

/// Whether a string is a color [`parse_color`] accepts.
pub fn validate_color(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    if lower.is_empty() {
        return false;
    }
    if lower.starts_with('#') {
        return HEX_RE.is_match(&lower);
    }
    if !FUNCTION_RE.is_match(&lower) && (lower.starts_with("rgb") || lower.starts_with("hsl")) {
        return false;
    }
    parse_color(&lower).is_ok()
}
