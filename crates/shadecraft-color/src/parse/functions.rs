//! Internal color parsing helpers.
//!
//! Handles the low-level conversion of hex and functional notations into
//! [`Color`] values. Not part of the public API.

use regex::Regex;
use shadecraft_common::{Color, Hsl};
use std::sync::LazyLock;

use crate::convert::{hsl_to_rgb, normalize_hue};

/// Regex for hex color: #RGB, #RGBA, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})$").unwrap()
});

/// Regex for a color function call; captures the name and the raw arguments.
pub(crate) static FUNCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(rgba?|hsla?)\(\s*([^()]*?)\s*\)$").unwrap());

/// Parse a lowercase hex color string.
pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    let hex = &s[1..];
    match hex.len() {
        3 | 4 => {
            // Expand #RGB(A) to #RRGGBB(AA)
            let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|v| v * 17);
            let r = nibble(0).ok()?;
            let g = nibble(1).ok()?;
            let b = nibble(2).ok()?;
            let a = if hex.len() == 4 { nibble(3).ok()? } else { 255 };
            Some(Color::from_rgba(r, g, b, a))
        }
        _ => Color::from_hex(s),
    }
}

/// Parse `rgb()`, `rgba()`, `hsl()` or `hsla()`.
pub(super) fn parse_function(s: &str) -> Option<Color> {
    let caps = FUNCTION_RE.captures(s)?;
    let name = caps.get(1)?.as_str();
    let args = split_args(caps.get(2)?.as_str())?;

    let alpha = match args.get(3) {
        Some(a) => parse_alpha(a)?,
        None => 255,
    };

    if name.starts_with("rgb") {
        let r = parse_rgb_channel(args[0])?;
        let g = parse_rgb_channel(args[1])?;
        let b = parse_rgb_channel(args[2])?;
        return Some(Color::from_rgba(r, g, b, alpha));
    }

    let h = parse_number(args[0].strip_suffix("deg").unwrap_or(args[0]))?;
    let s = parse_percentage(args[1])?;
    let l = parse_percentage(args[2])?;
    let rgb = hsl_to_rgb(Hsl {
        h: normalize_hue(h),
        s: s.clamp(0.0, 1.0),
        l: l.clamp(0.0, 1.0),
    });
    Some(Color::from_rgba(rgb.r, rgb.g, rgb.b, alpha))
}

/// Split comma syntax (`1, 2, 3, 0.5`) or space syntax (`1 2 3 / 0.5`)
/// into three or four arguments.
fn split_args(raw: &str) -> Option<Vec<&str>> {
    let args: Vec<&str> = if raw.contains(',') {
        raw.split(',').map(str::trim).collect()
    } else {
        let (channels, alpha) = match raw.split_once('/') {
            Some((channels, alpha)) => (channels, Some(alpha.trim())),
            None => (raw, None),
        };
        let mut args: Vec<&str> = channels.split_whitespace().collect();
        if let Some(alpha) = alpha {
            if args.len() != 3 {
                return None;
            }
            args.push(alpha);
        }
        args
    };

    if (3..=4).contains(&args.len()) && args.iter().all(|a| !a.is_empty()) {
        Some(args)
    } else {
        None
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `0-255` or a percentage; out-of-range values are clamped.
fn parse_rgb_channel(s: &str) -> Option<u8> {
    let value = match s.strip_suffix('%') {
        Some(pct) => parse_number(pct)? / 100.0 * 255.0,
        None => parse_number(s)?,
    };
    Some(value.round().clamp(0.0, 255.0) as u8)
}

/// Percentage as a unit fraction; a bare number is read as a percentage.
fn parse_percentage(s: &str) -> Option<f64> {
    Some(parse_number(s.strip_suffix('%').unwrap_or(s))? / 100.0)
}

/// Alpha as `0.0-1.0` or a percentage, converted to 0-255.
fn parse_alpha(s: &str) -> Option<u8> {
    let alpha = match s.strip_suffix('%') {
        Some(pct) => parse_number(pct)? / 100.0,
        None => parse_number(s)?,
    };
    Some((alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}
