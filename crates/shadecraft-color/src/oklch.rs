//! The `oklch(L C H)` string form and free-form color resolution.

use regex::Regex;
use shadecraft_common::{Color, Oklch};
use std::sync::LazyLock;
use tracing::debug;

use crate::convert::{hex_to_rgb, normalize_hue, oklch_to_hex, rgb_to_oklch};
use crate::parse::parse_color;

static OKLCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)oklch\(\s*([0-9.]+)\s+([0-9.]+)\s+([0-9.]+)\s*\)").unwrap()
});

/// Serialize as `oklch(L C H)` with three decimals per channel.
pub fn format_oklch(oklch: Oklch) -> String {
    format!("oklch({:.3} {:.3} {:.3})", oklch.l, oklch.c, oklch.h)
}

/// Parse the first `oklch(L C H)` in `s`. The hue is normalized.
pub fn parse_oklch(s: &str) -> Option<Oklch> {
    let caps = OKLCH_RE.captures(s)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<f64>().ok();
    Some(Oklch {
        l: channel(1)?,
        c: channel(2)?,
        h: normalize_hue(channel(3)?),
    })
}

/// Resolve any color string to a triple. Never fails.
///
/// `oklch(...)` strings are taken as-is; anything else goes through the CSS
/// color parser and the 6-digit hex stage. A failure anywhere (including a
/// translucent color, whose hex carries an alpha byte) yields
/// [`Oklch::FALLBACK`].
pub fn string_to_oklch(input: &str) -> Oklch {
    if let Some(oklch) = parse_oklch(input) {
        return oklch;
    }

    match parse_color(input) {
        Ok(color) => {
            let hex = color.to_hex();
            match hex_to_rgb(&hex) {
                Some(rgb) => rgb_to_oklch(rgb),
                None => {
                    debug!(input, hex, "color is not opaque, using fallback triple");
                    Oklch::FALLBACK
                }
            }
        }
        Err(e) => {
            debug!(input, error = %e, "unparseable color, using fallback triple");
            Oklch::FALLBACK
        }
    }
}

/// The seed's normalized lowercase `#rrggbb`.
///
/// Opaque CSS colors keep their own hex; everything else renders whatever
/// [`string_to_oklch`] resolved it to.
pub fn seed_hex(seed: &str) -> String {
    parse_color(seed)
        .ok()
        .filter(Color::is_opaque)
        .map(|color| color.to_hex())
        .unwrap_or_else(|| oklch_to_hex(string_to_oklch(seed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_uses_three_decimals() {
        assert_eq!(
            format_oklch(Oklch::new(0.5, 0.1, 0.0)),
            "oklch(0.500 0.100 0.000)"
        );
        assert_eq!(
            format_oklch(Oklch::new(0.98, 0.2, 217.2)),
            "oklch(0.980 0.200 217.200)"
        );
    }

    #[test]
    fn parse_accepts_space_separated_channels() {
        let oklch = parse_oklch("oklch(0.62 0.19 259.8)").unwrap();
        assert_eq!(oklch, Oklch::new(0.62, 0.19, 259.8));
    }

    #[test]
    fn parse_is_case_insensitive_and_tolerates_padding() {
        let oklch = parse_oklch("OKLCH(  0.1  0.2  30 )").unwrap();
        assert_eq!(oklch, Oklch::new(0.1, 0.2, 30.0));
    }

    #[test]
    fn parse_normalizes_hue() {
        let oklch = parse_oklch("oklch(0.5 0.1 400)").unwrap();
        assert_eq!(oklch.h, 40.0);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(parse_oklch("oklch(0.5, 0.1, 20)"), None);
        assert_eq!(parse_oklch("oklch(0.5 0.1)"), None);
        assert_eq!(parse_oklch("oklch(1.2.3 0.1 20)"), None);
        assert_eq!(parse_oklch("#ff0000"), None);
    }

    #[test]
    fn format_then_parse_is_stable() {
        let s = format_oklch(Oklch::new(0.25, 0.125, 200.0));
        assert_eq!(format_oklch(parse_oklch(&s).unwrap()), s);
    }

    #[test]
    fn string_to_oklch_prefers_oklch_strings() {
        assert_eq!(
            string_to_oklch("oklch(0.700 0.150 120.000)"),
            Oklch::new(0.7, 0.15, 120.0)
        );
    }

    #[test]
    fn string_to_oklch_converts_css_colors() {
        let red = string_to_oklch("red");
        assert_eq!(red.l, 0.5);
        assert!((red.c - 0.4).abs() < 1e-12);
        assert_eq!(red.h, 0.0);

        assert_eq!(string_to_oklch("#ff0000"), red);
        assert_eq!(string_to_oklch("rgb(255, 0, 0)"), red);
    }

    #[test]
    fn string_to_oklch_falls_back() {
        assert_eq!(string_to_oklch(""), Oklch::FALLBACK);
        assert_eq!(string_to_oklch("definitely not a color"), Oklch::FALLBACK);
        assert_eq!(string_to_oklch("#12"), Oklch::FALLBACK);
        assert_eq!(string_to_oklch("rgba(255, 0, 0, 0.5)"), Oklch::FALLBACK);
    }

    #[test]
    fn seed_hex_normalizes_css_colors() {
        assert_eq!(seed_hex("#3B82F6"), "#3b82f6");
        assert_eq!(seed_hex("#abc"), "#aabbcc");
        assert_eq!(seed_hex("white"), "#ffffff");
    }

    #[test]
    fn seed_hex_renders_non_css_inputs() {
        assert_eq!(seed_hex("oklch(0.5 0.4 0)"), "#ff0000");
        assert_eq!(seed_hex("garbage"), oklch_to_hex(Oklch::FALLBACK));
    }
}
