//! Conversions between hex, RGB, HSL and the approximated OKLCH triple.
//!
//! The OKLCH here is HSL relabeled: `l = hsl.l`, `c = hsl.s * 0.4`,
//! `h = hsl.h`. Output compatibility depends on keeping it that way.

use shadecraft_common::{Hsl, Oklch, Rgb};

/// Chroma corresponding to full HSL saturation.
pub const CHROMA_SCALE: f64 = 0.4;

/// Parse exactly six hex digits, with an optional leading `#`.
///
/// Shorthand, alpha and named forms return `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// Render `#rrggbb`, lowercase and zero-padded.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    // The sentinel bit keeps leading zero nibbles in the rendering.
    let packed = (1u32 << 24) | (u32::from(rgb.r) << 16) | (u32::from(rgb.g) << 8) | u32::from(rgb.b);
    format!("#{}", &format!("{packed:x}")[1..])
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: h / 6.0 * 360.0,
        s,
        l,
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;
    let h = h / 360.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Scale a unit channel to 0-255, clamping out-of-gamut values.
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn rgb_to_oklch(rgb: Rgb) -> Oklch {
    let hsl = rgb_to_hsl(rgb);
    Oklch {
        l: hsl.l,
        c: hsl.s * CHROMA_SCALE,
        h: hsl.h,
    }
}

pub fn oklch_to_rgb(oklch: Oklch) -> Rgb {
    hsl_to_rgb(Hsl {
        h: oklch.h,
        s: oklch.c / CHROMA_SCALE,
        l: oklch.l,
    })
}

pub fn oklch_to_hex(oklch: Oklch) -> String {
    rgb_to_hex(oklch_to_rgb(oklch))
}

/// Reduce a hue into `[0, 360)`.
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}
