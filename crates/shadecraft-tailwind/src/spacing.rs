//! The Tailwind spacing scale, shared by margin, padding, gap, sizing and
//! positional offsets.

use crate::arbitrary::{arbitrary, leading_number};

/// Pixel length to scale token, sorted by pixel length.
pub const SPACING_SCALE: &[(u32, &str)] = &[
    (0, "0"),
    (1, "px"),
    (2, "0.5"),
    (4, "1"),
    (6, "1.5"),
    (8, "2"),
    (10, "2.5"),
    (12, "3"),
    (14, "3.5"),
    (16, "4"),
    (20, "5"),
    (24, "6"),
    (28, "7"),
    (32, "8"),
    (36, "9"),
    (40, "10"),
    (44, "11"),
    (48, "12"),
    (56, "14"),
    (64, "16"),
    (80, "20"),
    (96, "24"),
    (112, "28"),
    (128, "32"),
    (144, "36"),
    (160, "40"),
    (176, "44"),
    (192, "48"),
    (208, "52"),
    (224, "56"),
    (240, "60"),
    (256, "64"),
    (288, "72"),
    (320, "80"),
    (384, "96"),
];

/// Pixels per `rem`.
pub const REM_PX: f64 = 16.0;

/// Scale token for an exact pixel length.
pub fn scale_token(px: f64) -> Option<&'static str> {
    if px < 0.0 || px.fract() != 0.0 || px > f64::from(u32::MAX) {
        return None;
    }
    let px = px as u32;
    SPACING_SCALE
        .binary_search_by_key(&px, |&(len, _)| len)
        .ok()
        .map(|i| SPACING_SCALE[i].1)
}

/// Scale token for a `px` length such as `"16px"`.
pub fn px_token(value: &str) -> Option<&'static str> {
    if !value.ends_with("px") {
        return None;
    }
    scale_token(leading_number(value)?)
}

/// Map one spacing value to `<prefix>-<token>`.
///
/// A leading `-` produces the negated class. `0`/`0px` and `auto` map
/// directly, `px` and `rem` lengths go through the scale, and anything
/// else becomes an arbitrary value.
pub fn map_spacing_value(prefix: &str, value: &str) -> String {
    let (negative, magnitude) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };

    if magnitude == "0" || magnitude == "0px" {
        return format!("{prefix}-0");
    }
    if magnitude == "auto" {
        return format!("{prefix}-auto");
    }

    let token = if magnitude.ends_with("rem") {
        leading_number(magnitude).and_then(|rem| scale_token(rem * REM_PX))
    } else {
        px_token(magnitude)
    };

    match (token, negative) {
        (Some(token), false) => format!("{prefix}-{token}"),
        (Some(token), true) => format!("-{prefix}-{token}"),
        (None, false) => arbitrary(prefix, value),
        (None, true) => format!("-{}", arbitrary(prefix, magnitude)),
    }
}
