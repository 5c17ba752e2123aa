//! Color values: the named-color shortcuts and `rgb()`/`rgba()` normalization.

use regex::Regex;
use std::sync::LazyLock;

use crate::arbitrary::arbitrary;

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\((\d+),\s*(\d+),\s*(\d+)(?:,\s*([\d.]+))?\)").unwrap()
});

/// CSS color values with a dedicated Tailwind color name.
const COMMON_COLORS: &[(&str, &str)] = &[
    ("#000", "black"),
    ("#000000", "black"),
    ("#fff", "white"),
    ("#ffffff", "white"),
    ("black", "black"),
    ("currentcolor", "current"),
    ("inherit", "inherit"),
    ("transparent", "transparent"),
    ("white", "white"),
];

/// Tailwind color name for `value`, compared case-insensitively.
pub(crate) fn common_color(value: &str) -> Option<&'static str> {
    let lower = value.to_ascii_lowercase();
    COMMON_COLORS
        .iter()
        .find(|(css, _)| *css == lower)
        .map(|(_, name)| *name)
}

/// Rewrite a comma-separated `rgb()`/`rgba()` as `rgba(r, g, b, a)`.
///
/// Values the pattern does not recognize are returned unchanged.
pub(crate) fn normalize_rgb(value: &str) -> String {
    match RGBA_RE.captures(value) {
        Some(caps) => format!(
            "rgba({}, {}, {}, {})",
            &caps[1],
            &caps[2],
            &caps[3],
            caps.get(4).map_or("1", |a| a.as_str())
        ),
        None => value.to_string(),
    }
}

/// Class for a color under `prefix` (`text`, `bg`, `border`).
pub(crate) fn color_class(prefix: &str, value: &str) -> String {
    if let Some(name) = common_color(value) {
        return format!("{prefix}-{name}");
    }
    if value.starts_with("rgb") {
        return arbitrary(prefix, &normalize_rgb(value));
    }
    arbitrary(prefix, value)
}

/// `color`
pub(crate) fn text_color(value: &str) -> String {
    color_class("text", value)
}
