//! `box-shadow`

use crate::arbitrary::{arbitrary, leading_number};

/// Tailwind's stock shadows, matched verbatim.
const CANONICAL_SHADOWS: &[(&str, &str)] = &[
    ("0 1px 2px 0 rgba(0, 0, 0, 0.05)", "shadow-sm"),
    (
        "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
        "shadow",
    ),
    (
        "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
        "shadow-md",
    ),
    (
        "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
        "shadow-lg",
    ),
    (
        "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
        "shadow-xl",
    ),
    ("0 25px 50px -12px rgba(0, 0, 0, 0.25)", "shadow-2xl"),
    ("inset 0 2px 4px 0 rgba(0, 0, 0, 0.06)", "shadow-inner"),
];

/// Largest x offset, y offset and blur for each size, smallest first.
const SIZE_LIMITS: &[(f64, f64, f64, &str)] = &[
    (1.0, 3.0, 6.0, "shadow"),
    (4.0, 6.0, 10.0, "shadow-md"),
    (10.0, 15.0, 20.0, "shadow-lg"),
    (20.0, 25.0, 30.0, "shadow-xl"),
    (25.0, 50.0, 50.0, "shadow-2xl"),
];

pub(crate) fn box_shadow(value: &str) -> String {
    if value == "none" {
        return "shadow-none".to_string();
    }
    if let Some((_, class)) = CANONICAL_SHADOWS.iter().find(|(css, _)| *css == value) {
        return (*class).to_string();
    }
    if value.contains("px") && !value.contains(',') {
        if let Some(class) = estimate_size(value) {
            return class.to_string();
        }
    }
    arbitrary("shadow", value)
}

/// Bucket a single `x y blur ...` shadow by its offsets and blur.
fn estimate_size(value: &str) -> Option<&'static str> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let [x, y, blur, ..] = parts.as_slice() else {
        return None;
    };
    let x = leading_number(x)?;
    let y = leading_number(y)?;
    let blur = leading_number(blur)?;

    if x == 0.0 && y == 0.0 && blur <= 4.0 {
        return Some("shadow-sm");
    }
    SIZE_LIMITS
        .iter()
        .find(|(max_x, max_y, max_blur, _)| x.abs() <= *max_x && y.abs() <= *max_y && blur <= *max_blur)
        .map(|(_, _, _, class)| *class)
}
