//! `border` and `border-radius`.

use regex::Regex;
use std::sync::LazyLock;

use super::color::color_class;
use crate::arbitrary::{arbitrary, leading_number};

static SOLID_BORDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)px\s+solid\s+(rgba?\([^)]+\)|#[a-fA-F0-9]{3,8}|[a-zA-Z]+)").unwrap()
});

/// `Npx solid <color>` becomes a width class and a color class.
pub(crate) fn border(value: &str) -> String {
    let Some(caps) = SOLID_BORDER_RE.captures(value) else {
        return arbitrary("border", value);
    };

    let width = &caps[1];
    let size = if width == "1" {
        "border".to_string()
    } else {
        format!("border-[{width}px]")
    };
    format!("{size} {}", color_class("border", &caps[2]))
}

pub(crate) fn border_radius(value: &str) -> String {
    if value.ends_with('%') {
        return arbitrary("rounded", value);
    }
    let Some(px) = leading_number(value) else {
        return arbitrary("rounded", value);
    };

    if px == 0.0 {
        "rounded-none".to_string()
    } else if px <= 2.0 {
        "rounded-sm".to_string()
    } else if px <= 4.0 {
        "rounded".to_string()
    } else if px <= 6.0 {
        "rounded-md".to_string()
    } else if px <= 8.0 {
        "rounded-lg".to_string()
    } else if px <= 12.0 {
        "rounded-xl".to_string()
    } else if px <= 16.0 {
        "rounded-2xl".to_string()
    } else if px <= 24.0 {
        "rounded-3xl".to_string()
    } else if px == 9999.0 || px == 100_000.0 {
        "rounded-full".to_string()
    } else {
        arbitrary("rounded", value)
    }
}
