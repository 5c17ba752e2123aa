//! `background` and `background-color`, including linear gradients.

use regex::Regex;
use std::sync::LazyLock;

use super::color::color_class;
use crate::arbitrary::{arbitrary, escape};

static ANGLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)deg").unwrap());

static KEYWORD_DIRECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"to\s+([a-z]+)(?:\s+([a-z]+))?").unwrap());

const DEFAULT_DIRECTION: &str = "to-b";

pub(crate) fn background(value: &str) -> String {
    if value.contains("linear-gradient") {
        return linear_gradient(value).unwrap_or_else(|| arbitrary("bg", value));
    }
    color_class("bg", value)
}

/// `bg-gradient-<dir> from-[a] [via-[b]] to-[c]` for two or three stops.
fn linear_gradient(value: &str) -> Option<String> {
    let content = gradient_arguments(value)?;
    let direction = gradient_direction(content);

    let stops: Vec<&str> = split_top_level(content)
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.contains("deg") && !s.contains("to "))
        .collect();

    let classes = match stops.as_slice() {
        [from, to] => format!(
            "bg-gradient-{direction} from-[{}] to-[{}]",
            escape(from),
            escape(to)
        ),
        [from, via, to] => format!(
            "bg-gradient-{direction} from-[{}] via-[{}] to-[{}]",
            escape(from),
            escape(via),
            escape(to)
        ),
        _ => return None,
    };
    Some(classes)
}

/// The text between `linear-gradient(` and its matching `)`.
fn gradient_arguments(value: &str) -> Option<&str> {
    let start = value.find("linear-gradient(")? + "linear-gradient(".len();
    let mut depth = 0usize;
    for (i, ch) in value[start..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' if depth == 0 => {
                let content = &value[start..start + i];
                return (!content.is_empty()).then_some(content);
            }
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Comma-separated arguments, ignoring commas nested in parentheses.
fn split_top_level(content: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in content.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&content[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&content[start..]);
    parts
}

fn gradient_direction(content: &str) -> &'static str {
    if content.contains("deg") {
        return ANGLE_RE
            .captures(content)
            // Digits only, so the parse fails on overflow alone.
            .map(|caps| caps[1].parse::<u64>().unwrap_or(u64::MAX))
            .map_or(DEFAULT_DIRECTION, angle_direction);
    }
    if content.contains("to ") {
        if let Some(caps) = KEYWORD_DIRECTION_RE.captures(content) {
            let first = caps.get(1).map(|m| m.as_str());
            let second = caps.get(2).map(|m| m.as_str());
            return keyword_direction(first, second).unwrap_or(DEFAULT_DIRECTION);
        }
    }
    DEFAULT_DIRECTION
}

/// Snap an angle to the nearest of the eight compass directions below it.
fn angle_direction(angle: u64) -> &'static str {
    match angle {
        0..=44 => "to-t",
        45..=89 => "to-tr",
        90..=134 => "to-r",
        135..=179 => "to-br",
        180..=224 => "to-b",
        225..=269 => "to-bl",
        270..=314 => "to-l",
        _ => "to-tl",
    }
}

fn keyword_direction(first: Option<&str>, second: Option<&str>) -> Option<&'static str> {
    let direction = match (first?, second) {
        ("top", None) => "to-t",
        ("top", Some("right")) => "to-tr",
        ("right", None) => "to-r",
        ("bottom", Some("right")) => "to-br",
        ("bottom", None) => "to-b",
        ("bottom", Some("left")) => "to-bl",
        ("left", None) => "to-l",
        ("top", Some("left")) => "to-tl",
        _ => return None,
    };
    Some(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_backgrounds() {
        assert_eq!(background("white"), "bg-white");
        assert_eq!(background("#FFF"), "bg-white");
        assert_eq!(background("transparent"), "bg-transparent");
        assert_eq!(background("#3b82f6"), "bg-[#3b82f6]");
        assert_eq!(background("rgba(0,0,0,0.5)"), "bg-[rgba(0,_0,_0,_0.5)]");
        assert_eq!(background("url(a.png) no-repeat"), "bg-[url(a.png)_no-repeat]");
    }

    #[test]
    fn keyword_gradient() {
        assert_eq!(
            background("linear-gradient(to right, #6366f1, #8b5cf6)"),
            "bg-gradient-to-r from-[#6366f1] to-[#8b5cf6]"
        );
        assert_eq!(
            background("linear-gradient(to bottom right, red, white, blue)"),
            "bg-gradient-to-br from-[red] via-[white] to-[blue]"
        );
    }

    #[test]
    fn default_direction_is_down() {
        assert_eq!(
            background("linear-gradient(#000, #fff)"),
            "bg-gradient-to-b from-[#000] to-[#fff]"
        );
        assert_eq!(
            background("linear-gradient(to right bottom, #000, #fff)"),
            "bg-gradient-to-b from-[#000] to-[#fff]"
        );
    }

    #[test]
    fn angle_gradient() {
        assert_eq!(
            background("linear-gradient(90deg, #000, #fff)"),
            "bg-gradient-to-r from-[#000] to-[#fff]"
        );
        assert_eq!(
            background("linear-gradient(45deg, #000, #fff)"),
            "bg-gradient-to-tr from-[#000] to-[#fff]"
        );
        assert_eq!(
            background("linear-gradient(350deg, #000, #fff)"),
            "bg-gradient-to-tl from-[#000] to-[#fff]"
        );
    }

    #[test]
    fn angle_buckets() {
        let expected = ["to-t", "to-tr", "to-r", "to-br", "to-b", "to-bl", "to-l", "to-tl"];
        for (i, dir) in expected.iter().enumerate() {
            let lo = i as u64 * 45;
            assert_eq!(angle_direction(lo), *dir);
            assert_eq!(angle_direction(lo + 44), *dir);
        }
        assert_eq!(angle_direction(720), "to-tl");
    }

    #[test]
    fn oversized_angle_is_last_bucket() {
        assert_eq!(
            background("linear-gradient(99999999999deg, #000, #fff)"),
            "bg-gradient-to-tl from-[#000] to-[#fff]"
        );
        assert_eq!(
            background("linear-gradient(123456789012345678901234567890deg, #000, #fff)"),
            "bg-gradient-to-tl from-[#000] to-[#fff]"
        );
    }

    #[test]
    fn nested_color_functions_stay_whole() {
        assert_eq!(
            background("linear-gradient(to top, rgba(0,0,0,0.5), #fff)"),
            "bg-gradient-to-t from-[rgba(0,0,0,0.5)] to-[#fff]"
        );
    }

    #[test]
    fn unsupported_stop_counts_fall_back() {
        assert_eq!(
            background("linear-gradient(red, green, blue, white)"),
            "bg-[linear-gradient(red,_green,_blue,_white)]"
        );
        assert_eq!(
            background("linear-gradient(red)"),
            "bg-[linear-gradient(red)]"
        );
        assert_eq!(background("linear-gradient("), "bg-[linear-gradient(]");
    }

    #[test]
    fn stops_with_positions_are_escaped() {
        assert_eq!(
            background("linear-gradient(#000 0%, #fff 100%)"),
            "bg-gradient-to-b from-[#000_0%] to-[#fff_100%]"
        );
    }
}
