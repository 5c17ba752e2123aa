//! Flex sizing, text decoration, transitions, transforms and opacity.

use crate::arbitrary::{arbitrary, arbitrary_property, leading_int, leading_number};
use crate::nearest::{nearest, DURATIONS, OPACITIES};

/// `flex`
pub(crate) fn flex(value: &str) -> String {
    match value {
        "1" => "flex-1".to_string(),
        "auto" => "flex-auto".to_string(),
        "initial" => "flex-initial".to_string(),
        "none" => "flex-none".to_string(),
        _ => arbitrary("flex", value),
    }
}

/// `text-decoration`; the first recognized line keyword wins.
pub(crate) fn text_decoration(value: &str) -> String {
    if value.contains("underline") {
        "underline".to_string()
    } else if value.contains("line-through") {
        "line-through".to_string()
    } else if value.contains("none") {
        "no-underline".to_string()
    } else {
        arbitrary_property("text-decoration", value)
    }
}

/// `text-overflow`
pub(crate) fn text_overflow(value: &str) -> String {
    if value == "ellipsis" {
        // `truncate` also implies overflow-hidden and whitespace-nowrap.
        "truncate".to_string()
    } else {
        arbitrary_property("text-overflow", value)
    }
}

/// `transition`, classified by the first property family it mentions.
pub(crate) fn transition(value: &str) -> String {
    let class = if value == "none" {
        "transition-none"
    } else if value.contains("all") {
        "transition-all"
    } else if value.contains("color") {
        "transition-colors"
    } else if value.contains("opacity") {
        "transition-opacity"
    } else if value.contains("shadow") {
        "transition-shadow"
    } else if value.contains("transform") {
        "transition-transform"
    } else {
        return arbitrary("transition", value);
    };
    class.to_string()
}

/// `transform`
pub(crate) fn transform(value: &str) -> String {
    if value == "none" {
        "transform-none".to_string()
    } else {
        "transform".to_string()
    }
}

/// `transition-duration`, snapped to the nearest stock duration.
///
/// Only the leading integer is read, so `0.3s` counts as `0`.
pub(crate) fn transition_duration(value: &str) -> String {
    match leading_int(value).and_then(|ms| nearest(DURATIONS, ms)) {
        Some(ms) => format!("duration-{ms}"),
        None => arbitrary("duration", value),
    }
}

/// `opacity`, snapped to the nearest stock percentage.
pub(crate) fn opacity(value: &str) -> String {
    let percent = leading_number(value).map(|v| (v * 100.0 + 0.5).floor());
    match percent.and_then(|p| nearest(OPACITIES, p)) {
        Some(p) => format!("opacity-{p}"),
        None => arbitrary("opacity", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flex_values() {
        assert_eq!(flex("1"), "flex-1");
        assert_eq!(flex("none"), "flex-none");
        assert_eq!(flex("1 1 0%"), "flex-[1_1_0%]");
    }

    #[test]
    fn decorations() {
        assert_eq!(text_decoration("underline dotted"), "underline");
        assert_eq!(text_decoration("line-through"), "line-through");
        assert_eq!(text_decoration("none"), "no-underline");
        assert_eq!(text_decoration("overline"), "[text-decoration:overline]");
        assert_eq!(text_overflow("ellipsis"), "truncate");
        assert_eq!(text_overflow("clip"), "[text-overflow:clip]");
    }

    #[test]
    fn transitions() {
        assert_eq!(transition("none"), "transition-none");
        assert_eq!(transition("all 0.2s ease"), "transition-all");
        assert_eq!(transition("background-color 150ms"), "transition-colors");
        assert_eq!(transition("opacity 1s"), "transition-opacity");
        assert_eq!(transition("box-shadow 1s"), "transition-shadow");
        assert_eq!(transition("transform 1s"), "transition-transform");
        assert_eq!(transition("width 1s"), "transition-[width_1s]");
    }

    #[test]
    fn transforms() {
        assert_eq!(transform("none"), "transform-none");
        assert_eq!(transform("rotate(45deg)"), "transform");
    }

    #[test]
    fn durations_snap() {
        assert_eq!(transition_duration("150ms"), "duration-150");
        assert_eq!(transition_duration("160ms"), "duration-150");
        assert_eq!(transition_duration("125ms"), "duration-100");
        assert_eq!(transition_duration("5000ms"), "duration-1000");
        assert_eq!(transition_duration("0.3s"), "duration-75");
        assert_eq!(transition_duration("fast"), "duration-[fast]");
    }

    #[test]
    fn opacity_snaps() {
        assert_eq!(opacity("0.8"), "opacity-80");
        assert_eq!(opacity("0.33"), "opacity-30");
        assert_eq!(opacity("0.15"), "opacity-10");
        assert_eq!(opacity("0.125"), "opacity-10");
        assert_eq!(opacity("1"), "opacity-100");
        assert_eq!(opacity("0"), "opacity-0");
        assert_eq!(opacity("50%"), "opacity-100");
        assert_eq!(opacity("var(--o)"), "opacity-[var(--o)]");
    }
}
