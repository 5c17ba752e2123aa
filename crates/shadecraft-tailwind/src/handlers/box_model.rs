//! Spacing shorthands, sizing and positional offsets.

use crate::arbitrary::arbitrary;
use crate::spacing::{map_spacing_value, px_token};

/// One edge of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// CSS keyword, also the Tailwind inset prefix.
    pub fn keyword(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    fn initial(self) -> char {
        match self {
            Side::Top => 't',
            Side::Right => 'r',
            Side::Bottom => 'b',
            Side::Left => 'l',
        }
    }
}

/// The box a spacing property applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxEdge {
    Margin,
    Padding,
}

impl BoxEdge {
    fn prefix(self) -> char {
        match self {
            BoxEdge::Margin => 'm',
            BoxEdge::Padding => 'p',
        }
    }

    /// Tailwind prefix for a single side, e.g. `mt` or `pl`.
    pub fn side_prefix(self, side: Side) -> String {
        format!("{}{}", self.prefix(), side.initial())
    }
}

/// `margin` / `padding` with CSS shorthand expansion.
///
/// Two tokens are vertical then horizontal, three are top, horizontal and
/// bottom, four are top, right, bottom and left. Anything longer is kept
/// whole as one arbitrary value.
pub(crate) fn shorthand(edge: BoxEdge, value: &str) -> String {
    let p = edge.prefix();
    if edge == BoxEdge::Margin && value == "auto" {
        return "m-auto".to_string();
    }

    let tokens: Vec<&str> = value.split_whitespace().collect();
    let classes = match tokens.as_slice() {
        [y, x] => vec![
            map_spacing_value(&format!("{p}y"), y),
            map_spacing_value(&format!("{p}x"), x),
        ],
        [top, x, bottom] => vec![
            map_spacing_value(&edge.side_prefix(Side::Top), top),
            map_spacing_value(&format!("{p}x"), x),
            map_spacing_value(&edge.side_prefix(Side::Bottom), bottom),
        ],
        [top, right, bottom, left] => vec![
            map_spacing_value(&edge.side_prefix(Side::Top), top),
            map_spacing_value(&edge.side_prefix(Side::Right), right),
            map_spacing_value(&edge.side_prefix(Side::Bottom), bottom),
            map_spacing_value(&edge.side_prefix(Side::Left), left),
        ],
        [_, _, _, _, _, ..] => vec![arbitrary(&p.to_string(), value)],
        _ => vec![map_spacing_value(&p.to_string(), value)],
    };
    classes.join(" ")
}

/// `margin-top`, `padding-left` and the other single-side forms.
pub(crate) fn side(edge: BoxEdge, side: Side, value: &str) -> String {
    map_spacing_value(&edge.side_prefix(side), value)
}

/// `top` / `right` / `bottom` / `left`
pub(crate) fn inset(side: Side, value: &str) -> String {
    let prefix = side.keyword();
    match value {
        "0" | "0px" => format!("{prefix}-0"),
        "50%" => format!("{prefix}-1/2"),
        "100%" => format!("{prefix}-full"),
        "auto" => format!("{prefix}-auto"),
        _ => map_spacing_value(prefix, value),
    }
}

pub(crate) fn width(value: &str) -> String {
    let class = match value {
        "100%" => "w-full",
        "50%" => "w-1/2",
        "33.333%" | "33.33%" => "w-1/3",
        "66.666%" | "66.67%" => "w-2/3",
        "25%" => "w-1/4",
        "75%" => "w-3/4",
        "20%" => "w-1/5",
        "40%" => "w-2/5",
        "60%" => "w-3/5",
        "80%" => "w-4/5",
        "0" | "0px" => "w-0",
        "auto" => "w-auto",
        "min-content" => "w-min",
        "max-content" => "w-max",
        "fit-content" => "w-fit",
        _ => return scaled("w", value),
    };
    class.to_string()
}

pub(crate) fn height(value: &str) -> String {
    let class = match value {
        "100%" => "h-full",
        "50%" => "h-1/2",
        "25%" => "h-1/4",
        "75%" => "h-3/4",
        "0" | "0px" => "h-0",
        "auto" => "h-auto",
        "min-content" => "h-min",
        "max-content" => "h-max",
        "fit-content" => "h-fit",
        "100vh" => "h-screen",
        _ => return scaled("h", value),
    };
    class.to_string()
}

fn scaled(prefix: &str, value: &str) -> String {
    match px_token(value) {
        Some(token) => format!("{prefix}-{token}"),
        None => arbitrary(prefix, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_shorthand() {
        assert_eq!(shorthand(BoxEdge::Padding, "16px"), "p-4");
        assert_eq!(shorthand(BoxEdge::Margin, "auto"), "m-auto");
        assert_eq!(shorthand(BoxEdge::Padding, "auto"), "p-auto");
        assert_eq!(shorthand(BoxEdge::Margin, "-8px"), "-m-2");
    }

    #[test]
    fn two_value_shorthand() {
        assert_eq!(shorthand(BoxEdge::Padding, "8px 16px"), "py-2 px-4");
        assert_eq!(shorthand(BoxEdge::Margin, "0 auto"), "my-0 mx-auto");
    }

    #[test]
    fn three_value_shorthand() {
        assert_eq!(shorthand(BoxEdge::Margin, "4px 8px 12px"), "mt-1 mx-2 mb-3");
    }

    #[test]
    fn four_value_shorthand() {
        assert_eq!(
            shorthand(BoxEdge::Padding, "1px 2px 3px 4px"),
            "pt-px pr-0.5 pb-[3px] pl-1"
        );
    }

    #[test]
    fn five_tokens_are_one_arbitrary_value() {
        assert_eq!(
            shorthand(BoxEdge::Padding, "1px 2px 3px 4px 5px"),
            "p-[1px_2px_3px_4px_5px]"
        );
        assert_eq!(
            shorthand(BoxEdge::Margin, "0 1px 2px 3px 4px 5px"),
            "m-[0_1px_2px_3px_4px_5px]"
        );
    }

    #[test]
    fn single_sides() {
        assert_eq!(side(BoxEdge::Margin, Side::Top, "16px"), "mt-4");
        assert_eq!(side(BoxEdge::Padding, Side::Left, "1rem"), "pl-4");
        assert_eq!(side(BoxEdge::Margin, Side::Bottom, "-4px"), "-mb-1");
    }

    #[test]
    fn insets() {
        assert_eq!(inset(Side::Top, "0"), "top-0");
        assert_eq!(inset(Side::Right, "50%"), "right-1/2");
        assert_eq!(inset(Side::Bottom, "100%"), "bottom-full");
        assert_eq!(inset(Side::Left, "auto"), "left-auto");
        assert_eq!(inset(Side::Left, "16px"), "left-4");
        assert_eq!(inset(Side::Top, "-8px"), "-top-2");
        assert_eq!(inset(Side::Top, "10%"), "top-[10%]");
    }

    #[test]
    fn widths() {
        assert_eq!(width("100%"), "w-full");
        assert_eq!(width("33.33%"), "w-1/3");
        assert_eq!(width("fit-content"), "w-fit");
        assert_eq!(width("64px"), "w-16");
        assert_eq!(width("65px"), "w-[65px]");
        assert_eq!(width("10rem"), "w-[10rem]");
    }

    #[test]
    fn heights() {
        assert_eq!(height("100vh"), "h-screen");
        assert_eq!(height("50%"), "h-1/2");
        assert_eq!(height("0px"), "h-0");
        assert_eq!(height("384px"), "h-96");
        assert_eq!(height("33.33%"), "h-[33.33%]");
    }
}
