//! The set of CSS properties with a dedicated translation.
//!
//! Every supported property is a [`Property`] variant, and
//! [`Property::translate`] routes it to its handler. Adding a property means
//! adding a variant, which the compiler then forces through both
//! [`Property::from_name`] and [`Property::name`].

use crate::handlers::{
    background, border, box_model, color, effects, keyword, shadow, BoxEdge, KeywordTable, Side,
};
use crate::spacing::map_spacing_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    // -- Borders & backgrounds --
    BorderRadius,
    Border,
    Background,
    BackgroundColor,
    BoxShadow,

    // -- Box model --
    Margin,
    MarginSide(Side),
    Padding,
    PaddingSide(Side),
    Width,
    Height,

    // -- Layout --
    Display,
    Position,
    Inset(Side),
    ZIndex,
    Overflow,
    OverflowX,
    OverflowY,

    // -- Flexbox --
    Flex,
    FlexDirection,
    FlexWrap,
    JustifyContent,
    AlignItems,
    AlignSelf,
    Gap,
    RowGap,
    ColumnGap,

    // -- Typography --
    Color,
    FontSize,
    FontWeight,
    TextAlign,
    TextTransform,
    TextDecoration,
    TextOverflow,
    WhiteSpace,

    // -- Effects --
    Cursor,
    Transition,
    Transform,
    TransitionDuration,
    Opacity,
}

impl Property {
    /// Every supported property, in no particular order.
    pub const ALL: &'static [Property] = &[
        Property::BorderRadius,
        Property::Border,
        Property::Background,
        Property::BackgroundColor,
        Property::BoxShadow,
        Property::Margin,
        Property::MarginSide(Side::Top),
        Property::MarginSide(Side::Right),
        Property::MarginSide(Side::Bottom),
        Property::MarginSide(Side::Left),
        Property::Padding,
        Property::PaddingSide(Side::Top),
        Property::PaddingSide(Side::Right),
        Property::PaddingSide(Side::Bottom),
        Property::PaddingSide(Side::Left),
        Property::Width,
        Property::Height,
        Property::Display,
        Property::Position,
        Property::Inset(Side::Top),
        Property::Inset(Side::Right),
        Property::Inset(Side::Bottom),
        Property::Inset(Side::Left),
        Property::ZIndex,
        Property::Overflow,
        Property::OverflowX,
        Property::OverflowY,
        Property::Flex,
        Property::FlexDirection,
        Property::FlexWrap,
        Property::JustifyContent,
        Property::AlignItems,
        Property::AlignSelf,
        Property::Gap,
        Property::RowGap,
        Property::ColumnGap,
        Property::Color,
        Property::FontSize,
        Property::FontWeight,
        Property::TextAlign,
        Property::TextTransform,
        Property::TextDecoration,
        Property::TextOverflow,
        Property::WhiteSpace,
        Property::Cursor,
        Property::Transition,
        Property::Transform,
        Property::TransitionDuration,
        Property::Opacity,
    ];

    /// Resolve a CSS property name. Names are matched exactly.
    pub fn from_name(name: &str) -> Option<Self> {
        let property = match name {
            "border-radius" => Property::BorderRadius,
            "border" => Property::Border,
            "background" => Property::Background,
            "background-color" => Property::BackgroundColor,
            "box-shadow" => Property::BoxShadow,
            "margin" => Property::Margin,
            "margin-top" => Property::MarginSide(Side::Top),
            "margin-right" => Property::MarginSide(Side::Right),
            "margin-bottom" => Property::MarginSide(Side::Bottom),
            "margin-left" => Property::MarginSide(Side::Left),
            "padding" => Property::Padding,
            "padding-top" => Property::PaddingSide(Side::Top),
            "padding-right" => Property::PaddingSide(Side::Right),
            "padding-bottom" => Property::PaddingSide(Side::Bottom),
            "padding-left" => Property::PaddingSide(Side::Left),
            "width" => Property::Width,
            "height" => Property::Height,
            "display" => Property::Display,
            "position" => Property::Position,
            "top" => Property::Inset(Side::Top),
            "right" => Property::Inset(Side::Right),
            "bottom" => Property::Inset(Side::Bottom),
            "left" => Property::Inset(Side::Left),
            "z-index" => Property::ZIndex,
            "overflow" => Property::Overflow,
            "overflow-x" => Property::OverflowX,
            "overflow-y" => Property::OverflowY,
            "flex" => Property::Flex,
            "flex-direction" => Property::FlexDirection,
            "flex-wrap" => Property::FlexWrap,
            "justify-content" => Property::JustifyContent,
            "align-items" => Property::AlignItems,
            "align-self" => Property::AlignSelf,
            "gap" => Property::Gap,
            "row-gap" => Property::RowGap,
            "column-gap" => Property::ColumnGap,
            "color" => Property::Color,
            "font-size" => Property::FontSize,
            "font-weight" => Property::FontWeight,
            "text-align" => Property::TextAlign,
            "text-transform" => Property::TextTransform,
            "text-decoration" => Property::TextDecoration,
            "text-overflow" => Property::TextOverflow,
            "white-space" => Property::WhiteSpace,
            "cursor" => Property::Cursor,
            "transition" => Property::Transition,
            "transform" => Property::Transform,
            "transition-duration" => Property::TransitionDuration,
            "opacity" => Property::Opacity,
            _ => return None,
        };
        Some(property)
    }

    /// The CSS property name.
    pub fn name(self) -> &'static str {
        match self {
            Property::BorderRadius => "border-radius",
            Property::Border => "border",
            Property::Background => "background",
            Property::BackgroundColor => "background-color",
            Property::BoxShadow => "box-shadow",
            Property::Margin => "margin",
            Property::MarginSide(Side::Top) => "margin-top",
            Property::MarginSide(Side::Right) => "margin-right",
            Property::MarginSide(Side::Bottom) => "margin-bottom",
            Property::MarginSide(Side::Left) => "margin-left",
            Property::Padding => "padding",
            Property::PaddingSide(Side::Top) => "padding-top",
            Property::PaddingSide(Side::Right) => "padding-right",
            Property::PaddingSide(Side::Bottom) => "padding-bottom",
            Property::PaddingSide(Side::Left) => "padding-left",
            Property::Width => "width",
            Property::Height => "height",
            Property::Display => "display",
            Property::Position => "position",
            Property::Inset(side) => side.keyword(),
            Property::ZIndex => "z-index",
            Property::Overflow => "overflow",
            Property::OverflowX => "overflow-x",
            Property::OverflowY => "overflow-y",
            Property::Flex => "flex",
            Property::FlexDirection => "flex-direction",
            Property::FlexWrap => "flex-wrap",
            Property::JustifyContent => "justify-content",
            Property::AlignItems => "align-items",
            Property::AlignSelf => "align-self",
            Property::Gap => "gap",
            Property::RowGap => "row-gap",
            Property::ColumnGap => "column-gap",
            Property::Color => "color",
            Property::FontSize => "font-size",
            Property::FontWeight => "font-weight",
            Property::TextAlign => "text-align",
            Property::TextTransform => "text-transform",
            Property::TextDecoration => "text-decoration",
            Property::TextOverflow => "text-overflow",
            Property::WhiteSpace => "white-space",
            Property::Cursor => "cursor",
            Property::Transition => "transition",
            Property::Transform => "transform",
            Property::TransitionDuration => "transition-duration",
            Property::Opacity => "opacity",
        }
    }

    /// The literal lookup table backing this property, if it has one.
    pub fn keyword_table(self) -> Option<&'static KeywordTable> {
        let table = match self {
            Property::Display => &keyword::DISPLAY,
            Property::Position => &keyword::POSITION,
            Property::ZIndex => &keyword::Z_INDEX,
            Property::Overflow => &keyword::OVERFLOW,
            Property::OverflowX => &keyword::OVERFLOW_X,
            Property::OverflowY => &keyword::OVERFLOW_Y,
            Property::FlexDirection => &keyword::FLEX_DIRECTION,
            Property::FlexWrap => &keyword::FLEX_WRAP,
            Property::JustifyContent => &keyword::JUSTIFY_CONTENT,
            Property::AlignItems => &keyword::ALIGN_ITEMS,
            Property::AlignSelf => &keyword::ALIGN_SELF,
            Property::FontSize => &keyword::FONT_SIZE,
            Property::FontWeight => &keyword::FONT_WEIGHT,
            Property::TextAlign => &keyword::TEXT_ALIGN,
            Property::TextTransform => &keyword::TEXT_TRANSFORM,
            Property::WhiteSpace => &keyword::WHITE_SPACE,
            Property::Cursor => &keyword::CURSOR,
            _ => return None,
        };
        Some(table)
    }

    /// Translate a trimmed value into one or more space-separated classes.
    pub fn translate(self, value: &str) -> String {
        match self {
            Property::BorderRadius => border::border_radius(value),
            Property::Border => border::border(value),
            Property::Background | Property::BackgroundColor => background::background(value),
            Property::BoxShadow => shadow::box_shadow(value),
            Property::Margin => box_model::shorthand(BoxEdge::Margin, value),
            Property::MarginSide(side) => box_model::side(BoxEdge::Margin, side, value),
            Property::Padding => box_model::shorthand(BoxEdge::Padding, value),
            Property::PaddingSide(side) => box_model::side(BoxEdge::Padding, side, value),
            Property::Width => box_model::width(value),
            Property::Height => box_model::height(value),
            Property::Inset(side) => box_model::inset(side, value),
            Property::Gap => map_spacing_value("gap", value),
            Property::RowGap => map_spacing_value("gap-y", value),
            Property::ColumnGap => map_spacing_value("gap-x", value),
            Property::Color => color::text_color(value),
            Property::Flex => effects::flex(value),
            Property::TextDecoration => effects::text_decoration(value),
            Property::TextOverflow => effects::text_overflow(value),
            Property::Transition => effects::transition(value),
            Property::Transform => effects::transform(value),
            Property::TransitionDuration => effects::transition_duration(value),
            Property::Opacity => effects::opacity(value),
            Property::Display => keyword::DISPLAY.translate(value),
            Property::Position => keyword::POSITION.translate(value),
            Property::ZIndex => keyword::Z_INDEX.translate(value),
            Property::Overflow => keyword::OVERFLOW.translate(value),
            Property::OverflowX => keyword::OVERFLOW_X.translate(value),
            Property::OverflowY => keyword::OVERFLOW_Y.translate(value),
            Property::FlexDirection => keyword::FLEX_DIRECTION.translate(value),
            Property::FlexWrap => keyword::FLEX_WRAP.translate(value),
            Property::JustifyContent => keyword::JUSTIFY_CONTENT.translate(value),
            Property::AlignItems => keyword::ALIGN_ITEMS.translate(value),
            Property::AlignSelf => keyword::ALIGN_SELF.translate(value),
            Property::FontSize => keyword::FONT_SIZE.translate(value),
            Property::FontWeight => keyword::FONT_WEIGHT.translate(value),
            Property::TextAlign => keyword::TEXT_ALIGN.translate(value),
            Property::TextTransform => keyword::TEXT_TRANSFORM.translate(value),
            Property::WhiteSpace => keyword::WHITE_SPACE.translate(value),
            Property::Cursor => keyword::CURSOR.translate(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &property in Property::ALL {
            assert_eq!(Property::from_name(property.name()), Some(property));
        }
        assert_eq!(Property::ALL.len(), 49);
    }

    #[test]
    fn unknown_names() {
        assert_eq!(Property::from_name("grid-template-columns"), None);
        assert_eq!(Property::from_name("Display"), None);
        assert_eq!(Property::from_name(""), None);
    }

    #[test]
    fn keyword_tables_match_their_property() {
        for &property in Property::ALL {
            if let Some(table) = property.keyword_table() {
                assert_eq!(table.property, property.name());
                assert_eq!(property.translate("__nope"), table.translate("__nope"));
            }
        }
    }

    #[test]
    fn translations_never_contain_double_quotes() {
        let values = ["\"a b\"", "1px \"x\"", "auto", "16px", "rgb(1,2,3)", ""];
        for &property in Property::ALL {
            for value in values {
                let classes = property.translate(value);
                assert!(!classes.contains('"'), "{} {value} -> {classes}", property.name());
            }
        }
    }

    #[test]
    fn background_color_shares_background() {
        assert_eq!(Property::BackgroundColor.translate("black"), "bg-black");
        assert_eq!(
            Property::BackgroundColor.translate("linear-gradient(#000, #fff)"),
            "bg-gradient-to-b from-[#000] to-[#fff]"
        );
    }

    #[test]
    fn gap_axes() {
        assert_eq!(Property::Gap.translate("16px"), "gap-4");
        assert_eq!(Property::RowGap.translate("8px"), "gap-y-2");
        assert_eq!(Property::ColumnGap.translate("1rem"), "gap-x-4");
    }
}
