//! Properties whose values map one-to-one onto utility classes.

use crate::arbitrary::{arbitrary, arbitrary_property};

/// How a value missing from a [`KeywordTable`] is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// `[property:value]`
    Property,
    /// `prefix-[value]`
    Prefix(&'static str),
}

/// A literal value-to-class table for one CSS property.
#[derive(Debug, PartialEq, Eq)]
pub struct KeywordTable {
    pub property: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
    pub fallback: Fallback,
}

impl KeywordTable {
    /// Class for `value`, compared exactly.
    pub fn lookup(&self, value: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(css, _)| *css == value)
            .map(|(_, class)| *class)
    }

    pub fn translate(&self, value: &str) -> String {
        match (self.lookup(value), self.fallback) {
            (Some(class), _) => class.to_string(),
            (None, Fallback::Property) => arbitrary_property(self.property, value),
            (None, Fallback::Prefix(prefix)) => arbitrary(prefix, value),
        }
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

pub static DISPLAY: KeywordTable = KeywordTable {
    property: "display",
    entries: &[
        ("block", "block"),
        ("inline-block", "inline-block"),
        ("inline", "inline"),
        ("flex", "flex"),
        ("inline-flex", "inline-flex"),
        ("grid", "grid"),
        ("inline-grid", "inline-grid"),
        ("none", "hidden"),
        ("table", "table"),
        ("table-cell", "table-cell"),
        ("table-row", "table-row"),
        ("flow-root", "flow-root"),
        ("contents", "contents"),
    ],
    fallback: Fallback::Property,
};

pub static POSITION: KeywordTable = KeywordTable {
    property: "position",
    entries: &[
        ("static", "static"),
        ("relative", "relative"),
        ("absolute", "absolute"),
        ("fixed", "fixed"),
        ("sticky", "sticky"),
    ],
    fallback: Fallback::Property,
};

pub static Z_INDEX: KeywordTable = KeywordTable {
    property: "z-index",
    entries: &[
        ("0", "z-0"),
        ("10", "z-10"),
        ("20", "z-20"),
        ("30", "z-30"),
        ("40", "z-40"),
        ("50", "z-50"),
        ("auto", "z-auto"),
    ],
    fallback: Fallback::Prefix("z"),
};

pub static OVERFLOW: KeywordTable = KeywordTable {
    property: "overflow",
    entries: &[
        ("auto", "overflow-auto"),
        ("hidden", "overflow-hidden"),
        ("visible", "overflow-visible"),
        ("scroll", "overflow-scroll"),
    ],
    fallback: Fallback::Property,
};

pub static OVERFLOW_X: KeywordTable = KeywordTable {
    property: "overflow-x",
    entries: &[
        ("auto", "overflow-x-auto"),
        ("hidden", "overflow-x-hidden"),
        ("visible", "overflow-x-visible"),
        ("scroll", "overflow-x-scroll"),
    ],
    fallback: Fallback::Property,
};

pub static OVERFLOW_Y: KeywordTable = KeywordTable {
    property: "overflow-y",
    entries: &[
        ("auto", "overflow-y-auto"),
        ("hidden", "overflow-y-hidden"),
        ("visible", "overflow-y-visible"),
        ("scroll", "overflow-y-scroll"),
    ],
    fallback: Fallback::Property,
};

// =============================================================================
// FLEXBOX
// =============================================================================

pub static FLEX_DIRECTION: KeywordTable = KeywordTable {
    property: "flex-direction",
    entries: &[
        ("row", "flex-row"),
        ("row-reverse", "flex-row-reverse"),
        ("column", "flex-col"),
        ("column-reverse", "flex-col-reverse"),
    ],
    fallback: Fallback::Property,
};

pub static FLEX_WRAP: KeywordTable = KeywordTable {
    property: "flex-wrap",
    entries: &[
        ("wrap", "flex-wrap"),
        ("nowrap", "flex-nowrap"),
        ("wrap-reverse", "flex-wrap-reverse"),
    ],
    fallback: Fallback::Property,
};

pub static JUSTIFY_CONTENT: KeywordTable = KeywordTable {
    property: "justify-content",
    entries: &[
        ("flex-start", "justify-start"),
        ("flex-end", "justify-end"),
        ("center", "justify-center"),
        ("space-between", "justify-between"),
        ("space-around", "justify-around"),
        ("space-evenly", "justify-evenly"),
        ("start", "justify-start"),
        ("end", "justify-end"),
    ],
    fallback: Fallback::Property,
};

pub static ALIGN_ITEMS: KeywordTable = KeywordTable {
    property: "align-items",
    entries: &[
        ("flex-start", "items-start"),
        ("flex-end", "items-end"),
        ("center", "items-center"),
        ("baseline", "items-baseline"),
        ("stretch", "items-stretch"),
        ("start", "items-start"),
        ("end", "items-end"),
    ],
    fallback: Fallback::Property,
};

pub static ALIGN_SELF: KeywordTable = KeywordTable {
    property: "align-self",
    entries: &[
        ("auto", "self-auto"),
        ("flex-start", "self-start"),
        ("flex-end", "self-end"),
        ("center", "self-center"),
        ("baseline", "self-baseline"),
        ("stretch", "self-stretch"),
        ("start", "self-start"),
        ("end", "self-end"),
    ],
    fallback: Fallback::Property,
};

// =============================================================================
// TYPOGRAPHY
// =============================================================================

pub static FONT_SIZE: KeywordTable = KeywordTable {
    property: "font-size",
    entries: &[
        ("0.75rem", "text-xs"),
        ("0.875rem", "text-sm"),
        ("1rem", "text-base"),
        ("1.125rem", "text-lg"),
        ("1.25rem", "text-xl"),
        ("1.5rem", "text-2xl"),
        ("1.875rem", "text-3xl"),
        ("2.25rem", "text-4xl"),
        ("3rem", "text-5xl"),
        ("3.75rem", "text-6xl"),
        ("4.5rem", "text-7xl"),
        ("6rem", "text-8xl"),
        ("8rem", "text-9xl"),
        ("12px", "text-xs"),
        ("14px", "text-sm"),
        ("16px", "text-base"),
        ("18px", "text-lg"),
        ("20px", "text-xl"),
        ("24px", "text-2xl"),
        ("30px", "text-3xl"),
        ("36px", "text-4xl"),
        ("48px", "text-5xl"),
        ("60px", "text-6xl"),
        ("72px", "text-7xl"),
        ("96px", "text-8xl"),
        ("128px", "text-9xl"),
    ],
    fallback: Fallback::Prefix("text"),
};

pub static FONT_WEIGHT: KeywordTable = KeywordTable {
    property: "font-weight",
    entries: &[
        ("100", "font-thin"),
        ("200", "font-extralight"),
        ("300", "font-light"),
        ("400", "font-normal"),
        ("500", "font-medium"),
        ("600", "font-semibold"),
        ("700", "font-bold"),
        ("800", "font-extrabold"),
        ("900", "font-black"),
        ("normal", "font-normal"),
        ("bold", "font-bold"),
    ],
    fallback: Fallback::Prefix("font"),
};

pub static TEXT_ALIGN: KeywordTable = KeywordTable {
    property: "text-align",
    entries: &[
        ("left", "text-left"),
        ("center", "text-center"),
        ("right", "text-right"),
        ("justify", "text-justify"),
    ],
    fallback: Fallback::Property,
};

pub static TEXT_TRANSFORM: KeywordTable = KeywordTable {
    property: "text-transform",
    entries: &[
        ("uppercase", "uppercase"),
        ("lowercase", "lowercase"),
        ("capitalize", "capitalize"),
        ("none", "normal-case"),
    ],
    fallback: Fallback::Property,
};

pub static WHITE_SPACE: KeywordTable = KeywordTable {
    property: "white-space",
    entries: &[
        ("nowrap", "whitespace-nowrap"),
        ("pre", "whitespace-pre"),
        ("pre-line", "whitespace-pre-line"),
        ("pre-wrap", "whitespace-pre-wrap"),
        ("normal", "whitespace-normal"),
    ],
    fallback: Fallback::Property,
};

// =============================================================================
// INTERACTIVITY
// =============================================================================

pub static CURSOR: KeywordTable = KeywordTable {
    property: "cursor",
    entries: &[
        ("auto", "cursor-auto"),
        ("default", "cursor-default"),
        ("pointer", "cursor-pointer"),
        ("wait", "cursor-wait"),
        ("text", "cursor-text"),
        ("move", "cursor-move"),
        ("help", "cursor-help"),
        ("not-allowed", "cursor-not-allowed"),
        ("none", "cursor-none"),
        ("context-menu", "cursor-context-menu"),
        ("progress", "cursor-progress"),
        ("cell", "cursor-cell"),
        ("crosshair", "cursor-crosshair"),
        ("vertical-text", "cursor-vertical-text"),
        ("alias", "cursor-alias"),
        ("copy", "cursor-copy"),
        ("no-drop", "cursor-no-drop"),
        ("grab", "cursor-grab"),
        ("grabbing", "cursor-grabbing"),
        ("all-scroll", "cursor-all-scroll"),
        ("col-resize", "cursor-col-resize"),
        ("row-resize", "cursor-row-resize"),
        ("n-resize", "cursor-n-resize"),
        ("e-resize", "cursor-e-resize"),
        ("s-resize", "cursor-s-resize"),
        ("w-resize", "cursor-w-resize"),
        ("ne-resize", "cursor-ne-resize"),
        ("nw-resize", "cursor-nw-resize"),
        ("se-resize", "cursor-se-resize"),
        ("sw-resize", "cursor-sw-resize"),
        ("ew-resize", "cursor-ew-resize"),
        ("ns-resize", "cursor-ns-resize"),
        ("nesw-resize", "cursor-nesw-resize"),
        ("nwse-resize", "cursor-nwse-resize"),
        ("zoom-in", "cursor-zoom-in"),
        ("zoom-out", "cursor-zoom-out"),
    ],
    fallback: Fallback::Prefix("cursor"),
};

// =============================================================================
// TESTS
// =============================================================================
