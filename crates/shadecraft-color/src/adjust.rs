use shadecraft_common::{ColorAdjustment, ColorEntry, Oklch};

use crate::convert::{normalize_hue, oklch_to_hex};
use crate::oklch::{format_oklch, string_to_oklch};

/// Index given to an adjusted color when the adjustment names none.
pub const DEFAULT_ADJUSTED_INDEX: u32 = 500;

/// Override any of lightness, chroma or hue on `color` and re-render it.
pub fn adjust_color(color: &str, adjustment: &ColorAdjustment) -> ColorEntry {
    let base = string_to_oklch(color);
    let oklch = Oklch {
        l: adjustment.lightness.unwrap_or(base.l),
        c: adjustment.chroma.unwrap_or(base.c),
        h: normalize_hue(adjustment.hue.unwrap_or(base.h)),
    };

    ColorEntry {
        index: adjustment
            .index
            .filter(|&index| index != 0)
            .unwrap_or(DEFAULT_ADJUSTED_INDEX),
        hex: oklch_to_hex(oklch),
        oklch: format_oklch(oklch),
    }
}
