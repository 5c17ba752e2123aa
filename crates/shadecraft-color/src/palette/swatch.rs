//! Editing and looking up entries in a generated palette.

use shadecraft_common::ColorEntry;

use crate::oklch::{format_oklch, string_to_oklch};

/// Entry for a hand-picked hex, with its oklch string recomputed.
pub fn swatch_from_hex(index: u32, hex: &str) -> ColorEntry {
    let hex = hex.trim().to_ascii_lowercase();
    let oklch = format_oklch(string_to_oklch(&hex));
    ColorEntry { index, hex, oklch }
}

/// Replace the entry carrying `index`. Returns `false` if there is none.
pub fn replace_swatch(palette: &mut [ColorEntry], index: u32, hex: &str) -> bool {
    match palette.iter_mut().find(|entry| entry.index == index) {
        Some(entry) => {
            *entry = swatch_from_hex(index, hex);
            true
        }
        None => false,
    }
}

pub fn sort_palette(palette: &mut [ColorEntry]) {
    palette.sort_by_key(|entry| entry.index);
}

/// The color a preview should treat as primary.
///
/// Prefers the seed's slot, then the 500 entry, then slot 4, then slot 0.
pub fn primary_color(palette: &[ColorEntry], base_position: Option<usize>) -> Option<&str> {
    base_position
        .and_then(|p| palette.get(p))
        .or_else(|| palette.iter().find(|entry| entry.index == 500))
        .or_else(|| palette.get(4))
        .or_else(|| palette.first())
        .map(|entry| entry.hex.as_str())
}

/// The entry `offset` slots away from the base slot (negative is lighter).
pub fn relative_color(palette: &[ColorEntry], base_position: usize, offset: isize) -> Option<&str> {
    base_position
        .checked_add_signed(offset)
        .and_then(|i| palette.get(i))
        .map(|entry| entry.hex.as_str())
}
