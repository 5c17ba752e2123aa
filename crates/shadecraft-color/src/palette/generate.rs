use shadecraft_common::{ColorEntry, Oklch};

use super::position::{index_for_position, position_for_lightness};
use super::{MAX_LIGHTNESS, MIN_LIGHTNESS};
use crate::convert::{normalize_hue, oklch_to_hex};
use crate::oklch::{format_oklch, seed_hex, string_to_oklch};

/// Divisor spreading `count` steps over a range; never zero.
fn step_divisor(count: usize) -> f64 {
    count.saturating_sub(1).max(1) as f64
}

fn entry(position: usize, oklch: Oklch) -> ColorEntry {
    ColorEntry {
        index: index_for_position(position),
        hex: oklch_to_hex(oklch),
        oklch: format_oklch(oklch),
    }
}

/// Build a palette from one seed by sweeping lightness from light to dark
/// while holding chroma and hue.
///
/// The step at the seed's own position is the seed itself, copied verbatim
/// rather than recomputed, so it round-trips exactly.
pub fn generate_palette(seed: &str, count: usize) -> Vec<ColorEntry> {
    let color = string_to_oklch(seed);
    let base_position = position_for_lightness(color.l);
    let lightness_range = MAX_LIGHTNESS - MIN_LIGHTNESS;
    let divisor = step_divisor(count);

    (0..count)
        .map(|i| {
            if i == base_position {
                ColorEntry {
                    index: index_for_position(i),
                    hex: seed_hex(seed),
                    oklch: format_oklch(color),
                }
            } else {
                let lightness = MAX_LIGHTNESS - (i as f64 * (lightness_range / divisor));
                entry(i, Oklch::new(lightness, color.c, color.h))
            }
        })
        .collect()
}

/// Build a palette by interpolating from `first` to `second`.
///
/// Lightness and chroma are lerped linearly; hue takes the shorter way
/// around the circle. No step is copied from the seeds.
pub fn generate_palette_from_two_colors(first: &str, second: &str, count: usize) -> Vec<ColorEntry> {
    let from = string_to_oklch(first);
    let to = string_to_oklch(second);
    let divisor = step_divisor(count);

    let (mut h1, mut h2) = (from.h, to.h);
    if (h2 - h1).abs() > 180.0 {
        if h1 < h2 {
            h1 += 360.0;
        } else {
            h2 += 360.0;
        }
    }

    (0..count)
        .map(|i| {
            let ratio = i as f64 / divisor;
            let l = from.l + (to.l - from.l) * ratio;
            let c = from.c + (to.c - from.c) * ratio;
            let h = normalize_hue(h1 + (h2 - h1) * ratio);
            entry(i, Oklch::new(l, c, h))
        })
        .collect()
}
