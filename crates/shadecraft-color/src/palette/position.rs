use crate::oklch::string_to_oklch;

/// Shade slot `0..=8` a seed color naturally occupies, by lightness.
pub fn determine_palette_position(color: &str) -> usize {
    position_for_lightness(string_to_oklch(color).l)
}

/// Piecewise lightness-to-slot mapping, weighted toward the middle slots.
///
/// | lightness      | slots |
/// |----------------|-------|
/// | `>= 0.95`      | 0     |
/// | `0.70..0.95`   | 2..0  |
/// | `0.50..0.70`   | 4..2  |
/// | `0.30..0.50`   | 6..4  |
/// | `0.15..0.30`   | 8..6  |
/// | `<= 0.15`      | 8     |
pub fn position_for_lightness(l: f64) -> usize {
    let slot = if l >= 0.95 {
        0.0
    } else if l <= 0.15 {
        8.0
    } else if l < 0.3 {
        (8.0 - (l - 0.15) / 0.15 * 2.0).round()
    } else if l < 0.5 {
        (6.0 - (l - 0.3) / 0.2 * 2.0).round()
    } else if l < 0.7 {
        (4.0 - (l - 0.5) / 0.2 * 2.0).round()
    } else {
        (2.0 - (l - 0.7) / 0.25 * 2.0).round()
    };
    slot.clamp(0.0, 8.0) as usize
}

/// Palette index (100, 200, ...) of a zero-based slot.
pub fn index_for_position(position: usize) -> u32 {
    (position as u32 + 1) * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_saturate() {
        assert_eq!(determine_palette_position("#ffffff"), 0);
        assert_eq!(determine_palette_position("#000000"), 8);
        assert_eq!(position_for_lightness(0.95), 0);
        assert_eq!(position_for_lightness(0.15), 8);
    }

    #[test]
    fn band_edges() {
        assert_eq!(position_for_lightness(0.3), 6);
        assert_eq!(position_for_lightness(0.5), 4);
        assert_eq!(position_for_lightness(0.7), 2);
        assert_eq!(position_for_lightness(0.6), 3);
        assert_eq!(position_for_lightness(0.2), 7);
    }

    #[test]
    fn always_in_range() {
        for i in 0..=1000 {
            let slot = position_for_lightness(f64::from(i) / 1000.0);
            assert!(slot <= 8, "slot {slot} for lightness {i}");
        }
        assert!(position_for_lightness(f64::NAN) <= 8);
        assert_eq!(position_for_lightness(-1.0), 8);
        assert_eq!(position_for_lightness(2.0), 0);
    }

    #[test]
    fn mid_blue_sits_in_the_middle() {
        // #3b82f6 has HSL lightness ~0.598
        assert_eq!(determine_palette_position("#3b82f6"), 3);
    }

    #[test]
    fn unparseable_uses_fallback_lightness() {
        assert_eq!(determine_palette_position("nope"), 4);
    }

    #[test]
    fn index_for_position_is_one_based_hundreds() {
        assert_eq!(index_for_position(0), 100);
        assert_eq!(index_for_position(4), 500);
        assert_eq!(index_for_position(8), 900);
    }
}
