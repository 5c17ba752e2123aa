//! Luminance and readable foreground selection for swatch backgrounds.

use crate::convert::hex_to_rgb;

/// Luminance assumed for colors that are not `#rrggbb`.
pub const UNKNOWN_LUMINANCE: f64 = 0.5;

/// WCAG 2.0 relative luminance of a `#rrggbb` color.
pub fn relative_luminance(hex: &str) -> f64 {
    let Some(rgb) = hex_to_rgb(hex) else {
        return UNKNOWN_LUMINANCE;
    };

    let linear = |channel: u8| {
        let v = f64::from(channel) / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linear(rgb.r) + 0.7152 * linear(rgb.g) + 0.0722 * linear(rgb.b)
}

/// Black or white text, whichever reads better on `background`.
pub fn text_color_for(background: &str) -> &'static str {
    if relative_luminance(background) > 0.5 {
        "#000000"
    } else {
        "#ffffff"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_extremes() {
        assert_eq!(relative_luminance("#000000"), 0.0);
        assert!((relative_luminance("#ffffff") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_weights_green_heaviest() {
        let r = relative_luminance("#ff0000");
        let g = relative_luminance("#00ff00");
        let b = relative_luminance("#0000ff");
        assert!(g > r && r > b);
        assert!((g - 0.7152).abs() < 1e-9);
    }

    #[test]
    fn unknown_hex_gets_midpoint() {
        assert_eq!(relative_luminance("#fff"), UNKNOWN_LUMINANCE);
        assert_eq!(relative_luminance("red"), UNKNOWN_LUMINANCE);
    }

    #[test]
    fn text_color_contrasts_background() {
        assert_eq!(text_color_for("#ffffff"), "#000000");
        assert_eq!(text_color_for("#fde68a"), "#000000");
        assert_eq!(text_color_for("#000000"), "#ffffff");
        assert_eq!(text_color_for("#3b82f6"), "#ffffff");
        // midpoint is not strictly above the threshold
        assert_eq!(text_color_for("oops"), "#ffffff");
    }
}
