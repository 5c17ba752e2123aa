use serde::{Deserialize, Serialize};

/// Working color representation: lightness `[0, 1]`, chroma `[0, ~0.4]`,
/// hue in degrees `[0, 360)`.
///
/// This is HSL relabeled (`l = hsl.l`, `c = hsl.s * 0.4`, `h = hsl.h`), not
/// the OKLab-derived space. Callers treat the triple opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    /// Substituted for any color input that cannot be parsed.
    pub const FALLBACK: Oklch = Oklch {
        l: 0.5,
        c: 0.1,
        h: 0.0,
    };

    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

/// One palette step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Shade index: 100, 200, ... 900.
    pub index: u32,
    /// `#rrggbb`.
    pub hex: String,
    /// `oklch(L C H)` with three decimals.
    pub oklch: String,
}

/// Partial override applied to a base color. Unset channels keep the base
/// color's value; an unset (or zero) index becomes 500.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorAdjustment {
    pub index: Option<u32>,
    pub lightness: Option<f64>,
    pub chroma: Option<f64>,
    pub hue: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_triple() {
        assert_eq!(Oklch::FALLBACK, Oklch::new(0.5, 0.1, 0.0));
    }

    #[test]
    fn color_entry_serialization() {
        let entry = ColorEntry {
            index: 500,
            hex: "#3b82f6".into(),
            oklch: "oklch(0.598 0.365 217.219)".into(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"index\":500"));
        let back: ColorEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }

    #[test]
    fn adjustment_deserializes_partial() {
        let adj: ColorAdjustment = serde_json::from_str(r#"{"hue": 120.0}"#).unwrap();
        assert_eq!(adj.hue, Some(120.0));
        assert_eq!(adj.index, None);
        assert_eq!(adj.lightness, None);
        assert_eq!(adj.chroma, None);
    }
}
