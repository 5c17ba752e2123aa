//! Palette generation defaults.

use serde::{Deserialize, Serialize};

/// How many seeds a palette is generated from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PaletteMode {
    #[default]
    Single,
    Two,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Theme name used in generated custom property names.
    pub name: String,
    pub seed: String,
    /// Second seed, used only in `two` mode.
    pub second_seed: String,
    /// Number of steps (valid range: 1-20).
    pub count: u32,
    pub mode: PaletteMode,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            name: "theme".into(),
            seed: "#3b82f6".into(),
            second_seed: "#8b5cf6".into(),
            count: 9,
            mode: PaletteMode::Single,
        }
    }
}
