use serde::{Deserialize, Serialize};

/// Rendering used when printing a palette.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum OutputFormat {
    /// Tailwind v4 `@theme` block.
    #[default]
    Tailwind,
    /// Plain CSS custom properties.
    Css,
    /// JSON array of palette entries.
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Wrap `css` output in a `:root` rule.
    pub wrap_root: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Tailwind,
            wrap_root: true,
        }
    }
}
