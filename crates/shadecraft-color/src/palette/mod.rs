//! Palette generation: nine lightness steps derived from one or two seeds.

mod generate;
mod position;
mod swatch;


pub use generate::{generate_palette, generate_palette_from_two_colors};
pub use position::{determine_palette_position, index_for_position, position_for_lightness};
pub use swatch::{primary_color, relative_color, replace_swatch, sort_palette, swatch_from_hex};

/// Number of steps in a standard palette (indices 100 through 900).
pub const DEFAULT_COUNT: usize = 9;

/// Lightness of the darkest generated step.
pub const MIN_LIGHTNESS: f64 = 0.15;

/// Lightness of the lightest generated step.
pub const MAX_LIGHTNESS: f64 = 0.98;
