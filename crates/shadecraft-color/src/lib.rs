//! Color engine for shadecraft.
//!
//! Conversions between hex, RGB, HSL and an approximated OKLCH, palette
//! generation from one or two seeds, palette editing, and serialization of
//! palettes into Tailwind `@theme` blocks or CSS custom properties.
//!
//! Every public operation is total: unparseable input resolves to a
//! documented fallback instead of an error.

pub mod adjust;
pub mod contrast;
pub mod convert;
pub mod oklch;
pub mod palette;
pub mod parse;
pub mod theme;

pub use adjust::adjust_color;
pub use contrast::{relative_luminance, text_color_for};
pub use convert::{hex_to_rgb, hsl_to_rgb, oklch_to_hex, rgb_to_hex, rgb_to_hsl, rgb_to_oklch};
pub use oklch::{format_oklch, parse_oklch, seed_hex, string_to_oklch};
pub use palette::{
    determine_palette_position, generate_palette, generate_palette_from_two_colors,
    index_for_position,
};
pub use parse::{parse_color, validate_color};
pub use theme::{generate_css_variables, generate_tailwind_theme, wrap_root};
