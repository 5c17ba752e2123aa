//! Theme serialization: palette entries rendered as Tailwind `@theme`
//! blocks or plain CSS custom properties.
//!
//! Every value passes through the sanitizer before it is written, so an
//! edited swatch cannot smuggle rules into the generated stylesheet.

mod generate;
mod sanitize;

pub use generate::{generate_css_variables, generate_tailwind_theme, wrap_root};
pub use sanitize::{sanitize_theme_name, validate_css_color, DEFAULT_THEME_NAME};
